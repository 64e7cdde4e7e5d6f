//! Engine-oil wear check.
//!
//! Oil is the one consumable tracked on both axes: a distance interval and a
//! secondary calendar cap. The calendar cap is converted into an equivalent
//! distance through the car's usage rate and the effective remaining is the
//! smaller of the two, so whichever constraint is hit first drives the
//! status.

use super::elapsed_figures;
use crate::constants::DAYS_PER_MONTH_I64;
use crate::health::model::ConsumableState;
use crate::health::status;
use crate::health::traits::{ConsumableCheck, EngineContext};
use crate::health::usage;
use crate::maintenance::{Category, MaintenanceRecordView};
use crate::vehicles::CarView;

/// Check that estimates remaining engine-oil life.
pub struct EngineOilCheck;

impl EngineOilCheck {
    /// Creates a new engine-oil check.
    pub fn new() -> Self {
        Self
    }
}

impl Default for EngineOilCheck {
    fn default() -> Self {
        Self::new()
    }
}

impl ConsumableCheck for EngineOilCheck {
    fn id(&self) -> &'static str {
        "engine_oil"
    }

    fn category(&self) -> Category {
        Category::EngineOil
    }

    fn estimate(
        &self,
        car: &CarView,
        latest_record: Option<&MaintenanceRecordView>,
        ctx: &EngineContext,
    ) -> ConsumableState {
        let spec = &ctx.config.engine_oil;

        let Some(record) = latest_record else {
            return ConsumableState::no_baseline(self.category());
        };
        let Some(mileage) = record.mileage else {
            return ConsumableState::no_baseline(self.category());
        };
        // Distance-primary heuristic: without a distance interval there is
        // nothing to estimate against.
        let Some(interval_km) = spec.interval_km else {
            return ConsumableState::no_baseline(self.category());
        };

        let (elapsed_km, elapsed_days) = elapsed_figures(car, mileage, record, ctx.now);
        let rate = usage::daily_rate_km(car, &ctx.config);

        let distance_remaining = interval_km - elapsed_km;
        let mut effective_remaining_km = distance_remaining;

        if let Some(interval_months) = spec.interval_months {
            let cap_days = interval_months as i64 * DAYS_PER_MONTH_I64 - elapsed_days;
            let cap_km = cap_days as f64 * rate;
            if cap_km < effective_remaining_km {
                effective_remaining_km = cap_km;
            }
        }

        let remaining_days = (effective_remaining_km / rate).floor() as i64;

        let mut state = ConsumableState {
            category: self.category(),
            last_service_date: Some(record.date),
            last_service_mileage: Some(mileage),
            elapsed_km: Some(elapsed_km),
            elapsed_days: Some(elapsed_days),
            recommended_interval_km: spec.interval_km,
            recommended_interval_months: spec.interval_months,
            remaining_km: Some(effective_remaining_km),
            remaining_days: Some(remaining_days),
            status: Default::default(),
        };
        state.status = status::classify(&state, spec);
        state
    }
}
