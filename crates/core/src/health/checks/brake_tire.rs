//! Brake/tire wear check.
//!
//! Distance axis only. Brakes and tires share one estimator, a simplification
//! carried over from the original logbook: the interval follows the matched
//! record's title, with tire work tracking the longer tire interval and
//! everything else the brake interval.

use super::elapsed_figures;
use crate::health::model::ConsumableState;
use crate::health::status;
use crate::health::traits::{ConsumableCheck, EngineContext};
use crate::health::usage;
use crate::maintenance::{is_tire_work, Category, MaintenanceRecordView};
use crate::vehicles::CarView;

/// Check that estimates remaining brake/tire life.
pub struct BrakeTireCheck;

impl BrakeTireCheck {
    /// Creates a new brake/tire check.
    pub fn new() -> Self {
        Self
    }
}

impl Default for BrakeTireCheck {
    fn default() -> Self {
        Self::new()
    }
}

impl ConsumableCheck for BrakeTireCheck {
    fn id(&self) -> &'static str {
        "brake_tire"
    }

    fn category(&self) -> Category {
        Category::BrakeTire
    }

    fn estimate(
        &self,
        car: &CarView,
        latest_record: Option<&MaintenanceRecordView>,
        ctx: &EngineContext,
    ) -> ConsumableState {
        let spec = &ctx.config.brake_tire;

        let Some(record) = latest_record else {
            return ConsumableState::no_baseline(self.category());
        };
        let Some(mileage) = record.mileage else {
            return ConsumableState::no_baseline(self.category());
        };
        let Some(brake_interval_km) = spec.interval_km else {
            return ConsumableState::no_baseline(self.category());
        };

        let interval_km = if is_tire_work(&record.title) {
            ctx.config.tire_interval_km
        } else {
            brake_interval_km
        };

        let (elapsed_km, elapsed_days) = elapsed_figures(car, mileage, record, ctx.now);
        let rate = usage::daily_rate_km(car, &ctx.config);

        let remaining_km = interval_km - elapsed_km;
        let remaining_days = (remaining_km / rate).floor() as i64;

        let mut state = ConsumableState {
            category: self.category(),
            last_service_date: Some(record.date),
            last_service_mileage: Some(mileage),
            elapsed_km: Some(elapsed_km),
            elapsed_days: Some(elapsed_days),
            recommended_interval_km: Some(interval_km),
            recommended_interval_months: None,
            remaining_km: Some(remaining_km),
            remaining_days: Some(remaining_days),
            status: Default::default(),
        };
        state.status = status::classify(&state, spec);
        state
    }
}
