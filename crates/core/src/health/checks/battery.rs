//! Battery age check.
//!
//! Calendar axis only: battery life correlates with age far more than with
//! distance, so no distance interval exists for it and `remaining_km` stays
//! empty. The elapsed distance is still reported for display provenance.

use super::elapsed_figures;
use crate::constants::DAYS_PER_MONTH_I64;
use crate::health::model::ConsumableState;
use crate::health::status;
use crate::health::traits::{ConsumableCheck, EngineContext};
use crate::maintenance::{Category, MaintenanceRecordView};
use crate::vehicles::CarView;

/// Check that estimates remaining battery life.
pub struct BatteryCheck;

impl BatteryCheck {
    /// Creates a new battery check.
    pub fn new() -> Self {
        Self
    }
}

impl Default for BatteryCheck {
    fn default() -> Self {
        Self::new()
    }
}

impl ConsumableCheck for BatteryCheck {
    fn id(&self) -> &'static str {
        "battery"
    }

    fn category(&self) -> Category {
        Category::Battery
    }

    fn estimate(
        &self,
        car: &CarView,
        latest_record: Option<&MaintenanceRecordView>,
        ctx: &EngineContext,
    ) -> ConsumableState {
        let spec = &ctx.config.battery;

        let Some(record) = latest_record else {
            return ConsumableState::no_baseline(self.category());
        };
        let Some(mileage) = record.mileage else {
            return ConsumableState::no_baseline(self.category());
        };
        let Some(interval_months) = spec.interval_months else {
            return ConsumableState::no_baseline(self.category());
        };

        let (elapsed_km, elapsed_days) = elapsed_figures(car, mileage, record, ctx.now);
        let remaining_days = interval_months as i64 * DAYS_PER_MONTH_I64 - elapsed_days;

        let mut state = ConsumableState {
            category: self.category(),
            last_service_date: Some(record.date),
            last_service_mileage: Some(mileage),
            elapsed_km: Some(elapsed_km),
            elapsed_days: Some(elapsed_days),
            recommended_interval_km: None,
            recommended_interval_months: Some(interval_months),
            remaining_km: None,
            remaining_days: Some(remaining_days),
            status: Default::default(),
        };
        state.status = status::classify(&state, spec);
        state
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::health::model::{EngineConfig, MaintenanceStatus};
    use chrono::{DateTime, Duration, TimeZone, Utc};

    fn now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2026, 6, 1, 0, 0, 0).unwrap()
    }

    fn car() -> CarView {
        CarView {
            id: "car-1".to_string(),
            odo_km: Some(45_000.0),
            avg_km_per_month: Some(900.0),
            inspection_expiry: None,
        }
    }

    fn battery_record(months_ago: i64) -> MaintenanceRecordView {
        MaintenanceRecordView {
            id: "rec-1".to_string(),
            car_id: "car-1".to_string(),
            title: "Battery replacement".to_string(),
            mileage: Some(30_000.0),
            date: now() - Duration::days(months_ago * 30),
            cost: None,
        }
    }

    fn ctx() -> EngineContext {
        EngineContext::with_timestamp(EngineConfig::default(), now())
    }

    #[test]
    fn test_no_record_yields_unknown() {
        let state = BatteryCheck::new().estimate(&car(), None, &ctx());
        assert_eq!(state.status, MaintenanceStatus::Unknown);
        assert!(state.remaining_days.is_none());
    }

    #[test]
    fn test_young_battery_is_good() {
        let rec = battery_record(12);
        let state = BatteryCheck::new().estimate(&car(), Some(&rec), &ctx());
        assert_eq!(state.remaining_days, Some(24 * 30));
        assert_eq!(state.status, MaintenanceStatus::Good);
        // No distance axis for batteries.
        assert!(state.remaining_km.is_none());
        assert!(state.recommended_interval_km.is_none());
    }

    #[test]
    fn test_battery_at_two_years_is_warning() {
        let rec = battery_record(24);
        let state = BatteryCheck::new().estimate(&car(), Some(&rec), &ctx());
        assert_eq!(state.status, MaintenanceStatus::Warning);
        assert_eq!(state.remaining_days, Some(12 * 30));
    }

    #[test]
    fn test_battery_past_interval_is_critical() {
        let rec = battery_record(37);
        let state = BatteryCheck::new().estimate(&car(), Some(&rec), &ctx());
        assert_eq!(state.remaining_days, Some(-30));
        assert_eq!(state.status, MaintenanceStatus::Critical);
    }

    #[test]
    fn test_elapsed_distance_is_reported_for_provenance() {
        let rec = battery_record(12);
        let state = BatteryCheck::new().estimate(&car(), Some(&rec), &ctx());
        assert_eq!(state.elapsed_km, Some(15_000.0));
    }
}
