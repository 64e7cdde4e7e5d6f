//! Usage-rate model.

use crate::constants::DAYS_PER_MONTH;
use crate::health::model::EngineConfig;
use crate::vehicles::CarView;

/// Converts a car's monthly-average distance into a distance-per-day rate.
///
/// Falls back to the configured constant when the monthly average is
/// missing, zero, negative, or non-finite. Total function: the result is
/// always a positive finite number, because callers multiply and divide by
/// it.
pub fn daily_rate_km(car: &CarView, config: &EngineConfig) -> f64 {
    match car.avg_km_per_month {
        Some(avg) if avg.is_finite() && avg > 0.0 => avg / DAYS_PER_MONTH,
        _ => config.fallback_daily_rate_km,
    }
}
