//! Consumable check implementations.
//!
//! One check per tracked consumable:
//! - Engine oil (distance interval with a calendar cap, conservative fusion)
//! - Brakes/tires (distance only, title-driven interval)
//! - Battery (calendar only)

pub mod battery;
pub mod brake_tire;
pub mod engine_oil;

pub use battery::BatteryCheck;
pub use brake_tire::BrakeTireCheck;
pub use engine_oil::EngineOilCheck;

use chrono::{DateTime, Utc};

use crate::maintenance::MaintenanceRecordView;
use crate::vehicles::CarView;

/// Elapsed distance and time since a service record.
///
/// A missing odometer degrades to 0, so a stale baseline shows up as a
/// negative elapsed distance instead of disappearing; the inconsistency is
/// surfaced, never clamped.
pub(crate) fn elapsed_figures(
    car: &CarView,
    mileage: f64,
    record: &MaintenanceRecordView,
    now: DateTime<Utc>,
) -> (f64, i64) {
    let odo_km = car.odo_km.unwrap_or(0.0);
    let elapsed_km = odo_km - mileage;
    let elapsed_days = (now - record.date).num_days();
    (elapsed_km, elapsed_days)
}
