//! Predictive maintenance and vehicle health engine.
//!
//! Fuses a car's odometer state, its usage rate, and its maintenance log
//! into per-consumable wear states and a ranked suggestion list.
//!
//! # Architecture
//!
//! ```text
//! VehicleHealthService → MaintenanceHistory → per-category latest record
//!        ↓                        ↓
//! ConsumableCheck (oil / brake-tire / battery)
//!        ↓
//! ConsumableState → status classifier → ranked Suggestion[]
//! ```
//!
//! - **Models** (`model.rs`) - Status bands, states, suggestions, config
//! - **Traits** (`traits.rs`) - Check and service interfaces, engine context
//! - **Usage** (`usage.rs`) - Monthly average to daily-rate conversion
//! - **Status** (`status.rs`) - Ordered status-band rules
//! - **Checks** (`checks/`) - One estimator per consumable
//! - **Service** (`service.rs`) - Orchestration and ranking
//!
//! The engine is a pure function of its inputs: no I/O, no persistence, no
//! state between invocations. It is re-run in full whenever the caller's
//! live-query snapshot changes, and is safe to call concurrently for any
//! number of cars.

pub mod model;
pub mod status;
pub mod traits;
pub mod usage;

pub mod checks;
pub mod service;

#[cfg(test)]
mod tests;

// Re-export commonly used types
pub use model::{
    ConsumableSpec, ConsumableState, EngineConfig, MaintenanceStatus, Suggestion,
};
pub use traits::{ConsumableCheck, EngineContext, VehicleHealthServiceTrait};

// Re-export service
pub use service::VehicleHealthService;

// Re-export check implementations
pub use checks::{BatteryCheck, BrakeTireCheck, EngineOilCheck};

// Re-export the usage-rate model
pub use usage::daily_rate_km;
