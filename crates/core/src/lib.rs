//! Motolog Core - Predictive maintenance and vehicle health engine.
//!
//! This crate contains the one algorithmic component of the Motolog vehicle
//! logbook: given a snapshot of a car and its maintenance records, it
//! estimates how much distance/time remains before each tracked consumable
//! (engine oil, brakes/tires, battery) needs service and produces a ranked
//! list of actionable suggestions.
//!
//! The engine is stateless, synchronous, and side-effect-free. It performs no
//! I/O and owns no persistence; the calling application layer supplies the
//! snapshot and renders the results.

pub mod constants;
pub mod errors;
pub mod health;
pub mod maintenance;
pub mod vehicles;

// Re-export common types from the maintenance and health modules
pub use health::*;
pub use maintenance::*;
pub use vehicles::*;

// Re-export error types
pub use errors::Error;
pub use errors::Result;
