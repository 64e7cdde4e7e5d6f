//! Core error types for the Motolog engine.
//!
//! Degraded input data never produces an error: missing records, missing
//! mileage, and stale odometers all resolve to well-typed `Unknown` states.
//! Errors exist only for misconfiguration, which is caught at service
//! construction time.

use thiserror::Error;

/// Type alias for Result using our Error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Root error type for the maintenance engine.
#[derive(Error, Debug)]
pub enum Error {
    #[error("Invalid engine configuration: {0}")]
    InvalidConfig(String),

    #[error("Input validation failed: {0}")]
    Validation(String),

    #[error("Unexpected error: {0}")]
    Unexpected(String),
}
