//! Vehicle domain models.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Read-only view of a car, the field subset the engine consumes.
///
/// The caller owns the full car record (plates, photos, insurance, ...);
/// the engine only ever sees this slice and never mutates it.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct CarView {
    pub id: String,
    /// Authoritative current odometer reading, user-entered.
    pub odo_km: Option<f64>,
    /// User-declared or defaulted monthly usage.
    pub avg_km_per_month: Option<f64>,
    pub inspection_expiry: Option<DateTime<Utc>>,
}

impl CarView {
    /// Creates a car view with just an id, everything else unset.
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            odo_km: None,
            avg_km_per_month: None,
            inspection_expiry: None,
        }
    }
}
