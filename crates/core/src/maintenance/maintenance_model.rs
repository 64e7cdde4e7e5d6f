//! Maintenance-log domain models.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Read-only view of a maintenance record.
///
/// `title` is free text entered by the user; category membership is inferred
/// from it by [`crate::maintenance::classify`], never stored.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct MaintenanceRecordView {
    pub id: String,
    pub car_id: String,
    pub title: String,
    /// Odometer reading at service time, if the user recorded one.
    pub mileage: Option<f64>,
    pub date: DateTime<Utc>,
    pub cost: Option<Decimal>,
}
