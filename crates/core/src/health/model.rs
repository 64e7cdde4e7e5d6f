//! Vehicle health domain models.
//!
//! This module contains the core data structures for the predictive
//! maintenance engine:
//! - Status bands for consumable wear
//! - Per-consumable derived state
//! - Ranked maintenance suggestions
//! - Configuration for intervals, thresholds, and cost heuristics

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};

use crate::constants::FALLBACK_DAILY_RATE_KM;
use crate::errors::{Error, Result};
use crate::maintenance::Category;

// =============================================================================
// Maintenance Status
// =============================================================================

/// Status band for a consumable.
///
/// Ordered from lowest to highest urgency: Unknown < Good < Warning <
/// Critical. The ordering drives suggestion ranking.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, Default,
)]
#[serde(rename_all = "lowercase")]
pub enum MaintenanceStatus {
    /// No baseline record exists; nothing numeric can be said.
    #[default]
    Unknown,
    Good,
    Warning,
    Critical,
}

impl MaintenanceStatus {
    /// Returns the string representation of this status.
    pub fn as_str(&self) -> &'static str {
        match self {
            MaintenanceStatus::Unknown => "unknown",
            MaintenanceStatus::Good => "good",
            MaintenanceStatus::Warning => "warning",
            MaintenanceStatus::Critical => "critical",
        }
    }

    /// Returns true if the status carries an actionable signal.
    pub fn is_actionable(&self) -> bool {
        matches!(
            self,
            MaintenanceStatus::Warning | MaintenanceStatus::Critical
        )
    }
}

impl std::fmt::Display for MaintenanceStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

// =============================================================================
// Consumable State
// =============================================================================

/// Derived wear state for one consumable of one car.
///
/// Invariant: when `last_service_mileage` is `None` (no usable baseline) all
/// remaining/elapsed fields are `None` and `status` is `Unknown` - the engine
/// never pairs a fabricated number with a numeric-looking `Good`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ConsumableState {
    pub category: Category,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_service_date: Option<DateTime<Utc>>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_service_mileage: Option<f64>,

    /// Distance driven since the last service. Negative when the recorded
    /// service mileage is ahead of the current odometer; surfaced as-is
    /// because the inconsistency itself is the information.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub elapsed_km: Option<f64>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub elapsed_days: Option<i64>,

    /// Recommended distance interval. `None` for the battery, which is
    /// tracked on the calendar axis only.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub recommended_interval_km: Option<f64>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub recommended_interval_months: Option<u32>,

    /// Effective remaining distance before service is due. For oil this is
    /// already the conservative minimum of the distance and calendar axes.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub remaining_km: Option<f64>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub remaining_days: Option<i64>,

    pub status: MaintenanceStatus,
}

impl ConsumableState {
    /// The "no record yet" state: all numeric fields empty, status Unknown.
    pub fn no_baseline(category: Category) -> Self {
        Self {
            category,
            last_service_date: None,
            last_service_mileage: None,
            elapsed_km: None,
            elapsed_days: None,
            recommended_interval_km: None,
            recommended_interval_months: None,
            remaining_km: None,
            remaining_days: None,
            status: MaintenanceStatus::Unknown,
        }
    }

    /// Returns true if this state has no usable baseline.
    pub fn is_unknown(&self) -> bool {
        self.status == MaintenanceStatus::Unknown
    }
}

// =============================================================================
// Suggestion
// =============================================================================

/// An actionable maintenance suggestion.
///
/// Constructed fresh on every engine invocation, never mutated, never
/// persisted by this crate. The id is stable across invocations for the same
/// car/category pair (format: `"engine_oil:<car_id>"`), so the caller can
/// de-duplicate or diff lists between snapshots.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Suggestion {
    pub id: String,
    pub category: Category,
    /// Short, user-facing headline (e.g. "Engine oil change due").
    pub title: String,
    pub status: MaintenanceStatus,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub remaining_km: Option<f64>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub remaining_days: Option<i64>,

    /// Ballpark cost in yen, a fixed per-category heuristic.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub estimated_cost: Option<Decimal>,
}

// =============================================================================
// Engine Config
// =============================================================================

/// Interval, warning-threshold, and cost heuristics for one consumable.
///
/// Axes are optional because the consumables are deliberately asymmetric:
/// brake/tire tracks distance only, battery tracks the calendar only, oil
/// tracks both and takes the more conservative of the two.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ConsumableSpec {
    pub interval_km: Option<f64>,
    pub interval_months: Option<u32>,
    /// Remaining distance below which the status turns Warning.
    pub warn_within_km: Option<f64>,
    /// Remaining days below which the status turns Warning.
    pub warn_within_days: Option<i64>,
    /// Elapsed months at or beyond which the status turns Warning (battery).
    pub warn_after_months: Option<u32>,
    pub estimated_cost: Decimal,
}

/// Configuration for the whole engine.
///
/// One explicit structure instead of call-site magic numbers, so the
/// heuristics are testable and swappable without code changes.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct EngineConfig {
    /// Daily distance assumed when a car has no usable monthly average.
    pub fallback_daily_rate_km: f64,

    /// Distance interval used by the brake/tire estimator when the matched
    /// record was tire work (the longer tire service life).
    pub tire_interval_km: f64,

    pub engine_oil: ConsumableSpec,
    pub brake_tire: ConsumableSpec,
    pub battery: ConsumableSpec,
}

impl EngineConfig {
    /// Returns the spec for a category.
    pub fn spec_for(&self, category: Category) -> &ConsumableSpec {
        match category {
            Category::EngineOil => &self.engine_oil,
            Category::BrakeTire => &self.brake_tire,
            Category::Battery => &self.battery,
        }
    }

    /// Validates that every configured figure keeps downstream arithmetic
    /// well-defined (positive rates and intervals, no NaN).
    pub fn validate(&self) -> Result<()> {
        if !self.fallback_daily_rate_km.is_finite() || self.fallback_daily_rate_km <= 0.0 {
            return Err(Error::InvalidConfig(format!(
                "fallback daily rate must be a positive finite number, got {}",
                self.fallback_daily_rate_km
            )));
        }
        if !self.tire_interval_km.is_finite() || self.tire_interval_km <= 0.0 {
            return Err(Error::InvalidConfig(format!(
                "tire interval must be a positive finite number, got {}",
                self.tire_interval_km
            )));
        }
        for category in Category::ALL {
            let spec = self.spec_for(category);
            if spec.interval_km.is_none() && spec.interval_months.is_none() {
                return Err(Error::InvalidConfig(format!(
                    "{} has neither a distance nor a calendar interval",
                    category.as_str()
                )));
            }
            if let Some(km) = spec.interval_km {
                if !km.is_finite() || km <= 0.0 {
                    return Err(Error::InvalidConfig(format!(
                        "{} distance interval must be a positive finite number, got {}",
                        category.as_str(),
                        km
                    )));
                }
            }
            if let Some(months) = spec.interval_months {
                if months == 0 {
                    return Err(Error::InvalidConfig(format!(
                        "{} calendar interval must be at least one month",
                        category.as_str()
                    )));
                }
            }
        }
        Ok(())
    }
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            fallback_daily_rate_km: FALLBACK_DAILY_RATE_KM,
            tire_interval_km: 40_000.0,
            engine_oil: ConsumableSpec {
                interval_km: Some(5_000.0),
                interval_months: Some(6),
                warn_within_km: Some(1_000.0),
                warn_within_days: Some(30),
                warn_after_months: None,
                estimated_cost: dec!(5000),
            },
            brake_tire: ConsumableSpec {
                interval_km: Some(30_000.0),
                interval_months: None,
                warn_within_km: Some(5_000.0),
                warn_within_days: None,
                warn_after_months: None,
                estimated_cost: dec!(20000),
            },
            battery: ConsumableSpec {
                interval_km: None,
                interval_months: Some(36),
                warn_within_km: None,
                warn_within_days: None,
                warn_after_months: Some(24),
                estimated_cost: dec!(15000),
            },
        }
    }
}

// =============================================================================
// Tests
// =============================================================================
