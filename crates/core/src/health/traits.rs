//! Vehicle health engine traits.
//!
//! - `EngineContext` - configuration plus the evaluation timestamp
//! - `ConsumableCheck` - one wear estimator per tracked consumable
//! - `VehicleHealthServiceTrait` - the engine's public surface

use chrono::{DateTime, Utc};

use super::model::{ConsumableState, EngineConfig, Suggestion};
use crate::maintenance::{Category, MaintenanceRecordView};
use crate::vehicles::CarView;

// =============================================================================
// Engine Context
// =============================================================================

/// Context provided to consumable checks during evaluation.
///
/// Carries the configuration and a single timestamp so every check in one
/// invocation agrees on "now".
#[derive(Debug, Clone)]
pub struct EngineContext {
    pub config: EngineConfig,
    pub now: DateTime<Utc>,
}

impl EngineContext {
    /// Creates a context evaluated at the current wall-clock time.
    pub fn new(config: EngineConfig) -> Self {
        Self {
            config,
            now: Utc::now(),
        }
    }

    /// Creates a context with a specific timestamp (for testing).
    pub fn with_timestamp(config: EngineConfig, now: DateTime<Utc>) -> Self {
        Self { config, now }
    }
}

// =============================================================================
// Consumable Check Trait
// =============================================================================

/// A wear estimator for one consumable category.
///
/// Checks are pure: same car, record, and context always produce the same
/// state, and nothing is read or written outside the arguments. A missing
/// record (or a record without a usable mileage, for distance-tracked
/// consumables) must yield the no-baseline state rather than a fabricated
/// number.
pub trait ConsumableCheck: Send + Sync {
    /// Unique identifier for this check, used in logging.
    fn id(&self) -> &'static str;

    /// The category this check estimates.
    fn category(&self) -> Category;

    /// Estimates the wear state from the most recent matching record.
    fn estimate(
        &self,
        car: &CarView,
        latest_record: Option<&MaintenanceRecordView>,
        ctx: &EngineContext,
    ) -> ConsumableState;
}

// =============================================================================
// Service Trait
// =============================================================================

/// Public surface of the vehicle health engine.
///
/// Both operations take the caller's snapshot by reference, allocate fresh
/// output, and keep no state between calls; they are safe to invoke
/// concurrently for any number of cars.
pub trait VehicleHealthServiceTrait: Send + Sync {
    /// Per-consumable wear states, one per tracked category, including
    /// `Unknown` and `Good` entries. This is the feed for per-consumable
    /// gauges and "no record yet" empty states.
    fn consumable_states(
        &self,
        car: &CarView,
        records: &[MaintenanceRecordView],
    ) -> Vec<ConsumableState>;

    /// Ranked, de-duplicated list of actionable suggestions: Critical first,
    /// then Warning. Empty when every consumable is Good or Unknown.
    fn build_suggestions(
        &self,
        car: &CarView,
        records: &[MaintenanceRecordView],
    ) -> Vec<Suggestion>;
}
