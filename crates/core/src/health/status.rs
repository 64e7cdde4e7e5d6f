//! Status-band classifier.
//!
//! Maps a consumable's remaining headroom to a status band. Rules are
//! evaluated in order, first match wins:
//!
//! 1. No baseline on either axis -> `Unknown`.
//! 2. Effective remaining strictly below zero -> `Critical` (exactly zero is
//!    the last not-yet-critical tick).
//! 3. Within the category's near window -> `Warning`.
//! 4. Otherwise -> `Good`.

use crate::constants::DAYS_PER_MONTH_I64;
use crate::health::model::{ConsumableSpec, ConsumableState, MaintenanceStatus};

/// Classifies a computed state against its category's thresholds.
///
/// The state's numeric fields must already be populated (or all `None` for
/// the no-baseline case); this function only reads them.
pub fn classify(state: &ConsumableState, spec: &ConsumableSpec) -> MaintenanceStatus {
    // Rule 1: nothing numeric to judge.
    let effective_remaining = match (state.remaining_km, state.remaining_days) {
        (Some(km), _) => km,
        (None, Some(days)) => days as f64,
        (None, None) => return MaintenanceStatus::Unknown,
    };

    // Rule 2: overdue.
    if effective_remaining < 0.0 {
        return MaintenanceStatus::Critical;
    }

    // Rule 3: near threshold, any axis.
    if is_near(state, spec) {
        return MaintenanceStatus::Warning;
    }

    MaintenanceStatus::Good
}

fn is_near(state: &ConsumableState, spec: &ConsumableSpec) -> bool {
    if let (Some(remaining_km), Some(warn_km)) = (state.remaining_km, spec.warn_within_km) {
        if remaining_km < warn_km {
            return true;
        }
    }
    if let (Some(remaining_days), Some(warn_days)) = (state.remaining_days, spec.warn_within_days) {
        if remaining_days < warn_days {
            return true;
        }
    }
    if let (Some(elapsed_days), Some(warn_months)) = (state.elapsed_days, spec.warn_after_months) {
        if elapsed_days >= warn_months as i64 * DAYS_PER_MONTH_I64 {
            return true;
        }
    }
    false
}
