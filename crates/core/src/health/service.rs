//! Vehicle health service implementation.
//!
//! The service wires the history index, the per-consumable checks, and the
//! suggestion ranking together. It holds only configuration; every call is a
//! fresh computation over the caller's snapshot.

use log::{debug, info};
use std::collections::HashSet;

use crate::errors::Result;
use crate::maintenance::{Category, MaintenanceHistory, MaintenanceRecordView};
use crate::vehicles::CarView;

use super::checks::{BatteryCheck, BrakeTireCheck, EngineOilCheck};
use super::model::{ConsumableState, EngineConfig, MaintenanceStatus, Suggestion};
use super::traits::{ConsumableCheck, EngineContext, VehicleHealthServiceTrait};

/// Service for evaluating consumable wear and ranking maintenance
/// suggestions.
pub struct VehicleHealthService {
    config: EngineConfig,

    /// Individual check implementations
    oil_check: EngineOilCheck,
    brake_tire_check: BrakeTireCheck,
    battery_check: BatteryCheck,
}

impl VehicleHealthService {
    /// Creates a health service with the default heuristics.
    pub fn new() -> Self {
        Self {
            config: EngineConfig::default(),
            oil_check: EngineOilCheck::new(),
            brake_tire_check: BrakeTireCheck::new(),
            battery_check: BatteryCheck::new(),
        }
    }

    /// Creates a health service with custom configuration.
    ///
    /// The configuration is validated up front so the estimators never see
    /// degenerate intervals or rates.
    pub fn with_config(config: EngineConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self {
            config,
            oil_check: EngineOilCheck::new(),
            brake_tire_check: BrakeTireCheck::new(),
            battery_check: BatteryCheck::new(),
        })
    }

    /// Returns the active configuration.
    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    fn checks(&self) -> [&dyn ConsumableCheck; 3] {
        [&self.oil_check, &self.brake_tire_check, &self.battery_check]
    }

    /// Runs every check against the snapshot with an explicit context.
    ///
    /// One state per tracked category, in `Category::ALL` order. Exposed so
    /// tests (and callers that need a pinned timestamp) can evaluate
    /// deterministically.
    pub fn run_checks(
        &self,
        car: &CarView,
        records: &[MaintenanceRecordView],
        ctx: &EngineContext,
    ) -> Vec<ConsumableState> {
        let history = MaintenanceHistory::index(&car.id, records);

        let mut states = Vec::with_capacity(self.checks().len());
        for check in self.checks() {
            let latest = history.latest(check.category());
            debug!(
                "Running {} check for car {} (latest record: {})",
                check.id(),
                car.id,
                latest.map(|r| r.id.as_str()).unwrap_or("none")
            );
            states.push(check.estimate(car, latest, ctx));
        }
        states
    }

    /// Builds the ranked suggestion list from already-computed states.
    pub fn rank_suggestions(&self, car: &CarView, states: &[ConsumableState]) -> Vec<Suggestion> {
        let mut seen_ids: HashSet<String> = HashSet::new();
        let mut suggestions: Vec<Suggestion> = Vec::new();

        for state in states {
            // Only actionable signals make the ranked list; Unknown states
            // feed a separate empty-state rendering path in the UI.
            if !state.status.is_actionable() {
                continue;
            }

            let id = format!("{}:{}", state.category.id_key(), car.id);
            if !seen_ids.insert(id.clone()) {
                continue;
            }

            let spec = self.config.spec_for(state.category);
            suggestions.push(Suggestion {
                id,
                category: state.category,
                title: suggestion_title(state.category, state.status),
                status: state.status,
                remaining_km: state.remaining_km,
                remaining_days: state.remaining_days,
                estimated_cost: Some(spec.estimated_cost),
            });
        }

        // Critical before Warning. The sort is stable and the states arrive
        // in Category::ALL order, which doubles as the in-band tie-break.
        suggestions.sort_by(|a, b| b.status.cmp(&a.status));
        suggestions
    }
}

impl Default for VehicleHealthService {
    fn default() -> Self {
        Self::new()
    }
}

impl VehicleHealthServiceTrait for VehicleHealthService {
    fn consumable_states(
        &self,
        car: &CarView,
        records: &[MaintenanceRecordView],
    ) -> Vec<ConsumableState> {
        let ctx = EngineContext::new(self.config.clone());
        self.run_checks(car, records, &ctx)
    }

    fn build_suggestions(
        &self,
        car: &CarView,
        records: &[MaintenanceRecordView],
    ) -> Vec<Suggestion> {
        let ctx = EngineContext::new(self.config.clone());
        let states = self.run_checks(car, records, &ctx);
        let suggestions = self.rank_suggestions(car, &states);

        info!(
            "Vehicle health evaluated for car {}: {} of {} consumables actionable",
            car.id,
            suggestions.len(),
            states.len()
        );
        suggestions
    }
}

fn suggestion_title(category: Category, status: MaintenanceStatus) -> String {
    let work = match category {
        Category::EngineOil => "Engine oil change",
        Category::BrakeTire => "Brake/tire service",
        Category::Battery => "Battery replacement",
    };
    match status {
        MaintenanceStatus::Critical => format!("{} overdue", work),
        _ => format!("{} due soon", work),
    }
}
