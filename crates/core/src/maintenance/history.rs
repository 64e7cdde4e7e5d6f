//! Per-category maintenance history index.

use std::collections::HashMap;

use super::category::{classify, Category};
use super::maintenance_model::MaintenanceRecordView;

/// Maintenance records for one car, partitioned by consumable category and
/// sorted most-recent-first.
///
/// Built once per engine invocation from the caller's record snapshot; each
/// record is classified exactly once. Records whose title matches no
/// category are dropped here and never reach the estimators.
#[derive(Debug, Clone, Default)]
pub struct MaintenanceHistory {
    by_category: HashMap<Category, Vec<MaintenanceRecordView>>,
}

impl MaintenanceHistory {
    /// Indexes the records belonging to `car_id`.
    ///
    /// Within a category, records are ordered by date descending. Equal
    /// dates keep their input order (stable sort), so the first of two
    /// same-dated records in the input wins `latest`.
    pub fn index(car_id: &str, records: &[MaintenanceRecordView]) -> Self {
        let mut by_category: HashMap<Category, Vec<MaintenanceRecordView>> = HashMap::new();

        for record in records {
            if record.car_id != car_id {
                continue;
            }
            for category in classify(&record.title) {
                by_category
                    .entry(category)
                    .or_default()
                    .push(record.clone());
            }
        }

        for group in by_category.values_mut() {
            group.sort_by(|a, b| b.date.cmp(&a.date));
        }

        Self { by_category }
    }

    /// Returns the most recent record for a category, or `None` when the
    /// car has no matching history.
    pub fn latest(&self, category: Category) -> Option<&MaintenanceRecordView> {
        self.by_category
            .get(&category)
            .and_then(|group| group.first())
    }

    /// All records for a category, most recent first.
    pub fn records(&self, category: Category) -> &[MaintenanceRecordView] {
        self.by_category
            .get(&category)
            .map(|group| group.as_slice())
            .unwrap_or(&[])
    }
}
