//! Maintenance module - record views, category inference, history index.

mod category;
mod history;
mod maintenance_model;

pub use category::{classify, is_tire_work, Category};
pub use history::MaintenanceHistory;
pub use maintenance_model::MaintenanceRecordView;
