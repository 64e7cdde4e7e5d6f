//! Vehicles module - read-only domain views.

mod vehicles_model;

pub use vehicles_model::CarView;
