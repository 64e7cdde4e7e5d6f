//! End-to-end scenarios for the vehicle health engine.

use chrono::{DateTime, Duration, TimeZone, Utc};
use rust_decimal_macros::dec;

use crate::health::model::MaintenanceStatus;
use crate::health::service::VehicleHealthService;
use crate::health::traits::{EngineContext, VehicleHealthServiceTrait};
use crate::maintenance::{Category, MaintenanceRecordView};
use crate::vehicles::CarView;

fn now() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2026, 6, 1, 0, 0, 0).unwrap()
}

fn ctx(service: &VehicleHealthService) -> EngineContext {
    EngineContext::with_timestamp(service.config().clone(), now())
}

fn car(odo_km: f64, avg_km_per_month: f64) -> CarView {
    CarView {
        id: "car-1".to_string(),
        odo_km: Some(odo_km),
        avg_km_per_month: Some(avg_km_per_month),
        inspection_expiry: None,
    }
}

fn record(id: &str, title: &str, mileage: f64, days_ago: i64) -> MaintenanceRecordView {
    MaintenanceRecordView {
        id: id.to_string(),
        car_id: "car-1".to_string(),
        title: title.to_string(),
        mileage: Some(mileage),
        date: now() - Duration::days(days_ago),
        cost: None,
    }
}

/// Record dated relative to the wall clock, for tests that go through
/// `build_suggestions` (which evaluates at `Utc::now()`).
fn wall_record(id: &str, title: &str, mileage: f64, days_ago: i64) -> MaintenanceRecordView {
    MaintenanceRecordView {
        id: id.to_string(),
        car_id: "car-1".to_string(),
        title: title.to_string(),
        mileage: Some(mileage),
        date: Utc::now() - Duration::days(days_ago),
        cost: None,
    }
}

#[test]
fn test_no_history_yields_unknown_everywhere_and_no_suggestions() {
    let service = VehicleHealthService::new();
    let car = car(45_000.0, 900.0);

    let states = service.run_checks(&car, &[], &ctx(&service));
    assert_eq!(states.len(), Category::ALL.len());
    for state in &states {
        assert_eq!(state.status, MaintenanceStatus::Unknown);
        assert!(state.remaining_km.is_none());
        assert!(state.remaining_days.is_none());
        assert!(state.elapsed_km.is_none());
        assert!(state.elapsed_days.is_none());
    }

    assert!(service.rank_suggestions(&car, &states).is_empty());
}

#[test]
fn test_fresh_car_with_zero_odometer_yields_empty_list() {
    let service = VehicleHealthService::new();
    let fresh = CarView {
        id: "car-1".to_string(),
        odo_km: Some(0.0),
        avg_km_per_month: None,
        inspection_expiry: None,
    };

    assert!(service.build_suggestions(&fresh, &[]).is_empty());
}

#[test]
fn test_states_cover_every_category_in_priority_order() {
    let service = VehicleHealthService::new();
    let states = service.run_checks(&car(45_000.0, 900.0), &[], &ctx(&service));

    let categories: Vec<Category> = states.iter().map(|s| s.category).collect();
    assert_eq!(categories, Category::ALL.to_vec());
}

#[test]
fn test_critical_oil_ranks_before_warning_brake() {
    let service = VehicleHealthService::new();
    // High monthly usage keeps the oil calendar cap out of the picture.
    let car = car(46_000.0, 3_000.0);
    let records = vec![
        // Brake pads at 17000 km: 29000 km elapsed against 30000, warning.
        record("brake", "Brake pad replacement", 17_000.0, 10),
        // Oil at 40000 km: 6000 km elapsed against 5000, overdue.
        record("oil", "Oil change", 40_000.0, 10),
    ];

    let states = service.run_checks(&car, &records, &ctx(&service));
    let suggestions = service.rank_suggestions(&car, &states);

    assert_eq!(suggestions.len(), 2);
    assert_eq!(suggestions[0].category, Category::EngineOil);
    assert_eq!(suggestions[0].status, MaintenanceStatus::Critical);
    assert_eq!(suggestions[0].id, "engine_oil:car-1");
    assert_eq!(suggestions[0].estimated_cost, Some(dec!(5000)));

    assert_eq!(suggestions[1].category, Category::BrakeTire);
    assert_eq!(suggestions[1].status, MaintenanceStatus::Warning);
    assert_eq!(suggestions[1].estimated_cost, Some(dec!(20000)));
}

#[test]
fn test_equal_band_tie_break_follows_category_order() {
    let service = VehicleHealthService::new();
    let car = car(44_500.0, 3_000.0);
    let records = vec![
        // Battery 25 months old: warning.
        wall_record("battery", "Battery replacement", 20_000.0, 25 * 30),
        // Oil with 500 km headroom: warning.
        wall_record("oil", "Oil change", 40_000.0, 10),
    ];

    let suggestions = service.build_suggestions(&car, &records);

    assert_eq!(suggestions.len(), 2);
    assert_eq!(suggestions[0].category, Category::EngineOil);
    assert_eq!(suggestions[1].category, Category::Battery);
    assert_eq!(suggestions[0].status, MaintenanceStatus::Warning);
    assert_eq!(suggestions[1].status, MaintenanceStatus::Warning);
}

#[test]
fn test_all_good_snapshot_yields_empty_list() {
    let service = VehicleHealthService::new();
    let car = car(45_000.0, 900.0);
    let records = vec![
        wall_record("oil", "Oil change", 44_800.0, 5),
        wall_record("tire", "Tire rotation", 40_000.0, 60),
        wall_record("battery", "Battery replacement", 38_000.0, 200),
    ];

    assert!(service.build_suggestions(&car, &records).is_empty());
}

#[test]
fn test_conservative_fusion_surfaces_calendar_cap() {
    let service = VehicleHealthService::new();
    // 100 km/month: the 6-month oil cap converts to far less distance than
    // the 4000 km the odometer axis would allow.
    let car = car(41_000.0, 100.0);
    let records = vec![record("oil", "Oil change", 40_000.0, 160)];

    let states = service.run_checks(&car, &records, &ctx(&service));
    let oil = &states[0];

    let rate = 100.0 / 30.0;
    assert_eq!(oil.remaining_km, Some(20.0 * rate));
    assert_eq!(oil.remaining_days, Some(20));
    assert_eq!(oil.status, MaintenanceStatus::Warning);

    let suggestions = service.rank_suggestions(&car, &states);
    assert_eq!(suggestions.len(), 1);
    assert_eq!(suggestions[0].remaining_km, Some(20.0 * rate));
}

#[test]
fn test_identical_inputs_produce_identical_output() {
    let service = VehicleHealthService::new();
    let car = car(46_000.0, 900.0);
    let records = vec![
        record("oil", "Oil change", 40_000.0, 10),
        record("brake", "Brake pads", 17_000.0, 400),
    ];

    let ctx = ctx(&service);
    let first_states = service.run_checks(&car, &records, &ctx);
    let second_states = service.run_checks(&car, &records, &ctx);
    assert_eq!(first_states, second_states);

    let first = service.rank_suggestions(&car, &first_states);
    let second = service.rank_suggestions(&car, &second_states);
    assert_eq!(first, second);
}

#[test]
fn test_unknown_states_never_reach_the_ranked_list() {
    let service = VehicleHealthService::new();
    let car = car(46_000.0, 3_000.0);
    // Only an oil record; brake/tire and battery stay unknown.
    let records = vec![wall_record("oil", "Oil change", 40_000.0, 10)];

    let suggestions = service.build_suggestions(&car, &records);
    assert_eq!(suggestions.len(), 1);
    assert_eq!(suggestions[0].category, Category::EngineOil);
}

#[test]
fn test_record_for_another_car_is_ignored() {
    let service = VehicleHealthService::new();
    let car = car(46_000.0, 3_000.0);
    let mut other = record("oil", "Oil change", 40_000.0, 10);
    other.car_id = "car-2".to_string();

    let states = service.run_checks(&car, &[other], &ctx(&service));
    assert!(states.iter().all(|s| s.status == MaintenanceStatus::Unknown));
}
