//! Integration tests for deposit and move-in estimates

use property_cost_core_rs::{
    compute_move_in_estimate, CostEngine, EstimateError, EstimatorConfig, RateTables, DEFAULT_CITY,
};

#[test]
fn test_mumbai_reference_scenario() {
    let estimate = compute_move_in_estimate(25_000.0, "mumbai").unwrap();

    assert_eq!(estimate.min_deposit, 75_000.0);
    assert_eq!(estimate.typical_deposit, 100_000.0);
    assert_eq!(estimate.max_deposit, 150_000.0);
    assert_eq!(estimate.broker_fee, 25_000.0);
    assert_eq!(estimate.advance_rent, 25_000.0);
    assert_eq!(estimate.total_move_in, 150_000.0);
    assert!(!estimate.high_deposit_advisory);
}

#[test]
fn test_bangalore_outlier_sets_advisory() {
    let estimate = compute_move_in_estimate(25_000.0, "bangalore").unwrap();

    assert_eq!(estimate.min_deposit, 250_000.0);
    assert_eq!(estimate.typical_deposit, 250_000.0);
    assert_eq!(estimate.max_deposit, 275_000.0);
    assert_eq!(estimate.total_move_in, 300_000.0);
    assert!(estimate.high_deposit_advisory);
}

#[test]
fn test_only_bangalore_flagged_by_default() {
    let tables = RateTables::builtin();
    let flagged: Vec<&str> = tables
        .cities()
        .filter(|(code, _)| {
            compute_move_in_estimate(10_000.0, code)
                .unwrap()
                .high_deposit_advisory
        })
        .map(|(code, _)| code)
        .collect();
    assert_eq!(flagged, vec!["bangalore"]);
}

#[test]
fn test_unknown_city_matches_default() {
    let unknown = compute_move_in_estimate(18_000.0, "gotham").unwrap();
    let default = compute_move_in_estimate(18_000.0, DEFAULT_CITY).unwrap();
    assert_eq!(unknown, default);
    assert!(RateTables::builtin().resolve_city("gotham").is_fallback());
}

#[test]
fn test_zero_rent() {
    let estimate = compute_move_in_estimate(0.0, "pune").unwrap();
    assert_eq!(estimate.total_move_in, 0.0);
    assert_eq!(estimate.max_deposit, 0.0);
}

#[test]
fn test_negative_rent_rejected() {
    assert_eq!(
        compute_move_in_estimate(-500.0, "pune"),
        Err(EstimateError::InvalidInput {
            field: "monthly_rent",
            value: -500.0
        })
    );
}

#[test]
fn test_advisory_threshold_configurable() {
    let engine = CostEngine::new(EstimatorConfig {
        advisory_threshold_months: 12,
        ..EstimatorConfig::default()
    })
    .unwrap();

    let estimate = engine.compute_move_in_estimate(25_000.0, "bangalore").unwrap();
    assert!(!estimate.high_deposit_advisory);
    assert_eq!(engine.deposit_advisory("bangalore"), None);
}

#[test]
fn test_advisory_message_for_fallback_city() {
    let engine = CostEngine::new(EstimatorConfig {
        default_city: "bangalore".to_string(),
        ..EstimatorConfig::default()
    })
    .unwrap();

    let message = engine.deposit_advisory("somewhere").unwrap();
    assert!(message.starts_with("Bangalore typically requires 10-11 months"));
}
