//! Property tests for the cost estimators
//!
//! Invariants checked over random prices, rents and codes:
//! - total = stamp duty + registration
//! - min deposit <= typical <= max
//! - repeated calls are bit-identical
//! - unknown codes behave exactly like the default

use property_cost_core_rs::{
    compute_move_in_estimate, compute_stamp_duty, BuyerClass, RateTables, DEFAULT_CITY,
    DEFAULT_REGION,
};
use proptest::prelude::*;

fn region_codes() -> Vec<String> {
    RateTables::builtin()
        .regions()
        .map(|(code, _)| code.to_string())
        .collect()
}

fn city_codes() -> Vec<String> {
    RateTables::builtin()
        .cities()
        .map(|(code, _)| code.to_string())
        .collect()
}

fn buyer_class() -> impl Strategy<Value = BuyerClass> {
    prop_oneof![Just(BuyerClass::Standard), Just(BuyerClass::Concessional)]
}

proptest! {
    #[test]
    fn prop_total_is_sum_of_parts(
        price in 0.0f64..1e10,
        region in prop::sample::select(region_codes()),
        class in buyer_class(),
    ) {
        let result = compute_stamp_duty(price, &region, class).unwrap();
        prop_assert_eq!(result.total_amount, result.stamp_duty_amount + result.registration_amount);
        prop_assert!(result.stamp_duty_amount >= 0.0);
        prop_assert!(result.registration_amount >= 0.0);
    }

    #[test]
    fn prop_concessional_never_costs_more(
        price in 0.0f64..1e10,
        region in prop::sample::select(region_codes()),
    ) {
        let standard = compute_stamp_duty(price, &region, BuyerClass::Standard).unwrap();
        let concessional = compute_stamp_duty(price, &region, BuyerClass::Concessional).unwrap();
        prop_assert!(concessional.total_amount <= standard.total_amount);
    }

    #[test]
    fn prop_deposits_ordered(
        rent in 0.0f64..1e7,
        city in prop::sample::select(city_codes()),
    ) {
        let estimate = compute_move_in_estimate(rent, &city).unwrap();
        prop_assert!(estimate.min_deposit <= estimate.typical_deposit);
        prop_assert!(estimate.typical_deposit <= estimate.max_deposit);
        prop_assert_eq!(
            estimate.total_move_in,
            estimate.typical_deposit + estimate.broker_fee + estimate.advance_rent
        );
    }

    #[test]
    fn prop_calls_are_idempotent(
        price in 0.0f64..1e10,
        rent in 0.0f64..1e7,
        code in "[a-z]{0,16}",
        class in buyer_class(),
    ) {
        let first = compute_stamp_duty(price, &code, class).unwrap();
        let second = compute_stamp_duty(price, &code, class).unwrap();
        prop_assert_eq!(first.total_amount.to_bits(), second.total_amount.to_bits());
        prop_assert_eq!(first.stamp_duty_amount.to_bits(), second.stamp_duty_amount.to_bits());

        let first = compute_move_in_estimate(rent, &code).unwrap();
        let second = compute_move_in_estimate(rent, &code).unwrap();
        prop_assert_eq!(first.total_move_in.to_bits(), second.total_move_in.to_bits());
    }

    #[test]
    fn prop_unknown_codes_use_defaults(
        price in 0.0f64..1e10,
        code in "[A-Z][a-z]{0,12}|zz[a-z]{0,8}",
        class in buyer_class(),
    ) {
        prop_assert_eq!(
            compute_stamp_duty(price, &code, class).unwrap(),
            compute_stamp_duty(price, DEFAULT_REGION, class).unwrap()
        );
        prop_assert_eq!(
            compute_move_in_estimate(price / 100.0, &code).unwrap(),
            compute_move_in_estimate(price / 100.0, DEFAULT_CITY).unwrap()
        );
    }

    #[test]
    fn prop_negative_inputs_rejected(value in -1e10f64..-1e-9) {
        prop_assert!(compute_stamp_duty(value, DEFAULT_REGION, BuyerClass::Standard).is_err());
        prop_assert!(compute_move_in_estimate(value, DEFAULT_CITY).is_err());
    }
}
