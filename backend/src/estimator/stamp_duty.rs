//! Stamp duty and registration charges
//!
//! ```text
//! stamp_duty   = price × rate(buyer_class) / 100
//! registration = price × registration_rate / 100
//! total        = stamp_duty + registration
//! ```

use crate::models::estimate::StampDutyResult;
use crate::models::rates::{BuyerClass, JurisdictionRate};

/// Apply one jurisdiction's rates to a price
///
/// Pure arithmetic on already-validated inputs; no rounding.
pub fn stamp_duty_for(
    price: f64,
    rate: &JurisdictionRate,
    buyer_class: BuyerClass,
) -> StampDutyResult {
    let stamp_duty_amount = price * rate.stamp_duty_rate(buyer_class) / 100.0;
    let registration_amount = price * rate.registration_rate_percent / 100.0;

    StampDutyResult {
        stamp_duty_amount,
        registration_amount,
        total_amount: stamp_duty_amount + registration_amount,
    }
}
