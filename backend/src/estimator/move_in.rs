//! Security deposit and move-in costs
//!
//! ```text
//! deposit(min|typical|max) = rent × months
//! broker_fee = advance_rent = rent
//! total_move_in = typical_deposit + broker_fee + advance_rent
//! ```

use crate::models::estimate::MoveInEstimate;
use crate::models::rates::DepositNorm;

/// Apply one city's deposit norm to a monthly rent
pub fn move_in_for(
    monthly_rent: f64,
    norm: &DepositNorm,
    advisory_threshold_months: u32,
) -> MoveInEstimate {
    let min_deposit = monthly_rent * f64::from(norm.min_months);
    let typical_deposit = monthly_rent * f64::from(norm.typical_months);
    let max_deposit = monthly_rent * f64::from(norm.max_months);
    let broker_fee = monthly_rent;
    let advance_rent = monthly_rent;

    MoveInEstimate {
        min_deposit,
        typical_deposit,
        max_deposit,
        broker_fee,
        advance_rent,
        total_move_in: typical_deposit + broker_fee + advance_rent,
        high_deposit_advisory: norm.exceeds_threshold(advisory_threshold_months),
    }
}

/// Warning shown to tenants in cities with unusually high deposits
pub fn advisory_message(norm: &DepositNorm) -> String {
    format!(
        "{} typically requires {}-{} months deposit. Negotiate if possible!",
        norm.name, norm.min_months, norm.max_months
    )
}
