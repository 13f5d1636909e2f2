//! Rent vs buy over a fixed horizon
//!
//! Buying: down payment + all EMIs paid within the horizon + 7% stamp duty
//! and registration, minus the appreciated property value.
//!
//! Renting: rent (rising yearly) minus the gain from investing the down
//! payment at 10% a year instead.

use super::emi::emi;
use crate::estimator::error::{ensure_amount, ensure_positive, EstimateError};
use serde::{Deserialize, Serialize};

/// Stamp duty + registration assumed when buying, as a fraction of price
pub const PURCHASE_COST_RATE: f64 = 0.07;

/// Annual return on the down payment when renting instead
pub const INVESTMENT_RETURN_RATE: f64 = 0.10;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RentVsBuyInput {
    pub property_price: f64,
    pub monthly_rent: f64,
    pub years: u32,
    /// Annual property appreciation, percent
    pub appreciation_percent: f64,
    /// Annual rent increase, percent
    pub rent_increase_percent: f64,
    pub down_payment_percent: f64,
    pub annual_rate_percent: f64,
}

impl Default for RentVsBuyInput {
    fn default() -> Self {
        Self {
            property_price: 5_000_000.0,
            monthly_rent: 25_000.0,
            years: 10,
            appreciation_percent: 6.0,
            rent_increase_percent: 5.0,
            down_payment_percent: 20.0,
            annual_rate_percent: 8.5,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RentVsBuyResult {
    pub emi: f64,
    pub total_emi_paid: f64,
    pub future_value: f64,
    pub total_buy_cost: f64,
    pub net_buy_cost: f64,
    pub total_rent_paid: f64,
    pub investment_returns: f64,
    pub net_rent_cost: f64,
    pub buy_is_better: bool,
    pub savings: f64,
}

/// Compare the net cost of buying and renting over `input.years`
///
/// The loan runs over the same horizon as the comparison.
pub fn compare_rent_vs_buy(input: &RentVsBuyInput) -> Result<RentVsBuyResult, EstimateError> {
    let price = ensure_amount("property_price", input.property_price)?;
    let rent = ensure_amount("monthly_rent", input.monthly_rent)?;
    let years = ensure_positive("years", f64::from(input.years))?;
    let appreciation = ensure_amount("appreciation_percent", input.appreciation_percent)?;
    let rent_increase = ensure_amount("rent_increase_percent", input.rent_increase_percent)?;
    let down_payment_percent = ensure_amount("down_payment_percent", input.down_payment_percent)?;
    if down_payment_percent > 100.0 {
        return Err(EstimateError::InvalidInput {
            field: "down_payment_percent",
            value: down_payment_percent,
        });
    }

    let down_payment = price * down_payment_percent / 100.0;
    let loan_amount = price - down_payment;
    let months = input.years.saturating_mul(12);

    let monthly_emi = emi(loan_amount, input.annual_rate_percent, months)?;
    let total_emi_paid = monthly_emi * f64::from(months);

    let future_value = price * (1.0 + appreciation / 100.0).powf(years);
    let purchase_costs = price * PURCHASE_COST_RATE;
    let total_buy_cost = down_payment + total_emi_paid + purchase_costs;
    let net_buy_cost = total_buy_cost - future_value;

    let mut total_rent_paid = 0.0;
    let mut current_rent = rent;
    for _ in 0..input.years {
        total_rent_paid += current_rent * 12.0;
        current_rent *= 1.0 + rent_increase / 100.0;
    }

    let investment_returns = down_payment * (1.0 + INVESTMENT_RETURN_RATE).powf(years);
    let net_rent_cost = total_rent_paid - (investment_returns - down_payment);

    Ok(RentVsBuyResult {
        emi: monthly_emi.round(),
        total_emi_paid: total_emi_paid.round(),
        future_value: future_value.round(),
        total_buy_cost: total_buy_cost.round(),
        net_buy_cost: net_buy_cost.round(),
        total_rent_paid: total_rent_paid.round(),
        investment_returns: investment_returns.round(),
        net_rent_cost: net_rent_cost.round(),
        buy_is_better: net_buy_cost < net_rent_cost,
        savings: (net_buy_cost - net_rent_cost).abs().round(),
    })
}
