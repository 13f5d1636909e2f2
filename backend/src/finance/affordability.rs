//! Affordability: what property price an income can carry
//!
//! Lenders cap total EMIs at 40% of monthly income. The headroom left
//! after existing EMIs is converted back into a loan amount, and the loan
//! is assumed to fund 80% of the price (20% down payment).

use super::emi::loan_for_emi;
use crate::estimator::error::{ensure_amount, ensure_positive, EstimateError};
use serde::{Deserialize, Serialize};

/// Share of monthly income that may go to EMIs
pub const MAX_EMI_TO_INCOME: f64 = 0.40;

/// Share of the property price financed by the loan
pub const LOAN_TO_VALUE: f64 = 0.80;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AffordabilityInput {
    pub monthly_income: f64,
    pub existing_emis: f64,
    pub annual_rate_percent: f64,
    pub tenure_years: u32,
}

impl Default for AffordabilityInput {
    fn default() -> Self {
        Self {
            monthly_income: 100_000.0,
            existing_emis: 0.0,
            annual_rate_percent: 8.5,
            tenure_years: 20,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AffordabilityResult {
    pub max_emi: f64,
    pub loan_amount: f64,
    pub affordable_price: f64,
}

impl AffordabilityResult {
    fn zero() -> Self {
        Self {
            max_emi: 0.0,
            loan_amount: 0.0,
            affordable_price: 0.0,
        }
    }
}

/// Compute the maximum EMI, loan and property price for an income
///
/// When existing EMIs already use up the 40% allowance everything is zero.
///
/// # Example
/// ```
/// use property_cost_core_rs::finance::{calculate_affordability, AffordabilityInput};
///
/// let input = AffordabilityInput {
///     monthly_income: 50_000.0,
///     existing_emis: 25_000.0,
///     ..AffordabilityInput::default()
/// };
/// let result = calculate_affordability(&input).unwrap();
/// assert_eq!(result.affordable_price, 0.0);
/// ```
pub fn calculate_affordability(
    input: &AffordabilityInput,
) -> Result<AffordabilityResult, EstimateError> {
    let monthly_income = ensure_amount("monthly_income", input.monthly_income)?;
    let existing_emis = ensure_amount("existing_emis", input.existing_emis)?;
    let annual_rate_percent = ensure_amount("annual_rate_percent", input.annual_rate_percent)?;
    ensure_positive("tenure_years", f64::from(input.tenure_years))?;

    let max_emi = monthly_income * MAX_EMI_TO_INCOME - existing_emis;
    if max_emi <= 0.0 {
        return Ok(AffordabilityResult::zero());
    }

    let tenure_months = input.tenure_years.saturating_mul(12);
    let loan_amount = loan_for_emi(max_emi, annual_rate_percent, tenure_months)?;

    Ok(AffordabilityResult {
        max_emi: max_emi.round(),
        loan_amount: loan_amount.round(),
        affordable_price: (loan_amount / LOAN_TO_VALUE).round(),
    })
}
