//! Equated monthly instalment (EMI) math
//!
//! ```text
//! r   = annual_rate_percent / 12 / 100
//! EMI = P × r × (1 + r)^n / ((1 + r)^n − 1)
//! ```
//!
//! With `r == 0` the loan is repaid in equal slices: `EMI = P / n`.

use crate::estimator::error::{ensure_amount, ensure_positive, EstimateError};
use serde::{Deserialize, Serialize};

/// EMI and what it adds up to over the loan
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct EmiBreakdown {
    pub emi: f64,
    pub total_payment: f64,
    pub total_interest: f64,
}

/// Monthly interest rate as a fraction
pub fn monthly_rate(annual_rate_percent: f64) -> f64 {
    annual_rate_percent / 12.0 / 100.0
}

/// Monthly instalment for a loan (unrounded)
///
/// # Example
/// ```
/// use property_cost_core_rs::finance::emi;
///
/// // Interest-free: 12 equal instalments
/// assert_eq!(emi(120_000.0, 0.0, 12).unwrap(), 10_000.0);
/// ```
pub fn emi(
    principal: f64,
    annual_rate_percent: f64,
    tenure_months: u32,
) -> Result<f64, EstimateError> {
    let principal = ensure_amount("principal", principal)?;
    let annual_rate_percent = ensure_amount("annual_rate_percent", annual_rate_percent)?;
    let n = ensure_positive("tenure_months", f64::from(tenure_months))?;

    let r = monthly_rate(annual_rate_percent);
    if r == 0.0 {
        return Ok(principal / n);
    }

    let growth = (1.0 + r).powf(n);
    Ok(principal * r * growth / (growth - 1.0))
}

/// Largest principal a given EMI can service (inverse of [`emi`])
pub fn loan_for_emi(
    emi: f64,
    annual_rate_percent: f64,
    tenure_months: u32,
) -> Result<f64, EstimateError> {
    let emi = ensure_amount("emi", emi)?;
    let annual_rate_percent = ensure_amount("annual_rate_percent", annual_rate_percent)?;
    let n = ensure_positive("tenure_months", f64::from(tenure_months))?;

    let r = monthly_rate(annual_rate_percent);
    if r == 0.0 {
        return Ok(emi * n);
    }

    let growth = (1.0 + r).powf(n);
    Ok(emi * (growth - 1.0) / (r * growth))
}

/// EMI with total payment and total interest, rounded to whole rupees
pub fn emi_breakdown(
    principal: f64,
    annual_rate_percent: f64,
    tenure_months: u32,
) -> Result<EmiBreakdown, EstimateError> {
    let monthly = emi(principal, annual_rate_percent, tenure_months)?;
    let total_payment = monthly * f64::from(tenure_months);

    Ok(EmiBreakdown {
        emi: monthly.round(),
        total_payment: total_payment.round(),
        total_interest: (total_payment - principal).round(),
    })
}
