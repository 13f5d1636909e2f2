//! Loan eligibility from income, age and employment type
//!
//! ```text
//! tenure      = clamp(retirement_age − age, 5, 30) years
//! base        = annual_income × multiplier − monthly_liabilities × 12 × tenure   (floored at 0)
//! eligibility = base × min(1, tenure / 20)
//! ```
//!
//! The estimated EMI assumes the reference rate of 8.5% p.a.

use super::emi::emi;
use crate::estimator::error::{ensure_amount, EstimateError};
use serde::{Deserialize, Serialize};

/// Rate used for the indicative EMI, percent per annum
pub const REFERENCE_RATE_PERCENT: f64 = 8.5;

const MIN_TENURE_YEARS: i64 = 5;
const MAX_TENURE_YEARS: i64 = 30;

/// Tenures shorter than this reduce eligibility proportionally
const FULL_ELIGIBILITY_TENURE_YEARS: f64 = 20.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EmploymentType {
    #[default]
    Salaried,
    SelfEmployed,
}

impl EmploymentType {
    pub fn retirement_age(self) -> u32 {
        match self {
            EmploymentType::Salaried => 60,
            EmploymentType::SelfEmployed => 65,
        }
    }

    /// Multiple of annual income lenders are willing to lend
    pub fn income_multiplier(self) -> f64 {
        match self {
            EmploymentType::Salaried => 6.0,
            EmploymentType::SelfEmployed => 4.0,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EligibilityInput {
    pub annual_income: f64,
    pub age: u32,
    pub employment_type: EmploymentType,
    /// Existing monthly obligations
    pub existing_liabilities: f64,
}

impl Default for EligibilityInput {
    fn default() -> Self {
        Self {
            annual_income: 1_200_000.0,
            age: 30,
            employment_type: EmploymentType::Salaried,
            existing_liabilities: 0.0,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct EligibilityResult {
    pub max_loan_eligibility: f64,
    pub max_tenure_years: u32,
    pub estimated_emi: f64,
}

/// Longest tenure a lender offers at this age
pub fn max_tenure_years(age: u32, employment_type: EmploymentType) -> u32 {
    let remaining = i64::from(employment_type.retirement_age()) - i64::from(age);
    // Clamped into [5, 30], so the cast is lossless
    remaining.clamp(MIN_TENURE_YEARS, MAX_TENURE_YEARS) as u32
}

/// Compute the maximum loan and its indicative EMI
pub fn calculate_eligibility(input: &EligibilityInput) -> Result<EligibilityResult, EstimateError> {
    let annual_income = ensure_amount("annual_income", input.annual_income)?;
    let liabilities = ensure_amount("existing_liabilities", input.existing_liabilities)?;

    let tenure = max_tenure_years(input.age, input.employment_type);
    let tenure_f = f64::from(tenure);

    let gross = annual_income * input.employment_type.income_multiplier();
    let base = (gross - liabilities * 12.0 * tenure_f).max(0.0);
    let eligibility = base * (tenure_f / FULL_ELIGIBILITY_TENURE_YEARS).min(1.0);

    let estimated_emi = if eligibility > 0.0 {
        emi(eligibility, REFERENCE_RATE_PERCENT, tenure * 12)?
    } else {
        0.0
    };

    Ok(EligibilityResult {
        max_loan_eligibility: eligibility.round(),
        max_tenure_years: tenure,
        estimated_emi: estimated_emi.round(),
    })
}
