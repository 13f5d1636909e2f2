//! Home-loan calculators
//!
//! Companions to the cost estimators: EMI, affordability, loan eligibility
//! and rent-vs-buy. Every calculator takes a plain input struct (with the
//! marketplace's form defaults as `Default`) and returns a result record.
//! Results are rounded to whole rupees, matching what the marketplace
//! displays.

pub mod affordability;
pub mod eligibility;
pub mod emi;
pub mod rent_vs_buy;

pub use affordability::{calculate_affordability, AffordabilityInput, AffordabilityResult};
pub use eligibility::{calculate_eligibility, EligibilityInput, EligibilityResult, EmploymentType};
pub use emi::{emi, emi_breakdown, loan_for_emi, monthly_rate, EmiBreakdown};
pub use rent_vs_buy::{compare_rent_vs_buy, RentVsBuyInput, RentVsBuyResult};
