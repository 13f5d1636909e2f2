//! Property Cost Core - Rust Engine
//!
//! Cost estimators for Indian residential property transactions.
//!
//! # Architecture
//!
//! - **core**: en-IN currency formatting
//! - **models**: Rate records and estimate results
//! - **tables**: Validated, immutable rate tables (embedded JSON)
//! - **estimator**: Stamp duty / registration and deposit / move-in engine
//! - **finance**: EMI, affordability, eligibility and rent-vs-buy calculators
//!
//! # Critical Invariants
//!
//! 1. All money values are f64 rupees, unrounded until display
//! 2. Every calculation is a pure function of its inputs and the tables
//! 3. Unknown region/city codes fall back to a default, never fail
//!
//! The shipped rates are approximate reference data, not legal figures.
//!
//! # Example
//! ```
//! use property_cost_core_rs::{compute_stamp_duty, format_inr, BuyerClass};
//!
//! let result = compute_stamp_duty(5_000_000.0, "maharashtra", BuyerClass::Concessional).unwrap();
//! assert_eq!(format_inr(result.total_amount), "₹3,00,000");
//! ```

// Module declarations
pub mod core;
pub mod estimator;
pub mod finance;
pub mod models;
pub mod tables;

// Re-exports for convenience
pub use crate::core::currency::{format_inr, format_inr_compact};
pub use estimator::{
    compute_move_in_estimate, compute_stamp_duty, CostEngine, EstimateError, EstimatorConfig,
};
pub use models::{
    estimate::{MoveInEstimate, StampDutyResult},
    rates::{BuyerClass, DepositNorm, JurisdictionRate},
};
pub use tables::{Lookup, RateTables, TableError, TableKind, DEFAULT_CITY, DEFAULT_REGION};
