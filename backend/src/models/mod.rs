//! Domain models for the cost estimators

pub mod estimate;
pub mod rates;

// Re-exports
pub use estimate::{MoveInEstimate, StampDutyResult};
pub use rates::{BuyerClass, DepositNorm, JurisdictionRate};
