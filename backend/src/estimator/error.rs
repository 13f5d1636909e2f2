//! Estimator errors

use crate::tables::TableError;
use thiserror::Error;

/// Errors returned by the estimators
///
/// Unknown region or city codes are deliberately absent: they resolve to
/// the default record instead of failing.
#[derive(Debug, Error, PartialEq)]
pub enum EstimateError {
    #[error("Invalid input: {field} must be a finite, non-negative amount (got {value})")]
    InvalidInput { field: &'static str, value: f64 },

    #[error("Invalid input: {field} must be greater than zero (got {value})")]
    NonPositive { field: &'static str, value: f64 },

    #[error("Rate tables failed validation ({} error(s)): {}", .0.len(), summarize(.0))]
    InvalidTables(Vec<TableError>),
}

impl From<Vec<TableError>> for EstimateError {
    fn from(errors: Vec<TableError>) -> Self {
        EstimateError::InvalidTables(errors)
    }
}

fn summarize(errors: &[TableError]) -> String {
    errors
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("; ")
}

/// Reject negative, NaN and infinite amounts
pub fn ensure_amount(field: &'static str, value: f64) -> Result<f64, EstimateError> {
    if value.is_finite() && value >= 0.0 {
        Ok(value)
    } else {
        Err(EstimateError::InvalidInput { field, value })
    }
}

/// Reject amounts that are not strictly positive (tenures, horizons)
pub fn ensure_positive(field: &'static str, value: f64) -> Result<f64, EstimateError> {
    let value = ensure_amount(field, value)?;
    if value > 0.0 {
        Ok(value)
    } else {
        Err(EstimateError::NonPositive { field, value })
    }
}
