// Rate table validation
//
// Load-time checks so lookups never see malformed reference data:
// - Table non-empty
// - Keys normalized (lowercase ASCII letters/digits)
// - Stamp duty and registration rates finite and within [0, 100]
// - Deposit months ordered: min <= typical <= max
// - Default keys present

use crate::models::rates::{DepositNorm, JurisdictionRate};
use std::collections::BTreeMap;
use std::fmt;
use thiserror::Error;

/// Which of the two reference tables an error refers to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TableKind {
    StampDuty,
    Deposit,
}

impl fmt::Display for TableKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TableKind::StampDuty => write!(f, "stamp duty"),
            TableKind::Deposit => write!(f, "deposit"),
        }
    }
}

/// Table loading errors
#[derive(Debug, Error, PartialEq)]
pub enum TableError {
    #[error("Failed to parse {table} table: {message}")]
    Parse { table: TableKind, message: String },

    #[error("Failed to serialize rate tables: {0}")]
    Serialization(String),

    #[error("The {0} table has no entries")]
    Empty(TableKind),

    #[error("Key '{key}' in the {table} table is not a normalized lowercase code")]
    InvalidKey { table: TableKind, key: String },

    #[error("Region '{region}': {field} rate {value} is outside [0, 100]")]
    RateOutOfRange {
        region: String,
        field: &'static str,
        value: f64,
    },

    #[error("City '{city}': deposit months out of order (min {min}, typical {typical}, max {max})")]
    MonthsOutOfOrder {
        city: String,
        min: u32,
        typical: u32,
        max: u32,
    },

    #[error("Default key '{key}' not found in the {table} table")]
    MissingDefault { table: TableKind, key: String },
}

/// Validation result
pub type ValidationResult = Result<(), Vec<TableError>>;

/// Validate both tables and their default keys
///
/// Runs every check and returns all errors found, not just the first.
pub fn validate_tables(
    regions: &BTreeMap<String, JurisdictionRate>,
    cities: &BTreeMap<String, DepositNorm>,
    default_region: &str,
    default_city: &str,
) -> ValidationResult {
    let mut errors = Vec::new();

    errors.extend(validate_keys(TableKind::StampDuty, regions.keys()));
    errors.extend(validate_keys(TableKind::Deposit, cities.keys()));

    for (code, rate) in regions {
        errors.extend(validate_rate(code, rate));
    }

    for (code, norm) in cities {
        if !norm.is_ordered() {
            errors.push(TableError::MonthsOutOfOrder {
                city: code.clone(),
                min: norm.min_months,
                typical: norm.typical_months,
                max: norm.max_months,
            });
        }
    }

    if !regions.is_empty() && !regions.contains_key(default_region) {
        errors.push(TableError::MissingDefault {
            table: TableKind::StampDuty,
            key: default_region.to_string(),
        });
    }
    if !cities.is_empty() && !cities.contains_key(default_city) {
        errors.push(TableError::MissingDefault {
            table: TableKind::Deposit,
            key: default_city.to_string(),
        });
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

fn validate_keys<'a>(
    table: TableKind,
    keys: impl ExactSizeIterator<Item = &'a String>,
) -> Vec<TableError> {
    if keys.len() == 0 {
        return vec![TableError::Empty(table)];
    }

    keys.filter(|key| !is_normalized_key(key))
        .map(|key| TableError::InvalidKey {
            table,
            key: key.clone(),
        })
        .collect()
}

fn validate_rate(code: &str, rate: &JurisdictionRate) -> Vec<TableError> {
    [
        ("standard", rate.male_rate_percent),
        ("concessional", rate.female_rate_percent),
        ("registration", rate.registration_rate_percent),
    ]
    .into_iter()
    .filter(|(_, value)| !is_valid_percent(*value))
    .map(|(field, value)| TableError::RateOutOfRange {
        region: code.to_string(),
        field,
        value,
    })
    .collect()
}

fn is_valid_percent(value: f64) -> bool {
    value.is_finite() && (0.0..=100.0).contains(&value)
}

/// Lookup keys are compared verbatim, so they must already be normalized
fn is_normalized_key(key: &str) -> bool {
    !key.is_empty()
        && key
            .chars()
            .all(|c| c.is_ascii_lowercase() || c.is_ascii_digit())
}
