//! Rate Tables
//!
//! Immutable per-jurisdiction reference data:
//! - Stamp duty / registration rates by state (`data/stamp_duty.json`)
//! - Security deposit norms by city (`data/deposits.json`)
//!
//! Tables are validated once when loaded and never mutated afterwards. The
//! built-in tables are embedded at compile time and parsed on first use;
//! callers with newer reference data load their own with
//! [`RateTables::from_json_str`].
//!
//! # Fallback
//!
//! An unknown code never fails a lookup. It resolves to the table's
//! default record, logs a warning, and reports `is_fallback()` on the
//! returned [`Lookup`] so callers can surface data-entry problems.

pub mod fingerprint;
pub mod validation;

use crate::models::rates::{DepositNorm, JurisdictionRate};
use once_cell::sync::Lazy;
use serde::{de::DeserializeOwned, Serialize};
use std::collections::BTreeMap;
use std::sync::Arc;

pub use fingerprint::compute_fingerprint;
pub use validation::{validate_tables, TableError, TableKind, ValidationResult};

/// Region used when a stamp duty lookup misses
pub const DEFAULT_REGION: &str = "maharashtra";

/// City used when a deposit lookup misses
pub const DEFAULT_CITY: &str = "mumbai";

const BUILTIN_STAMP_DUTY_JSON: &str = include_str!("data/stamp_duty.json");
const BUILTIN_DEPOSITS_JSON: &str = include_str!("data/deposits.json");

static BUILTIN: Lazy<Arc<RateTables>> = Lazy::new(|| {
    let tables = RateTables::from_json_str(
        BUILTIN_STAMP_DUTY_JSON,
        BUILTIN_DEPOSITS_JSON,
        DEFAULT_REGION,
        DEFAULT_CITY,
    )
    .expect("embedded rate tables must pass validation");
    Arc::new(tables)
});

/// Result of resolving a code against a table
#[derive(Debug, PartialEq)]
pub struct Lookup<'a, T> {
    /// Key of the record actually used
    pub key: &'a str,
    pub record: &'a T,
    fallback: bool,
}

// Holds only references, so copyable for any `T`
impl<T> Clone for Lookup<'_, T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for Lookup<'_, T> {}

impl<'a, T> Lookup<'a, T> {
    /// True when the requested code was unknown and the default was used
    pub fn is_fallback(&self) -> bool {
        self.fallback
    }
}

/// Validated stamp duty and deposit tables
#[derive(Debug, Clone, Serialize)]
pub struct RateTables {
    regions: BTreeMap<String, JurisdictionRate>,
    cities: BTreeMap<String, DepositNorm>,
    default_region: String,
    default_city: String,
    #[serde(skip)]
    fingerprint: String,
}

impl RateTables {
    /// Build tables from already-parsed records
    ///
    /// # Errors
    ///
    /// Returns every validation failure found (see [`validate_tables`]).
    pub fn new(
        regions: BTreeMap<String, JurisdictionRate>,
        cities: BTreeMap<String, DepositNorm>,
        default_region: impl Into<String>,
        default_city: impl Into<String>,
    ) -> Result<Self, Vec<TableError>> {
        let default_region = default_region.into();
        let default_city = default_city.into();

        validate_tables(&regions, &cities, &default_region, &default_city)?;

        let mut tables = Self {
            regions,
            cities,
            default_region,
            default_city,
            fingerprint: String::new(),
        };
        tables.fingerprint = compute_fingerprint(&tables).map_err(|e| vec![e])?;

        log::debug!(
            "loaded rate tables: {} regions, {} cities, fingerprint {}",
            tables.regions.len(),
            tables.cities.len(),
            tables.fingerprint
        );

        Ok(tables)
    }

    /// Parse and validate tables from JSON documents
    ///
    /// Both documents are objects keyed by code, in the same shape as the
    /// embedded data.
    ///
    /// # Example
    /// ```
    /// use property_cost_core_rs::tables::RateTables;
    ///
    /// let stamp = r#"{"goa": {"name": "Goa", "male": 4, "female": 3.5, "registration": 1}}"#;
    /// let deposits = r#"{"pune": {"name": "Pune", "min": 2, "max": 4, "typical": 3}}"#;
    ///
    /// let tables = RateTables::from_json_str(stamp, deposits, "goa", "pune").unwrap();
    /// assert_eq!(tables.regions().count(), 1);
    /// ```
    pub fn from_json_str(
        stamp_duty_json: &str,
        deposits_json: &str,
        default_region: &str,
        default_city: &str,
    ) -> Result<Self, Vec<TableError>> {
        let regions = parse_table(TableKind::StampDuty, stamp_duty_json);
        let cities = parse_table(TableKind::Deposit, deposits_json);

        match (regions, cities) {
            (Ok(regions), Ok(cities)) => Self::new(regions, cities, default_region, default_city),
            (regions, cities) => Err(regions.err().into_iter().chain(cities.err()).collect()),
        }
    }

    /// Shared handle to the embedded reference tables
    pub fn builtin() -> Arc<RateTables> {
        Arc::clone(&BUILTIN)
    }

    /// Copy of these tables with different default keys
    pub fn with_defaults(
        &self,
        default_region: &str,
        default_city: &str,
    ) -> Result<Self, Vec<TableError>> {
        Self::new(
            self.regions.clone(),
            self.cities.clone(),
            default_region,
            default_city,
        )
    }

    /// Resolve a region code, falling back to the default region
    pub fn resolve_region(&self, code: &str) -> Lookup<'_, JurisdictionRate> {
        resolve(
            TableKind::StampDuty,
            &self.regions,
            code,
            &self.default_region,
        )
    }

    /// Resolve a city code, falling back to the default city
    pub fn resolve_city(&self, code: &str) -> Lookup<'_, DepositNorm> {
        resolve(TableKind::Deposit, &self.cities, code, &self.default_city)
    }

    /// Exact region lookup, no fallback
    pub fn region(&self, code: &str) -> Option<&JurisdictionRate> {
        self.regions.get(code)
    }

    /// Exact city lookup, no fallback
    pub fn city(&self, code: &str) -> Option<&DepositNorm> {
        self.cities.get(code)
    }

    /// All regions in code order
    pub fn regions(&self) -> impl Iterator<Item = (&str, &JurisdictionRate)> {
        self.regions.iter().map(|(code, rate)| (code.as_str(), rate))
    }

    /// All cities in code order
    pub fn cities(&self) -> impl Iterator<Item = (&str, &DepositNorm)> {
        self.cities.iter().map(|(code, norm)| (code.as_str(), norm))
    }

    pub fn default_region(&self) -> &str {
        &self.default_region
    }

    pub fn default_city(&self) -> &str {
        &self.default_city
    }

    /// SHA-256 hex digest identifying this exact reference data
    pub fn fingerprint(&self) -> &str {
        &self.fingerprint
    }
}

fn parse_table<T: DeserializeOwned>(
    table: TableKind,
    json: &str,
) -> Result<BTreeMap<String, T>, TableError> {
    serde_json::from_str(json).map_err(|e| TableError::Parse {
        table,
        message: e.to_string(),
    })
}

fn resolve<'a, T>(
    table: TableKind,
    records: &'a BTreeMap<String, T>,
    code: &str,
    default_key: &'a str,
) -> Lookup<'a, T> {
    if let Some((key, record)) = records.get_key_value(code) {
        return Lookup {
            key: key.as_str(),
            record,
            fallback: false,
        };
    }

    log::warn!(
        "unknown {} code '{}', falling back to '{}'",
        table,
        code,
        default_key
    );

    Lookup {
        key: default_key,
        // Validation guarantees the default key exists
        record: &records[default_key],
        fallback: true,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_tables_load() {
        let tables = RateTables::builtin();
        assert_eq!(tables.regions().count(), 31);
        assert_eq!(tables.cities().count(), 8);
        assert_eq!(tables.default_region(), DEFAULT_REGION);
        assert_eq!(tables.default_city(), DEFAULT_CITY);
    }

    #[test]
    fn test_builtin_is_shared() {
        assert!(Arc::ptr_eq(&RateTables::builtin(), &RateTables::builtin()));
    }

    #[test]
    fn test_resolve_known_region() {
        let tables = RateTables::builtin();
        let lookup = tables.resolve_region("delhi");
        assert_eq!(lookup.key, "delhi");
        assert_eq!(lookup.record.name, "Delhi NCR");
        assert!(!lookup.is_fallback());
    }

    #[test]
    fn test_resolve_unknown_city_falls_back() {
        let tables = RateTables::builtin();
        let lookup = tables.resolve_city("atlantis");
        assert_eq!(lookup.key, "mumbai");
        assert!(lookup.is_fallback());
    }

    #[test]
    fn test_lookup_is_copy_for_non_copy_records() {
        fn assert_copy<T: Copy>(_: T) {}

        let tables = RateTables::builtin();
        let lookup = tables.resolve_region("goa");
        assert_copy(lookup);
        let copied = lookup;
        assert_eq!(copied.key, lookup.key);
        assert!(std::ptr::eq(copied.record, lookup.record));
    }

    #[test]
    fn test_lookup_is_case_sensitive() {
        let tables = RateTables::builtin();
        assert!(tables.resolve_region("Kerala").is_fallback());
        assert!(tables.region("Kerala").is_none());
    }

    #[test]
    fn test_parse_errors_from_both_tables_reported() {
        let errors = RateTables::from_json_str("not json", "[]", "a", "b").unwrap_err();
        assert_eq!(errors.len(), 2);
        assert!(matches!(
            errors[0],
            TableError::Parse {
                table: TableKind::StampDuty,
                ..
            }
        ));
        assert!(matches!(
            errors[1],
            TableError::Parse {
                table: TableKind::Deposit,
                ..
            }
        ));
    }
}
