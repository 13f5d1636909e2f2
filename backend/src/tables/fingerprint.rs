//! Content fingerprint of loaded rate tables
//!
//! The reference data is replaceable, so estimates are only reproducible
//! if the caller can tell which tables produced them. The fingerprint is a
//! SHA-256 over a canonical JSON rendering: maps are `BTreeMap`s, so key
//! order is fixed regardless of the order in the source file.

use super::validation::TableError;
use serde::Serialize;
use sha2::{Digest, Sha256};

/// Compute a hex SHA-256 digest of `value`'s canonical JSON form
pub fn compute_fingerprint<T: Serialize>(value: &T) -> Result<String, TableError> {
    let json =
        serde_json::to_string(value).map_err(|e| TableError::Serialization(e.to_string()))?;

    let mut hasher = Sha256::new();
    hasher.update(json.as_bytes());
    let result = hasher.finalize();

    Ok(format!("{:x}", result))
}
