//! Estimator configuration

use serde::{Deserialize, Serialize};

use crate::tables::{DEFAULT_CITY, DEFAULT_REGION};

/// Typical deposit (in months) at which tenants should be warned
pub const DEFAULT_ADVISORY_THRESHOLD_MONTHS: u32 = 8;

/// Estimator Configuration
///
/// Defaults reproduce the marketplace's behaviour: Maharashtra and Mumbai
/// as fallbacks, and a deposit advisory from eight months up.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EstimatorConfig {
    /// Region used for unknown stamp duty codes
    #[serde(default = "default_region")]
    pub default_region: String,

    /// City used for unknown deposit codes
    #[serde(default = "default_city")]
    pub default_city: String,

    /// `MoveInEstimate::high_deposit_advisory` is set when the typical
    /// deposit is at least this many months
    #[serde(default = "default_advisory_threshold")]
    pub advisory_threshold_months: u32,
}

fn default_region() -> String {
    DEFAULT_REGION.to_string()
}

fn default_city() -> String {
    DEFAULT_CITY.to_string()
}

fn default_advisory_threshold() -> u32 {
    DEFAULT_ADVISORY_THRESHOLD_MONTHS
}

impl Default for EstimatorConfig {
    fn default() -> Self {
        Self {
            default_region: default_region(),
            default_city: default_city(),
            advisory_threshold_months: default_advisory_threshold(),
        }
    }
}
