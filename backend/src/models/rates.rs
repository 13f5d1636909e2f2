//! Rate table records
//!
//! One [`JurisdictionRate`] per state or union territory and one
//! [`DepositNorm`] per city. Both are plain data; validation happens when a
//! table is loaded (see `crate::tables`).
//!
//! All percentages are expressed as "percent of price" (6.0 means 6%).

use serde::{Deserialize, Serialize};

/// Buyer category used to select the stamp duty rate
///
/// Which real-world buyers qualify for the concessional rate is a caller
/// policy decision. The engine only distinguishes the two columns of the
/// jurisdiction table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BuyerClass {
    /// Full rate (`male` column of the reference data)
    #[default]
    Standard,
    /// Reduced rate where a jurisdiction offers one (`female` column)
    Concessional,
}

/// Stamp duty and registration rates for one jurisdiction
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct JurisdictionRate {
    /// Display name (e.g., "Delhi NCR")
    pub name: String,

    /// Stamp duty rate for [`BuyerClass::Standard`], in percent
    #[serde(rename = "male")]
    pub male_rate_percent: f64,

    /// Stamp duty rate for [`BuyerClass::Concessional`], in percent
    ///
    /// Equal to `male_rate_percent` for most jurisdictions.
    #[serde(rename = "female")]
    pub female_rate_percent: f64,

    /// Registration charge rate, in percent, independent of buyer class
    #[serde(rename = "registration")]
    pub registration_rate_percent: f64,
}

impl JurisdictionRate {
    /// Stamp duty rate (percent) applicable to `buyer_class`
    ///
    /// # Example
    /// ```
    /// use property_cost_core_rs::{BuyerClass, JurisdictionRate};
    ///
    /// let rate = JurisdictionRate {
    ///     name: "Maharashtra".to_string(),
    ///     male_rate_percent: 6.0,
    ///     female_rate_percent: 5.0,
    ///     registration_rate_percent: 1.0,
    /// };
    /// assert_eq!(rate.stamp_duty_rate(BuyerClass::Standard), 6.0);
    /// assert_eq!(rate.stamp_duty_rate(BuyerClass::Concessional), 5.0);
    /// ```
    pub fn stamp_duty_rate(&self, buyer_class: BuyerClass) -> f64 {
        match buyer_class {
            BuyerClass::Standard => self.male_rate_percent,
            BuyerClass::Concessional => self.female_rate_percent,
        }
    }

    /// True when the concessional rate is lower than the standard one
    pub fn has_concession(&self) -> bool {
        self.female_rate_percent < self.male_rate_percent
    }
}

/// Customary security deposit, in months of rent, for one city
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DepositNorm {
    /// Display name (e.g., "Bangalore")
    pub name: String,

    #[serde(rename = "min")]
    pub min_months: u32,

    #[serde(rename = "max")]
    pub max_months: u32,

    /// Deposit most landlords ask for; always within `[min, max]`
    #[serde(rename = "typical")]
    pub typical_months: u32,
}

impl DepositNorm {
    /// Check `min <= typical <= max`
    pub fn is_ordered(&self) -> bool {
        self.min_months <= self.typical_months && self.typical_months <= self.max_months
    }

    /// Whether the typical deposit is high enough to warn tenants about
    pub fn exceeds_threshold(&self, threshold_months: u32) -> bool {
        self.typical_months >= threshold_months
    }
}
