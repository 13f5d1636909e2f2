//! Cost Estimation Engine
//!
//! Combines the rate tables with the two pure calculations:
//! - [`CostEngine::compute_stamp_duty`]: stamp duty + registration
//! - [`CostEngine::compute_move_in_estimate`]: deposit range + move-in total
//!
//! # Critical Invariants
//!
//! 1. Calculations are pure: identical inputs give bit-identical results
//! 2. Unknown codes never fail; they resolve to the configured default
//! 3. Negative or non-finite amounts are rejected before computing
//!
//! The engine holds no mutable state and is safe to share across threads.

pub mod config;
pub mod error;
pub mod move_in;
pub mod stamp_duty;

use crate::models::estimate::{MoveInEstimate, StampDutyResult};
use crate::models::rates::BuyerClass;
use crate::tables::RateTables;
use once_cell::sync::Lazy;
use std::sync::Arc;

pub use config::{EstimatorConfig, DEFAULT_ADVISORY_THRESHOLD_MONTHS};
pub use error::{ensure_amount, ensure_positive, EstimateError};
pub use move_in::{advisory_message, move_in_for};
pub use stamp_duty::stamp_duty_for;

static DEFAULT_ENGINE: Lazy<CostEngine> = Lazy::new(CostEngine::default);

/// Stateless estimator over a set of rate tables
#[derive(Debug, Clone)]
pub struct CostEngine {
    tables: Arc<RateTables>,
    config: EstimatorConfig,
}

impl Default for CostEngine {
    /// Built-in tables with the default configuration
    fn default() -> Self {
        Self {
            tables: RateTables::builtin(),
            config: EstimatorConfig::default(),
        }
    }
}

impl CostEngine {
    /// Create an engine over the built-in tables
    ///
    /// # Errors
    ///
    /// Fails when `config` names a default region or city that the
    /// built-in tables do not contain.
    pub fn new(config: EstimatorConfig) -> Result<Self, EstimateError> {
        Self::with_tables(RateTables::builtin(), config)
    }

    /// Create an engine over caller-supplied tables
    ///
    /// The defaults in `config` take precedence over the ones the tables
    /// were loaded with.
    pub fn with_tables(
        tables: Arc<RateTables>,
        config: EstimatorConfig,
    ) -> Result<Self, EstimateError> {
        let tables = if tables.default_region() == config.default_region
            && tables.default_city() == config.default_city
        {
            tables
        } else {
            Arc::new(tables.with_defaults(&config.default_region, &config.default_city)?)
        };

        Ok(Self { tables, config })
    }

    /// Compute stamp duty and registration charges
    ///
    /// # Arguments
    /// * `price` - Property value in rupees
    /// * `region_code` - Lowercase jurisdiction key (e.g., "karnataka")
    /// * `buyer_class` - Selects the standard or concessional rate
    ///
    /// # Errors
    ///
    /// `InvalidInput` when `price` is negative or not finite. Unknown
    /// region codes are not an error.
    ///
    /// # Example
    /// ```
    /// use property_cost_core_rs::{BuyerClass, CostEngine};
    ///
    /// let engine = CostEngine::default();
    /// let result = engine
    ///     .compute_stamp_duty(5_000_000.0, "maharashtra", BuyerClass::Standard)
    ///     .unwrap();
    /// assert_eq!(result.stamp_duty_amount, 300_000.0);
    /// assert_eq!(result.registration_amount, 50_000.0);
    /// assert_eq!(result.total_amount, 350_000.0);
    /// ```
    pub fn compute_stamp_duty(
        &self,
        price: f64,
        region_code: &str,
        buyer_class: BuyerClass,
    ) -> Result<StampDutyResult, EstimateError> {
        let price = ensure_amount("price", price)?;
        let lookup = self.tables.resolve_region(region_code);
        Ok(stamp_duty_for(price, lookup.record, buyer_class))
    }

    /// Compute deposit range and total move-in cost
    ///
    /// # Arguments
    /// * `monthly_rent` - Rent in rupees per month
    /// * `city_code` - Lowercase city key (e.g., "pune")
    ///
    /// # Example
    /// ```
    /// use property_cost_core_rs::CostEngine;
    ///
    /// let engine = CostEngine::default();
    /// let estimate = engine.compute_move_in_estimate(25_000.0, "bangalore").unwrap();
    /// assert_eq!(estimate.typical_deposit, 250_000.0);
    /// assert!(estimate.high_deposit_advisory);
    /// ```
    pub fn compute_move_in_estimate(
        &self,
        monthly_rent: f64,
        city_code: &str,
    ) -> Result<MoveInEstimate, EstimateError> {
        let monthly_rent = ensure_amount("monthly_rent", monthly_rent)?;
        let lookup = self.tables.resolve_city(city_code);
        Ok(move_in_for(
            monthly_rent,
            lookup.record,
            self.config.advisory_threshold_months,
        ))
    }

    /// Advisory text for a city, if its typical deposit crosses the threshold
    pub fn deposit_advisory(&self, city_code: &str) -> Option<String> {
        let norm = self.tables.resolve_city(city_code).record;
        norm.exceeds_threshold(self.config.advisory_threshold_months)
            .then(|| advisory_message(norm))
    }

    pub fn tables(&self) -> &RateTables {
        &self.tables
    }

    pub fn config(&self) -> &EstimatorConfig {
        &self.config
    }
}

/// [`CostEngine::compute_stamp_duty`] on the shared default engine
pub fn compute_stamp_duty(
    price: f64,
    region_code: &str,
    buyer_class: BuyerClass,
) -> Result<StampDutyResult, EstimateError> {
    DEFAULT_ENGINE.compute_stamp_duty(price, region_code, buyer_class)
}

/// [`CostEngine::compute_move_in_estimate`] on the shared default engine
pub fn compute_move_in_estimate(
    monthly_rent: f64,
    city_code: &str,
) -> Result<MoveInEstimate, EstimateError> {
    DEFAULT_ENGINE.compute_move_in_estimate(monthly_rent, city_code)
}
