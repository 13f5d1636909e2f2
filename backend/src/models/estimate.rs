//! Computed estimate records
//!
//! Built fresh for every calculation and handed straight back to the
//! caller. Amounts are in rupees and never rounded here; rounding is a
//! display concern (see `crate::core::currency`).

use serde::{Deserialize, Serialize};

/// Stamp duty and registration charges for one property purchase
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct StampDutyResult {
    pub stamp_duty_amount: f64,
    pub registration_amount: f64,
    /// `stamp_duty_amount + registration_amount`
    pub total_amount: f64,
}

/// Deposit range and up-front cost of moving into a rental
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MoveInEstimate {
    pub min_deposit: f64,
    pub typical_deposit: f64,
    pub max_deposit: f64,
    /// One month of rent
    pub broker_fee: f64,
    /// One month of rent
    pub advance_rent: f64,
    /// `typical_deposit + broker_fee + advance_rent`
    pub total_move_in: f64,
    /// Set when the city's typical deposit is at or above the advisory threshold
    pub high_deposit_advisory: bool,
}
