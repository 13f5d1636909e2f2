//! Core presentation utilities shared by all estimators

pub mod currency;

pub use currency::{format_inr, format_inr_compact, group_en_in};
