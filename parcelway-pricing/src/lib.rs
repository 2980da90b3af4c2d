//! Tariff and pricing computation for Parcelway deliveries.
//!
//! [`PricingEngine`] turns distance, weight, special-handling flags, and the
//! origin/destination city tier into a suggested delivery price with a full
//! cost breakdown and the transporter/platform revenue split. Deviation
//! surcharges for detours are computed separately and added on top of the
//! accepted price.
//!
//! Inputs are assumed pre-validated by the caller; numeric edge cases (zero
//! distance, zero weight) produce zero-contribution costs rather than
//! errors, so this crate has no error type.

#![forbid(unsafe_code)]

mod config;
mod engine;
mod quote;

pub use config::{CityPremiums, DistanceBand, PricingConfig, SpecialHandlingRates};
pub use engine::PricingEngine;
pub use quote::{Breakdown, Quote, QuoteRequest};
