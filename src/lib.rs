//! Facade crate for the Parcelway delivery engine.
//!
//! This crate re-exports the core domain types together with the corridor
//! matching and pricing engines so callers depend on a single crate.

#![forbid(unsafe_code)]

pub use parcelway_core::{
    GeometryError, GeometryProvider, HaversineGeometry, Location, MatchResult, MatchSession,
    Package, PackageId, PackageMatchState, Route, Trip, TripFilter, TripId, TripLookup,
    TripLookupError, TripStatus,
};

pub use parcelway_match::{MatchConfig, MatchEngine, MatchError};

pub use parcelway_pricing::{
    Breakdown, CityPremiums, DistanceBand, PricingConfig, PricingEngine, Quote, QuoteRequest,
    SpecialHandlingRates,
};

#[cfg(feature = "test-support")]
pub use parcelway_core::test_support::MemoryTripLookup;
