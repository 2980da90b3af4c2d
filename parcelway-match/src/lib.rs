//! Corridor matching of packages against transporter trips.
//!
//! [`MatchEngine`] retrieves candidate trips through the caller-supplied
//! lookup, evaluates each trip's route against the package's endpoints with
//! a [`GeometryProvider`](parcelway_core::GeometryProvider), scores the
//! compatible trips, and maintains the incrementally merged result cache in
//! the caller's [`MatchSession`](parcelway_core::MatchSession).
//!
//! Candidate trips are evaluated in parallel; a failure analysing one trip
//! is logged and that trip skipped, never failing the batch.

#![forbid(unsafe_code)]

mod engine;
mod scoring;

pub use engine::{MatchConfig, MatchEngine, MatchError};
