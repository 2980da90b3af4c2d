//! Core domain types for the Parcelway delivery engine.
//!
//! Parcelway matches packages awaiting delivery against trips offered by
//! transporters. This crate holds the shared vocabulary of that process:
//! coordinates and routes, packages and trips, per-package match results,
//! the caller-owned match session, and the two trait seams the engines are
//! generic over ([`GeometryProvider`] and [`TripLookup`]).
//!
//! The crate performs no I/O. Persistence, transport, and authentication are
//! the caller's collaborators; the only contracts consumed here are a trip
//! candidate lookup and a mutable session object.

#![forbid(unsafe_code)]

pub mod geometry;
mod location;
mod match_result;
mod package;
mod session;
mod trip;
pub mod trip_lookup;

#[cfg(any(test, feature = "test-support"))]
pub mod test_support;

pub use geometry::{GeometryError, GeometryProvider, HaversineGeometry};
pub use location::{Location, Route};
pub use match_result::MatchResult;
pub use package::{Package, PackageId};
pub use session::{MatchSession, PackageMatchState};
pub use trip::{Trip, TripId, TripStatus};
pub use trip_lookup::{TripFilter, TripLookup, TripLookupError};
