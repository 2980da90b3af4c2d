//! The corridor matching engine.

use std::time::SystemTime;

use rayon::prelude::*;
use thiserror::Error;

use parcelway_core::{
    GeometryError, GeometryProvider, MatchResult, MatchSession, Package, Trip, TripFilter,
    TripLookup, TripLookupError, TripStatus,
};

use crate::scoring::corridor_score;

/// Tunable parameters for [`MatchEngine`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MatchConfig {
    /// Half-width of the acceptance corridor around a trip route, in
    /// kilometres. Both package endpoints must project within this distance
    /// of the route.
    pub corridor_width_km: f64,
}

impl MatchConfig {
    /// Corridor width in metres, the unit route distances come back in.
    #[must_use]
    pub fn corridor_width_m(&self) -> f64 {
        self.corridor_width_km * 1_000.0
    }
}

impl Default for MatchConfig {
    fn default() -> Self {
        Self {
            corridor_width_km: 5.0,
        }
    }
}

/// Errors returned by [`MatchEngine::find_matched_trips`].
///
/// Only the candidate lookup is fatal; failures analysing individual trips
/// are logged and the trip skipped.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MatchError {
    /// The trip candidate lookup failed.
    #[error("trip candidate lookup failed")]
    Lookup(#[from] TripLookupError),
}

/// Matches packages against candidate trips and maintains the session cache.
///
/// The engine is generic over its two seams: the geometry provider and the
/// trip lookup. Configuration is captured at construction.
///
/// # Examples
///
/// ```
/// use parcelway_core::{
///     HaversineGeometry, Location, MatchSession, Package, Trip, TripFilter, TripLookup,
///     TripLookupError,
/// };
/// use parcelway_match::MatchEngine;
///
/// struct NoTrips;
///
/// impl TripLookup for NoTrips {
///     fn find_candidates(&self, _filter: &TripFilter) -> Result<Vec<Trip>, TripLookupError> {
///         Ok(Vec::new())
///     }
/// }
///
/// let engine = MatchEngine::new(HaversineGeometry, NoTrips);
/// let package = Package {
///     id: 1,
///     weight_g: None,
///     origin: Location::new(0.0, 0.1),
///     destination: Location::new(0.0, 0.9),
/// };
/// let mut session = MatchSession::new();
/// let matches = engine.find_matched_trips(&package, &mut session, 10)?;
/// assert!(matches.is_empty());
/// # Ok::<(), parcelway_match::MatchError>(())
/// ```
pub struct MatchEngine<G, L>
where
    G: GeometryProvider,
    L: TripLookup,
{
    geometry: G,
    lookup: L,
    config: MatchConfig,
}

impl<G, L> MatchEngine<G, L>
where
    G: GeometryProvider,
    L: TripLookup,
{
    /// Construct an engine with default configuration.
    pub fn new(geometry: G, lookup: L) -> Self {
        Self::with_config(geometry, lookup, MatchConfig::default())
    }

    /// Construct an engine with explicit configuration.
    pub const fn with_config(geometry: G, lookup: L, config: MatchConfig) -> Self {
        Self {
            geometry,
            lookup,
            config,
        }
    }

    /// Match `package` against open trips and return the best results.
    ///
    /// Looks up candidates (narrowed to trips updated since the session's
    /// last scan, and to sufficient capacity when the package weight is
    /// known), evaluates them in parallel, merges the outcome into the
    /// session's per-package state, and returns the top `max_results` of the
    /// merged ranking. The full merged list stays in the session.
    ///
    /// Trips whose analysis fails are logged and omitted; they never abort
    /// the other candidates.
    ///
    /// # Errors
    /// Returns [`MatchError::Lookup`] when the candidate lookup itself
    /// fails. The session is left untouched in that case.
    pub fn find_matched_trips(
        &self,
        package: &Package,
        session: &mut MatchSession,
        max_results: usize,
    ) -> Result<Vec<MatchResult>, MatchError> {
        let filter = TripFilter {
            statuses: TripStatus::open_for_matching().to_vec(),
            min_capacity_g: package.weight_g,
            updated_since: session.state(package.id).and_then(|s| s.last_check),
        };
        let candidates = self.lookup.find_candidates(&filter)?;
        let scanned_at = SystemTime::now();

        let fresh: Vec<MatchResult> = candidates
            .par_iter()
            .filter_map(|trip| match self.evaluate_trip(package, trip) {
                Ok(outcome) => outcome,
                Err(error) => {
                    log::warn!(
                        "skipping trip {} for package {}: {error}",
                        trip.id,
                        package.id
                    );
                    None
                }
            })
            .collect();

        let state = session.state_mut_or_insert(package.id);
        state.merge_results(fresh);
        state.last_check = Some(scanned_at);
        Ok(state.ranked(max_results))
    }

    /// Evaluate a single candidate trip against the package endpoints.
    ///
    /// `Ok(None)` means the trip is incompatible (outside the corridor or
    /// wrong direction); `Err` means its geometry could not be analysed.
    fn evaluate_trip(
        &self,
        package: &Package,
        trip: &Trip,
    ) -> Result<Option<MatchResult>, GeometryError> {
        let route = self
            .geometry
            .build_route(trip.origin, trip.destination, &trip.waypoints);
        let origin_distance = self.geometry.distance_to_route(package.origin, &route)?;
        let destination_distance = self
            .geometry
            .distance_to_route(package.destination, &route)?;

        let width_m = self.config.corridor_width_m();
        if origin_distance > width_m || destination_distance > width_m {
            return Ok(None);
        }
        if !self
            .geometry
            .direction_compatible(&route, package.origin, package.destination)
        {
            return Ok(None);
        }

        let score = corridor_score(origin_distance, destination_distance);
        Ok(Some(MatchResult::new(
            trip.id,
            score,
            origin_distance,
            destination_distance,
            true,
        )))
    }
}
