//! Computational geometry used to reason about routes and proximity.
//!
//! The [`GeometryProvider`] trait is the seam between the matching engine
//! and whichever geometry library backs it. It exposes exactly the four
//! capabilities corridor matching needs: route construction, nearest-point
//! projection with geodesic distance, along-route direction ordering, and
//! route-order sorting of loose locations. [`HaversineGeometry`] is the
//! shipped implementation on the `geo` crate.
//!
//! Projections are computed in coordinate space (decimal degrees); distances
//! to the projected point are geodesic (haversine) metres. At corridor
//! scale the approximation error is far below the corridor width.

mod haversine;

pub use haversine::HaversineGeometry;

use thiserror::Error;

use crate::{Location, Route};

/// Errors raised by geometry operations.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GeometryError {
    /// The route had no usable points to project against.
    #[error("route has no usable points")]
    DegenerateRoute,
}

/// Pure geometric operations over routes and points.
///
/// Implementations must be `Send + Sync`; the matching engine evaluates
/// trips in parallel against a shared provider. All operations are
/// side-effect free.
///
/// # Examples
///
/// ```
/// use parcelway_core::{GeometryProvider, HaversineGeometry, Location};
///
/// let geometry = HaversineGeometry;
/// let route = geometry.build_route(
///     Location::new(0.0, 0.0),
///     Location::new(0.0, 1.0),
///     &[],
/// );
/// let distance = geometry.distance_to_route(Location::new(0.01, 0.5), &route)?;
/// assert!(distance > 1_000.0 && distance < 1_250.0);
/// # Ok::<(), parcelway_core::GeometryError>(())
/// ```
pub trait GeometryProvider: Send + Sync {
    /// Build route geometry in the fixed order origin, waypoints
    /// (as supplied), destination.
    fn build_route(
        &self,
        origin: Location,
        destination: Location,
        waypoints: &[Location],
    ) -> Route;

    /// Project `point` onto the nearest position of `route` and return the
    /// geodesic distance in metres to that projection.
    ///
    /// Must fall back to the minimum vertex distance when the projection is
    /// indeterminate, so the operation never fails for a well-formed route
    /// with at least two points.
    ///
    /// # Errors
    /// Returns [`GeometryError::DegenerateRoute`] when the route offers no
    /// points to measure against.
    fn distance_to_route(&self, point: Location, route: &Route) -> Result<f64, GeometryError>;

    /// Whether `pickup` projects to a strictly earlier along-route position
    /// than `dropoff` when travelling the route in its stated direction.
    ///
    /// Returns `false` when either projection cannot be determined.
    fn direction_compatible(&self, route: &Route, pickup: Location, dropoff: Location) -> bool;

    /// Deduplicate `locations` by exact coordinate pair and order the
    /// survivors by their projected position along the straight line from
    /// `origin` to `destination`, ascending.
    fn sort_by_route_order(
        &self,
        origin: Location,
        destination: Location,
        locations: &[Location],
    ) -> Vec<Location>;
}
