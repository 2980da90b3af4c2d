//! Geographic coordinates and ordered route geometry.

use geo::{Coord, LineString, Point};
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// A point on the earth in decimal degrees.
///
/// Equality is exact coordinate-pair equality; two locations are the same
/// only when both latitude and longitude match bit-for-bit. Conversions to
/// `geo` primitives map longitude to `x` and latitude to `y`.
///
/// # Examples
///
/// ```
/// use parcelway_core::Location;
///
/// let tehran = Location::new(35.6892, 51.3890);
/// assert_eq!(tehran.lat, 35.6892);
/// assert_eq!(tehran.to_point().x(), 51.3890);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Location {
    /// Latitude in decimal degrees.
    pub lat: f64,
    /// Longitude in decimal degrees.
    pub lon: f64,
}

impl Location {
    /// Construct a location from latitude and longitude.
    #[must_use]
    pub const fn new(lat: f64, lon: f64) -> Self {
        Self { lat, lon }
    }

    /// Convert to a `geo` point (`x` = longitude, `y` = latitude).
    #[must_use]
    pub const fn to_point(self) -> Point<f64> {
        Point(self.to_coord())
    }

    /// Convert to a `geo` coordinate (`x` = longitude, `y` = latitude).
    #[must_use]
    pub const fn to_coord(self) -> Coord<f64> {
        Coord {
            x: self.lon,
            y: self.lat,
        }
    }
}

impl From<Location> for Point<f64> {
    fn from(location: Location) -> Self {
        location.to_point()
    }
}

/// An immutable ordered path: origin, then waypoints in the order supplied,
/// then destination.
///
/// The matching path never reorders waypoints; callers that want waypoints
/// sorted along the travel axis do so before building the route (see
/// [`GeometryProvider::sort_by_route_order`](crate::GeometryProvider::sort_by_route_order)).
///
/// # Examples
///
/// ```
/// use parcelway_core::{Location, Route};
///
/// let route = Route::new(
///     Location::new(0.0, 0.0),
///     Location::new(0.0, 1.0),
///     vec![Location::new(0.0, 0.5)],
/// );
/// assert_eq!(route.points().len(), 3);
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Route {
    points: Vec<Location>,
}

impl Route {
    /// Build a route in the fixed order origin, waypoints, destination.
    #[must_use]
    pub fn new(origin: Location, destination: Location, waypoints: Vec<Location>) -> Self {
        let mut points = Vec::with_capacity(waypoints.len() + 2);
        points.push(origin);
        points.extend(waypoints);
        points.push(destination);
        Self { points }
    }

    /// The ordered points of the route. Always contains at least two entries.
    #[must_use]
    pub fn points(&self) -> &[Location] {
        &self.points
    }

    /// Convert the route into a `geo` line string for projection work.
    #[must_use]
    pub fn line_string(&self) -> LineString<f64> {
        self.points.iter().map(|p| p.to_coord()).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    fn route_preserves_waypoint_order() {
        let origin = Location::new(0.0, 0.0);
        let destination = Location::new(0.0, 3.0);
        let waypoints = vec![Location::new(0.0, 2.0), Location::new(0.0, 1.0)];
        let route = Route::new(origin, destination, waypoints);
        let lons: Vec<f64> = route.points().iter().map(|p| p.lon).collect();
        assert_eq!(lons, vec![0.0, 2.0, 1.0, 3.0]);
    }

    #[rstest]
    fn route_without_waypoints_has_two_points() {
        let route = Route::new(Location::new(0.0, 0.0), Location::new(1.0, 1.0), Vec::new());
        assert_eq!(route.points().len(), 2);
    }

    #[rstest]
    fn line_string_maps_lon_to_x() {
        let route = Route::new(Location::new(2.0, 5.0), Location::new(3.0, 6.0), Vec::new());
        let line = route.line_string();
        let first = line.coords().next().copied();
        assert_eq!(first, Some(geo::Coord { x: 5.0, y: 2.0 }));
    }
}
