//! `GeometryProvider` backed by the `geo` crate.

use geo::algorithm::Distance;
use geo::{Closest, ClosestPoint, Haversine, Line, LineLocatePoint, LineString, Point};

use crate::{GeometryError, GeometryProvider, Location, Route};

/// Haversine-based geometry on `geo` primitives.
///
/// Nearest-point projection runs in coordinate space via
/// [`ClosestPoint`]; the distance to the projected point is geodesic via
/// [`Haversine`]. Along-route ordering uses [`LineLocatePoint`], which
/// reports the fractional position of a projection along a line.
#[derive(Debug, Default, Clone, Copy)]
pub struct HaversineGeometry;

impl HaversineGeometry {
    fn along_route_position(line: &LineString<f64>, point: Location) -> Option<f64> {
        line.line_locate_point(&point.to_point())
    }
}

impl GeometryProvider for HaversineGeometry {
    fn build_route(
        &self,
        origin: Location,
        destination: Location,
        waypoints: &[Location],
    ) -> Route {
        Route::new(origin, destination, waypoints.to_vec())
    }

    fn distance_to_route(&self, point: Location, route: &Route) -> Result<f64, GeometryError> {
        let line = route.line_string();
        let target = point.to_point();
        match line.closest_point(&target) {
            Closest::Intersection(projection) | Closest::SinglePoint(projection) => {
                Ok(Haversine.distance(target, projection))
            }
            // Degenerate geometry (e.g. zero-length segments); fall back to
            // the nearest vertex.
            Closest::Indeterminate => nearest_vertex_distance(&line, target),
        }
    }

    fn direction_compatible(&self, route: &Route, pickup: Location, dropoff: Location) -> bool {
        let line = route.line_string();
        match (
            Self::along_route_position(&line, pickup),
            Self::along_route_position(&line, dropoff),
        ) {
            (Some(pickup_at), Some(dropoff_at)) => pickup_at < dropoff_at,
            _ => false,
        }
    }

    fn sort_by_route_order(
        &self,
        origin: Location,
        destination: Location,
        locations: &[Location],
    ) -> Vec<Location> {
        let axis = Line::new(origin.to_coord(), destination.to_coord());
        let mut unique: Vec<Location> = Vec::with_capacity(locations.len());
        for candidate in locations {
            if !unique.contains(candidate) {
                unique.push(*candidate);
            }
        }
        let mut keyed: Vec<(f64, Location)> = unique
            .into_iter()
            .map(|location| {
                let position = axis.line_locate_point(&location.to_point()).unwrap_or(0.0);
                (position, location)
            })
            .collect();
        keyed.sort_by(|a, b| a.0.total_cmp(&b.0));
        keyed.into_iter().map(|(_, location)| location).collect()
    }
}

fn nearest_vertex_distance(
    line: &LineString<f64>,
    target: Point<f64>,
) -> Result<f64, GeometryError> {
    line.points()
        .map(|vertex| Haversine.distance(target, vertex))
        .min_by(f64::total_cmp)
        .ok_or(GeometryError::DegenerateRoute)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::{fixture, rstest};

    /// Metres per degree of latitude (and of longitude at the equator).
    const DEG_M: f64 = 111_195.0;

    #[fixture]
    fn geometry() -> HaversineGeometry {
        HaversineGeometry
    }

    /// Route along the equator from longitude 0 to longitude 1.
    #[fixture]
    fn equator_route(geometry: HaversineGeometry) -> Route {
        geometry.build_route(Location::new(0.0, 0.0), Location::new(0.0, 1.0), &[])
    }

    #[rstest]
    fn distance_to_route_measures_perpendicular_offset(
        geometry: HaversineGeometry,
        equator_route: Route,
    ) {
        let point = Location::new(0.01, 0.5);
        let distance = geometry
            .distance_to_route(point, &equator_route)
            .expect("projection succeeds");
        let expected = 0.01 * DEG_M;
        assert!(
            (distance - expected).abs() < expected * 0.01,
            "distance {distance} not within 1% of {expected}"
        );
    }

    #[rstest]
    fn distance_to_route_is_zero_on_the_line(geometry: HaversineGeometry, equator_route: Route) {
        let distance = geometry
            .distance_to_route(Location::new(0.0, 0.25), &equator_route)
            .expect("projection succeeds");
        assert!(distance < 1.0, "expected near-zero, got {distance}");
    }

    #[rstest]
    fn distance_beyond_endpoint_measures_to_endpoint(
        geometry: HaversineGeometry,
        equator_route: Route,
    ) {
        // Half a degree past the destination along the equator.
        let distance = geometry
            .distance_to_route(Location::new(0.0, 1.5), &equator_route)
            .expect("projection succeeds");
        let expected = 0.5 * DEG_M;
        assert!(
            (distance - expected).abs() < expected * 0.01,
            "distance {distance} not within 1% of {expected}"
        );
    }

    #[rstest]
    fn zero_length_route_falls_back_to_vertex_distance(geometry: HaversineGeometry) {
        let route = geometry.build_route(Location::new(0.0, 0.0), Location::new(0.0, 0.0), &[]);
        let distance = geometry
            .distance_to_route(Location::new(0.01, 0.0), &route)
            .expect("fallback succeeds");
        let expected = 0.01 * DEG_M;
        assert!((distance - expected).abs() < expected * 0.01);
    }

    #[rstest]
    fn forward_travel_is_direction_compatible(geometry: HaversineGeometry, equator_route: Route) {
        let pickup = Location::new(0.001, 0.2);
        let dropoff = Location::new(-0.001, 0.8);
        assert!(geometry.direction_compatible(&equator_route, pickup, dropoff));
    }

    #[rstest]
    fn reverse_travel_is_not_direction_compatible(
        geometry: HaversineGeometry,
        equator_route: Route,
    ) {
        let pickup = Location::new(0.001, 0.8);
        let dropoff = Location::new(-0.001, 0.2);
        assert!(!geometry.direction_compatible(&equator_route, pickup, dropoff));
    }

    #[rstest]
    fn waypoints_shape_the_projection(geometry: HaversineGeometry) {
        // A dog-leg through (0.5, 0.5) brings the corridor near that corner.
        let route = geometry.build_route(
            Location::new(0.0, 0.0),
            Location::new(0.0, 1.0),
            &[Location::new(0.5, 0.5)],
        );
        let distance = geometry
            .distance_to_route(Location::new(0.4, 0.45), &route)
            .expect("projection succeeds");
        assert!(
            distance < 0.1 * DEG_M,
            "point near the waypoint leg should be close, got {distance}"
        );
    }

    #[rstest]
    fn sort_by_route_order_orders_along_the_axis(geometry: HaversineGeometry) {
        let origin = Location::new(0.0, 0.0);
        let destination = Location::new(0.0, 1.0);
        let ordered = geometry.sort_by_route_order(
            origin,
            destination,
            &[
                Location::new(0.0, 0.9),
                Location::new(0.0, 0.1),
                Location::new(0.0, 0.5),
            ],
        );
        let lons: Vec<f64> = ordered.iter().map(|l| l.lon).collect();
        assert_eq!(lons, vec![0.1, 0.5, 0.9]);
    }

    #[rstest]
    fn sort_by_route_order_drops_exact_duplicates(geometry: HaversineGeometry) {
        let origin = Location::new(0.0, 0.0);
        let destination = Location::new(0.0, 1.0);
        let duplicate = Location::new(0.0, 0.3);
        let ordered = geometry.sort_by_route_order(
            origin,
            destination,
            &[duplicate, Location::new(0.0, 0.7), duplicate],
        );
        assert_eq!(ordered.len(), 2);
    }
}
