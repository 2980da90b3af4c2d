//! Scored outcome of evaluating one trip against one package.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::TripId;

/// A trip judged compatible with a package, with its ranking score.
///
/// Lower scores rank better. Distances are geodesic metres from the package
/// endpoint to its projection on the trip route. `request_sent` belongs to
/// the caller: the matching engine initialises it to `false`, preserves it
/// across re-scans, and never sets it.
///
/// # Examples
///
/// ```
/// use parcelway_core::MatchResult;
///
/// let result = MatchResult::new(42, 310.0, 620.0, 1_450.0, true);
/// assert_eq!(result.trip_id, 42);
/// assert!(!result.request_sent);
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct MatchResult {
    /// The matched trip.
    pub trip_id: TripId,
    /// Ranking score; lower is better.
    pub score: f64,
    /// Metres from the package origin to the trip route.
    pub origin_distance_m: f64,
    /// Metres from the package destination to the trip route.
    pub destination_distance_m: f64,
    /// Whether both endpoints fell inside the corridor.
    pub on_corridor: bool,
    /// Set by the caller once a delivery request has been issued.
    pub request_sent: bool,
}

impl MatchResult {
    /// Construct a result with `request_sent` cleared.
    #[must_use]
    pub const fn new(
        trip_id: TripId,
        score: f64,
        origin_distance_m: f64,
        destination_distance_m: f64,
        on_corridor: bool,
    ) -> Self {
        Self {
            trip_id,
            score,
            origin_distance_m,
            destination_distance_m,
            on_corridor,
            request_sent: false,
        }
    }
}
