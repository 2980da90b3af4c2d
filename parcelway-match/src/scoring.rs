//! Score computation for on-corridor trips.

/// Endpoint distances below this mark earn the proximity bonus (metres).
pub(crate) const NEAR_THRESHOLD_M: f64 = 1_000.0;

/// Score reduction granted per near endpoint.
pub(crate) const NEAR_BONUS: f64 = 500.0;

/// Score a trip from its endpoint-to-route distances. Lower is better.
///
/// The base score is the mean of the two distances; each endpoint closer
/// than [`NEAR_THRESHOLD_M`] subtracts [`NEAR_BONUS`]. Clamped at zero so a
/// doubly-near trip cannot rank below a perfect one.
pub(crate) fn corridor_score(origin_distance_m: f64, destination_distance_m: f64) -> f64 {
    let mut bonus = 0.0;
    if origin_distance_m < NEAR_THRESHOLD_M {
        bonus += NEAR_BONUS;
    }
    if destination_distance_m < NEAR_THRESHOLD_M {
        bonus += NEAR_BONUS;
    }
    ((origin_distance_m + destination_distance_m) / 2.0 - bonus).max(0.0)
}
