//! Candidate-trip retrieval seam.
//!
//! The `TripLookup` trait is the matching engine's only suspension point:
//! given filter criteria it returns trip geometry records from whatever
//! store the caller wires in. Timeouts and cancellation for the lookup are
//! the implementation's responsibility; the engine invokes it once per
//! matching call.

use std::sync::Arc;
use std::time::SystemTime;

use thiserror::Error;

use crate::{Trip, TripStatus};

/// Filter criteria for a candidate-trip lookup.
///
/// # Examples
///
/// ```
/// use parcelway_core::{TripFilter, TripStatus};
///
/// let filter = TripFilter {
///     statuses: TripStatus::open_for_matching().to_vec(),
///     min_capacity_g: Some(2_000),
///     updated_since: None,
/// };
/// assert_eq!(filter.statuses.len(), 2);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct TripFilter {
    /// Only trips in one of these states qualify.
    pub statuses: Vec<TripStatus>,
    /// When set, only trips with no declared capacity or a capacity of at
    /// least this many grams qualify.
    pub min_capacity_g: Option<u32>,
    /// When set, only trips updated after this instant qualify. Drives
    /// incremental re-scans; safe because prior results are retained on
    /// merge.
    pub updated_since: Option<SystemTime>,
}

/// Errors raised by a trip lookup.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TripLookupError {
    /// The underlying trip source could not be queried.
    #[error("failed to query trip source: {message}")]
    Query {
        /// Backend-supplied description of the failure.
        message: String,
    },
}

/// Retrieve candidate trips matching filter criteria.
///
/// Implementations must be `Send + Sync` and should apply every criterion in
/// [`TripFilter`]; the engine does not re-check them.
pub trait TripLookup: Send + Sync {
    /// Return the trips satisfying `filter`.
    ///
    /// # Errors
    /// Returns [`TripLookupError::Query`] when the trip source cannot be
    /// queried.
    fn find_candidates(&self, filter: &TripFilter) -> Result<Vec<Trip>, TripLookupError>;
}

impl<L: TripLookup + ?Sized> TripLookup for Arc<L> {
    fn find_candidates(&self, filter: &TripFilter) -> Result<Vec<Trip>, TripLookupError> {
        (**self).find_candidates(filter)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    struct EmptyLookup;

    impl TripLookup for EmptyLookup {
        fn find_candidates(&self, _filter: &TripFilter) -> Result<Vec<Trip>, TripLookupError> {
            Ok(Vec::new())
        }
    }

    #[rstest]
    fn arc_lookup_delegates() {
        let lookup = Arc::new(EmptyLookup);
        let filter = TripFilter {
            statuses: TripStatus::open_for_matching().to_vec(),
            min_capacity_g: None,
            updated_since: None,
        };
        assert_eq!(lookup.find_candidates(&filter), Ok(Vec::new()));
    }
}
