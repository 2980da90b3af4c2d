//! Test-only, in-memory `TripLookup` implementation used by unit and
//! behaviour tests.

use std::sync::Mutex;
use std::time::SystemTime;

use crate::{Trip, TripFilter, TripLookup, TripLookupError};

/// In-memory `TripLookup` applying the full filter with a linear scan.
///
/// Intended only for small datasets in tests and benches. The trip set sits
/// behind a mutex so behaviour tests can change it between scans while an
/// engine holds the lookup (typically via `Arc`).
#[derive(Debug, Default)]
pub struct MemoryTripLookup {
    trips: Mutex<Vec<Trip>>,
}

impl MemoryTripLookup {
    /// Create an empty lookup.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            trips: Mutex::new(Vec::new()),
        }
    }

    /// Create a lookup from a collection of trips.
    pub fn with_trips<I>(trips: I) -> Self
    where
        I: IntoIterator<Item = Trip>,
    {
        Self {
            trips: Mutex::new(trips.into_iter().collect()),
        }
    }

    /// Insert a trip, replacing any existing trip with the same id.
    ///
    /// # Panics
    /// Panics if the internal lock is poisoned, which only happens after a
    /// panic in another test thread.
    pub fn upsert(&self, trip: Trip) {
        let mut trips = self.trips.lock().expect("lookup lock poisoned");
        if let Some(existing) = trips.iter_mut().find(|t| t.id == trip.id) {
            *existing = trip;
        } else {
            trips.push(trip);
        }
    }

    fn matches(trip: &Trip, filter: &TripFilter) -> bool {
        if !filter.statuses.contains(&trip.status) {
            return false;
        }
        if let Some(min) = filter.min_capacity_g {
            if trip.max_capacity_g.is_some_and(|cap| cap < min) {
                return false;
            }
        }
        if let Some(since) = filter.updated_since {
            if trip.updated_at <= since {
                return false;
            }
        }
        true
    }
}

impl TripLookup for MemoryTripLookup {
    fn find_candidates(&self, filter: &TripFilter) -> Result<Vec<Trip>, TripLookupError> {
        let trips = self
            .trips
            .lock()
            .map_err(|_| TripLookupError::Query {
                message: "lookup lock poisoned".to_owned(),
            })?;
        Ok(trips
            .iter()
            .filter(|trip| Self::matches(trip, filter))
            .cloned()
            .collect())
    }
}

/// A trip lookup that always fails, for exercising error paths.
#[derive(Debug, Default, Clone, Copy)]
pub struct FailingTripLookup;

impl TripLookup for FailingTripLookup {
    fn find_candidates(&self, _filter: &TripFilter) -> Result<Vec<Trip>, TripLookupError> {
        Err(TripLookupError::Query {
            message: "trip source offline".to_owned(),
        })
    }
}

/// Shorthand for building a matchable trip updated at `updated_at`.
#[must_use]
pub fn scheduled_trip(
    id: crate::TripId,
    origin: crate::Location,
    destination: crate::Location,
    updated_at: SystemTime,
) -> Trip {
    Trip {
        id,
        status: crate::TripStatus::Scheduled,
        origin,
        destination,
        waypoints: Vec::new(),
        max_capacity_g: None,
        updated_at,
    }
}
