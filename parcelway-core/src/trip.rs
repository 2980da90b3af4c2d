//! Transporter trips offered for package delivery.

use std::time::SystemTime;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::Location;

/// Identifier of a trip.
pub type TripId = u64;

/// Lifecycle state of a trip.
///
/// Only [`Scheduled`](Self::Scheduled) and [`InProgress`](Self::InProgress)
/// trips accept new packages.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum TripStatus {
    /// Announced but not yet departed.
    Scheduled,
    /// Currently travelling.
    InProgress,
    /// Finished; no longer matchable.
    Completed,
    /// Withdrawn by the transporter; no longer matchable.
    Cancelled,
}

impl TripStatus {
    /// The set of states in which a trip accepts new packages.
    #[must_use]
    pub const fn open_for_matching() -> [Self; 2] {
        [Self::Scheduled, Self::InProgress]
    }

    /// Whether this state accepts new packages.
    #[must_use]
    pub const fn is_open_for_matching(self) -> bool {
        matches!(self, Self::Scheduled | Self::InProgress)
    }
}

/// The matching-relevant view of a trip.
///
/// Waypoints are stored in the order the transporter supplied them; route
/// construction preserves that order.
///
/// # Examples
///
/// ```
/// use std::time::SystemTime;
/// use parcelway_core::{Location, Trip, TripStatus};
///
/// let trip = Trip {
///     id: 1,
///     status: TripStatus::Scheduled,
///     origin: Location::new(35.7, 51.4),
///     destination: Location::new(32.7, 51.7),
///     waypoints: vec![Location::new(34.6, 50.9)],
///     max_capacity_g: Some(20_000),
///     updated_at: SystemTime::now(),
/// };
/// assert!(trip.status.is_open_for_matching());
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Trip {
    /// Unique identifier.
    pub id: TripId,
    /// Lifecycle state.
    pub status: TripStatus,
    /// Departure point.
    pub origin: Location,
    /// Arrival point.
    pub destination: Location,
    /// Intermediate stops in transporter-supplied order.
    pub waypoints: Vec<Location>,
    /// Maximum carriable weight in grams, when the transporter declared one.
    pub max_capacity_g: Option<u32>,
    /// Last time the trip record changed; drives incremental re-scans.
    pub updated_at: SystemTime,
}
