//! Packages awaiting delivery, as seen by the matching engine.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::Location;

/// Identifier of a package.
pub type PackageId = u64;

/// The matching-relevant view of a package.
///
/// Weight is optional: senders do not always declare it. When absent, the
/// capacity filter on candidate trips is simply skipped.
///
/// # Examples
///
/// ```
/// use parcelway_core::{Location, Package};
///
/// let package = Package {
///     id: 7,
///     weight_g: Some(1_200),
///     origin: Location::new(35.7, 51.4),
///     destination: Location::new(36.3, 59.6),
/// };
/// assert_eq!(package.weight_g, Some(1_200));
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Package {
    /// Unique identifier.
    pub id: PackageId,
    /// Declared weight in grams, when known.
    pub weight_g: Option<u32>,
    /// Pickup point.
    pub origin: Location,
    /// Drop-off point.
    pub destination: Location,
}
