//! Caller-owned session state holding incrementally cached match results.
//!
//! The session outlives individual matching calls and expires with the
//! caller's own session lifecycle; the engine only ever reads, merges, and
//! writes entries in place. Concurrent calls against the same session are
//! the caller's responsibility to serialise.

use std::time::SystemTime;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::{MatchResult, PackageId, TripId};

/// Per-package matching state cached inside a session.
///
/// `results` holds the full merged, ranked list from every scan so far and
/// contains at most one entry per trip id. `last_check` is the start time of
/// the most recent successful scan and narrows the next scan to trips
/// updated since then.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct PackageMatchState {
    /// The package these results belong to.
    pub package_id: PackageId,
    /// Start time of the last successful scan, if any.
    pub last_check: Option<SystemTime>,
    /// Merged results, ranked ascending by score.
    pub results: Vec<MatchResult>,
}

impl PackageMatchState {
    /// Create empty state for a package.
    #[must_use]
    pub const fn new(package_id: PackageId) -> Self {
        Self {
            package_id,
            last_check: None,
            results: Vec::new(),
        }
    }

    /// Merge freshly computed results into the cached list.
    ///
    /// Re-evaluated trips replace their previous entry (keeping a caller-set
    /// `request_sent` flag); new trips are inserted; trips absent from this
    /// scan keep their prior entry. The list is re-ranked ascending by score
    /// afterwards, so the merge is additive rather than a replacement:
    /// results survive scans whose lookup no longer returns their trip.
    pub fn merge_results(&mut self, fresh: Vec<MatchResult>) {
        for incoming in fresh {
            if let Some(existing) = self.result_mut(incoming.trip_id) {
                let request_sent = existing.request_sent;
                *existing = incoming;
                existing.request_sent = request_sent;
            } else {
                self.results.push(incoming);
            }
        }
        self.results.sort_by(|a, b| a.score.total_cmp(&b.score));
    }

    /// The cached entry for a trip, if present.
    #[must_use]
    pub fn result(&self, trip_id: TripId) -> Option<&MatchResult> {
        self.results.iter().find(|r| r.trip_id == trip_id)
    }

    fn result_mut(&mut self, trip_id: TripId) -> Option<&mut MatchResult> {
        self.results.iter_mut().find(|r| r.trip_id == trip_id)
    }

    /// The best `limit` results by score.
    #[must_use]
    pub fn ranked(&self, limit: usize) -> Vec<MatchResult> {
        self.results.iter().take(limit).cloned().collect()
    }
}

/// A caller-owned collection of per-package match state.
///
/// # Examples
///
/// ```
/// use parcelway_core::MatchSession;
///
/// let mut session = MatchSession::new();
/// let state = session.state_mut_or_insert(9);
/// assert!(state.results.is_empty());
/// assert!(session.state(9).is_some());
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct MatchSession {
    packages: Vec<PackageMatchState>,
}

impl MatchSession {
    /// Create an empty session.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            packages: Vec::new(),
        }
    }

    /// State for a package, if matching has run for it before.
    #[must_use]
    pub fn state(&self, package_id: PackageId) -> Option<&PackageMatchState> {
        self.packages.iter().find(|p| p.package_id == package_id)
    }

    /// Mutable state for a package, created empty on first use.
    pub fn state_mut_or_insert(&mut self, package_id: PackageId) -> &mut PackageMatchState {
        let index = self
            .packages
            .iter()
            .position(|p| p.package_id == package_id)
            .unwrap_or_else(|| {
                self.packages.push(PackageMatchState::new(package_id));
                self.packages.len() - 1
            });
        // Index is valid: either found or just pushed.
        &mut self.packages[index]
    }

    /// Number of packages tracked by this session.
    #[must_use]
    pub fn len(&self) -> usize {
        self.packages.len()
    }

    /// Whether the session tracks no packages yet.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.packages.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::{fixture, rstest};

    #[fixture]
    fn state() -> PackageMatchState {
        PackageMatchState::new(1)
    }

    fn result(trip_id: TripId, score: f64) -> MatchResult {
        MatchResult::new(trip_id, score, score, score, true)
    }

    #[rstest]
    fn merge_inserts_and_ranks(mut state: PackageMatchState) {
        state.merge_results(vec![result(10, 900.0), result(11, 250.0)]);
        let order: Vec<TripId> = state.results.iter().map(|r| r.trip_id).collect();
        assert_eq!(order, vec![11, 10]);
    }

    #[rstest]
    fn merge_replaces_by_trip_id(mut state: PackageMatchState) {
        state.merge_results(vec![result(10, 900.0)]);
        state.merge_results(vec![result(10, 120.0)]);
        assert_eq!(state.results.len(), 1);
        assert_eq!(state.result(10).map(|r| r.score), Some(120.0));
    }

    #[rstest]
    fn merge_retains_entries_missing_from_scan(mut state: PackageMatchState) {
        state.merge_results(vec![result(10, 900.0), result(11, 250.0)]);
        state.merge_results(vec![result(11, 300.0)]);
        assert_eq!(state.results.len(), 2);
        assert!(state.result(10).is_some());
    }

    #[rstest]
    fn merge_preserves_request_sent(mut state: PackageMatchState) {
        state.merge_results(vec![result(10, 900.0)]);
        if let Some(entry) = state.results.first_mut() {
            entry.request_sent = true;
        }
        state.merge_results(vec![result(10, 120.0)]);
        let entry = state.result(10).cloned();
        assert_eq!(entry.as_ref().map(|r| r.score), Some(120.0));
        assert_eq!(entry.map(|r| r.request_sent), Some(true));
    }

    #[rstest]
    fn session_creates_state_once() {
        let mut session = MatchSession::new();
        session.state_mut_or_insert(5).last_check = Some(SystemTime::now());
        let existing = session.state_mut_or_insert(5);
        assert!(existing.last_check.is_some());
        assert_eq!(session.len(), 1);
    }
}
