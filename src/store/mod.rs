//! In-memory cache of the latest submission list
//!
//! The service is the single source of truth: every applied refresh
//! replaces the whole sequence, there is no per-field merge.

mod refresh;

pub use refresh::{RefreshOutcome, Refresher};

use crate::types::{Submission, SubmissionId};
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{PoisonError, RwLock};
use tracing::debug;

/// Sequence number handed out when a refresh begins
///
/// Tickets are ordered by issue time; a response is only installed if
/// its ticket is newer than the one behind the current snapshot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct RefreshTicket(u64);

impl RefreshTicket {
    /// Raw sequence number
    pub const fn sequence(self) -> u64 {
        self.0
    }
}

#[derive(Debug, Default)]
struct Snapshot {
    applied: u64,
    submissions: Vec<Submission>,
}

/// Shared cache of submissions, most recent first
#[derive(Debug, Default)]
pub struct SubmissionStore {
    issued: AtomicU64,
    current: RwLock<Snapshot>,
}

impl SubmissionStore {
    /// Create an empty store
    pub fn new() -> Self {
        Self::default()
    }

    /// Allocate the ticket for a refresh about to be sent
    pub fn begin_refresh(&self) -> RefreshTicket {
        RefreshTicket(self.issued.fetch_add(1, Ordering::SeqCst) + 1)
    }

    /// Install `submissions` if `ticket` is newer than the current snapshot
    ///
    /// Returns false, leaving the cache untouched, for a stale response.
    pub fn apply(&self, ticket: RefreshTicket, submissions: Vec<Submission>) -> bool {
        let mut current = self
            .current
            .write()
            .unwrap_or_else(PoisonError::into_inner);

        if ticket.0 <= current.applied {
            debug!(
                "Discarding refresh #{} (snapshot is from #{})",
                ticket.0, current.applied
            );
            return false;
        }

        current.applied = ticket.0;
        current.submissions = submissions;
        true
    }

    /// Unconditionally swap in a new list
    pub fn replace(&self, submissions: Vec<Submission>) {
        let ticket = self.begin_refresh();
        self.apply(ticket, submissions);
    }

    /// Current cached sequence; empty before the first refresh
    pub fn snapshot(&self) -> Vec<Submission> {
        self.current
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .submissions
            .clone()
    }

    /// Cached copy of one submission
    pub fn get(&self, id: &SubmissionId) -> Option<Submission> {
        self.current
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .submissions
            .iter()
            .find(|s| &s.id == id)
            .cloned()
    }

    /// Number of cached submissions
    pub fn len(&self) -> usize {
        self.current
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .submissions
            .len()
    }

    /// Whether the cache holds no submissions
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
