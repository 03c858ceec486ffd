//! One refresh: list a page and install it in the store

use crate::client::SubmissionService;
use crate::error::Result;
use crate::store::SubmissionStore;
use crate::types::Page;
use std::sync::Arc;
use tracing::debug;

/// Result of a refresh that reached the service
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RefreshOutcome {
    /// The response replaced the snapshot; holds the submission count
    Applied(usize),
    /// A newer refresh had already been applied; response discarded
    Stale,
}

/// Refreshes a [`SubmissionStore`] from a [`SubmissionService`]
///
/// Shared by the poller and the workflow, so both paths hit the same
/// page and go through the same sequencing.
pub struct Refresher {
    service: Arc<dyn SubmissionService>,
    store: Arc<SubmissionStore>,
    page: Page,
}

impl Refresher {
    /// Create a refresher for one page of submissions
    pub fn new(service: Arc<dyn SubmissionService>, store: Arc<SubmissionStore>, page: Page) -> Self {
        Self {
            service,
            store,
            page,
        }
    }

    /// Fetch the page and apply it
    ///
    /// On error the store is left untouched.
    pub async fn refresh(&self) -> Result<RefreshOutcome> {
        let ticket = self.store.begin_refresh();
        let submissions = self.service.list(self.page).await?;
        let count = submissions.len();

        if self.store.apply(ticket, submissions) {
            debug!("Refresh #{} applied: {count} submissions", ticket.sequence());
            Ok(RefreshOutcome::Applied(count))
        } else {
            Ok(RefreshOutcome::Stale)
        }
    }
}
