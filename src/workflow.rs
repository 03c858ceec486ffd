//! User-initiated actions and the refresh that follows them
//!
//! Submit and rate validate locally, call the service once, and on
//! success refresh the store right away instead of waiting for the next
//! poll. Nothing is written to the store optimistically.

use crate::client::SubmissionService;
use crate::error::{Error, Result};
use crate::notify::Notifier;
use crate::replacements::ReplacementSet;
use crate::store::{RefreshOutcome, Refresher};
use crate::types::{RatingValue, SubmissionId, UploadFile};
use std::sync::Arc;
use tracing::{info, warn};

/// Orchestrates submit and rate against one service and store
pub struct SubmissionWorkflow {
    service: Arc<dyn SubmissionService>,
    refresher: Arc<Refresher>,
    notifier: Arc<dyn Notifier>,
}

impl SubmissionWorkflow {
    /// Create a workflow
    ///
    /// `refresher` should be the same one the poller uses, so both paths
    /// share the store's sequencing.
    pub fn new(
        service: Arc<dyn SubmissionService>,
        refresher: Arc<Refresher>,
        notifier: Arc<dyn Notifier>,
    ) -> Self {
        Self {
            service,
            refresher,
            notifier,
        }
    }

    /// Submit a document with the rules collected from `rows`
    ///
    /// Fails with [`Error::NoFileSelected`] or
    /// [`Error::EmptyReplacementSet`] before any request is made. A failed
    /// refresh after a successful create is reported but does not fail
    /// the submit.
    pub async fn submit(
        &self,
        file: Option<UploadFile>,
        rows: &ReplacementSet,
    ) -> Result<SubmissionId> {
        let Some(file) = file else {
            self.notify_error(&Error::NoFileSelected).await;
            return Err(Error::NoFileSelected);
        };

        let replacements = rows.collect();
        if replacements.is_empty() {
            self.notify_error(&Error::EmptyReplacementSet).await;
            return Err(Error::EmptyReplacementSet);
        }

        self.notifier.on_notice("Uploading + processing...").await;

        let submission = match self.service.create(&file, &replacements).await {
            Ok(submission) => submission,
            Err(e) => {
                warn!("Submit of {} failed: {e}", file.filename);
                self.notifier
                    .on_notice(&format!("Failed: {}", e.user_message()))
                    .await;
                return Err(e);
            }
        };

        info!(
            "Queued {} as {} with {} rules",
            file.filename,
            submission.id,
            replacements.len()
        );
        self.notifier
            .on_notice(&format!("Queued: {}", submission.id))
            .await;
        self.refresh_after_action().await;

        Ok(submission.id)
    }

    /// Rate a submission with an empty note
    pub async fn rate(&self, id: &SubmissionId, rating: u8) -> Result<()> {
        self.rate_with_note(id, rating, "").await
    }

    /// Rate a submission
    ///
    /// On failure the cached rating is left as the service last reported it.
    pub async fn rate_with_note(&self, id: &SubmissionId, rating: u8, note: &str) -> Result<()> {
        let rating = match RatingValue::new(rating) {
            Ok(rating) => rating,
            Err(e) => {
                self.notify_error(&e).await;
                return Err(e);
            }
        };

        if let Err(e) = self.service.rate(id, rating, note).await {
            warn!("Rating {id} failed: {e}");
            self.notifier.on_notice("Rating failed").await;
            return Err(e);
        }

        self.notifier.on_notice("Rated").await;
        self.refresh_after_action().await;
        Ok(())
    }

    /// Refresh the store on demand
    pub async fn refresh(&self) -> Result<RefreshOutcome> {
        let outcome = self.refresher.refresh().await;
        match &outcome {
            Ok(RefreshOutcome::Applied(count)) => self.notifier.on_refreshed(*count).await,
            Ok(RefreshOutcome::Stale) => {}
            Err(e) => self.notifier.on_refresh_failed(e).await,
        }
        outcome
    }

    async fn refresh_after_action(&self) {
        if let Err(e) = self.refresh().await {
            warn!("Refresh after action failed: {e}");
        }
    }

    async fn notify_error(&self, error: &Error) {
        self.notifier.on_notice(&error.user_message()).await;
    }
}
