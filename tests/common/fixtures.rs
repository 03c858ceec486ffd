//! Test data factories and wiring for doc-sanitizer types
//!
//! These are test utilities - not all may be used in every test binary.

#![allow(dead_code)]

use super::mock_service::MockSubmissionService;
use super::recording_notifier::RecordingNotifier;
use chrono::{Duration as ChronoDuration, Utc};
use doc_sanitizer::poll::PollingController;
use doc_sanitizer::replacements::ReplacementSet;
use doc_sanitizer::store::{Refresher, SubmissionStore};
use doc_sanitizer::types::{Page, Rating, Submission, SubmissionId, SubmissionStatus, UploadFile};
use doc_sanitizer::workflow::SubmissionWorkflow;
use std::sync::Arc;
use std::time::Duration;

/// Create a submission with default values
pub fn make_submission(id: &str, status: SubmissionStatus) -> Submission {
    Submission {
        id: SubmissionId::from(id),
        filename: format!("{id}.pdf"),
        content_type: "application/pdf".to_string(),
        status,
        created_at: Utc::now(),
        updated_at: None,
        output_url: None,
        error: None,
        rating: Rating::Unrated,
        rating_note: None,
    }
}

/// Create `n` done submissions, newest first
pub fn make_history(n: usize) -> Vec<Submission> {
    let now = Utc::now();
    (0..n)
        .map(|i| Submission {
            created_at: now - ChronoDuration::minutes(i64::try_from(i).unwrap()),
            output_url: Some(format!("/api/submissions/old{i}/download")),
            ..make_submission(&format!("old{i}"), SubmissionStatus::Done)
        })
        .collect()
}

/// A small PDF-looking upload
pub fn make_upload() -> UploadFile {
    UploadFile::pdf("contract.pdf", b"%PDF-1.4 test document".to_vec())
}

/// The rows the original form starts with
pub fn default_rows() -> ReplacementSet {
    ReplacementSet::from_pairs([("John Doe", "Client A"), ("0241234567", "PHONE_REDACTED")])
}

/// Mock service, store, refresher and workflow wired together
pub struct Harness {
    pub service: Arc<MockSubmissionService>,
    pub store: Arc<SubmissionStore>,
    pub refresher: Arc<Refresher>,
    pub notifier: Arc<RecordingNotifier>,
    pub workflow: SubmissionWorkflow,
}

impl Harness {
    /// Harness over an empty service
    pub fn new() -> Self {
        Self::with_service(MockSubmissionService::new())
    }

    /// Harness over a prepared service
    pub fn with_service(service: MockSubmissionService) -> Self {
        let service = Arc::new(service);
        let store = Arc::new(SubmissionStore::new());
        let refresher = Arc::new(Refresher::new(
            service.clone(),
            Arc::clone(&store),
            Page::default(),
        ));
        let notifier = Arc::new(RecordingNotifier::default());
        let workflow =
            SubmissionWorkflow::new(service.clone(), Arc::clone(&refresher), notifier.clone());

        Self {
            service,
            store,
            refresher,
            notifier,
            workflow,
        }
    }

    /// Poller sharing this harness' refresher and notifier
    pub fn poller(&self, interval: Duration) -> PollingController {
        PollingController::new(Arc::clone(&self.refresher), self.notifier.clone(), interval)
    }

    /// Cached copy of one submission
    pub fn cached(&self, id: &SubmissionId) -> Submission {
        self.store
            .get(id)
            .unwrap_or_else(|| panic!("{id} not in store: {:?}", self.store.snapshot()))
    }
}
