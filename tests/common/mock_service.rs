//! Mock submission service for testing
//!
//! These are test utilities - not all may be used in every test binary.

#![allow(dead_code)]

use async_trait::async_trait;
use chrono::Utc;
use doc_sanitizer::client::SubmissionService;
use doc_sanitizer::error::{Error, Result};
use doc_sanitizer::types::{
    Page, Rating, RatingValue, Submission, SubmissionId, SubmissionStatus, UploadFile,
};
use std::collections::{BTreeMap, VecDeque};
use std::sync::Mutex;
use std::time::Duration;

/// Call record for `create`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CreateCall {
    pub filename: String,
    pub replacements: BTreeMap<String, String>,
}

/// Call record for `rate`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RateCall {
    pub id: SubmissionId,
    pub rating: u8,
    pub note: String,
}

/// In-memory stand-in for the remote service
///
/// Manually implements `SubmissionService` and behaves like the real
/// service: creates are queued newest-first, ratings are applied to the
/// stored record and show up on the next list.
///
/// Features:
/// - Call tracking for verification
/// - Server-side status changes (`set_status`)
/// - Error injection for failure path testing
/// - Per-call list latency (for use with a paused clock)
pub struct MockSubmissionService {
    submissions: Mutex<Vec<Submission>>,
    next_id: Mutex<u64>,
    // Call tracking
    create_calls: Mutex<Vec<CreateCall>>,
    list_calls: Mutex<Vec<Page>>,
    rate_calls: Mutex<Vec<RateCall>>,
    // Error injection
    error_on_create: Mutex<Option<(u16, String)>>,
    error_on_rate: Mutex<Option<(u16, String)>>,
    failing_lists: Mutex<usize>,
    list_delays: Mutex<VecDeque<Duration>>,
}

impl Default for MockSubmissionService {
    fn default() -> Self {
        Self::new()
    }
}

impl MockSubmissionService {
    /// Create an empty mock
    pub fn new() -> Self {
        Self {
            submissions: Mutex::new(Vec::new()),
            next_id: Mutex::new(1),
            create_calls: Mutex::new(Vec::new()),
            list_calls: Mutex::new(Vec::new()),
            rate_calls: Mutex::new(Vec::new()),
            error_on_create: Mutex::new(None),
            error_on_rate: Mutex::new(None),
            failing_lists: Mutex::new(0),
            list_delays: Mutex::new(VecDeque::new()),
        }
    }

    /// Create a mock already holding `submissions` (newest first)
    pub fn with_submissions(submissions: Vec<Submission>) -> Self {
        let mock = Self::new();
        *mock.submissions.lock().unwrap() = submissions;
        mock
    }

    // === Server-side state ===

    /// Change a stored submission's status, as the processing engine would
    pub fn set_status(&self, id: &str, status: SubmissionStatus) {
        let mut submissions = self.submissions.lock().unwrap();
        if let Some(s) = submissions.iter_mut().find(|s| s.id.as_str() == id) {
            s.status = status;
            if status == SubmissionStatus::Done {
                s.output_url = Some(format!("/api/submissions/{id}/download"));
            }
        }
    }

    /// Stored copy of a submission
    pub fn stored(&self, id: &str) -> Option<Submission> {
        self.submissions
            .lock()
            .unwrap()
            .iter()
            .find(|s| s.id.as_str() == id)
            .cloned()
    }

    // === Error injection methods ===

    /// Make `create` return `RequestFailed`
    pub fn fail_create(&self, status: u16, detail: &str) {
        *self.error_on_create.lock().unwrap() = Some((status, detail.to_string()));
    }

    /// Make `rate` return `RequestFailed`
    pub fn fail_rate(&self, status: u16, detail: &str) {
        *self.error_on_rate.lock().unwrap() = Some((status, detail.to_string()));
    }

    /// Make the next `n` `list` calls return `RequestFailed`
    pub fn fail_next_lists(&self, n: usize) {
        *self.failing_lists.lock().unwrap() = n;
    }

    /// Delay the next `list` call by `delay`; the response reflects state
    /// at call time, not at delivery time
    pub fn delay_next_list(&self, delay: Duration) {
        self.list_delays.lock().unwrap().push_back(delay);
    }

    // === Call verification methods ===

    /// All `create` calls
    pub fn get_create_calls(&self) -> Vec<CreateCall> {
        self.create_calls.lock().unwrap().clone()
    }

    /// All `rate` calls
    pub fn get_rate_calls(&self) -> Vec<RateCall> {
        self.rate_calls.lock().unwrap().clone()
    }

    /// Number of `list` calls, failed ones included
    pub fn list_call_count(&self) -> usize {
        self.list_calls.lock().unwrap().len()
    }

    /// Total number of calls of any kind
    pub fn total_calls(&self) -> usize {
        self.create_calls.lock().unwrap().len()
            + self.list_calls.lock().unwrap().len()
            + self.rate_calls.lock().unwrap().len()
    }

    /// Assert that no request whatsoever reached the mock
    pub fn assert_no_calls(&self) {
        assert_eq!(
            self.total_calls(),
            0,
            "Expected no calls but got creates={:?} rates={:?} lists={}",
            self.get_create_calls(),
            self.get_rate_calls(),
            self.list_call_count()
        );
    }
}

fn request_failed((status, detail): &(u16, String)) -> Error {
    Error::RequestFailed {
        status: *status,
        detail: detail.clone(),
    }
}

#[async_trait]
impl SubmissionService for MockSubmissionService {
    async fn create(
        &self,
        file: &UploadFile,
        replacements: &BTreeMap<String, String>,
    ) -> Result<Submission> {
        self.create_calls.lock().unwrap().push(CreateCall {
            filename: file.filename.clone(),
            replacements: replacements.clone(),
        });

        if let Some(err) = self.error_on_create.lock().unwrap().as_ref() {
            return Err(request_failed(err));
        }

        let id = {
            let mut next = self.next_id.lock().unwrap();
            let id = format!("sub{:04}", *next);
            *next += 1;
            id
        };

        let now = Utc::now();
        let submission = Submission {
            id: SubmissionId::from(id),
            filename: file.filename.clone(),
            content_type: file.content_type.clone(),
            status: SubmissionStatus::Queued,
            created_at: now,
            updated_at: Some(now),
            output_url: None,
            error: None,
            rating: Rating::Unrated,
            rating_note: None,
        };
        self.submissions
            .lock()
            .unwrap()
            .insert(0, submission.clone());
        Ok(submission)
    }

    async fn list(&self, page: Page) -> Result<Vec<Submission>> {
        self.list_calls.lock().unwrap().push(page);

        {
            let mut failing = self.failing_lists.lock().unwrap();
            if *failing > 0 {
                *failing -= 1;
                return Err(Error::RequestFailed {
                    status: 503,
                    detail: "Service Unavailable".to_string(),
                });
            }
        }

        let delay = self.list_delays.lock().unwrap().pop_front();
        let response: Vec<Submission> = self
            .submissions
            .lock()
            .unwrap()
            .iter()
            .skip(page.offset as usize)
            .take(page.limit as usize)
            .cloned()
            .collect();

        if let Some(delay) = delay {
            tokio::time::sleep(delay).await;
        }
        Ok(response)
    }

    async fn rate(&self, id: &SubmissionId, rating: RatingValue, note: &str) -> Result<()> {
        self.rate_calls.lock().unwrap().push(RateCall {
            id: id.clone(),
            rating: rating.get(),
            note: note.to_string(),
        });

        if let Some(err) = self.error_on_rate.lock().unwrap().as_ref() {
            return Err(request_failed(err));
        }

        let mut submissions = self.submissions.lock().unwrap();
        let stored = submissions
            .iter_mut()
            .find(|s| &s.id == id)
            .ok_or_else(|| Error::RequestFailed {
                status: 404,
                detail: "Not found".to_string(),
            })?;
        stored.rating = Rating::Rated(rating.get());
        stored.rating_note = Some(note.to_string());
        Ok(())
    }

    async fn get(&self, id: &SubmissionId) -> Result<Submission> {
        self.stored(id.as_str()).ok_or_else(|| Error::RequestFailed {
            status: 404,
            detail: "Not found".to_string(),
        })
    }

    async fn download(&self, submission: &Submission) -> Result<Vec<u8>> {
        if submission.output_url.is_none() {
            return Err(Error::OutputNotReady(submission.id.to_string()));
        }
        Ok(b"%PDF-1.4 sanitized".to_vec())
    }

    async fn health(&self) -> Result<bool> {
        Ok(true)
    }
}
