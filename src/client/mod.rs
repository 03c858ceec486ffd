//! Submission service client
//!
//! Stateless protocol adapter for the document-processing API.

mod http;

pub use http::HttpSubmissionService;

use crate::error::Result;
use crate::types::{Page, RatingValue, Submission, SubmissionId, UploadFile};
use async_trait::async_trait;
use std::collections::BTreeMap;

/// Operations offered by the remote submission service
///
/// Every call is single-shot: failures surface immediately as
/// [`Error::RequestFailed`](crate::error::Error::RequestFailed) or
/// [`Error::Transport`](crate::error::Error::Transport) and are never
/// retried here.
#[async_trait]
pub trait SubmissionService: Send + Sync {
    /// Upload a document together with its replacement rules
    async fn create(
        &self,
        file: &UploadFile,
        replacements: &BTreeMap<String, String>,
    ) -> Result<Submission>;

    /// Fetch one page of submissions in service order (newest first)
    async fn list(&self, page: Page) -> Result<Vec<Submission>>;

    /// Record a rating for an existing submission
    async fn rate(&self, id: &SubmissionId, rating: RatingValue, note: &str) -> Result<()>;

    /// Fetch a single submission
    async fn get(&self, id: &SubmissionId) -> Result<Submission>;

    /// Fetch the processed artifact of a submission
    async fn download(&self, submission: &Submission) -> Result<Vec<u8>>;

    /// Check that the service is up
    async fn health(&self) -> Result<bool>;
}
