//! Core types for doc-sanitizer

use crate::error::{Error, Result};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Content type the service accepts for uploads
pub const PDF_CONTENT_TYPE: &str = "application/pdf";

/// Server-generated submission identifier
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SubmissionId(pub String);

impl SubmissionId {
    /// Borrow the raw id
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for SubmissionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for SubmissionId {
    fn from(id: &str) -> Self {
        Self(id.to_string())
    }
}

impl From<String> for SubmissionId {
    fn from(id: String) -> Self {
        Self(id)
    }
}

/// Processing status, owned by the service
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SubmissionStatus {
    /// Accepted, waiting for a worker
    Queued,
    /// Being processed
    Processing,
    /// Output is available
    Done,
    /// Processing failed, see `error`
    Failed,
}

impl SubmissionStatus {
    /// Done or failed; the service will not change it again
    pub const fn is_terminal(self) -> bool {
        matches!(self, Self::Done | Self::Failed)
    }
}

impl fmt::Display for SubmissionStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Queued => "queued",
            Self::Processing => "processing",
            Self::Done => "done",
            Self::Failed => "failed",
        })
    }
}

/// Satisfaction rating as reported by the service
///
/// Travels as a nullable integer on the wire.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(from = "Option<u8>", into = "Option<u8>")]
pub enum Rating {
    /// Not rated yet
    #[default]
    Unrated,
    /// Rated with the given value
    Rated(u8),
}

impl Rating {
    /// The rated value, if any
    pub const fn value(self) -> Option<u8> {
        match self {
            Self::Unrated => None,
            Self::Rated(v) => Some(v),
        }
    }
}

impl From<Option<u8>> for Rating {
    fn from(value: Option<u8>) -> Self {
        value.map_or(Self::Unrated, Self::Rated)
    }
}

impl From<Rating> for Option<u8> {
    fn from(rating: Rating) -> Self {
        rating.value()
    }
}

impl fmt::Display for Rating {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Unrated => f.write_str("-"),
            Self::Rated(v) => write!(f, "{v}"),
        }
    }
}

/// A rating the client is allowed to send (1 through 5)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct RatingValue(u8);

impl RatingValue {
    /// Lowest accepted rating
    pub const MIN: u8 = 1;
    /// Highest accepted rating
    pub const MAX: u8 = 5;

    /// Validate a raw rating
    pub fn new(value: u8) -> Result<Self> {
        if value >= Self::MIN && value <= Self::MAX {
            Ok(Self(value))
        } else {
            Err(Error::InvalidRating(value))
        }
    }

    /// The raw value
    pub const fn get(self) -> u8 {
        self.0
    }
}

impl TryFrom<u8> for RatingValue {
    type Error = Error;

    fn try_from(value: u8) -> Result<Self> {
        Self::new(value)
    }
}

/// One document-processing job
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Submission {
    /// Server-generated id
    pub id: SubmissionId,
    /// Original file name of the upload
    pub filename: String,
    /// MIME type of the upload
    #[serde(default)]
    pub content_type: String,
    /// Current processing status
    pub status: SubmissionStatus,
    /// When the submission was created
    pub created_at: DateTime<Utc>,
    /// When the service last touched the record
    #[serde(default)]
    pub updated_at: Option<DateTime<Utc>>,
    /// Relative path of the processed artifact, once done
    #[serde(default)]
    pub output_url: Option<String>,
    /// Failure reason, when status is failed
    #[serde(default)]
    pub error: Option<String>,
    /// User rating
    #[serde(default)]
    pub rating: Rating,
    /// Free-text note attached with the rating
    #[serde(default)]
    pub rating_note: Option<String>,
}

/// A document to upload
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UploadFile {
    /// File name sent with the multipart part
    pub filename: String,
    /// MIME type sent with the multipart part
    pub content_type: String,
    /// Raw document bytes
    pub bytes: Vec<u8>,
}

impl UploadFile {
    /// Create a PDF upload from in-memory bytes
    pub fn pdf(filename: impl Into<String>, bytes: Vec<u8>) -> Self {
        Self {
            filename: filename.into(),
            content_type: PDF_CONTENT_TYPE.to_string(),
            bytes,
        }
    }

    /// Read a PDF upload from disk
    pub async fn from_path(path: &std::path::Path) -> Result<Self> {
        let bytes = tokio::fs::read(path).await?;
        let filename = path
            .file_name()
            .map_or_else(|| "document.pdf".to_string(), |n| n.to_string_lossy().into_owned());
        Ok(Self::pdf(filename, bytes))
    }
}

/// Pagination window for listing submissions
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Page {
    /// Maximum number of submissions returned
    pub limit: u32,
    /// Number of newest submissions to skip
    pub offset: u32,
}

impl Default for Page {
    fn default() -> Self {
        Self {
            limit: 50,
            offset: 0,
        }
    }
}
