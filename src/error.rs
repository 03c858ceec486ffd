//! Error types for doc-sanitizer

use thiserror::Error;

/// Result alias used throughout the crate
pub type Result<T> = std::result::Result<T, Error>;

/// All errors surfaced by the client, workflow and poller
#[derive(Debug, Error)]
pub enum Error {
    /// Submit was requested without a document
    #[error("no file selected")]
    NoFileSelected,

    /// Every replacement row was blank
    #[error("replacement set is empty")]
    EmptyReplacementSet,

    /// Rating outside the range the service accepts
    #[error("invalid rating {0}: expected a value from 1 to 5")]
    InvalidRating(u8),

    /// The service answered with a non-success status
    #[error("request failed ({status}): {detail}")]
    RequestFailed {
        /// HTTP status code
        status: u16,
        /// `detail` from the error body, or the status text
        detail: String,
    },

    /// No response was received (connection refused, timeout, ...)
    #[error("transport error: {0}")]
    Transport(#[from] reqwest::Error),

    /// A success response carried a body we could not decode
    #[error("failed to decode response: {0}")]
    Decode(#[from] serde_json::Error),

    /// Download requested for a submission with no output yet
    #[error("output for submission {0} is not ready")]
    OutputNotReady(String),

    /// The health endpoint answered but reported not ok
    #[error("service at {0} reports not ok")]
    Unhealthy(String),

    /// Base address or artifact path could not be parsed
    #[error("invalid url: {0}")]
    InvalidUrl(#[from] url::ParseError),

    /// Bad configuration value
    #[error("configuration error: {0}")]
    Config(String),

    /// Local I/O failure (reading the document, writing a download)
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}

impl Error {
    /// Text for a transient user-facing notice
    pub fn user_message(&self) -> String {
        match self {
            Self::NoFileSelected => "Please choose a PDF first.".to_string(),
            Self::EmptyReplacementSet => "Add at least one replacement.".to_string(),
            Self::RequestFailed { detail, .. } => detail.clone(),
            other => other.to_string(),
        }
    }

    /// Whether the error was raised locally before any request was sent
    pub const fn is_validation(&self) -> bool {
        matches!(
            self,
            Self::NoFileSelected | Self::EmptyReplacementSet | Self::InvalidRating(_)
        )
    }
}
