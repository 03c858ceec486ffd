//! HTTP submission service implementation

use crate::client::SubmissionService;
use crate::config::Config;
use crate::error::{Error, Result};
use crate::types::{Page, RatingValue, Submission, SubmissionId, UploadFile};
use async_trait::async_trait;
use reqwest::multipart::{Form, Part};
use reqwest::{Client, Response, StatusCode};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use tracing::{debug, info};
use url::Url;

/// Submission service over HTTP using reqwest
pub struct HttpSubmissionService {
    client: Client,
    base_url: Url,
}

#[derive(Serialize)]
struct RatePayload<'a> {
    rating: RatingValue,
    note: &'a str,
}

#[derive(Deserialize)]
struct ErrorBody {
    detail: Option<serde_json::Value>,
}

#[derive(Deserialize)]
struct Health {
    ok: bool,
}

impl HttpSubmissionService {
    /// Create a service for the configured base address
    pub fn new(config: &Config) -> Result<Self> {
        let client = Client::builder()
            .timeout(config.request_timeout)
            .build()
            .map_err(|e| Error::Config(format!("failed to build http client: {e}")))?;

        Ok(Self {
            client,
            base_url: config.base_url.clone(),
        })
    }

    /// Base address requests are sent to
    pub const fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// Absolute address of a submission's artifact, if it has one
    pub fn artifact_url(&self, submission: &Submission) -> Option<Url> {
        submission
            .output_url
            .as_deref()
            .and_then(|path| resolve(&self.base_url, path).ok())
    }

    fn api_url(&self, path: &str) -> Result<Url> {
        resolve(&self.base_url, path)
    }

    fn submission_url(&self, id: &SubmissionId, suffix: &str) -> Result<Url> {
        self.api_url(&format!(
            "/api/submissions/{}{suffix}",
            urlencoding::encode(id.as_str())
        ))
    }
}

/// Resolve a service path against the base address
///
/// Paths are appended to the base (keeping any prefix it carries);
/// absolute URLs are taken as-is.
fn resolve(base: &Url, path: &str) -> Result<Url> {
    if let Ok(absolute) = Url::parse(path) {
        return Ok(absolute);
    }
    let base = base.as_str().trim_end_matches('/');
    let path = path.trim_start_matches('/');
    Ok(Url::parse(&format!("{base}/{path}"))?)
}

/// Turn a non-success response into [`Error::RequestFailed`]
async fn ensure_success(response: Response) -> Result<Response> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }

    let body = response.bytes().await.unwrap_or_default();
    Err(Error::RequestFailed {
        status: status.as_u16(),
        detail: error_detail(status, &body),
    })
}

fn error_detail(status: StatusCode, body: &[u8]) -> String {
    match serde_json::from_slice::<ErrorBody>(body)
        .ok()
        .and_then(|b| b.detail)
    {
        // An empty detail is treated as absent
        Some(serde_json::Value::String(detail)) if !detail.trim().is_empty() => detail,
        Some(serde_json::Value::String(_)) | None => status
            .canonical_reason()
            .map_or_else(|| status.as_str().to_string(), ToString::to_string),
        Some(other) => other.to_string(),
    }
}

async fn decode<T: DeserializeOwned>(response: Response) -> Result<T> {
    let body = response.bytes().await?;
    Ok(serde_json::from_slice(&body)?)
}

#[async_trait]
impl SubmissionService for HttpSubmissionService {
    async fn create(
        &self,
        file: &UploadFile,
        replacements: &BTreeMap<String, String>,
    ) -> Result<Submission> {
        let url = self.api_url("/api/submissions")?;
        debug!(
            "POST {url} filename={} rules={}",
            file.filename,
            replacements.len()
        );

        let part = Part::bytes(file.bytes.clone())
            .file_name(file.filename.clone())
            .mime_str(&file.content_type)
            .map_err(|e| {
                Error::Config(format!("bad content type {:?}: {e}", file.content_type))
            })?;
        let form = Form::new()
            .part("file", part)
            .text("replacements_json", serde_json::to_string(replacements)?);

        let response = self.client.post(url).multipart(form).send().await?;
        let submission: Submission = decode(ensure_success(response).await?).await?;

        info!("Created submission {} ({})", submission.id, submission.status);
        Ok(submission)
    }

    async fn list(&self, page: Page) -> Result<Vec<Submission>> {
        let url = self.api_url("/api/submissions")?;
        debug!("GET {url} limit={} offset={}", page.limit, page.offset);

        let response = self
            .client
            .get(url)
            .query(&[("limit", page.limit), ("offset", page.offset)])
            .send()
            .await?;

        decode(ensure_success(response).await?).await
    }

    async fn rate(&self, id: &SubmissionId, rating: RatingValue, note: &str) -> Result<()> {
        let url = self.submission_url(id, "/rate")?;
        debug!("POST {url} rating={}", rating.get());

        let response = self
            .client
            .post(url)
            .json(&RatePayload { rating, note })
            .send()
            .await?;
        ensure_success(response).await?;

        info!("Rated submission {id} with {}", rating.get());
        Ok(())
    }

    async fn get(&self, id: &SubmissionId) -> Result<Submission> {
        let url = self.submission_url(id, "")?;
        debug!("GET {url}");

        let response = self.client.get(url).send().await?;
        decode(ensure_success(response).await?).await
    }

    async fn download(&self, submission: &Submission) -> Result<Vec<u8>> {
        let path = submission
            .output_url
            .as_deref()
            .ok_or_else(|| Error::OutputNotReady(submission.id.to_string()))?;
        let url = resolve(&self.base_url, path)?;
        debug!("GET {url}");

        let response = self.client.get(url).send().await?;
        let bytes = ensure_success(response).await?.bytes().await?;
        Ok(bytes.to_vec())
    }

    async fn health(&self) -> Result<bool> {
        let url = self.api_url("/api/health")?;
        let response = self.client.get(url).send().await?;
        let health: Health = decode(ensure_success(response).await?).await?;
        Ok(health.ok)
    }
}
