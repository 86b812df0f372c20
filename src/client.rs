// src/client.rs

use axum::body::Bytes;
use axum::http::StatusCode;
use reqwest::Client;
use serde_json::Value;
use url::Url;

use crate::error::{AppError, upstream_status};
use crate::models::submission::{SubmissionRecord, SubmissionSummary};

/// Fixed messages shown by the UI when a fetch fails; kept stable because
/// the desktop frontend matches on them.
pub const LOAD_LIST_FAILURE: &str = "Failed to load previous tests.";
pub const LOAD_DETAILS_FAILURE: &str = "Failed to load test details.";

/// Thin client for the scoring backend.
#[derive(Clone)]
pub struct BackendClient {
    http: Client,
    base: Url,
}

/// An upstream reply relayed as-is: status, content type and body bytes.
#[derive(Debug)]
pub struct ProxiedResponse {
    pub status: StatusCode,
    pub content_type: Option<String>,
    pub body: Bytes,
}

impl BackendClient {
    pub fn new(http: Client, base: Url) -> Self {
        Self { http, base }
    }

    fn endpoint(&self, segments: &[&str]) -> Result<Url, AppError> {
        let mut url = self.base.clone();
        url.path_segments_mut()
            .map_err(|_| {
                AppError::InternalServerError("BACKEND_URL cannot be a base".to_string())
            })?
            .pop_if_empty()
            .extend(segments);
        Ok(url)
    }

    /// Fetches the submission history for one user.
    pub async fn list_submissions(
        &self,
        user_id: &str,
    ) -> Result<Vec<SubmissionSummary>, AppError> {
        let url = self.endpoint(&["user_submissions", user_id])?;
        let response = self.http.get(url).send().await.map_err(|e| {
            tracing::error!("Submission list fetch failed: {}", e);
            AppError::UpstreamUnreachable(LOAD_LIST_FAILURE.to_string())
        })?;

        if !response.status().is_success() {
            tracing::warn!("Submission list fetch returned {}", response.status());
            return Err(AppError::Upstream(
                upstream_status(response.status()),
                LOAD_LIST_FAILURE.to_string(),
            ));
        }

        response.json().await.map_err(|e| {
            tracing::error!("Malformed submission list payload: {}", e);
            AppError::InternalServerError(e.to_string())
        })
    }

    /// Fetches one submission snapshot by filename.
    pub async fn fetch_submission(&self, filename: &str) -> Result<SubmissionRecord, AppError> {
        let url = self.endpoint(&["submission", filename])?;
        let response = self.http.get(url).send().await.map_err(|e| {
            tracing::error!("Submission detail fetch failed: {}", e);
            AppError::UpstreamUnreachable(LOAD_DETAILS_FAILURE.to_string())
        })?;

        if !response.status().is_success() {
            tracing::warn!(
                "Submission detail fetch for {} returned {}",
                filename,
                response.status()
            );
            return Err(AppError::Upstream(
                upstream_status(response.status()),
                LOAD_DETAILS_FAILURE.to_string(),
            ));
        }

        response.json().await.map_err(|e| {
            tracing::error!("Malformed submission payload for {}: {}", filename, e);
            AppError::InternalServerError(e.to_string())
        })
    }

    /// Relays one POST body to the backend and hands back the raw reply.
    /// No validation, no retries, no rewriting.
    pub async fn forward(&self, path: &str, body: &Value) -> Result<ProxiedResponse, AppError> {
        let url = self.endpoint(&[path])?;
        let response = self.http.post(url).json(body).send().await.map_err(|e| {
            tracing::error!("Proxy request to /{} failed: {}", path, e);
            AppError::UpstreamUnreachable(e.to_string())
        })?;

        let status = upstream_status(response.status());
        let content_type = response
            .headers()
            .get(reqwest::header::CONTENT_TYPE)
            .and_then(|value| value.to_str().ok())
            .map(str::to_string);
        let body = response.bytes().await?;

        Ok(ProxiedResponse {
            status,
            content_type,
            body,
        })
    }
}
