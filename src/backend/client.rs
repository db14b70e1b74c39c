use std::time::{Duration, Instant};

use reqwest::Client;
use tracing::{debug, info, warn};

use super::types::{AnalysisRequest, UpstreamReply};
use crate::config::{BackendConfig, RequestConfig};
use crate::error::{BackendError, BackendResult};

/// HTTP client for the upstream analysis backend.
///
/// Returns [`UpstreamReply`] for any HTTP-level response, success or not; the
/// caller decides how to surface non-2xx statuses. An `Err` means the request
/// never produced an HTTP response (unreachable host, DNS failure, timeout).
#[derive(Clone)]
pub struct BackendClient {
    client: Client,
    base_url: String,
    request_config: RequestConfig,
}

impl BackendClient {
    /// Create a new backend client
    pub fn new(config: &BackendConfig, request_config: RequestConfig) -> BackendResult<Self> {
        let client = Client::builder()
            .timeout(Duration::from_millis(request_config.timeout_ms))
            .build()
            .map_err(BackendError::Http)?;

        Ok(Self {
            client,
            base_url: config.base_url.trim_end_matches('/').to_string(),
            request_config,
        })
    }

    /// Forward an analysis request, passing the caller's Authorization header through
    pub async fn analyze(
        &self,
        request: &AnalysisRequest,
        authorization: &str,
    ) -> BackendResult<UpstreamReply> {
        let url = format!("{}/analyze", self.base_url);

        debug!(
            text_len = request.source_text.len(),
            has_url = request.source_url.is_some(),
            "Forwarding analysis request"
        );

        let start = Instant::now();

        let response = self
            .client
            .post(&url)
            .header("Authorization", authorization)
            .header("Content-Type", "application/json")
            .json(request)
            .send()
            .await
            .map_err(|e| self.map_send_error(e))?;

        let status = response.status().as_u16();
        let text = response.text().await.map_err(BackendError::Http)?;
        let reply = UpstreamReply::from_text(status, &text);

        let latency = start.elapsed();
        if reply.is_success() {
            info!(
                status,
                latency_ms = latency.as_millis(),
                "Backend analysis succeeded"
            );
        } else {
            warn!(
                status,
                latency_ms = latency.as_millis(),
                "Backend analysis returned an error status"
            );
        }

        Ok(reply)
    }

    /// Fetch the tier listing from the backend
    pub async fn key_tiers(&self) -> BackendResult<UpstreamReply> {
        let url = format!("{}/api/keys", self.base_url);

        let response = self
            .client
            .get(&url)
            .send()
            .await
            .map_err(|e| self.map_send_error(e))?;

        let status = response.status().as_u16();
        let text = response.text().await.map_err(BackendError::Http)?;
        Ok(UpstreamReply::from_text(status, &text))
    }

    fn map_send_error(&self, e: reqwest::Error) -> BackendError {
        if e.is_timeout() {
            BackendError::Timeout {
                timeout_ms: self.request_config.timeout_ms,
            }
        } else {
            BackendError::Http(e)
        }
    }

    /// Get the base URL (for testing)
    pub fn base_url(&self) -> &str {
        &self.base_url
    }
}
