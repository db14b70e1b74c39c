use std::sync::atomic::{AtomicU64, Ordering};
use std::time::Duration;

use reqwest::Client;
use serde_json::Value;
use tokio::sync::Mutex;
use tracing::{debug, info, warn};

use super::tiers::fallback_tiers;
use crate::backend::{AnalysisRequest, AnalysisResult, EducationalTips, TierListing, TierTable};
use crate::error::{CheckerError, CheckerResult};

/// Request lifecycle phase
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Phase {
    #[default]
    Idle,
    Submitting,
    Success,
    Failed,
}

/// Named tabs projected from one analysis result
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ResultTab {
    #[default]
    Analysis,
    Evidence,
    Education,
}

/// Point-in-time copy of the controller state
#[derive(Debug, Clone, Default)]
pub struct Snapshot {
    pub phase: Phase,
    pub result: Option<AnalysisResult>,
    pub error: Option<String>,
    pub active_tab: ResultTab,
    pub tips: Option<EducationalTips>,
}

/// Presentation controller for the misinformation checker.
///
/// Owns the request lifecycle (`Idle -> Submitting -> Success | Failed`) and
/// the single current-result slot. Overlapping submissions are allowed; each
/// one supersedes the last, and a superseded submission's eventual response
/// is discarded silently (last-submission-wins). The educational-tips fetch
/// is independent of submissions and degrades to an empty panel on failure.
pub struct CheckerController {
    client: Client,
    base_url: String,
    api_key: String,
    seq: AtomicU64,
    state: Mutex<Snapshot>,
}

impl CheckerController {
    /// Create a controller pointed at a gateway base URL
    pub fn new(
        base_url: impl Into<String>,
        api_key: impl Into<String>,
        timeout_ms: u64,
    ) -> CheckerResult<Self> {
        let client = Client::builder()
            .timeout(Duration::from_millis(timeout_ms))
            .build()
            .map_err(|e| CheckerError::Transport {
                message: e.to_string(),
            })?;

        Ok(Self {
            client,
            base_url: base_url.into().trim_end_matches('/').to_string(),
            api_key: api_key.into(),
            seq: AtomicU64::new(0),
            state: Mutex::new(Snapshot::default()),
        })
    }

    /// Submit text for analysis and await exactly one response.
    ///
    /// Empty or whitespace-only text fails locally without touching the
    /// network. Returns the phase the controller settled in; if this
    /// submission was superseded while in flight, its response is discarded
    /// and the phase of the newer submission is returned instead.
    pub async fn submit(&self, text: &str) -> Phase {
        // A new submission supersedes anything in flight, even one that
        // fails validation before reaching the network.
        let seq = self.seq.fetch_add(1, Ordering::SeqCst) + 1;

        if text.trim().is_empty() {
            let mut state = self.state.lock().await;
            state.phase = Phase::Failed;
            state.result = None;
            state.error = Some(CheckerError::EmptyInput.to_string());
            return state.phase;
        }

        {
            let mut state = self.state.lock().await;
            state.phase = Phase::Submitting;
            state.result = None;
            state.error = None;
        }

        let outcome = self.request_analysis(text).await;

        let mut state = self.state.lock().await;
        if self.seq.load(Ordering::SeqCst) != seq {
            debug!(seq, "Discarding superseded analysis response");
            return state.phase;
        }

        match outcome {
            Ok(result) => {
                info!(
                    score = result.credibility_score,
                    verdict = result.verdict.as_deref().unwrap_or("-"),
                    "Analysis succeeded"
                );
                state.result = Some(result);
                state.error = None;
                state.active_tab = ResultTab::Analysis;
                state.phase = Phase::Success;
            }
            Err(e) => {
                warn!(error = %e, "Analysis failed");
                state.result = None;
                state.error = Some(e.to_string());
                state.phase = Phase::Failed;
            }
        }
        state.phase
    }

    async fn request_analysis(&self, text: &str) -> CheckerResult<AnalysisResult> {
        let request = AnalysisRequest::new(text);

        let response = self
            .client
            .post(format!("{}/analyze", self.base_url))
            .header("Authorization", format!("Bearer {}", self.api_key))
            .json(&request)
            .send()
            .await
            .map_err(|e| CheckerError::Transport {
                message: e.to_string(),
            })?;

        match response.status().as_u16() {
            401 => return Err(CheckerError::DemoAuth),
            429 => return Err(CheckerError::RateLimited),
            status if !(200..300).contains(&status) => return Err(CheckerError::Server),
            _ => {}
        }

        let body: Value = response.json().await.map_err(|e| CheckerError::Transport {
            message: e.to_string(),
        })?;

        // A 2xx body can still carry a gateway error envelope.
        if let Some(message) = body.get("error").and_then(Value::as_str) {
            return Err(CheckerError::Upstream {
                message: message.to_string(),
            });
        }

        serde_json::from_value(body).map_err(|e| CheckerError::Transport {
            message: format!("Unexpected response shape: {e}"),
        })
    }

    /// Switch the active tab. Pure state; performs no I/O and keeps the
    /// current result.
    pub async fn select_tab(&self, tab: ResultTab) {
        let mut state = self.state.lock().await;
        state.active_tab = tab;
    }

    /// Fetch the static educational tips payload.
    ///
    /// Failure is logged and leaves the tips panel empty; it never affects
    /// analysis submission.
    pub async fn load_tips(&self) {
        let url = format!("{}/api/educational/tips", self.base_url);
        let fetched = async {
            let response = self.client.get(&url).send().await?;
            response.error_for_status()?.json::<EducationalTips>().await
        }
        .await;

        match fetched {
            Ok(tips) => {
                self.state.lock().await.tips = Some(tips);
            }
            Err(e) => warn!(error = %e, "Failed to load tips"),
        }
    }

    /// Fetch the tier listing, falling back to the hardcoded table on any
    /// failure
    pub async fn load_tiers(&self) -> TierTable {
        let url = format!("{}/api/keys", self.base_url);
        let fetched = async {
            let response = self.client.get(&url).send().await?;
            response.error_for_status()?.json::<TierListing>().await
        }
        .await;

        match fetched {
            Ok(listing) => listing.tiers,
            Err(e) => {
                warn!(error = %e, "Failed to load API tiers, using fallback table");
                fallback_tiers()
            }
        }
    }

    /// Clone the current controller state
    pub async fn snapshot(&self) -> Snapshot {
        self.state.lock().await.clone()
    }

    /// Get the gateway base URL (for testing)
    pub fn base_url(&self) -> &str {
        &self.base_url
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn controller() -> CheckerController {
        CheckerController::new("http://127.0.0.1:9/", "demo_key", 1000)
            .expect("Failed to create controller")
    }

    #[test]
    fn test_controller_starts_idle() {
        let controller = controller();
        assert_eq!(controller.base_url(), "http://127.0.0.1:9");
        let state = controller.state.try_lock().unwrap();
        assert_eq!(state.phase, Phase::Idle);
        assert_eq!(state.active_tab, ResultTab::Analysis);
        assert!(state.result.is_none());
    }

    #[tokio::test]
    async fn test_select_tab_is_pure_state() {
        let controller = controller();
        controller.select_tab(ResultTab::Education).await;
        let snapshot = controller.snapshot().await;
        assert_eq!(snapshot.active_tab, ResultTab::Education);
        assert_eq!(snapshot.phase, Phase::Idle);
    }

    #[tokio::test]
    async fn test_empty_submit_fails_without_network() {
        // The base URL points at a closed port; an attempted request would
        // surface as a transport error, not the validation message.
        let controller = controller();
        let phase = controller.submit("   ").await;
        assert_eq!(phase, Phase::Failed);

        let snapshot = controller.snapshot().await;
        assert_eq!(
            snapshot.error.as_deref(),
            Some("Please enter some text to analyze.")
        );
        assert!(snapshot.result.is_none());
    }
}
