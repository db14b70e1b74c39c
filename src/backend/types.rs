use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Analysis request forwarded to the backend `/analyze` endpoint
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnalysisRequest {
    pub source_text: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub source_url: Option<String>,
}

impl AnalysisRequest {
    /// Create a request for a piece of text
    pub fn new(source_text: impl Into<String>) -> Self {
        Self {
            source_text: source_text.into(),
            source_url: None,
        }
    }

    /// Attach the URL the text was taken from
    pub fn with_source_url(mut self, url: impl Into<String>) -> Self {
        self.source_url = Some(url.into());
        self
    }
}

/// Tier-gated analysis result.
///
/// Everything past the base fields is present only at or above the
/// subscription tier that unlocks it. A missing field means the section is
/// absent, never that the response is invalid.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnalysisResult {
    pub analyzed_claim: String,
    pub credibility_score: i64,
    /// Verdict label. Two historical vocabularies coexist upstream
    /// (SUPPORTED/REFUTED/NEUTRAL and True/False/Unknown); both are accepted
    /// here and normalized at display time. `model_verdict` is a legacy alias.
    #[serde(alias = "model_verdict", skip_serializing_if = "Option::is_none")]
    pub verdict: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub confidence: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tier: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub language_analysis: Option<LanguageAnalysis>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub source_analysis: Option<SourceAnalysis>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub evidence_summary: Option<EvidenceSummary>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub top_evidence: Option<Vec<EvidenceItem>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub results: Option<Vec<FactCheckItem>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub educational_content: Option<EducationalContent>,
}

/// Language-pattern counters with detected red flags
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LanguageAnalysis {
    pub emotional_language: i64,
    pub certainty_indicators: i64,
    pub urgency_indicators: i64,
    pub conspiracy_indicators: i64,
    #[serde(default)]
    pub red_flags: Vec<String>,
}

/// Source reputation assessment
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SourceAnalysis {
    pub reputation_score: i64,
    #[serde(default)]
    pub trust_indicators: Vec<String>,
    #[serde(default)]
    pub warning_signs: Vec<String>,
}

/// Counts of evidence by stance
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EvidenceSummary {
    pub supporting: i64,
    pub contradicting: i64,
    pub neutral: i64,
}

/// A single retrieved evidence passage
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EvidenceItem {
    pub content: String,
    pub relevance_score: f64,
}

/// External fact-check item
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FactCheckItem {
    pub claim: String,
    pub verdict: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub source: Option<String>,
}

/// Per-result educational content
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EducationalContent {
    pub why_this_matters: String,
    #[serde(default)]
    pub tips: Vec<String>,
    #[serde(default)]
    pub how_to_spot_similar: Vec<String>,
}

/// Static educational tips payload served by the gateway
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EducationalTips {
    pub tips: Vec<String>,
    pub red_flags: Vec<String>,
    pub reliable_sources: Vec<String>,
}

/// One subscription tier as listed by `/api/keys`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ApiTier {
    pub name: String,
    pub price: String,
    pub rate_limit: String,
    pub daily_limit: String,
    pub features: Vec<String>,
}

/// The four subscription tiers, in display order
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TierTable {
    pub free: ApiTier,
    pub basic: ApiTier,
    pub pro: ApiTier,
    pub enterprise: ApiTier,
}

/// Envelope returned by the backend's `/api/keys` endpoint
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TierListing {
    pub tiers: TierTable,
}

/// An upstream HTTP reply with its body decoded as far as possible.
///
/// Non-JSON bodies are wrapped as `{"raw": <text>}` so every reply carries a
/// JSON value regardless of what the backend produced.
#[derive(Debug, Clone)]
pub struct UpstreamReply {
    pub status: u16,
    pub body: Value,
}

impl UpstreamReply {
    /// Decode a body, wrapping non-JSON text
    pub fn from_text(status: u16, text: &str) -> Self {
        let body = serde_json::from_str(text)
            .unwrap_or_else(|_| serde_json::json!({ "raw": text }));
        Self { status, body }
    }

    /// Whether the upstream status was 2xx
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_result_with_only_base_fields_deserializes() {
        let body = json!({
            "analyzed_claim": "The moon is made of cheese",
            "credibility_score": 12,
            "verdict": "REFUTED",
            "confidence": 88
        });

        let result: AnalysisResult = serde_json::from_value(body).unwrap();
        assert_eq!(result.analyzed_claim, "The moon is made of cheese");
        assert_eq!(result.credibility_score, 12);
        assert_eq!(result.verdict.as_deref(), Some("REFUTED"));
        assert!(result.language_analysis.is_none());
        assert!(result.source_analysis.is_none());
        assert!(result.educational_content.is_none());
    }

    #[test]
    fn test_model_verdict_alias_is_accepted() {
        let body = json!({
            "analyzed_claim": "claim",
            "credibility_score": 90,
            "model_verdict": "True"
        });

        let result: AnalysisResult = serde_json::from_value(body).unwrap();
        assert_eq!(result.verdict.as_deref(), Some("True"));
    }

    #[test]
    fn test_result_serializes_without_absent_sections() {
        let result = AnalysisResult {
            analyzed_claim: "claim".to_string(),
            credibility_score: 50,
            verdict: None,
            confidence: None,
            tier: None,
            language_analysis: None,
            source_analysis: None,
            evidence_summary: None,
            top_evidence: None,
            results: None,
            educational_content: None,
        };

        let value = serde_json::to_value(&result).unwrap();
        let obj = value.as_object().unwrap();
        assert!(!obj.contains_key("source_analysis"));
        assert!(!obj.contains_key("verdict"));
    }

    #[test]
    fn test_upstream_reply_wraps_non_json_text() {
        let reply = UpstreamReply::from_text(502, "Bad Gateway");
        assert_eq!(reply.status, 502);
        assert_eq!(reply.body, json!({ "raw": "Bad Gateway" }));
        assert!(!reply.is_success());
    }

    #[test]
    fn test_upstream_reply_parses_json_text() {
        let reply = UpstreamReply::from_text(200, r#"{"detail": "ok"}"#);
        assert!(reply.is_success());
        assert_eq!(reply.body["detail"], "ok");
    }

    #[test]
    fn test_request_builder() {
        let request = AnalysisRequest::new("some claim").with_source_url("https://example.com");
        let value = serde_json::to_value(&request).unwrap();
        assert_eq!(value["source_text"], "some claim");
        assert_eq!(value["source_url"], "https://example.com");

        let bare = serde_json::to_value(AnalysisRequest::new("x")).unwrap();
        assert!(!bare.as_object().unwrap().contains_key("source_url"));
    }
}
