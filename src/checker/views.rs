use crate::backend::{
    AnalysisResult, EducationalContent, EducationalTips, EvidenceItem, EvidenceSummary,
    FactCheckItem, LanguageAnalysis,
};

use super::score::{ScoreCategory, VerdictCategory};

/// Primary verdict projection shown on the analysis tab.
///
/// Tier-gated sections surface as `None` when the backend omitted them.
#[derive(Debug)]
pub struct AnalysisView<'a> {
    pub claim: &'a str,
    pub credibility_score: i64,
    pub score_category: ScoreCategory,
    pub verdict_label: Option<&'a str>,
    pub verdict: VerdictCategory,
    pub confidence: Option<i64>,
    pub language: Option<&'a LanguageAnalysis>,
    pub source: Option<SourceView<'a>>,
}

/// Source-reputation projection with its derived score category
#[derive(Debug)]
pub struct SourceView<'a> {
    pub reputation_score: i64,
    pub reputation_category: ScoreCategory,
    pub trust_indicators: &'a [String],
    pub warning_signs: &'a [String],
}

/// Evidence tab projection
#[derive(Debug)]
pub struct EvidenceView<'a> {
    pub summary: Option<&'a EvidenceSummary>,
    pub top_evidence: &'a [EvidenceItem],
    pub fact_checks: &'a [FactCheckItem],
}

/// Education tab projection: per-result content plus the static tips payload
#[derive(Debug)]
pub struct EducationView<'a> {
    pub content: Option<&'a EducationalContent>,
    pub tips: Option<&'a EducationalTips>,
}

/// Project the analysis tab from a result
pub fn analysis_view(result: &AnalysisResult) -> AnalysisView<'_> {
    AnalysisView {
        claim: &result.analyzed_claim,
        credibility_score: result.credibility_score,
        score_category: ScoreCategory::from_score(result.credibility_score),
        verdict_label: result.verdict.as_deref(),
        verdict: VerdictCategory::from_verdict(result.verdict.as_deref()),
        confidence: result.confidence,
        language: result.language_analysis.as_ref(),
        source: result.source_analysis.as_ref().map(|s| SourceView {
            reputation_score: s.reputation_score,
            reputation_category: ScoreCategory::from_score(s.reputation_score),
            trust_indicators: &s.trust_indicators,
            warning_signs: &s.warning_signs,
        }),
    }
}

/// Project the evidence tab from a result
pub fn evidence_view(result: &AnalysisResult) -> EvidenceView<'_> {
    EvidenceView {
        summary: result.evidence_summary.as_ref(),
        top_evidence: result.top_evidence.as_deref().unwrap_or(&[]),
        fact_checks: result.results.as_deref().unwrap_or(&[]),
    }
}

/// Project the education tab from a result and the static tips payload
pub fn education_view<'a>(
    result: &'a AnalysisResult,
    tips: Option<&'a EducationalTips>,
) -> EducationView<'a> {
    EducationView {
        content: result.educational_content.as_ref(),
        tips,
    }
}
