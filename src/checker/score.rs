/// Tri-level category for credibility and reputation scores.
///
/// The same mapping drives both credibility_score and reputation_score
/// coloring: 70 and above is high, 40 to 69 is medium, below 40 is low.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScoreCategory {
    High,
    Medium,
    Low,
}

impl ScoreCategory {
    /// Map a 0-100 score onto its category
    pub fn from_score(score: i64) -> Self {
        if score >= 70 {
            ScoreCategory::High
        } else if score >= 40 {
            ScoreCategory::Medium
        } else {
            ScoreCategory::Low
        }
    }

    /// Stable lowercase label used by display code and assertions
    pub fn as_str(&self) -> &'static str {
        match self {
            ScoreCategory::High => "high",
            ScoreCategory::Medium => "medium",
            ScoreCategory::Low => "low",
        }
    }
}

/// Three-way verdict category.
///
/// Two historical verdict vocabularies coexist upstream; both collapse onto
/// this enum. Unrecognized or absent verdicts are neutral, never an error.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum VerdictCategory {
    Positive,
    Negative,
    #[default]
    Neutral,
}

impl VerdictCategory {
    /// Normalize a raw verdict label; total over any input
    pub fn from_verdict(verdict: Option<&str>) -> Self {
        match verdict {
            Some("SUPPORTED") | Some("True") => VerdictCategory::Positive,
            Some("REFUTED") | Some("False") => VerdictCategory::Negative,
            _ => VerdictCategory::Neutral,
        }
    }

    /// Stable lowercase label used by display code and assertions
    pub fn as_str(&self) -> &'static str {
        match self {
            VerdictCategory::Positive => "positive",
            VerdictCategory::Negative => "negative",
            VerdictCategory::Neutral => "neutral",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_score_category_boundaries() {
        assert_eq!(ScoreCategory::from_score(70), ScoreCategory::High);
        assert_eq!(ScoreCategory::from_score(69), ScoreCategory::Medium);
        assert_eq!(ScoreCategory::from_score(40), ScoreCategory::Medium);
        assert_eq!(ScoreCategory::from_score(39), ScoreCategory::Low);
    }

    #[test]
    fn test_score_category_extremes() {
        assert_eq!(ScoreCategory::from_score(100), ScoreCategory::High);
        assert_eq!(ScoreCategory::from_score(0), ScoreCategory::Low);
    }

    #[test]
    fn test_score_category_labels() {
        assert_eq!(ScoreCategory::High.as_str(), "high");
        assert_eq!(ScoreCategory::Medium.as_str(), "medium");
        assert_eq!(ScoreCategory::Low.as_str(), "low");
    }

    #[test]
    fn test_verdict_normalization_both_vocabularies() {
        assert_eq!(
            VerdictCategory::from_verdict(Some("SUPPORTED")),
            VerdictCategory::Positive
        );
        assert_eq!(
            VerdictCategory::from_verdict(Some("True")),
            VerdictCategory::Positive
        );
        assert_eq!(
            VerdictCategory::from_verdict(Some("REFUTED")),
            VerdictCategory::Negative
        );
        assert_eq!(
            VerdictCategory::from_verdict(Some("False")),
            VerdictCategory::Negative
        );
    }

    #[test]
    fn test_verdict_normalization_is_total() {
        assert_eq!(
            VerdictCategory::from_verdict(Some("NEUTRAL")),
            VerdictCategory::Neutral
        );
        assert_eq!(
            VerdictCategory::from_verdict(Some("Unknown")),
            VerdictCategory::Neutral
        );
        assert_eq!(
            VerdictCategory::from_verdict(Some("anything-else")),
            VerdictCategory::Neutral
        );
        assert_eq!(VerdictCategory::from_verdict(None), VerdictCategory::Neutral);
        // Case-sensitive by contract: lowercase variants are unrecognized
        assert_eq!(
            VerdictCategory::from_verdict(Some("supported")),
            VerdictCategory::Neutral
        );
    }
}
