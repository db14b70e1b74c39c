use crate::backend::{ApiTier, TierTable};

/// Hardcoded tier table shown when the `/api/keys` fetch fails.
///
/// The UI renders these values verbatim as its degraded pricing view, so the
/// literals here are a contract, not placeholder copy.
pub fn fallback_tiers() -> TierTable {
    TierTable {
        free: ApiTier {
            name: "Free".to_string(),
            price: "$0/month".to_string(),
            rate_limit: "10 requests/minute".to_string(),
            daily_limit: "100 requests/day".to_string(),
            features: vec![
                "Basic misinformation analysis".to_string(),
                "Credibility scoring".to_string(),
                "Verdict classification".to_string(),
            ],
        },
        basic: ApiTier {
            name: "Basic".to_string(),
            price: "$29/month".to_string(),
            rate_limit: "50 requests/minute".to_string(),
            daily_limit: "1,000 requests/day".to_string(),
            features: vec![
                "All Free features".to_string(),
                "Language pattern analysis".to_string(),
                "Red flag detection".to_string(),
            ],
        },
        pro: ApiTier {
            name: "Professional".to_string(),
            price: "$99/month".to_string(),
            rate_limit: "200 requests/minute".to_string(),
            daily_limit: "10,000 requests/day".to_string(),
            features: vec![
                "All Basic features".to_string(),
                "Source credibility analysis".to_string(),
                "Educational content".to_string(),
                "Priority support".to_string(),
            ],
        },
        enterprise: ApiTier {
            name: "Enterprise".to_string(),
            price: "Custom pricing".to_string(),
            rate_limit: "1,000 requests/minute".to_string(),
            daily_limit: "100,000 requests/day".to_string(),
            features: vec![
                "All Pro features".to_string(),
                "Enhanced evidence analysis".to_string(),
                "Custom integrations".to_string(),
                "Dedicated support".to_string(),
            ],
        },
    }
}
