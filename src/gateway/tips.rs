use std::sync::OnceLock;

use crate::backend::EducationalTips;

/// The static educational payload, built once for the process lifetime
pub fn builtin_tips() -> &'static EducationalTips {
    static TIPS: OnceLock<EducationalTips> = OnceLock::new();
    TIPS.get_or_init(|| EducationalTips {
        tips: vec![
            "Check multiple sources before believing a claim".to_string(),
            "Look for primary sources and original research".to_string(),
            "Be skeptical of claims that seem too good or bad to be true".to_string(),
            "Check the date of the information - old news can be misleading".to_string(),
            "Look for expert consensus on scientific topics".to_string(),
            "Be aware of your own biases and confirmation bias".to_string(),
            "Check if the source has a history of accuracy".to_string(),
            "Look for fact-checking organizations' verdicts".to_string(),
            "Be cautious of emotional language and urgency".to_string(),
            "Question claims that contradict established facts".to_string(),
        ],
        red_flags: vec![
            "Excessive emotional language".to_string(),
            "Claims that seem too certain".to_string(),
            "Urgency or exclusivity claims".to_string(),
            "Conspiracy language patterns".to_string(),
            "Lack of specific details or sources".to_string(),
            "Claims that appeal to authority without evidence".to_string(),
            "Information that confirms your existing beliefs too perfectly".to_string(),
        ],
        reliable_sources: vec![
            "Reuters".to_string(),
            "Associated Press".to_string(),
            "BBC".to_string(),
            "NPR".to_string(),
            "PBS".to_string(),
            "FactCheck.org".to_string(),
            "Snopes".to_string(),
            "PolitiFact".to_string(),
            "AP Fact Check".to_string(),
        ],
    })
}
