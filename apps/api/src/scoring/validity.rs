use serde::{Deserialize, Serialize};

/// Words that almost every CV contains somewhere. Matched as substrings.
const CV_INDICATORS: &[&str] = &[
    "education",
    "experience",
    "skills",
    "project",
    "university",
    "bachelor",
    "master",
    "phd",
];

const MIN_INDICATOR_HITS: usize = 2;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ValidityCheck {
    pub valid: bool,
    pub indicator_hits: usize,
    pub indicators_checked: usize,
}

/// Coarse "does this look like a CV" gate over normalized text.
///
/// Not a structure check: any document mentioning two indicator words passes.
pub fn check_validity(normalized: &str) -> ValidityCheck {
    let indicator_hits = CV_INDICATORS
        .iter()
        .filter(|&&word| normalized.contains(word))
        .count();

    ValidityCheck {
        valid: indicator_hits >= MIN_INDICATOR_HITS,
        indicator_hits,
        indicators_checked: CV_INDICATORS.len(),
    }
}
