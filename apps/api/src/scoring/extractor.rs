//! Skill Extractor: pulls skills, years of experience and education level out of
//! normalized CV text.

use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::scoring::catalog::Catalog;

/// "6 years", "3+ years", "1 year". ASCII digits only so parsing cannot
/// trip over other Unicode numerals.
static EXPERIENCE_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"([0-9]+)\s*\+?\s*years?").unwrap());

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum Education {
    #[default]
    Unknown,
    Bachelors,
    Masters,
    PhD,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ParsedCv {
    /// Subset of the catalog vocabulary, in vocabulary order.
    pub skills: Vec<String>,
    pub experience_years: u32,
    pub education: Education,
}

impl ParsedCv {
    pub fn has_skill(&self, skill: &str) -> bool {
        self.skills.iter().any(|s| s == skill)
    }
}

pub fn extract_skills(normalized: &str, catalog: &Catalog) -> Vec<String> {
    catalog
        .skill_vocabulary
        .iter()
        .filter(|skill| normalized.contains(skill.as_str()))
        .cloned()
        .collect()
}

/// First "<n> year(s)" mention wins; 0 when absent or too large for a u32.
pub fn extract_experience_years(normalized: &str) -> u32 {
    EXPERIENCE_RE
        .captures(normalized)
        .and_then(|caps| caps.get(1))
        .and_then(|m| m.as_str().parse::<u32>().ok())
        .unwrap_or(0)
}

/// Highest degree mentioned, checked in priority order phd > master > bachelor.
pub fn extract_education(normalized: &str) -> Education {
    if normalized.contains("phd") {
        Education::PhD
    } else if normalized.contains("master") {
        Education::Masters
    } else if normalized.contains("bachelor") {
        Education::Bachelors
    } else {
        Education::Unknown
    }
}

pub fn parse_cv(normalized: &str, catalog: &Catalog) -> ParsedCv {
    let parsed = ParsedCv {
        skills: extract_skills(normalized, catalog),
        experience_years: extract_experience_years(normalized),
        education: extract_education(normalized),
    };
    debug!(
        skills = parsed.skills.len(),
        experience_years = parsed.experience_years,
        education = ?parsed.education,
        "Parsed CV"
    );
    parsed
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scoring::normalize::normalize_cv_text;

    const SAMPLE: &str =
        "python, 6 years experience, bachelor degree, university project, skills in machine learning";

    #[test]
    fn test_sample_cv() {
        let parsed = parse_cv(SAMPLE, &Catalog::builtin());
        assert!(parsed.has_skill("python"));
        assert!(parsed.has_skill("machine learning"));
        assert_eq!(parsed.experience_years, 6);
        assert_eq!(parsed.education, Education::Bachelors);
    }

    #[test]
    fn test_empty_text_defaults() {
        let parsed = parse_cv("", &Catalog::builtin());
        assert!(parsed.skills.is_empty());
        assert_eq!(parsed.experience_years, 0);
        assert_eq!(parsed.education, Education::Unknown);
    }

    #[test]
    fn test_skills_follow_vocabulary_order() {
        let skills = extract_skills("teaching, sql and then python", &Catalog::builtin());
        assert_eq!(skills, vec!["python", "sql", "teaching"]);
    }

    #[test]
    fn test_skills_are_subset_of_vocabulary() {
        let catalog = Catalog::builtin();
        let skills = extract_skills(
            "rust, go, kotlin, python, haskell, statistics, cooking",
            &catalog,
        );
        assert!(skills.iter().all(|s| catalog.skill_vocabulary.contains(s)));
        assert_eq!(skills, vec!["python", "statistics"]);
    }

    #[test]
    fn test_java_is_found_inside_javascript() {
        let skills = extract_skills("javascript developer", &Catalog::builtin());
        assert_eq!(skills, vec!["java", "javascript"]);
    }

    #[test]
    fn test_experience_first_match_wins() {
        assert_eq!(
            extract_experience_years("2 years at acme, then 10 years at globex"),
            2
        );
    }

    #[test]
    fn test_experience_variants() {
        assert_eq!(extract_experience_years("1 year"), 1);
        assert_eq!(extract_experience_years("12years"), 12);
        assert_eq!(extract_experience_years("5+ years of teaching"), 5);
        assert_eq!(extract_experience_years("several years"), 0);
    }

    #[test]
    fn test_experience_overflow_defaults_to_zero() {
        assert_eq!(extract_experience_years("99999999999999 years"), 0);
    }

    #[test]
    fn test_education_priority() {
        assert_eq!(extract_education("master of science, phd"), Education::PhD);
        assert_eq!(
            extract_education("bachelor then master"),
            Education::Masters
        );
        assert_eq!(extract_education("bachelor of arts"), Education::Bachelors);
        assert_eq!(extract_education("high school"), Education::Unknown);
    }

    #[test]
    fn test_case_insensitive_after_normalization() {
        let catalog = Catalog::builtin();
        let lower = parse_cv(&normalize_cv_text(SAMPLE), &catalog);
        let upper = parse_cv(&normalize_cv_text(&SAMPLE.to_uppercase()), &catalog);
        assert_eq!(lower, upper);
    }

    #[test]
    fn test_education_serializes_as_variant_name() {
        assert_eq!(serde_json::to_string(&Education::PhD).unwrap(), r#""PhD""#);
        assert_eq!(
            serde_json::to_string(&Education::Bachelors).unwrap(),
            r#""Bachelors""#
        );
    }
}
