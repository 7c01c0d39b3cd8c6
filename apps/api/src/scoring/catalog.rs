//! Keyword Catalog: course definitions, the skill vocabulary and the scoring policy.
//!
//! The catalog is built once at startup (either the canonical built-in table or a
//! JSON file named by `CATALOG_PATH`), validated, and then shared read-only as
//! `Arc<Catalog>`. Scoring functions take it as an argument instead of reaching
//! for module-level tables.

use std::collections::HashSet;
use std::path::Path;

use anyhow::{bail, Context, Result};
use serde::{Deserialize, Serialize};
use tracing::info;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum CourseCategory {
    Technical,
    Mathematics,
    Science,
    Management,
    Humanities,
    #[serde(rename = "Soft Skills")]
    SoftSkills,
    Academic,
}

/// A course that can be recommended and requested. Never mutated after load.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CourseDefinition {
    pub name: String,
    pub category: CourseCategory,
    pub keywords: Vec<String>,
}

/// Bonus points awarded once a CV reports at least `min_years` of experience.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExperienceTier {
    pub min_years: u32,
    pub bonus: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoringPolicy {
    /// Minimum match score (percent) a CV needs before skills are extracted.
    pub match_threshold: u32,
    /// Points per course keyword found in the extracted skill set.
    pub keyword_weight: u32,
    /// Ascending by `min_years`. Only the highest tier reached applies.
    pub experience_tiers: Vec<ExperienceTier>,
}

impl Default for ScoringPolicy {
    fn default() -> Self {
        Self {
            match_threshold: 55,
            keyword_weight: 30,
            experience_tiers: vec![
                ExperienceTier {
                    min_years: 3,
                    bonus: 10,
                },
                ExperienceTier {
                    min_years: 7,
                    bonus: 20,
                },
            ],
        }
    }
}

impl ScoringPolicy {
    pub fn experience_bonus(&self, years: u32) -> u32 {
        self.experience_tiers
            .iter()
            .rev()
            .find(|tier| years >= tier.min_years)
            .map(|tier| tier.bonus)
            .unwrap_or(0)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Catalog {
    pub courses: Vec<CourseDefinition>,
    /// Order matters: extracted skills are reported in this order.
    pub skill_vocabulary: Vec<String>,
    #[serde(default)]
    pub policy: ScoringPolicy,
}

const SKILL_VOCABULARY: &[&str] = &[
    // technical
    "python",
    "java",
    "javascript",
    "sql",
    "database",
    "data structures",
    "algorithms",
    "machine learning",
    // mathematics
    "statistics",
    "calculus",
    "linear algebra",
    // science
    "physics",
    "chemistry",
    // management
    "management",
    "leadership",
    "marketing",
    "finance",
    // humanities
    "history",
    "literature",
    // soft skills
    "communication",
    "teamwork",
    // academic
    "research",
    "teaching",
    "curriculum",
];

const COURSES: &[(&str, CourseCategory, &[&str])] = &[
    (
        "Introduction to Programming",
        CourseCategory::Technical,
        &["python", "java", "javascript", "algorithms"],
    ),
    (
        "Data Structures",
        CourseCategory::Technical,
        &["data structures", "algorithms", "java", "python"],
    ),
    (
        "Database Systems",
        CourseCategory::Technical,
        &["sql", "database", "data structures"],
    ),
    (
        "Machine Learning",
        CourseCategory::Technical,
        &["machine learning", "python", "statistics", "linear algebra"],
    ),
    (
        "Engineering Mathematics",
        CourseCategory::Mathematics,
        &["calculus", "linear algebra", "statistics"],
    ),
    (
        "Applied Sciences",
        CourseCategory::Science,
        &["physics", "chemistry", "calculus"],
    ),
    (
        "Principles of Management",
        CourseCategory::Management,
        &["management", "leadership", "teamwork"],
    ),
    (
        "Business Finance and Marketing",
        CourseCategory::Management,
        &["finance", "marketing", "statistics"],
    ),
    (
        "World History",
        CourseCategory::Humanities,
        &["history", "research", "literature"],
    ),
    (
        "English Literature",
        CourseCategory::Humanities,
        &["literature", "communication"],
    ),
    (
        "Professional Communication",
        CourseCategory::SoftSkills,
        &["communication", "teamwork", "leadership"],
    ),
    (
        "Research Methodology",
        CourseCategory::Academic,
        &["research", "statistics", "teaching", "curriculum"],
    ),
];

impl Catalog {
    /// The canonical 12-course catalog.
    pub fn builtin() -> Self {
        Catalog {
            courses: COURSES
                .iter()
                .map(|(name, category, keywords)| CourseDefinition {
                    name: name.to_string(),
                    category: *category,
                    keywords: keywords.iter().map(|k| k.to_string()).collect(),
                })
                .collect(),
            skill_vocabulary: SKILL_VOCABULARY.iter().map(|s| s.to_string()).collect(),
            policy: ScoringPolicy::default(),
        }
    }

    /// Loads the catalog from `path` if given, otherwise returns the built-in one.
    pub fn load(path: Option<&str>) -> Result<Self> {
        let catalog = match path {
            Some(p) => Self::from_file(p)?,
            None => Self::builtin(),
        };
        info!(
            "Keyword catalog ready: {} courses, {} skills, match threshold {}%",
            catalog.courses.len(),
            catalog.skill_vocabulary.len(),
            catalog.policy.match_threshold
        );
        Ok(catalog)
    }

    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let raw = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read catalog file '{}'", path.display()))?;
        Self::from_json_str(&raw)
            .with_context(|| format!("Invalid catalog file '{}'", path.display()))
    }

    pub fn from_json_str(raw: &str) -> Result<Self> {
        let catalog: Catalog = serde_json::from_str(raw).context("Catalog JSON is malformed")?;
        catalog.validate()?;
        Ok(catalog)
    }

    pub fn validate(&self) -> Result<()> {
        if self.courses.is_empty() {
            bail!("catalog must define at least one course");
        }
        if self.policy.keyword_weight == 0 {
            bail!("keyword_weight must be greater than zero");
        }
        if self.policy.match_threshold > 100 {
            bail!(
                "match_threshold must be a percentage, got {}",
                self.policy.match_threshold
            );
        }
        if self
            .policy
            .experience_tiers
            .windows(2)
            .any(|pair| pair[0].min_years >= pair[1].min_years)
        {
            bail!("experience_tiers must be strictly ascending by min_years");
        }

        let mut vocabulary = HashSet::new();
        for skill in &self.skill_vocabulary {
            if skill.trim().is_empty() || *skill != skill.to_lowercase() {
                bail!("skill '{skill}' must be a non-empty lower-case keyword");
            }
            if !vocabulary.insert(skill.as_str()) {
                bail!("skill '{skill}' appears twice in the vocabulary");
            }
        }

        let mut names = HashSet::new();
        for course in &self.courses {
            if !names.insert(course.name.to_lowercase()) {
                bail!("course '{}' is defined twice", course.name);
            }
            if course.keywords.is_empty() {
                bail!("course '{}' has no keywords", course.name);
            }
            if let Some(unknown) = course
                .keywords
                .iter()
                .find(|k| !vocabulary.contains(k.as_str()))
            {
                bail!(
                    "course '{}' uses keyword '{unknown}' which is not in the skill vocabulary",
                    course.name
                );
            }
        }
        Ok(())
    }

    /// Courses whose keyword lists make up the match-score universe.
    pub fn match_universe(&self) -> impl Iterator<Item = &CourseDefinition> {
        self.courses
            .iter()
            .filter(|c| c.category == CourseCategory::Technical)
    }

    pub fn find_course(&self, name: &str) -> Option<&CourseDefinition> {
        let name = name.trim();
        self.courses
            .iter()
            .find(|c| c.name.eq_ignore_ascii_case(name))
    }
}
