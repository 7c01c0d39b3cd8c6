//! Recommendation Generator: turns a parsed CV into ranked course suggestions.
//!
//! Default: `KeywordRecommender`, a linear and explainable score:
//! `keyword_weight` per course keyword found in the CV's skills, plus the
//! highest experience tier reached, clamped to 100. No normalization for
//! keyword-list length and no penalty for missing skills.
//!
//! `AppState` holds an `Arc<dyn CourseRecommender>` so the scoring backend can be
//! swapped without touching handlers.

use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::models::course_request::RequestStatus;
use crate::scoring::catalog::{Catalog, CourseCategory, CourseDefinition};
use crate::scoring::extractor::ParsedCv;

const MAX_SCORE: u32 = 100;

// ────────────────────────────────────────────────────────────────────────────
// Output data model
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Recommendation {
    pub course: String,
    pub category: CourseCategory,
    pub score: u32, // 0 – 100
    pub status: RequestStatus,
}

// ────────────────────────────────────────────────────────────────────────────
// Trait definition
// ────────────────────────────────────────────────────────────────────────────

pub trait CourseRecommender: Send + Sync {
    /// Ranked best-first; one entry per course, zero scores omitted.
    fn recommend(&self, parsed: &ParsedCv) -> Vec<Recommendation>;
}

// ────────────────────────────────────────────────────────────────────────────
// KeywordRecommender
// ────────────────────────────────────────────────────────────────────────────

pub struct KeywordRecommender {
    catalog: Arc<Catalog>,
}

impl KeywordRecommender {
    pub fn new(catalog: Arc<Catalog>) -> Self {
        Self { catalog }
    }
}

impl CourseRecommender for KeywordRecommender {
    fn recommend(&self, parsed: &ParsedCv) -> Vec<Recommendation> {
        recommend_courses(parsed, &self.catalog)
    }
}

pub fn score_course(course: &CourseDefinition, parsed: &ParsedCv, catalog: &Catalog) -> u32 {
    let policy = &catalog.policy;
    let keyword_points: u32 = course
        .keywords
        .iter()
        .filter(|k| parsed.has_skill(k))
        .map(|_| policy.keyword_weight)
        .fold(0, u32::saturating_add);

    keyword_points
        .saturating_add(policy.experience_bonus(parsed.experience_years))
        .min(MAX_SCORE)
}

pub fn recommend_courses(parsed: &ParsedCv, catalog: &Catalog) -> Vec<Recommendation> {
    let mut recommendations: Vec<Recommendation> = catalog
        .courses
        .iter()
        .map(|course| Recommendation {
            course: course.name.clone(),
            category: course.category,
            score: score_course(course, parsed, catalog),
            status: RequestStatus::Pending,
        })
        .filter(|r| r.score > 0)
        .collect();

    // sort_by is stable: equal scores keep catalog order
    recommendations.sort_by(|a, b| b.score.cmp(&a.score));
    recommendations
}

// ────────────────────────────────────────────────────────────────────────────
// Tests
// ────────────────────────────────────────────────────────────────────────────
