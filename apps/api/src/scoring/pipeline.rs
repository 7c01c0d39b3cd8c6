//! CV assessment pipeline: normalize → validity gate → match gate → extract → recommend.
//!
//! Gate failures are ordinary values; handlers decide what a rejection means for
//! the faculty record.

use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::scoring::catalog::Catalog;
use crate::scoring::extractor::{parse_cv, ParsedCv};
use crate::scoring::match_score::{compute_match_score, passes_match_gate};
use crate::scoring::normalize::normalize_cv_text;
use crate::scoring::recommender::{CourseRecommender, Recommendation};
use crate::scoring::validity::check_validity;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RejectionReason {
    NotACv,
    InsufficientMatch,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "outcome", rename_all = "snake_case")]
pub enum CvAssessment {
    Accepted {
        match_score: u32,
        parsed: ParsedCv,
        recommendations: Vec<Recommendation>,
        report: String,
    },
    Rejected {
        reason: RejectionReason,
        indicator_hits: usize,
        /// Absent when the validity gate stopped the pipeline first.
        match_score: Option<u32>,
        report: String,
    },
}

impl CvAssessment {
    pub fn report(&self) -> &str {
        match self {
            CvAssessment::Accepted { report, .. } | CvAssessment::Rejected { report, .. } => {
                report
            }
        }
    }

    pub fn match_score(&self) -> u32 {
        match self {
            CvAssessment::Accepted { match_score, .. } => *match_score,
            CvAssessment::Rejected { match_score, .. } => match_score.unwrap_or(0),
        }
    }
}

pub fn assess_cv(
    raw_text: &str,
    catalog: &Catalog,
    recommender: &dyn CourseRecommender,
) -> CvAssessment {
    let normalized = normalize_cv_text(raw_text);

    let validity = check_validity(&normalized);
    debug!(
        hits = validity.indicator_hits,
        valid = validity.valid,
        "CV validity gate"
    );
    if !validity.valid {
        info!("CV rejected: not a CV ({} indicators)", validity.indicator_hits);
        return CvAssessment::Rejected {
            reason: RejectionReason::NotACv,
            indicator_hits: validity.indicator_hits,
            match_score: None,
            report: format!(
                "Document does not look like a CV: found {} of {} CV indicators, at least 2 required.",
                validity.indicator_hits, validity.indicators_checked
            ),
        };
    }

    let match_score = compute_match_score(&normalized, catalog);
    debug!(
        match_score,
        threshold = catalog.policy.match_threshold,
        "CV match gate"
    );
    if !passes_match_gate(match_score, catalog) {
        info!("CV rejected: match score {match_score}%");
        return CvAssessment::Rejected {
            reason: RejectionReason::InsufficientMatch,
            indicator_hits: validity.indicator_hits,
            match_score: Some(match_score),
            report: format!(
                "Keyword match {match_score}% is below the required {}%.",
                catalog.policy.match_threshold
            ),
        };
    }

    let parsed = parse_cv(&normalized, catalog);
    let recommendations = recommender.recommend(&parsed);
    info!(
        "CV accepted: match score {match_score}%, {} recommendations",
        recommendations.len()
    );

    let report = format!(
        "Keyword match {match_score}%. Found {} known skills and {} course recommendations.",
        parsed.skills.len(),
        recommendations.len()
    );

    CvAssessment::Accepted {
        match_score,
        parsed,
        recommendations,
        report,
    }
}
