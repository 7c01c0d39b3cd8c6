use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use uuid::Uuid;

use crate::scoring::recommender::Recommendation;

/// Lifecycle shared by course requests, recommendations and CV reviews.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum RequestStatus {
    #[default]
    Pending,
    Approved,
    Rejected,
}

/// Shared by every HOD decision: only PENDING items move, and only to
/// APPROVED or REJECTED.
pub fn ensure_reviewable(
    id: Uuid,
    current: RequestStatus,
    decision: RequestStatus,
) -> Result<(), ReviewError> {
    if current != RequestStatus::Pending {
        return Err(ReviewError::AlreadyReviewed {
            id,
            status: current,
        });
    }
    if decision == RequestStatus::Pending {
        return Err(ReviewError::UndecidedReview);
    }
    Ok(())
}

#[derive(Debug, Error, PartialEq)]
pub enum ReviewError {
    #[error("{id} has already been reviewed as {status:?}")]
    AlreadyReviewed { id: Uuid, status: RequestStatus },

    #[error("a review decision must be APPROVED or REJECTED")]
    UndecidedReview,
}

/// A faculty member's request to teach a course, reviewed by the HOD.
/// Persisted by the caller; this service only builds and transitions it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CourseRequest {
    pub id: Uuid,
    pub faculty_id: Uuid,
    pub course_name: String,
    pub comment: Option<String>,
    pub match_score: u32,
    pub status: RequestStatus,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl CourseRequest {
    /// New PENDING request carrying the recommendation's score as its match score.
    pub fn from_recommendation(
        faculty_id: Uuid,
        recommendation: &Recommendation,
        comment: Option<String>,
    ) -> Self {
        let now = Utc::now();
        CourseRequest {
            id: Uuid::new_v4(),
            faculty_id,
            course_name: recommendation.course.clone(),
            comment: comment.filter(|c| !c.trim().is_empty()),
            match_score: recommendation.score,
            status: RequestStatus::Pending,
            created_at: now,
            updated_at: now,
        }
    }

    /// HOD decision. Only PENDING requests move, and only to APPROVED or REJECTED.
    pub fn review(mut self, decision: RequestStatus) -> Result<Self, ReviewError> {
        ensure_reviewable(self.id, self.status, decision)?;
        self.status = decision;
        self.updated_at = Utc::now();
        Ok(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scoring::catalog::CourseCategory;

    fn recommendation() -> Recommendation {
        Recommendation {
            course: "Machine Learning".to_string(),
            category: CourseCategory::Technical,
            score: 70,
            status: RequestStatus::Pending,
        }
    }

    #[test]
    fn test_new_request_is_pending_with_score() {
        let faculty_id = Uuid::new_v4();
        let req = CourseRequest::from_recommendation(
            faculty_id,
            &recommendation(),
            Some("Taught it twice".to_string()),
        );
        assert_eq!(req.status, RequestStatus::Pending);
        assert_eq!(req.match_score, 70);
        assert_eq!(req.course_name, "Machine Learning");
        assert_eq!(req.faculty_id, faculty_id);
        assert_eq!(req.created_at, req.updated_at);
    }

    #[test]
    fn test_blank_comment_is_dropped() {
        let req =
            CourseRequest::from_recommendation(Uuid::new_v4(), &recommendation(), Some("  ".into()));
        assert!(req.comment.is_none());
    }

    #[test]
    fn test_approve_pending() {
        let req = CourseRequest::from_recommendation(Uuid::new_v4(), &recommendation(), None);
        let created = req.created_at;
        let approved = req.review(RequestStatus::Approved).unwrap();
        assert_eq!(approved.status, RequestStatus::Approved);
        assert!(approved.updated_at >= created);
    }

    #[test]
    fn test_cannot_review_twice() {
        let req = CourseRequest::from_recommendation(Uuid::new_v4(), &recommendation(), None)
            .review(RequestStatus::Rejected)
            .unwrap();
        let id = req.id;
        let err = req.review(RequestStatus::Approved).unwrap_err();
        assert_eq!(
            err,
            ReviewError::AlreadyReviewed {
                id,
                status: RequestStatus::Rejected
            }
        );
    }

    #[test]
    fn test_pending_is_not_a_decision() {
        let req = CourseRequest::from_recommendation(Uuid::new_v4(), &recommendation(), None);
        assert_eq!(
            req.review(RequestStatus::Pending).unwrap_err(),
            ReviewError::UndecidedReview
        );
    }

    #[test]
    fn test_status_wire_format() {
        assert_eq!(
            serde_json::to_string(&RequestStatus::Approved).unwrap(),
            r#""APPROVED""#
        );
        let status: RequestStatus = serde_json::from_str(r#""REJECTED""#).unwrap();
        assert_eq!(status, RequestStatus::Rejected);
    }
}
