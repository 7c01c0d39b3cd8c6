use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::models::course_request::{ensure_reviewable, RequestStatus, ReviewError};
use crate::scoring::extractor::Education;
use crate::scoring::pipeline::CvAssessment;
use crate::scoring::recommender::Recommendation;

/// CV fields of a faculty profile, ready for the caller to persist after an upload.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FacultyCvReview {
    pub faculty_id: Uuid,
    pub cv_status: RequestStatus,
    pub authenticity_score: u32,
    pub authenticity_report: String,
    pub skills: Vec<String>,
    pub experience_years: u32,
    pub education: Education,
    pub recommended_courses: Vec<Recommendation>,
    pub cv_uploaded_at: DateTime<Utc>,
    /// Set when the HOD approves or rejects the CV.
    #[serde(default)]
    pub cv_reviewed_at: Option<DateTime<Utc>>,
}

impl FacultyCvReview {
    /// Accepted CVs wait for HOD review; rejected ones are closed immediately.
    pub fn from_assessment(faculty_id: Uuid, assessment: &CvAssessment) -> Self {
        let (cv_status, skills, experience_years, education, recommended_courses) =
            match assessment {
                CvAssessment::Accepted {
                    parsed,
                    recommendations,
                    ..
                } => (
                    RequestStatus::Pending,
                    parsed.skills.clone(),
                    parsed.experience_years,
                    parsed.education,
                    recommendations.clone(),
                ),
                CvAssessment::Rejected { .. } => (
                    RequestStatus::Rejected,
                    Vec::new(),
                    0,
                    Education::Unknown,
                    Vec::new(),
                ),
            };

        FacultyCvReview {
            faculty_id,
            cv_status,
            authenticity_score: assessment.match_score(),
            authenticity_report: assessment.report().to_string(),
            skills,
            experience_years,
            education,
            recommended_courses,
            cv_uploaded_at: Utc::now(),
            cv_reviewed_at: None,
        }
    }

    /// HOD decision on a CV still waiting for review. Automatic rejections
    /// are already closed and cannot be reviewed again.
    pub fn review(mut self, decision: RequestStatus) -> Result<Self, ReviewError> {
        ensure_reviewable(self.faculty_id, self.cv_status, decision)?;
        self.cv_status = decision;
        self.cv_reviewed_at = Some(Utc::now());
        Ok(self)
    }
}
