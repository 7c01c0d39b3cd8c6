use uuid::Uuid;

use crate::errors::AppError;
use crate::models::course_request::CourseRequest;
use crate::scoring::catalog::Catalog;
use crate::scoring::pipeline::{assess_cv, CvAssessment};
use crate::scoring::recommender::CourseRecommender;

pub struct NewCourseRequest<'a> {
    pub faculty_id: Uuid,
    pub course_name: &'a str,
    pub comment: Option<String>,
    pub cv_text: &'a str,
}

/// Builds a PENDING course request whose match score is the course's
/// recommendation score for the faculty member's CV.
///
/// Refused when the course is unknown, the CV fails a gate, or the course is
/// not among the CV's recommendations.
pub fn draft_course_request(
    catalog: &Catalog,
    recommender: &dyn CourseRecommender,
    request: NewCourseRequest<'_>,
) -> Result<CourseRequest, AppError> {
    let course = catalog
        .find_course(request.course_name)
        .ok_or_else(|| {
            AppError::UnprocessableEntity(format!(
                "Course '{}' is not in the catalog",
                request.course_name
            ))
        })?;

    let recommendations = match assess_cv(request.cv_text, catalog, recommender) {
        CvAssessment::Accepted {
            recommendations, ..
        } => recommendations,
        CvAssessment::Rejected { report, .. } => {
            return Err(AppError::UnprocessableEntity(format!(
                "CV was rejected: {report}"
            )))
        }
    };

    let recommendation = recommendations
        .iter()
        .find(|r| r.course == course.name)
        .ok_or_else(|| {
            AppError::UnprocessableEntity(format!(
                "Course '{}' is not among the recommendations for this CV",
                course.name
            ))
        })?;

    Ok(CourseRequest::from_recommendation(
        request.faculty_id,
        recommendation,
        request.comment,
    ))
}
