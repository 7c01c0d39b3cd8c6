//! Axum route handlers for course allocation requests.

use axum::{extract::State, http::StatusCode, Json};
use serde::Deserialize;
use tracing::info;
use uuid::Uuid;

use crate::allocation::requests::{draft_course_request, NewCourseRequest};
use crate::errors::AppError;
use crate::models::course_request::{CourseRequest, RequestStatus};
use crate::scoring::handlers::require_text;
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct CreateCourseRequest {
    pub faculty_id: Uuid,
    pub course_name: String,
    pub comment: Option<String>,
    pub cv_text: String,
}

#[derive(Debug, Deserialize)]
pub struct ReviewCourseRequest {
    pub request: CourseRequest,
    pub decision: RequestStatus,
}

/// POST /api/v1/course-requests
pub async fn handle_create_course_request(
    State(state): State<AppState>,
    Json(body): Json<CreateCourseRequest>,
) -> Result<(StatusCode, Json<CourseRequest>), AppError> {
    if body.course_name.trim().is_empty() {
        return Err(AppError::Validation("course_name cannot be empty".to_string()));
    }
    require_text("cv_text", &body.cv_text)?;

    let request = draft_course_request(
        &state.catalog,
        state.recommender.as_ref(),
        NewCourseRequest {
            faculty_id: body.faculty_id,
            course_name: &body.course_name,
            comment: body.comment,
            cv_text: &body.cv_text,
        },
    )?;

    info!(
        "Course request {} drafted: {} for faculty {} ({}%)",
        request.id, request.course_name, request.faculty_id, request.match_score
    );
    Ok((StatusCode::CREATED, Json(request)))
}

/// POST /api/v1/course-requests/review
///
/// HOD decision on a stored request. Storage is the caller's; the reviewed
/// request is returned for it to persist.
pub async fn handle_review_course_request(
    Json(body): Json<ReviewCourseRequest>,
) -> Result<Json<CourseRequest>, AppError> {
    let reviewed = body.request.review(body.decision)?;
    info!("Course request {} marked {:?}", reviewed.id, reviewed.status);
    Ok(Json(reviewed))
}
