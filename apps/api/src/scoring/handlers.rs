//! Axum route handlers for the CV scoring API.

use axum::{extract::State, Json};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use tracing::info;

use crate::errors::AppError;
use crate::models::course_request::RequestStatus;
use crate::models::faculty::FacultyCvReview;
use crate::scoring::catalog::CourseDefinition;
use crate::scoring::extractor::{parse_cv, ParsedCv};
use crate::scoring::normalize::normalize_cv_text;
use crate::scoring::pipeline::{assess_cv, CvAssessment};
use crate::scoring::recommender::Recommendation;
use crate::state::AppState;

// ────────────────────────────────────────────────────────────────────────────
// Request / Response types
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Deserialize)]
pub struct CvTextRequest {
    pub text: String,
}

#[derive(Debug, Deserialize)]
pub struct AssessCvRequest {
    pub faculty_id: Uuid,
    pub text: String,
}

#[derive(Debug, Serialize)]
pub struct AssessCvResponse {
    pub review: FacultyCvReview,
    pub assessment: CvAssessment,
}

#[derive(Debug, Deserialize)]
pub struct ReviewCvRequest {
    pub review: FacultyCvReview,
    pub decision: RequestStatus,
}

#[derive(Debug, Serialize)]
pub struct CourseListResponse {
    pub courses: Vec<CourseDefinition>,
    pub match_threshold: u32,
}

pub fn require_text(field: &str, text: &str) -> Result<(), AppError> {
    if text.trim().is_empty() {
        return Err(AppError::Validation(format!("{field} cannot be empty")));
    }
    Ok(())
}

// ────────────────────────────────────────────────────────────────────────────
// Handlers
// ────────────────────────────────────────────────────────────────────────────

/// GET /api/v1/courses
pub async fn handle_list_courses(State(state): State<AppState>) -> Json<CourseListResponse> {
    Json(CourseListResponse {
        courses: state.catalog.courses.clone(),
        match_threshold: state.catalog.policy.match_threshold,
    })
}

/// POST /api/v1/cv/parse
///
/// Runs the skill extractor directly, without the validity or match gates.
pub async fn handle_parse_cv(
    State(state): State<AppState>,
    Json(request): Json<CvTextRequest>,
) -> Result<Json<ParsedCv>, AppError> {
    require_text("text", &request.text)?;
    let normalized = normalize_cv_text(&request.text);
    Ok(Json(parse_cv(&normalized, &state.catalog)))
}

/// POST /api/v1/cv/recommend
pub async fn handle_recommend(
    State(state): State<AppState>,
    Json(parsed): Json<ParsedCv>,
) -> Json<Vec<Recommendation>> {
    Json(state.recommender.recommend(&parsed))
}

/// POST /api/v1/cv/assess
///
/// Full upload policy: gates, extraction and recommendations. Rejections are a
/// normal 200 response with `cv_status = REJECTED`; the caller persists the review.
pub async fn handle_assess_cv(
    State(state): State<AppState>,
    Json(request): Json<AssessCvRequest>,
) -> Result<Json<AssessCvResponse>, AppError> {
    require_text("text", &request.text)?;

    let assessment = assess_cv(&request.text, &state.catalog, state.recommender.as_ref());
    let review = FacultyCvReview::from_assessment(request.faculty_id, &assessment);

    Ok(Json(AssessCvResponse { review, assessment }))
}

/// POST /api/v1/cv/review
///
/// HOD decision on a CV left PENDING by `/cv/assess`. The caller persists the
/// returned review.
pub async fn handle_review_cv(
    Json(request): Json<ReviewCvRequest>,
) -> Result<Json<FacultyCvReview>, AppError> {
    let reviewed = request.review.review(request.decision)?;
    info!(
        "CV of faculty {} marked {:?}",
        reviewed.faculty_id, reviewed.cv_status
    );
    Ok(Json(reviewed))
}
