pub mod health;

use axum::{
    routing::{get, post},
    Router,
};

use crate::allocation::handlers as allocation;
use crate::scoring::handlers as scoring;
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        // Scoring API
        .route("/api/v1/courses", get(scoring::handle_list_courses))
        .route("/api/v1/cv/parse", post(scoring::handle_parse_cv))
        .route("/api/v1/cv/recommend", post(scoring::handle_recommend))
        .route("/api/v1/cv/assess", post(scoring::handle_assess_cv))
        .route("/api/v1/cv/review", post(scoring::handle_review_cv))
        // Allocation API
        .route(
            "/api/v1/course-requests",
            post(allocation::handle_create_course_request),
        )
        .route(
            "/api/v1/course-requests/review",
            post(allocation::handle_review_course_request),
        )
        .with_state(state)
}
