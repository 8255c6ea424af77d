use axum::{
    Router,
    routing::{get, post},
};

use crate::modules::enrollments::controller::{enroll_in_course, get_my_enrollments};
use crate::state::AppState;

/// Nested under `/api/enrollments`.
pub fn init_enrollments_router() -> Router<AppState> {
    Router::new().route("/", get(get_my_enrollments))
}

/// Merged into the `/api/courses` subtree.
pub fn init_course_enrollments_router() -> Router<AppState> {
    Router::new().route("/{course_id}/enroll", post(enroll_in_course))
}
