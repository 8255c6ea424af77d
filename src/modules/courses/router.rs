use axum::{
    Router,
    routing::{get, post, put},
};

use crate::modules::courses::controller::{
    create_course, delete_course, get_course, get_courses, update_course,
};
use crate::state::AppState;

/// Public course reads. Nested lessons and enrollment routes are attached in
/// the main router.
pub fn init_courses_router() -> Router<AppState> {
    Router::new()
        .route("/", get(get_courses))
        .route("/{course_id}", get(get_course))
}

/// Write surface, gated to instructors/admins at the routing layer.
pub fn init_courses_write_router() -> Router<AppState> {
    Router::new()
        .route("/", post(create_course))
        .route("/{course_id}", put(update_course).delete(delete_course))
}
