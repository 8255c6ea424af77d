use axum::{
    Router,
    routing::{get, put},
};

use crate::modules::lessons::controller::{
    create_lesson, delete_lesson, get_lessons, update_lesson,
};
use crate::state::AppState;

/// Nested under `/api/courses/{course_id}/lessons`.
pub fn init_lessons_router() -> Router<AppState> {
    Router::new()
        .route("/", get(get_lessons).post(create_lesson))
        .route("/{lesson_id}", put(update_lesson).delete(delete_lesson))
}
