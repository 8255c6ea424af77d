use axum::http::StatusCode;
use axum::{Json, extract::Path, extract::State};
use tracing::instrument;
use uuid::Uuid;

use crate::middleware::auth::AuthUser;
use crate::modules::auth::controller::ErrorResponse;
use crate::modules::auth::model::MessageResponse;
use crate::modules::courses::controller::{can_view_course, check_course_owner};
use crate::modules::courses::service::CourseService;
use crate::modules::lessons::model::{CreateLessonRequest, Lesson, UpdateLessonRequest};
use crate::modules::lessons::service::LessonService;
use crate::state::AppState;
use crate::utils::errors::AppError;
use crate::validator::ValidatedJson;

/// Lesson writes go through the parent course's owner check, including its
/// draft-reads-as-404 behavior.
async fn check_parent_course_owner(
    state: &AppState,
    auth_user: &AuthUser,
    course_id: Uuid,
) -> Result<(), AppError> {
    let course = CourseService::get_course(&state.db, course_id).await?;
    check_course_owner(auth_user, &course)
}

/// List lessons of a course
#[utoipa::path(
    get,
    path = "/api/courses/{course_id}/lessons",
    params(("course_id" = Uuid, Path, description = "Course id")),
    responses(
        (status = 200, description = "Lessons in course order", body = Vec<Lesson>),
        (status = 401, description = "Missing or invalid token", body = ErrorResponse),
        (status = 404, description = "Course not found", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    ),
    security(("bearer_auth" = [])),
    tag = "Lessons"
)]
#[instrument(skip(state, auth_user))]
pub async fn get_lessons(
    State(state): State<AppState>,
    auth_user: AuthUser,
    Path(course_id): Path<Uuid>,
) -> Result<Json<Vec<Lesson>>, AppError> {
    // 404 for a missing course, not an empty list. The parent course's
    // visibility rules carry over: a draft's lessons are hidden from
    // everyone but the owner or an admin, with the same 404.
    let course = CourseService::get_course(&state.db, course_id).await?;
    if !can_view_course(Some(&auth_user.0), &course) {
        return Err(AppError::not_found(anyhow::anyhow!("Course not found")));
    }

    let lessons = LessonService::get_lessons_by_course(&state.db, course_id).await?;
    Ok(Json(lessons))
}

/// Add a lesson to a course (owner or admin)
#[utoipa::path(
    post,
    path = "/api/courses/{course_id}/lessons",
    params(("course_id" = Uuid, Path, description = "Course id")),
    request_body = CreateLessonRequest,
    responses(
        (status = 201, description = "Lesson created", body = Lesson),
        (status = 400, description = "Missing fields", body = ErrorResponse),
        (status = 401, description = "Missing or invalid token", body = ErrorResponse),
        (status = 403, description = "Forbidden - not the course owner", body = ErrorResponse),
        (status = 404, description = "Course not found", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    ),
    security(("bearer_auth" = [])),
    tag = "Lessons"
)]
#[instrument(skip(state, auth_user, dto))]
pub async fn create_lesson(
    State(state): State<AppState>,
    auth_user: AuthUser,
    Path(course_id): Path<Uuid>,
    ValidatedJson(dto): ValidatedJson<CreateLessonRequest>,
) -> Result<(StatusCode, Json<Lesson>), AppError> {
    check_parent_course_owner(&state, &auth_user, course_id).await?;

    let lesson = LessonService::create_lesson(&state.db, course_id, dto).await?;
    Ok((StatusCode::CREATED, Json(lesson)))
}

/// Update a lesson (owner or admin)
#[utoipa::path(
    put,
    path = "/api/courses/{course_id}/lessons/{lesson_id}",
    params(
        ("course_id" = Uuid, Path, description = "Course id"),
        ("lesson_id" = Uuid, Path, description = "Lesson id")
    ),
    request_body = UpdateLessonRequest,
    responses(
        (status = 200, description = "Lesson updated", body = Lesson),
        (status = 401, description = "Missing or invalid token", body = ErrorResponse),
        (status = 403, description = "Forbidden - not the course owner", body = ErrorResponse),
        (status = 404, description = "Course or lesson not found", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    ),
    security(("bearer_auth" = [])),
    tag = "Lessons"
)]
#[instrument(skip(state, auth_user, dto))]
pub async fn update_lesson(
    State(state): State<AppState>,
    auth_user: AuthUser,
    Path((course_id, lesson_id)): Path<(Uuid, Uuid)>,
    ValidatedJson(dto): ValidatedJson<UpdateLessonRequest>,
) -> Result<Json<Lesson>, AppError> {
    check_parent_course_owner(&state, &auth_user, course_id).await?;

    let lesson = LessonService::update_lesson(&state.db, course_id, lesson_id, dto).await?;
    Ok(Json(lesson))
}

/// Delete a lesson (owner or admin)
#[utoipa::path(
    delete,
    path = "/api/courses/{course_id}/lessons/{lesson_id}",
    params(
        ("course_id" = Uuid, Path, description = "Course id"),
        ("lesson_id" = Uuid, Path, description = "Lesson id")
    ),
    responses(
        (status = 200, description = "Lesson deleted", body = MessageResponse),
        (status = 401, description = "Missing or invalid token", body = ErrorResponse),
        (status = 403, description = "Forbidden - not the course owner", body = ErrorResponse),
        (status = 404, description = "Course or lesson not found", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    ),
    security(("bearer_auth" = [])),
    tag = "Lessons"
)]
#[instrument(skip(state, auth_user))]
pub async fn delete_lesson(
    State(state): State<AppState>,
    auth_user: AuthUser,
    Path((course_id, lesson_id)): Path<(Uuid, Uuid)>,
) -> Result<Json<MessageResponse>, AppError> {
    check_parent_course_owner(&state, &auth_user, course_id).await?;

    LessonService::delete_lesson(&state.db, course_id, lesson_id).await?;
    Ok(Json(MessageResponse {
        message: "Lesson deleted".to_string(),
    }))
}
