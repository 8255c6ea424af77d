use axum::http::StatusCode;
use axum::{Json, extract::Path, extract::State};
use tracing::instrument;
use uuid::Uuid;

use crate::middleware::auth::AuthUser;
use crate::modules::auth::controller::ErrorResponse;
use crate::modules::enrollments::model::{Enrollment, EnrollmentWithCourse};
use crate::modules::enrollments::service::EnrollmentService;
use crate::state::AppState;
use crate::utils::errors::AppError;

/// Enroll in a course
#[utoipa::path(
    post,
    path = "/api/courses/{course_id}/enroll",
    params(("course_id" = Uuid, Path, description = "Course id")),
    responses(
        (status = 201, description = "Enrolled", body = Enrollment),
        (status = 400, description = "Already enrolled", body = ErrorResponse),
        (status = 401, description = "Missing or invalid token", body = ErrorResponse),
        (status = 404, description = "Course not found or not published", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    ),
    security(("bearer_auth" = [])),
    tag = "Enrollments"
)]
#[instrument(skip(state, auth_user))]
pub async fn enroll_in_course(
    State(state): State<AppState>,
    auth_user: AuthUser,
    Path(course_id): Path<Uuid>,
) -> Result<(StatusCode, Json<Enrollment>), AppError> {
    let user_id = auth_user.user_id()?;
    let enrollment = EnrollmentService::enroll(&state.db, user_id, course_id).await?;
    Ok((StatusCode::CREATED, Json(enrollment)))
}

/// List the caller's enrollments
#[utoipa::path(
    get,
    path = "/api/enrollments",
    responses(
        (status = 200, description = "The caller's enrollments", body = Vec<EnrollmentWithCourse>),
        (status = 401, description = "Missing or invalid token", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    ),
    security(("bearer_auth" = [])),
    tag = "Enrollments"
)]
#[instrument(skip(state, auth_user))]
pub async fn get_my_enrollments(
    State(state): State<AppState>,
    auth_user: AuthUser,
) -> Result<Json<Vec<EnrollmentWithCourse>>, AppError> {
    let user_id = auth_user.user_id()?;
    let enrollments = EnrollmentService::get_enrollments_for_user(&state.db, user_id).await?;
    Ok(Json(enrollments))
}
