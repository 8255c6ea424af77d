use axum::http::StatusCode;
use axum::{Json, extract::Path, extract::State};
use tracing::instrument;
use uuid::Uuid;

use crate::middleware::auth::{AuthUser, OptionalAuthUser};
use crate::modules::auth::controller::ErrorResponse;
use crate::modules::auth::model::{Claims, MessageResponse};
use crate::modules::courses::model::{Course, CreateCourseRequest, UpdateCourseRequest};
use crate::modules::courses::service::CourseService;
use crate::modules::users::model::UserRole;
use crate::state::AppState;
use crate::utils::errors::AppError;
use crate::validator::ValidatedJson;

/// Whether the caller may see this course at all.
///
/// Published courses are visible to everyone, drafts only to their owner or
/// an admin. Every read path that resolves a course, including nested ones
/// like lessons, goes through this check so a draft reads as nonexistent to
/// everyone else.
pub(crate) fn can_view_course(claims: Option<&Claims>, course: &Course) -> bool {
    if course.published {
        return true;
    }
    match claims {
        Some(c) if c.role == UserRole::Admin => true,
        Some(c) => Uuid::parse_str(&c.sub).is_ok_and(|id| id == course.instructor_id),
        None => false,
    }
}

/// Only the owning instructor or an admin may modify a course.
///
/// A draft the caller cannot even view rejects with the same 404 as the
/// read path; 403 would confirm the draft exists.
pub(crate) fn check_course_owner(auth_user: &AuthUser, course: &Course) -> Result<(), AppError> {
    let user_id = auth_user.user_id()?;
    if auth_user.role() == UserRole::Admin || course.instructor_id == user_id {
        return Ok(());
    }
    if !course.published {
        return Err(AppError::not_found(anyhow::anyhow!("Course not found")));
    }
    Err(AppError::forbidden(anyhow::anyhow!(
        "Access denied. You do not own this course"
    )))
}

/// List courses
///
/// Anonymous callers and students see published courses. Instructors also
/// see their own drafts; admins see everything. Authentication is optional
/// here: a missing or invalid token degrades to the anonymous view instead
/// of rejecting.
#[utoipa::path(
    get,
    path = "/api/courses",
    responses(
        (status = 200, description = "List of courses", body = Vec<Course>),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    ),
    tag = "Courses"
)]
#[instrument(skip(state, auth_user))]
pub async fn get_courses(
    State(state): State<AppState>,
    OptionalAuthUser(auth_user): OptionalAuthUser,
) -> Result<Json<Vec<Course>>, AppError> {
    let courses = match &auth_user {
        Some(claims) if claims.role == UserRole::Admin => {
            CourseService::get_all_courses(&state.db).await?
        }
        Some(claims) if claims.role == UserRole::Instructor => {
            let instructor_id = AuthUser(claims.clone()).user_id()?;
            CourseService::get_courses_for_instructor(&state.db, instructor_id).await?
        }
        _ => CourseService::get_published_courses(&state.db).await?,
    };

    Ok(Json(courses))
}

/// Get a course by id
#[utoipa::path(
    get,
    path = "/api/courses/{course_id}",
    params(("course_id" = Uuid, Path, description = "Course id")),
    responses(
        (status = 200, description = "Course found", body = Course),
        (status = 404, description = "Course not found or not published", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    ),
    tag = "Courses"
)]
#[instrument(skip(state, auth_user))]
pub async fn get_course(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    OptionalAuthUser(auth_user): OptionalAuthUser,
) -> Result<Json<Course>, AppError> {
    let course = CourseService::get_course(&state.db, id).await?;

    if !can_view_course(auth_user.as_ref(), &course) {
        return Err(AppError::not_found(anyhow::anyhow!("Course not found")));
    }

    Ok(Json(course))
}

/// Create a course (instructor or admin)
#[utoipa::path(
    post,
    path = "/api/courses",
    request_body = CreateCourseRequest,
    responses(
        (status = 201, description = "Course created", body = Course),
        (status = 400, description = "Missing fields", body = ErrorResponse),
        (status = 401, description = "Missing or invalid token", body = ErrorResponse),
        (status = 403, description = "Forbidden - instructor role required", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    ),
    security(("bearer_auth" = [])),
    tag = "Courses"
)]
#[instrument(skip(state, auth_user, dto))]
pub async fn create_course(
    State(state): State<AppState>,
    auth_user: AuthUser,
    ValidatedJson(dto): ValidatedJson<CreateCourseRequest>,
) -> Result<(StatusCode, Json<Course>), AppError> {
    let instructor_id = auth_user.user_id()?;
    let course = CourseService::create_course(&state.db, instructor_id, dto).await?;
    Ok((StatusCode::CREATED, Json(course)))
}

/// Update a course (owner or admin)
#[utoipa::path(
    put,
    path = "/api/courses/{course_id}",
    params(("course_id" = Uuid, Path, description = "Course id")),
    request_body = UpdateCourseRequest,
    responses(
        (status = 200, description = "Course updated", body = Course),
        (status = 401, description = "Missing or invalid token", body = ErrorResponse),
        (status = 403, description = "Forbidden - not the course owner", body = ErrorResponse),
        (status = 404, description = "Course not found", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    ),
    security(("bearer_auth" = [])),
    tag = "Courses"
)]
#[instrument(skip(state, auth_user, dto))]
pub async fn update_course(
    State(state): State<AppState>,
    auth_user: AuthUser,
    Path(id): Path<Uuid>,
    ValidatedJson(dto): ValidatedJson<UpdateCourseRequest>,
) -> Result<Json<Course>, AppError> {
    let course = CourseService::get_course(&state.db, id).await?;
    check_course_owner(&auth_user, &course)?;

    let course = CourseService::update_course(&state.db, id, dto).await?;
    Ok(Json(course))
}

/// Delete a course (owner or admin)
#[utoipa::path(
    delete,
    path = "/api/courses/{course_id}",
    params(("course_id" = Uuid, Path, description = "Course id")),
    responses(
        (status = 200, description = "Course deleted", body = MessageResponse),
        (status = 401, description = "Missing or invalid token", body = ErrorResponse),
        (status = 403, description = "Forbidden - not the course owner", body = ErrorResponse),
        (status = 404, description = "Course not found", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    ),
    security(("bearer_auth" = [])),
    tag = "Courses"
)]
#[instrument(skip(state, auth_user))]
pub async fn delete_course(
    State(state): State<AppState>,
    auth_user: AuthUser,
    Path(id): Path<Uuid>,
) -> Result<Json<MessageResponse>, AppError> {
    let course = CourseService::get_course(&state.db, id).await?;
    check_course_owner(&auth_user, &course)?;

    CourseService::delete_course(&state.db, id).await?;
    Ok(Json(MessageResponse {
        message: "Course deleted".to_string(),
    }))
}
