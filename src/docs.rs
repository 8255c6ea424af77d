use utoipa::openapi::security::{HttpAuthScheme, HttpBuilder, SecurityScheme};
use utoipa::{Modify, OpenApi};

use crate::modules::auth::controller::ErrorResponse;
use crate::modules::auth::model::{
    AuthResponse, LoginRequest, MessageResponse, RegisterRequest, UpdatePasswordRequest,
    UpdateProfileRequest,
};
use crate::modules::courses::model::{Course, CreateCourseRequest, UpdateCourseRequest};
use crate::modules::enrollments::model::{Enrollment, EnrollmentWithCourse};
use crate::modules::lessons::model::{CreateLessonRequest, Lesson, UpdateLessonRequest};
use crate::modules::users::model::{
    CourseSummary, EnrollmentInfo, User, UserRole, UserWithRelations,
};

#[derive(OpenApi)]
#[openapi(
    paths(
        crate::modules::auth::controller::register_user,
        crate::modules::auth::controller::login_user,
        crate::modules::auth::controller::get_me,
        crate::modules::auth::controller::update_profile,
        crate::modules::auth::controller::update_password,
        crate::modules::auth::controller::logout_user,
        crate::modules::users::controller::get_users,
        crate::modules::users::controller::get_user,
        crate::modules::courses::controller::get_courses,
        crate::modules::courses::controller::get_course,
        crate::modules::courses::controller::create_course,
        crate::modules::courses::controller::update_course,
        crate::modules::courses::controller::delete_course,
        crate::modules::lessons::controller::get_lessons,
        crate::modules::lessons::controller::create_lesson,
        crate::modules::lessons::controller::update_lesson,
        crate::modules::lessons::controller::delete_lesson,
        crate::modules::enrollments::controller::enroll_in_course,
        crate::modules::enrollments::controller::get_my_enrollments,
    ),
    components(
        schemas(
            User,
            UserRole,
            UserWithRelations,
            EnrollmentInfo,
            CourseSummary,
            RegisterRequest,
            LoginRequest,
            AuthResponse,
            UpdateProfileRequest,
            UpdatePasswordRequest,
            MessageResponse,
            ErrorResponse,
            Course,
            CreateCourseRequest,
            UpdateCourseRequest,
            Lesson,
            CreateLessonRequest,
            UpdateLessonRequest,
            Enrollment,
            EnrollmentWithCourse,
        )
    ),
    modifiers(&SecurityAddon),
    tags(
        (name = "Authentication", description = "Registration, login, and profile endpoints"),
        (name = "Users", description = "User administration endpoints"),
        (name = "Courses", description = "Course management endpoints"),
        (name = "Lessons", description = "Lesson management endpoints"),
        (name = "Enrollments", description = "Course enrollment endpoints")
    ),
    info(
        title = "Courseloop API",
        version = "0.1.0",
        description = "A REST API for a learning-management platform built with Rust, Axum, and PostgreSQL featuring JWT-based authentication and role-based access control.",
        license(name = "MIT")
    )
)]
pub struct ApiDoc;

struct SecurityAddon;

impl Modify for SecurityAddon {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        if let Some(components) = openapi.components.as_mut() {
            components.add_security_scheme(
                "bearer_auth",
                SecurityScheme::Http(
                    HttpBuilder::new()
                        .scheme(HttpAuthScheme::Bearer)
                        .bearer_format("JWT")
                        .build(),
                ),
            )
        }
    }
}
