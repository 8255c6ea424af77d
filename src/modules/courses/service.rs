use sqlx::PgPool;
use tracing::instrument;
use uuid::Uuid;

use crate::modules::courses::model::{Course, CreateCourseRequest, UpdateCourseRequest};
use crate::utils::errors::AppError;

const COURSE_COLUMNS: &str =
    "id, title, description, instructor_id, published, created_at, updated_at";

pub struct CourseService;

impl CourseService {
    #[instrument(skip(db, dto))]
    pub async fn create_course(
        db: &PgPool,
        instructor_id: Uuid,
        dto: CreateCourseRequest,
    ) -> Result<Course, AppError> {
        let query = format!(
            "INSERT INTO courses (title, description, instructor_id, published)
             VALUES ($1, $2, $3, $4)
             RETURNING {COURSE_COLUMNS}"
        );
        let course = sqlx::query_as::<_, Course>(&query)
            .bind(&dto.title)
            .bind(&dto.description)
            .bind(instructor_id)
            .bind(dto.published)
            .fetch_one(db)
            .await
            .map_err(AppError::database)?;

        Ok(course)
    }

    /// Published courses, newest first.
    #[instrument(skip(db))]
    pub async fn get_published_courses(db: &PgPool) -> Result<Vec<Course>, AppError> {
        let query =
            format!("SELECT {COURSE_COLUMNS} FROM courses WHERE published ORDER BY created_at DESC");
        let courses = sqlx::query_as::<_, Course>(&query)
            .fetch_all(db)
            .await
            .map_err(AppError::database)?;

        Ok(courses)
    }

    /// All courses regardless of published state. Admin listing.
    #[instrument(skip(db))]
    pub async fn get_all_courses(db: &PgPool) -> Result<Vec<Course>, AppError> {
        let query = format!("SELECT {COURSE_COLUMNS} FROM courses ORDER BY created_at DESC");
        let courses = sqlx::query_as::<_, Course>(&query)
            .fetch_all(db)
            .await
            .map_err(AppError::database)?;

        Ok(courses)
    }

    /// Published courses plus the instructor's own drafts.
    #[instrument(skip(db))]
    pub async fn get_courses_for_instructor(
        db: &PgPool,
        instructor_id: Uuid,
    ) -> Result<Vec<Course>, AppError> {
        let query = format!(
            "SELECT {COURSE_COLUMNS} FROM courses
             WHERE published OR instructor_id = $1
             ORDER BY created_at DESC"
        );
        let courses = sqlx::query_as::<_, Course>(&query)
            .bind(instructor_id)
            .fetch_all(db)
            .await
            .map_err(AppError::database)?;

        Ok(courses)
    }

    #[instrument(skip(db))]
    pub async fn get_course(db: &PgPool, id: Uuid) -> Result<Course, AppError> {
        let query = format!("SELECT {COURSE_COLUMNS} FROM courses WHERE id = $1");
        let course = sqlx::query_as::<_, Course>(&query)
            .bind(id)
            .fetch_optional(db)
            .await
            .map_err(AppError::database)?
            .ok_or_else(|| AppError::not_found(anyhow::anyhow!("Course not found")))?;

        Ok(course)
    }

    #[instrument(skip(db, dto))]
    pub async fn update_course(
        db: &PgPool,
        id: Uuid,
        dto: UpdateCourseRequest,
    ) -> Result<Course, AppError> {
        let query = format!(
            "UPDATE courses SET
                 title = COALESCE($1, title),
                 description = COALESCE($2, description),
                 published = COALESCE($3, published),
                 updated_at = now()
             WHERE id = $4
             RETURNING {COURSE_COLUMNS}"
        );
        let course = sqlx::query_as::<_, Course>(&query)
            .bind(&dto.title)
            .bind(&dto.description)
            .bind(dto.published)
            .bind(id)
            .fetch_optional(db)
            .await
            .map_err(AppError::database)?
            .ok_or_else(|| AppError::not_found(anyhow::anyhow!("Course not found")))?;

        Ok(course)
    }

    #[instrument(skip(db))]
    pub async fn delete_course(db: &PgPool, id: Uuid) -> Result<(), AppError> {
        let result = sqlx::query("DELETE FROM courses WHERE id = $1")
            .bind(id)
            .execute(db)
            .await
            .map_err(AppError::database)?;

        if result.rows_affected() == 0 {
            return Err(AppError::not_found(anyhow::anyhow!("Course not found")));
        }

        Ok(())
    }
}
