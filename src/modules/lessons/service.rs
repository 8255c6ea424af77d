use sqlx::PgPool;
use tracing::instrument;
use uuid::Uuid;

use crate::modules::lessons::model::{CreateLessonRequest, Lesson, UpdateLessonRequest};
use crate::utils::errors::AppError;

const LESSON_COLUMNS: &str = "id, course_id, title, content, position, created_at, updated_at";

pub struct LessonService;

impl LessonService {
    #[instrument(skip(db, dto))]
    pub async fn create_lesson(
        db: &PgPool,
        course_id: Uuid,
        dto: CreateLessonRequest,
    ) -> Result<Lesson, AppError> {
        let query = format!(
            "INSERT INTO lessons (course_id, title, content, position)
             VALUES ($1, $2, $3, $4)
             RETURNING {LESSON_COLUMNS}"
        );
        let lesson = sqlx::query_as::<_, Lesson>(&query)
            .bind(course_id)
            .bind(&dto.title)
            .bind(&dto.content)
            .bind(dto.position)
            .fetch_one(db)
            .await
            .map_err(AppError::database)?;

        Ok(lesson)
    }

    #[instrument(skip(db))]
    pub async fn get_lessons_by_course(
        db: &PgPool,
        course_id: Uuid,
    ) -> Result<Vec<Lesson>, AppError> {
        let query = format!(
            "SELECT {LESSON_COLUMNS} FROM lessons WHERE course_id = $1 ORDER BY position, created_at"
        );
        let lessons = sqlx::query_as::<_, Lesson>(&query)
            .bind(course_id)
            .fetch_all(db)
            .await
            .map_err(AppError::database)?;

        Ok(lessons)
    }

    #[instrument(skip(db, dto))]
    pub async fn update_lesson(
        db: &PgPool,
        course_id: Uuid,
        lesson_id: Uuid,
        dto: UpdateLessonRequest,
    ) -> Result<Lesson, AppError> {
        let query = format!(
            "UPDATE lessons SET
                 title = COALESCE($1, title),
                 content = COALESCE($2, content),
                 position = COALESCE($3, position),
                 updated_at = now()
             WHERE id = $4 AND course_id = $5
             RETURNING {LESSON_COLUMNS}"
        );
        let lesson = sqlx::query_as::<_, Lesson>(&query)
            .bind(&dto.title)
            .bind(&dto.content)
            .bind(dto.position)
            .bind(lesson_id)
            .bind(course_id)
            .fetch_optional(db)
            .await
            .map_err(AppError::database)?
            .ok_or_else(|| AppError::not_found(anyhow::anyhow!("Lesson not found")))?;

        Ok(lesson)
    }

    #[instrument(skip(db))]
    pub async fn delete_lesson(db: &PgPool, course_id: Uuid, lesson_id: Uuid) -> Result<(), AppError> {
        let result = sqlx::query("DELETE FROM lessons WHERE id = $1 AND course_id = $2")
            .bind(lesson_id)
            .bind(course_id)
            .execute(db)
            .await
            .map_err(AppError::database)?;

        if result.rows_affected() == 0 {
            return Err(AppError::not_found(anyhow::anyhow!("Lesson not found")));
        }

        Ok(())
    }
}
