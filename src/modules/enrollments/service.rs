use sqlx::PgPool;
use tracing::instrument;
use uuid::Uuid;

use crate::modules::courses::service::CourseService;
use crate::modules::enrollments::model::{Enrollment, EnrollmentWithCourse};
use crate::utils::errors::AppError;

pub struct EnrollmentService;

impl EnrollmentService {
    /// Enrolls a user in a published course.
    ///
    /// The (user, course) pair is unique; a repeat enrollment is a 400.
    #[instrument(skip(db))]
    pub async fn enroll(db: &PgPool, user_id: Uuid, course_id: Uuid) -> Result<Enrollment, AppError> {
        let course = CourseService::get_course(db, course_id).await?;
        if !course.published {
            return Err(AppError::not_found(anyhow::anyhow!("Course not found")));
        }

        let enrollment = sqlx::query_as::<_, Enrollment>(
            "INSERT INTO enrollments (user_id, course_id)
             VALUES ($1, $2)
             RETURNING id, user_id, course_id, enrolled_at",
        )
        .bind(user_id)
        .bind(course_id)
        .fetch_one(db)
        .await
        .map_err(|e| {
            if let sqlx::Error::Database(db_err) = &e
                && db_err.is_unique_violation()
            {
                return AppError::bad_request(anyhow::anyhow!(
                    "Already enrolled in this course"
                ));
            }
            AppError::database(e)
        })?;

        Ok(enrollment)
    }

    #[instrument(skip(db))]
    pub async fn get_enrollments_for_user(
        db: &PgPool,
        user_id: Uuid,
    ) -> Result<Vec<EnrollmentWithCourse>, AppError> {
        let enrollments = sqlx::query_as::<_, EnrollmentWithCourse>(
            r#"SELECT e.id, e.course_id, c.title AS course_title, e.enrolled_at
               FROM enrollments e
               JOIN courses c ON c.id = e.course_id
               WHERE e.user_id = $1
               ORDER BY e.enrolled_at DESC"#,
        )
        .bind(user_id)
        .fetch_all(db)
        .await
        .map_err(AppError::database)?;

        Ok(enrollments)
    }
}
