use sqlx::PgPool;
use tracing::instrument;
use uuid::Uuid;

use crate::modules::users::model::{CourseSummary, EnrollmentInfo, User, UserWithRelations};
use crate::utils::errors::AppError;
use crate::utils::password::hash_password;

/// Column list for the projected user view. The password column is excluded
/// on purpose and must stay excluded.
pub(crate) const USER_COLUMNS: &str =
    "id, first_name, last_name, email, role, avatar, bio, is_verified, created_at, updated_at";

pub struct UserService;

impl UserService {
    #[instrument(skip(db))]
    pub async fn get_users(db: &PgPool) -> Result<Vec<User>, AppError> {
        let query = format!("SELECT {USER_COLUMNS} FROM users ORDER BY created_at DESC");
        let users = sqlx::query_as::<_, User>(&query)
            .fetch_all(db)
            .await
            .map_err(AppError::database)?;

        Ok(users)
    }

    #[instrument(skip(db))]
    pub async fn get_user(db: &PgPool, id: Uuid) -> Result<User, AppError> {
        let query = format!("SELECT {USER_COLUMNS} FROM users WHERE id = $1");
        let user = sqlx::query_as::<_, User>(&query)
            .bind(id)
            .fetch_optional(db)
            .await
            .map_err(AppError::database)?
            .ok_or_else(|| AppError::not_found(anyhow::anyhow!("User not found")))?;

        Ok(user)
    }

    /// Loads a user together with their enrollments and created courses.
    #[instrument(skip(db))]
    pub async fn get_user_with_relations(
        db: &PgPool,
        id: Uuid,
    ) -> Result<UserWithRelations, AppError> {
        let user = Self::get_user(db, id).await?;

        let enrollments = sqlx::query_as::<_, EnrollmentInfo>(
            r#"SELECT e.id, e.course_id, c.title AS course_title, e.enrolled_at
               FROM enrollments e
               JOIN courses c ON c.id = e.course_id
               WHERE e.user_id = $1
               ORDER BY e.enrolled_at DESC"#,
        )
        .bind(id)
        .fetch_all(db)
        .await
        .map_err(AppError::database)?;

        let created_courses = sqlx::query_as::<_, CourseSummary>(
            "SELECT id, title, published FROM courses WHERE instructor_id = $1 ORDER BY created_at DESC",
        )
        .bind(id)
        .fetch_all(db)
        .await
        .map_err(AppError::database)?;

        Ok(UserWithRelations {
            user,
            enrollments,
            created_courses,
        })
    }

    /// Fetches the stored password hash for a credential check.
    ///
    /// The only read path that touches the password column besides login.
    #[instrument(skip(db))]
    pub async fn get_password_hash(db: &PgPool, id: Uuid) -> Result<String, AppError> {
        let hash = sqlx::query_scalar::<_, String>("SELECT password FROM users WHERE id = $1")
            .bind(id)
            .fetch_optional(db)
            .await
            .map_err(AppError::database)?
            .ok_or_else(|| AppError::not_found(anyhow::anyhow!("User not found")))?;

        Ok(hash)
    }

    /// Explicit update-password operation.
    ///
    /// Hashing happens here as a named step, invoked only from the paths that
    /// actually change the password. There is no implicit lifecycle hook.
    #[instrument(skip(db, new_password))]
    pub async fn update_password(
        db: &PgPool,
        id: Uuid,
        new_password: &str,
        cost: u32,
    ) -> Result<(), AppError> {
        let hashed = hash_password(new_password, cost)?;

        let result = sqlx::query("UPDATE users SET password = $1, updated_at = now() WHERE id = $2")
            .bind(&hashed)
            .bind(id)
            .execute(db)
            .await
            .map_err(AppError::database)?;

        if result.rows_affected() == 0 {
            return Err(AppError::not_found(anyhow::anyhow!("User not found")));
        }

        Ok(())
    }
}
