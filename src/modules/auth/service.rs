use sqlx::PgPool;
use tracing::instrument;
use uuid::Uuid;

use crate::config::jwt::JwtConfig;
use crate::config::password::PasswordConfig;
use crate::modules::auth::model::{LoginRequest, RegisterRequest, UpdateProfileRequest};
use crate::modules::users::model::{User, UserRole};
use crate::modules::users::service::USER_COLUMNS;
use crate::utils::errors::AppError;
use crate::utils::jwt::create_access_token;
use crate::utils::password::{hash_password, verify_password};

pub struct AuthService;

impl AuthService {
    /// Creates a credential record and issues a token for it.
    ///
    /// Duplicate email is reported as a 400. Note this leaks account
    /// existence while login deliberately does not; the inconsistency is
    /// inherited behavior, kept as-is (see DESIGN.md).
    #[instrument(skip(db, dto, jwt_config, password_config))]
    pub async fn register(
        db: &PgPool,
        dto: RegisterRequest,
        jwt_config: &JwtConfig,
        password_config: &PasswordConfig,
    ) -> Result<(User, String), AppError> {
        let email = dto.email.to_lowercase();

        let existing = sqlx::query_scalar::<_, Uuid>("SELECT id FROM users WHERE email = $1")
            .bind(&email)
            .fetch_optional(db)
            .await
            .map_err(AppError::database)?;

        if existing.is_some() {
            return Err(AppError::bad_request(anyhow::anyhow!(
                "Email already exists"
            )));
        }

        // Hashing happens exactly once, here, as an explicit step.
        let hashed = hash_password(&dto.password, password_config.cost)?;

        let query = format!(
            "INSERT INTO users (first_name, last_name, email, password)
             VALUES ($1, $2, $3, $4)
             RETURNING {USER_COLUMNS}"
        );
        let user = sqlx::query_as::<_, User>(&query)
            .bind(&dto.first_name)
            .bind(&dto.last_name)
            .bind(&email)
            .bind(&hashed)
            .fetch_one(db)
            .await
            .map_err(|e| {
                if let sqlx::Error::Database(db_err) = &e
                    && db_err.is_unique_violation()
                {
                    return AppError::bad_request(anyhow::anyhow!("Email already exists"));
                }
                AppError::database(e)
            })?;

        let token = create_access_token(user.id, &user.email, user.role, jwt_config)?;

        Ok((user, token))
    }

    /// Verifies credentials and issues a token.
    ///
    /// Unknown email and wrong password produce the same 401 so the endpoint
    /// cannot be used to enumerate accounts.
    #[instrument(skip(db, dto, jwt_config))]
    pub async fn login(
        db: &PgPool,
        dto: LoginRequest,
        jwt_config: &JwtConfig,
    ) -> Result<(User, String), AppError> {
        #[derive(sqlx::FromRow)]
        struct UserWithPassword {
            id: Uuid,
            first_name: String,
            last_name: String,
            email: String,
            password: String,
            role: UserRole,
            avatar: Option<String>,
            bio: Option<String>,
            is_verified: bool,
            created_at: chrono::DateTime<chrono::Utc>,
            updated_at: chrono::DateTime<chrono::Utc>,
        }

        let row = sqlx::query_as::<_, UserWithPassword>(
            "SELECT id, first_name, last_name, email, password, role, avatar, bio, is_verified,
                    created_at, updated_at
             FROM users WHERE email = $1",
        )
        .bind(dto.email.to_lowercase())
        .fetch_optional(db)
        .await
        .map_err(AppError::database)?
        .ok_or_else(|| AppError::unauthorized(anyhow::anyhow!("Invalid credentials")))?;

        let is_valid = verify_password(&dto.password, &row.password)?;
        if !is_valid {
            return Err(AppError::unauthorized(anyhow::anyhow!(
                "Invalid credentials"
            )));
        }

        let token = create_access_token(row.id, &row.email, row.role, jwt_config)?;

        let user = User {
            id: row.id,
            first_name: row.first_name,
            last_name: row.last_name,
            email: row.email,
            role: row.role,
            avatar: row.avatar,
            bio: row.bio,
            is_verified: row.is_verified,
            created_at: row.created_at,
            updated_at: row.updated_at,
        };

        Ok((user, token))
    }

    /// Applies a partial profile update and returns the projected view.
    ///
    /// Absent fields are untouched. `bio` and `avatar` can be cleared with an
    /// explicit null. The RETURNING clause is the projection, so the password
    /// hash cannot ride along on this response path.
    #[instrument(skip(db, dto))]
    pub async fn update_profile(
        db: &PgPool,
        user_id: Uuid,
        dto: UpdateProfileRequest,
    ) -> Result<User, AppError> {
        let query = format!(
            "UPDATE users SET
                 first_name = COALESCE($1, first_name),
                 last_name = COALESCE($2, last_name),
                 bio = CASE WHEN $3 THEN $4 ELSE bio END,
                 avatar = CASE WHEN $5 THEN $6 ELSE avatar END,
                 updated_at = now()
             WHERE id = $7
             RETURNING {USER_COLUMNS}"
        );

        let user = sqlx::query_as::<_, User>(&query)
            .bind(&dto.first_name)
            .bind(&dto.last_name)
            .bind(dto.bio.is_some())
            .bind(dto.bio.flatten())
            .bind(dto.avatar.is_some())
            .bind(dto.avatar.flatten())
            .bind(user_id)
            .fetch_optional(db)
            .await
            .map_err(AppError::database)?
            .ok_or_else(|| AppError::not_found(anyhow::anyhow!("User not found")))?;

        Ok(user)
    }
}
