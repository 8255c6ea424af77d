//! Command-line utilities.
//!
//! Admin accounts cannot be created through the API; the only way to mint
//! one is the `create-admin` command handled in `main`.

use sqlx::PgPool;
use uuid::Uuid;

use crate::config::password::PasswordConfig;
use crate::utils::errors::AppError;
use crate::utils::password::hash_password;

/// Creates an admin user directly in the store.
pub async fn create_admin(
    pool: &PgPool,
    first_name: &str,
    last_name: &str,
    email: &str,
    password: &str,
) -> Result<Uuid, AppError> {
    let cost = PasswordConfig::from_env().cost;
    let hashed = hash_password(password, cost)?;

    let id = sqlx::query_scalar::<_, Uuid>(
        "INSERT INTO users (first_name, last_name, email, password, role)
         VALUES ($1, $2, $3, $4, 'admin')
         RETURNING id",
    )
    .bind(first_name)
    .bind(last_name)
    .bind(email.to_lowercase())
    .bind(&hashed)
    .fetch_one(pool)
    .await
    .map_err(AppError::database)?;

    Ok(id)
}
