use sqlx::PgPool;

use crate::config::cors::CorsConfig;
use crate::config::database::init_db_pool;
use crate::config::jwt::JwtConfig;
use crate::config::password::PasswordConfig;

/// Shared application state: the connection pool plus immutable
/// configuration loaded once at startup. Requests share nothing else.
#[derive(Clone, Debug)]
pub struct AppState {
    pub db: PgPool,
    pub jwt_config: JwtConfig,
    pub password_config: PasswordConfig,
    pub cors_config: CorsConfig,
}

pub async fn init_app_state() -> AppState {
    AppState {
        db: init_db_pool().await,
        jwt_config: JwtConfig::from_env(),
        password_config: PasswordConfig::from_env(),
        cors_config: CorsConfig::from_env(),
    }
}
