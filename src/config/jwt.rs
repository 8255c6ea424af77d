use std::env;

use tracing::warn;

/// Fallback signing secret used when `JWT_SECRET` is not set.
///
/// Kept for parity with local development setups, but insecure by
/// definition. [`JwtConfig::from_env`] logs a warning whenever it is used.
pub const INSECURE_DEFAULT_SECRET: &str = "courseloop-dev-secret-change-in-production";

#[derive(Clone, Debug)]
pub struct JwtConfig {
    pub secret: String,
    /// Token lifetime in seconds. Defaults to 7 days.
    pub token_expiry: i64,
}

impl JwtConfig {
    pub fn from_env() -> Self {
        let secret = match env::var("JWT_SECRET") {
            Ok(secret) if !secret.is_empty() => secret,
            _ => {
                warn!(
                    "JWT_SECRET is not set; falling back to the insecure default secret. \
                     Do not run this configuration in production."
                );
                INSECURE_DEFAULT_SECRET.to_string()
            }
        };

        Self {
            secret,
            token_expiry: env::var("JWT_EXPIRY")
                .ok()
                .and_then(|s| s.parse().ok())
                .unwrap_or(604800), // 7 days
        }
    }
}
