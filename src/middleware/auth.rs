use std::convert::Infallible;

use axum::{
    extract::FromRequestParts,
    http::{header, request::Parts},
};

use crate::modules::auth::model::Claims;
use crate::modules::users::model::UserRole;
use crate::state::AppState;
use crate::utils::errors::AppError;
use crate::utils::jwt::verify_token;

/// Extractor that validates the bearer token and yields the decoded claims.
///
/// The identity is an explicit per-request value owned by the extractor, not
/// a mutation of shared request state. Extraction either attaches claims or
/// rejects with 401; it never reaches the credential store and a failure is
/// never surfaced as a 500.
#[derive(Debug, Clone)]
pub struct AuthUser(pub Claims);

impl AuthUser {
    pub fn user_id(&self) -> Result<uuid::Uuid, AppError> {
        uuid::Uuid::parse_str(&self.0.sub)
            .map_err(|_| AppError::unauthorized(anyhow::anyhow!("Invalid user id in token")))
    }

    pub fn role(&self) -> UserRole {
        self.0.role
    }

    pub fn email(&self) -> &str {
        &self.0.email
    }
}

fn claims_from_parts(parts: &Parts, state: &AppState) -> Result<Claims, AppError> {
    let auth_header = parts
        .headers
        .get(header::AUTHORIZATION)
        .and_then(|value| value.to_str().ok())
        .ok_or_else(|| AppError::unauthorized(anyhow::anyhow!("Not authorized")))?;

    // Case-sensitive prefix, exactly one space separator.
    let token = auth_header
        .strip_prefix("Bearer ")
        .ok_or_else(|| AppError::unauthorized(anyhow::anyhow!("Not authorized")))?;

    verify_token(token, &state.jwt_config)
}

impl FromRequestParts<AppState> for AuthUser {
    type Rejection = AppError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        claims_from_parts(parts, state).map(AuthUser)
    }
}

/// Optional-authentication extractor: runs the same extract/verify steps as
/// [`AuthUser`] but never rejects. On any failure the handler proceeds with
/// no identity attached and branches on `None` itself.
#[derive(Debug, Clone)]
pub struct OptionalAuthUser(pub Option<Claims>);

impl FromRequestParts<AppState> for OptionalAuthUser {
    type Rejection = Infallible;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        Ok(OptionalAuthUser(claims_from_parts(parts, state).ok()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_claims(role: UserRole) -> Claims {
        Claims {
            sub: uuid::Uuid::new_v4().to_string(),
            email: "test@example.com".to_string(),
            role,
            exp: 9999999999,
            iat: 1234567890,
        }
    }

    #[test]
    fn test_user_id_parses_sub() {
        let id = uuid::Uuid::new_v4();
        let mut claims = test_claims(UserRole::Student);
        claims.sub = id.to_string();
        let auth_user = AuthUser(claims);

        assert_eq!(auth_user.user_id().unwrap(), id);
    }

    #[test]
    fn test_user_id_rejects_garbage_sub() {
        let mut claims = test_claims(UserRole::Student);
        claims.sub = "not-a-uuid".to_string();
        let auth_user = AuthUser(claims);

        assert!(auth_user.user_id().is_err());
    }

    #[test]
    fn test_role_accessor() {
        let auth_user = AuthUser(test_claims(UserRole::Admin));
        assert_eq!(auth_user.role(), UserRole::Admin);
        assert_eq!(auth_user.email(), "test@example.com");
    }
}
