use bcrypt::{hash, verify};

use crate::utils::errors::AppError;

/// Hashes a password with a fresh per-call salt at the given bcrypt cost.
///
/// Called exactly once per password value change: on registration and in the
/// explicit update-password operation. Never re-hash a value read back from
/// storage.
pub fn hash_password(password: &str, cost: u32) -> Result<String, AppError> {
    hash(password, cost)
        .map_err(|e| AppError::internal(anyhow::anyhow!("Failed to hash password: {}", e)))
}

/// Verifies a password against a stored bcrypt hash.
///
/// A wrong password returns `Ok(false)`; only a malformed hash is an error.
pub fn verify_password(password: &str, hash: &str) -> Result<bool, AppError> {
    verify(password, hash)
        .map_err(|e| AppError::internal(anyhow::anyhow!("Failed to verify password: {}", e)))
}
