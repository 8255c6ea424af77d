//! Utility modules for the Courseloop API.
//!
//! - [`errors`]: application error type and HTTP mapping
//! - [`jwt`]: token issuance and verification
//! - [`password`]: password hashing and verification
//! - [`serde`]: custom serde deserialization helpers

pub mod errors;
pub mod jwt;
pub mod password;
pub mod serde;
