//! Middleware for authentication and authorization.
//!
//! # Flow
//!
//! 1. Client sends `Authorization: Bearer <token>`
//! 2. [`auth::AuthUser`] verifies the JWT and attaches the decoded claims
//! 3. [`role`] guards check the claimed role against a route allow-list
//! 4. The handler runs only if every check passed
//!
//! [`auth::OptionalAuthUser`] runs the same verification but never rejects,
//! for routes that merely branch on whether an identity is present.

pub mod auth;
pub mod role;
