//! Configuration modules for the Courseloop API.
//!
//! Each submodule handles one aspect of configuration, loaded from
//! environment variables exactly once at process start:
//!
//! - [`cors`]: allowed CORS origins
//! - [`database`]: PostgreSQL connection pool initialization
//! - [`jwt`]: signing secret and token lifetime
//! - [`password`]: bcrypt work factor

pub mod cors;
pub mod database;
pub mod jwt;
pub mod password;
