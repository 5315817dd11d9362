//! Database operations for the order-management `PostgreSQL` database.
//!
//! ## Tables
//!
//! - `orders` - Customer orders with JSONB line items
//! - `users` - Application accounts (bcrypt password hashes, role-gated)
//!
//! # Bootstrap
//!
//! Both tables are created idempotently at process startup via
//! [`schema::initialize`], which also seeds the default admin account on
//! first run:
//! ```bash
//! cargo run -p ladle-cli -- migrate
//! ```

pub mod orders;
pub mod schema;
pub mod users;

use std::time::Duration;

use secrecy::ExposeSecret;
use sqlx::PgPool;
use sqlx::postgres::PgPoolOptions;
use thiserror::Error;

use crate::config::StorageConfig;

pub use orders::OrderRepository;
pub use users::UserRepository;

/// Errors that can occur during repository operations.
#[derive(Debug, Error)]
pub enum RepositoryError {
    /// Database error from sqlx.
    #[error("database error: {0}")]
    Database(#[from] sqlx::Error),

    /// Data in the database is corrupted or invalid.
    #[error("data corruption: {0}")]
    DataCorruption(String),

    /// Requested entity was not found.
    #[error("not found")]
    NotFound,

    /// Constraint violation (e.g., unique username).
    #[error("constraint violation: {0}")]
    Conflict(String),
}

/// Create a `PostgreSQL` connection pool with sensible defaults.
///
/// The pool is the single shared handle for the whole application: construct
/// it once at startup and pass it to every storage-touching component.
///
/// # Errors
///
/// Returns `sqlx::Error` if the connection cannot be established.
pub async fn create_pool(config: &StorageConfig) -> Result<PgPool, sqlx::Error> {
    PgPoolOptions::new()
        .max_connections(config.max_connections)
        .min_connections(2)
        .acquire_timeout(Duration::from_secs(10))
        .connect(config.database_url.expose_secret())
        .await
}
