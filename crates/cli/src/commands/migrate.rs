//! Database bootstrap command.
//!
//! # Usage
//!
//! ```bash
//! ladle migrate
//! ```
//!
//! # Environment Variables
//!
//! - `LADLE_DATABASE_URL` - `PostgreSQL` connection string (or `DATABASE_URL`)
//!
//! Safe to run on every deploy: table creation is idempotent and the default
//! admin account is only seeded when the `users` table is empty.

use thiserror::Error;

use ladle_storage::db::schema::{self, SchemaError};
use ladle_storage::{ConfigError, StorageConfig, create_pool};

/// Errors that can occur during schema bootstrap.
#[derive(Debug, Error)]
pub enum MigrateError {
    /// Configuration is missing or invalid.
    #[error(transparent)]
    Config(#[from] ConfigError),

    /// The database pool could not be created.
    #[error("database connection error: {0}")]
    Database(#[from] sqlx::Error),

    /// A bootstrap statement failed.
    #[error(transparent)]
    Schema(#[from] SchemaError),
}

/// Initialize the database schema and seed data.
///
/// # Errors
///
/// Returns `MigrateError` if configuration is missing, the database is
/// unreachable, or any bootstrap statement fails.
pub async fn run() -> Result<(), MigrateError> {
    let config = StorageConfig::from_env()?;

    tracing::info!("Connecting to database...");
    let pool = create_pool(&config).await?;

    tracing::info!("Initializing schema...");
    schema::initialize(&pool).await?;

    tracing::info!("Schema initialization complete!");
    Ok(())
}
