//! User management commands.
//!
//! # Usage
//!
//! ```bash
//! # Create a new user
//! ladle admin create -u chef -p s3cret -r write
//! ```
//!
//! # Environment Variables
//!
//! - `LADLE_DATABASE_URL` - `PostgreSQL` connection string (or `DATABASE_URL`)

use thiserror::Error;

use ladle_core::UserRole;
use ladle_storage::db::UserRepository;
use ladle_storage::{ConfigError, RepositoryError, StorageConfig, auth, create_pool};

/// Errors that can occur during user management.
#[derive(Debug, Error)]
pub enum AdminError {
    /// Configuration is missing or invalid.
    #[error(transparent)]
    Config(#[from] ConfigError),

    /// Database connection error.
    #[error("database connection error: {0}")]
    Database(#[from] sqlx::Error),

    /// Repository-level failure.
    #[error(transparent)]
    Repository(#[from] RepositoryError),

    /// The password could not be hashed.
    #[error("password hashing error: {0}")]
    Hash(#[from] bcrypt::BcryptError),

    /// Invalid role.
    #[error("Invalid role: {0}. Valid roles: admin, read_only, write")]
    InvalidRole(String),

    /// User already exists.
    #[error("User already exists with username: {0}")]
    UserExists(String),
}

/// Create a new user.
///
/// The role is validated before anything touches the database, and the
/// password is bcrypt-hashed before storage.
///
/// # Errors
///
/// Returns `AdminError` if the role is invalid, the username is taken, or a
/// database operation fails.
pub async fn create_user(username: &str, password: &str, role: &str) -> Result<(), AdminError> {
    // Parse and validate role before connecting
    let role: UserRole = role
        .parse()
        .map_err(|_| AdminError::InvalidRole(role.to_owned()))?;

    let config = StorageConfig::from_env()?;

    tracing::info!("Connecting to database...");
    let pool = create_pool(&config).await?;

    tracing::info!("Creating user: {} ({})", username, role);

    let users = UserRepository::new(&pool);

    // Check if user already exists for a friendlier error than the
    // uniqueness violation.
    if users.get_by_username(username).await?.is_some() {
        return Err(AdminError::UserExists(username.to_owned()));
    }

    let password_hash = auth::hash_password(password)?;

    let user = match users.create(username, &password_hash, role).await {
        Ok(user) => user,
        Err(RepositoryError::Conflict(_)) => {
            return Err(AdminError::UserExists(username.to_owned()));
        }
        Err(e) => return Err(e.into()),
    };

    tracing::info!(
        "User created successfully! ID: {}, Username: {}, Role: {}",
        user.id,
        user.username,
        user.role
    );

    Ok(())
}
