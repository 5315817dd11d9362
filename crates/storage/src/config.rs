//! Storage configuration loaded from environment variables.
//!
//! # Environment Variables
//!
//! ## Required
//! - `LADLE_DATABASE_URL` - `PostgreSQL` connection string (falls back to
//!   the generic `DATABASE_URL` if unset)
//!
//! ## Optional
//! - `LADLE_DB_MAX_CONNECTIONS` - Pool size cap (default: 10)
//!
//! There is deliberately no hardcoded local connection string: a process
//! started without a database URL fails fast at configuration time instead
//! of silently connecting to an unintended local default.

use secrecy::SecretString;
use thiserror::Error;

const DEFAULT_MAX_CONNECTIONS: &str = "10";

/// Configuration errors that can occur during loading.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Missing environment variable: {0}")]
    MissingEnvVar(String),
    #[error("Invalid environment variable {0}: {1}")]
    InvalidEnvVar(String, String),
}

/// Storage configuration.
#[derive(Debug, Clone)]
pub struct StorageConfig {
    /// `PostgreSQL` database connection URL (contains password)
    pub database_url: SecretString,
    /// Maximum number of pooled connections
    pub max_connections: u32,
}

impl StorageConfig {
    /// Load configuration from environment variables.
    ///
    /// Calls `dotenvy::dotenv()` to load from `.env` file if present.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if no database URL is configured or an optional
    /// variable has an unparseable value.
    pub fn from_env() -> Result<Self, ConfigError> {
        // Load .env file if present (ignore errors if not found)
        let _ = dotenvy::dotenv();

        let database_url = get_database_url("LADLE_DATABASE_URL")?;
        let max_connections = get_env_or_default("LADLE_DB_MAX_CONNECTIONS", DEFAULT_MAX_CONNECTIONS)
            .parse::<u32>()
            .map_err(|e| {
                ConfigError::InvalidEnvVar("LADLE_DB_MAX_CONNECTIONS".to_string(), e.to_string())
            })?;

        Ok(Self {
            database_url,
            max_connections,
        })
    }
}

/// Get database URL with fallback to generic `DATABASE_URL` (set by most
/// managed-Postgres attach flows).
fn get_database_url(primary_key: &str) -> Result<SecretString, ConfigError> {
    if let Ok(value) = std::env::var(primary_key) {
        return Ok(SecretString::from(value));
    }
    if let Ok(value) = std::env::var("DATABASE_URL") {
        return Ok(SecretString::from(value));
    }
    Err(ConfigError::MissingEnvVar(primary_key.to_string()))
}

/// Get an environment variable with a default value.
fn get_env_or_default(key: &str, default: &str) -> String {
    std::env::var(key).unwrap_or_else(|_| default.to_string())
}

#[cfg(test)]
#[allow(clippy::unwrap_used, unsafe_code)]
mod tests {
    use super::*;

    // Each test uses its own variable names: the process environment is
    // shared across the test binary's threads.

    #[test]
    fn test_get_env_or_default_unset() {
        assert_eq!(get_env_or_default("LADLE_TEST_UNSET_VAR", "42"), "42");
    }

    #[test]
    fn test_get_env_or_default_set() {
        unsafe { std::env::set_var("LADLE_TEST_SET_VAR", "7") };
        assert_eq!(get_env_or_default("LADLE_TEST_SET_VAR", "42"), "7");
    }

    #[test]
    fn test_get_database_url_missing_fails_fast() {
        // Neither the primary key nor DATABASE_URL is set in the test
        // environment for this made-up primary name.
        if std::env::var("DATABASE_URL").is_ok() {
            return; // ambient DATABASE_URL would satisfy the fallback
        }
        let result = get_database_url("LADLE_TEST_MISSING_DB_URL");
        let err = result.unwrap_err();
        assert!(matches!(err, ConfigError::MissingEnvVar(_)));
    }

    #[test]
    fn test_get_database_url_primary_wins() {
        unsafe { std::env::set_var("LADLE_TEST_PRIMARY_DB_URL", "postgres://primary/db") };
        let url = get_database_url("LADLE_TEST_PRIMARY_DB_URL").unwrap();
        use secrecy::ExposeSecret;
        assert_eq!(url.expose_secret(), "postgres://primary/db");
    }

    #[test]
    fn test_invalid_max_connections_message() {
        let err = ConfigError::InvalidEnvVar(
            "LADLE_DB_MAX_CONNECTIONS".to_string(),
            "invalid digit found in string".to_string(),
        );
        assert!(err.to_string().contains("LADLE_DB_MAX_CONNECTIONS"));
    }
}
