//! Schema bootstrap for the order-management database.
//!
//! [`initialize`] is the startup routine: it guarantees the `orders` and
//! `users` tables exist and that at least one admin account is present.
//! Every statement is idempotent or guarded, so the routine is safe to run
//! on every process start.

use sqlx::PgPool;
use thiserror::Error;
use tracing::{error, info};

use ladle_core::UserRole;

use super::RepositoryError;
use super::users::UserRepository;
use crate::auth;

/// Username seeded on first run.
pub const DEFAULT_ADMIN_USERNAME: &str = "admin";

/// Password seeded on first run (stored only as a bcrypt hash).
pub const DEFAULT_ADMIN_PASSWORD: &str = "admin0617";

const CREATE_ORDERS_TABLE: &str = "\
CREATE TABLE IF NOT EXISTS orders (
    id SERIAL PRIMARY KEY,
    customer_name VARCHAR(255) NOT NULL,
    address TEXT NOT NULL,
    phone VARCHAR(50),
    delivery_date DATE NOT NULL,
    delivery_time VARCHAR(10) NOT NULL,
    payment_method VARCHAR(50) NOT NULL,
    items JSONB NOT NULL,
    total DECIMAL(10, 2) NOT NULL,
    status VARCHAR(50) DEFAULT 'pending',
    created_at TIMESTAMP DEFAULT CURRENT_TIMESTAMP
)";

const CREATE_USERS_TABLE: &str = "\
CREATE TABLE IF NOT EXISTS users (
    id SERIAL PRIMARY KEY,
    username VARCHAR(255) UNIQUE NOT NULL,
    password_hash VARCHAR(255) NOT NULL,
    role VARCHAR(50) NOT NULL CHECK (role IN ('admin', 'read_only', 'write')),
    created_at TIMESTAMP DEFAULT CURRENT_TIMESTAMP,
    updated_at TIMESTAMP DEFAULT CURRENT_TIMESTAMP
)";

/// Errors that can occur during schema initialization.
#[derive(Debug, Error)]
pub enum SchemaError {
    /// A DDL statement failed.
    #[error("database error: {0}")]
    Database(#[from] sqlx::Error),

    /// The seed user could not be counted or inserted.
    #[error(transparent)]
    Repository(#[from] RepositoryError),

    /// The default admin password could not be hashed.
    #[error("password hashing error: {0}")]
    Hash(#[from] bcrypt::BcryptError),
}

/// Ensure the schema exists and the default admin account is seeded.
///
/// Runs, strictly in order:
///
/// 1. Idempotent creation of the `orders` table.
/// 2. Idempotent creation of the `users` table (role CHECK constraint and
///    username uniqueness live in the DDL, not in application code).
/// 3. A count of existing `users` rows.
/// 4. Only when the count is zero: a bcrypt hash of the default password and
///    a parameterized insert of the `admin` account.
///
/// Any failure aborts the remaining steps and is returned unchanged after
/// being logged; there is no internal retry. The hosting process is expected
/// to fail fast and let its supervisor restart it.
///
/// Re-running after success changes nothing: table creation is a no-op and
/// the non-zero user count skips the seed.
///
/// # Errors
///
/// Returns [`SchemaError`] on the first statement that fails.
pub async fn initialize(pool: &PgPool) -> Result<(), SchemaError> {
    sqlx::query(CREATE_ORDERS_TABLE)
        .execute(pool)
        .await
        .inspect_err(|e| error!(error = %e, "failed to create orders table"))?;
    info!("orders table initialized");

    sqlx::query(CREATE_USERS_TABLE)
        .execute(pool)
        .await
        .inspect_err(|e| error!(error = %e, "failed to create users table"))?;
    info!("users table initialized");

    let users = UserRepository::new(pool);
    let user_count = users
        .count()
        .await
        .inspect_err(|e| error!(error = %e, "failed to count users"))?;

    if user_count == 0 {
        let password_hash = auth::hash_password(DEFAULT_ADMIN_PASSWORD)
            .inspect_err(|e| error!(error = %e, "failed to hash default admin password"))?;

        users
            .create(DEFAULT_ADMIN_USERNAME, &password_hash, UserRole::Admin)
            .await
            .inspect_err(|e| error!(error = %e, "failed to seed default admin user"))?;

        info!(
            username = DEFAULT_ADMIN_USERNAME,
            role = %UserRole::Admin,
            "default admin user created"
        );
    } else {
        info!(user_count, "users table already populated, skipping seed");
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_table_creation_is_idempotent_sql() {
        assert!(CREATE_ORDERS_TABLE.contains("CREATE TABLE IF NOT EXISTS orders"));
        assert!(CREATE_USERS_TABLE.contains("CREATE TABLE IF NOT EXISTS users"));
    }

    #[test]
    fn test_role_check_matches_enum_wire_forms() {
        // The CHECK constraint and UserRole must never drift apart.
        for role in UserRole::ALL {
            assert!(
                CREATE_USERS_TABLE.contains(&format!("'{}'", role.as_str())),
                "role {role} missing from CHECK constraint"
            );
        }
    }

    #[test]
    fn test_users_ddl_enforces_uniqueness_in_storage() {
        assert!(CREATE_USERS_TABLE.contains("username VARCHAR(255) UNIQUE NOT NULL"));
    }

    #[test]
    fn test_orders_ddl_required_columns() {
        for fragment in [
            "customer_name VARCHAR(255) NOT NULL",
            "address TEXT NOT NULL",
            "delivery_date DATE NOT NULL",
            "delivery_time VARCHAR(10) NOT NULL",
            "payment_method VARCHAR(50) NOT NULL",
            "items JSONB NOT NULL",
            "total DECIMAL(10, 2) NOT NULL",
            "status VARCHAR(50) DEFAULT 'pending'",
        ] {
            assert!(CREATE_ORDERS_TABLE.contains(fragment), "missing: {fragment}");
        }
    }
}
