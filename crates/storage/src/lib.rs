//! Ladle Storage - `PostgreSQL` schema bootstrap and repositories.
//!
//! This crate owns everything that touches the order-management database:
//!
//! - [`config`] - Connection configuration loaded from environment variables
//! - [`db`] - Pool construction, schema bootstrap, and repositories
//! - [`models`] - Domain types for persisted entities
//! - [`auth`] - Password hashing and verification (bcrypt)
//!
//! # Startup contract
//!
//! The hosting process constructs the pool once, runs [`db::schema::initialize`]
//! to completion, and only then issues order/user queries. The pool is an
//! explicitly passed handle; there is no process-global connection state.
//!
//! ```rust,ignore
//! let config = ladle_storage::StorageConfig::from_env()?;
//! let pool = ladle_storage::db::create_pool(&config).await?;
//! ladle_storage::db::schema::initialize(&pool).await?;
//! ```

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod auth;
pub mod config;
pub mod db;
pub mod models;

pub use config::{ConfigError, StorageConfig};
pub use db::{RepositoryError, create_pool};
