//! Ladle Core - Shared types library.
//!
//! This crate provides common types used across all Ladle components:
//! - `storage` - `PostgreSQL` schema bootstrap and repositories
//! - `cli` - Command-line tools for schema setup and user management
//!
//! # Architecture
//!
//! The core crate contains only types and traits - no I/O, no database access.
//! This keeps it lightweight and allows it to be used anywhere.
//!
//! # Modules
//!
//! - [`types`] - Newtype wrappers for type-safe IDs, plus role and status enums

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod types;

pub use types::*;
