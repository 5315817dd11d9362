//! Shared type definitions.

pub mod id;
pub mod role;
pub mod status;

pub use id::*;
pub use role::*;
pub use status::*;
