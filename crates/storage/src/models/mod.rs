//! Domain types for persisted entities.

pub mod order;
pub mod user;

pub use order::Order;
pub use user::User;
