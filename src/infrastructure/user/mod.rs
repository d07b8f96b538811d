//! User infrastructure module
//!
//! This module provides the in-memory user store and the records it is
//! seeded with at startup.

mod repository;
mod seed;

pub use repository::InMemoryUserStore;
pub use seed::default_users;
