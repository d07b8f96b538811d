//! User domain
//!
//! This module provides the user record, its creation payload, name
//! validation, and the store trait every user backend implements.

mod entity;
mod repository;
mod validation;

pub use entity::{NewUser, User, UserId};
pub use repository::UserStore;
pub use validation::{validate_user_name, MAX_USER_NAME_LENGTH};

#[cfg(test)]
pub use repository::MockUserStore;
