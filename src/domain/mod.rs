//! Domain layer - Core business types and store contracts

pub mod error;
pub mod user;

pub use error::DomainError;
pub use user::{NewUser, User, UserId, UserStore};
