//! Request, response and error types shared by the HTTP handlers

pub mod error;
pub mod user;

pub use error::ApiError;
pub use user::{CreateUserRequest, UpdateUserRequest, UserResponse};
