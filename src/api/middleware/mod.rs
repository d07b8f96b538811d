//! API middleware components

pub mod cors;
pub mod logging;

pub use cors::{cors_middleware, CorsHeaders};
pub use logging::logging_middleware;
