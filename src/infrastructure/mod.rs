//! Infrastructure layer - Store implementations and process plumbing

pub mod logging;
pub mod user;
