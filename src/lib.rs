//! User Registry API
//!
//! A CRUD service for user records held in memory:
//! - `GET/POST /users`, `GET/PUT/DELETE /users/{id}`
//! - Store-enforced name uniqueness and monotonic ids
//! - CORS headers, request logging and health checks

pub mod api;
pub mod cli;
pub mod config;
pub mod domain;
pub mod infrastructure;

pub use config::AppConfig;

use std::sync::Arc;

use api::middleware::CorsHeaders;
use api::state::AppState;
use axum::Router;
use infrastructure::user::{default_users, InMemoryUserStore};
use tracing::info;

/// Create the application state, seeding the store when configured to
pub fn create_app_state(config: &AppConfig) -> anyhow::Result<AppState> {
    let store = if config.store.seed_defaults {
        let users = default_users();
        info!("Seeding user store with {} default users", users.len());
        InMemoryUserStore::with_users(users)?
    } else {
        InMemoryUserStore::new()
    };

    Ok(AppState::new(Arc::new(store)))
}

/// Build the complete application router from configuration
pub fn create_app(config: &AppConfig) -> anyhow::Result<Router> {
    let state = create_app_state(config)?;

    let cors = if config.cors.enabled {
        Some(CorsHeaders::from_config(&config.cors)?)
    } else {
        None
    };

    Ok(api::create_router(state, cors))
}
