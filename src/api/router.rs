use std::sync::Arc;

use axum::{middleware, routing::get, Router};
use tower_http::trace::TraceLayer;

use super::health;
use super::middleware::{cors_middleware, logging_middleware, CorsHeaders};
use super::state::AppState;
use super::users;

/// Routes for the user resource
pub fn create_users_router() -> Router<AppState> {
    Router::new()
        .route("/users", get(users::list_users).post(users::create_user))
        .route(
            "/users/{id}",
            get(users::get_user)
                .put(users::update_user)
                .delete(users::delete_user),
        )
}

/// Create the full router with application state.
/// CORS headers are attached to every response when `cors` is set.
pub fn create_router(state: AppState, cors: Option<CorsHeaders>) -> Router {
    let router = Router::new()
        // Health endpoints
        .route("/health", get(health::health_check))
        .route("/ready", get(health::ready_check))
        .route("/live", get(health::live_check))
        // User CRUD
        .merge(create_users_router())
        .with_state(state)
        .layer(middleware::from_fn(logging_middleware));

    let router = match cors {
        Some(headers) => router.layer(middleware::from_fn_with_state(
            Arc::new(headers),
            cors_middleware,
        )),
        None => router,
    };

    router.layer(TraceLayer::new_for_http())
}
