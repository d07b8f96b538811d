//! User CRUD endpoints

use axum::{
    extract::{Path, State},
    http::{header, StatusCode},
    response::{IntoResponse, Response},
    Json,
};
use tracing::debug;

use crate::api::state::AppState;
use crate::api::types::{ApiError, CreateUserRequest, UpdateUserRequest, UserResponse};
use crate::domain::user::{User, UserId};

/// Path of a single user resource, used for the `Location` header
pub fn user_location(id: UserId) -> String {
    format!("/users/{}", id)
}

/// GET /users
pub async fn list_users(
    State(state): State<AppState>,
) -> Result<Json<Vec<UserResponse>>, ApiError> {
    debug!("Listing all users");

    let users = state.user_store.get_all().await?;

    Ok(Json(users.iter().map(UserResponse::from).collect()))
}

/// GET /users/{id}
pub async fn get_user(
    State(state): State<AppState>,
    Path(id): Path<u64>,
) -> Result<Json<UserResponse>, ApiError> {
    debug!(id = %id, "Getting user");

    let user = state
        .user_store
        .find_by_id(UserId::new(id))
        .await?
        .ok_or_else(|| ApiError::not_found(format!("User '{}' not found", id)))?;

    Ok(Json(UserResponse::from(&user)))
}

/// POST /users
pub async fn create_user(
    State(state): State<AppState>,
    Json(request): Json<CreateUserRequest>,
) -> Result<Response, ApiError> {
    debug!(name = %request.name, "Creating user");

    if state.user_store.exists(&request.name).await? {
        return Err(ApiError::conflict(format!(
            "User name '{}' already exists",
            request.name
        )));
    }

    let user = state.user_store.create(request.into()).await?;

    Ok((
        StatusCode::CREATED,
        [(header::LOCATION, user_location(user.id()))],
        Json(UserResponse::from(&user)),
    )
        .into_response())
}

/// PUT /users/{id}
pub async fn update_user(
    State(state): State<AppState>,
    Path(id): Path<u64>,
    Json(request): Json<UpdateUserRequest>,
) -> Result<Json<UserResponse>, ApiError> {
    debug!(id = %id, name = %request.name, "Updating user");

    let id = UserId::new(id);

    if state.user_store.find_by_id(id).await?.is_none() {
        return Err(ApiError::not_found(format!("User '{}' not found", id)));
    }

    let user = state
        .user_store
        .update(User::new(id, request.name))
        .await?;

    Ok(Json(UserResponse::from(&user)))
}

/// DELETE /users/{id}
pub async fn delete_user(
    State(state): State<AppState>,
    Path(id): Path<u64>,
) -> Result<StatusCode, ApiError> {
    debug!(id = %id, "Deleting user");

    let id = UserId::new(id);
    let not_found = || ApiError::not_found(format!("User '{}' not found", id));

    if state.user_store.find_by_id(id).await?.is_none() {
        return Err(not_found());
    }

    // Lost a race with another delete
    if !state.user_store.delete(id).await? {
        return Err(not_found());
    }

    Ok(StatusCode::OK)
}
