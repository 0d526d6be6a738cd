use axum::{extract::State, Json};
use serde::Deserialize;
use serde_json::{json, Value};

use crate::api::errors::ApiError;
use crate::api::extract::{EntityId, JsonBody};
use crate::auth::password::hash_password;
use crate::domain::repositories::user_repository::{NewUser, User, UserChanges, UserRepository};
use crate::domain::validation::{require_text, require_text_if_present};
use crate::infrastructure::repositories::SqliteUserRepository;
use crate::state::AppState;

/// Request body for user creation
#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct CreateUserRequest {
    pub email: String,
    pub password: String,
    pub name: Option<String>,
    pub is_active: Option<bool>,
}

/// Fields a client may overwrite on an existing user
#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct UpdateUserRequest {
    pub email: Option<String>,
    pub password: Option<String>,
    pub name: Option<String>,
    pub is_active: Option<bool>,
}

fn hash(password: &str, state: &AppState) -> Result<String, ApiError> {
    hash_password(password, state.password_cost()).map_err(|e| {
        tracing::error!(error = %e, "Failed to hash password");
        ApiError::internal_server_error("internal server error")
    })
}

/// List all users
///
/// GET /user
pub async fn list_users(State(state): State<AppState>) -> Result<Json<Vec<User>>, ApiError> {
    let users = SqliteUserRepository::new(state.pool()).find_all().await?;

    if users.is_empty() {
        return Err(ApiError::not_found("not found"));
    }

    Ok(Json(users))
}

/// Get a user by ID
///
/// GET /user/:id
pub async fn get_user(
    State(state): State<AppState>,
    EntityId(id): EntityId,
) -> Result<Json<User>, ApiError> {
    let user = SqliteUserRepository::new(state.pool())
        .find_by_id(id)
        .await?
        .ok_or_else(|| ApiError::not_found(format!("user with id {} not found", id)))?;

    Ok(Json(user))
}

/// Create a new user
///
/// POST /user
pub async fn create_user(
    State(state): State<AppState>,
    JsonBody(req): JsonBody<CreateUserRequest>,
) -> Result<Json<Value>, ApiError> {
    require_text("email", &req.email)?;
    require_text("password", &req.password)?;

    let password_hash = hash(&req.password, &state)?;

    let user = SqliteUserRepository::new(state.pool())
        .create(NewUser {
            email: req.email,
            password_hash,
            name: req.name,
            is_active: req.is_active.unwrap_or(true),
        })
        .await?;

    tracing::info!(user_id = user.id, "User created");

    Ok(Json(json!({
        "msg": "user created successfully",
        "user_added": user,
    })))
}

/// Overwrite the supplied fields of a user
///
/// PUT /user/:id
pub async fn update_user(
    State(state): State<AppState>,
    EntityId(id): EntityId,
    JsonBody(req): JsonBody<UpdateUserRequest>,
) -> Result<Json<Value>, ApiError> {
    require_text_if_present("email", req.email.as_deref())?;
    require_text_if_present("password", req.password.as_deref())?;

    let password_hash = match req.password.as_deref() {
        Some(password) => Some(hash(password, &state)?),
        None => None,
    };

    let changes = UserChanges {
        email: req.email,
        password_hash,
        name: req.name,
        is_active: req.is_active,
    };

    let user = SqliteUserRepository::new(state.pool())
        .update(id, changes)
        .await?
        .ok_or_else(|| ApiError::not_found(format!("user with id {} not found", id)))?;

    Ok(Json(json!({
        "msg": "user edited successfully",
        "user_added": user,
    })))
}

/// Delete a user together with its favorites
///
/// DELETE /user/:id
pub async fn delete_user(
    State(state): State<AppState>,
    EntityId(id): EntityId,
) -> Result<Json<Value>, ApiError> {
    let deleted = SqliteUserRepository::new(state.pool()).delete(id).await?;

    if !deleted {
        return Err(ApiError::not_found(format!("user with id {} not found", id)));
    }

    tracing::info!(user_id = id, "User deleted");

    Ok(Json(json!({ "msg": "user deleted" })))
}
