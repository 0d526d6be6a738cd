use axum::{extract::State, Json};
use serde::Deserialize;
use serde_json::{json, Value};

use crate::api::errors::ApiError;
use crate::api::extract::{EntityId, JsonBody};
use crate::domain::repositories::favorite_repository::{
    Favorite, FavoriteRepository, NewFavorite,
};
use crate::infrastructure::repositories::SqliteFavoriteRepository;
use crate::state::AppState;

/// Request body for adding a favorite
///
/// Missing and `null` targets are equivalent.
#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct CreateFavoriteRequest {
    pub user_id: i64,
    pub people_id: Option<i64>,
    pub planets_id: Option<i64>,
    pub vehicle_id: Option<i64>,
}

/// List the favorites of a user
///
/// GET /user/:id/favorites
pub async fn list_user_favorites(
    State(state): State<AppState>,
    EntityId(user_id): EntityId,
) -> Result<Json<Vec<Favorite>>, ApiError> {
    let favorites = SqliteFavoriteRepository::new(state.pool())
        .find_by_user(user_id)
        .await?;

    if favorites.is_empty() {
        return Err(ApiError::not_found("not found"));
    }

    Ok(Json(favorites))
}

/// Add a favorite
///
/// POST /favorites
pub async fn create_favorite(
    State(state): State<AppState>,
    JsonBody(req): JsonBody<CreateFavoriteRequest>,
) -> Result<Json<Value>, ApiError> {
    let favorite = NewFavorite {
        user_id: req.user_id,
        people_id: req.people_id,
        planets_id: req.planets_id,
        vehicle_id: req.vehicle_id,
    };

    // Checked before storage so a bad user_id cannot mask it
    favorite.validate()?;

    let favorite = SqliteFavoriteRepository::new(state.pool())
        .create(favorite)
        .await?;

    tracing::info!(
        favorite_id = favorite.id,
        user_id = favorite.user_id,
        "Favorite created"
    );

    Ok(Json(json!({
        "msg": "favorite created successfully",
        "favorite_added": favorite,
    })))
}

/// Delete a favorite
///
/// DELETE /favorite/:id
pub async fn delete_favorite(
    State(state): State<AppState>,
    EntityId(id): EntityId,
) -> Result<Json<Value>, ApiError> {
    if !SqliteFavoriteRepository::new(state.pool()).delete(id).await? {
        return Err(ApiError::not_found(format!("favorite with id {} not found", id)));
    }

    Ok(Json(json!({ "msg": "favorite deleted" })))
}
