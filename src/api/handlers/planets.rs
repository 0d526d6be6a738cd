use axum::{extract::State, Json};
use serde::Deserialize;
use serde_json::{json, Value};

use crate::api::errors::ApiError;
use crate::api::extract::{EntityId, JsonBody};
use crate::domain::repositories::planet_repository::{
    NewPlanet, Planet, PlanetChanges, PlanetRepository,
};
use crate::domain::validation::{require_text, require_text_if_present};
use crate::infrastructure::repositories::SqlitePlanetRepository;
use crate::state::AppState;

/// Request body for creating a planet
#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct CreatePlanetRequest {
    pub name: String,
    pub diameter: Option<String>,
    pub gravity: String,
    pub climate: String,
    pub poblation: i64,
    pub rotation_period: i64,
}

/// Fields a client may overwrite on an existing planet
#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct UpdatePlanetRequest {
    pub name: Option<String>,
    pub diameter: Option<String>,
    pub gravity: Option<String>,
    pub climate: Option<String>,
    pub poblation: Option<i64>,
    pub rotation_period: Option<i64>,
}

/// List all planets
///
/// GET /planets
pub async fn list_planets(State(state): State<AppState>) -> Result<Json<Vec<Planet>>, ApiError> {
    let planets = SqlitePlanetRepository::new(state.pool()).find_all().await?;

    if planets.is_empty() {
        return Err(ApiError::not_found("not found"));
    }

    Ok(Json(planets))
}

/// Get a planet by ID
///
/// GET /planets/:id
pub async fn get_planet(
    State(state): State<AppState>,
    EntityId(id): EntityId,
) -> Result<Json<Planet>, ApiError> {
    let planet = SqlitePlanetRepository::new(state.pool())
        .find_by_id(id)
        .await?
        .ok_or_else(|| ApiError::not_found(format!("planet with id {} not found", id)))?;

    Ok(Json(planet))
}

/// Create a new planet
///
/// POST /planets
pub async fn create_planet(
    State(state): State<AppState>,
    JsonBody(req): JsonBody<CreatePlanetRequest>,
) -> Result<Json<Value>, ApiError> {
    require_text("name", &req.name)?;
    require_text("gravity", &req.gravity)?;
    require_text("climate", &req.climate)?;

    let planet = SqlitePlanetRepository::new(state.pool())
        .create(NewPlanet {
            name: req.name,
            diameter: req.diameter,
            gravity: req.gravity,
            climate: req.climate,
            poblation: req.poblation,
            rotation_period: req.rotation_period,
        })
        .await?;

    tracing::info!(planet_id = planet.id, name = %planet.name, "Planet created");

    Ok(Json(json!({
        "msg": "planet created successfully",
        "planet_added": planet,
    })))
}

/// Overwrite the supplied fields of a planet
///
/// PUT /planets/:id
pub async fn update_planet(
    State(state): State<AppState>,
    EntityId(id): EntityId,
    JsonBody(req): JsonBody<UpdatePlanetRequest>,
) -> Result<Json<Value>, ApiError> {
    require_text_if_present("name", req.name.as_deref())?;
    require_text_if_present("gravity", req.gravity.as_deref())?;
    require_text_if_present("climate", req.climate.as_deref())?;

    let changes = PlanetChanges {
        name: req.name,
        diameter: req.diameter,
        gravity: req.gravity,
        climate: req.climate,
        poblation: req.poblation,
        rotation_period: req.rotation_period,
    };

    let planet = SqlitePlanetRepository::new(state.pool())
        .update(id, changes)
        .await?
        .ok_or_else(|| ApiError::not_found(format!("planet with id {} not found", id)))?;

    Ok(Json(json!({
        "msg": "planet edited successfully",
        "planet_added": planet,
    })))
}

/// Delete a planet
///
/// DELETE /planets/:id
pub async fn delete_planet(
    State(state): State<AppState>,
    EntityId(id): EntityId,
) -> Result<Json<Value>, ApiError> {
    if !SqlitePlanetRepository::new(state.pool()).delete(id).await? {
        return Err(ApiError::not_found(format!("planet with id {} not found", id)));
    }

    tracing::info!(planet_id = id, "Planet deleted");

    Ok(Json(json!({ "msg": "planet deleted" })))
}
