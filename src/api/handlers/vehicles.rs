use axum::{extract::State, Json};
use serde::Deserialize;
use serde_json::{json, Value};

use crate::api::errors::ApiError;
use crate::api::extract::{EntityId, JsonBody};
use crate::domain::repositories::vehicle_repository::{
    NewVehicle, Vehicle, VehicleChanges, VehicleRepository,
};
use crate::domain::validation::{require_text, require_text_if_present};
use crate::infrastructure::repositories::SqliteVehicleRepository;
use crate::state::AppState;

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct CreateVehicleRequest {
    pub name: String,
    pub created: String,
    pub producer: String,
    pub title: String,
    pub color: Option<String>,
    pub model: Option<String>,
    pub pilots: Option<String>,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct UpdateVehicleRequest {
    pub name: Option<String>,
    pub created: Option<String>,
    pub producer: Option<String>,
    pub title: Option<String>,
    pub color: Option<String>,
    pub model: Option<String>,
    pub pilots: Option<String>,
}

/// GET /vehicle
pub async fn list_vehicles(
    State(state): State<AppState>,
) -> Result<Json<Vec<Vehicle>>, ApiError> {
    let vehicles = SqliteVehicleRepository::new(state.pool()).find_all().await?;

    if vehicles.is_empty() {
        return Err(ApiError::not_found("not found"));
    }

    Ok(Json(vehicles))
}

/// GET /vehicle/:id
pub async fn get_vehicle(
    State(state): State<AppState>,
    EntityId(id): EntityId,
) -> Result<Json<Vehicle>, ApiError> {
    let vehicle = SqliteVehicleRepository::new(state.pool())
        .find_by_id(id)
        .await?
        .ok_or_else(|| ApiError::not_found(format!("vehicle with id {} not found", id)))?;

    Ok(Json(vehicle))
}

/// POST /vehicle
pub async fn create_vehicle(
    State(state): State<AppState>,
    JsonBody(req): JsonBody<CreateVehicleRequest>,
) -> Result<Json<Value>, ApiError> {
    require_text("name", &req.name)?;
    require_text("created", &req.created)?;
    require_text("producer", &req.producer)?;
    require_text("title", &req.title)?;

    let vehicle = SqliteVehicleRepository::new(state.pool())
        .create(NewVehicle {
            name: req.name,
            created: req.created,
            producer: req.producer,
            title: req.title,
            color: req.color,
            model: req.model,
            pilots: req.pilots,
        })
        .await?;

    tracing::info!(vehicle_id = vehicle.id, "Vehicle created");

    Ok(Json(json!({
        "msg": "vehicle created successfully",
        "vehicle_added": vehicle,
    })))
}

/// PUT /vehicle/:id
pub async fn update_vehicle(
    State(state): State<AppState>,
    EntityId(id): EntityId,
    JsonBody(req): JsonBody<UpdateVehicleRequest>,
) -> Result<Json<Value>, ApiError> {
    require_text_if_present("name", req.name.as_deref())?;
    require_text_if_present("created", req.created.as_deref())?;
    require_text_if_present("producer", req.producer.as_deref())?;
    require_text_if_present("title", req.title.as_deref())?;

    let changes = VehicleChanges {
        name: req.name,
        created: req.created,
        producer: req.producer,
        title: req.title,
        color: req.color,
        model: req.model,
        pilots: req.pilots,
    };

    let vehicle = SqliteVehicleRepository::new(state.pool())
        .update(id, changes)
        .await?
        .ok_or_else(|| ApiError::not_found(format!("vehicle with id {} not found", id)))?;

    Ok(Json(json!({
        "msg": "vehicle edited successfully",
        "vehicle_added": vehicle,
    })))
}

/// DELETE /vehicle/:id
pub async fn delete_vehicle(
    State(state): State<AppState>,
    EntityId(id): EntityId,
) -> Result<Json<Value>, ApiError> {
    if !SqliteVehicleRepository::new(state.pool()).delete(id).await? {
        return Err(ApiError::not_found(format!("vehicle with id {} not found", id)));
    }

    tracing::info!(vehicle_id = id, "Vehicle deleted");

    Ok(Json(json!({ "msg": "vehicle deleted" })))
}
