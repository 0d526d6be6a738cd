use axum::{extract::State, Json};
use serde::Deserialize;
use serde_json::{json, Value};

use crate::api::errors::ApiError;
use crate::api::extract::{EntityId, JsonBody};
use crate::domain::repositories::people_repository::{
    NewPeople, People, PeopleChanges, PeopleRepository,
};
use crate::domain::validation::{require_text, require_text_if_present};
use crate::infrastructure::repositories::SqlitePeopleRepository;
use crate::state::AppState;

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct CreatePeopleRequest {
    pub name: String,
    pub gender: Option<String>,
    pub eye_color: String,
    pub hair_color: String,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct UpdatePeopleRequest {
    pub name: Option<String>,
    pub gender: Option<String>,
    pub eye_color: Option<String>,
    pub hair_color: Option<String>,
}

/// GET /people
pub async fn list_people(State(state): State<AppState>) -> Result<Json<Vec<People>>, ApiError> {
    let people = SqlitePeopleRepository::new(state.pool()).find_all().await?;

    if people.is_empty() {
        return Err(ApiError::not_found("not found"));
    }

    Ok(Json(people))
}

/// GET /people/:id
pub async fn get_people(
    State(state): State<AppState>,
    EntityId(id): EntityId,
) -> Result<Json<People>, ApiError> {
    let people = SqlitePeopleRepository::new(state.pool())
        .find_by_id(id)
        .await?
        .ok_or_else(|| ApiError::not_found(format!("people with id {} not found", id)))?;

    Ok(Json(people))
}

/// POST /people
pub async fn create_people(
    State(state): State<AppState>,
    JsonBody(req): JsonBody<CreatePeopleRequest>,
) -> Result<Json<Value>, ApiError> {
    require_text("name", &req.name)?;
    require_text("eye_color", &req.eye_color)?;
    require_text("hair_color", &req.hair_color)?;

    let people = SqlitePeopleRepository::new(state.pool())
        .create(NewPeople {
            name: req.name,
            gender: req.gender,
            eye_color: req.eye_color,
            hair_color: req.hair_color,
        })
        .await?;

    tracing::info!(people_id = people.id, "People created");

    Ok(Json(json!({
        "msg": "people created successfully",
        "people_added": people,
    })))
}

/// PUT /people/:id
pub async fn update_people(
    State(state): State<AppState>,
    EntityId(id): EntityId,
    JsonBody(req): JsonBody<UpdatePeopleRequest>,
) -> Result<Json<Value>, ApiError> {
    require_text_if_present("name", req.name.as_deref())?;
    require_text_if_present("eye_color", req.eye_color.as_deref())?;
    require_text_if_present("hair_color", req.hair_color.as_deref())?;

    let changes = PeopleChanges {
        name: req.name,
        gender: req.gender,
        eye_color: req.eye_color,
        hair_color: req.hair_color,
    };

    let people = SqlitePeopleRepository::new(state.pool())
        .update(id, changes)
        .await?
        .ok_or_else(|| ApiError::not_found(format!("people with id {} not found", id)))?;

    Ok(Json(json!({
        "msg": "people edited successfully",
        "people_added": people,
    })))
}

/// DELETE /people/:id
pub async fn delete_people(
    State(state): State<AppState>,
    EntityId(id): EntityId,
) -> Result<Json<Value>, ApiError> {
    if !SqlitePeopleRepository::new(state.pool()).delete(id).await? {
        return Err(ApiError::not_found(format!("people with id {} not found", id)));
    }

    tracing::info!(people_id = id, "People deleted");

    Ok(Json(json!({ "msg": "people deleted" })))
}
