use async_trait::async_trait;
use serde::Serialize;

use crate::domain::errors::RepositoryResult;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, sqlx::FromRow)]
pub struct Vehicle {
    pub id: i64,
    pub name: String,
    pub created: String,
    pub producer: String,
    pub title: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub model: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pilots: Option<String>,
}

#[derive(Debug, Clone)]
pub struct NewVehicle {
    pub name: String,
    pub created: String,
    pub producer: String,
    pub title: String,
    pub color: Option<String>,
    pub model: Option<String>,
    pub pilots: Option<String>,
}

#[derive(Debug, Clone, Default)]
pub struct VehicleChanges {
    pub name: Option<String>,
    pub created: Option<String>,
    pub producer: Option<String>,
    pub title: Option<String>,
    pub color: Option<String>,
    pub model: Option<String>,
    pub pilots: Option<String>,
}

#[async_trait]
pub trait VehicleRepository: Send + Sync {
    async fn create(&self, vehicle: NewVehicle) -> RepositoryResult<Vehicle>;

    async fn find_by_id(&self, id: i64) -> RepositoryResult<Option<Vehicle>>;

    async fn find_all(&self) -> RepositoryResult<Vec<Vehicle>>;

    async fn update(&self, id: i64, changes: VehicleChanges)
        -> RepositoryResult<Option<Vehicle>>;

    async fn delete(&self, id: i64) -> RepositoryResult<bool>;
}
