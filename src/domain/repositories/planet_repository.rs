use async_trait::async_trait;
use serde::Serialize;

use crate::domain::errors::RepositoryResult;

/// A planet of the catalogue
///
/// `poblation` keeps the field name the public API has always used.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, sqlx::FromRow)]
pub struct Planet {
    pub id: i64,
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub diameter: Option<String>,
    pub gravity: String,
    pub climate: String,
    pub poblation: i64,
    pub rotation_period: i64,
}

#[derive(Debug, Clone)]
pub struct NewPlanet {
    pub name: String,
    pub diameter: Option<String>,
    pub gravity: String,
    pub climate: String,
    pub poblation: i64,
    pub rotation_period: i64,
}

#[derive(Debug, Clone, Default)]
pub struct PlanetChanges {
    pub name: Option<String>,
    pub diameter: Option<String>,
    pub gravity: Option<String>,
    pub climate: Option<String>,
    pub poblation: Option<i64>,
    pub rotation_period: Option<i64>,
}

/// Repository trait for planets
#[async_trait]
pub trait PlanetRepository: Send + Sync {
    async fn create(&self, planet: NewPlanet) -> RepositoryResult<Planet>;

    async fn find_by_id(&self, id: i64) -> RepositoryResult<Option<Planet>>;

    async fn find_all(&self) -> RepositoryResult<Vec<Planet>>;

    async fn update(&self, id: i64, changes: PlanetChanges) -> RepositoryResult<Option<Planet>>;

    async fn delete(&self, id: i64) -> RepositoryResult<bool>;
}
