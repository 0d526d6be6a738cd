use async_trait::async_trait;
use serde::Serialize;

use crate::domain::errors::RepositoryResult;

/// A character of the catalogue
#[derive(Debug, Clone, PartialEq, Eq, Serialize, sqlx::FromRow)]
pub struct People {
    pub id: i64,
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub gender: Option<String>,
    pub eye_color: String,
    pub hair_color: String,
}

#[derive(Debug, Clone)]
pub struct NewPeople {
    pub name: String,
    pub gender: Option<String>,
    pub eye_color: String,
    pub hair_color: String,
}

#[derive(Debug, Clone, Default)]
pub struct PeopleChanges {
    pub name: Option<String>,
    pub gender: Option<String>,
    pub eye_color: Option<String>,
    pub hair_color: Option<String>,
}

#[async_trait]
pub trait PeopleRepository: Send + Sync {
    async fn create(&self, people: NewPeople) -> RepositoryResult<People>;

    async fn find_by_id(&self, id: i64) -> RepositoryResult<Option<People>>;

    async fn find_all(&self) -> RepositoryResult<Vec<People>>;

    async fn update(&self, id: i64, changes: PeopleChanges) -> RepositoryResult<Option<People>>;

    async fn delete(&self, id: i64) -> RepositoryResult<bool>;
}
