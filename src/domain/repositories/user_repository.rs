use async_trait::async_trait;
use serde::Serialize;

use crate::domain::errors::RepositoryResult;

/// Stored user account
///
/// The password hash is never serialized.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, sqlx::FromRow)]
pub struct User {
    pub id: i64,
    pub email: String,
    #[serde(skip)]
    pub password_hash: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    pub is_active: bool,
}

/// User data for insertion
#[derive(Debug, Clone)]
pub struct NewUser {
    pub email: String,
    pub password_hash: String,
    pub name: Option<String>,
    pub is_active: bool,
}

/// Fields of a user that may be overwritten; `None` keeps the stored value
#[derive(Debug, Clone, Default)]
pub struct UserChanges {
    pub email: Option<String>,
    pub password_hash: Option<String>,
    pub name: Option<String>,
    pub is_active: Option<bool>,
}

/// Repository trait for users
#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Create a new user, returning the stored record
    async fn create(&self, user: NewUser) -> RepositoryResult<User>;

    /// Find a user by ID
    async fn find_by_id(&self, id: i64) -> RepositoryResult<Option<User>>;

    /// Find a user by email address
    async fn find_by_email(&self, email: &str) -> RepositoryResult<Option<User>>;

    /// All users ordered by ID
    async fn find_all(&self) -> RepositoryResult<Vec<User>>;

    /// Overwrite the given fields; `None` when the user does not exist
    async fn update(&self, id: i64, changes: UserChanges) -> RepositoryResult<Option<User>>;

    /// Delete a user and its favorites; `false` when the user does not exist
    async fn delete(&self, id: i64) -> RepositoryResult<bool>;
}
