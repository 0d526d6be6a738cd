use async_trait::async_trait;
use serde::Serialize;

use crate::domain::errors::{RepositoryResult, ValidationError};

/// A user's bookmark of a character, planet and/or vehicle
///
/// Absent targets serialize as `null`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, sqlx::FromRow)]
pub struct Favorite {
    pub id: i64,
    pub user_id: i64,
    pub people_id: Option<i64>,
    pub planets_id: Option<i64>,
    pub vehicle_id: Option<i64>,
}

/// Favorite data for insertion
///
/// # Invariants
/// - At least one of `people_id`, `planets_id`, `vehicle_id` is set
#[derive(Debug, Clone)]
pub struct NewFavorite {
    pub user_id: i64,
    pub people_id: Option<i64>,
    pub planets_id: Option<i64>,
    pub vehicle_id: Option<i64>,
}

impl NewFavorite {
    /// Checks that the favorite points at something
    ///
    /// # Example
    /// ```
    /// use starwars_api::domain::repositories::NewFavorite;
    ///
    /// let favorite = NewFavorite { user_id: 1, people_id: None, planets_id: Some(3), vehicle_id: None };
    /// assert!(favorite.validate().is_ok());
    /// ```
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.people_id.is_none() && self.planets_id.is_none() && self.vehicle_id.is_none() {
            return Err(ValidationError::new(
                "favorite must reference at least one of people_id, planets_id or vehicle_id",
            ));
        }
        Ok(())
    }
}

/// Repository trait for favorites
#[async_trait]
pub trait FavoriteRepository: Send + Sync {
    /// Insert a favorite; every referenced row must exist
    async fn create(&self, favorite: NewFavorite) -> RepositoryResult<Favorite>;

    async fn find_by_id(&self, id: i64) -> RepositoryResult<Option<Favorite>>;

    /// All favorites of a user ordered by ID
    async fn find_by_user(&self, user_id: i64) -> RepositoryResult<Vec<Favorite>>;

    async fn delete(&self, id: i64) -> RepositoryResult<bool>;
}
