use async_trait::async_trait;
use sqlx::SqlitePool;

use super::map_write_error;
use crate::domain::errors::RepositoryResult;
use crate::domain::repositories::favorite_repository::{
    Favorite, FavoriteRepository, NewFavorite,
};

/// SQLite implementation of FavoriteRepository
///
/// Dangling references are rejected by the foreign keys of the
/// `favorites` table and surface as `RepositoryError::Invalid`.
pub struct SqliteFavoriteRepository {
    pool: SqlitePool,
}

impl SqliteFavoriteRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl FavoriteRepository for SqliteFavoriteRepository {
    async fn create(&self, favorite: NewFavorite) -> RepositoryResult<Favorite> {
        let mut tx = self.pool.begin().await?;

        // Foreign keys are checked when the statement completes, so the
        // insert is run to completion before the row is read back.
        let result = sqlx::query(
            r#"
            INSERT INTO favorites (user_id, people_id, planets_id, vehicle_id)
            VALUES (?, ?, ?, ?)
            "#,
        )
        .bind(favorite.user_id)
        .bind(favorite.people_id)
        .bind(favorite.planets_id)
        .bind(favorite.vehicle_id)
        .execute(&mut *tx)
        .await
        .map_err(|e| map_write_error(e, "favorite already exists"))?;

        let created = sqlx::query_as::<_, Favorite>(
            "SELECT id, user_id, people_id, planets_id, vehicle_id FROM favorites WHERE id = ?",
        )
        .bind(result.last_insert_rowid())
        .fetch_one(&mut *tx)
        .await?;

        tx.commit().await?;
        Ok(created)
    }

    async fn find_by_id(&self, id: i64) -> RepositoryResult<Option<Favorite>> {
        let favorite = sqlx::query_as::<_, Favorite>(
            "SELECT id, user_id, people_id, planets_id, vehicle_id FROM favorites WHERE id = ?",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(favorite)
    }

    async fn find_by_user(&self, user_id: i64) -> RepositoryResult<Vec<Favorite>> {
        let favorites = sqlx::query_as::<_, Favorite>(
            r#"
            SELECT id, user_id, people_id, planets_id, vehicle_id
            FROM favorites
            WHERE user_id = ?
            ORDER BY id
            "#,
        )
        .bind(user_id)
        .fetch_all(&self.pool)
        .await?;

        Ok(favorites)
    }

    async fn delete(&self, id: i64) -> RepositoryResult<bool> {
        let mut tx = self.pool.begin().await?;

        let result = sqlx::query("DELETE FROM favorites WHERE id = ?")
            .bind(id)
            .execute(&mut *tx)
            .await?;

        tx.commit().await?;
        Ok(result.rows_affected() > 0)
    }
}
