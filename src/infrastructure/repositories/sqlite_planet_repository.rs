use async_trait::async_trait;
use sqlx::SqlitePool;

use super::map_write_error;
use crate::domain::errors::RepositoryResult;
use crate::domain::repositories::planet_repository::{
    NewPlanet, Planet, PlanetChanges, PlanetRepository,
};

const DUPLICATE_NAME: &str = "a planet with this name already exists";

/// SQLite implementation of PlanetRepository
///
/// Every write runs in its own transaction, rolled back when dropped
/// before commit.
pub struct SqlitePlanetRepository {
    pool: SqlitePool,
}

impl SqlitePlanetRepository {
    /// Creates a new SqlitePlanetRepository
    ///
    /// # Arguments
    /// * `pool` - SQLx connection pool for SQLite
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl PlanetRepository for SqlitePlanetRepository {
    async fn create(&self, planet: NewPlanet) -> RepositoryResult<Planet> {
        let mut tx = self.pool.begin().await?;

        let created = sqlx::query_as::<_, Planet>(
            r#"
            INSERT INTO planets (name, diameter, gravity, climate, poblation, rotation_period)
            VALUES (?, ?, ?, ?, ?, ?)
            RETURNING id, name, diameter, gravity, climate, poblation, rotation_period
            "#,
        )
        .bind(&planet.name)
        .bind(&planet.diameter)
        .bind(&planet.gravity)
        .bind(&planet.climate)
        .bind(planet.poblation)
        .bind(planet.rotation_period)
        .fetch_one(&mut *tx)
        .await
        .map_err(|e| map_write_error(e, DUPLICATE_NAME))?;

        tx.commit().await?;
        Ok(created)
    }

    async fn find_by_id(&self, id: i64) -> RepositoryResult<Option<Planet>> {
        let planet = sqlx::query_as::<_, Planet>(
            r#"
            SELECT id, name, diameter, gravity, climate, poblation, rotation_period
            FROM planets
            WHERE id = ?
            "#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(planet)
    }

    async fn find_all(&self) -> RepositoryResult<Vec<Planet>> {
        let planets = sqlx::query_as::<_, Planet>(
            r#"
            SELECT id, name, diameter, gravity, climate, poblation, rotation_period
            FROM planets
            ORDER BY id
            "#,
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(planets)
    }

    async fn update(&self, id: i64, changes: PlanetChanges) -> RepositoryResult<Option<Planet>> {
        let mut tx = self.pool.begin().await?;

        let updated = sqlx::query_as::<_, Planet>(
            r#"
            UPDATE planets
            SET name = COALESCE(?, name),
                diameter = COALESCE(?, diameter),
                gravity = COALESCE(?, gravity),
                climate = COALESCE(?, climate),
                poblation = COALESCE(?, poblation),
                rotation_period = COALESCE(?, rotation_period)
            WHERE id = ?
            RETURNING id, name, diameter, gravity, climate, poblation, rotation_period
            "#,
        )
        .bind(&changes.name)
        .bind(&changes.diameter)
        .bind(&changes.gravity)
        .bind(&changes.climate)
        .bind(changes.poblation)
        .bind(changes.rotation_period)
        .bind(id)
        .fetch_optional(&mut *tx)
        .await
        .map_err(|e| map_write_error(e, DUPLICATE_NAME))?;

        tx.commit().await?;
        Ok(updated)
    }

    async fn delete(&self, id: i64) -> RepositoryResult<bool> {
        let mut tx = self.pool.begin().await?;

        let result = sqlx::query("DELETE FROM planets WHERE id = ?")
            .bind(id)
            .execute(&mut *tx)
            .await?;

        tx.commit().await?;
        Ok(result.rows_affected() > 0)
    }
}
