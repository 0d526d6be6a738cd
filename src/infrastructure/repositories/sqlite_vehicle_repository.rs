use async_trait::async_trait;
use sqlx::SqlitePool;

use super::map_write_error;
use crate::domain::errors::RepositoryResult;
use crate::domain::repositories::vehicle_repository::{
    NewVehicle, Vehicle, VehicleChanges, VehicleRepository,
};

const DUPLICATE_NAME: &str = "a vehicle with this name already exists";

/// SQLite implementation of VehicleRepository
pub struct SqliteVehicleRepository {
    pool: SqlitePool,
}

impl SqliteVehicleRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl VehicleRepository for SqliteVehicleRepository {
    async fn create(&self, vehicle: NewVehicle) -> RepositoryResult<Vehicle> {
        let mut tx = self.pool.begin().await?;

        let created = sqlx::query_as::<_, Vehicle>(
            r#"
            INSERT INTO vehicles (name, created, producer, title, color, model, pilots)
            VALUES (?, ?, ?, ?, ?, ?, ?)
            RETURNING id, name, created, producer, title, color, model, pilots
            "#,
        )
        .bind(&vehicle.name)
        .bind(&vehicle.created)
        .bind(&vehicle.producer)
        .bind(&vehicle.title)
        .bind(&vehicle.color)
        .bind(&vehicle.model)
        .bind(&vehicle.pilots)
        .fetch_one(&mut *tx)
        .await
        .map_err(|e| map_write_error(e, DUPLICATE_NAME))?;

        tx.commit().await?;
        Ok(created)
    }

    async fn find_by_id(&self, id: i64) -> RepositoryResult<Option<Vehicle>> {
        let vehicle = sqlx::query_as::<_, Vehicle>(
            r#"
            SELECT id, name, created, producer, title, color, model, pilots
            FROM vehicles
            WHERE id = ?
            "#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(vehicle)
    }

    async fn find_all(&self) -> RepositoryResult<Vec<Vehicle>> {
        let vehicles = sqlx::query_as::<_, Vehicle>(
            r#"
            SELECT id, name, created, producer, title, color, model, pilots
            FROM vehicles
            ORDER BY id
            "#,
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(vehicles)
    }

    async fn update(
        &self,
        id: i64,
        changes: VehicleChanges,
    ) -> RepositoryResult<Option<Vehicle>> {
        let mut tx = self.pool.begin().await?;

        let updated = sqlx::query_as::<_, Vehicle>(
            r#"
            UPDATE vehicles
            SET name = COALESCE(?, name),
                created = COALESCE(?, created),
                producer = COALESCE(?, producer),
                title = COALESCE(?, title),
                color = COALESCE(?, color),
                model = COALESCE(?, model),
                pilots = COALESCE(?, pilots)
            WHERE id = ?
            RETURNING id, name, created, producer, title, color, model, pilots
            "#,
        )
        .bind(&changes.name)
        .bind(&changes.created)
        .bind(&changes.producer)
        .bind(&changes.title)
        .bind(&changes.color)
        .bind(&changes.model)
        .bind(&changes.pilots)
        .bind(id)
        .fetch_optional(&mut *tx)
        .await
        .map_err(|e| map_write_error(e, DUPLICATE_NAME))?;

        tx.commit().await?;
        Ok(updated)
    }

    async fn delete(&self, id: i64) -> RepositoryResult<bool> {
        let mut tx = self.pool.begin().await?;

        let result = sqlx::query("DELETE FROM vehicles WHERE id = ?")
            .bind(id)
            .execute(&mut *tx)
            .await?;

        tx.commit().await?;
        Ok(result.rows_affected() > 0)
    }
}
