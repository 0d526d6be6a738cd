use async_trait::async_trait;
use sqlx::SqlitePool;

use super::map_write_error;
use crate::domain::errors::RepositoryResult;
use crate::domain::repositories::people_repository::{
    NewPeople, People, PeopleChanges, PeopleRepository,
};

const DUPLICATE_NAME: &str = "people with this name already exists";

/// SQLite implementation of PeopleRepository
pub struct SqlitePeopleRepository {
    pool: SqlitePool,
}

impl SqlitePeopleRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl PeopleRepository for SqlitePeopleRepository {
    async fn create(&self, people: NewPeople) -> RepositoryResult<People> {
        let mut tx = self.pool.begin().await?;

        let created = sqlx::query_as::<_, People>(
            r#"
            INSERT INTO people (name, gender, eye_color, hair_color)
            VALUES (?, ?, ?, ?)
            RETURNING id, name, gender, eye_color, hair_color
            "#,
        )
        .bind(&people.name)
        .bind(&people.gender)
        .bind(&people.eye_color)
        .bind(&people.hair_color)
        .fetch_one(&mut *tx)
        .await
        .map_err(|e| map_write_error(e, DUPLICATE_NAME))?;

        tx.commit().await?;
        Ok(created)
    }

    async fn find_by_id(&self, id: i64) -> RepositoryResult<Option<People>> {
        let people = sqlx::query_as::<_, People>(
            "SELECT id, name, gender, eye_color, hair_color FROM people WHERE id = ?",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(people)
    }

    async fn find_all(&self) -> RepositoryResult<Vec<People>> {
        let people = sqlx::query_as::<_, People>(
            "SELECT id, name, gender, eye_color, hair_color FROM people ORDER BY id",
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(people)
    }

    async fn update(&self, id: i64, changes: PeopleChanges) -> RepositoryResult<Option<People>> {
        let mut tx = self.pool.begin().await?;

        let updated = sqlx::query_as::<_, People>(
            r#"
            UPDATE people
            SET name = COALESCE(?, name),
                gender = COALESCE(?, gender),
                eye_color = COALESCE(?, eye_color),
                hair_color = COALESCE(?, hair_color)
            WHERE id = ?
            RETURNING id, name, gender, eye_color, hair_color
            "#,
        )
        .bind(&changes.name)
        .bind(&changes.gender)
        .bind(&changes.eye_color)
        .bind(&changes.hair_color)
        .bind(id)
        .fetch_optional(&mut *tx)
        .await
        .map_err(|e| map_write_error(e, DUPLICATE_NAME))?;

        tx.commit().await?;
        Ok(updated)
    }

    async fn delete(&self, id: i64) -> RepositoryResult<bool> {
        let mut tx = self.pool.begin().await?;

        let result = sqlx::query("DELETE FROM people WHERE id = ?")
            .bind(id)
            .execute(&mut *tx)
            .await?;

        tx.commit().await?;
        Ok(result.rows_affected() > 0)
    }
}
