use async_trait::async_trait;
use sqlx::SqlitePool;

use super::map_write_error;
use crate::domain::errors::RepositoryResult;
use crate::domain::repositories::user_repository::{NewUser, User, UserChanges, UserRepository};

const DUPLICATE_EMAIL: &str = "a user with this email already exists";

/// SQLite implementation of UserRepository
pub struct SqliteUserRepository {
    pool: SqlitePool,
}

impl SqliteUserRepository {
    /// Creates a new SqliteUserRepository
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl UserRepository for SqliteUserRepository {
    async fn create(&self, user: NewUser) -> RepositoryResult<User> {
        let mut tx = self.pool.begin().await?;

        let created = sqlx::query_as::<_, User>(
            r#"
            INSERT INTO users (email, password_hash, name, is_active)
            VALUES (?, ?, ?, ?)
            RETURNING id, email, password_hash, name, is_active
            "#,
        )
        .bind(&user.email)
        .bind(&user.password_hash)
        .bind(&user.name)
        .bind(user.is_active)
        .fetch_one(&mut *tx)
        .await
        .map_err(|e| map_write_error(e, DUPLICATE_EMAIL))?;

        tx.commit().await?;
        Ok(created)
    }

    async fn find_by_id(&self, id: i64) -> RepositoryResult<Option<User>> {
        let user = sqlx::query_as::<_, User>(
            r#"
            SELECT id, email, password_hash, name, is_active
            FROM users
            WHERE id = ?
            "#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(user)
    }

    async fn find_by_email(&self, email: &str) -> RepositoryResult<Option<User>> {
        let user = sqlx::query_as::<_, User>(
            r#"
            SELECT id, email, password_hash, name, is_active
            FROM users
            WHERE email = ?
            "#,
        )
        .bind(email)
        .fetch_optional(&self.pool)
        .await?;

        Ok(user)
    }

    async fn find_all(&self) -> RepositoryResult<Vec<User>> {
        let users = sqlx::query_as::<_, User>(
            r#"
            SELECT id, email, password_hash, name, is_active
            FROM users
            ORDER BY id
            "#,
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(users)
    }

    async fn update(&self, id: i64, changes: UserChanges) -> RepositoryResult<Option<User>> {
        let mut tx = self.pool.begin().await?;

        let updated = sqlx::query_as::<_, User>(
            r#"
            UPDATE users
            SET email = COALESCE(?, email),
                password_hash = COALESCE(?, password_hash),
                name = COALESCE(?, name),
                is_active = COALESCE(?, is_active)
            WHERE id = ?
            RETURNING id, email, password_hash, name, is_active
            "#,
        )
        .bind(&changes.email)
        .bind(&changes.password_hash)
        .bind(&changes.name)
        .bind(changes.is_active)
        .bind(id)
        .fetch_optional(&mut *tx)
        .await
        .map_err(|e| map_write_error(e, DUPLICATE_EMAIL))?;

        tx.commit().await?;
        Ok(updated)
    }

    async fn delete(&self, id: i64) -> RepositoryResult<bool> {
        let mut tx = self.pool.begin().await?;

        let result = sqlx::query("DELETE FROM users WHERE id = ?")
            .bind(id)
            .execute(&mut *tx)
            .await?;

        tx.commit().await?;
        Ok(result.rows_affected() > 0)
    }
}
