//! Application state shared across handlers.

use sqlx::SqlitePool;

/// Application state shared across all handlers.
///
/// Cheap to clone; extracted in handlers with `State<AppState>`.
#[derive(Debug, Clone)]
pub struct AppState {
    pool: SqlitePool,
    password_cost: u32,
}

impl AppState {
    /// Create new application state.
    ///
    /// `password_cost` is the bcrypt work factor for stored passwords.
    pub fn new(pool: SqlitePool, password_cost: u32) -> Self {
        Self {
            pool,
            password_cost,
        }
    }

    /// Connection pool; repositories take a clone of it.
    pub fn pool(&self) -> SqlitePool {
        self.pool.clone()
    }

    pub fn password_cost(&self) -> u32 {
        self.password_cost
    }
}
