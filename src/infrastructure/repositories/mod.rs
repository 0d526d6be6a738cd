// Repository implementations (data access layer)
// Adapters that implement domain repository interfaces on SQLite

pub mod sqlite_favorite_repository;
pub mod sqlite_people_repository;
pub mod sqlite_planet_repository;
pub mod sqlite_user_repository;
pub mod sqlite_vehicle_repository;

pub use sqlite_favorite_repository::SqliteFavoriteRepository;
pub use sqlite_people_repository::SqlitePeopleRepository;
pub use sqlite_planet_repository::SqlitePlanetRepository;
pub use sqlite_user_repository::SqliteUserRepository;
pub use sqlite_vehicle_repository::SqliteVehicleRepository;

use crate::domain::errors::RepositoryError;

/// Classifies a failed write by the constraint that rejected it
///
/// `duplicate` is the message reported when a unique column collides.
pub(crate) fn map_write_error(err: sqlx::Error, duplicate: &str) -> RepositoryError {
    if let sqlx::Error::Database(db_err) = &err {
        if db_err.is_unique_violation() {
            return RepositoryError::Conflict(duplicate.to_string());
        }
        if db_err.is_foreign_key_violation() {
            return RepositoryError::Invalid("referenced record does not exist".to_string());
        }
        if db_err.is_check_violation() {
            return RepositoryError::Invalid(format!("constraint failed: {}", db_err.message()));
        }
    }
    RepositoryError::Database(err)
}
