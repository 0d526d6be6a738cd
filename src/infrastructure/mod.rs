// Infrastructure layer module
// Contains the SQLite connection setup and repository adapters
// Follows Hexagonal Architecture

pub mod database;
pub mod repositories;
