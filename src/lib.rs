//! Star Wars Catalogue API Library
//!
//! CRUD endpoints over users, people, planets, vehicles and favorites,
//! backed by SQLite through repository adapters.

pub mod api;
pub mod auth;
pub mod config;
pub mod domain;
pub mod infrastructure;
pub mod state;
