// API layer module (adapters for controllers)
// Follows Hexagonal Architecture - API is an adapter

pub mod errors;
pub mod extract;
pub mod handlers;

use axum::{
    http::{Method, StatusCode, Uri},
    routing::{delete, get, post},
    Router,
};

use crate::api::errors::ApiError;
use crate::state::AppState;
use handlers::{favorites, people, planets, sitemap, users, vehicles};

/// Every route the service exposes, as `(method, path)`
///
/// Rendered by the sitemap at `GET /`; keep in step with [`router`].
pub const ROUTES: &[(&str, &str)] = &[
    ("GET", "/"),
    ("GET", "/user"),
    ("POST", "/user"),
    ("GET", "/user/:id"),
    ("PUT", "/user/:id"),
    ("DELETE", "/user/:id"),
    ("GET", "/user/:id/favorites"),
    ("GET", "/people"),
    ("POST", "/people"),
    ("GET", "/people/:id"),
    ("PUT", "/people/:id"),
    ("DELETE", "/people/:id"),
    ("GET", "/planets"),
    ("POST", "/planets"),
    ("GET", "/planets/:id"),
    ("PUT", "/planets/:id"),
    ("DELETE", "/planets/:id"),
    ("GET", "/vehicle"),
    ("POST", "/vehicle"),
    ("GET", "/vehicle/:id"),
    ("PUT", "/vehicle/:id"),
    ("DELETE", "/vehicle/:id"),
    ("POST", "/favorites"),
    ("DELETE", "/favorite/:id"),
];

/// Build the complete router with all routes
pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/", get(sitemap::sitemap))
        // Users
        .route("/user", get(users::list_users).post(users::create_user))
        .route(
            "/user/:id",
            get(users::get_user)
                .put(users::update_user)
                .delete(users::delete_user),
        )
        .route("/user/:id/favorites", get(favorites::list_user_favorites))
        // People
        .route("/people", get(people::list_people).post(people::create_people))
        .route(
            "/people/:id",
            get(people::get_people)
                .put(people::update_people)
                .delete(people::delete_people),
        )
        // Planets
        .route("/planets", get(planets::list_planets).post(planets::create_planet))
        .route(
            "/planets/:id",
            get(planets::get_planet)
                .put(planets::update_planet)
                .delete(planets::delete_planet),
        )
        // Vehicles
        .route("/vehicle", get(vehicles::list_vehicles).post(vehicles::create_vehicle))
        .route(
            "/vehicle/:id",
            get(vehicles::get_vehicle)
                .put(vehicles::update_vehicle)
                .delete(vehicles::delete_vehicle),
        )
        // Favorites
        .route("/favorites", post(favorites::create_favorite))
        .route("/favorite/:id", delete(favorites::delete_favorite))
        .fallback(route_not_found)
        .method_not_allowed_fallback(method_not_allowed)
        .with_state(state)
}

async fn route_not_found(method: Method, uri: Uri) -> ApiError {
    ApiError::not_found(format!("no route for {} {}", method, uri.path()))
}

async fn method_not_allowed(method: Method, uri: Uri) -> ApiError {
    ApiError::new(
        StatusCode::METHOD_NOT_ALLOWED,
        format!("method {} not allowed on {}", method, uri.path()),
    )
}
