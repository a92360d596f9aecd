//! Route definitions
//!
//! API routes mounted under /api/v1, health probes at the root.

use axum::{
    routing::{get, post},
    Router,
};

use crate::handlers::{favorites, health, notifications};
use crate::state::AppState;

/// Create the main API router
pub fn create_router() -> Router<AppState> {
    Router::new().nest("/api/v1", api_v1_routes())
}

/// Health check routes
pub fn health_routes() -> Router<AppState> {
    Router::new()
        .route("/health", get(health::health_check))
        .route("/health/ready", get(health::readiness_check))
}

/// API v1 routes
fn api_v1_routes() -> Router<AppState> {
    Router::new()
        .merge(favorite_routes())
        .merge(notification_routes())
}

/// Favorite routes
fn favorite_routes() -> Router<AppState> {
    Router::new()
        .route(
            "/favorites",
            post(favorites::add_favorite)
                .get(favorites::list_favorites)
                .delete(favorites::clear_favorites),
        )
        .route(
            "/favorites/:word",
            get(favorites::get_favorite).delete(favorites::remove_favorite),
        )
}

/// Notification routes
fn notification_routes() -> Router<AppState> {
    Router::new().route("/notifications", get(notifications::list_notifications))
}
