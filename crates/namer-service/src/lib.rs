//! # namer-service
//!
//! Application layer containing the favorite lifecycle, the notification
//! recorder, and the DTOs exchanged with the API layer.

pub mod dto;
pub mod services;

pub use dto::{
    AddFavoriteRequest, ClearFavoritesResponse, FavoriteResponse, HealthChecks, HealthResponse,
    NotificationResponse, ReadinessResponse,
};
pub use services::{
    AddFavoriteOutcome, FavoriteService, HealthService, NotificationService, ServiceContext,
    ServiceError, ServiceResult,
};
