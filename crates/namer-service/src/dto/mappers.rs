//! Entity to DTO mappers
//!
//! Implements `From` conversions from domain entities to response DTOs.

use namer_core::entities::{Favorite, Notification};

use super::responses::{FavoriteResponse, NotificationResponse};

impl From<&Favorite> for FavoriteResponse {
    fn from(favorite: &Favorite) -> Self {
        Self {
            word: favorite.word.to_string(),
            created_at: favorite.created_at,
        }
    }
}

impl From<Favorite> for FavoriteResponse {
    fn from(favorite: Favorite) -> Self {
        Self {
            word: favorite.word.into_inner(),
            created_at: favorite.created_at,
        }
    }
}

impl From<Notification> for NotificationResponse {
    fn from(notification: Notification) -> Self {
        Self {
            id: notification.id,
            notification_type: notification.notification_type,
            word: notification.word.into_inner(),
            message: notification.message,
            created_at: notification.created_at,
        }
    }
}
