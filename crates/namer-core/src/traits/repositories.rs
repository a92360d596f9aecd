//! Repository traits (ports) - define the interface for data access
//!
//! These traits follow the Repository pattern from Domain-Driven Design.
//! The domain layer defines what it needs, and the infrastructure layer
//! provides the implementation.

use async_trait::async_trait;

use crate::entities::{Favorite, NewNotification, Notification, NotificationType};
use crate::error::DomainError;
use crate::value_objects::Word;

/// Result type for repository operations
pub type RepoResult<T> = Result<T, DomainError>;

// ============================================================================
// Favorite Repository
// ============================================================================

/// Filters for listing favorites
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FavoriteQuery {
    /// Case-insensitive substring of the word
    pub search: Option<String>,
}

impl FavoriteQuery {
    /// Check whether a favorite passes the filters
    pub fn matches(&self, favorite: &Favorite) -> bool {
        self.search
            .as_deref()
            .is_none_or(|needle| favorite.word.contains_ignore_case(needle))
    }
}

#[async_trait]
pub trait FavoriteRepository: Send + Sync {
    /// Find favorite by its word
    async fn find_by_word(&self, word: &Word) -> RepoResult<Option<Favorite>>;

    /// List favorites, most recently created first
    async fn list(&self, query: &FavoriteQuery) -> RepoResult<Vec<Favorite>>;

    /// Insert a new favorite
    ///
    /// Fails with `DomainError::FavoriteAlreadyExists` when the word is taken.
    async fn insert(&self, favorite: &Favorite) -> RepoResult<()>;

    /// Delete a favorite, returning the removed row if one existed
    async fn delete(&self, word: &Word) -> RepoResult<Option<Favorite>>;

    /// Delete every favorite, returning the removed rows
    async fn delete_all(&self) -> RepoResult<Vec<Favorite>>;

    /// Round-trip to the store
    async fn health_check(&self) -> RepoResult<()>;
}

// ============================================================================
// Notification Repository
// ============================================================================

/// Filters for listing notifications
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NotificationQuery {
    pub notification_type: Option<NotificationType>,
    /// Case-insensitive substring of the word or message
    pub search: Option<String>,
}

impl NotificationQuery {
    /// Check whether a notification passes the filters
    pub fn matches(&self, notification: &Notification) -> bool {
        if let Some(kind) = self.notification_type {
            if notification.notification_type != kind {
                return false;
            }
        }

        self.search.as_deref().is_none_or(|needle| {
            notification.word.contains_ignore_case(needle)
                || notification
                    .message
                    .to_lowercase()
                    .contains(&needle.to_lowercase())
        })
    }
}

#[async_trait]
pub trait NotificationRepository: Send + Sync {
    /// Append a notification and return it with its assigned id
    async fn insert(&self, notification: &NewNotification) -> RepoResult<Notification>;

    /// List notifications, most recent first
    async fn list(&self, query: &NotificationQuery) -> RepoResult<Vec<Notification>>;
}
