//! Service context - dependency container for services
//!
//! Holds the repositories the services read and write.

use std::sync::Arc;

use namer_core::traits::{FavoriteRepository, NotificationRepository};
use namer_db::{
    InMemoryFavoriteRepository, InMemoryNotificationRepository, PgFavoriteRepository,
    PgNotificationRepository, PgPool,
};

/// Service context containing all dependencies
#[derive(Clone)]
pub struct ServiceContext {
    favorite_repo: Arc<dyn FavoriteRepository>,
    notification_repo: Arc<dyn NotificationRepository>,
}

impl ServiceContext {
    /// Create a new service context
    pub fn new(
        favorite_repo: Arc<dyn FavoriteRepository>,
        notification_repo: Arc<dyn NotificationRepository>,
    ) -> Self {
        Self {
            favorite_repo,
            notification_repo,
        }
    }

    /// Context backed by PostgreSQL repositories sharing one pool
    pub fn postgres(pool: PgPool) -> Self {
        Self::new(
            Arc::new(PgFavoriteRepository::new(pool.clone())),
            Arc::new(PgNotificationRepository::new(pool)),
        )
    }

    /// Context backed by fresh, empty in-memory repositories
    pub fn in_memory() -> Self {
        Self::new(
            Arc::new(InMemoryFavoriteRepository::new()),
            Arc::new(InMemoryNotificationRepository::new()),
        )
    }

    /// Get the favorite repository
    pub fn favorite_repo(&self) -> &dyn FavoriteRepository {
        self.favorite_repo.as_ref()
    }

    /// Get the notification repository
    pub fn notification_repo(&self) -> &dyn NotificationRepository {
        self.notification_repo.as_ref()
    }
}

impl std::fmt::Debug for ServiceContext {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ServiceContext")
            .field("favorite_repo", &"dyn FavoriteRepository")
            .field("notification_repo", &"dyn NotificationRepository")
            .finish()
    }
}
