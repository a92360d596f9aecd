//! In-memory implementation of NotificationRepository

use std::sync::Arc;

use async_trait::async_trait;
use parking_lot::RwLock;
use tracing::instrument;

use namer_core::entities::{NewNotification, Notification};
use namer_core::traits::{NotificationQuery, NotificationRepository, RepoResult};

#[derive(Default)]
struct NotificationLog {
    next_id: i64,
    entries: Vec<Notification>,
}

/// In-memory implementation of NotificationRepository
///
/// Ids are assigned under the write lock, so they grow in append order.
#[derive(Clone, Default)]
pub struct InMemoryNotificationRepository {
    log: Arc<RwLock<NotificationLog>>,
}

impl InMemoryNotificationRepository {
    /// Create an empty repository
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored notifications
    pub fn len(&self) -> usize {
        self.log.read().entries.len()
    }

    /// Check if no notifications are stored
    pub fn is_empty(&self) -> bool {
        self.log.read().entries.is_empty()
    }
}

#[async_trait]
impl NotificationRepository for InMemoryNotificationRepository {
    #[instrument(skip(self), fields(word = %notification.word, kind = %notification.notification_type))]
    async fn insert(&self, notification: &NewNotification) -> RepoResult<Notification> {
        let mut log = self.log.write();
        log.next_id += 1;
        let stored = notification.clone().into_persisted(log.next_id);
        log.entries.push(stored.clone());
        Ok(stored)
    }

    #[instrument(skip(self))]
    async fn list(&self, query: &NotificationQuery) -> RepoResult<Vec<Notification>> {
        let mut notifications: Vec<Notification> = self
            .log
            .read()
            .entries
            .iter()
            .filter(|n| query.matches(n))
            .cloned()
            .collect();

        notifications.sort_by(|a, b| {
            b.created_at
                .cmp(&a.created_at)
                .then_with(|| b.id.cmp(&a.id))
        });
        Ok(notifications)
    }
}
