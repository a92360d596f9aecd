//! Notification service
//!
//! Records like/unlike notifications and lists the log.

use namer_core::entities::{NewNotification, Notification, NotificationType};
use namer_core::traits::NotificationQuery;
use namer_core::value_objects::Word;
use tracing::{debug, instrument};

use crate::dto::NotificationResponse;

use super::context::ServiceContext;
use super::error::ServiceResult;

/// Notification service
#[derive(Clone, Copy)]
pub struct NotificationService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> NotificationService<'a> {
    /// Create a new NotificationService
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// Record that a word was added to favorites
    pub async fn record_like(&self, word: &Word) -> ServiceResult<Notification> {
        self.record(NotificationType::Like, word).await
    }

    /// Record that a word was removed from favorites
    pub async fn record_unlike(&self, word: &Word) -> ServiceResult<Notification> {
        self.record(NotificationType::Unlike, word).await
    }

    /// Append a notification with the templated message for its type
    #[instrument(skip(self))]
    pub async fn record(
        &self,
        notification_type: NotificationType,
        word: &Word,
    ) -> ServiceResult<Notification> {
        let notification = NewNotification::new(notification_type, word.clone());
        let stored = self.ctx.notification_repo().insert(&notification).await?;

        debug!(id = stored.id, kind = %notification_type, word = %word, "Notification recorded");

        Ok(stored)
    }

    /// List notifications, most recent first
    #[instrument(skip(self))]
    pub async fn list_notifications(
        &self,
        query: &NotificationQuery,
    ) -> ServiceResult<Vec<NotificationResponse>> {
        let notifications = self.ctx.notification_repo().list(query).await?;
        Ok(notifications.into_iter().map(NotificationResponse::from).collect())
    }
}
