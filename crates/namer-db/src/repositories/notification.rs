//! PostgreSQL implementation of NotificationRepository

use async_trait::async_trait;
use sqlx::PgPool;
use tracing::instrument;

use namer_core::entities::{NewNotification, Notification};
use namer_core::traits::{NotificationQuery, NotificationRepository, RepoResult};

use crate::mappers::NotificationInsert;
use crate::models::NotificationModel;

use super::error::map_db_error;

/// PostgreSQL implementation of NotificationRepository
#[derive(Clone)]
pub struct PgNotificationRepository {
    pool: PgPool,
}

impl PgNotificationRepository {
    /// Create a new PgNotificationRepository
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl NotificationRepository for PgNotificationRepository {
    #[instrument(skip(self), fields(word = %notification.word, kind = %notification.notification_type))]
    async fn insert(&self, notification: &NewNotification) -> RepoResult<Notification> {
        let insert = NotificationInsert::new(notification);

        let model = sqlx::query_as::<_, NotificationModel>(
            r#"
            INSERT INTO notifications (notification_type, word, message, created_at)
            VALUES ($1, $2, $3, $4)
            RETURNING id, notification_type, word, message, created_at
            "#,
        )
        .bind(insert.notification_type)
        .bind(insert.word)
        .bind(insert.message)
        .bind(insert.created_at)
        .fetch_one(&self.pool)
        .await
        .map_err(map_db_error)?;

        Notification::try_from(model)
    }

    #[instrument(skip(self))]
    async fn list(&self, query: &NotificationQuery) -> RepoResult<Vec<Notification>> {
        let results = sqlx::query_as::<_, NotificationModel>(
            r#"
            SELECT id, notification_type, word, message, created_at
            FROM notifications
            WHERE ($1::TEXT IS NULL OR notification_type = $1)
              AND (
                $2::TEXT IS NULL
                OR strpos(lower(word), lower($2)) > 0
                OR strpos(lower(message), lower($2)) > 0
              )
            ORDER BY created_at DESC, id DESC
            "#,
        )
        .bind(query.notification_type.map(|t| t.as_str()))
        .bind(query.search.as_deref())
        .fetch_all(&self.pool)
        .await
        .map_err(map_db_error)?;

        results.into_iter().map(Notification::try_from).collect()
    }
}
