//! Notification database model

use chrono::{DateTime, Utc};
use sqlx::FromRow;

/// Database model for notifications table
#[derive(Debug, Clone, FromRow)]
pub struct NotificationModel {
    pub id: i64,
    pub notification_type: String,
    pub word: String,
    pub message: String,
    pub created_at: DateTime<Utc>,
}
