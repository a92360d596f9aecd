//! Notification entity <-> model mapper

use chrono::{DateTime, Utc};
use namer_core::entities::{NewNotification, Notification, NotificationType};
use namer_core::error::DomainError;
use namer_core::value_objects::Word;

use crate::models::NotificationModel;

/// Convert NotificationModel to Notification entity
impl TryFrom<NotificationModel> for Notification {
    type Error = DomainError;

    fn try_from(model: NotificationModel) -> Result<Self, Self::Error> {
        let notification_type = model
            .notification_type
            .parse::<NotificationType>()
            .map_err(|e| DomainError::DatabaseError(format!("invalid stored notification: {e}")))?;
        let word = Word::parse(model.word)
            .map_err(|e| DomainError::DatabaseError(format!("invalid stored notification: {e}")))?;

        Ok(Notification {
            id: model.id,
            notification_type,
            word,
            message: model.message,
            created_at: model.created_at,
        })
    }
}

/// Notification values for database insertion
pub struct NotificationInsert<'a> {
    pub notification_type: &'static str,
    pub word: &'a str,
    pub message: &'a str,
    pub created_at: DateTime<Utc>,
}

impl<'a> NotificationInsert<'a> {
    pub fn new(notification: &'a NewNotification) -> Self {
        Self {
            notification_type: notification.notification_type.as_str(),
            word: notification.word.as_str(),
            message: &notification.message,
            created_at: notification.created_at,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn model(notification_type: &str) -> NotificationModel {
        NotificationModel {
            id: 3,
            notification_type: notification_type.to_string(),
            word: "cat".to_string(),
            message: "The word \"cat\" has been removed from favorites.".to_string(),
            created_at: Utc::now(),
        }
    }

    #[test]
    fn test_model_to_entity() {
        let notification = Notification::try_from(model("unlike")).unwrap();
        assert_eq!(notification.id, 3);
        assert_eq!(notification.notification_type, NotificationType::Unlike);
        assert_eq!(notification.word.as_str(), "cat");
    }

    #[test]
    fn test_unknown_type_is_database_error() {
        let err = Notification::try_from(model("love")).unwrap_err();
        assert!(matches!(err, DomainError::DatabaseError(_)));
    }

    #[test]
    fn test_insert_values() {
        let pending = NewNotification::like(Word::parse("sun").unwrap());
        let insert = NotificationInsert::new(&pending);
        assert_eq!(insert.notification_type, "like");
        assert_eq!(insert.word, "sun");
        assert_eq!(insert.message, "The word \"sun\" has been added to favorites!");
    }
}
