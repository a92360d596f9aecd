//! Notification entity - an append-only record of a favorite being added or removed

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

use super::stored_now;
use crate::error::DomainError;
use crate::value_objects::Word;

/// Notification type enum
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NotificationType {
    /// A favorite was created
    Like,
    /// A favorite was removed
    Unlike,
}

impl NotificationType {
    /// Get the stored string value
    #[inline]
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Like => "like",
            Self::Unlike => "unlike",
        }
    }

    /// Render the human-readable message for a word
    #[must_use]
    pub fn message_for(self, word: &Word) -> String {
        match self {
            Self::Like => format!("The word \"{word}\" has been added to favorites!"),
            Self::Unlike => format!("The word \"{word}\" has been removed from favorites."),
        }
    }
}

impl fmt::Display for NotificationType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for NotificationType {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "like" => Ok(Self::Like),
            "unlike" => Ok(Self::Unlike),
            other => Err(DomainError::InvalidNotificationType(other.to_string())),
        }
    }
}

/// Notification entity as persisted
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notification {
    /// Store-assigned, increasing with insertion order
    pub id: i64,
    pub notification_type: NotificationType,
    pub word: Word,
    pub message: String,
    pub created_at: DateTime<Utc>,
}

/// Notification that has not been persisted yet
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewNotification {
    pub notification_type: NotificationType,
    pub word: Word,
    pub message: String,
    pub created_at: DateTime<Utc>,
}

impl NewNotification {
    /// Build a notification of the given type with its templated message
    pub fn new(notification_type: NotificationType, word: Word) -> Self {
        let message = notification_type.message_for(&word);
        Self {
            notification_type,
            word,
            message,
            created_at: stored_now(),
        }
    }

    /// Build a `like` notification
    pub fn like(word: Word) -> Self {
        Self::new(NotificationType::Like, word)
    }

    /// Build an `unlike` notification
    pub fn unlike(word: Word) -> Self {
        Self::new(NotificationType::Unlike, word)
    }

    /// Attach the store-assigned id
    pub fn into_persisted(self, id: i64) -> Notification {
        Notification {
            id,
            notification_type: self.notification_type,
            word: self.word,
            message: self.message,
            created_at: self.created_at,
        }
    }
}
