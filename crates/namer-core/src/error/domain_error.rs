//! Domain errors - error types for the domain layer

use thiserror::Error;

/// Domain layer errors
#[derive(Debug, Error)]
pub enum DomainError {
    // =========================================================================
    // Not Found Errors
    // =========================================================================
    #[error("Favorite not found: {0}")]
    FavoriteNotFound(String),

    // =========================================================================
    // Validation Errors
    // =========================================================================
    #[error("The word field is required")]
    EmptyWord,

    #[error("Word too long: max {max} characters")]
    WordTooLong { max: usize },

    #[error("Word must not contain control characters")]
    WordHasControlCharacter,

    #[error("Invalid notification type: {0}")]
    InvalidNotificationType(String),

    // =========================================================================
    // Conflict Errors
    // =========================================================================
    #[error("Favorite already exists: {0}")]
    FavoriteAlreadyExists(String),

    // =========================================================================
    // Infrastructure Errors (wrapped)
    // =========================================================================
    #[error("Database error: {0}")]
    DatabaseError(String),
}

impl DomainError {
    /// Get an error code string for API responses
    pub fn code(&self) -> &'static str {
        match self {
            Self::FavoriteNotFound(_) => "UNKNOWN_FAVORITE",

            Self::EmptyWord => "WORD_REQUIRED",
            Self::WordTooLong { .. } => "WORD_TOO_LONG",
            Self::WordHasControlCharacter => "INVALID_WORD",
            Self::InvalidNotificationType(_) => "INVALID_NOTIFICATION_TYPE",

            Self::FavoriteAlreadyExists(_) => "FAVORITE_ALREADY_EXISTS",

            Self::DatabaseError(_) => "DATABASE_ERROR",
        }
    }

    /// Check if this is a "not found" error
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::FavoriteNotFound(_))
    }

    /// Check if this is a validation error
    pub fn is_validation(&self) -> bool {
        matches!(
            self,
            Self::EmptyWord
                | Self::WordTooLong { .. }
                | Self::WordHasControlCharacter
                | Self::InvalidNotificationType(_)
        )
    }

    /// Check if this is a conflict error
    pub fn is_conflict(&self) -> bool {
        matches!(self, Self::FavoriteAlreadyExists(_))
    }
}
