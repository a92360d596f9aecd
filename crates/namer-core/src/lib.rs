//! # namer-core
//!
//! Domain layer containing the favorite and notification entities, the `Word`
//! value object, and the repository traits the store implements.
//! This crate has zero dependencies on infrastructure (database, web framework, etc.).

pub mod entities;
pub mod error;
pub mod traits;
pub mod value_objects;

// Re-export commonly used types at crate root
pub use entities::{Favorite, NewNotification, Notification, NotificationType};
pub use error::DomainError;
pub use traits::{
    FavoriteQuery, FavoriteRepository, NotificationQuery, NotificationRepository, RepoResult,
};
pub use value_objects::{Word, WORD_MAX_LENGTH};
