//! Repository implementations
//!
//! PostgreSQL implementations of the repository traits defined in namer-core.
//! Each repository handles database operations for a specific domain entity.

mod error;
mod favorite;
mod notification;

pub use favorite::PgFavoriteRepository;
pub use notification::PgNotificationRepository;
