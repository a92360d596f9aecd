//! In-memory repositories
//!
//! Process-local implementations of the repository traits. They keep the
//! same contract as the PostgreSQL repositories: `favorites.word` is unique,
//! conflicting inserts fail with `FavoriteAlreadyExists`, and listings are
//! newest first.

mod favorite;
mod notification;

pub use favorite::InMemoryFavoriteRepository;
pub use notification::InMemoryNotificationRepository;
