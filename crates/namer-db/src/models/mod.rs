//! Database models - SQLx-compatible structs for PostgreSQL tables

mod favorite;
mod notification;

pub use favorite::FavoriteModel;
pub use notification::NotificationModel;
