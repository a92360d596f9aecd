//! Entity to model mappers
//!
//! This module provides conversions between domain entities (namer-core) and database models.
//! - `TryFrom<Model> for Entity`: Convert database rows to domain objects, rejecting
//!   rows that no longer satisfy domain invariants
//! - `*Insert` structs: Prepare entity data for database operations

mod favorite;
mod notification;

pub use favorite::FavoriteInsert;
pub use notification::NotificationInsert;
