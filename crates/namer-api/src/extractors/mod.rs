//! Axum extractors for request handling
//!
//! Custom extractors for body validation and list filters.

mod filters;
mod validated;

pub use filters::{FavoriteFilter, FavoriteFilterParams, NotificationFilter, NotificationFilterParams};
pub use validated::ValidatedJson;
