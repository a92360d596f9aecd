//! Business logic services
//!
//! `FavoriteService` owns the favorite lifecycle and reports every transition
//! to the `NotificationService` it was composed with.

pub mod context;
pub mod error;
pub mod favorite;
pub mod health;
pub mod notification;

pub use context::ServiceContext;
pub use error::{ServiceError, ServiceResult};
pub use favorite::{AddFavoriteOutcome, FavoriteService};
pub use health::HealthService;
pub use notification::NotificationService;
