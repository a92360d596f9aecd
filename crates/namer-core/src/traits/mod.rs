//! Ports implemented by the infrastructure layer

mod repositories;

pub use repositories::{
    FavoriteQuery, FavoriteRepository, NotificationQuery, NotificationRepository, RepoResult,
};
