//! Favorite database model

use chrono::{DateTime, Utc};
use sqlx::FromRow;

/// Database model for favorites table
#[derive(Debug, Clone, FromRow)]
pub struct FavoriteModel {
    pub word: String,
    pub created_at: DateTime<Utc>,
}
