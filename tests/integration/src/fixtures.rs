//! Test fixtures and data generators
//!
//! Provides reusable request and response shapes for integration tests.

use serde::{Deserialize, Serialize};
use std::sync::atomic::{AtomicU64, Ordering};

/// Counter for unique test data
static COUNTER: AtomicU64 = AtomicU64::new(1);

/// Get a unique suffix for test data
pub fn unique_suffix() -> u64 {
    COUNTER.fetch_add(1, Ordering::SeqCst)
}

/// Add favorite request
#[derive(Debug, Serialize)]
pub struct AddFavoriteRequest {
    pub word: String,
}

impl AddFavoriteRequest {
    pub fn new(word: impl Into<String>) -> Self {
        Self { word: word.into() }
    }

    /// A word no other test in this process uses
    pub fn unique() -> Self {
        Self::new(format!("word-{}-{}", std::process::id(), unique_suffix()))
    }
}

/// Favorite response
#[derive(Debug, Deserialize)]
pub struct FavoriteResponse {
    pub word: String,
    pub created_at: String,
}

/// Notification response
#[derive(Debug, Deserialize)]
pub struct NotificationResponse {
    pub id: i64,
    pub notification_type: String,
    pub word: String,
    pub message: String,
    pub created_at: String,
}

/// Clear favorites response
#[derive(Debug, Deserialize)]
pub struct ClearFavoritesResponse {
    pub removed: usize,
}

/// Error response body
#[derive(Debug, Deserialize)]
pub struct ErrorBody {
    pub error: ErrorDetail,
}

/// Error detail
#[derive(Debug, Deserialize)]
pub struct ErrorDetail {
    pub code: String,
    pub message: String,
}
