//! Response DTOs for API endpoints
//!
//! All response DTOs implement `Serialize` for JSON output.
//! Timestamps are serialized as RFC 3339 strings.

use chrono::{DateTime, Utc};
use serde::Serialize;

use namer_core::NotificationType;

// ============================================================================
// Favorite Responses
// ============================================================================

/// Favorite representation
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FavoriteResponse {
    pub word: String,
    pub created_at: DateTime<Utc>,
}

/// Result of clearing all favorites
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ClearFavoritesResponse {
    /// Number of favorites deleted
    pub removed: usize,
}

// ============================================================================
// Notification Responses
// ============================================================================

/// Notification representation
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NotificationResponse {
    pub id: i64,
    pub notification_type: NotificationType,
    pub word: String,
    pub message: String,
    pub created_at: DateTime<Utc>,
}

// ============================================================================
// Health Responses
// ============================================================================

/// Basic health check response
#[derive(Debug, Clone, Serialize)]
pub struct HealthResponse {
    pub status: String,
    pub timestamp: DateTime<Utc>,
}

impl HealthResponse {
    pub fn healthy() -> Self {
        Self {
            status: "healthy".to_string(),
            timestamp: Utc::now(),
        }
    }
}

/// Readiness check response
#[derive(Debug, Clone, Serialize)]
pub struct ReadinessResponse {
    pub status: String,
    pub timestamp: DateTime<Utc>,
    pub checks: HealthChecks,
}

/// Health check status for each dependency
#[derive(Debug, Clone, Serialize)]
pub struct HealthChecks {
    pub store: String,
}

impl ReadinessResponse {
    pub fn ready(store_healthy: bool) -> Self {
        Self {
            status: if store_healthy { "ready" } else { "not_ready" }.to_string(),
            timestamp: Utc::now(),
            checks: HealthChecks {
                store: if store_healthy { "healthy" } else { "unhealthy" }.to_string(),
            },
        }
    }

    /// Check if every dependency reported healthy
    pub fn is_ready(&self) -> bool {
        self.status == "ready"
    }
}
