//! Notification handlers
//!
//! Read-only access to the notification log.

use axum::{extract::State, Json};
use namer_service::{NotificationResponse, NotificationService};

use crate::extractors::NotificationFilter;
use crate::response::ApiResult;
use crate::state::AppState;

/// List notifications, most recent first
///
/// GET /notifications?notification_type=&search=
pub async fn list_notifications(
    State(state): State<AppState>,
    NotificationFilter(query): NotificationFilter,
) -> ApiResult<Json<Vec<NotificationResponse>>> {
    let service = NotificationService::new(state.service_context());
    let notifications = service.list_notifications(&query).await?;
    Ok(Json(notifications))
}
