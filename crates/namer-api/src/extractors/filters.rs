//! List filter extractors
//!
//! Turn `?search=` and `?notification_type=` query strings into repository
//! queries. Blank values are treated as absent.

use axum::{
    async_trait,
    extract::{FromRequestParts, Query},
    http::request::Parts,
};
use namer_core::traits::{FavoriteQuery, NotificationQuery};
use namer_core::NotificationType;
use serde::Deserialize;

use crate::response::ApiError;

/// Raw favorite list query parameters
#[derive(Debug, Default, Deserialize)]
pub struct FavoriteFilterParams {
    #[serde(default)]
    pub search: Option<String>,
}

/// Raw notification list query parameters
#[derive(Debug, Default, Deserialize)]
pub struct NotificationFilterParams {
    #[serde(default)]
    pub notification_type: Option<String>,
    #[serde(default)]
    pub search: Option<String>,
}

/// Validated favorite filter
#[derive(Debug, Clone, Default)]
pub struct FavoriteFilter(pub FavoriteQuery);

/// Validated notification filter
#[derive(Debug, Clone, Default)]
pub struct NotificationFilter(pub NotificationQuery);

fn non_blank(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty())
}

impl From<FavoriteFilterParams> for FavoriteFilter {
    fn from(params: FavoriteFilterParams) -> Self {
        Self(FavoriteQuery {
            search: non_blank(params.search),
        })
    }
}

impl TryFrom<NotificationFilterParams> for NotificationFilter {
    type Error = ApiError;

    fn try_from(params: NotificationFilterParams) -> Result<Self, Self::Error> {
        let notification_type = non_blank(params.notification_type)
            .map(|raw| {
                raw.parse::<NotificationType>().map_err(|_| {
                    ApiError::invalid_query(format!(
                        "notification_type must be 'like' or 'unlike', got '{raw}'"
                    ))
                })
            })
            .transpose()?;

        Ok(Self(NotificationQuery {
            notification_type,
            search: non_blank(params.search),
        }))
    }
}

#[async_trait]
impl<S> FromRequestParts<S> for FavoriteFilter
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Query(params) = Query::<FavoriteFilterParams>::from_request_parts(parts, state)
            .await
            .map_err(|e| ApiError::invalid_query(e.body_text()))?;

        Ok(FavoriteFilter::from(params))
    }
}

#[async_trait]
impl<S> FromRequestParts<S> for NotificationFilter
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Query(params) = Query::<NotificationFilterParams>::from_request_parts(parts, state)
            .await
            .map_err(|e| ApiError::invalid_query(e.body_text()))?;

        NotificationFilter::try_from(params)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_blank_search_is_absent() {
        let filter = FavoriteFilter::from(FavoriteFilterParams {
            search: Some("  ".to_string()),
        });
        assert!(filter.0.search.is_none());
    }

    #[test]
    fn test_notification_type_parsed() {
        let filter = NotificationFilter::try_from(NotificationFilterParams {
            notification_type: Some("unlike".to_string()),
            search: Some("cat".to_string()),
        })
        .unwrap();
        assert_eq!(filter.0.notification_type, Some(NotificationType::Unlike));
        assert_eq!(filter.0.search.as_deref(), Some("cat"));
    }

    #[test]
    fn test_unknown_notification_type_rejected() {
        let err = NotificationFilter::try_from(NotificationFilterParams {
            notification_type: Some("love".to_string()),
            search: None,
        })
        .unwrap_err();
        assert_eq!(err.error_code(), "INVALID_QUERY_PARAMETER");
    }

    #[test]
    fn test_empty_params() {
        let filter = NotificationFilter::try_from(NotificationFilterParams::default()).unwrap();
        assert_eq!(filter.0, NotificationQuery::default());
    }
}
