//! Favorite handlers
//!
//! Endpoints for adding, reading and removing favorite words.

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use namer_service::{AddFavoriteRequest, ClearFavoritesResponse, FavoriteResponse, FavoriteService};

use crate::extractors::{FavoriteFilter, ValidatedJson};
use crate::response::{ApiResult, Created, NoContent};
use crate::state::AppState;

/// Add a favorite (get-or-create)
///
/// POST /favorites
///
/// 201 when the word was newly added, 200 when it already existed.
pub async fn add_favorite(
    State(state): State<AppState>,
    ValidatedJson(request): ValidatedJson<AddFavoriteRequest>,
) -> ApiResult<Response> {
    let service = FavoriteService::new(state.service_context());
    let outcome = service.add_favorite(request).await?;

    let body = Json(outcome.favorite);
    Ok(if outcome.created {
        Created(body).into_response()
    } else {
        (StatusCode::OK, body).into_response()
    })
}

/// List favorites, newest first
///
/// GET /favorites?search=
pub async fn list_favorites(
    State(state): State<AppState>,
    FavoriteFilter(query): FavoriteFilter,
) -> ApiResult<Json<Vec<FavoriteResponse>>> {
    let service = FavoriteService::new(state.service_context());
    let favorites = service.list_favorites(&query).await?;
    Ok(Json(favorites))
}

/// Remove every favorite
///
/// DELETE /favorites
pub async fn clear_favorites(
    State(state): State<AppState>,
) -> ApiResult<Json<ClearFavoritesResponse>> {
    let service = FavoriteService::new(state.service_context());
    let response = service.clear_favorites().await?;
    Ok(Json(response))
}

/// Get a favorite by word
///
/// GET /favorites/{word}
pub async fn get_favorite(
    State(state): State<AppState>,
    Path(word): Path<String>,
) -> ApiResult<Json<FavoriteResponse>> {
    let service = FavoriteService::new(state.service_context());
    let favorite = service.get_favorite(&word).await?;
    Ok(Json(favorite))
}

/// Remove a favorite by word
///
/// DELETE /favorites/{word}
pub async fn remove_favorite(
    State(state): State<AppState>,
    Path(word): Path<String>,
) -> ApiResult<NoContent> {
    let service = FavoriteService::new(state.service_context());
    service.remove_favorite(&word).await?;
    Ok(NoContent)
}
