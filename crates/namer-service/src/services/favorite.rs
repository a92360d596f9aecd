//! Favorite service
//!
//! Owns the favorite lifecycle. Every committed creation or deletion is
//! followed by a call to the notification recorder. Recording is best effort:
//! a failure there is logged and never undoes the favorite change.

use namer_core::entities::{Favorite, NotificationType};
use namer_core::error::DomainError;
use namer_core::traits::FavoriteQuery;
use namer_core::value_objects::Word;
use tracing::{debug, info, instrument, warn};

use crate::dto::{AddFavoriteRequest, ClearFavoritesResponse, FavoriteResponse};

use super::context::ServiceContext;
use super::error::{ServiceError, ServiceResult};
use super::notification::NotificationService;

/// Get-or-create passes made before an add gives up on a contended word
pub const ADD_ATTEMPTS: usize = 3;

/// Result of an add request
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AddFavoriteOutcome {
    pub favorite: FavoriteResponse,
    /// `true` only for the request that actually created the row
    pub created: bool,
}

/// Favorite service
pub struct FavoriteService<'a> {
    ctx: &'a ServiceContext,
    recorder: NotificationService<'a>,
}

impl<'a> FavoriteService<'a> {
    /// Create a FavoriteService recording into the context's notification log
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self::with_recorder(ctx, NotificationService::new(ctx))
    }

    /// Create a FavoriteService with an explicit recorder
    pub fn with_recorder(ctx: &'a ServiceContext, recorder: NotificationService<'a>) -> Self {
        Self { ctx, recorder }
    }

    /// Get-or-create a favorite
    ///
    /// Only the call that inserts the row records a `like`. Losing a
    /// uniqueness race re-reads the winner; if that row is already gone the
    /// whole get-or-create is tried again, up to [`ADD_ATTEMPTS`] times.
    #[instrument(skip(self))]
    pub async fn add_favorite(&self, request: AddFavoriteRequest) -> ServiceResult<AddFavoriteOutcome> {
        let word = Word::parse(request.word.ok_or(DomainError::EmptyWord)?)?;
        let repo = self.ctx.favorite_repo();

        for attempt in 1..=ADD_ATTEMPTS {
            if let Some(existing) = repo.find_by_word(&word).await? {
                return Ok(AddFavoriteOutcome {
                    favorite: existing.into(),
                    created: false,
                });
            }

            let favorite = Favorite::new(word.clone());
            match repo.insert(&favorite).await {
                Ok(()) => {
                    info!(word = %favorite.word, "Favorite added");
                    self.notify(NotificationType::Like, &favorite.word).await;

                    return Ok(AddFavoriteOutcome {
                        favorite: favorite.into(),
                        created: true,
                    });
                }
                Err(e) if e.is_conflict() => {
                    debug!(word = %word, attempt, "Lost insert race; re-reading favorite");
                }
                Err(e) => return Err(e.into()),
            }
        }

        warn!(word = %word, attempts = ADD_ATTEMPTS, "Favorite kept changing during add");
        Err(ServiceError::conflict(format!(
            "favorite {word} kept changing while being created"
        )))
    }

    /// Remove a favorite and record an `unlike`
    #[instrument(skip(self))]
    pub async fn remove_favorite(&self, word: &str) -> ServiceResult<()> {
        let word = lookup_word(word)?;

        let removed = self
            .ctx
            .favorite_repo()
            .delete(&word)
            .await?
            .ok_or_else(|| DomainError::FavoriteNotFound(word.to_string()))?;

        info!(word = %removed.word, "Favorite removed");
        self.notify(NotificationType::Unlike, &removed.word).await;

        Ok(())
    }

    /// Get a single favorite by word
    #[instrument(skip(self))]
    pub async fn get_favorite(&self, word: &str) -> ServiceResult<FavoriteResponse> {
        let word = lookup_word(word)?;

        let favorite = self
            .ctx
            .favorite_repo()
            .find_by_word(&word)
            .await?
            .ok_or_else(|| DomainError::FavoriteNotFound(word.to_string()))?;

        Ok(favorite.into())
    }

    /// List favorites, most recently created first
    #[instrument(skip(self))]
    pub async fn list_favorites(&self, query: &FavoriteQuery) -> ServiceResult<Vec<FavoriteResponse>> {
        let favorites = self.ctx.favorite_repo().list(query).await?;
        Ok(favorites.into_iter().map(FavoriteResponse::from).collect())
    }

    /// Remove every favorite, recording one `unlike` per removed word
    #[instrument(skip(self))]
    pub async fn clear_favorites(&self) -> ServiceResult<ClearFavoritesResponse> {
        let removed = self.ctx.favorite_repo().delete_all().await?;

        info!(count = removed.len(), "Favorites cleared");
        for favorite in &removed {
            self.notify(NotificationType::Unlike, &favorite.word).await;
        }

        Ok(ClearFavoritesResponse {
            removed: removed.len(),
        })
    }

    async fn notify(&self, notification_type: NotificationType, word: &Word) {
        if let Err(e) = self.recorder.record(notification_type, word).await {
            warn!(
                error = %e,
                kind = %notification_type,
                word = %word,
                "Failed to record notification; favorite change kept"
            );
        }
    }
}

/// Parse a word used as a lookup key
///
/// A value that can never be stored is reported as not found.
fn lookup_word(raw: &str) -> ServiceResult<Word> {
    Word::parse(raw).map_err(|_| ServiceError::from(DomainError::FavoriteNotFound(raw.to_string())))
}
