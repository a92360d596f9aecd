//! In-memory implementation of FavoriteRepository
//!
//! Backed by a `DashMap` keyed by word: writes to the same word serialize on
//! the map's shard lock, unrelated words proceed in parallel.

use std::sync::Arc;

use async_trait::async_trait;
use dashmap::mapref::entry::Entry;
use dashmap::DashMap;
use tracing::{debug, instrument};

use namer_core::entities::Favorite;
use namer_core::error::DomainError;
use namer_core::traits::{FavoriteQuery, FavoriteRepository, RepoResult};
use namer_core::value_objects::Word;

/// In-memory implementation of FavoriteRepository
#[derive(Clone, Default)]
pub struct InMemoryFavoriteRepository {
    favorites: Arc<DashMap<Word, Favorite>>,
}

impl InMemoryFavoriteRepository {
    /// Create an empty repository
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored favorites
    pub fn len(&self) -> usize {
        self.favorites.len()
    }

    /// Check if no favorites are stored
    pub fn is_empty(&self) -> bool {
        self.favorites.is_empty()
    }
}

fn newest_first(a: &Favorite, b: &Favorite) -> std::cmp::Ordering {
    b.created_at
        .cmp(&a.created_at)
        .then_with(|| a.word.cmp(&b.word))
}

#[async_trait]
impl FavoriteRepository for InMemoryFavoriteRepository {
    #[instrument(skip(self))]
    async fn find_by_word(&self, word: &Word) -> RepoResult<Option<Favorite>> {
        Ok(self.favorites.get(word).map(|entry| entry.value().clone()))
    }

    #[instrument(skip(self))]
    async fn list(&self, query: &FavoriteQuery) -> RepoResult<Vec<Favorite>> {
        let mut favorites: Vec<Favorite> = self
            .favorites
            .iter()
            .filter(|entry| query.matches(entry.value()))
            .map(|entry| entry.value().clone())
            .collect();

        favorites.sort_by(newest_first);
        Ok(favorites)
    }

    #[instrument(skip(self))]
    async fn insert(&self, favorite: &Favorite) -> RepoResult<()> {
        match self.favorites.entry(favorite.word.clone()) {
            Entry::Occupied(_) => Err(DomainError::FavoriteAlreadyExists(
                favorite.word.to_string(),
            )),
            Entry::Vacant(slot) => {
                slot.insert(favorite.clone());
                debug!(word = %favorite.word, "Favorite stored");
                Ok(())
            }
        }
    }

    #[instrument(skip(self))]
    async fn delete(&self, word: &Word) -> RepoResult<Option<Favorite>> {
        Ok(self.favorites.remove(word).map(|(_, favorite)| favorite))
    }

    #[instrument(skip(self))]
    async fn delete_all(&self) -> RepoResult<Vec<Favorite>> {
        let words: Vec<Word> = self
            .favorites
            .iter()
            .map(|entry| entry.key().clone())
            .collect();

        // Each removal is atomic, so a word removed concurrently is reported once
        let mut removed: Vec<Favorite> = words
            .iter()
            .filter_map(|word| self.favorites.remove(word).map(|(_, favorite)| favorite))
            .collect();

        removed.sort_by(|a, b| a.created_at.cmp(&b.created_at).then_with(|| a.word.cmp(&b.word)));
        Ok(removed)
    }

    async fn health_check(&self) -> RepoResult<()> {
        Ok(())
    }
}
