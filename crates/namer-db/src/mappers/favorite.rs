//! Favorite entity <-> model mapper

use chrono::{DateTime, Utc};
use namer_core::entities::Favorite;
use namer_core::error::DomainError;
use namer_core::value_objects::Word;

use crate::models::FavoriteModel;

/// Convert FavoriteModel to Favorite entity
impl TryFrom<FavoriteModel> for Favorite {
    type Error = DomainError;

    fn try_from(model: FavoriteModel) -> Result<Self, Self::Error> {
        let word = Word::parse(model.word)
            .map_err(|e| DomainError::DatabaseError(format!("invalid stored favorite: {e}")))?;

        Ok(Favorite {
            word,
            created_at: model.created_at,
        })
    }
}

/// Favorite entity values for database insertion
pub struct FavoriteInsert<'a> {
    pub word: &'a str,
    pub created_at: DateTime<Utc>,
}

impl<'a> FavoriteInsert<'a> {
    pub fn new(favorite: &'a Favorite) -> Self {
        Self {
            word: favorite.word.as_str(),
            created_at: favorite.created_at,
        }
    }
}
