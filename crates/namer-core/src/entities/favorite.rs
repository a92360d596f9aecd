//! Favorite entity - a word the user has marked as favorite

use chrono::{DateTime, Utc};

use super::stored_now;
use crate::value_objects::Word;

/// Favorite entity
///
/// Keyed by `word`; created once and never updated in place.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Favorite {
    pub word: Word,
    pub created_at: DateTime<Utc>,
}

impl Favorite {
    /// Create a new Favorite stamped with the current time
    pub fn new(word: Word) -> Self {
        Self {
            word,
            created_at: stored_now(),
        }
    }
}
