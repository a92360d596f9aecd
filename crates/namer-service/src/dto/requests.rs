//! Request DTOs for API endpoints
//!
//! All request DTOs implement `Deserialize` and `Validate` for input validation.

use serde::Deserialize;
use validator::Validate;

/// Add favorite request
///
/// `word` is optional at the serde level so that a missing field, a JSON
/// `null` and an empty string are all reported as validation errors.
#[derive(Debug, Clone, Default, Deserialize, Validate)]
pub struct AddFavoriteRequest {
    #[validate(
        required(message = "The word field is required"),
        length(min = 1, max = 100, message = "Word must be 1-100 characters")
    )]
    pub word: Option<String>,
}

impl AddFavoriteRequest {
    pub fn new(word: impl Into<String>) -> Self {
        Self {
            word: Some(word.into()),
        }
    }
}
