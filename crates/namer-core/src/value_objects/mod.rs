//! Value objects - immutable types that represent domain concepts

mod word;

pub use word::{Word, WORD_MAX_LENGTH};
