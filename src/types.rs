// KGram-Search Type Definitions
// Word identifiers and index construction errors

use thiserror::Error;

/// Identifier of a word in the vocabulary.
///
/// Equal to the word's zero-based position in the ordered word list the
/// index was built from. Duplicate words keep distinct identifiers.
pub type WordId = u32;

/// Errors raised while building a [`crate::index::KGramIndex`].
///
/// Construction is all-or-nothing: on error no partial index exists.
/// Querying has no error path of its own.
#[derive(Debug, Clone, Error)]
pub enum BuildError {
    #[error("invalid gram length {actual}: k must be at least 1")]
    InvalidGramLength { actual: usize },

    #[error("vocabulary of {actual} words exceeds the word-id range")]
    VocabularyTooLarge { actual: usize },
}
