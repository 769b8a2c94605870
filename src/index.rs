// KGram-Search Inverted Index
// Maps every substring of length 1..=k of every word to its posting set

use crate::pattern::kgrams;
use crate::types::{BuildError, WordId};
use log::debug;
use rustc_hash::{FxHashMap, FxHashSet};

/// Inverted index from k-grams to posting sets of word identifiers.
///
/// For every word and every gram length from 1 to `k`, each contiguous
/// character window of the word is a key whose posting set contains the
/// word's identifier. The index owns the vocabulary and exposes no
/// mutating methods after construction, so a shared reference can serve
/// any number of concurrent queries without locks.
#[derive(Debug, Clone)]
pub struct KGramIndex {
    /// Maximum gram length stored in the index
    k: usize,

    /// The vocabulary, in load order; position = identifier
    words: Vec<String>,

    /// Gram → set of word identifiers containing that gram
    postings: FxHashMap<String, FxHashSet<WordId>>,
}

impl KGramIndex {
    /// Build an index over `words` with gram lengths `1..=k`.
    ///
    /// Words keep their position as identifier; duplicates stay separate
    /// entries. An empty vocabulary builds an empty index.
    ///
    /// # Errors
    /// [`BuildError::InvalidGramLength`] if `k` is zero, and
    /// [`BuildError::VocabularyTooLarge`] if the word count does not fit
    /// the identifier range. Nothing is built in either case.
    ///
    /// # Example
    /// ```
    /// use kgram_search::KGramIndex;
    ///
    /// let words = vec!["cat".to_string(), "catalog".to_string()];
    /// let index = KGramIndex::build(words, 2).unwrap();
    /// assert_eq!(index.postings("at").map(|ids| ids.len()), Some(2));
    /// ```
    pub fn build(words: Vec<String>, k: usize) -> Result<Self, BuildError> {
        if k == 0 {
            return Err(BuildError::InvalidGramLength { actual: k });
        }
        if u32::try_from(words.len()).is_err() {
            return Err(BuildError::VocabularyTooLarge {
                actual: words.len(),
            });
        }

        let mut postings: FxHashMap<String, FxHashSet<WordId>> = FxHashMap::default();

        for (id, word) in words.iter().enumerate() {
            let id = id as WordId;
            for gram_len in 1..=k {
                for gram in kgrams(word, gram_len) {
                    postings.entry(gram.to_string()).or_default().insert(id);
                }
            }
        }

        debug!(
            "indexed {} words into {} grams (k = {})",
            words.len(),
            postings.len(),
            k
        );

        Ok(Self { k, words, postings })
    }

    /// Posting set for an exact gram key, if the gram was ever indexed.
    ///
    /// Lookup cost depends on the gram, not on the vocabulary size.
    pub fn postings(&self, gram: &str) -> Option<&FxHashSet<WordId>> {
        self.postings.get(gram)
    }

    /// Maximum gram length this index stores.
    pub fn k(&self) -> usize {
        self.k
    }

    /// The vocabulary, in identifier order.
    pub fn words(&self) -> &[String] {
        &self.words
    }

    /// Word for an identifier, if in range.
    pub fn word(&self, id: WordId) -> Option<&str> {
        self.words.get(id as usize).map(String::as_str)
    }

    /// Number of words in the vocabulary.
    pub fn word_count(&self) -> usize {
        self.words.len()
    }

    /// Whether the vocabulary is empty.
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    /// Summary counts for display and logging.
    pub fn stats(&self) -> IndexStats {
        IndexStats {
            word_count: self.words.len(),
            gram_count: self.postings.len(),
            posting_count: self.postings.values().map(|ids| ids.len()).sum(),
        }
    }
}

/// Size summary of a built index.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IndexStats {
    /// Words in the vocabulary
    pub word_count: usize,
    /// Distinct grams across all lengths
    pub gram_count: usize,
    /// Total identifier entries across all posting sets
    pub posting_count: usize,
}
