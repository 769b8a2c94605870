// KGram-Search Engine
// Query planning: probe the index, intersect postings, post-filter

use crate::index::{IndexStats, KGramIndex};
use crate::matcher::wildcard_match;
use crate::pattern::probe_grams;
use crate::types::WordId;
use crate::vocab::Vocabulary;
use log::debug;
use rustc_hash::FxHashSet;

/// Wildcard search engine over a fixed vocabulary.
///
/// Owns a [`KGramIndex`] and answers `find` queries with the full
/// pipeline: derive literal probe grams from the pattern, intersect their
/// posting sets into a candidate set, then verify every candidate with
/// the exact matcher. The index only ever prunes; the matcher decides.
pub struct WildcardSearch {
    index: KGramIndex,
}

impl WildcardSearch {
    /// Build an engine over `vocab` with gram lengths `1..=k`.
    ///
    /// # Example
    /// ```
    /// use kgram_search::{Vocabulary, WildcardSearch};
    ///
    /// let vocab = Vocabulary::new(vec!["catdog".into(), "dogma".into()]);
    /// let search = WildcardSearch::new(vocab, 2).unwrap();
    /// assert_eq!(search.find("*cat*dog*"), vec!["catdog"]);
    /// ```
    pub fn new(vocab: Vocabulary, k: usize) -> Result<Self, crate::BuildError> {
        Ok(Self {
            index: KGramIndex::build(vocab.into_words(), k)?,
        })
    }

    /// Wrap an already-built index.
    pub fn from_index(index: KGramIndex) -> Self {
        Self { index }
    }

    /// The underlying index.
    pub fn index(&self) -> &KGramIndex {
        &self.index
    }

    /// All vocabulary words matching `pattern`.
    ///
    /// Returns every word for which the exact matcher accepts the
    /// pattern, equal to a brute-force scan of the vocabulary for any
    /// gram length. Result order is unspecified; duplicates in the
    /// vocabulary that match are all returned.
    pub fn find(&self, pattern: &str) -> Vec<&str> {
        // Step 1: turn the pattern into literal grams the index can serve.
        let grams = probe_grams(pattern, self.index.k());

        // Step 2: intersect posting sets into a candidate set.
        let candidates = self.candidates(&grams);

        // Step 3: the exact matcher has the final word on every candidate.
        let matches: Vec<&str> = match &candidates {
            Some(ids) => ids
                .iter()
                .filter_map(|&id| self.index.word(id))
                .filter(|word| wildcard_match(word, pattern))
                .collect(),
            // No usable gram: scan the whole vocabulary.
            None => self
                .index
                .words()
                .iter()
                .map(String::as_str)
                .filter(|word| wildcard_match(word, pattern))
                .collect(),
        };

        debug!(
            "pattern {:?}: {} probe grams, {} candidates, {} matches",
            pattern,
            grams.len(),
            candidates
                .as_ref()
                .map_or(self.index.word_count(), |ids| ids.len()),
            matches.len()
        );

        matches
    }

    /// Intersection of the posting sets of `grams`, smallest set first.
    ///
    /// `None` means the pattern produced no usable gram and the caller
    /// must scan every word. A gram missing from the index proves that no
    /// word contains that literal run, so the intersection is empty.
    fn candidates(&self, grams: &[&str]) -> Option<FxHashSet<WordId>> {
        let mut sets = Vec::with_capacity(grams.len());
        for gram in grams {
            match self.index.postings(gram) {
                Some(ids) => sets.push(ids),
                None => return Some(FxHashSet::default()),
            }
        }

        if sets.is_empty() {
            return None;
        }

        sets.sort_by_key(|ids| ids.len());
        let (smallest, rest) = (sets[0], &sets[1..]);

        Some(
            smallest
                .iter()
                .copied()
                .filter(|id| rest.iter().all(|ids| ids.contains(id)))
                .collect(),
        )
    }

    /// Size summary of the underlying index.
    pub fn stats(&self) -> IndexStats {
        self.index.stats()
    }
}
