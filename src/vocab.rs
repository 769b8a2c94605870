// KGram-Search Vocabulary
// Ordered word list and the loading collaborators around the core

use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::Path;

/// An ordered, duplicate-preserving word list.
///
/// The core treats word order as identity: a word's position becomes its
/// identifier when an index is built over it. Loading, tokenization, and
/// file access live here, outside the index and planner.
#[derive(Debug, Clone, Default)]
pub struct Vocabulary {
    words: Vec<String>,
}

impl Vocabulary {
    /// Wrap an already-ordered word list.
    pub fn new(words: Vec<String>) -> Self {
        Self { words }
    }

    /// Read whitespace-separated tokens from a reader, in order.
    ///
    /// Tokens are split on any run of whitespace, across lines. An empty
    /// input yields an empty vocabulary.
    pub fn from_reader<R: BufRead>(reader: R) -> io::Result<Self> {
        let mut words = Vec::new();
        for line in reader.lines() {
            let line = line?;
            words.extend(line.split_whitespace().map(str::to_string));
        }
        Ok(Self { words })
    }

    /// Read a word file from disk.
    pub fn from_file<P: AsRef<Path>>(path: P) -> io::Result<Self> {
        let file = File::open(path)?;
        Self::from_reader(BufReader::new(file))
    }

    /// The words, in load order.
    pub fn words(&self) -> &[String] {
        &self.words
    }

    /// Consume the vocabulary, yielding the word list for an index build.
    pub fn into_words(self) -> Vec<String> {
        self.words
    }

    /// Number of words, duplicates included.
    pub fn len(&self) -> usize {
        self.words.len()
    }

    /// Whether the vocabulary holds no words.
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}
