//! # KGram-Search: Wildcard Word Search Engine
//!
//! Fast `*`/`?` wildcard queries over a fixed vocabulary, backed by a
//! k-gram inverted index that prunes candidates before exact matching.
//!
//! ## How a Query Runs
//!
//! 1. **Decompose** - the pattern is split on `*` into chunks, and each
//!    chunk on `?` into literal runs
//! 2. **Probe** - runs become index grams (long runs are sub-windowed to
//!    length `k`); posting sets are intersected into a candidate set
//! 3. **Verify** - the greedy wildcard matcher checks every candidate
//!    against the original pattern, so the index can never change results
//!
//! Patterns with no usable gram (`"*"`, `"???"`) fall back to scanning
//! the whole vocabulary. Either way the result equals a brute-force scan.
//!
//! ## Pattern Syntax
//!
//! - `*` - any run of characters, including none
//! - `?` - exactly one character
//! - Anything else matches itself; there is no escaping
//!
//! ## Example Usage
//!
//! ```
//! use kgram_search::{Vocabulary, WildcardSearch};
//!
//! let vocab = Vocabulary::new(vec![
//!     "catdog".to_string(),
//!     "category".to_string(),
//!     "dogma".to_string(),
//!     "cat".to_string(),
//! ]);
//! let search = WildcardSearch::new(vocab, 2)?;
//!
//! assert_eq!(search.find("*cat*dog*"), vec!["catdog"]);
//! assert_eq!(search.find("ca?").len(), 1);
//! # Ok::<(), kgram_search::BuildError>(())
//! ```
//!
//! ## Architecture
//!
//! - **Exact Matcher** - linear-time greedy wildcard automaton; the
//!   authoritative filter and the brute-force oracle
//! - **K-Gram Index** - read-only map from substrings to posting sets,
//!   built once per vocabulary
//! - **Query Planner** - pattern decomposition, posting intersection, and
//!   post-filtering, combined in [`WildcardSearch`]
//! - **Vocabulary** - ordered word list with file/reader loading

pub mod index;
pub mod matcher;
pub mod pattern;
pub mod search;
pub mod types;
pub mod vocab;

// Re-export main types and functions for convenience
pub use index::{IndexStats, KGramIndex};
pub use matcher::{scan_matches, wildcard_match};
pub use pattern::{kgrams, pattern_to_regex, probe_grams, split_chunks};
pub use search::WildcardSearch;
pub use types::{BuildError, WordId};
pub use vocab::Vocabulary;

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
