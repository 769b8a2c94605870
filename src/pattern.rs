// KGram-Search Pattern Decomposition
// Splits wildcard patterns into literal probe grams for the index

use regex::Regex;

/// Split a pattern on `*` into its ordered chunks.
///
/// Chunks may be empty: consecutive, leading, or trailing stars produce
/// empty chunks, and the pattern `"*"` yields two of them.
pub fn split_chunks(pattern: &str) -> Vec<&str> {
    pattern.split('*').collect()
}

/// Contiguous character windows of `len` characters from `s`.
///
/// Windows are measured in characters, not bytes, so multi-byte words
/// produce well-formed grams. A string shorter than `len` (or a `len` of
/// zero) yields no windows.
pub fn kgrams(s: &str, len: usize) -> Vec<&str> {
    if len == 0 {
        return Vec::new();
    }

    // Char boundaries, with the end of the string as the final bound.
    let bounds: Vec<usize> = s
        .char_indices()
        .map(|(pos, _)| pos)
        .chain(std::iter::once(s.len()))
        .collect();
    let char_len = bounds.len() - 1;

    if char_len < len {
        return Vec::new();
    }

    (0..=char_len - len)
        .map(|start| &s[bounds[start]..bounds[start + len]])
        .collect()
}

/// Derive the literal grams to probe the index with for `pattern`.
///
/// Each chunk is split on `?` into literal runs. A run of at most `k`
/// characters is probed whole; a longer run contributes its overlapping
/// length-`k` windows instead, so long chunks keep their pruning power.
/// Every returned gram is therefore literal and at most `k` characters,
/// which means an index miss on any of them proves no word can match.
///
/// An empty result (pattern `"*"`, `"???"`, the empty pattern) tells the
/// planner to fall back to a full vocabulary scan.
pub fn probe_grams(pattern: &str, k: usize) -> Vec<&str> {
    let mut grams = Vec::new();

    for chunk in split_chunks(pattern) {
        for run in chunk.split('?') {
            if run.is_empty() {
                continue;
            }
            if run.chars().count() <= k {
                grams.push(run);
            } else {
                grams.extend(kgrams(run, k));
            }
        }
    }

    grams
}

/// Translate a wildcard pattern into an anchored regex.
///
/// `*` becomes `.*`, `?` becomes `.`, and every other character is
/// escaped and matched literally. Used as an independent oracle for the
/// greedy matcher; the result is compiled once here so callers get a
/// ready [`Regex`].
///
/// # Examples
/// ```
/// use kgram_search::pattern_to_regex;
///
/// let re = pattern_to_regex("he?p*").unwrap();
/// assert_eq!(re.as_str(), "^he.p.*$");
/// assert!(re.is_match("helpers"));
/// ```
pub fn pattern_to_regex(pattern: &str) -> Result<Regex, regex::Error> {
    let mut source = String::with_capacity(pattern.len() + 2);
    source.push('^');

    for ch in pattern.chars() {
        match ch {
            '*' => source.push_str(".*"),
            '?' => source.push('.'),
            ch => source.push_str(&regex::escape(&ch.to_string())),
        }
    }

    source.push('$');
    Regex::new(&source)
}
