// Integration tests: oracle equivalence of index-backed search and the
// brute-force scan, across gram lengths, corpora, and threads

use std::collections::HashSet;
use std::io::Cursor;

use kgram_search::{scan_matches, Vocabulary, WildcardSearch};
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha20Rng;

fn fixed_corpus() -> Vec<String> {
    "the quick brown fox jumps over the lazy dog
     aardvark catdog category dogma cat concat golf gold goose
     mississippi guarantee guarantees aabb bbaa help hello held"
        .split_whitespace()
        .map(str::to_string)
        .collect()
}

fn pattern_battery() -> Vec<&'static str> {
    vec![
        "*", "", "?", "the", "cat", "*cat*", "*cat*dog*", "gol*", "g*",
        "*o*o*", "he?p", "?o?", "guarantee*", "*ss*ss*", "bb*aa", "*e",
        "q??ck", "*a*a*",
    ]
}

fn assert_oracle_equivalence(words: &[String], k: usize, patterns: &[&str]) {
    let vocab = Vocabulary::new(words.to_vec());
    let search = WildcardSearch::new(vocab, k).expect("engine should build");

    for pattern in patterns {
        let expected: HashSet<&str> = scan_matches(words, pattern).into_iter().collect();
        let found: HashSet<&str> = search.find(pattern).into_iter().collect();
        assert_eq!(
            found, expected,
            "index disagrees with scan for pattern {:?} at k = {}",
            pattern, k
        );
    }
}

// ============ Oracle Equivalence ============

#[test]
fn test_oracle_equivalence_fixed_corpus() {
    let words = fixed_corpus();
    for k in 1..=8 {
        assert_oracle_equivalence(&words, k, &pattern_battery());
    }
}

#[test]
fn test_oracle_equivalence_seeded_corpus() {
    let mut rng = ChaCha20Rng::seed_from_u64(7);
    let words: Vec<String> = (0..2_000)
        .map(|_| {
            let len = rng.gen_range(0..=9);
            (0..len)
                .map(|_| (b'a' + rng.gen_range(0..6u8)) as char)
                .collect()
        })
        .collect();

    // A narrow alphabet makes gram collisions (and so post-filter work)
    // frequent.
    let patterns = ["*ab*", "a?c*", "*aa*bb*", "??", "abc", "*f", "b*d?"];
    for k in [1, 2, 3, 5] {
        assert_oracle_equivalence(&words, k, &patterns);
    }
}

// ============ Loader → Engine Workflow ============

#[test]
fn test_reader_to_search_workflow() {
    let input = Cursor::new("golf gold\n goat dog\tdogma");
    let vocab = Vocabulary::from_reader(input).expect("reader should load");
    assert_eq!(vocab.len(), 5);

    let search = WildcardSearch::new(vocab, 2).expect("engine should build");
    let results: HashSet<&str> = search.find("go*").into_iter().collect();
    assert_eq!(results, HashSet::from(["golf", "gold", "goat"]));
}

// ============ Concurrent Readers ============

#[test]
fn test_parallel_queries_match_serial_results() {
    let words = fixed_corpus();
    let search =
        WildcardSearch::new(Vocabulary::new(words.clone()), 2).expect("engine should build");
    let patterns = pattern_battery();

    let serial: Vec<HashSet<&str>> = patterns
        .iter()
        .map(|p| search.find(p).into_iter().collect())
        .collect();

    // The built index is read-only; shared references may query it from
    // any number of threads without locks.
    std::thread::scope(|scope| {
        let handles: Vec<_> = patterns
            .iter()
            .map(|pattern| {
                let search = &search;
                scope.spawn(move || search.find(pattern).into_iter().collect::<HashSet<_>>())
            })
            .collect();

        for (handle, expected) in handles.into_iter().zip(&serial) {
            let found = handle.join().expect("query thread panicked");
            assert_eq!(&found, expected);
        }
    });
}
