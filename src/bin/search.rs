// KGram-Search CLI Tool
// Command-line interface for wildcard word search

use std::path::PathBuf;
use std::time::Instant;

use clap::Parser;
use kgram_search::{scan_matches, Vocabulary, WildcardSearch};

/// Wildcard word search - query a word list with `*` and `?` patterns
#[derive(Parser, Debug)]
#[command(name = "kgram-search")]
#[command(about = "Search a word list with * and ? wildcard patterns", long_about = None)]
#[command(version)]
struct Args {
    /// Wildcard pattern: `*` matches any run of characters, `?` exactly one
    #[arg(value_name = "PATTERN")]
    pattern: String,

    /// Word list file (whitespace-separated tokens)
    #[arg(short, long, value_name = "FILE")]
    words: PathBuf,

    /// Maximum gram length for the index
    #[arg(short, long, default_value = "2")]
    k: usize,

    /// Maximum number of results to display
    #[arg(short, long, default_value = "10")]
    limit: usize,

    /// Cross-check the result against a brute-force scan
    #[arg(long)]
    verify: bool,

    /// Show timings and index statistics
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();
    let args = Args::parse();

    if args.verbose {
        println!("🔍 Loading word list from {}...", args.words.display());
    }

    let vocab = Vocabulary::from_file(&args.words)?;
    let word_count = vocab.len();

    let build_start = Instant::now();
    let search = WildcardSearch::new(vocab, args.k)?;
    let build_time = build_start.elapsed();

    if args.verbose {
        let stats = search.stats();
        println!(
            "✅ Indexed {} words into {} grams ({} postings) in {:.3}ms\n",
            stats.word_count,
            stats.gram_count,
            stats.posting_count,
            build_time.as_secs_f64() * 1000.0
        );
        println!("🔎 Searching: {}", args.pattern);
        println!("─────────────────────────────────────────────────\n");
    }

    let query_start = Instant::now();
    let mut matches = search.find(&args.pattern);
    let query_time = query_start.elapsed();

    if args.verify {
        let expected = scan_matches(search.index().words(), &args.pattern);
        let mut expected_sorted = expected.clone();
        let mut found_sorted = matches.clone();
        expected_sorted.sort_unstable();
        found_sorted.sort_unstable();
        if expected_sorted != found_sorted {
            return Err(format!(
                "index result disagrees with brute-force scan: {} vs {} matches",
                matches.len(),
                expected.len()
            )
            .into());
        }
        if args.verbose {
            println!("✅ Verified against brute-force scan\n");
        }
    }

    if matches.is_empty() {
        println!("❌ No matches found.");
        return Ok(());
    }

    matches.sort_unstable();
    let total = matches.len();
    matches.truncate(args.limit);

    println!("✅ Found {} matches:\n", total);
    for (idx, word) in matches.iter().enumerate() {
        println!("{}. {}", idx + 1, word);
    }
    if total > args.limit {
        println!("… and {} more (raise --limit to see them)", total - args.limit);
    }

    if args.verbose {
        println!("\n─────────────────────────────────────────────────");
        println!(
            "✨ Searched {} words in {:.3}ms",
            word_count,
            query_time.as_secs_f64() * 1000.0
        );
    }

    Ok(())
}
