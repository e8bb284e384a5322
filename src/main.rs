//! Pangram Search - CLI
//!
//! Finds word combinations covering the whole alphabet with as few letters as possible.

use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};
use log::info;
use pangram_search::{
    commands::{SearchRequest, analyze_word_list, run_search, run_sweep},
    core::{Alphabet, Word},
    logging::init_logger,
    output::{print_analysis_result, print_search_report, print_sweep},
    search::{PruneMode, SearchConfig},
    wordlists::{
        ANIMALS,
        loader::{load_from_file, sample, words_from_slice},
    },
};
use std::time::Duration;

#[derive(Parser)]
#[command(
    name = "pangram_search",
    about = "Find minimal pangrams: word sets that use every letter of the alphabet",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    #[command(flatten)]
    source: WordSource,

    /// Letters a pangram must cover (default: A-Z)
    #[arg(short, long, global = true)]
    alphabet: Option<String>,

    /// Enable debug logging (`RUST_LOG` overrides)
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Args)]
struct WordSource {
    /// Wordlist: 'animals' (default, built-in) or path to a file with one word per line
    #[arg(short = 'w', long, global = true, default_value = "animals")]
    wordlist: String,

    /// Comma-separated words to use instead of a wordlist
    #[arg(long, global = true, value_delimiter = ',')]
    words: Option<Vec<String>>,

    /// Randomly keep only this many words before searching
    #[arg(long, global = true)]
    sample: Option<usize>,

    /// Seed for --sample
    #[arg(long, global = true, default_value = "0")]
    seed: u64,
}

#[derive(Subcommand)]
enum Commands {
    /// Search the built-in animal list at the default depth
    Demo,

    /// Search a word list for pangrams
    Search {
        /// Maximum number of words per pangram
        #[arg(short, long, default_value_t = SearchConfig::DEFAULT_DEPTH)]
        depth: usize,

        /// Print at most this many pangrams
        #[arg(short = 'n', long)]
        limit: Option<usize>,

        /// Give up after this many milliseconds and print what was found
        #[arg(long)]
        timeout_ms: Option<u64>,

        /// Keep scanning after a candidate fails the pruning bound (same results, slower)
        #[arg(long)]
        exhaustive_prune: bool,

        /// Hide the progress spinner
        #[arg(short, long)]
        quiet: bool,
    },

    /// Show how many words cover each letter, least covered first
    Analyze,

    /// Search every depth from 1 up to a maximum, in parallel
    Sweep {
        /// Deepest word budget to try
        #[arg(short, long, default_value_t = SearchConfig::DEFAULT_DEPTH)]
        max_depth: usize,
    },
}

/// Load words based on the word source flags
///
/// Inline `--words` take precedence over `--wordlist` and are validated
/// strictly; file entries are cleaned instead.
fn load_words(source: &WordSource) -> Result<Vec<Word>> {
    let words = match (&source.words, source.wordlist.as_str()) {
        (Some(inline), _) => inline
            .iter()
            .map(|w| Word::parse(w.trim()).with_context(|| format!("Invalid word '{w}'")))
            .collect::<Result<Vec<_>>>()?,
        (None, "animals") => words_from_slice(ANIMALS),
        (None, path) => {
            load_from_file(path).with_context(|| format!("Failed to read wordlist '{path}'"))?
        }
    };
    info!("Loaded {} words", words.len());

    Ok(match source.sample {
        Some(n) => {
            info!("Sampling {n} words with seed {}", source.seed);
            sample(&words, n, source.seed)
        }
        None => words,
    })
}

fn parse_alphabet(alphabet: Option<&str>) -> Result<Alphabet> {
    alphabet.map_or_else(
        || Ok(Alphabet::english()),
        |letters| Alphabet::from_letters(letters).context("Invalid --alphabet"),
    )
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logger(cli.verbose);

    let words = load_words(&cli.source)?;
    let alphabet = parse_alphabet(cli.alphabet.as_deref())?;

    // Default to Demo mode if no command given
    let command = cli.command.unwrap_or(Commands::Demo);

    match command {
        Commands::Demo => {
            let request = SearchRequest::new(SearchConfig::DEFAULT_DEPTH);
            run_search_command(&words, request, alphabet, None);
        }
        Commands::Search {
            depth,
            limit,
            timeout_ms,
            exhaustive_prune,
            quiet,
        } => {
            let mut request = SearchRequest::new(depth);
            request.timeout = timeout_ms.map(Duration::from_millis);
            request.show_progress = !quiet;
            if exhaustive_prune {
                request.prune = PruneMode::Skip;
            }
            run_search_command(&words, request, alphabet, limit);
        }
        Commands::Analyze => {
            let result = analyze_word_list(&words, alphabet);
            print_analysis_result(&result);
        }
        Commands::Sweep { max_depth } => {
            let summaries = run_sweep(&words, max_depth, alphabet);
            print_sweep(&summaries);
        }
    }

    Ok(())
}

fn run_search_command(
    words: &[Word],
    mut request: SearchRequest,
    alphabet: Alphabet,
    limit: Option<usize>,
) {
    request.alphabet = alphabet;
    let report = run_search(words, &request);
    print_search_report(&report, limit);
}
