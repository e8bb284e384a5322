//! Pangram search command
//!
//! Runs one search over a word list and reports the solutions.

use crate::analysis::missing_letters;
use crate::core::{Alphabet, LetterSet, Word};
use crate::search::{
    PangramSearch, Pangrams, PruneMode, SearchConfig, SearchObserver, SearchState, SearchStats,
    Solution,
};
use indicatif::{ProgressBar, ProgressStyle};
use log::{info, warn};
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::mpsc;
use std::thread::{self, JoinHandle};
use std::time::{Duration, Instant};

/// Configuration for a search run
pub struct SearchRequest {
    pub max_depth: usize,
    pub alphabet: Alphabet,
    pub prune: PruneMode,
    /// Cancel the search after this long and keep what was found
    pub timeout: Option<Duration>,
    /// Show a spinner with the live solution count
    pub show_progress: bool,
}

impl SearchRequest {
    #[must_use]
    pub const fn new(max_depth: usize) -> Self {
        Self {
            max_depth,
            alphabet: Alphabet::english(),
            prune: PruneMode::Stop,
            timeout: None,
            show_progress: false,
        }
    }

    const fn config(&self) -> SearchConfig {
        SearchConfig::new(self.max_depth)
            .with_alphabet(self.alphabet)
            .with_prune(self.prune)
    }
}

/// Result of a search run
pub struct SearchReport {
    pub pangrams: Pangrams,
    pub stats: SearchStats,
    /// Distinct words searched
    pub word_count: usize,
    pub max_depth: usize,
    /// Alphabet letters no input word contains; the search is skipped if any
    pub missing: LetterSet,
    pub timed_out: bool,
    pub duration: Duration,
}

/// Spinner showing progress of a running search
struct Spinner {
    bar: ProgressBar,
    solutions: u64,
    nodes: u64,
}

impl Spinner {
    fn new() -> Self {
        let bar = ProgressBar::new_spinner();
        bar.set_style(
            ProgressStyle::default_spinner()
                .template("{spinner:.green} {elapsed} | {msg}")
                .unwrap_or_else(|_| ProgressStyle::default_spinner()),
        );
        bar.enable_steady_tick(Duration::from_millis(100));

        Self {
            bar,
            solutions: 0,
            nodes: 0,
        }
    }

    fn refresh(&self) {
        self.bar.set_message(format!(
            "{} nodes, {} pangrams",
            self.nodes, self.solutions
        ));
    }
}

impl SearchObserver for Spinner {
    fn on_node(&mut self, _state: &SearchState<'_>) {
        self.nodes += 1;
        if self.nodes.is_multiple_of(4096) {
            self.refresh();
        }
    }

    fn on_solution(&mut self, _solution: &Solution) {
        self.solutions += 1;
        self.refresh();
    }
}

/// Wait for the timeout thread, warning if it panicked
///
/// Returns true if the thread finished normally.
fn join_timer(timer: JoinHandle<()>) -> bool {
    let joined = timer.join().is_ok();
    if !joined {
        warn!("Timeout thread panicked; the time limit may not have been enforced");
    }
    joined
}

/// Search `words` for pangrams
///
/// Logs a warning and returns an empty report straight away when some
/// alphabet letter appears in no word at all.
#[must_use]
pub fn run_search(words: &[Word], request: &SearchRequest) -> SearchReport {
    let start = Instant::now();
    let search = PangramSearch::new(words, request.config());
    let word_count = search.words().len();

    let missing = missing_letters(words, request.alphabet);
    if !missing.is_empty() {
        warn!("No word contains {missing}; skipping search");
        return SearchReport {
            pangrams: Pangrams::default(),
            stats: SearchStats::default(),
            word_count,
            max_depth: request.max_depth,
            missing,
            timed_out: false,
            duration: start.elapsed(),
        };
    }

    info!(
        "Searching {word_count} words for pangrams of at most {} words",
        request.max_depth
    );

    let cancel = Arc::new(AtomicBool::new(false));
    let search = search.with_cancel(Arc::clone(&cancel));

    // The timer thread exits as soon as `done` is dropped
    let (done, finished) = mpsc::channel::<()>();
    let timer = request.timeout.map(|timeout| {
        let cancel = Arc::clone(&cancel);
        thread::spawn(move || {
            if let Err(mpsc::RecvTimeoutError::Timeout) = finished.recv_timeout(timeout) {
                cancel.store(true, Ordering::Relaxed);
            }
        })
    });

    let outcome = if request.show_progress {
        let mut spinner = Spinner::new();
        let outcome = search.search_with(&mut spinner);
        spinner.bar.finish_and_clear();
        outcome
    } else {
        search.search_with(&mut ())
    };

    drop(done);
    if let Some(timer) = timer {
        join_timer(timer);
    }

    if outcome.cancelled {
        warn!("Search timed out; results are incomplete");
    }

    SearchReport {
        pangrams: outcome.pangrams,
        stats: outcome.stats,
        word_count,
        max_depth: request.max_depth,
        missing,
        timed_out: outcome.cancelled,
        duration: start.elapsed(),
    }
}
