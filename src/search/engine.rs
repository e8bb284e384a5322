//! Depth-bounded pangram search
//!
//! Walks combinations of words, strongest candidate first, and records every
//! combination whose letters cover the alphabet. Each pop permanently removes a
//! word from the pool handed to later siblings, so every unordered combination
//! is visited at most once.

use super::config::{PruneMode, SearchConfig};
use super::observer::{SearchObserver, SearchStats};
use super::solution::{Pangrams, Solution};
use super::state::SearchState;
use crate::core::Word;
use log::debug;
use rustc_hash::FxHashSet;
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

/// Result of a search run
#[derive(Debug, Clone)]
pub struct SearchOutcome {
    /// Every pangram found, sorted by letter count
    pub pangrams: Pangrams,
    pub stats: SearchStats,
    /// True if the run was cancelled; `pangrams` then holds only what was found before
    pub cancelled: bool,
}

/// Pangram search over a borrowed word list
pub struct PangramSearch<'a> {
    words: Vec<&'a Word>,
    config: SearchConfig,
    cancel: Option<Arc<AtomicBool>>,
}

/// Mutable bookkeeping shared by every node of one run
struct Walk<O> {
    observer: O,
    found: Vec<Solution>,
    cancelled: bool,
}

impl<'a> PangramSearch<'a> {
    /// Create a search over `words`
    ///
    /// Words with identical text are collapsed to one candidate, keeping the
    /// first occurrence.
    #[must_use]
    pub fn new(words: &'a [Word], config: SearchConfig) -> Self {
        let mut seen: FxHashSet<&str> = FxHashSet::default();
        let words: Vec<&'a Word> = words.iter().filter(|&w| seen.insert(w.text())).collect();

        Self {
            words,
            config,
            cancel: None,
        }
    }

    /// Stop the search early once `flag` becomes true
    ///
    /// The flag is checked on entry to every node.
    #[must_use]
    pub fn with_cancel(mut self, flag: Arc<AtomicBool>) -> Self {
        self.cancel = Some(flag);
        self
    }

    /// The distinct candidate words
    #[must_use]
    pub fn words(&self) -> &[&'a Word] {
        &self.words
    }

    #[must_use]
    pub const fn config(&self) -> &SearchConfig {
        &self.config
    }

    /// Run the search and return every pangram found
    #[must_use]
    pub fn search(&self) -> Pangrams {
        self.search_with(&mut ()).pangrams
    }

    /// Run the search, reporting progress to `observer`
    pub fn search_with<O: SearchObserver>(&self, observer: &mut O) -> SearchOutcome {
        let root = SearchState::root(self.words.clone(), self.config.max_depth);
        let mut walk = Walk {
            observer: (SearchStats::default(), observer),
            found: Vec::new(),
            cancelled: false,
        };

        self.explore(&root, &mut walk);

        let stats = walk.observer.0;
        debug!(
            "search over {} words at depth {}: {} nodes, {} pruned, {} solutions{}",
            self.words.len(),
            self.config.max_depth,
            stats.nodes,
            stats.prunes,
            stats.solutions,
            if walk.cancelled { " (cancelled)" } else { "" }
        );

        SearchOutcome {
            pangrams: Pangrams::from_unsorted(walk.found),
            stats,
            cancelled: walk.cancelled,
        }
    }

    fn is_cancelled(&self) -> bool {
        self.cancel
            .as_ref()
            .is_some_and(|flag| flag.load(Ordering::Relaxed))
    }

    fn explore<O: SearchObserver>(&self, state: &SearchState<'a>, walk: &mut Walk<O>) {
        if walk.cancelled || self.is_cancelled() {
            walk.cancelled = true;
            return;
        }
        walk.observer.on_node(state);

        let alphabet = self.config.alphabet;
        if alphabet.is_covered_by(state.coverage()) {
            let solution = Solution::from_words(state.chosen());
            walk.observer.on_solution(&solution);
            walk.found.push(solution);
            return;
        }

        if state.depth() == 0 || state.pool().is_empty() {
            return;
        }

        let needed = alphabet.missing(state.coverage());
        let needed_count = needed.len() as usize;
        let mut ranking = state.rank(needed);

        while let Some(candidate) = ranking.pop() {
            // Even if every remaining slot added `overlap` new letters, the gap stays open
            if (candidate.overlap as usize).saturating_mul(state.depth()) < needed_count {
                walk.observer.on_prune(state, candidate.word, candidate.overlap);
                match self.config.prune {
                    PruneMode::Skip => continue,
                    PruneMode::Stop => break,
                }
            }

            let child = state.child(candidate.word, &ranking);
            self.explore(&child, walk);
        }
    }
}

/// Find every pangram of at most `max_depth` words over the English alphabet
///
/// # Examples
/// ```
/// use pangram_search::core::Word;
/// use pangram_search::search::find_pangrams;
///
/// let words = vec![Word::new("ABCDEFGHIJKLM"), Word::new("NOPQRSTUVWXYZ")];
/// let pangrams = find_pangrams(&words, 2);
///
/// assert_eq!(pangrams.len(), 1);
/// assert_eq!(pangrams.as_slice()[0].letter_count(), 26);
/// ```
#[must_use]
pub fn find_pangrams(words: &[Word], max_depth: usize) -> Pangrams {
    PangramSearch::new(words, SearchConfig::new(max_depth)).search()
}
