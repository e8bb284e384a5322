//! Depth sweep command
//!
//! Runs independent searches for every depth up to a maximum, in parallel, to
//! show the smallest word budget that yields a pangram.

use crate::core::{Alphabet, Word};
use crate::search::{PangramSearch, SearchConfig, Solution};
use rayon::prelude::*;
use std::time::{Duration, Instant};

/// Outcome of the search at one depth
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DepthSummary {
    pub depth: usize,
    pub solutions: usize,
    /// Letter count of the shortest pangram, if any
    pub best_letter_count: Option<usize>,
    /// Words of the shortest pangram, if any
    pub best_words: Vec<String>,
    pub nodes: u64,
    pub duration: Duration,
}

/// Search every depth from 1 to `max_depth`
///
/// Each depth is a separate search, so they run concurrently without sharing
/// any state. Results are ordered by depth.
#[must_use]
pub fn run_sweep(words: &[Word], max_depth: usize, alphabet: Alphabet) -> Vec<DepthSummary> {
    (1..=max_depth)
        .into_par_iter()
        .map(|depth| {
            let start = Instant::now();
            let config = SearchConfig::new(depth).with_alphabet(alphabet);
            let outcome = PangramSearch::new(words, config).search_with(&mut ());
            let shortest = outcome.pangrams.shortest();

            DepthSummary {
                depth,
                solutions: outcome.pangrams.len(),
                best_letter_count: shortest.map(Solution::letter_count),
                best_words: shortest.map(|s| s.words().to_vec()).unwrap_or_default(),
                nodes: outcome.stats.nodes,
                duration: start.elapsed(),
            }
        })
        .collect()
}

/// The shallowest depth with at least one pangram
#[must_use]
pub fn first_solvable(summaries: &[DepthSummary]) -> Option<&DepthSummary> {
    summaries.iter().find(|s| s.solutions > 0)
}
