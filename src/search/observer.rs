//! Hooks into a running search
//!
//! Observers see every node entered, every pruned candidate and every solution.
//! They cannot change the search, only watch it.

use super::solution::Solution;
use super::state::SearchState;
use crate::core::Word;

/// Receives events while the search walks the tree
///
/// All methods default to doing nothing.
pub trait SearchObserver {
    /// Called on entry to every node, before any terminal check
    fn on_node(&mut self, _state: &SearchState<'_>) {}

    /// Called when `word` fails the pruning bound at `state`
    fn on_prune(&mut self, _state: &SearchState<'_>, _word: &Word, _overlap: u32) {}

    /// Called for every completed pangram
    fn on_solution(&mut self, _solution: &Solution) {}
}

impl SearchObserver for () {}

impl<O: SearchObserver + ?Sized> SearchObserver for &mut O {
    fn on_node(&mut self, state: &SearchState<'_>) {
        (**self).on_node(state);
    }

    fn on_prune(&mut self, state: &SearchState<'_>, word: &Word, overlap: u32) {
        (**self).on_prune(state, word, overlap);
    }

    fn on_solution(&mut self, solution: &Solution) {
        (**self).on_solution(solution);
    }
}

impl<A: SearchObserver, B: SearchObserver> SearchObserver for (A, B) {
    fn on_node(&mut self, state: &SearchState<'_>) {
        self.0.on_node(state);
        self.1.on_node(state);
    }

    fn on_prune(&mut self, state: &SearchState<'_>, word: &Word, overlap: u32) {
        self.0.on_prune(state, word, overlap);
        self.1.on_prune(state, word, overlap);
    }

    fn on_solution(&mut self, solution: &Solution) {
        self.0.on_solution(solution);
        self.1.on_solution(solution);
    }
}

/// Counters describing how much of the tree a search visited
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SearchStats {
    /// Nodes entered, the root included
    pub nodes: u64,
    /// Candidates rejected by the pruning bound
    pub prunes: u64,
    /// Pangrams found
    pub solutions: u64,
    /// Most words chosen on any path
    pub deepest: usize,
}

impl SearchObserver for SearchStats {
    fn on_node(&mut self, state: &SearchState<'_>) {
        self.nodes += 1;
        self.deepest = self.deepest.max(state.chosen().len());
    }

    fn on_prune(&mut self, _state: &SearchState<'_>, _word: &Word, _overlap: u32) {
        self.prunes += 1;
    }

    fn on_solution(&mut self, _solution: &Solution) {
        self.solutions += 1;
    }
}
