//! Search configuration

use crate::core::Alphabet;

/// What to do once a candidate fails the pruning bound
///
/// Candidates are tried strongest first, so once one fails every later one in
/// the same node fails too. Both modes produce identical results; `Skip` just
/// keeps checking the rest.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum PruneMode {
    /// Skip the failing candidate and keep scanning the node
    Skip,
    /// Stop scanning the node at the first failing candidate
    #[default]
    Stop,
}

/// Parameters for a pangram search
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SearchConfig {
    /// Maximum number of words in a solution; 0 allows none
    pub max_depth: usize,
    /// Letters every solution must cover
    pub alphabet: Alphabet,
    pub prune: PruneMode,
}

impl SearchConfig {
    /// Default word budget, enough for the animal fixture
    pub const DEFAULT_DEPTH: usize = 6;

    #[must_use]
    pub const fn new(max_depth: usize) -> Self {
        Self {
            max_depth,
            alphabet: Alphabet::english(),
            prune: PruneMode::Stop,
        }
    }

    #[must_use]
    pub const fn with_alphabet(mut self, alphabet: Alphabet) -> Self {
        self.alphabet = alphabet;
        self
    }

    #[must_use]
    pub const fn with_prune(mut self, prune: PruneMode) -> Self {
        self.prune = prune;
        self
    }
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self::new(Self::DEFAULT_DEPTH)
    }
}
