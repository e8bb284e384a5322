//! Per-node search state
//!
//! Each node owns its chosen words, coverage and candidate pool. Children are
//! derived from a parent rather than mutating it, so sibling branches never see
//! each other's choices.

use crate::core::{LetterSet, Word};

/// A candidate paired with the number of still-missing letters it supplies
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Ranked<'a> {
    pub overlap: u32,
    pub word: &'a Word,
}

/// One node of the search tree
#[derive(Debug, Clone)]
pub struct SearchState<'a> {
    chosen: Vec<&'a Word>,
    coverage: LetterSet,
    depth: usize,
    pool: Vec<&'a Word>,
}

impl<'a> SearchState<'a> {
    /// The root node: nothing chosen, nothing covered, the full pool
    #[must_use]
    pub const fn root(pool: Vec<&'a Word>, max_depth: usize) -> Self {
        Self {
            chosen: Vec::new(),
            coverage: LetterSet::EMPTY,
            depth: max_depth,
            pool,
        }
    }

    /// Words chosen on the path to this node, in pick order
    #[inline]
    #[must_use]
    pub fn chosen(&self) -> &[&'a Word] {
        &self.chosen
    }

    /// Union of the letters of every chosen word
    #[inline]
    #[must_use]
    pub const fn coverage(&self) -> LetterSet {
        self.coverage
    }

    /// Remaining word budget
    #[inline]
    #[must_use]
    pub const fn depth(&self) -> usize {
        self.depth
    }

    /// Words still eligible at this node
    #[inline]
    #[must_use]
    pub fn pool(&self) -> &[&'a Word] {
        &self.pool
    }

    /// Order the pool by how many `needed` letters each word supplies
    ///
    /// Ascending by overlap, then ascending by text. The search pops from the
    /// end, so the strongest candidate (and among equals, the lexicographically
    /// last) is tried first. This order also decides which words each child
    /// keeps, so it must stay exactly as is for results to be reproducible.
    #[must_use]
    pub fn rank(&self, needed: LetterSet) -> Vec<Ranked<'a>> {
        let mut ranking: Vec<Ranked<'a>> = self
            .pool
            .iter()
            .map(|&word| Ranked {
                overlap: word.overlap(needed),
                word,
            })
            .collect();
        ranking.sort_unstable_by(|a, b| {
            a.overlap
                .cmp(&b.overlap)
                .then_with(|| a.word.text().cmp(b.word.text()))
        });
        ranking
    }

    /// Derive the node reached by choosing `word`
    ///
    /// `remaining` is what is left of the parent's ranking after `word` was
    /// popped; it becomes the child's pool.
    #[must_use]
    pub fn child(&self, word: &'a Word, remaining: &[Ranked<'a>]) -> Self {
        let mut chosen = Vec::with_capacity(self.chosen.len() + 1);
        chosen.extend_from_slice(&self.chosen);
        chosen.push(word);

        Self {
            chosen,
            coverage: self.coverage.union(word.letters()),
            depth: self.depth.saturating_sub(1),
            pool: remaining.iter().map(|r| r.word).collect(),
        }
    }
}
