//! Formatting utilities for terminal output

use crate::search::Solution;

/// Format a solution as `(<count>) <word>, <word>, ...`
#[must_use]
pub fn format_solution(solution: &Solution) -> String {
    solution.to_string()
}

/// Format a 1-based rank with right alignment for `total` entries
#[must_use]
pub fn format_rank(rank: usize, total: usize) -> String {
    let width = total.max(1).to_string().len();
    format!("{rank:>width$}.")
}

/// Create a progress bar string
#[must_use]
pub fn create_progress_bar(value: f64, max: f64, width: usize) -> String {
    if max <= 0.0 {
        return "░".repeat(width);
    }

    // Cast is safe: values are clamped to [0, width]
    let filled = ((value / max) * width as f64) as usize;
    let filled = filled.min(width);

    format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
}

/// Bar showing how many words contain a letter, relative to the best-covered letter
#[must_use]
pub fn coverage_bar(count: usize, max_count: usize, width: usize) -> String {
    create_progress_bar(count as f64, max_count as f64, width)
}
