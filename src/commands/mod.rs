//! Command implementations

pub mod analyze;
pub mod search;
pub mod sweep;

pub use analyze::{AnalysisResult, analyze_word_list};
pub use search::{SearchReport, SearchRequest, run_search};
pub use sweep::{DepthSummary, first_solvable, run_sweep};
