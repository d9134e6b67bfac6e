// Core algorithm exports
pub mod engine;
pub mod filters;
pub mod ordering;

pub use engine::{EvaluationResult, QueryEngine, DEFAULT_TRENDING_LIMIT};
pub use filters::{is_recommended, matches_branch, matches_search, matches_status, matches_year};
pub use ordering::sort_results;
