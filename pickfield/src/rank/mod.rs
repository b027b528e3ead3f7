//! Option ranking: maps a query and a candidate list to the ordered,
//! duplicate-free list shown in the dropdown.

mod fuzzy;
mod tiered;

pub use fuzzy::FuzzyRanker;
pub use tiered::{MatchTier, TieredRanker, has_exact_or_prefix};

/// Strategy used by the widgets to order candidates for a query.
///
/// Implementations must return a subset of `candidates` without duplicates,
/// and must return `candidates` unchanged when the trimmed query is empty.
pub trait Ranker: Send + Sync {
    /// Rank `candidates` against `query`.
    fn rank(&self, query: &str, candidates: &[String]) -> Vec<String>;
}

/// Rank with the default exact/prefix/substring strategy.
///
/// # Example
///
/// ```
/// let candidates = vec!["Apple".to_string(), "Banana".to_string(), "Grape".to_string()];
/// assert_eq!(pickfield::rank("ap", &candidates), vec!["Apple".to_string()]);
/// ```
pub fn rank(query: &str, candidates: &[String]) -> Vec<String> {
    TieredRanker.rank(query, candidates)
}

/// True when the query should bypass ranking entirely.
pub(crate) fn is_blank(query: &str) -> bool {
    query.trim().is_empty()
}
