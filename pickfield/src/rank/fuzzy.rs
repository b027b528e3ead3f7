//! Fuzzy ranking using nucleo-matcher.

use std::collections::HashSet;

use nucleo_matcher::pattern::{AtomKind, CaseMatching, Normalization, Pattern};
use nucleo_matcher::{Config, Matcher, Utf32Str};

use super::{Ranker, is_blank};

/// Subsequence ranker for callers that prefer typo-tolerant matching over
/// the default tiered strategy.
///
/// Results are sorted by score, highest first. Candidates with equal scores
/// keep their original order.
#[derive(Debug, Clone, Copy, Default)]
pub struct FuzzyRanker;

impl Ranker for FuzzyRanker {
    fn rank(&self, query: &str, candidates: &[String]) -> Vec<String> {
        if is_blank(query) {
            return candidates.to_vec();
        }

        let mut matcher = Matcher::new(Config::DEFAULT);
        let pattern = Pattern::new(
            query.trim(),
            CaseMatching::Ignore,
            Normalization::Smart,
            AtomKind::Fuzzy,
        );

        let mut seen: HashSet<&str> = HashSet::new();
        let mut scored: Vec<(&String, u32)> = candidates
            .iter()
            .filter(|candidate| seen.insert(candidate.as_str()))
            .filter_map(|candidate| {
                let mut buf = Vec::new();
                let haystack = Utf32Str::new(candidate, &mut buf);
                pattern
                    .score(haystack, &mut matcher)
                    .map(|score| (candidate, score))
            })
            .collect();

        // Stable sort keeps candidate order among equal scores
        scored.sort_by(|a, b| b.1.cmp(&a.1));

        scored.into_iter().map(|(c, _)| c.clone()).collect()
    }
}
