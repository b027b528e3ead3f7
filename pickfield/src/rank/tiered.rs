//! Three-tier ranking: exact, then prefix, then substring matches.

use std::collections::HashSet;

use log::trace;

use crate::normalize::normalize;

use super::{Ranker, is_blank};

/// Which pass collected a candidate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum MatchTier {
    /// Normalized candidate equals the normalized query.
    Exact,
    /// Normalized candidate starts with the normalized query.
    Prefix,
    /// Normalized candidate contains the normalized query.
    Substring,
}

impl MatchTier {
    const ALL: [MatchTier; 3] = [MatchTier::Exact, MatchTier::Prefix, MatchTier::Substring];

    fn matches(self, candidate: &str, needle: &str) -> bool {
        match self {
            MatchTier::Exact => candidate == needle,
            MatchTier::Prefix => candidate.starts_with(needle),
            MatchTier::Substring => candidate.contains(needle),
        }
    }
}

/// The default ranker.
///
/// Each pass keeps the candidates' original relative order and skips values
/// collected by an earlier pass. A value listed twice in the candidates is
/// only emitted once.
#[derive(Debug, Clone, Copy, Default)]
pub struct TieredRanker;

impl TieredRanker {
    /// Rank and report the tier each result was collected in.
    pub fn rank_with_tiers(&self, query: &str, candidates: &[String]) -> Vec<(String, MatchTier)> {
        let needle = normalize(query);
        let normalized: Vec<String> = candidates.iter().map(|c| normalize(c)).collect();

        let mut seen: HashSet<&str> = HashSet::new();
        let mut results = Vec::new();

        for tier in MatchTier::ALL {
            for (candidate, norm) in candidates.iter().zip(&normalized) {
                if tier.matches(norm, &needle) && seen.insert(candidate.as_str()) {
                    results.push((candidate.clone(), tier));
                }
            }
        }

        trace!(
            "ranked {} of {} candidates for {:?}",
            results.len(),
            candidates.len(),
            query
        );
        results
    }

    /// Tier a single candidate would land in, if any.
    pub fn classify(&self, query: &str, candidate: &str) -> Option<MatchTier> {
        let needle = normalize(query);
        let norm = normalize(candidate);
        MatchTier::ALL
            .into_iter()
            .find(|tier| tier.matches(&norm, &needle))
    }
}

impl Ranker for TieredRanker {
    fn rank(&self, query: &str, candidates: &[String]) -> Vec<String> {
        if is_blank(query) {
            return candidates.to_vec();
        }
        self.rank_with_tiers(query, candidates)
            .into_iter()
            .map(|(candidate, _)| candidate)
            .collect()
    }
}

/// Whether any candidate exactly matches or starts with the trimmed query.
///
/// Used to hide the single-select "add new" row when the typed text already
/// leads to an existing option. An empty normalized query never counts as a
/// prefix of anything.
pub fn has_exact_or_prefix(query: &str, candidates: &[String]) -> bool {
    let needle = normalize(query.trim());
    candidates.iter().map(|c| normalize(c)).any(|norm| {
        norm == needle || (!needle.is_empty() && norm.starts_with(&needle))
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn strings(items: &[&str]) -> Vec<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_tiers_are_ordered() {
        let candidates = strings(&["Cartoon", "Car", "Scary", "Carpet"]);
        let ranked = TieredRanker.rank_with_tiers("car", &candidates);
        assert_eq!(
            ranked,
            vec![
                ("Car".to_string(), MatchTier::Exact),
                ("Cartoon".to_string(), MatchTier::Prefix),
                ("Carpet".to_string(), MatchTier::Prefix),
                ("Scary".to_string(), MatchTier::Substring),
            ]
        );
    }

    #[test]
    fn test_duplicate_candidates_emitted_once() {
        let candidates = strings(&["Oslo", "Oslo", "Osaka"]);
        assert_eq!(
            TieredRanker.rank("os", &candidates),
            strings(&["Oslo", "Osaka"])
        );
    }

    #[test]
    fn test_blank_query_is_identity() {
        let candidates = strings(&["b", "a", "b"]);
        assert_eq!(TieredRanker.rank("   ", &candidates), candidates);
    }

    #[test]
    fn test_classify() {
        assert_eq!(TieredRanker.classify("ny", "Sydney"), Some(MatchTier::Substring));
        assert_eq!(TieredRanker.classify("ny", "New York"), None);
        assert_eq!(TieredRanker.classify("new york", "New-York"), Some(MatchTier::Exact));
    }

    #[test]
    fn test_has_exact_or_prefix() {
        let candidates = strings(&["Apple", "Banana"]);
        assert!(has_exact_or_prefix("  app ", &candidates));
        assert!(has_exact_or_prefix("banana", &candidates));
        assert!(!has_exact_or_prefix("nan", &candidates));
        assert!(!has_exact_or_prefix("!!", &candidates));
    }
}
