//! The result of a ladder search: a back-pointer map toward the source.

use ahash::AHashMap;
use serde::{Deserialize, Serialize};

use crate::error::{LadderError, Result};

/// Counters collected while a search runs.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchStats {
    /// Words dequeued and expanded. Never exceeds the number of distinct
    /// words plus the source.
    pub expansions: usize,
    /// Calls to the adjacency predicate.
    pub adjacency_checks: usize,
    /// Words pushed onto the frontier, duplicates included.
    pub enqueued: usize,
    /// Frontier entries discarded because the word was already expanded.
    pub duplicates_skipped: usize,
}

/// Shortest-ladder predecessors from a single source word.
///
/// Every reachable word maps to the word one step closer to the source.
/// The source itself is never a key, and unreachable words are absent.
#[derive(Debug, Clone, PartialEq)]
pub struct PathMap {
    source: String,
    predecessors: AHashMap<String, String>,
    distances: AHashMap<String, u32>,
    stats: SearchStats,
}

impl PathMap {
    pub(crate) fn new(
        source: String,
        predecessors: AHashMap<String, String>,
        distances: AHashMap<String, u32>,
        stats: SearchStats,
    ) -> Self {
        PathMap {
            source,
            predecessors,
            distances,
            stats,
        }
    }

    /// The word every ladder in this map starts from.
    pub fn source(&self) -> &str {
        &self.source
    }

    /// The word preceding `word` on a shortest ladder from the source.
    pub fn predecessor(&self, word: &str) -> Option<&str> {
        self.predecessors.get(word).map(String::as_str)
    }

    /// Number of steps from the source, `Some(0)` for the source itself and
    /// `None` when `word` is unreachable.
    pub fn distance(&self, word: &str) -> Option<u32> {
        if word == self.source {
            return Some(0);
        }
        self.distances.get(word).copied()
    }

    /// Whether `word` is reachable (the source counts as reachable).
    pub fn contains(&self, word: &str) -> bool {
        word == self.source || self.predecessors.contains_key(word)
    }

    /// Number of reachable words, not counting the source.
    pub fn len(&self) -> usize {
        self.predecessors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.predecessors.is_empty()
    }

    pub fn stats(&self) -> &SearchStats {
        &self.stats
    }

    pub fn predecessors(&self) -> &AHashMap<String, String> {
        &self.predecessors
    }

    pub fn into_predecessors(self) -> AHashMap<String, String> {
        self.predecessors
    }

    /// Iterate over `(word, predecessor)` pairs in arbitrary order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.predecessors
            .iter()
            .map(|(word, prev)| (word.as_str(), prev.as_str()))
    }

    /// `(word, predecessor)` pairs sorted by word.
    pub fn edges(&self) -> Vec<(&str, &str)> {
        let mut edges: Vec<(&str, &str)> = self.iter().collect();
        edges.sort_unstable();
        edges
    }

    /// A word at the greatest distance from the source. Ties go to the
    /// lexicographically smallest word.
    pub fn farthest(&self) -> Option<(&str, u32)> {
        self.distances
            .iter()
            .map(|(word, &distance)| (word.as_str(), distance))
            .min_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(b.0)))
    }

    /// Reconstruct the ladder from the source to `target`, both included.
    ///
    /// Returns [`LadderError::NoPath`] when `target` is unreachable.
    pub fn path_to(&self, target: &str) -> Result<Vec<String>> {
        if target == self.source {
            return Ok(vec![self.source.clone()]);
        }

        let mut step = self
            .predecessors
            .get(target)
            .ok_or_else(|| LadderError::no_path(&self.source, target))?;
        let mut path = vec![target.to_string()];

        while *step != self.source {
            path.push(step.clone());
            if path.len() > self.predecessors.len() + 1 {
                return Err(LadderError::internal(format!(
                    "predecessor chain from '{target}' does not reach '{}'",
                    self.source
                )));
            }

            let current = step;
            step = self.predecessors.get(current).ok_or_else(|| {
                LadderError::internal(format!("word '{current}' has no predecessor"))
            })?;
        }

        path.push(self.source.clone());
        path.reverse();
        Ok(path)
    }
}
