//! Breadth-first ladder search over the implicit word graph.
//!
//! Nodes are dictionary words and edges join words one edit apart, so the
//! graph is never materialized: neighbors are found on demand through a
//! [`LengthIndex`] (or a full scan when the index is disabled).
//!
//! # Example
//!
//! ```
//! use wordladder::ladder::find_paths;
//!
//! let words = ["bare", "bar", "bart", "fart"];
//! let paths = find_paths(&words, "bare");
//!
//! assert_eq!(paths.edges(), vec![("bar", "bare"), ("bart", "bar")]);
//! assert_eq!(paths.path_to("bart").unwrap(), vec!["bare", "bar", "bart"]);
//! assert!(paths.path_to("fart").is_err());
//! ```

use std::collections::VecDeque;

use ahash::{AHashMap, AHashSet};

use crate::ladder::config::LadderConfig;
use crate::ladder::edit::AdjacencyRule;
use crate::ladder::index::{LengthIndex, scan_neighbors};
use crate::ladder::path_map::{PathMap, SearchStats};

/// Cost of a word no ladder has reached yet.
const UNREACHED: u32 = u32::MAX;

/// Compute shortest ladders from `source` with the default configuration.
///
/// `source` does not have to be a dictionary word; it is the distance-0 root
/// either way and never appears as a key of the result.
pub fn find_paths<'a, S: AsRef<str>>(words: &'a [S], source: &'a str) -> PathMap {
    LadderSearch::default().run(words, source)
}

/// Where neighbor candidates come from.
enum Neighborhood<'a, S> {
    Indexed(LengthIndex<'a>),
    Scan(&'a [S]),
}

impl<'a, S: AsRef<str>> Neighborhood<'a, S> {
    fn neighbors(&self, word: &str, rule: AdjacencyRule) -> (Vec<&'a str>, usize) {
        match self {
            Neighborhood::Indexed(index) => index.neighbors(word, rule),
            Neighborhood::Scan(words) => scan_neighbors(*words, word, rule),
        }
    }
}

/// Ladder search engine.
#[derive(Debug, Clone, Default)]
pub struct LadderSearch {
    config: LadderConfig,
}

impl LadderSearch {
    /// Create a search with the given configuration.
    pub fn new(config: LadderConfig) -> Self {
        LadderSearch { config }
    }

    pub fn config(&self) -> &LadderConfig {
        &self.config
    }

    /// Run a breadth-first search from `source` over `words`.
    ///
    /// The frontier is seeded with the source followed by its neighbors.
    /// Words may be queued more than once; repeats are dropped when dequeued
    /// so no word is expanded twice. A neighbor's cost and predecessor are
    /// only replaced by a strictly cheaper route.
    pub fn run<'a, S: AsRef<str>>(&self, words: &'a [S], source: &'a str) -> PathMap {
        let rule = self.config.rule;
        let neighborhood = if self.config.use_length_index {
            Neighborhood::Indexed(LengthIndex::build(words))
        } else {
            Neighborhood::Scan(words)
        };

        let mut costs: AHashMap<&'a str, u32> = AHashMap::with_capacity(words.len() + 1);
        for word in words {
            costs.insert(word.as_ref(), UNREACHED);
        }
        costs.insert(source, 0);

        let mut predecessors: AHashMap<&'a str, &'a str> = AHashMap::new();
        let mut visited: AHashSet<&'a str> = AHashSet::with_capacity(costs.len());
        let mut stats = SearchStats::default();

        log::debug!(
            "Ladder search from '{}' over {} words (rule: {}, indexed: {})",
            source,
            words.len(),
            rule.name(),
            self.config.use_length_index
        );

        let mut frontier: VecDeque<&'a str> = VecDeque::new();
        frontier.push_back(source);
        let (seed, checks) = neighborhood.neighbors(source, rule);
        stats.adjacency_checks += checks;
        frontier.extend(seed);
        stats.enqueued = frontier.len();

        while let Some(current) = frontier.pop_front() {
            if !visited.insert(current) {
                stats.duplicates_skipped += 1;
                continue;
            }

            let current_cost = costs.get(current).copied().unwrap_or(UNREACHED);
            if current_cost == UNREACHED {
                // Only neighbors of expanded words are queued, so this is a bug.
                log::error!("Dequeued '{current}' before any ladder reached it");
                continue;
            }
            stats.expansions += 1;
            let candidate_cost = current_cost + 1;

            let (connected, checks) = neighborhood.neighbors(current, rule);
            stats.adjacency_checks += checks;
            log::trace!(
                "Expanding '{current}' at distance {current_cost}: {} neighbors",
                connected.len()
            );

            for &word in &connected {
                if let Some(cost) = costs.get_mut(word)
                    && candidate_cost < *cost
                {
                    *cost = candidate_cost;
                    predecessors.insert(word, current);
                }
            }

            stats.enqueued += connected.len();
            frontier.extend(connected);
        }

        let distances = predecessors
            .keys()
            .map(|&word| (word.to_string(), costs[word]))
            .collect();
        let predecessors = predecessors
            .into_iter()
            .map(|(word, prev)| (word.to_string(), prev.to_string()))
            .collect();

        log::debug!(
            "Ladder search from '{}' done: {} expansions, {} adjacency checks, {} duplicates skipped",
            source,
            stats.expansions,
            stats.adjacency_checks,
            stats.duplicates_skipped
        );

        PathMap::new(source.to_string(), predecessors, distances, stats)
    }
}
