//! Length-bucketed view of a dictionary.
//!
//! Any ladder neighbor of a word has a length within one of the word's own,
//! so neighbor lookup only has to scan a couple of buckets instead of the
//! whole dictionary.

use ahash::AHashMap;

use crate::ladder::edit::AdjacencyRule;

/// Words grouped by their length in `char`s.
///
/// Borrows from the dictionary and keeps the dictionary's order inside each
/// bucket. Built once per search and read-only afterwards.
#[derive(Debug, Clone, Default)]
pub struct LengthIndex<'a> {
    buckets: AHashMap<usize, Vec<&'a str>>,
    total: usize,
}

impl<'a> LengthIndex<'a> {
    /// Build the index from a sequence of words.
    pub fn build<I, S>(words: I) -> Self
    where
        I: IntoIterator<Item = &'a S>,
        S: AsRef<str> + ?Sized + 'a,
    {
        let mut buckets: AHashMap<usize, Vec<&'a str>> = AHashMap::new();
        let mut total = 0;

        for word in words {
            let word = word.as_ref();
            buckets.entry(word.chars().count()).or_default().push(word);
            total += 1;
        }

        LengthIndex { buckets, total }
    }

    /// Words of exactly `len` characters, or an empty slice.
    pub fn bucket(&self, len: usize) -> &[&'a str] {
        self.buckets.get(&len).map(Vec::as_slice).unwrap_or(&[])
    }

    /// All lengths present, ascending.
    pub fn lengths(&self) -> Vec<usize> {
        let mut lengths: Vec<usize> = self.buckets.keys().copied().collect();
        lengths.sort_unstable();
        lengths
    }

    /// Number of indexed words, duplicates included.
    pub fn len(&self) -> usize {
        self.total
    }

    pub fn is_empty(&self) -> bool {
        self.total == 0
    }

    /// Dictionary words adjacent to `word` under `rule`.
    ///
    /// Returns the number of adjacency tests performed alongside the matches.
    pub fn neighbors(&self, word: &str, rule: AdjacencyRule) -> (Vec<&'a str>, usize) {
        let len = word.chars().count();
        let mut found = Vec::new();
        let mut checks = 0;

        for &offset in rule.length_offsets() {
            let Some(bucket_len) = len.checked_add_signed(offset) else {
                continue;
            };
            for &candidate in self.bucket(bucket_len) {
                checks += 1;
                if rule.is_adjacent(word, candidate) {
                    found.push(candidate);
                }
            }
        }

        (found, checks)
    }
}

/// Unindexed neighbor lookup: test `word` against every dictionary entry.
///
/// Produces the same neighbor set as [`LengthIndex::neighbors`], in
/// dictionary order rather than bucket order.
pub fn scan_neighbors<'a, S>(
    words: &'a [S],
    word: &str,
    rule: AdjacencyRule,
) -> (Vec<&'a str>, usize)
where
    S: AsRef<str>,
{
    let found = words
        .iter()
        .map(AsRef::as_ref)
        .filter(|candidate| rule.is_adjacent(word, candidate))
        .collect();

    (found, words.len())
}
