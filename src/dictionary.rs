//! Word lists feeding the ladder search.

use std::collections::BTreeMap;
use std::fs::File;
use std::io::{BufRead, BufReader, Read};
use std::path::Path;

use ahash::AHashSet;

use crate::error::{LadderError, Result};

/// An ordered list of unique words.
///
/// Words are kept exactly as written (case-sensitive, no normalization) in
/// first-seen order. Words shorter than the loader's minimum length are
/// dropped on the way in.
#[derive(Debug, Clone, Default)]
pub struct Dictionary {
    words: Vec<String>,
    lookup: AHashSet<String>,
}

impl Dictionary {
    /// Create a new empty dictionary.
    pub fn new() -> Self {
        Dictionary::default()
    }

    /// Build a dictionary from words, dropping duplicates and words with
    /// fewer than `min_len` characters.
    pub fn from_words<I, S>(words: I, min_len: usize) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut dictionary = Dictionary::new();
        for word in words {
            dictionary.add_word(word.into(), min_len);
        }
        dictionary
    }

    /// Read one word per line. Surrounding whitespace is trimmed and blank
    /// lines are skipped.
    pub fn from_reader<R: Read>(reader: R, min_len: usize) -> Result<Self> {
        let mut dictionary = Dictionary::new();
        let mut skipped = 0;

        for line in BufReader::new(reader).lines() {
            let line = line?;
            let word = line.trim();
            if word.is_empty() {
                continue;
            }
            if !dictionary.add_word(word.to_string(), min_len) {
                skipped += 1;
            }
        }

        log::debug!(
            "Loaded {} words ({} short or duplicate lines skipped)",
            dictionary.len(),
            skipped
        );
        Ok(dictionary)
    }

    /// Load a dictionary from a text file with one word per line.
    pub fn load_from_file<P: AsRef<Path>>(path: P, min_len: usize) -> Result<Self> {
        let path = path.as_ref();
        log::info!("Loading dictionary from {}", path.display());
        let file = File::open(path)?;
        Self::from_reader(file, min_len)
    }

    /// Add a word, returning false if it was too short or already present.
    fn add_word(&mut self, word: String, min_len: usize) -> bool {
        if word.chars().count() < min_len || self.lookup.contains(&word) {
            return false;
        }
        self.lookup.insert(word.clone());
        self.words.push(word);
        true
    }

    /// Check if a word exists in the dictionary.
    pub fn contains(&self, word: &str) -> bool {
        self.lookup.contains(word)
    }

    /// Fail with [`LadderError::WordNotFound`] unless `word` is present.
    pub fn require(&self, word: &str) -> Result<()> {
        if self.contains(word) {
            Ok(())
        } else {
            Err(LadderError::word_not_found(word))
        }
    }

    /// All words in load order.
    pub fn words(&self) -> &[String] {
        &self.words
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    /// Number of words of each length, by ascending length.
    pub fn length_histogram(&self) -> BTreeMap<usize, usize> {
        let mut histogram = BTreeMap::new();
        for word in &self.words {
            *histogram.entry(word.chars().count()).or_insert(0) += 1;
        }
        histogram
    }
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use tempfile::NamedTempFile;

    use super::*;

    #[test]
    fn test_from_reader_filters_short_words() {
        let input = "a\nab\nbar\nbare\n\n  bart  \nfart\r\n";
        let dictionary = Dictionary::from_reader(input.as_bytes(), 3).unwrap();

        assert_eq!(dictionary.words(), &["bar", "bare", "bart", "fart"]);
        assert!(dictionary.contains("bart"));
        assert!(!dictionary.contains("ab"));
    }

    #[test]
    fn test_duplicates_keep_first_occurrence() {
        let dictionary = Dictionary::from_words(["bare", "bar", "bare", "bart"], 3);
        assert_eq!(dictionary.words(), &["bare", "bar", "bart"]);
        assert_eq!(dictionary.len(), 3);
    }

    #[test]
    fn test_case_is_preserved() {
        let dictionary = Dictionary::from_words(["Bare", "bare"], 3);
        assert_eq!(dictionary.len(), 2);
        assert!(dictionary.contains("Bare"));
        assert!(!dictionary.contains("BARE"));
    }

    #[test]
    fn test_require() {
        let dictionary = Dictionary::from_words(["bare"], 3);
        assert!(dictionary.require("bare").is_ok());

        let err = dictionary.require("bar").unwrap_err();
        assert!(matches!(err, LadderError::WordNotFound(ref w) if w == "bar"));
    }

    #[test]
    fn test_length_histogram() {
        let dictionary = Dictionary::from_words(["bar", "bare", "bart", "barely"], 3);
        let histogram = dictionary.length_histogram();

        assert_eq!(histogram.get(&3), Some(&1));
        assert_eq!(histogram.get(&4), Some(&2));
        assert_eq!(histogram.get(&6), Some(&1));
        assert_eq!(histogram.len(), 3);
    }

    #[test]
    fn test_load_from_file() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "bare\nbar\nba\nbart\nfart").unwrap();

        let dictionary = Dictionary::load_from_file(file.path(), 3).unwrap();
        assert_eq!(dictionary.words(), &["bare", "bar", "bart", "fart"]);
    }

    #[test]
    fn test_load_missing_file() {
        let err = Dictionary::load_from_file("/nonexistent/words.txt", 3).unwrap_err();
        assert!(matches!(err, LadderError::Io(_)));
    }

    #[test]
    fn test_empty_dictionary() {
        let dictionary = Dictionary::new();
        assert!(dictionary.is_empty());
        assert!(dictionary.length_histogram().is_empty());
    }
}
