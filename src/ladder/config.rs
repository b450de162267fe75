//! Configuration for ladder searches.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{LadderError, Result};
use crate::ladder::edit::AdjacencyRule;

/// Shortest dictionary words kept by the default loader. Words of one or two
/// letters connect almost everything and make ladders meaningless.
pub const DEFAULT_MIN_WORD_LENGTH: usize = 3;

/// Configuration for a ladder search and the dictionary feeding it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LadderConfig {
    /// Which edits connect two words.
    pub rule: AdjacencyRule,

    /// Look neighbors up through a length-bucketed index instead of scanning
    /// the whole dictionary for every expansion.
    pub use_length_index: bool,

    /// Words shorter than this (in characters) are dropped when loading a
    /// dictionary. The search itself places no bound on word length.
    pub min_word_length: usize,
}

impl Default for LadderConfig {
    fn default() -> Self {
        Self {
            rule: AdjacencyRule::InsertDelete,
            use_length_index: true,
            min_word_length: DEFAULT_MIN_WORD_LENGTH,
        }
    }
}

impl LadderConfig {
    /// Load a configuration from a JSON file. Missing fields take defaults.
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = fs::read_to_string(path)?;
        let config: LadderConfig = serde_json::from_str(&content)?;
        config.validate()?;
        Ok(config)
    }

    /// Check the configuration for values no dictionary can satisfy.
    pub fn validate(&self) -> Result<()> {
        if self.min_word_length == 0 {
            return Err(LadderError::invalid_config(
                "min_word_length must be at least 1",
            ));
        }
        Ok(())
    }

    /// Set the adjacency rule.
    pub fn rule(mut self, rule: AdjacencyRule) -> Self {
        self.rule = rule;
        self
    }

    /// Enable or disable the length index.
    pub fn use_length_index(mut self, enabled: bool) -> Self {
        self.use_length_index = enabled;
        self
    }

    /// Set the minimum dictionary word length.
    pub fn min_word_length(mut self, len: usize) -> Self {
        self.min_word_length = len;
        self
    }
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use tempfile::NamedTempFile;

    use super::*;

    #[test]
    fn test_default_config() {
        let config = LadderConfig::default();
        assert_eq!(config.rule, AdjacencyRule::InsertDelete);
        assert!(config.use_length_index);
        assert_eq!(config.min_word_length, 3);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_builder_methods() {
        let config = LadderConfig::default()
            .rule(AdjacencyRule::SingleEdit)
            .use_length_index(false)
            .min_word_length(1);
        assert_eq!(config.rule, AdjacencyRule::SingleEdit);
        assert!(!config.use_length_index);
        assert_eq!(config.min_word_length, 1);
    }

    #[test]
    fn test_partial_json_uses_defaults() {
        let config: LadderConfig = serde_json::from_str(r#"{"rule": "single_edit"}"#).unwrap();
        assert_eq!(config.rule, AdjacencyRule::SingleEdit);
        assert!(config.use_length_index);
        assert_eq!(config.min_word_length, 3);
    }

    #[test]
    fn test_load_from_file() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, r#"{{"use_length_index": false, "min_word_length": 4}}"#).unwrap();

        let config = LadderConfig::load_from_file(file.path()).unwrap();
        assert!(!config.use_length_index);
        assert_eq!(config.min_word_length, 4);
    }

    #[test]
    fn test_load_rejects_zero_min_length() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, r#"{{"min_word_length": 0}}"#).unwrap();

        let err = LadderConfig::load_from_file(file.path()).unwrap_err();
        assert!(matches!(err, LadderError::InvalidArgument(_)));
    }

    #[test]
    fn test_load_rejects_malformed_json() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "not json").unwrap();

        let err = LadderConfig::load_from_file(file.path()).unwrap_err();
        assert!(matches!(err, LadderError::Json(_)));
    }
}
