//! # wordladder
//!
//! Shortest word ladders over a dictionary, where each step inserts or
//! deletes a single letter.
//!
//! ## Features
//!
//! - Breadth-first search over the implicit single-edit word graph
//! - Length-bucketed neighbor lookup
//! - Predecessor maps with path reconstruction and distances
//! - Optional substitution steps as a separate adjacency rule
//! - Command line interface with human and JSON output
//!
//! ```
//! use wordladder::dictionary::Dictionary;
//! use wordladder::ladder::find_paths;
//!
//! let dictionary = Dictionary::from_words(["bare", "bar", "bart", "fart"], 3);
//! let paths = find_paths(dictionary.words(), "bare");
//!
//! assert_eq!(paths.path_to("bart").unwrap(), vec!["bare", "bar", "bart"]);
//! ```

pub mod cli;
pub mod dictionary;
pub mod error;
pub mod ladder;

pub mod prelude {
    pub use crate::dictionary::Dictionary;
    pub use crate::error::{LadderError, Result};
    pub use crate::ladder::{AdjacencyRule, LadderConfig, LadderSearch, PathMap, find_paths};
}

// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
