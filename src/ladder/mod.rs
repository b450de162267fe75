//! Shortest word ladders.
//!
//! A ladder is a chain of dictionary words where each word is one letter
//! insertion or deletion away from the next. [`find_paths`] runs a
//! breadth-first search from a source word and returns a [`PathMap`] from
//! every reachable word back toward the source.

pub mod config;
pub mod edit;
pub mod index;
pub mod path_map;
pub mod search;

// Re-export commonly used types
pub use config::*;
pub use edit::*;
pub use index::*;
pub use path_map::*;
pub use search::*;
