//! Command line argument parsing for the wordladder CLI using clap.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::ladder::{AdjacencyRule, LadderConfig};

/// wordladder - shortest single-letter ladders between dictionary words
#[derive(Parser, Debug, Clone)]
#[command(name = "wordladder")]
#[command(about = "Find shortest word ladders by single-letter insertions and deletions")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(long_about = None)]
pub struct LadderArgs {
    /// Verbosity level (0=quiet, 1=normal, 2=verbose, 3=debug)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Quiet mode (overrides verbose)
    #[arg(short, long)]
    pub quiet: bool,

    /// Output format
    #[arg(short = 'f', long = "format", default_value = "human")]
    pub output_format: OutputFormat,

    /// Pretty-print JSON output
    #[arg(long)]
    pub pretty: bool,

    /// Search configuration file (JSON)
    #[arg(short, long, value_name = "CONFIG_FILE", env = "WORDLADDER_CONFIG")]
    pub config: Option<PathBuf>,

    /// Also treat same-length substitutions as ladder steps
    #[arg(long)]
    pub substitutions: bool,

    /// Scan the whole dictionary for neighbors instead of using the length index
    #[arg(long)]
    pub no_index: bool,

    /// Drop dictionary words shorter than this many characters
    #[arg(long, value_name = "LEN")]
    pub min_length: Option<usize>,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Command,
}

impl LadderArgs {
    /// Get the effective verbosity level
    pub fn verbosity(&self) -> u8 {
        if self.quiet {
            0
        } else {
            match self.verbose {
                0 => 1, // Default to normal
                n => n,
            }
        }
    }

    /// Build the search configuration: the config file if given, then flags
    /// layered on top.
    pub fn ladder_config(&self) -> Result<LadderConfig> {
        let mut config = match &self.config {
            Some(path) => LadderConfig::load_from_file(path)?,
            None => LadderConfig::default(),
        };

        if self.substitutions {
            config.rule = AdjacencyRule::SingleEdit;
        }
        if self.no_index {
            config.use_length_index = false;
        }
        if let Some(len) = self.min_length {
            config.min_word_length = len;
        }

        config.validate()?;
        Ok(config)
    }
}

/// Available CLI commands
#[derive(Subcommand, Debug, Clone)]
pub enum Command {
    /// Find the shortest ladder between two words
    Path(PathArgs),

    /// Show every word reachable from a source word
    Map(MapArgs),

    /// Prompt for dictionary, source and targets on the console
    Interactive(InteractiveArgs),

    /// Show dictionary statistics
    Stats(StatsArgs),
}

/// Arguments for finding a single ladder
#[derive(Parser, Debug, Clone)]
pub struct PathArgs {
    /// Dictionary file, one word per line
    #[arg(value_name = "DICTIONARY")]
    pub dictionary: PathBuf,

    /// Word the ladder starts from
    #[arg(value_name = "SOURCE")]
    pub source: String,

    /// Word the ladder ends at
    #[arg(value_name = "TARGET")]
    pub target: String,
}

/// Arguments for listing reachable words
#[derive(Parser, Debug, Clone)]
pub struct MapArgs {
    /// Dictionary file, one word per line
    #[arg(value_name = "DICTIONARY")]
    pub dictionary: PathBuf,

    /// Word the ladders start from
    #[arg(value_name = "SOURCE")]
    pub source: String,

    /// Only list words at most this many steps away
    #[arg(long)]
    pub max_distance: Option<u32>,

    /// Maximum number of words to list
    #[arg(short, long)]
    pub limit: Option<usize>,
}

/// Arguments for the interactive console
#[derive(Parser, Debug, Clone)]
pub struct InteractiveArgs {
    /// Dictionary file; prompted for when omitted
    #[arg(value_name = "DICTIONARY")]
    pub dictionary: Option<PathBuf>,
}

/// Arguments for dictionary statistics
#[derive(Parser, Debug, Clone)]
pub struct StatsArgs {
    /// Dictionary file, one word per line
    #[arg(value_name = "DICTIONARY")]
    pub dictionary: PathBuf,
}

/// Output formats
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Human-readable output
    Human,
    /// JSON output
    Json,
}
