//! Output formatting for CLI commands.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::cli::args::{LadderArgs, OutputFormat};
use crate::error::Result;
use crate::ladder::SearchStats;

/// Results that know how to print themselves for people.
pub trait HumanOutput {
    fn human_lines(&self) -> Vec<String>;
}

/// Result structure for a single ladder lookup.
#[derive(Debug, Serialize, Deserialize)]
pub struct PathResult {
    pub source: String,
    pub target: String,
    pub found: bool,
    pub steps: Option<usize>,
    pub path: Vec<String>,
    pub duration_ms: u64,
}

/// One reachable word in a ladder map.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MapEntry {
    pub word: String,
    pub distance: u32,
    pub predecessor: String,
}

/// Result structure for listing reachable words.
#[derive(Debug, Serialize, Deserialize)]
pub struct MapResult {
    pub source: String,
    pub reachable: usize,
    pub entries: Vec<MapEntry>,
    pub stats: SearchStats,
    pub duration_ms: u64,
}

/// Dictionary statistics.
#[derive(Debug, Serialize, Deserialize)]
pub struct DictionaryStats {
    pub path: String,
    pub total_words: usize,
    pub min_word_length: usize,
    pub words_by_length: BTreeMap<usize, usize>,
}

impl HumanOutput for PathResult {
    fn human_lines(&self) -> Vec<String> {
        if self.found {
            vec![
                format!("Found path: {}", format_ladder(&self.path)),
                format!("Steps: {}", self.steps.unwrap_or(0)),
            ]
        } else {
            vec![format!(
                "No path from '{}' to '{}'",
                self.source, self.target
            )]
        }
    }
}

impl HumanOutput for MapResult {
    fn human_lines(&self) -> Vec<String> {
        let mut lines = vec![
            format!("Words reachable from '{}': {}", self.source, self.reachable),
            String::new(),
        ];
        for entry in &self.entries {
            lines.push(format!(
                "{:>4}  {} <- {}",
                entry.distance, entry.word, entry.predecessor
            ));
        }
        if self.entries.len() < self.reachable {
            lines.push(format!(
                "... {} more",
                self.reachable - self.entries.len()
            ));
        }
        lines.push(String::new());
        lines.push(format!(
            "Expansions: {}, adjacency checks: {}, duplicates skipped: {}",
            self.stats.expansions, self.stats.adjacency_checks, self.stats.duplicates_skipped
        ));
        lines
    }
}

impl HumanOutput for DictionaryStats {
    fn human_lines(&self) -> Vec<String> {
        let mut lines = vec![
            format!("Dictionary: {}", self.path),
            format!(
                "Total words: {} (length >= {})",
                self.total_words, self.min_word_length
            ),
            String::new(),
            "Words by length:".to_string(),
        ];
        for (len, count) in &self.words_by_length {
            lines.push(format!("{len:>4}: {count}"));
        }
        lines
    }
}

/// Output a result in the specified format.
pub fn output_result<T>(message: &str, result: &T, args: &LadderArgs) -> Result<()>
where
    T: Serialize + HumanOutput,
{
    match args.output_format {
        OutputFormat::Human => output_human(message, result, args),
        OutputFormat::Json => output_json(result, args),
    }
}

/// Output in human-readable format.
fn output_human<T: HumanOutput>(message: &str, result: &T, args: &LadderArgs) -> Result<()> {
    if args.verbosity() > 1 {
        println!("{message}");
        println!();
    }

    for line in result.human_lines() {
        println!("{line}");
    }
    Ok(())
}

/// Output in JSON format.
fn output_json<T: Serialize>(result: &T, args: &LadderArgs) -> Result<()> {
    println!("{}", to_json(result, args.pretty)?);
    Ok(())
}

fn to_json<T: Serialize>(result: &T, pretty: bool) -> Result<String> {
    let json = if pretty {
        serde_json::to_string_pretty(result)?
    } else {
        serde_json::to_string(result)?
    };
    Ok(json)
}

/// Join a ladder as `a -> b -> c`.
pub fn format_ladder<S: AsRef<str>>(path: &[S]) -> String {
    path.iter()
        .map(AsRef::as_ref)
        .collect::<Vec<_>>()
        .join(" -> ")
}
