//! Command implementations for the wordladder CLI.

use std::io::{self, BufRead, Write};
use std::path::{Path, PathBuf};
use std::time::Instant;

use crate::cli::args::*;
use crate::cli::output::*;
use crate::dictionary::Dictionary;
use crate::error::{LadderError, Result};
use crate::ladder::{LadderConfig, LadderSearch, PathMap};

/// Execute a CLI command.
pub fn execute_command(args: LadderArgs) -> Result<()> {
    let config = args.ladder_config()?;
    match &args.command {
        Command::Path(path_args) => find_path(path_args, &config, &args),
        Command::Map(map_args) => show_map(map_args, &config, &args),
        Command::Interactive(interactive_args) => {
            let stdin = io::stdin();
            let stdout = io::stdout();
            run_interactive(
                stdin.lock(),
                stdout.lock(),
                interactive_args.dictionary.clone(),
                &config,
            )
        }
        Command::Stats(stats_args) => show_stats(stats_args, &config, &args),
    }
}

/// Load a dictionary, refusing files with no usable words.
fn load_dictionary(path: &Path, config: &LadderConfig) -> Result<Dictionary> {
    let dictionary = Dictionary::load_from_file(path, config.min_word_length)?;
    if dictionary.is_empty() {
        return Err(LadderError::dictionary(format!(
            "{} has no words of at least {} characters",
            path.display(),
            config.min_word_length
        )));
    }
    Ok(dictionary)
}

/// Find the shortest ladder between two dictionary words.
fn find_path(args: &PathArgs, config: &LadderConfig, cli_args: &LadderArgs) -> Result<()> {
    let dictionary = load_dictionary(&args.dictionary, config)?;
    dictionary.require(&args.source)?;
    dictionary.require(&args.target)?;

    let start_time = Instant::now();
    let paths = LadderSearch::new(config.clone()).run(dictionary.words(), &args.source);

    let path = match paths.path_to(&args.target) {
        Ok(path) => path,
        Err(e) if e.is_no_path() => Vec::new(),
        Err(e) => return Err(e),
    };
    let found = !path.is_empty();

    output_result(
        "Ladder search complete",
        &PathResult {
            source: args.source.clone(),
            target: args.target.clone(),
            found,
            steps: found.then(|| path.len() - 1),
            path,
            duration_ms: start_time.elapsed().as_millis() as u64,
        },
        cli_args,
    )
}

/// List every word reachable from the source.
fn show_map(args: &MapArgs, config: &LadderConfig, cli_args: &LadderArgs) -> Result<()> {
    let dictionary = load_dictionary(&args.dictionary, config)?;
    dictionary.require(&args.source)?;

    let start_time = Instant::now();
    let paths = LadderSearch::new(config.clone()).run(dictionary.words(), &args.source);
    let duration = start_time.elapsed();

    let mut entries = map_entries(&paths);
    if let Some(max_distance) = args.max_distance {
        entries.retain(|entry| entry.distance <= max_distance);
    }
    let reachable = entries.len();
    if let Some(limit) = args.limit {
        entries.truncate(limit);
    }

    output_result(
        "Ladder map complete",
        &MapResult {
            source: args.source.clone(),
            reachable,
            entries,
            stats: *paths.stats(),
            duration_ms: duration.as_millis() as u64,
        },
        cli_args,
    )
}

/// Reachable words sorted by distance, then alphabetically.
pub fn map_entries(paths: &PathMap) -> Vec<MapEntry> {
    let mut entries: Vec<MapEntry> = paths
        .iter()
        .filter_map(|(word, predecessor)| {
            paths.distance(word).map(|distance| MapEntry {
                word: word.to_string(),
                distance,
                predecessor: predecessor.to_string(),
            })
        })
        .collect();
    entries.sort_by(|a, b| a.distance.cmp(&b.distance).then_with(|| a.word.cmp(&b.word)));
    entries
}

/// Show dictionary statistics.
fn show_stats(args: &StatsArgs, config: &LadderConfig, cli_args: &LadderArgs) -> Result<()> {
    let dictionary = load_dictionary(&args.dictionary, config)?;

    output_result(
        "Dictionary statistics",
        &DictionaryStats {
            path: args.dictionary.to_string_lossy().to_string(),
            total_words: dictionary.len(),
            min_word_length: config.min_word_length,
            words_by_length: dictionary.length_histogram(),
        },
        cli_args,
    )
}

/// Read one trimmed line, or `None` at end of input.
fn prompt<R: BufRead, W: Write>(
    input: &mut R,
    output: &mut W,
    message: &str,
) -> Result<Option<String>> {
    writeln!(output, "{message}")?;
    output.flush()?;

    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Ok(None);
    }
    Ok(Some(line.trim().to_string()))
}

/// Console session: ask for a dictionary and a source word, then answer
/// target words until a blank line or end of input.
///
/// An unreadable dictionary or a source outside the dictionary ends the
/// session with an error. Unknown or unreachable targets are reported and
/// the session continues.
pub fn run_interactive<R: BufRead, W: Write>(
    mut input: R,
    mut output: W,
    dictionary_path: Option<PathBuf>,
    config: &LadderConfig,
) -> Result<()> {
    let dictionary_path = match dictionary_path {
        Some(path) => path,
        None => match prompt(&mut input, &mut output, "Enter the dictionary filename:")? {
            Some(name) if !name.is_empty() => PathBuf::from(name),
            _ => return Err(LadderError::invalid_argument("no dictionary filename given")),
        },
    };
    let dictionary = load_dictionary(&dictionary_path, config)?;

    let source = prompt(&mut input, &mut output, "Enter the source word:")?.unwrap_or_default();
    dictionary.require(&source)?;

    let search = LadderSearch::new(config.clone());
    let paths = search.run(dictionary.words(), &source);
    log::info!("{} words reachable from '{}'", paths.len(), source);

    loop {
        let target = match prompt(&mut input, &mut output, "Enter the target word:")? {
            Some(target) if !target.is_empty() => target,
            _ => break,
        };

        if !dictionary.contains(&target) {
            writeln!(output, "Target not found!")?;
            continue;
        }

        match paths.path_to(&target) {
            Ok(path) => writeln!(output, "Found path: {}", format_ladder(&path))?,
            Err(e) if e.is_no_path() => writeln!(output, "No path to target!")?,
            Err(e) => return Err(e),
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use std::io::{Cursor, Write};

    use tempfile::NamedTempFile;

    use super::*;
    use crate::ladder::find_paths;

    fn dictionary_file() -> NamedTempFile {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "bare\nbar\nbart\nfart\nba").unwrap();
        file
    }

    fn session(input: &str, dictionary: Option<PathBuf>) -> (Result<()>, String) {
        let mut output = Vec::new();
        let result = run_interactive(
            Cursor::new(input.to_string()),
            &mut output,
            dictionary,
            &LadderConfig::default(),
        );
        (result, String::from_utf8(output).unwrap())
    }

    #[test]
    fn test_interactive_session() {
        let file = dictionary_file();
        let input = format!("{}\nbare\nbart\nfart\nzzz\n\n", file.path().display());

        let (result, output) = session(&input, None);
        assert!(result.is_ok());
        assert!(output.contains("Enter the dictionary filename:"));
        assert!(output.contains("Found path: bare -> bar -> bart"));
        assert!(output.contains("No path to target!"));
        assert!(output.contains("Target not found!"));
    }

    #[test]
    fn test_interactive_source_missing() {
        let file = dictionary_file();

        let (result, output) = session("barn\n", Some(file.path().to_path_buf()));
        assert!(matches!(result, Err(LadderError::WordNotFound(ref w)) if w == "barn"));
        assert!(!output.contains("Enter the dictionary filename:"));
    }

    #[test]
    fn test_interactive_short_source_is_filtered() {
        let file = dictionary_file();

        let (result, _) = session("ba\n", Some(file.path().to_path_buf()));
        assert!(matches!(result, Err(LadderError::WordNotFound(_))));
    }

    #[test]
    fn test_interactive_ends_at_eof() {
        let file = dictionary_file();

        let (result, output) = session("bar\nbare", Some(file.path().to_path_buf()));
        assert!(result.is_ok());
        assert!(output.contains("Found path: bar -> bare"));
    }

    #[test]
    fn test_interactive_unreadable_dictionary() {
        let (result, _) = session("/nonexistent/words.txt\n", None);
        assert!(matches!(result, Err(LadderError::Io(_))));
    }

    #[test]
    fn test_empty_dictionary_rejected() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "a\nab").unwrap();

        let err = load_dictionary(file.path(), &LadderConfig::default()).unwrap_err();
        assert!(matches!(err, LadderError::Dictionary(_)));
    }

    #[test]
    fn test_map_entries_sorted() {
        let words = ["bar", "bare", "bart", "barte", "abart"];
        let paths = find_paths(&words, "bar");

        let entries = map_entries(&paths);
        let listed: Vec<(&str, u32)> = entries
            .iter()
            .map(|entry| (entry.word.as_str(), entry.distance))
            .collect();
        assert_eq!(
            listed,
            vec![("bare", 1), ("bart", 1), ("abart", 2), ("barte", 2)]
        );
        assert_eq!(entries[2].predecessor, "bart");
    }
}
