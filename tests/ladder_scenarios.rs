use std::io::Write;

use tempfile::NamedTempFile;
use wordladder::dictionary::Dictionary;
use wordladder::error::{LadderError, Result};
use wordladder::ladder::{AdjacencyRule, LadderConfig, LadderSearch, find_paths};

fn write_dictionary(words: &[&str]) -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    for word in words {
        writeln!(file, "{word}").unwrap();
    }
    file
}

#[test]
fn test_bare_bar_bart_fart_regression() -> Result<()> {
    let words = vec!["bare", "bar", "bart", "fart"];

    // From "bare": "fart" is only a substitution away from "bart", so unreachable.
    let paths = find_paths(&words, "bare");
    assert_eq!(paths.edges(), vec![("bar", "bare"), ("bart", "bar")]);
    assert!(!paths.contains("fart"));

    // Re-rooted at "bar", both four-letter neighbors hang off the new root.
    let paths = find_paths(&words, "bar");
    assert_eq!(paths.edges(), vec![("bare", "bar"), ("bart", "bar")]);

    Ok(())
}

#[test]
fn test_file_to_path_end_to_end() -> Result<()> {
    let file = write_dictionary(&[
        "an", "ant", "pant", "pants", "pints", "pint", "pin", "pine", "spine", "a",
    ]);
    let dictionary = Dictionary::load_from_file(file.path(), 3)?;

    // Short words are gone before the search sees them.
    assert!(!dictionary.contains("an"));
    assert!(!dictionary.contains("a"));
    dictionary.require("ant")?;
    dictionary.require("spine")?;

    let paths = find_paths(dictionary.words(), "ant");
    assert_eq!(paths.path_to("pants")?, vec!["ant", "pant", "pants"]);
    assert_eq!(paths.distance("pants"), Some(2));

    // "pint" differs from "pant" by a substitution only.
    let err = paths.path_to("spine").unwrap_err();
    assert!(matches!(err, LadderError::NoPath { .. }));

    let from_pin = find_paths(dictionary.words(), "pin");
    assert_eq!(from_pin.path_to("spine")?, vec!["pin", "pine", "spine"]);
    assert_eq!(from_pin.path_to("pints")?, vec!["pin", "pint", "pints"]);

    Ok(())
}

#[test]
fn test_short_words_change_reachability() {
    // Without the length filter, "an" is the only bridge from "ant" to "and".
    let words = ["ant", "an", "and", "band"];
    let unfiltered = find_paths(&words, "ant");
    assert_eq!(unfiltered.path_to("band").unwrap(), vec!["ant", "an", "and", "band"]);

    let dictionary = Dictionary::from_words(words, 3);
    let filtered = find_paths(dictionary.words(), "ant");
    assert!(filtered.is_empty());
}

#[test]
fn test_source_missing_from_dictionary_is_callers_check() {
    let dictionary = Dictionary::from_words(["bare", "bart"], 3);

    let err = dictionary.require("bar").unwrap_err();
    assert!(matches!(err, LadderError::WordNotFound(_)));

    // The search itself still treats an outside source as the root.
    let paths = find_paths(dictionary.words(), "bar");
    assert_eq!(paths.len(), 2);
    assert_eq!(paths.path_to("bart").unwrap(), vec!["bar", "bart"]);
}

#[test]
fn test_substitution_variant_is_opt_in() {
    let words = ["bare", "bar", "bart", "fart"];

    let default_paths = find_paths(&words, "bare");
    assert!(!default_paths.contains("fart"));

    let search = LadderSearch::new(LadderConfig::default().rule(AdjacencyRule::SingleEdit));
    let paths = search.run(&words, "bare");
    assert_eq!(paths.path_to("fart").unwrap(), vec!["bare", "bart", "fart"]);
    assert_eq!(paths.distance("bar"), Some(1));
}

#[test]
fn test_long_chain_distances() {
    let words: Vec<String> = (1..=8).map(|n| "a".repeat(n)).collect();
    let paths = find_paths(&words, "a");

    for (i, word) in words.iter().enumerate() {
        assert_eq!(paths.distance(word), Some(i as u32));
    }
    let path = paths.path_to("aaaaaaaa").unwrap();
    assert_eq!(path.len(), 8);
    assert_eq!(path.first().map(String::as_str), Some("a"));
    assert_eq!(paths.farthest(), Some(("aaaaaaaa", 7)));
    assert_eq!(paths.stats().expansions, 8);
}
