//! Single-edit adjacency between words.
//!
//! Two words are neighbors on a ladder when one becomes the other by inserting
//! or deleting exactly one character. Same-length substitutions ("bart" to
//! "cart") are not ladder steps under the default rule; [`is_single_edit`]
//! is the separate, opt-in variant that also accepts them.
//!
//! Lengths are measured in `char`s, so multi-byte letters count once.

use serde::{Deserialize, Serialize};

/// Return true iff `b` is `a` with exactly one character inserted or deleted.
///
/// Words whose lengths do not differ by exactly one are never adjacent.
/// The check is symmetric and allocation-free.
///
/// # Examples
///
/// ```
/// use wordladder::ladder::edit::is_adjacent;
///
/// assert!(is_adjacent("bar", "bare"));
/// assert!(is_adjacent("bare", "bar"));
/// assert!(!is_adjacent("bare", "bart"));
/// ```
pub fn is_adjacent(a: &str, b: &str) -> bool {
    let len_a = a.chars().count();
    let len_b = b.chars().count();

    if len_a.abs_diff(len_b) != 1 {
        return false;
    }

    let (long, short) = if len_a > len_b { (a, b) } else { (b, a) };
    let mut short_chars = short.chars().peekable();
    let mut skipped = false;

    for c in long.chars() {
        match short_chars.peek() {
            Some(&s) if s == c => {
                short_chars.next();
            }
            // Mismatch, or the short word already ran out: spend the one skip.
            _ => {
                if skipped {
                    return false;
                }
                skipped = true;
            }
        }
    }

    true
}

/// Return true iff `a` and `b` are exactly one Levenshtein edit apart,
/// counting same-length substitutions as well as insertions and deletions.
///
/// This is the wider adjacency used by [`AdjacencyRule::SingleEdit`].
pub fn is_single_edit(a: &str, b: &str) -> bool {
    let len_a = a.chars().count();
    let len_b = b.chars().count();

    if len_a != len_b {
        return is_adjacent(a, b);
    }

    let mut differences = 0;
    for (x, y) in a.chars().zip(b.chars()) {
        if x != y {
            differences += 1;
            if differences > 1 {
                return false;
            }
        }
    }

    differences == 1
}

/// Which edits connect two words on a ladder.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AdjacencyRule {
    /// One insertion or deletion; lengths differ by exactly one.
    #[default]
    InsertDelete,
    /// Insertion, deletion, or a same-length substitution.
    SingleEdit,
}

impl AdjacencyRule {
    /// Test two words for adjacency under this rule.
    pub fn is_adjacent(&self, a: &str, b: &str) -> bool {
        match self {
            AdjacencyRule::InsertDelete => is_adjacent(a, b),
            AdjacencyRule::SingleEdit => is_single_edit(a, b),
        }
    }

    /// Length differences a neighbor may have relative to the word, in the
    /// order buckets are scanned.
    pub fn length_offsets(&self) -> &'static [isize] {
        match self {
            AdjacencyRule::InsertDelete => &[-1, 1],
            AdjacencyRule::SingleEdit => &[-1, 0, 1],
        }
    }

    /// Get the rule name.
    pub fn name(&self) -> &'static str {
        match self {
            AdjacencyRule::InsertDelete => "insert_delete",
            AdjacencyRule::SingleEdit => "single_edit",
        }
    }
}
