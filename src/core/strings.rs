//! Stateless string helpers.
//!
//! Every function here is pure: it borrows its input and returns a freshly
//! built `String`. Positions are counted in `char`s (Unicode scalar values),
//! never in bytes.

use crate::utils::error::{Result, StringToolsError};
use regex::Regex;
use std::sync::LazyLock;

/// Word delimiters that trigger camel-casing in [`get_java_sanitized_name`].
const NAME_DELIMITERS: [char; 3] = ['_', '-', '.'];

const QUOTES: [char; 3] = ['"', '\'', '`'];

/// ASCII punctuation (POSIX `punct`, which also covers symbols such as `$` and `+`)
/// plus every Unicode punctuation code point.
static PUNCTUATION: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"[[:punct:]\p{P}]").expect("punctuation pattern is a valid regex")
});

/// Upper-cases the first character of `s`, leaving the rest untouched.
///
/// The input must not be empty; an empty string yields
/// [`StringToolsError::EmptyInput`]. A first character whose upper-case
/// form spans several characters (`ß` → `SS`) is expanded.
///
/// ```
/// assert_eq!(string_tools::capitalize_first_letter("hello world").unwrap(), "Hello world");
/// assert!(string_tools::capitalize_first_letter("").is_err());
/// ```
pub fn capitalize_first_letter(s: &str) -> Result<String> {
    let mut chars = s.chars();
    let first = chars.next().ok_or_else(|| {
        tracing::debug!("capitalize_first_letter called with an empty string");
        StringToolsError::EmptyInput {
            operation: "capitalize_first_letter",
        }
    })?;

    Ok(first.to_uppercase().chain(chars).collect())
}

/// Returns the zero-based char index of the `n`-th occurrence of `ch` in `s`.
///
/// `n` is 1-based. `None` is returned for `n == 0` and when `ch` occurs
/// fewer than `n` times.
pub fn find_nth_index_of(ch: char, n: usize, s: &str) -> Option<usize> {
    let nth = n.checked_sub(1)?;

    s.chars()
        .enumerate()
        .filter(|&(_, c)| c == ch)
        .nth(nth)
        .map(|(index, _)| index)
}

/// Turns arbitrary text into a camel-cased, punctuation-free identifier.
///
/// The text is lower-cased, the character following each `_`, `-` or `.`
/// is upper-cased, punctuation is stripped and the result is trimmed.
/// A delimiter in last position has nothing to capitalize and is simply
/// dropped with the rest of the punctuation.
///
/// The result is not guaranteed to be a legal Java identifier (it may start
/// with a digit or keep inner spaces).
pub fn get_java_sanitized_name(s: &str) -> String {
    let lowered = s.to_lowercase();
    let mut camel = String::with_capacity(lowered.len());
    let mut capitalize_next = false;

    for c in lowered.chars() {
        if capitalize_next {
            camel.extend(c.to_uppercase());
        } else {
            camel.push(c);
        }
        capitalize_next = NAME_DELIMITERS.contains(&c);
    }

    if capitalize_next {
        tracing::debug!(input = s, "trailing delimiter has no character to capitalize");
    }

    PUNCTUATION.replace_all(&camel, "").trim().to_string()
}

pub fn remove_commas(s: &str) -> String {
    s.replace(',', "")
}

/// Strips double quotes, single quotes and backticks.
pub fn remove_quotes(s: &str) -> String {
    s.chars().filter(|c| !QUOTES.contains(c)).collect()
}

/// Reverses `s` code point by code point.
///
/// Grapheme clusters are not kept together: a combining accent ends up in
/// front of the letter it used to follow.
pub fn reverse(s: &str) -> String {
    s.chars().rev().collect()
}

/// Removes every whitespace character, inner ones included.
pub fn trim_all(s: &str) -> String {
    let collapsed: String = s.chars().filter(|c| !c.is_whitespace()).collect();
    collapsed.trim().to_string()
}
