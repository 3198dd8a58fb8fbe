//! Punctuation, separator and label cleanup rules.

use std::sync::LazyLock;

use regex::{Captures, Regex};

use super::case::{capitalize, lower_minor_words};
use crate::domain::Language;

static AND_WORD: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"(?i)\band\b").unwrap());
static AMPERSANDS: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\s*(?:&(?:amp;)?\s*)+").unwrap());
static AT: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)\s*(?:(?:@|\bat\b)\s*)+").unwrap());
static SLASHES: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\s*(?:/\s*)+").unwrap());
static LEADING_JUNK: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[\s\-/&,.;:]+").unwrap());
static TRAILING_JUNK: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[\s\-/&,.;:]+$").unwrap());
static ORDINAL: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)\b(\d+)(st|nd|rd|th)\b").unwrap());
static NUMBER_WORD: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)\b(?:no\.|number)\s*(\d+)\b").unwrap());
static EMPTY_BRACKETS: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\(\s*\)|\[\s*\]").unwrap());
static SPACES: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\s+").unwrap());
static SPACE_AFTER_OPEN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"([(\[])\s+").unwrap());
static SPACE_BEFORE_CLOSE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\s+([)\],;])").unwrap());

/// Replace the word "and" and `&amp;` with a single spaced `&`.
pub fn clean_and(text: &str) -> String {
    let text = AND_WORD.replace_all(text, "&");
    AMPERSANDS.replace_all(&text, " & ").into_owned()
}

/// Replace the word "at" and `@` with a spaced `/`.
pub fn clean_at(text: &str) -> String {
    AT.replace_all(text, " / ").into_owned()
}

/// Collapse slash runs into a single spaced `/`.
pub fn clean_slashes(text: &str) -> String {
    SLASHES.replace_all(text, " / ").into_owned()
}

/// Drop empty brackets, trim separators from both ends and unwrap fully
/// enclosing brackets.
///
/// Repeats until nothing changes, so `"(- Union -)"` and `"() - Union"`
/// both become `"Union"`.
pub fn clean_bounds(text: &str) -> String {
    let mut current = text.to_string();
    loop {
        let trimmed = EMPTY_BRACKETS.replace_all(&current, "");
        let trimmed = LEADING_JUNK.replace(&trimmed, "");
        let trimmed = TRAILING_JUNK.replace(&trimmed, "");
        let next = unwrap_enclosing(&trimmed).unwrap_or(&*trimmed).to_string();
        if next == current {
            return current;
        }
        current = next;
    }
}

/// Returns the inside of `text` when one bracket pair encloses all of it.
fn unwrap_enclosing(text: &str) -> Option<&str> {
    let (open, close) = match text.chars().next()? {
        '(' => ('(', ')'),
        '[' => ('[', ']'),
        _ => return None,
    };

    let mut depth = 0usize;
    for (i, c) in text.char_indices() {
        if c == open {
            depth += 1;
        } else if c == close {
            depth -= 1;
            if depth == 0 {
                return (i + c.len_utf8() == text.len()).then(|| &text[open.len_utf8()..i]);
            }
        }
    }
    None
}

/// Lower-case ordinal suffixes and turn "No. 5" / "Number 5" into "#5".
pub fn clean_numbers(text: &str) -> String {
    let text = ORDINAL.replace_all(text, |caps: &Captures| {
        format!("{}{}", &caps[1], caps[2].to_lowercase())
    });
    NUMBER_WORD.replace_all(&text, "#${1}").into_owned()
}

/// Final label cleanup: drop empty brackets, collapse whitespace, tighten
/// spacing around brackets and commas, apply `language` casing and
/// capitalize the first character.
pub fn clean_label(language: Language, text: &str) -> String {
    let mut text = text.to_string();
    while EMPTY_BRACKETS.is_match(&text) {
        text = EMPTY_BRACKETS.replace_all(&text, "").into_owned();
    }

    let text = SPACES.replace_all(&text, " ");
    let text = SPACE_AFTER_OPEN.replace_all(&text, "${1}");
    let text = SPACE_BEFORE_CLOSE.replace_all(&text, "${1}");
    let text = lower_minor_words(language, text.trim());
    capitalize(&text)
}
