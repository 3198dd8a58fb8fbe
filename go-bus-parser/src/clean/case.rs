//! Word casing rules.

use std::sync::LazyLock;

use regex::{Captures, Regex};

use crate::domain::Language;

/// A run of letters, digits and apostrophes.
static WORD: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"[\p{L}\p{N}'’]+").unwrap());

/// Title-case every word written entirely in upper case.
///
/// Words that already contain a lower-case letter, words with digits
/// (`"32A"`, `"1ST"`), single letters, and words in `ignored` are left as
/// they are. Upper-case minor words of `language` that do not start the
/// text are lower-cased instead.
///
/// ```
/// use go_bus_parser::clean::title_case_words;
/// use go_bus_parser::domain::Language;
///
/// let out = title_case_words(Language::English, "OAKVILLE GO STATION", &["GO"]);
/// assert_eq!(out, "Oakville GO Station");
/// ```
pub fn title_case_words(language: Language, text: &str, ignored: &[impl AsRef<str>]) -> String {
    WORD.replace_all(text, |caps: &Captures| {
        let Some(m) = caps.get(0) else {
            return String::new();
        };
        let word = m.as_str();

        if !is_upper_case_word(word) || ignored.iter().any(|w| w.as_ref() == word) {
            return word.to_string();
        }

        let lower = word.to_lowercase();
        if m.start() > 0 && language.minor_words().contains(&lower.as_str()) {
            lower
        } else {
            capitalize(&lower)
        }
    })
    .into_owned()
}

/// Lower-case capitalized minor words of `language` that do not start the text.
pub fn lower_minor_words(language: Language, text: &str) -> String {
    WORD.replace_all(text, |caps: &Captures| {
        let Some(m) = caps.get(0) else {
            return String::new();
        };
        let word = m.as_str();
        let lower = word.to_lowercase();

        if m.start() > 0
            && language.minor_words().contains(&lower.as_str())
            && capitalize(&lower) == word
        {
            lower
        } else {
            word.to_string()
        }
    })
    .into_owned()
}

/// Upper-case the first character, leaving the rest untouched.
pub fn capitalize(text: &str) -> String {
    let mut chars = text.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

fn is_upper_case_word(word: &str) -> bool {
    let mut letters = 0;
    for c in word.chars() {
        if c.is_numeric() || c.is_lowercase() {
            return false;
        }
        if c.is_alphabetic() {
            letters += 1;
        }
    }
    letters >= 2
}

#[cfg(test)]
mod tests {
    use super::*;

    const GO: [&str; 1] = ["GO"];
    const NONE: [&str; 0] = [];

    #[test]
    fn title_cases_upper_case_words() {
        assert_eq!(
            title_case_words(Language::English, "UNION STATION", &NONE),
            "Union Station"
        );
    }

    #[test]
    fn leaves_mixed_case_words() {
        assert_eq!(
            title_case_words(Language::English, "McMaster University", &NONE),
            "McMaster University"
        );
    }

    #[test]
    fn keeps_ignored_words() {
        assert_eq!(
            title_case_words(Language::English, "HAMILTON GO CENTRE", &GO),
            "Hamilton GO Centre"
        );
        assert_eq!(
            title_case_words(Language::English, "HAMILTON GO CENTRE", &NONE),
            "Hamilton Go Centre"
        );
    }

    #[test]
    fn skips_single_letters_and_digits() {
        assert_eq!(
            title_case_words(Language::English, "32A - A DOWNTOWN", &NONE),
            "32A - A Downtown"
        );
        assert_eq!(title_case_words(Language::English, "1ST AVE", &NONE), "1ST Ave");
    }

    #[test]
    fn lower_cases_minor_words_by_language() {
        assert_eq!(
            title_case_words(Language::English, "UNIVERSITY OF TORONTO", &NONE),
            "University of Toronto"
        );
        assert_eq!(
            title_case_words(Language::French, "GARE DE LA VILLE", &NONE),
            "Gare de la Ville"
        );
        // English does not know French articles
        assert_eq!(
            title_case_words(Language::English, "GARE DE LA VILLE", &NONE),
            "Gare De La Ville"
        );
    }

    #[test]
    fn minor_word_at_start_is_capitalized() {
        assert_eq!(
            title_case_words(Language::English, "THE PIT", &NONE),
            "The Pit"
        );
    }

    #[test]
    fn handles_accents_and_apostrophes() {
        assert_eq!(
            title_case_words(Language::French, "ÉCOLE D'ÉTÉ", &NONE),
            "École D'été"
        );
    }

    #[test]
    fn lower_minor_words_only_touches_capitalized_forms() {
        assert_eq!(
            lower_minor_words(Language::French, "Gare De La Ville"),
            "Gare de la Ville"
        );
        assert_eq!(
            lower_minor_words(Language::French, "Le Havre"),
            "Le Havre"
        );
        assert_eq!(
            lower_minor_words(Language::English, "Port Of Spain"),
            "Port of Spain"
        );
        assert_eq!(lower_minor_words(Language::English, "Port OF Spain"), "Port OF Spain");
    }

    #[test]
    fn capitalize_first_char() {
        assert_eq!(capitalize("union"), "Union");
        assert_eq!(capitalize("éxpress"), "Éxpress");
        assert_eq!(capitalize(""), "");
        assert_eq!(capitalize("1st"), "1st");
    }
}
