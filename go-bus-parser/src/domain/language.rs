//! Label language.

use std::fmt;

/// Error returned when parsing an unsupported language code.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unsupported language: {0:?} (expected \"en\" or \"fr\")")]
pub struct UnsupportedLanguage(String);

/// Language whose casing rules apply to cleaned labels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Language {
    #[default]
    English,
    French,
}

impl Language {
    /// Parse a two-letter language code, case-insensitively.
    pub fn parse(s: &str) -> Result<Self, UnsupportedLanguage> {
        match s.trim().to_ascii_lowercase().as_str() {
            "en" => Ok(Language::English),
            "fr" => Ok(Language::French),
            _ => Err(UnsupportedLanguage(s.to_string())),
        }
    }

    /// Returns the two-letter language code.
    pub fn code(&self) -> &'static str {
        match self {
            Language::English => "en",
            Language::French => "fr",
        }
    }

    /// Short words kept lowercase when they appear inside a label.
    pub(crate) fn minor_words(&self) -> &'static [&'static str] {
        match self {
            Language::English => &["of", "the", "for"],
            Language::French => &[
                "de", "du", "des", "la", "le", "les", "et", "au", "aux", "sur",
            ],
        }
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_codes() {
        assert_eq!(Language::parse("en"), Ok(Language::English));
        assert_eq!(Language::parse("FR"), Ok(Language::French));
        assert_eq!(Language::parse(" fr "), Ok(Language::French));
        assert!(Language::parse("de").is_err());
        assert!(Language::parse("").is_err());
    }

    #[test]
    fn code_roundtrip() {
        for lang in [Language::English, Language::French] {
            assert_eq!(Language::parse(lang.code()), Ok(lang));
        }
    }

    #[test]
    fn default_is_english() {
        assert_eq!(Language::default(), Language::English);
    }
}
