//! Agency configuration.

use crate::domain::{ColorCode, Language, RouteType, UnsupportedLanguage};

/// Environment variable selecting the label language.
pub const LANGUAGE_ENV: &str = "GO_BUS_LANGUAGE";

/// GO Transit green, from the agency web site.
pub const AGENCY_COLOR: ColorCode = match ColorCode::from_hex(b"387C2B") {
    Some(color) => color,
    None => panic!("agency color must be 6 hex digits"),
};

/// Every GO Transit route handled here is served by bus.
pub const AGENCY_ROUTE_TYPE: RouteType = RouteType::Bus;

/// Configuration for cleaning GO Transit bus data.
#[derive(Debug, Clone)]
pub struct AgencyConfig {
    /// Language whose casing rules apply to labels.
    pub language: Language,

    /// Languages the agency publishes labels in.
    pub supported_languages: Vec<Language>,

    /// Words already cased correctly in the feed, left untouched by
    /// title-casing (e.g. "GO").
    pub ignored_words: Vec<String>,

    /// Color used for the agency itself.
    pub agency_color: ColorCode,
}

impl AgencyConfig {
    /// Create a new configuration with the given language and ignored words.
    pub fn new(language: Language, ignored_words: Vec<String>) -> Self {
        Self {
            language,
            ignored_words,
            ..Self::default()
        }
    }

    /// Default configuration, with the language overridden by
    /// `GO_BUS_LANGUAGE` when it is set.
    pub fn from_env() -> Result<Self, UnsupportedLanguage> {
        let mut config = Self::default();
        if let Ok(code) = std::env::var(LANGUAGE_ENV) {
            config.language = Language::parse(&code)?;
        }
        Ok(config)
    }

    /// Returns true if labels can be produced in `language`.
    pub fn supports(&self, language: Language) -> bool {
        self.supported_languages.contains(&language)
    }
}

impl Default for AgencyConfig {
    fn default() -> Self {
        Self {
            language: Language::English,
            supported_languages: vec![Language::English, Language::French],
            ignored_words: vec!["GO".to_string()],
            agency_color: AGENCY_COLOR,
        }
    }
}
