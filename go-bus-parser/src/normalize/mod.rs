//! Trip headsign and stop name normalization.
//!
//! Both pipelines are built once from an [`AgencyConfig`] and reused for
//! every record. They never fail: text a step does not recognise passes
//! through unchanged.

mod pipeline;

use std::sync::{Arc, LazyLock};

use regex::Regex;

pub use pipeline::{Pipeline, Step};

use crate::clean;
use crate::config::AgencyConfig;

/// Leading route number with optional branch letter, then " - " (e.g. "32A - ").
static ROUTE_PREFIX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)^\d{2,3}([a-z]?)(\s+)- ").unwrap());

/// Terminal vocabulary following a word.
static BUS_TERMINAL: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)\s+(?:bus\s+(?:loop|terminal|term)|terminal|term)\b\.?").unwrap()
});

/// A standalone dash at either end.
static EDGE_DASH: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\s*-\s*|\s*-\s*$").unwrap());

/// Strip a leading route number and dash, keeping the branch letter and the
/// whitespace that followed it: "32A - Downtown" → "A Downtown".
pub fn strip_route_prefix(text: &str) -> String {
    ROUTE_PREFIX.replace(text, "${1}${2}").into_owned()
}

/// Remove "bus loop", "bus terminal", "bus term.", "terminal" and "term."
/// when they follow another word.
pub fn strip_bus_terminal(text: &str) -> String {
    BUS_TERMINAL.replace_all(text, "").into_owned()
}

/// Remove a dash standing alone at the start or end of the text.
pub fn clean_edge_dash(text: &str) -> String {
    EDGE_DASH.replace_all(text, "").into_owned()
}

/// Normalizes trip headsigns and stop names for display.
#[derive(Debug)]
pub struct TextNormalizer {
    trip_headsign: Pipeline,
    stop_name: Pipeline,
}

impl TextNormalizer {
    /// Build both pipelines for the configured language and ignored words.
    pub fn new(config: &AgencyConfig) -> Self {
        let language = config.language;
        let ignored: Arc<[String]> = config.ignored_words.clone().into();

        let trip_headsign = Pipeline::new()
            .then("title case", move |s| {
                clean::title_case_words(language, s, &ignored[..])
            })
            .then("route prefix", strip_route_prefix)
            .then("bus terminal", strip_bus_terminal)
            .then("edge dash", clean_edge_dash)
            .then("and", clean::clean_and)
            .then("at", clean::clean_at)
            .then("slashes", clean::clean_slashes)
            .then("bounds", clean::clean_bounds)
            .then("street types", clean::clean_street_types)
            .then("numbers", clean::clean_numbers)
            .then("label", move |s| clean::clean_label(language, s));

        let stop_name = Pipeline::new()
            .then("at", clean::clean_at)
            .then("bounds", clean::clean_bounds)
            .then("street types", clean::clean_street_types)
            .then("numbers", clean::clean_numbers)
            .then("label", move |s| clean::clean_label(language, s));

        Self {
            trip_headsign,
            stop_name,
        }
    }

    /// Normalize a raw trip headsign.
    pub fn normalize_trip_headsign(&self, raw: &str) -> String {
        self.trip_headsign.run(raw)
    }

    /// Normalize a raw stop name.
    pub fn normalize_stop_name(&self, raw: &str) -> String {
        self.stop_name.run(raw)
    }

    /// The trip headsign pipeline, for inspecting or running single steps.
    pub fn trip_headsign_pipeline(&self) -> &Pipeline {
        &self.trip_headsign
    }

    /// The stop name pipeline.
    pub fn stop_name_pipeline(&self) -> &Pipeline {
        &self.stop_name
    }
}

impl Default for TextNormalizer {
    fn default() -> Self {
        Self::new(&AgencyConfig::default())
    }
}


#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    const HEADSIGN_WORDS: [&str; 28] = [
        "Union",
        "Station",
        "DOWNTOWN",
        "Oakville",
        "GO",
        "Bus",
        "Terminal",
        "Bus Loop",
        "Term.",
        "Main St",
        "King St W",
        "Hwy",
        "Ave",
        "at",
        "and",
        "@",
        "/",
        "(Express)",
        "1ST",
        "UNIVERSITY OF WATERLOO",
        "()",
        "[]",
        "( )",
        "-",
        "&",
        ",",
        "[North]",
        "Bay and Dundas",
    ];

    const ROUTE_PREFIXES: [&str; 4] = ["", "32A - ", "52 - ", "19 - "];

    fn headsign_text() -> impl Strategy<Value = String> {
        (
            prop::sample::select(ROUTE_PREFIXES.to_vec()),
            prop::collection::vec(prop::sample::select(HEADSIGN_WORDS.to_vec()), 1..5),
        )
            .prop_map(|(prefix, words)| format!("{prefix}{}", words.join(" ")))
    }

    fn stop_name_text() -> impl Strategy<Value = String> {
        prop::collection::vec(prop::sample::select(HEADSIGN_WORDS.to_vec()), 1..5)
            .prop_map(|words| words.join(" "))
    }

    proptest! {
        /// Normalizing a normalized headsign changes nothing
        #[test]
        fn trip_headsign_idempotent(raw in headsign_text()) {
            let normalizer = TextNormalizer::default();
            let once = normalizer.normalize_trip_headsign(&raw);
            let twice = normalizer.normalize_trip_headsign(&once);
            prop_assert_eq!(twice, once);
        }

        /// Normalizing a normalized stop name changes nothing
        #[test]
        fn stop_name_idempotent(raw in stop_name_text()) {
            let normalizer = TextNormalizer::default();
            let once = normalizer.normalize_stop_name(&raw);
            let twice = normalizer.normalize_stop_name(&once);
            prop_assert_eq!(twice, once);
        }

        /// Route prefixes never survive normalization
        #[test]
        fn route_prefix_removed(
            number in 10u32..1000,
            words in prop::collection::vec(prop::sample::select(vec!["Union", "Station", "Downtown"]), 1..3),
        ) {
            let raw = format!("{number} - {}", words.join(" "));
            let out = TextNormalizer::default().normalize_trip_headsign(&raw);
            prop_assert!(!out.starts_with(|c: char| c.is_ascii_digit()));
            prop_assert!(!out.starts_with('-'));
        }

        /// Arbitrary text never panics either pipeline
        #[test]
        fn never_panics(raw in ".{0,40}") {
            let normalizer = TextNormalizer::default();
            let _ = normalizer.normalize_trip_headsign(&raw);
            let _ = normalizer.normalize_stop_name(&raw);
        }
    }
}
