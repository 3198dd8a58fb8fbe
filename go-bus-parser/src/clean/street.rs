//! Street-type abbreviation expansion.

use std::collections::HashMap;
use std::sync::LazyLock;

use regex::{Captures, Regex};

/// Abbreviation (lower case) → full street type.
const STREET_TYPES: [(&str, &str); 17] = [
    ("st", "Street"),
    ("str", "Street"),
    ("ave", "Avenue"),
    ("av", "Avenue"),
    ("rd", "Road"),
    ("blvd", "Boulevard"),
    ("dr", "Drive"),
    ("cres", "Crescent"),
    ("crt", "Court"),
    ("ct", "Court"),
    ("hwy", "Highway"),
    ("pkwy", "Parkway"),
    ("ln", "Lane"),
    ("pl", "Place"),
    ("sq", "Square"),
    ("cir", "Circle"),
    ("trl", "Trail"),
];

static EXPANSIONS: LazyLock<HashMap<&'static str, &'static str>> =
    LazyLock::new(|| STREET_TYPES.into_iter().collect());

/// An abbreviation in street-type position: last in the text or before a
/// separator, optionally followed by a compass direction. "St" followed by
/// a name ("St. Catharines") is a saint and stays.
static STREET_TYPE: LazyLock<Regex> = LazyLock::new(|| {
    let abbreviations = STREET_TYPES
        .iter()
        .map(|(abbr, _)| *abbr)
        .collect::<Vec<_>>()
        .join("|");
    Regex::new(&format!(
        r"(?i)\b({abbreviations})\b\.?((?:\s+(?:n|s|e|w|ne|nw|se|sw|north|south|east|west)\b)?\s*(?:$|[/&,()\-]))"
    ))
    .unwrap()
});

/// Expand street-type abbreviations ("Main St" → "Main Street").
pub fn clean_street_types(text: &str) -> String {
    STREET_TYPE
        .replace_all(text, |caps: &Captures| {
            let abbr = &caps[1];
            let full = EXPANSIONS
                .get(abbr.to_lowercase().as_str())
                .copied()
                .unwrap_or(abbr);
            format!("{full}{}", &caps[2])
        })
        .into_owned()
}
