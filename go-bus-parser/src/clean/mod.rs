//! Reusable text cleaning rules.
//!
//! Generic, agency-independent transforms that the headsign and stop name
//! pipelines are assembled from. Each rule is a plain `&str -> String`
//! function over precompiled regexes, and leaves text it does not
//! recognise unchanged.

mod case;
mod rules;
mod street;

pub use case::{capitalize, lower_minor_words, title_case_words};
pub use rules::{clean_and, clean_at, clean_bounds, clean_label, clean_numbers, clean_slashes};
pub use street::clean_street_types;
