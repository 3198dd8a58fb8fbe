//! GO Transit bus feed cleanup.
//!
//! Normalizes trip headsigns and stop names from the GO Transit bus feed,
//! picks between competing direction headsigns, maps mnemonic stop codes to
//! stop ids, and supplies colors for routes the feed leaves uncolored.

pub mod agency;
pub mod clean;
pub mod config;
pub mod direction;
pub mod domain;
pub mod error;
pub mod normalize;
pub mod routes;
pub mod stops;

pub use agency::GoBusAgency;
pub use error::AgencyError;
