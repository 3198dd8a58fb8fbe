//! Numeric stop identifier type.

use std::fmt;

/// A positive numeric stop identifier.
///
/// Stop ids for GO stations follow the agency's 9000-series zone numbering,
/// but nothing here derives them; they come from lookup data or the feed.
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, serde::Serialize)]
#[serde(transparent)]
pub struct StopId(u32);

impl StopId {
    /// Create a stop id. Returns `None` for zero.
    pub const fn new(value: u32) -> Option<Self> {
        if value == 0 { None } else { Some(StopId(value)) }
    }

    /// Returns the numeric id.
    pub fn get(&self) -> u32 {
        self.0
    }
}

impl fmt::Debug for StopId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "StopId({})", self.0)
    }
}

impl fmt::Display for StopId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
