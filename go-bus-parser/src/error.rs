//! Agency-level error types.
//!
//! These errors represent data-integrity violations in the feed: input the
//! parser refuses to guess about. They are distinct from "no decision" and
//! "lookup miss" outcomes, which are ordinary results.

use crate::domain::{InvalidColorCode, InvalidRouteKey, RouteKey};

/// Errors raised while processing agency route data.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum AgencyError {
    /// A route has no color in the feed and none is mapped for it
    #[error("unexpected route color for route {route}: no fallback color is mapped")]
    UnmappedRouteColor { route: RouteKey },

    /// A route short name is not a positive route number
    #[error("route short name {short_name:?} is not a route number: {source}")]
    InvalidRouteShortName {
        short_name: String,
        #[source]
        source: InvalidRouteKey,
    },

    /// A feed-supplied route color is malformed
    #[error("route {route_id:?} has a malformed color {color:?}: {source}")]
    InvalidRouteColor {
        route_id: String,
        color: String,
        #[source]
        source: InvalidColorCode,
    },
}
