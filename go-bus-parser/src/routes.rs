//! Route ids and colors.
//!
//! Routes are identified by their short name. The feed leaves some route
//! colors empty; those routes get a fixed color from a small table, and a
//! route missing from the table is a data-integrity error: a new route
//! nobody has reviewed the branding of.

use std::collections::HashMap;
use std::sync::LazyLock;

use regex::Regex;
use serde::Deserialize;
use tracing::{debug, warn};

use crate::domain::{ColorCode, RouteKey};
use crate::error::AgencyError;

const fn color(hex: &[u8; 6]) -> ColorCode {
    match ColorCode::from_hex(hex) {
        Some(color) => color,
        None => panic!("route colors must be 6 hex digits"),
    }
}

/// Route number → color, for routes whose feed color is empty.
const ROUTE_COLORS: [(u32, ColorCode); 2] = [
    (11, color(b"98002e")), // St. Catharines / Niagara-on-the-Lake
    (70, color(b"794500")),
];

static FALLBACK_COLORS: LazyLock<HashMap<RouteKey, ColorCode>> = LazyLock::new(|| {
    ROUTE_COLORS
        .into_iter()
        .filter_map(|(number, color)| RouteKey::new(number).map(|key| (key, color)))
        .collect()
});

/// Feed route ids carry a numeric prefix ("01-11").
static ROUTE_ID_PREFIX: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^\d+-").unwrap());

/// A route as read from the feed.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct RouteRecord {
    pub route_id: String,
    pub route_short_name: String,
    #[serde(default)]
    pub route_color: Option<String>,
}

impl RouteRecord {
    /// The route number this route is identified by.
    pub fn route_key(&self) -> Result<RouteKey, AgencyError> {
        RouteKey::parse(&self.route_short_name).map_err(|source| {
            AgencyError::InvalidRouteShortName {
                short_name: self.route_short_name.clone(),
                source,
            }
        })
    }

    /// The feed color, if the feed supplies a non-blank one.
    fn feed_color(&self) -> Option<&str> {
        self.route_color
            .as_deref()
            .map(str::trim)
            .filter(|c| !c.is_empty())
    }
}

/// Fallback color for a route the feed left uncolored.
///
/// Fails with [`AgencyError::UnmappedRouteColor`] for routes not in the
/// table rather than guessing a color.
pub fn resolve_missing_route_color(route: RouteKey) -> Result<ColorCode, AgencyError> {
    match FALLBACK_COLORS.get(&route) {
        Some(&color) => {
            debug!(%route, %color, "using fallback route color");
            Ok(color)
        }
        None => {
            warn!(%route, "no fallback color for route");
            Err(AgencyError::UnmappedRouteColor { route })
        }
    }
}

/// Fallback color for a route record, keyed by its short name.
pub fn provide_missing_route_color(route: &RouteRecord) -> Result<ColorCode, AgencyError> {
    resolve_missing_route_color(route.route_key()?)
}

/// The color to publish for a route: the feed color when present, the
/// fallback table otherwise.
pub fn route_color(route: &RouteRecord) -> Result<ColorCode, AgencyError> {
    match route.feed_color() {
        Some(color) => ColorCode::parse(color).map_err(|source| AgencyError::InvalidRouteColor {
            route_id: route.route_id.clone(),
            color: color.to_string(),
            source,
        }),
        None => provide_missing_route_color(route),
    }
}

/// Strip the numeric feed prefix from a route id: "01-11" → "11".
pub fn clean_route_id(raw: &str) -> String {
    ROUTE_ID_PREFIX.replace(raw, "").into_owned()
}
