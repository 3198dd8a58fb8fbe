//! GO Transit bus agency rules in one place.

use crate::config::{AGENCY_ROUTE_TYPE, AgencyConfig};
use crate::direction::{self, HeadsignChoice};
use crate::domain::{ColorCode, Language, RouteKey, RouteType, StopId};
use crate::error::AgencyError;
use crate::normalize::TextNormalizer;
use crate::routes::{self, RouteRecord};
use crate::stops::{NoFallback, StopCodeFallback, StopCodeResolver};

/// The agency-specific cleaning and lookup rules, built once and shared by
/// every record of a feed.
#[derive(Debug)]
pub struct GoBusAgency<F = NoFallback> {
    config: AgencyConfig,
    normalizer: TextNormalizer,
    stops: StopCodeResolver<F>,
}

impl<F: StopCodeFallback> GoBusAgency<F> {
    /// Create the agency rules, delegating unknown stop codes to `fallback`.
    pub fn new(config: AgencyConfig, fallback: F) -> Self {
        let normalizer = TextNormalizer::new(&config);
        Self {
            config,
            normalizer,
            stops: StopCodeResolver::new(fallback),
        }
    }

    /// Returns the configuration.
    pub fn config(&self) -> &AgencyConfig {
        &self.config
    }

    /// Returns the agency color.
    pub fn agency_color(&self) -> ColorCode {
        self.config.agency_color
    }

    /// Returns the route type shared by every agency route.
    pub fn route_type(&self) -> RouteType {
        AGENCY_ROUTE_TYPE
    }

    /// Returns the languages labels are published in.
    pub fn supported_languages(&self) -> &[Language] {
        &self.config.supported_languages
    }

    /// Returns the text normalizer.
    pub fn normalizer(&self) -> &TextNormalizer {
        &self.normalizer
    }

    /// Clean a trip headsign for display. The route number and terminal
    /// vocabulary go; a branch letter stays.
    pub fn normalize_trip_headsign(&self, raw: &str) -> String {
        self.normalizer.normalize_trip_headsign(raw)
    }

    /// Clean a stop name for display.
    pub fn normalize_stop_name(&self, raw: &str) -> String {
        self.normalizer.normalize_stop_name(raw)
    }

    /// Clean a headsign used to label a trip direction. The whole route
    /// prefix goes, branch letter included, and a bare "special" becomes
    /// empty.
    pub fn clean_direction_headsign(&self, raw: &str) -> String {
        direction::clean_direction_headsign(&self.normalizer, raw)
    }

    /// Choose which of two competing direction headsigns to drop.
    pub fn select_droppable_headsign(&self, first: &str, second: &str) -> HeadsignChoice {
        direction::select_droppable_headsign(first, second)
    }

    /// Stop id for a code that is not a plain integer.
    pub fn resolve_stop_id(&self, code: &str) -> Option<StopId> {
        self.stops.resolve(code)
    }

    /// Stop id for any stop code.
    pub fn stop_id_from_code(&self, code: &str) -> Option<StopId> {
        self.stops.stop_id_from_code(code)
    }

    /// Fallback color for a route the feed left uncolored.
    ///
    /// Returns [`AgencyError::UnmappedRouteColor`] for routes with no known
    /// color.
    pub fn resolve_missing_route_color(&self, route: RouteKey) -> Result<ColorCode, AgencyError> {
        routes::resolve_missing_route_color(route)
    }

    /// Color for a route: the feed's own color when present, else the
    /// fallback for its short name.
    pub fn route_color(&self, route: &RouteRecord) -> Result<ColorCode, AgencyError> {
        routes::route_color(route)
    }

    /// Strip the numeric feed prefix from a route id.
    pub fn clean_route_id(&self, raw: &str) -> String {
        routes::clean_route_id(raw)
    }

    /// Route id published for a route: its short name as a route key.
    pub fn route_id(&self, route: &RouteRecord) -> Result<RouteKey, AgencyError> {
        route.route_key()
    }
}

impl Default for GoBusAgency {
    fn default() -> Self {
        Self::new(AgencyConfig::default(), NoFallback)
    }
}
