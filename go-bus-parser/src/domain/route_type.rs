//! GTFS route type.

use std::fmt;

/// Kind of vehicle serving a route, as numbered by GTFS `route_type`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, serde::Serialize)]
#[serde(rename_all = "snake_case")]
pub enum RouteType {
    Tram,
    Subway,
    Rail,
    Bus,
    Ferry,
}

impl RouteType {
    /// Returns the GTFS `route_type` code.
    pub fn gtfs_code(&self) -> u8 {
        match self {
            RouteType::Tram => 0,
            RouteType::Subway => 1,
            RouteType::Rail => 2,
            RouteType::Bus => 3,
            RouteType::Ferry => 4,
        }
    }

    /// Look up a route type by its GTFS code.
    pub fn from_gtfs_code(code: u8) -> Option<Self> {
        match code {
            0 => Some(RouteType::Tram),
            1 => Some(RouteType::Subway),
            2 => Some(RouteType::Rail),
            3 => Some(RouteType::Bus),
            4 => Some(RouteType::Ferry),
            _ => None,
        }
    }
}

impl fmt::Display for RouteType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            RouteType::Tram => "tram",
            RouteType::Subway => "subway",
            RouteType::Rail => "rail",
            RouteType::Bus => "bus",
            RouteType::Ferry => "ferry",
        };
        f.write_str(name)
    }
}
