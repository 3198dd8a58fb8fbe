//! Route short-name key type.

use std::fmt;

/// Error returned when a route short name is not a route key.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid route key: {reason}")]
pub struct InvalidRouteKey {
    reason: &'static str,
}

/// The rider-facing route number, parsed from a route's short name.
///
/// Always a positive integer. Distinct from the feed's internal route id.
///
/// # Examples
///
/// ```
/// use go_bus_parser::domain::RouteKey;
///
/// let key = RouteKey::parse("11").unwrap();
/// assert_eq!(key.get(), 11);
///
/// assert!(RouteKey::parse("0").is_err());
/// assert!(RouteKey::parse("11A").is_err());
/// ```
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct RouteKey(u32);

impl RouteKey {
    /// Create a route key from a number. Returns `None` for zero.
    pub fn new(value: u32) -> Option<Self> {
        (value > 0).then_some(RouteKey(value))
    }

    /// Parse a route key from a short name.
    ///
    /// Surrounding whitespace is ignored; the rest must be ASCII digits
    /// forming a positive integer.
    pub fn parse(s: &str) -> Result<Self, InvalidRouteKey> {
        let s = s.trim();

        if s.is_empty() {
            return Err(InvalidRouteKey {
                reason: "must not be empty",
            });
        }

        if !s.bytes().all(|b| b.is_ascii_digit()) {
            return Err(InvalidRouteKey {
                reason: "must be ASCII digits 0-9",
            });
        }

        let value: u32 = s.parse().map_err(|_| InvalidRouteKey {
            reason: "out of range",
        })?;

        RouteKey::new(value).ok_or(InvalidRouteKey {
            reason: "must be positive",
        })
    }

    /// Returns the route number.
    pub fn get(&self) -> u32 {
        self.0
    }
}

impl fmt::Debug for RouteKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "RouteKey({})", self.0)
    }
}

impl fmt::Display for RouteKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_valid_keys() {
        assert_eq!(RouteKey::parse("11").unwrap().get(), 11);
        assert_eq!(RouteKey::parse("70").unwrap().get(), 70);
        assert_eq!(RouteKey::parse("1").unwrap().get(), 1);
        assert_eq!(RouteKey::parse(" 96 ").unwrap().get(), 96);
    }

    #[test]
    fn leading_zeros_are_numeric() {
        assert_eq!(RouteKey::parse("011").unwrap(), RouteKey::parse("11").unwrap());
    }

    #[test]
    fn reject_zero() {
        assert!(RouteKey::parse("0").is_err());
        assert!(RouteKey::parse("000").is_err());
        assert!(RouteKey::new(0).is_none());
    }

    #[test]
    fn reject_non_digits() {
        assert!(RouteKey::parse("").is_err());
        assert!(RouteKey::parse("   ").is_err());
        assert!(RouteKey::parse("11A").is_err());
        assert!(RouteKey::parse("-11").is_err());
        assert!(RouteKey::parse("+11").is_err());
    }

    #[test]
    fn reject_overflow() {
        assert!(RouteKey::parse("99999999999").is_err());
    }

    #[test]
    fn display_and_debug() {
        let key = RouteKey::parse("70").unwrap();
        assert_eq!(format!("{}", key), "70");
        assert_eq!(format!("{:?}", key), "RouteKey(70)");
    }
}
