//! Route color type.

use std::fmt;

/// Error returned when parsing an invalid color code.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid color code: {reason}")]
pub struct InvalidColorCode {
    reason: &'static str,
}

/// A 6-hex-digit route color, without a leading `#`.
///
/// The case of the digits is preserved as given, since feeds and the
/// fallback table mix both.
///
/// # Examples
///
/// ```
/// use go_bus_parser::domain::ColorCode;
///
/// let color = ColorCode::parse("98002e").unwrap();
/// assert_eq!(color.as_str(), "98002e");
///
/// // A leading `#` is not part of the code
/// assert!(ColorCode::parse("#98002e").is_err());
///
/// // Wrong length is rejected
/// assert!(ColorCode::parse("98002").is_err());
/// ```
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct ColorCode([u8; 6]);

impl ColorCode {
    /// Parse a color code from a string.
    ///
    /// The input must be exactly 6 ASCII hex digits.
    pub fn parse(s: &str) -> Result<Self, InvalidColorCode> {
        let bytes = s.as_bytes();

        if bytes.len() != 6 {
            return Err(InvalidColorCode {
                reason: "must be exactly 6 characters",
            });
        }

        let mut code = [0u8; 6];
        code.copy_from_slice(bytes);
        ColorCode::from_hex(&code).ok_or(InvalidColorCode {
            reason: "must be hex digits 0-9, a-f",
        })
    }

    /// Create a color code from 6 hex digit bytes, usable in constants.
    ///
    /// Returns `None` if any byte is not an ASCII hex digit.
    pub const fn from_hex(hex: &[u8; 6]) -> Option<Self> {
        let mut i = 0;
        while i < hex.len() {
            if !hex[i].is_ascii_hexdigit() {
                return None;
            }
            i += 1;
        }
        Some(ColorCode(*hex))
    }

    /// Returns the color code as a string slice.
    pub fn as_str(&self) -> &str {
        // SAFETY: We only store ASCII hex digits
        std::str::from_utf8(&self.0).unwrap()
    }
}

impl fmt::Debug for ColorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "ColorCode({})", self.as_str())
    }
}

impl fmt::Display for ColorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_valid_colors() {
        assert!(ColorCode::parse("98002e").is_ok());
        assert!(ColorCode::parse("794500").is_ok());
        assert!(ColorCode::parse("387C2B").is_ok());
        assert!(ColorCode::parse("FFFFFF").is_ok());
    }

    #[test]
    fn preserves_case() {
        assert_eq!(ColorCode::parse("387C2B").unwrap().as_str(), "387C2B");
        assert_eq!(ColorCode::parse("98002e").unwrap().as_str(), "98002e");
    }

    #[test]
    fn reject_wrong_length() {
        assert!(ColorCode::parse("").is_err());
        assert!(ColorCode::parse("FFF").is_err());
        assert!(ColorCode::parse("FFFFFFF").is_err());
    }

    #[test]
    fn reject_non_hex() {
        assert!(ColorCode::parse("GGGGGG").is_err());
        assert!(ColorCode::parse("#FFFFF").is_err());
        assert!(ColorCode::parse("12 456").is_err());
    }

    #[test]
    fn from_hex_in_const() {
        const GREEN: Option<ColorCode> = ColorCode::from_hex(b"387C2B");
        assert_eq!(GREEN, ColorCode::parse("387C2B").ok());
        assert!(ColorCode::from_hex(b"387C2G").is_none());
    }

    #[test]
    fn display_and_debug() {
        let color = ColorCode::parse("794500").unwrap();
        assert_eq!(format!("{}", color), "794500");
        assert_eq!(format!("{:?}", color), "ColorCode(794500)");
    }
}

#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        /// Roundtrip: parse then as_str returns the original
        #[test]
        fn roundtrip(s in "[0-9a-fA-F]{6}") {
            let color = ColorCode::parse(&s).unwrap();
            prop_assert_eq!(color.as_str(), s.as_str());
        }

        /// Wrong-length strings are always rejected
        #[test]
        fn wrong_length_rejected(s in "[0-9a-f]{0,5}|[0-9a-f]{7,10}") {
            prop_assert!(ColorCode::parse(&s).is_err());
        }
    }
}
