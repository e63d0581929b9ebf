//! RGB color handling with hex parsing and serialization.

// Hex digits are at most 15, so the narrowing cast is exact
#![allow(clippy::cast_possible_truncation)]

use serde::{Serialize, Serializer};
use std::fmt;

use crate::error::{OverviewError, Result};
use crate::models::NamedColor;

/// Fully opaque RGB color.
///
/// The client always renders markup colors opaque, so alpha is not stored.
/// [`RgbColor::to_argb_hex`] writes it back as `ff`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct RgbColor {
    /// Red channel (0-255)
    pub r: u8,
    /// Green channel (0-255)
    pub g: u8,
    /// Blue channel (0-255)
    pub b: u8,
}

impl RgbColor {
    /// Creates a new `RgbColor` from individual channel values.
    #[must_use]
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Alpha channel, which is always opaque.
    pub const fn alpha(&self) -> u8 {
        0xff
    }

    /// Parses a markup color value: a named HTML color or a hex string.
    ///
    /// # Examples
    ///
    /// ```
    /// use overviewsdk::models::RgbColor;
    ///
    /// assert_eq!(RgbColor::parse_color("teal").unwrap(), RgbColor::new(0, 128, 128));
    /// assert_eq!(RgbColor::parse_color("#abc").unwrap(), RgbColor::new(0xaa, 0xbb, 0xcc));
    /// ```
    pub fn parse_color(value: &str) -> Result<Self> {
        if let Some(named) = NamedColor::from_name(value) {
            return Ok(named.rgb());
        }
        Self::from_hex(value)
    }

    /// Parses an `RgbColor` from a hex string.
    ///
    /// Supports formats: "#RGB", "#RRGGBB", "0xffRGB", "0xffRRGGBB".
    /// The `0xff` alpha prefix is matched case-insensitively and stands in
    /// for `#`.
    ///
    /// # Examples
    ///
    /// ```
    /// use overviewsdk::models::RgbColor;
    ///
    /// let color = RgbColor::from_hex("0xffff0000").unwrap();
    /// assert_eq!(color, RgbColor::new(255, 0, 0));
    ///
    /// let color = RgbColor::from_hex("#0f0").unwrap();
    /// assert_eq!(color, RgbColor::new(0, 255, 0));
    /// ```
    ///
    /// # Errors
    ///
    /// Returns [`OverviewError::InvalidHexFormat`] for a missing prefix, a
    /// length other than 3 or 6 digits, or a non-hex digit.
    pub fn from_hex(value: &str) -> Result<Self> {
        let digits = match value.get(..4) {
            Some(prefix) if prefix.eq_ignore_ascii_case("0xff") => &value[4..],
            _ => value
                .strip_prefix('#')
                .ok_or_else(|| OverviewError::hex_format(value))?,
        };

        let nibbles = digits
            .chars()
            .map(|c| c.to_digit(16).map(|d| d as u8))
            .collect::<Option<Vec<u8>>>()
            .ok_or_else(|| OverviewError::hex_format(value))?;

        match nibbles.as_slice() {
            [r, g, b] => Ok(Self::new(r * 17, g * 17, b * 17)),
            [r1, r2, g1, g2, b1, b2] => Ok(Self::new((r1 << 4) | r2, (g1 << 4) | g2, (b1 << 4) | b2)),
            _ => Err(OverviewError::hex_format(value)),
        }
    }

    /// Converts the color to the client's `0xffrrggbb` form (lowercase).
    ///
    /// # Examples
    ///
    /// ```
    /// use overviewsdk::models::RgbColor;
    ///
    /// assert_eq!(RgbColor::new(255, 0, 128).to_argb_hex(), "0xffff0080");
    /// ```
    #[must_use]
    pub fn to_argb_hex(&self) -> String {
        format!(
            "0x{:02x}{:02x}{:02x}{:02x}",
            self.alpha(),
            self.r,
            self.g,
            self.b
        )
    }
}

impl fmt::Display for RgbColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_argb_hex())
    }
}

impl Serialize for RgbColor {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_argb_hex())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorKind;

    #[test]
    fn test_from_hex_long() {
        let color = RgbColor::from_hex("#FF0000").unwrap();
        assert_eq!(color, RgbColor::new(255, 0, 0));

        let color = RgbColor::from_hex("#0080ff").unwrap();
        assert_eq!(color, RgbColor::new(0, 128, 255));

        let color = RgbColor::from_hex("0xff4286f4").unwrap();
        assert_eq!(color, RgbColor::new(0x42, 0x86, 0xf4));

        let color = RgbColor::from_hex("0xFF4286F4").unwrap();
        assert_eq!(color, RgbColor::new(0x42, 0x86, 0xf4));
    }

    #[test]
    fn test_from_hex_short() {
        let color = RgbColor::from_hex("#abc").unwrap();
        assert_eq!(color, RgbColor::new(0xaa, 0xbb, 0xcc));

        let color = RgbColor::from_hex("0xfff00").unwrap();
        assert_eq!(color, RgbColor::new(0xff, 0, 0));
    }

    #[test]
    fn test_from_hex_invalid() {
        for value in ["", "#", "ff0000", "#ff00", "#ff00000", "#ggg", "0xff", "0xee112233", "#12345é"] {
            let err = RgbColor::from_hex(value).unwrap_err();
            assert!(
                matches!(err, OverviewError::InvalidHexFormat { .. }),
                "{value:?} should be rejected, got {err:?}"
            );
            assert_eq!(err.kind(), ErrorKind::InvalidFormat);
        }
    }

    #[test]
    fn test_parse_color_named() {
        assert_eq!(RgbColor::parse_color("red").unwrap(), RgbColor::new(255, 0, 0));
        assert_eq!(
            RgbColor::parse_color("fuchsia").unwrap(),
            RgbColor::new(255, 0, 255)
        );
        // Named lookup is case-sensitive and does not fall back to hex
        assert!(RgbColor::parse_color("Red").is_err());
    }

    #[test]
    fn test_to_argb_hex() {
        assert_eq!(RgbColor::new(0, 0, 0).to_argb_hex(), "0xff000000");
        assert_eq!(RgbColor::new(0xaa, 0xbb, 0xcc).to_argb_hex(), "0xffaabbcc");
        assert_eq!(
            RgbColor::from_hex("#ABC").unwrap().to_string(),
            "0xffaabbcc"
        );
    }

    #[test]
    fn test_roundtrip() {
        let original = RgbColor::new(123, 45, 67);
        let parsed = RgbColor::from_hex(&original.to_argb_hex()).unwrap();
        assert_eq!(original, parsed);
    }

    #[test]
    fn test_serialize_as_hex() {
        let json = serde_json::to_string(&RgbColor::new(1, 2, 3)).unwrap();
        assert_eq!(json, "\"0xff010203\"");
    }
}
