//! 32-bit ARGB color type

use std::fmt;
use std::str::FromStr;

use crate::error::ColorError;

/// A 32-bit color in ARGB channel order.
///
/// This is the interchange type for the whole theming pipeline: seeds are
/// parsed into it, schemes resolve roles to it, and the CSS projection
/// formats it back out as hex.
#[derive(Clone, Copy, Debug, Hash, Eq, PartialEq)]
pub struct Argb {
    pub a: u8,
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Argb {
    /// Fully opaque color from individual channels.
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { a: 0xFF, r, g, b }
    }

    /// Unpack from a `0xAARRGGBB` integer.
    pub const fn from_u32(packed: u32) -> Self {
        Self {
            a: (packed >> 24) as u8,
            r: (packed >> 16) as u8,
            g: (packed >> 8) as u8,
            b: packed as u8,
        }
    }

    /// Pack into a `0xAARRGGBB` integer.
    pub const fn to_u32(self) -> u32 {
        ((self.a as u32) << 24) | ((self.r as u32) << 16) | ((self.g as u32) << 8) | (self.b as u32)
    }

    /// Parse a hex color string.
    ///
    /// Accepts `#RRGGBB` (alpha defaults to opaque) and `#AARRGGBB`, case
    /// insensitive, with or without the leading `#`.
    pub fn from_hex(input: &str) -> Result<Self, ColorError> {
        let digits = input.strip_prefix('#').unwrap_or(input);

        let invalid = || ColorError::InvalidHex {
            input: input.to_string(),
        };

        let packed = match digits.len() {
            6 => u32::from_str_radix(digits, 16)
                .map(|rgb| 0xFF00_0000 | rgb)
                .map_err(|_| invalid())?,
            8 => u32::from_str_radix(digits, 16).map_err(|_| invalid())?,
            _ => return Err(invalid()),
        };

        Ok(Self::from_u32(packed))
    }

    /// Format as a lowercase hex string: `#rrggbb` when opaque,
    /// `#rrggbbaa` otherwise.
    pub fn to_hex(self) -> String {
        if self.a == 0xFF {
            format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
        } else {
            format!("#{:02x}{:02x}{:02x}{:02x}", self.r, self.g, self.b, self.a)
        }
    }
}

impl FromStr for Argb {
    type Err = ColorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_hex(s)
    }
}

impl fmt::Display for Argb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_hex())
    }
}

impl From<u32> for Argb {
    fn from(packed: u32) -> Self {
        Self::from_u32(packed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn parses_six_digit_hex_as_opaque() {
        let c = Argb::from_hex("#6750A4").unwrap();
        assert_eq!(c, Argb::rgb(0x67, 0x50, 0xA4));
    }

    #[test]
    fn parses_eight_digit_hex_with_leading_alpha() {
        let c = Argb::from_hex("#80FF0000").unwrap();
        assert_eq!(
            c,
            Argb {
                a: 0x80,
                r: 0xFF,
                g: 0x00,
                b: 0x00
            }
        );
    }

    #[test]
    fn parses_without_hash_and_ignores_case() {
        assert_eq!(
            Argb::from_hex("ffFFffFF").unwrap(),
            Argb::rgb(0xFF, 0xFF, 0xFF)
        );
    }

    #[test]
    fn rejects_malformed_input() {
        for input in ["", "#", "#12345", "#12345G", "not-a-color", "#123456789"] {
            assert!(Argb::from_hex(input).is_err(), "accepted {input:?}");
        }
    }

    #[test]
    fn hex_formatting_drops_opaque_alpha() {
        assert_eq!(Argb::rgb(0x67, 0x50, 0xA4).to_hex(), "#6750a4");
        assert_eq!(Argb::from_u32(0x80102030).to_hex(), "#10203080");
    }

    #[test]
    fn u32_round_trip() {
        let packed = 0xC0FE_12AB;
        assert_eq!(Argb::from_u32(packed).to_u32(), packed);
    }
}
