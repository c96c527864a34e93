// SPDX-License-Identifier: MIT
//
// 8-bit sRGB values, their `#rrggbb` spelling, and the sRGB transfer curve.
//
// Formatting is always lower-case and zero-padded. Parsing is stricter than
// most CSS parsers on purpose: a `#` prefix is required and only six or
// eight digits are accepted, since those are the only forms theme files
// carry. The alpha pair of an eight-digit color is dropped.

use std::fmt;
use std::str::FromStr;

use thiserror::Error;

/// An opaque 8-bit sRGB color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const BLACK: Self = Self::new(0, 0, 0);
    pub const WHITE: Self = Self::new(255, 255, 255);

    #[inline]
    #[must_use]
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Format as `#rrggbb`, lower-case and zero-padded.
    #[must_use]
    pub fn to_hex(self) -> String {
        self.to_string()
    }

    /// Channels as sRGB fractions in `[0, 1]`.
    #[must_use]
    pub fn to_unit(self) -> (f64, f64, f64) {
        (
            f64::from(self.r) / 255.0,
            f64::from(self.g) / 255.0,
            f64::from(self.b) / 255.0,
        )
    }
}

impl fmt::Display for Rgb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}

impl FromStr for Rgb {
    type Err = HexError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_hex(s)
    }
}

// ─── Parsing ────────────────────────────────────────────────────────────────

/// Why a string could not be read as a hex color.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum HexError {
    #[error("empty color string")]
    Empty,

    #[error("color {0:?} does not start with '#'")]
    MissingPrefix(String),

    #[error("color {input:?} has {len} hex digits, expected 6 or 8")]
    BadLength { input: String, len: usize },

    #[error("color {input:?} contains non-hex character {found:?}")]
    BadDigit { input: String, found: char },
}

/// Parse `#rrggbb` or `#rrggbbaa` (either case). Alpha is discarded.
///
/// # Errors
///
/// Returns a [`HexError`] for an empty string, a missing `#`, a digit count
/// other than 6 or 8, or any non-hex character.
pub fn parse_hex(s: &str) -> Result<Rgb, HexError> {
    if s.is_empty() {
        return Err(HexError::Empty);
    }
    let digits = s
        .strip_prefix('#')
        .ok_or_else(|| HexError::MissingPrefix(s.to_owned()))?;

    if let Some(found) = digits.chars().find(|c| !c.is_ascii_hexdigit()) {
        return Err(HexError::BadDigit {
            input: s.to_owned(),
            found,
        });
    }
    // All ASCII from here on, so byte length == digit count.
    let bytes = digits.as_bytes();
    if bytes.len() != 6 && bytes.len() != 8 {
        return Err(HexError::BadLength {
            input: s.to_owned(),
            len: bytes.len(),
        });
    }

    Ok(Rgb::new(
        hex_byte(bytes[0], bytes[1]),
        hex_byte(bytes[2], bytes[3]),
        hex_byte(bytes[4], bytes[5]),
    ))
}

#[inline]
const fn hex_byte(hi: u8, lo: u8) -> u8 {
    (hex_digit(hi) << 4) | hex_digit(lo)
}

/// Caller has already checked `is_ascii_hexdigit`.
#[inline]
const fn hex_digit(c: u8) -> u8 {
    match c {
        b'0'..=b'9' => c - b'0',
        b'a'..=b'f' => c - b'a' + 10,
        b'A'..=b'F' => c - b'A' + 10,
        _ => 0,
    }
}

// ─── Transfer curve ─────────────────────────────────────────────────────────

/// sRGB gamma expansion: encoded fraction → linear light.
///
/// The piecewise curve from IEC 61966-2-1, with the 0.04045 knee that WCAG
/// 2.x uses for relative luminance.
#[inline]
#[must_use]
pub fn srgb_to_linear(c: f64) -> f64 {
    if c <= 0.040_45 {
        c / 12.92
    } else {
        ((c + 0.055) / 1.055).powf(2.4)
    }
}
