// SPDX-License-Identifier: MIT
//
// Integer-only HSL → RGB.
//
// Everything below is carried in milli-units: 1000 means 100%. Every
// division is a floor division (`div_euclid` with a positive divisor), which
// is what the Python/Lua/JS/Elisp ports do. For in-range saturation and
// lightness the numerators are never negative and floor equals truncation;
// past 100% the chroma goes negative and only floor keeps the ports aligned.
//
// Overflow: with `u8` saturation and lightness the largest intermediate is
// about (2550 + 7905) * 255 < 3e6, far inside `i32`.

use crate::hue::normalize_hue;
use crate::rgb::Rgb;

/// Milli-units per 100%.
const SCALE: i32 = 1000;

/// Degrees per hue sector.
const SECTOR: i32 = 60;

/// A color in HSL notation with integer components.
///
/// The hue is not wrapped on construction; [`hsl_to_rgb`] normalizes it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Hsl {
    /// Hue in degrees, any sign.
    pub hue: i32,
    /// Saturation percent, nominally 0–100.
    pub saturation: u8,
    /// Lightness percent, nominally 0–100.
    pub lightness: u8,
}

impl Hsl {
    #[inline]
    #[must_use]
    pub const fn new(hue: i32, saturation: u8, lightness: u8) -> Self {
        Self {
            hue,
            saturation,
            lightness,
        }
    }

    /// Convert to 8-bit sRGB. See [`hsl_to_rgb`].
    #[inline]
    #[must_use]
    pub const fn to_rgb(self) -> Rgb {
        hsl_to_rgb(self.hue, self.saturation, self.lightness)
    }
}

impl From<Hsl> for Rgb {
    fn from(hsl: Hsl) -> Self {
        hsl.to_rgb()
    }
}

/// Convert integer HSL to 8-bit RGB using only integer arithmetic.
///
/// Any hue is accepted and wrapped into `[0, 360)`. Saturation and lightness
/// above 100 never panic; the final per-channel clamp absorbs them.
///
/// ```
/// use prism_color::{hsl_to_rgb, Rgb};
///
/// assert_eq!(hsl_to_rgb(0, 100, 50), Rgb::new(255, 0, 0));
/// assert_eq!(hsl_to_rgb(-120, 100, 50), Rgb::new(0, 0, 255));
/// assert_eq!(hsl_to_rgb(211, 12, 11).to_hex(), "#191c1f");
/// ```
#[must_use]
#[allow(clippy::cast_lossless)]
pub const fn hsl_to_rgb(hue: i32, saturation: u8, lightness: u8) -> Rgb {
    let s1000 = saturation as i32 * 10;
    let l1000 = lightness as i32 * 10;

    let diff = (2 * l1000 - SCALE).abs();
    let chroma = ((SCALE - diff) * s1000).div_euclid(SCALE);

    let h = normalize_hue(hue);
    let sector = h / SECTOR;
    let distance = (h % (2 * SECTOR) - SECTOR).abs();
    let x = (chroma * (SECTOR - distance)).div_euclid(SECTOR);
    let m = l1000 - chroma.div_euclid(2);

    let (r, g, b) = match sector {
        0 => (chroma, x, 0),
        1 => (x, chroma, 0),
        2 => (0, chroma, x),
        3 => (0, x, chroma),
        4 => (x, 0, chroma),
        _ => (chroma, 0, x),
    };

    Rgb::new(channel(r, m), channel(g, m), channel(b, m))
}

/// Scale one milli-unit channel to 0–255, rounding half up, then clamp.
#[inline]
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
const fn channel(base: i32, m: i32) -> u8 {
    let value = ((base + m) * 255 + SCALE / 2).div_euclid(SCALE);
    // Safe: clamp guarantees 0 <= value <= 255 before truncation.
    if value < 0 {
        0
    } else if value > 255 {
        255
    } else {
        value as u8
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn rgb(hue: i32, s: u8, l: u8) -> (u8, u8, u8) {
        let c = hsl_to_rgb(hue, s, l);
        (c.r, c.g, c.b)
    }

    // ── Primaries and secondaries ───────────────────────────────────────

    #[test]
    fn primaries() {
        assert_eq!(rgb(0, 100, 50), (255, 0, 0));
        assert_eq!(rgb(120, 100, 50), (0, 255, 0));
        assert_eq!(rgb(240, 100, 50), (0, 0, 255));
    }

    #[test]
    fn secondaries() {
        assert_eq!(rgb(60, 100, 50), (255, 255, 0));
        assert_eq!(rgb(180, 100, 50), (0, 255, 255));
        assert_eq!(rgb(300, 100, 50), (255, 0, 255));
    }

    // ── Achromatic ──────────────────────────────────────────────────────

    #[test]
    fn grays_ignore_hue() {
        for hue in [0, 45, 211, 359, -90, 1000] {
            assert_eq!(rgb(hue, 0, 0), (0, 0, 0), "black at hue {hue}");
            assert_eq!(rgb(hue, 0, 100), (255, 255, 255), "white at hue {hue}");
            assert_eq!(rgb(hue, 0, 50), (128, 128, 128), "gray at hue {hue}");
        }
    }

    #[test]
    fn full_saturation_extremes_are_black_and_white() {
        assert_eq!(rgb(0, 100, 0), (0, 0, 0));
        assert_eq!(rgb(0, 100, 100), (255, 255, 255));
    }

    // ── Rounding ────────────────────────────────────────────────────────

    #[test]
    fn half_up_rounding() {
        // 127.5 → 128, 63.75 → 64
        assert_eq!(rgb(30, 100, 25), (128, 64, 0));
        assert_eq!(rgb(90, 50, 50), (128, 191, 64));
    }

    #[test]
    fn neutral_background() {
        assert_eq!(rgb(211, 12, 11), (25, 28, 31));
    }

    // ── Hue wrapping ────────────────────────────────────────────────────

    #[test]
    fn hue_wraps_both_directions() {
        assert_eq!(rgb(-120, 100, 50), rgb(240, 100, 50));
        assert_eq!(rgb(480, 100, 50), rgb(120, 100, 50));
        assert_eq!(rgb(i32::MIN, 80, 40), rgb(i32::MIN.rem_euclid(360), 80, 40));
    }

    // ── Out-of-domain input ─────────────────────────────────────────────

    #[test]
    fn oversaturated_input_is_clamped_not_panicking() {
        assert_eq!(rgb(0, 200, 50), (255, 0, 0));
        assert_eq!(rgb(0, 255, 0), (0, 0, 0));
        // Negative chroma path: floor division must match the other ports.
        assert_eq!(rgb(210, 255, 255), (255, 255, 0));
    }

    #[test]
    fn every_channel_in_range() {
        // u8 channels cannot leave 0..=255; this sweeps for panics in the
        // intermediate math across the whole domain, including s/l > 100.
        for hue in (-360..720).step_by(13) {
            for s in (0..=255u8).step_by(17) {
                for l in (0..=255u8).step_by(17) {
                    let _ = hsl_to_rgb(hue, s, l);
                }
            }
        }
    }

    #[test]
    fn struct_and_free_function_agree() {
        let hsl = Hsl::new(201, 100, 86);
        assert_eq!(hsl.to_rgb(), hsl_to_rgb(201, 100, 86));
        assert_eq!(Rgb::from(hsl).to_hex(), "#b8e6ff");
    }
}
