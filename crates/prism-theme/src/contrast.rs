//! WCAG 2.1 contrast ratio and pass/fail checks.
//!
//! - Normal text (AA): contrast ratio >= 4.5:1
//! - Large text and non-text accents (AA large): contrast ratio >= 3:1
//!
//! Luminance is computed from 8-bit sRGB through the piecewise transfer
//! curve; ratios are reported rounded to two decimals. Malformed colors never
//! raise here: they turn into a failing result with ratio 0.0 so a batch
//! keeps going.

use bitflags::bitflags;
use prism_color::{HexError, Rgb, parse_hex, srgb_to_linear};
use serde::Serialize;

use crate::palette::{Palette, Slot};

/// Minimum ratio for normal text.
pub const AA_NORMAL: f64 = 4.5;

/// Minimum ratio for large text and UI accents.
pub const AA_LARGE: f64 = 3.0;

/// Relative luminance per WCAG 2.1, in `[0, 1]`.
///
///   L = 0.2126 * `R_lin` + 0.7152 * `G_lin` + 0.0722 * `B_lin`
#[must_use]
pub fn relative_luminance(color: Rgb) -> f64 {
    let (r, g, b) = color.to_unit();
    0.2126f64.mul_add(
        srgb_to_linear(r),
        0.7152f64.mul_add(srgb_to_linear(g), 0.0722 * srgb_to_linear(b)),
    )
}

/// WCAG 2.1 contrast ratio, `(L_lighter + 0.05) / (L_darker + 0.05)`.
///
/// Always in `[1.0, 21.0]` and independent of argument order.
#[must_use]
pub fn contrast_ratio(fg: Rgb, bg: Rgb) -> f64 {
    let la = relative_luminance(fg);
    let lb = relative_luminance(bg);
    let (lighter, darker) = if la >= lb { (la, lb) } else { (lb, la) };
    (lighter + 0.05) / (darker + 0.05)
}

/// [`contrast_ratio`] for two `#rrggbb[aa]` strings.
///
/// # Errors
///
/// Returns the first [`HexError`] if either color fails to parse.
pub fn contrast_ratio_hex(fg: &str, bg: &str) -> Result<f64, HexError> {
    Ok(contrast_ratio(parse_hex(fg)?, parse_hex(bg)?))
}

#[inline]
#[must_use]
pub fn meets_aa(ratio: f64) -> bool {
    ratio >= AA_NORMAL
}

#[inline]
#[must_use]
pub fn meets_aa_large(ratio: f64) -> bool {
    ratio >= AA_LARGE
}

/// Round to two decimals, the precision reports are published at.
///
/// Rounds the exact binary value, so `1.115` (stored as `1.11499...`) gives
/// `1.11`. Scaling by 100 first would round it up to `1.12`.
#[must_use]
pub fn round2(ratio: f64) -> f64 {
    format!("{ratio:.2}").parse().unwrap_or(ratio)
}

bitflags! {
    /// WCAG levels a ratio satisfies.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct Compliance: u8 {
        const AA_LARGE = 1 << 0;
        const AA       = 1 << 1;
    }
}

impl Compliance {
    #[must_use]
    pub fn from_ratio(ratio: f64) -> Self {
        let mut levels = Self::empty();
        levels.set(Self::AA_LARGE, meets_aa_large(ratio));
        levels.set(Self::AA, meets_aa(ratio));
        levels
    }
}

// ---------------------------------------------------------------------------
// ContrastResult
// ---------------------------------------------------------------------------

/// Outcome of checking one foreground/background pair.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ContrastResult {
    /// Contrast ratio rounded to two decimals; 0.0 for malformed input.
    pub ratio: f64,
    #[serde(rename = "wcag_aa")]
    pub passes_aa: bool,
}

impl ContrastResult {
    /// The result recorded for a missing or malformed color.
    pub const MALFORMED: Self = Self {
        ratio: 0.0,
        passes_aa: false,
    };

    /// Result for two decoded colors. The AA verdict is taken on the
    /// unrounded ratio.
    #[must_use]
    pub fn of(fg: Rgb, bg: Rgb) -> Self {
        let ratio = contrast_ratio(fg, bg);
        Self {
            ratio: round2(ratio),
            passes_aa: meets_aa(ratio),
        }
    }

    /// Result for two hex strings as they appear in theme files.
    ///
    /// A missing, empty, unprefixed, or otherwise unparsable color yields
    /// [`ContrastResult::MALFORMED`].
    #[must_use]
    pub fn evaluate(fg: Option<&str>, bg: Option<&str>) -> Self {
        let (Some(fg), Some(bg)) = (fg, bg) else {
            tracing::warn!("missing foreground or background color");
            return Self::MALFORMED;
        };
        match (parse_hex(fg), parse_hex(bg)) {
            (Ok(fg), Ok(bg)) => Self::of(fg, bg),
            (Err(e), _) | (_, Err(e)) => {
                tracing::warn!(error = %e, "malformed color");
                Self::MALFORMED
            }
        }
    }
}

// ---------------------------------------------------------------------------
// Palette audit
// ---------------------------------------------------------------------------

/// Contrast of a palette's key roles against its `base00` background.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct PaletteAudit {
    /// `base05` (body text), rounded.
    pub text: f64,
    /// `base03` (comments), rounded.
    pub comment: f64,
    /// `base0A` (hero accent), rounded.
    pub accent: f64,
    /// Text meets AA and both comment and accent meet AA large.
    pub verified: bool,
}

/// Check a palette's text, comment and accent contrast against `base00`.
#[must_use]
pub fn audit_palette(palette: &Palette) -> PaletteAudit {
    let bg = palette.get(Slot::Base00);
    let text = contrast_ratio(palette.get(Slot::Base05), bg);
    let comment = contrast_ratio(palette.get(Slot::Base03), bg);
    let accent = contrast_ratio(palette.get(Slot::Base0A), bg);

    PaletteAudit {
        text: round2(text),
        comment: round2(comment),
        accent: round2(accent),
        verified: meets_aa(text) && meets_aa_large(comment) && meets_aa_large(accent),
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use crate::level::Level;

    fn approx_eq(a: f64, b: f64, eps: f64) -> bool {
        (a - b).abs() < eps
    }

    fn hex(s: &str) -> Rgb {
        parse_hex(s).unwrap()
    }

    // ── Relative luminance ──────────────────────────────────────────

    #[test]
    fn luminance_black_is_zero() {
        assert!(approx_eq(relative_luminance(Rgb::BLACK), 0.0, 1e-9));
    }

    #[test]
    fn luminance_white_is_one() {
        assert!(approx_eq(relative_luminance(Rgb::WHITE), 1.0, 1e-9));
    }

    #[test]
    fn luminance_primaries_match_weights() {
        for (color, weight) in [
            (Rgb::new(255, 0, 0), 0.2126),
            (Rgb::new(0, 255, 0), 0.7152),
            (Rgb::new(0, 0, 255), 0.0722),
        ] {
            let lum = relative_luminance(color);
            assert!(approx_eq(lum, weight, 1e-9), "{color}: {lum}");
        }
    }

    // ── Contrast ratio ──────────────────────────────────────────────

    #[test]
    fn contrast_black_white_is_21() {
        let ratio = contrast_ratio(Rgb::BLACK, Rgb::WHITE);
        assert!(approx_eq(ratio, 21.0, 1e-9), "B/W contrast: {ratio}");
    }

    #[test]
    fn contrast_same_color_is_1() {
        let c = hex("#52a5ff");
        assert!(approx_eq(contrast_ratio(c, c), 1.0, 1e-12));
    }

    #[test]
    fn contrast_is_symmetric() {
        let a = hex("#e4e4e8");
        let b = hex("#09090b");
        let (ab, ba) = (contrast_ratio(a, b), contrast_ratio(b, a));
        assert_eq!(ab.to_bits(), ba.to_bits());
    }

    #[test]
    fn contrast_always_at_least_one() {
        for (a, b) in [("#444444", "#333333"), ("#191c1f", "#1e2329"), ("#ff0000", "#00ff00")] {
            let ratio = contrast_ratio(hex(a), hex(b));
            assert!(ratio >= 1.0, "{a}/{b}: {ratio}");
        }
    }

    #[test]
    fn hex_ratio_decodes_then_compares() {
        let ratio = contrast_ratio_hex("#e4e4e8", "#09090bff").unwrap();
        assert_eq!(round2(ratio), 15.69);
        assert!(matches!(
            contrast_ratio_hex("#fff", "#000000"),
            Err(HexError::BadLength { len: 3, .. })
        ));
    }

    #[test]
    fn round2_uses_the_stored_binary_value() {
        assert_eq!(round2(1.115), 1.11);
        assert_eq!(round2(2.675), 2.67);
        assert_eq!(round2(1.116), 1.12);
        assert_eq!(round2(4.478_398), 4.48);
        assert_eq!(round2(0.0), 0.0);
        assert_eq!(round2(21.0), 21.0);
    }

    #[test]
    fn known_ratios() {
        for (fg, bg, expected) in [
            ("#767676", "#ffffff", 4.54),
            ("#e4e4e8", "#09090b", 15.69),
            ("#444444", "#333333", 1.3),
        ] {
            let ratio = contrast_ratio(hex(fg), hex(bg));
            assert_eq!(round2(ratio), expected, "{fg} on {bg}");
        }
    }

    // ── Thresholds ──────────────────────────────────────────────────

    #[test]
    fn aa_threshold_is_inclusive() {
        assert!(meets_aa(4.5));
        assert!(!meets_aa(4.499_999));
        assert!(meets_aa_large(3.0));
        assert!(!meets_aa_large(2.999));
    }

    #[test]
    fn aa_is_monotonic() {
        let mut seen_pass = false;
        for step in 0..=2100 {
            let ratio = f64::from(step) / 100.0;
            let pass = meets_aa(ratio);
            assert!(!(seen_pass && !pass), "AA flipped back at {ratio}");
            seen_pass |= pass;
        }
    }

    #[test]
    fn compliance_flags() {
        assert_eq!(Compliance::from_ratio(1.2), Compliance::empty());
        assert_eq!(Compliance::from_ratio(3.5), Compliance::AA_LARGE);
        assert_eq!(Compliance::from_ratio(7.0), Compliance::all());
    }

    // ── ContrastResult ──────────────────────────────────────────────

    #[test]
    fn evaluate_high_contrast_pair() {
        let r = ContrastResult::evaluate(Some("#e4e4e8"), Some("#09090b"));
        assert_eq!(r.ratio, 15.69);
        assert!(r.passes_aa);
    }

    #[test]
    fn evaluate_alpha_is_ignored() {
        let plain = ContrastResult::evaluate(Some("#e4e4e8"), Some("#09090b"));
        let alpha = ContrastResult::evaluate(Some("#e4e4e8ff"), Some("#09090b80"));
        assert_eq!(plain, alpha);
    }

    #[test]
    fn evaluate_malformed_is_failing_zero() {
        for (fg, bg) in [
            (None, Some("#000000")),
            (Some("#ffffff"), None),
            (Some(""), Some("#000000")),
            (Some("ffffff"), Some("#000000")),
            (Some("#ffffff"), Some("#zzzzzz")),
            (Some("#fff"), Some("#000000")),
        ] {
            let result = ContrastResult::evaluate(fg, bg);
            assert_eq!(result, ContrastResult::MALFORMED, "{fg:?}/{bg:?}");
        }
    }

    #[test]
    fn verdict_uses_unrounded_ratio() {
        // #777777 on white is 4.478..., which rounds to 4.48 and fails.
        let r = ContrastResult::of(hex("#777777"), Rgb::WHITE);
        assert!(!r.passes_aa);
        assert!(r.ratio < AA_NORMAL);
    }

    #[test]
    fn serializes_with_wcag_aa_key() {
        let result = ContrastResult::of(hex("#444444"), hex("#333333"));
        let json = serde_json::to_string(&result).unwrap();
        assert_eq!(json, r#"{"ratio":1.3,"wcag_aa":false}"#);
    }

    // ── Palette audit ───────────────────────────────────────────────

    #[test]
    fn audit_default_palette() {
        let audit = audit_palette(&Palette::generate(211, 201, Level::Carbon));
        assert_eq!(audit.text, 10.7);
        assert_eq!(audit.comment, 1.81);
        assert_eq!(audit.accent, 6.67);
        // Comments sit below AA large on carbon.
        assert!(!audit.verified);
    }
}
