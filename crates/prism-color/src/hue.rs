// SPDX-License-Identifier: MIT
//
// Hue wrapping. Every hue that enters the converter goes through here.

/// Degrees in a full turn.
pub const FULL_TURN: i32 = 360;

/// Wrap any signed hue into `[0, 360)`.
///
/// Written as the double-mod `((n % 360) + 360) % 360` rather than
/// `rem_euclid` so it reads identically to the other prism implementations;
/// Rust's `%` keeps the dividend's sign, and the second pass corrects it.
/// Total over `i32`: `n % 360` is within `(-360, 360)`, so the add never
/// overflows.
#[inline]
#[must_use]
pub const fn normalize_hue(n: i32) -> i32 {
    ((n % FULL_TURN) + FULL_TURN) % FULL_TURN
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn in_range_is_unchanged() {
        for h in [0, 1, 59, 60, 211, 359] {
            assert_eq!(normalize_hue(h), h);
        }
    }

    #[test]
    fn over_range_wraps() {
        assert_eq!(normalize_hue(360), 0);
        assert_eq!(normalize_hue(480), 120);
        assert_eq!(normalize_hue(721), 1);
    }

    #[test]
    fn negative_wraps_forward() {
        assert_eq!(normalize_hue(-1), 359);
        assert_eq!(normalize_hue(-120), 240);
        assert_eq!(normalize_hue(-360), 0);
        assert_eq!(normalize_hue(-721), 359);
    }

    #[test]
    fn extremes_do_not_overflow() {
        assert_eq!(normalize_hue(i32::MAX), i32::MAX.rem_euclid(360));
        assert_eq!(normalize_hue(i32::MIN), i32::MIN.rem_euclid(360));
    }

    #[test]
    fn always_in_range_and_periodic() {
        for n in (-2000..2000).step_by(7) {
            let h = normalize_hue(n);
            assert!((0..360).contains(&h), "normalize_hue({n}) = {h}");
            assert_eq!(normalize_hue(n + 360), h, "not periodic at {n}");
        }
    }

    #[test]
    fn idempotent() {
        for n in [-725, -360, -1, 0, 45, 359, 360, 1000] {
            let once = normalize_hue(n);
            assert_eq!(normalize_hue(once), once);
        }
    }
}
