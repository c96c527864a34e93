// SPDX-License-Identifier: MIT
//
// prism-color — integer-exact color primitives for prism.
//
// The same HSL triple must land on the same 8-bit RGB triple in every
// implementation that consumes the prism palette recipe (Rust, Python, Lua,
// JavaScript, Elisp). Floating point rounding differs between those engines,
// so the HSL → RGB path here is pure integer arithmetic in milli-units
// (1000 = 100%). Floats only appear on the contrast side, where the WCAG
// formulas are defined over real numbers anyway.
//
//   hue (any i32) ──normalize_hue──▶ [0, 360)
//   Hsl ──hsl_to_rgb──▶ Rgb ──to_hex──▶ "#rrggbb"
//   "#rrggbb[aa]" ──parse_hex──▶ Rgb ──srgb_to_linear──▶ linear channels

pub mod hsl;
pub mod hue;
pub mod rgb;

pub use hsl::{Hsl, hsl_to_rgb};
pub use hue::normalize_hue;
pub use rgb::{HexError, Rgb, parse_hex, srgb_to_linear};
