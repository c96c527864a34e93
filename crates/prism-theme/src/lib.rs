//! # prism-theme — deterministic base16 palettes with WCAG checks
//!
//! Generates a complete base16 palette from three parameters and checks
//! text/background pairs for WCAG AA contrast. The palette path is integer
//! only (see `prism-color`), so every port of the recipe produces the same
//! bytes; the consistency module pins that down against frozen values.
//!
//! # Architecture
//!
//! ```text
//! hero_hue + axis_hue + Level
//!     │
//!     ▼
//! level.rs:       background depth offset
//!     │
//!     ▼
//! palette.rs:     16-slot recipe table → integer HSL → #rrggbb
//!     │
//!     ├──▶ roles.rs:       base16 slot → syntax/UI role
//!     ├──▶ builtin.rs:     named hero presets
//!     └──▶ consistency.rs: compare against frozen reference values
//!
//! (id, fg, bg) pairs
//!     │
//!     ▼
//! contrast.rs:    relative luminance, ratio, AA / AA-large
//!     │
//!     ▼
//! corpus.rs:      per-theme results sorted by id, failing ids
//! ```
//!
//! Everything here is a pure function over values. Tables are `const`.

// Luminance and ratio names (la/lb, r/g/b) are standard in color science.
#![allow(clippy::many_single_char_names)]
#![allow(clippy::similar_names)]
// Tests compare against exact published two-decimal ratios.
#![cfg_attr(test, allow(clippy::float_cmp))]

pub mod builtin;
pub mod consistency;
pub mod contrast;
pub mod corpus;
pub mod level;
pub mod palette;
pub mod roles;

pub use builtin::{Preset, builtin_names, builtin_preset};
pub use consistency::ConsistencyReport;
pub use contrast::{
    Compliance, ContrastResult, PaletteAudit, audit_palette, contrast_ratio, contrast_ratio_hex,
    meets_aa, meets_aa_large, relative_luminance,
};
pub use corpus::{ContrastPair, CorpusReport, validate_corpus};
pub use level::Level;
pub use palette::{Palette, Slot, generate_palette, generate_palette_named};
