//! Cross-implementation consistency oracle.
//!
//! Recomputes the canonical palette and a battery of HSL edge vectors and
//! compares them against literal values frozen from an independent reference
//! implementation. Comparison is exact (hex strings ignore case); any
//! difference is a regression.

use std::fmt;

use prism_color::{Hsl, Rgb};

use crate::level::Level;
use crate::palette::{Palette, Slot};

/// The canonical parameter triple the reference palette was captured with.
pub const CANONICAL: (i32, i32, Level) = (211, 201, Level::Carbon);

/// `generate_palette(211, 201, carbon)` as produced by the reference port.
pub const REFERENCE_PALETTE: [(Slot, &str); 16] = [
    (Slot::Base00, "#191c1f"),
    (Slot::Base01, "#1e2329"),
    (Slot::Base02, "#283039"),
    (Slot::Base03, "#3d4752"),
    (Slot::Base04, "#6c7a89"),
    (Slot::Base05, "#c1cedc"),
    (Slot::Base06, "#dae2ec"),
    (Slot::Base07, "#eef2f7"),
    (Slot::Base08, "#b8e6ff"),
    (Slot::Base09, "#80d2ff"),
    (Slot::Base0A, "#52a5ff"),
    (Slot::Base0B, "#248eff"),
    (Slot::Base0C, "#076fdf"),
    (Slot::Base0D, "#4da3ff"),
    (Slot::Base0E, "#6bb3ff"),
    (Slot::Base0F, "#2084ee"),
];

/// HSL inputs with their exact expected RGB.
pub const EDGE_VECTORS: [(Hsl, Rgb); 6] = [
    (Hsl::new(0, 100, 50), Rgb::new(255, 0, 0)),
    (Hsl::new(120, 100, 50), Rgb::new(0, 255, 0)),
    (Hsl::new(240, 100, 50), Rgb::new(0, 0, 255)),
    (Hsl::new(0, 0, 0), Rgb::new(0, 0, 0)),
    (Hsl::new(0, 0, 100), Rgb::new(255, 255, 255)),
    (Hsl::new(0, 0, 50), Rgb::new(128, 128, 128)),
];

/// One palette slot compared against the reference.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SlotCheck {
    pub slot: Slot,
    pub expected: &'static str,
    pub actual: String,
}

impl SlotCheck {
    #[must_use]
    pub fn passed(&self) -> bool {
        self.actual.eq_ignore_ascii_case(self.expected)
    }
}

impl fmt::Display for SlotCheck {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mark = if self.passed() { "ok" } else { "MISMATCH" };
        write!(
            f,
            "{}: expected {} actual {} {mark}",
            self.slot, self.expected, self.actual
        )
    }
}

/// One HSL edge vector compared against its expected RGB.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct VectorCheck {
    pub input: Hsl,
    pub expected: Rgb,
    pub actual: Rgb,
}

impl VectorCheck {
    #[must_use]
    pub fn passed(&self) -> bool {
        self.actual == self.expected
    }
}

impl fmt::Display for VectorCheck {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let Hsl {
            hue,
            saturation,
            lightness,
        } = self.input;
        let (e, a) = (self.expected, self.actual);
        let mark = if self.passed() { "ok" } else { "MISMATCH" };
        write!(
            f,
            "hsl({hue},{saturation},{lightness}): expected ({},{},{}) actual ({},{},{}) {mark}",
            e.r, e.g, e.b, a.r, a.g, a.b
        )
    }
}

/// Every check, in table order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConsistencyReport {
    pub slots: Vec<SlotCheck>,
    pub vectors: Vec<VectorCheck>,
}

impl ConsistencyReport {
    /// True only if every slot and every vector matched.
    #[must_use]
    pub fn passed(&self) -> bool {
        self.slots.iter().all(SlotCheck::passed) && self.vectors.iter().all(VectorCheck::passed)
    }

    /// Number of failed checks.
    #[must_use]
    pub fn mismatches(&self) -> usize {
        self.slots.iter().filter(|c| !c.passed()).count()
            + self.vectors.iter().filter(|c| !c.passed()).count()
    }
}

/// Compare `palette` slot by slot against `reference`.
#[must_use]
pub fn check_palette(palette: &Palette, reference: &[(Slot, &'static str)]) -> Vec<SlotCheck> {
    reference
        .iter()
        .map(|&(slot, expected)| {
            let check = SlotCheck {
                slot,
                expected,
                actual: palette.hex(slot),
            };
            if !check.passed() {
                tracing::error!(%slot, expected, actual = %check.actual, "palette drift");
            }
            check
        })
        .collect()
}

/// Run each vector through the converter.
#[must_use]
pub fn check_vectors(vectors: &[(Hsl, Rgb)]) -> Vec<VectorCheck> {
    vectors
        .iter()
        .map(|&(input, expected)| {
            let check = VectorCheck {
                input,
                expected,
                actual: input.to_rgb(),
            };
            if !check.passed() {
                tracing::error!(?input, ?expected, actual = ?check.actual, "hsl drift");
            }
            check
        })
        .collect()
}

/// Run the full battery against the frozen reference tables.
#[must_use]
pub fn run() -> ConsistencyReport {
    let (hero, axis, level) = CANONICAL;
    let palette = Palette::generate(hero, axis, level);
    ConsistencyReport {
        slots: check_palette(&palette, &REFERENCE_PALETTE),
        vectors: check_vectors(&EDGE_VECTORS),
    }
}
