//! Base16 palette generation — the bridge from three parameters to 16 colors.
//!
//! A palette is fully determined by `(hero_hue, axis_hue, level)`. Each slot
//! has a fixed recipe in [`RECIPE`]; generation walks that table through the
//! integer HSL converter, so two implementations that share the table and
//! the converter produce byte-identical palettes.

use std::fmt;

use prism_color::{Hsl, Rgb};
use serde::ser::{Serialize, SerializeMap, Serializer};

use crate::level::Level;

/// Hue of the neutral ramp (`base00`–`base07`).
///
/// Pinned rather than taken from the caller: neutrals stay the same cool gray
/// whatever the accent. Whether this should become a parameter is still
/// open, so it is kept as observed in every existing port.
pub const NEUTRAL_HUE: i32 = 211;

/// Default hero hue ("perfect blue").
pub const DEFAULT_HERO_HUE: i32 = 211;

/// Default axis hue.
pub const DEFAULT_AXIS_HUE: i32 = 201;

// ---------------------------------------------------------------------------
// Slot
// ---------------------------------------------------------------------------

/// One of the 16 base16 color roles.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Slot {
    Base00,
    Base01,
    Base02,
    Base03,
    Base04,
    Base05,
    Base06,
    Base07,
    Base08,
    Base09,
    Base0A,
    Base0B,
    Base0C,
    Base0D,
    Base0E,
    Base0F,
}

impl Slot {
    /// All slots in base16 order. Also sorted by [`Slot::name`].
    #[rustfmt::skip]
    pub const ALL: [Self; 16] = [
        Self::Base00, Self::Base01, Self::Base02, Self::Base03,
        Self::Base04, Self::Base05, Self::Base06, Self::Base07,
        Self::Base08, Self::Base09, Self::Base0A, Self::Base0B,
        Self::Base0C, Self::Base0D, Self::Base0E, Self::Base0F,
    ];

    /// Position in [`Slot::ALL`].
    #[must_use]
    pub const fn index(self) -> usize {
        self as usize
    }

    /// The base16 identifier, e.g. `"base0A"`.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Base00 => "base00",
            Self::Base01 => "base01",
            Self::Base02 => "base02",
            Self::Base03 => "base03",
            Self::Base04 => "base04",
            Self::Base05 => "base05",
            Self::Base06 => "base06",
            Self::Base07 => "base07",
            Self::Base08 => "base08",
            Self::Base09 => "base09",
            Self::Base0A => "base0A",
            Self::Base0B => "base0B",
            Self::Base0C => "base0C",
            Self::Base0D => "base0D",
            Self::Base0E => "base0E",
            Self::Base0F => "base0F",
        }
    }

    /// Lookup by base16 identifier. The hex digit may be either case.
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|slot| slot.name().eq_ignore_ascii_case(name))
    }
}

impl fmt::Display for Slot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl Serialize for Slot {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.name())
    }
}

// ---------------------------------------------------------------------------
// Recipe table
// ---------------------------------------------------------------------------

/// Where a slot takes its hue from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HueSource {
    /// [`NEUTRAL_HUE`], independent of the caller.
    Neutral,
    /// The caller's secondary hue.
    Axis,
    /// The caller's primary accent hue.
    Hero,
}

/// How a slot's lightness is derived.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Lightness {
    /// Level offset plus a constant.
    Offset(u8),
    /// A constant, regardless of level.
    Fixed(u8),
}

/// The fixed formula for one slot.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Recipe {
    pub slot: Slot,
    pub hue: HueSource,
    pub saturation: u8,
    pub lightness: Lightness,
}

const fn recipe(slot: Slot, hue: HueSource, saturation: u8, lightness: Lightness) -> Recipe {
    Recipe {
        slot,
        hue,
        saturation,
        lightness,
    }
}

/// Every slot's formula, in slot order. Auditing or adding a slot is a
/// change to this table only.
#[rustfmt::skip]
pub const RECIPE: [Recipe; 16] = {
    use HueSource::{Axis, Hero, Neutral};
    use Lightness::{Fixed, Offset};
    [
        // Background ramp: follows the level.
        recipe(Slot::Base00, Neutral,  12, Offset(0)),
        recipe(Slot::Base01, Neutral,  16, Offset(3)),
        recipe(Slot::Base02, Neutral,  17, Offset(8)),
        recipe(Slot::Base03, Neutral,  15, Offset(17)),
        // Foreground ramp.
        recipe(Slot::Base04, Neutral,  12, Fixed(48)),
        recipe(Slot::Base05, Neutral,  28, Fixed(81)),
        recipe(Slot::Base06, Neutral,  32, Fixed(89)),
        recipe(Slot::Base07, Neutral,  36, Fixed(95)),
        // Axis accents.
        recipe(Slot::Base08, Axis,    100, Fixed(86)),
        recipe(Slot::Base09, Axis,    100, Fixed(75)),
        // Hero accents.
        recipe(Slot::Base0A, Hero,    100, Fixed(66)),
        recipe(Slot::Base0B, Hero,    100, Fixed(57)),
        recipe(Slot::Base0C, Hero,     94, Fixed(45)),
        recipe(Slot::Base0D, Hero,    100, Fixed(65)),
        recipe(Slot::Base0E, Hero,    100, Fixed(71)),
        recipe(Slot::Base0F, Hero,     86, Fixed(53)),
    ]
};

impl Recipe {
    /// Resolve this recipe to a concrete HSL triple.
    #[must_use]
    pub const fn hsl(self, hero_hue: i32, axis_hue: i32, level: Level) -> Hsl {
        let hue = match self.hue {
            HueSource::Neutral => NEUTRAL_HUE,
            HueSource::Axis => axis_hue,
            HueSource::Hero => hero_hue,
        };
        let lightness = match self.lightness {
            Lightness::Offset(add) => level.offset() + add,
            Lightness::Fixed(l) => l,
        };
        Hsl::new(hue, self.saturation, lightness)
    }
}

// ---------------------------------------------------------------------------
// Palette
// ---------------------------------------------------------------------------

/// A complete base16 palette.
///
/// Serializes as a map from slot name to `#rrggbb`, in slot order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Palette {
    colors: [Rgb; 16],
}

impl Palette {
    /// Generate a palette from the recipe table.
    ///
    /// ```
    /// use prism_theme::{Level, Palette, Slot};
    ///
    /// let p = Palette::generate(211, 201, Level::Carbon);
    /// assert_eq!(p.hex(Slot::Base00), "#191c1f");
    /// assert_eq!(p.hex(Slot::Base0A), "#52a5ff");
    /// ```
    #[must_use]
    pub fn generate(hero_hue: i32, axis_hue: i32, level: Level) -> Self {
        let colors = RECIPE.map(|r| r.hsl(hero_hue, axis_hue, level).to_rgb());
        tracing::debug!(hero_hue, axis_hue, %level, "generated palette");
        Self { colors }
    }

    #[inline]
    #[must_use]
    pub const fn get(&self, slot: Slot) -> Rgb {
        self.colors[slot.index()]
    }

    /// `#rrggbb` for one slot.
    #[must_use]
    pub fn hex(&self, slot: Slot) -> String {
        self.get(slot).to_hex()
    }

    /// `(slot, color)` pairs in slot order.
    pub fn iter(&self) -> impl Iterator<Item = (Slot, Rgb)> + '_ {
        Slot::ALL.into_iter().zip(self.colors.iter().copied())
    }
}

impl Serialize for Palette {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.colors.len()))?;
        for (slot, color) in self.iter() {
            map.serialize_entry(slot.name(), &color.to_hex())?;
        }
        map.end()
    }
}

/// Generate a palette. Free-function form of [`Palette::generate`].
#[must_use]
pub fn generate_palette(hero_hue: i32, axis_hue: i32, level: Level) -> Palette {
    Palette::generate(hero_hue, axis_hue, level)
}

/// Generate a palette from a level name; unknown names use `carbon`.
#[must_use]
pub fn generate_palette_named(hero_hue: i32, axis_hue: i32, level: &str) -> Palette {
    Palette::generate(hero_hue, axis_hue, Level::resolve(level))
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
