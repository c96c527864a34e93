//! Named preset palettes — ready-to-use parameter triples.
//!
//! Each preset is a hero hue paired with the default axis hue and level.

use crate::level::Level;
use crate::palette::{DEFAULT_AXIS_HUE, Palette};

/// A named `(hero_hue, axis_hue, level)` triple.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Preset {
    pub name: &'static str,
    pub hero_hue: i32,
    pub axis_hue: i32,
    pub level: Level,
}

impl Preset {
    const fn carbon(name: &'static str, hero_hue: i32) -> Self {
        Self {
            name,
            hero_hue,
            axis_hue: DEFAULT_AXIS_HUE,
            level: Level::Carbon,
        }
    }

    #[must_use]
    pub fn palette(&self) -> Palette {
        Palette::generate(self.hero_hue, self.axis_hue, self.level)
    }
}

const PRESETS: [Preset; 4] = [
    Preset::carbon("monochrome", 211),
    Preset::carbon("razorgirl", 320),
    Preset::carbon("amber", 34),
    Preset::carbon("cyan", 195),
];

/// Look up a builtin preset by name.
///
/// `"default"` is an alias for `monochrome`. Returns `None` if the name is
/// not recognized.
#[must_use]
pub fn builtin_preset(name: &str) -> Option<Preset> {
    let name = if name == "default" { "monochrome" } else { name };
    PRESETS.into_iter().find(|p| p.name == name)
}

/// List all available builtin preset names.
#[must_use]
pub const fn builtin_names() -> &'static [&'static str] {
    &["default", "monochrome", "razorgirl", "amber", "cyan"]
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use crate::palette::Slot;

    #[test]
    fn all_builtins_resolve() {
        for name in builtin_names() {
            assert!(builtin_preset(name).is_some(), "unresolved builtin '{name}'");
        }
    }

    #[test]
    fn unknown_returns_none() {
        assert!(builtin_preset("nonexistent").is_none());
    }

    #[test]
    fn default_is_monochrome() {
        assert_eq!(builtin_preset("default"), builtin_preset("monochrome"));
    }

    #[test]
    fn monochrome_is_the_canonical_palette() {
        let p = builtin_preset("monochrome").unwrap().palette();
        assert_eq!(p, Palette::generate(211, 201, Level::Carbon));
    }

    #[test]
    fn amber_accents() {
        let p = builtin_preset("amber").unwrap().palette();
        assert_eq!(p.hex(Slot::Base0A), "#ffb452");
        assert_eq!(p.hex(Slot::Base0B), "#ffa024");
        assert_eq!(p.hex(Slot::Base0E), "#ffbf6b");
    }

    #[test]
    fn cyan_accents() {
        let p = builtin_preset("cyan").unwrap().palette();
        assert_eq!(p.hex(Slot::Base0A), "#52d4ff");
        assert_eq!(p.hex(Slot::Base0F), "#20bbee");
    }

    #[test]
    fn each_builtin_is_distinct() {
        let accents: Vec<_> = PRESETS.iter().map(|p| p.palette().get(Slot::Base0A)).collect();
        for (i, a) in accents.iter().enumerate() {
            for b in &accents[i + 1..] {
                assert_ne!(a, b);
            }
        }
    }
}
