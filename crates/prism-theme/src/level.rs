//! Named background depth presets.
//!
//! A level only moves the four background slots (`base00`–`base03`); every
//! foreground and accent slot is fixed regardless of level.

use std::fmt;

/// Background depth preset.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Level {
    /// Pure black base (OLED).
    Void,
    Deep,
    Night,
    /// The default.
    #[default]
    Carbon,
    /// Matches GitHub's dark surface.
    Github,
}

impl Level {
    /// Every level, darkest first.
    pub const ALL: [Self; 5] = [Self::Void, Self::Deep, Self::Night, Self::Carbon, Self::Github];

    /// Base lightness offset (percent) added to the background ramp.
    #[must_use]
    pub const fn offset(self) -> u8 {
        match self {
            Self::Void => 0,
            Self::Deep => 4,
            Self::Night => 8,
            Self::Carbon => 11,
            Self::Github => 16,
        }
    }

    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Void => "void",
            Self::Deep => "deep",
            Self::Night => "night",
            Self::Carbon => "carbon",
            Self::Github => "github",
        }
    }

    /// Exact, case-sensitive lookup.
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|level| level.name() == name)
    }

    /// Lookup that falls back to [`Level::Carbon`] for unknown names.
    #[must_use]
    pub fn resolve(name: &str) -> Self {
        Self::from_name(name).unwrap_or_else(|| {
            tracing::warn!(level = name, "unknown level, falling back to carbon");
            Self::default()
        })
    }
}

impl fmt::Display for Level {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn offsets() {
        assert_eq!(Level::Void.offset(), 0);
        assert_eq!(Level::Deep.offset(), 4);
        assert_eq!(Level::Night.offset(), 8);
        assert_eq!(Level::Carbon.offset(), 11);
        assert_eq!(Level::Github.offset(), 16);
    }

    #[test]
    fn default_is_carbon() {
        assert_eq!(Level::default(), Level::Carbon);
    }

    #[test]
    fn names_roundtrip() {
        for level in Level::ALL {
            assert_eq!(Level::from_name(level.name()), Some(level));
            assert_eq!(level.to_string(), level.name());
        }
    }

    #[test]
    fn lookup_is_case_sensitive() {
        assert_eq!(Level::from_name("Carbon"), None);
        assert_eq!(Level::from_name("VOID"), None);
    }

    #[test]
    fn unknown_falls_back_to_carbon() {
        assert_eq!(Level::resolve("abyss"), Level::Carbon);
        assert_eq!(Level::resolve(""), Level::Carbon);
        assert_eq!(Level::resolve("night"), Level::Night);
    }

    #[test]
    fn offsets_are_ascending() {
        let offsets: Vec<u8> = Level::ALL.iter().map(|l| l.offset()).collect();
        assert!(offsets.windows(2).all(|w| w[0] < w[1]));
    }
}
