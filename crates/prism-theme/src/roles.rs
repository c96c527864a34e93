//! Semantic roles — which base16 slot each syntax token and UI element uses.
//!
//! Editor and terminal ports all read the same assignment, so a palette
//! change shows up identically everywhere. This is a fixed lookup; no color
//! math happens here.

use prism_color::Rgb;
use serde::Serialize;

use crate::palette::{Palette, Slot};

/// Syntax token colors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct SyntaxRoles {
    pub comment: Slot,
    pub string: Slot,
    pub number: Slot,
    pub keyword: Slot,
    pub function: Slot,
    #[serde(rename = "type")]
    pub type_name: Slot,
    pub variable: Slot,
    pub property: Slot,
    pub operator: Slot,
    pub punctuation: Slot,
    pub tag: Slot,
    pub attribute: Slot,
}

/// Editor chrome and diagnostic colors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct UiRoles {
    pub bg: Slot,
    pub fg: Slot,
    pub accent: Slot,
    pub error: Slot,
    pub warning: Slot,
    pub success: Slot,
    pub info: Slot,
}

pub const SYNTAX: SyntaxRoles = SyntaxRoles {
    comment: Slot::Base03,
    string: Slot::Base0B,
    number: Slot::Base09,
    keyword: Slot::Base0E,
    function: Slot::Base0D,
    type_name: Slot::Base0A,
    variable: Slot::Base05,
    property: Slot::Base05,
    operator: Slot::Base04,
    punctuation: Slot::Base04,
    tag: Slot::Base08,
    attribute: Slot::Base09,
};

pub const UI: UiRoles = UiRoles {
    bg: Slot::Base00,
    fg: Slot::Base05,
    accent: Slot::Base0A,
    error: Slot::Base08,
    warning: Slot::Base09,
    success: Slot::Base0B,
    info: Slot::Base0D,
};

impl SyntaxRoles {
    /// `(role, slot)` pairs in declaration order.
    #[must_use]
    pub const fn entries(&self) -> [(&'static str, Slot); 12] {
        [
            ("comment", self.comment),
            ("string", self.string),
            ("number", self.number),
            ("keyword", self.keyword),
            ("function", self.function),
            ("type", self.type_name),
            ("variable", self.variable),
            ("property", self.property),
            ("operator", self.operator),
            ("punctuation", self.punctuation),
            ("tag", self.tag),
            ("attribute", self.attribute),
        ]
    }

    /// Each syntax role paired with its color in `palette`.
    #[must_use]
    pub fn resolve(&self, palette: &Palette) -> Vec<(&'static str, Rgb)> {
        resolve_entries(palette, &self.entries())
    }
}

impl UiRoles {
    /// `(role, slot)` pairs in declaration order.
    #[must_use]
    pub const fn entries(&self) -> [(&'static str, Slot); 7] {
        [
            ("bg", self.bg),
            ("fg", self.fg),
            ("accent", self.accent),
            ("error", self.error),
            ("warning", self.warning),
            ("success", self.success),
            ("info", self.info),
        ]
    }

    /// Each UI role paired with its color in `palette`.
    #[must_use]
    pub fn resolve(&self, palette: &Palette) -> Vec<(&'static str, Rgb)> {
        resolve_entries(palette, &self.entries())
    }
}

fn resolve_entries(
    palette: &Palette,
    entries: &[(&'static str, Slot)],
) -> Vec<(&'static str, Rgb)> {
    entries
        .iter()
        .map(|&(role, slot)| (role, palette.get(slot)))
        .collect()
}

/// Resolve every role of `palette` to its color, syntax roles first.
#[must_use]
pub fn resolve_roles(palette: &Palette) -> Vec<(&'static str, Rgb)> {
    let mut roles = SYNTAX.resolve(palette);
    roles.extend(UI.resolve(palette));
    roles
}
