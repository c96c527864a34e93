//! Layered configuration for the `prism` command.
//!
//! Values resolve with the following priority (highest first):
//! 1. CLI arguments
//! 2. Environment variables (`PRISM_HERO_HUE`, `PRISM_AXIS_HUE`, `PRISM_LEVEL`)
//! 3. TOML configuration file (`--config`, `PRISM_CONFIG`, or `./prism.toml`)
//! 4. Default values
//!
//! Layers 1 and 2 are merged by clap before anything here runs, so this
//! module only ever sees "the command line said X" or "nothing was given".
//!
//! # Example Configuration
//!
//! ```toml
//! [palette]
//! hero_hue = 320
//! axis_hue = 201
//! level = "void"
//!
//! [validate]
//! themes_dir = "vscode/themes"
//! report = "media/wcag_results.json"
//! ```

use std::fs;
use std::path::{Path, PathBuf};

use prism_theme::Level;
use prism_theme::palette::{DEFAULT_AXIS_HUE, DEFAULT_HERO_HUE};
use serde::Deserialize;
use thiserror::Error;

/// Config file looked up in the working directory when none is named.
pub const DEFAULT_CONFIG_FILE: &str = "prism.toml";

pub const DEFAULT_THEMES_DIR: &str = "vscode/themes";

pub const DEFAULT_REPORT: &str = "media/wcag_results.json";

// =============================================================================
// Error Types
// =============================================================================

/// Errors that can occur when loading configuration
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Failed to read config file
    #[error("Failed to read config file at {path}: {source}")]
    ReadError {
        path: PathBuf,
        source: std::io::Error,
    },

    /// Failed to parse TOML
    #[error("Failed to parse TOML config: {0}")]
    ParseError(#[from] toml::de::Error),
}

// =============================================================================
// TOML Configuration Structures
// =============================================================================

/// `[palette]` section
#[derive(Clone, Debug, Default, Deserialize, PartialEq, Eq)]
#[serde(default, deny_unknown_fields)]
pub struct PaletteToml {
    pub hero_hue: Option<i32>,
    pub axis_hue: Option<i32>,
    pub level: Option<String>,
}

/// `[validate]` section
#[derive(Clone, Debug, Default, Deserialize, PartialEq, Eq)]
#[serde(default, deny_unknown_fields)]
pub struct ValidateToml {
    pub themes_dir: Option<PathBuf>,
    pub report: Option<PathBuf>,
}

/// The whole configuration file. Every key is optional.
#[derive(Clone, Debug, Default, Deserialize, PartialEq, Eq)]
#[serde(default, deny_unknown_fields)]
pub struct ConfigFile {
    pub palette: PaletteToml,
    pub validate: ValidateToml,
}

impl ConfigFile {
    /// Parse configuration from TOML text.
    pub fn parse(text: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(text)?)
    }

    /// Load the named file, or `./prism.toml` if it exists, or defaults.
    ///
    /// An explicitly named file must exist; the implicit one is optional.
    pub fn load(explicit: Option<&Path>) -> Result<Self, ConfigError> {
        let path = match explicit {
            Some(path) => path.to_path_buf(),
            None => {
                let implicit = PathBuf::from(DEFAULT_CONFIG_FILE);
                if !implicit.is_file() {
                    tracing::debug!("no config file, using defaults");
                    return Ok(Self::default());
                }
                implicit
            }
        };

        let text = fs::read_to_string(&path)
            .map_err(|source| ConfigError::ReadError {
                path: path.clone(),
                source,
            })?;
        let config = Self::parse(&text)?;
        tracing::info!(path = ?path, "loaded config file");
        Ok(config)
    }
}

// =============================================================================
// Resolved settings
// =============================================================================

/// Palette parameters after all layers are applied.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PaletteSettings {
    pub hero_hue: i32,
    pub axis_hue: i32,
    pub level: Level,
}

impl PaletteSettings {
    /// Merge command-line values over the file section over defaults.
    ///
    /// An unknown level name, from either layer, falls back to `carbon`.
    #[must_use]
    pub fn resolve(
        hero_hue: Option<i32>,
        axis_hue: Option<i32>,
        level: Option<&str>,
        file: &PaletteToml,
    ) -> Self {
        let level = level
            .or(file.level.as_deref())
            .map_or_else(Level::default, Level::resolve);
        Self {
            hero_hue: hero_hue.or(file.hero_hue).unwrap_or(DEFAULT_HERO_HUE),
            axis_hue: axis_hue.or(file.axis_hue).unwrap_or(DEFAULT_AXIS_HUE),
            level,
        }
    }
}

/// Corpus validation paths after all layers are applied.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ValidateSettings {
    pub themes_dir: PathBuf,
    pub report: PathBuf,
}

impl ValidateSettings {
    #[must_use]
    pub fn resolve(
        themes_dir: Option<PathBuf>,
        report: Option<PathBuf>,
        file: &ValidateToml,
    ) -> Self {
        Self {
            themes_dir: themes_dir
                .or_else(|| file.themes_dir.clone())
                .unwrap_or_else(|| PathBuf::from(DEFAULT_THEMES_DIR)),
            report: report
                .or_else(|| file.report.clone())
                .unwrap_or_else(|| PathBuf::from(DEFAULT_REPORT)),
        }
    }
}
