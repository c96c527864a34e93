//! VS Code theme ingestion and report persistence.
//!
//! Only two keys matter here: `colors["editor.foreground"]` and
//! `colors["editor.background"]`. A theme that cannot be read or parsed is
//! still returned, with both colors missing, so it shows up in the report as
//! a failure instead of silently disappearing.

use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use prism_theme::{ContrastPair, CorpusReport};
use regex::Regex;
use serde::Deserialize;

const FOREGROUND_KEY: &str = "editor.foreground";
const BACKGROUND_KEY: &str = "editor.background";

/// The subset of a VS Code color theme we read.
#[derive(Debug, Default, Deserialize)]
struct VscodeTheme {
    #[serde(default)]
    colors: BTreeMap<String, serde_json::Value>,
}

impl VscodeTheme {
    fn color(&self, key: &str) -> Option<&str> {
        self.colors.get(key).and_then(serde_json::Value::as_str)
    }
}

/// Theme identifier: the file name without its extension.
fn theme_id(path: &Path) -> String {
    path.file_stem().map_or_else(
        || path.display().to_string(),
        |stem| stem.to_string_lossy().into_owned(),
    )
}

fn parse_theme(path: &Path) -> Result<VscodeTheme> {
    let text = fs::read_to_string(path)?;
    Ok(serde_json::from_str(&text)?)
}

/// Read one theme file into a contrast pair.
#[must_use]
pub fn read_pair(path: &Path) -> ContrastPair {
    let id = theme_id(path);
    match parse_theme(path) {
        Ok(theme) => {
            let fg = theme.color(FOREGROUND_KEY);
            let bg = theme.color(BACKGROUND_KEY);
            ContrastPair::new(id, fg, bg)
        }
        Err(e) => {
            tracing::warn!(path = ?path, error = %e, "unreadable theme, recording as failure");
            ContrastPair::new(id, None, None)
        }
    }
}

/// List `*.json` files in `dir`, sorted by path.
fn theme_files(dir: &Path) -> Result<Vec<PathBuf>> {
    let entries = fs::read_dir(dir)
        .with_context(|| format!("Failed to read themes directory: {}", dir.display()))?;

    let mut files = Vec::new();
    for entry in entries {
        let path = entry
            .with_context(|| format!("Failed to list themes directory: {}", dir.display()))?
            .path();
        if path.is_file() && path.extension().is_some_and(|ext| ext == "json") {
            files.push(path);
        }
    }
    files.sort();
    Ok(files)
}

/// Read every theme in `dir`, keeping only identifiers that match `only`.
pub fn load_corpus(dir: &Path, only: Option<&Regex>) -> Result<Vec<ContrastPair>> {
    let pairs: Vec<ContrastPair> = theme_files(dir)?
        .iter()
        .filter(|path| only.is_none_or(|re| re.is_match(&theme_id(path))))
        .map(|path| read_pair(path))
        .collect();
    tracing::info!(dir = %dir.display(), themes = pairs.len(), "loaded theme corpus");
    Ok(pairs)
}

/// Write the report as pretty JSON, creating parent directories.
pub fn write_report(path: &Path, report: &CorpusReport) -> Result<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create report directory: {}", parent.display()))?;
    }
    let mut json = serde_json::to_string_pretty(report).context("Failed to serialize report")?;
    json.push('\n');
    fs::write(path, json).with_context(|| format!("Failed to write report: {}", path.display()))?;
    tracing::info!(path = %path.display(), entries = report.len(), "wrote contrast report");
    Ok(())
}
