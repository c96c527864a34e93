// SPDX-License-Identifier: MIT
//
// prism — deterministic base16 palettes and WCAG contrast checks.
//
// This is the command-line front-end over the two library crates:
//
//   prism-color → hue normalization, integer HSL → RGB, hex codec
//   prism-theme → level table, palette recipe, contrast, consistency
//
// Subcommands:
//
//   palette   hero/axis/level (or a preset) → 16 slots, optional roles
//   contrast  one fg/bg pair → ratio and AA verdict
//   validate  directory of VS Code themes → wcag_results.json
//   check     frozen reference palette + edge vectors → pass/fail
//   presets   list the built-in hero presets
//
// Logging goes to stderr so stdout stays machine-readable. Set RUST_LOG
// for fine-grained filtering; otherwise --log-level applies to both crates.

mod config;
mod themes;

use std::io::{self, Write};
use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::{Context, Result, bail};
use clap::{Parser, Subcommand};
use regex::Regex;
use serde_json::{Map, Value, json};

use prism_theme::contrast::{AA_LARGE, AA_NORMAL};
use prism_color::Rgb;
use prism_theme::roles::{SYNTAX, UI, resolve_roles};
use prism_theme::{
    Compliance, ContrastResult, Palette, PaletteAudit, Slot, audit_palette, builtin_names,
    builtin_preset, consistency, contrast_ratio_hex, validate_corpus,
};

use config::{ConfigFile, PaletteSettings, PaletteToml, ValidateSettings};

/// Deterministic base16 palette generator and WCAG contrast checker
#[derive(Parser, Debug)]
#[command(name = "prism")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Configuration file path (defaults to ./prism.toml when present)
    #[arg(
        short = 'c',
        long,
        global = true,
        env = "PRISM_CONFIG",
        value_name = "FILE"
    )]
    config: Option<PathBuf>,

    /// Log level (trace, debug, info, warn, error)
    #[arg(
        short = 'l',
        long,
        global = true,
        env = "PRISM_LOG_LEVEL",
        default_value = "warn"
    )]
    log_level: String,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Generate a 16-slot palette
    Palette {
        /// Hero hue in degrees; any integer, normalized into [0, 360)
        #[arg(
            long,
            env = "PRISM_HERO_HUE",
            allow_negative_numbers = true,
            value_name = "DEG"
        )]
        hero: Option<i32>,

        /// Axis hue in degrees for base08/base09
        #[arg(
            long,
            env = "PRISM_AXIS_HUE",
            allow_negative_numbers = true,
            value_name = "DEG"
        )]
        axis: Option<i32>,

        /// Background level: void, deep, night, carbon, github
        #[arg(long, env = "PRISM_LEVEL", value_name = "NAME")]
        level: Option<String>,

        /// Start from a built-in preset; explicit flags still win
        #[arg(short, long, value_name = "NAME")]
        preset: Option<String>,

        /// Print JSON instead of text
        #[arg(long)]
        json: bool,

        /// Include the syntax and UI role mapping
        #[arg(long)]
        roles: bool,
    },

    /// Check one foreground/background pair
    Contrast {
        /// Foreground color (#rrggbb or #rrggbbaa)
        fg: String,

        /// Background color (#rrggbb or #rrggbbaa)
        bg: String,

        /// Print JSON instead of text
        #[arg(long)]
        json: bool,
    },

    /// Validate a directory of VS Code themes and write a report
    Validate {
        /// Directory containing *.json theme files
        #[arg(long, value_name = "DIR")]
        themes_dir: Option<PathBuf>,

        /// Where to write the JSON report
        #[arg(long, value_name = "FILE")]
        report: Option<PathBuf>,

        /// Only validate themes whose identifier matches this pattern
        #[arg(long, value_name = "REGEX")]
        only: Option<String>,
    },

    /// Compare the generator against frozen reference values
    Check,

    /// List built-in presets
    Presets,
}

fn init_logging(level: &str) {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        tracing_subscriber::EnvFilter::new(format!(
            "prism={level},prism_theme={level},prism_color={level}"
        ))
    });

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_target(false)
        .init();
}

fn main() -> Result<ExitCode> {
    let cli = Cli::parse();
    init_logging(&cli.log_level);

    let config = ConfigFile::load(cli.config.as_deref())?;

    match cli.command {
        Command::Palette {
            hero,
            axis,
            level,
            preset,
            json,
            roles,
        } => {
            let file = match preset {
                Some(name) => preset_layer(&name)?,
                None => config.palette,
            };
            let settings = PaletteSettings::resolve(hero, axis, level.as_deref(), &file);
            palette(settings, json, roles)
        }
        Command::Contrast { fg, bg, json } => contrast(&fg, &bg, json),
        Command::Validate {
            themes_dir,
            report,
            only,
        } => {
            let settings = ValidateSettings::resolve(themes_dir, report, &config.validate);
            let only = only
                .map(|pattern| {
                    Regex::new(&pattern)
                        .with_context(|| format!("Invalid --only pattern: {pattern}"))
                })
                .transpose()?;
            validate(&settings, only.as_ref())
        }
        Command::Check => Ok(check()),
        Command::Presets => {
            presets()?;
            Ok(ExitCode::SUCCESS)
        }
    }
}

/// A preset stands in for the `[palette]` file section.
fn preset_layer(name: &str) -> Result<PaletteToml> {
    let Some(preset) = builtin_preset(name) else {
        bail!("Unknown preset '{name}' (available: {})", builtin_names().join(", "));
    };
    Ok(PaletteToml {
        hero_hue: Some(preset.hero_hue),
        axis_hue: Some(preset.axis_hue),
        level: Some(preset.level.name().to_string()),
    })
}

// ─── palette ────────────────────────────────────────────────────────────────

fn role_map(roles: Vec<(&'static str, Rgb)>) -> Map<String, Value> {
    roles
        .into_iter()
        .map(|(role, color)| (role.to_string(), Value::String(color.to_hex())))
        .collect()
}

fn audit_line(audit: &PaletteAudit) -> String {
    format!(
        "audit: text {:.2}  comment {:.2}  accent {:.2}  verified {}",
        audit.text,
        audit.comment,
        audit.accent,
        if audit.verified { "yes" } else { "no" },
    )
}

fn palette(settings: PaletteSettings, as_json: bool, with_roles: bool) -> Result<ExitCode> {
    let PaletteSettings {
        hero_hue,
        axis_hue,
        level,
    } = settings;
    tracing::info!(hero_hue, axis_hue, %level, "generating palette");
    let palette = Palette::generate(hero_hue, axis_hue, level);
    let audit = audit_palette(&palette);

    let mut out = io::stdout().lock();
    if as_json {
        let mut doc = json!({
            "hero_hue": hero_hue,
            "axis_hue": axis_hue,
            "level": level.name(),
            "palette": palette,
            "audit": audit,
        });
        if with_roles {
            doc["syntax"] = Value::Object(role_map(SYNTAX.resolve(&palette)));
            doc["ui"] = Value::Object(role_map(UI.resolve(&palette)));
        }
        writeln!(out, "{}", serde_json::to_string_pretty(&doc)?)?;
    } else {
        for (slot, color) in palette.iter() {
            writeln!(out, "{slot} {color}")?;
        }
        if with_roles {
            writeln!(out)?;
            for (role, color) in resolve_roles(&palette) {
                writeln!(out, "{role:<12} {color}")?;
            }
        }
        writeln!(out)?;
        writeln!(out, "{}", audit_line(&audit))?;
    }
    Ok(ExitCode::SUCCESS)
}

// ─── contrast ───────────────────────────────────────────────────────────────

fn contrast(fg: &str, bg: &str, as_json: bool) -> Result<ExitCode> {
    let result = ContrastResult::evaluate(Some(fg), Some(bg));
    let levels = contrast_ratio_hex(fg, bg).map_or(Compliance::empty(), Compliance::from_ratio);

    let mut out = io::stdout().lock();
    if as_json {
        writeln!(out, "{}", serde_json::to_string_pretty(&result)?)?;
    } else {
        let verdict = |pass: bool| if pass { "pass" } else { "fail" };
        writeln!(
            out,
            "{fg} on {bg}: {:.2}:1  AA ({AA_NORMAL}) {}  AA large ({AA_LARGE}) {}",
            result.ratio,
            verdict(result.passes_aa),
            verdict(levels.contains(Compliance::AA_LARGE)),
        )?;
    }

    Ok(if result.passes_aa {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    })
}

// ─── validate ───────────────────────────────────────────────────────────────

fn validate(settings: &ValidateSettings, only: Option<&Regex>) -> Result<ExitCode> {
    let pairs = themes::load_corpus(&settings.themes_dir, only)?;
    let report = validate_corpus(pairs);
    themes::write_report(&settings.report, &report)?;

    let failures = report.failures();
    println!(
        "{} themes checked, {} failing, report at {}",
        report.len(),
        failures.len(),
        settings.report.display()
    );
    if failures.is_empty() {
        return Ok(ExitCode::SUCCESS);
    }

    let mut err = io::stderr().lock();
    for id in failures {
        if let Some(result) = report.get(id) {
            writeln!(err, "FAIL {id}: {:.2}", result.ratio)?;
        }
    }
    Ok(ExitCode::FAILURE)
}

// ─── check ──────────────────────────────────────────────────────────────────

fn check() -> ExitCode {
    let report = consistency::run();
    for slot in &report.slots {
        println!("{slot}");
    }
    for vector in &report.vectors {
        println!("{vector}");
    }

    if report.passed() {
        println!("all {} checks passed", report.slots.len() + report.vectors.len());
        ExitCode::SUCCESS
    } else {
        eprintln!("{} mismatches", report.mismatches());
        ExitCode::FAILURE
    }
}

// ─── presets ────────────────────────────────────────────────────────────────

fn presets() -> Result<()> {
    let mut out = io::stdout().lock();
    for &name in builtin_names() {
        if let Some(preset) = builtin_preset(name) {
            let accent = preset.palette().get(Slot::Base0A);
            writeln!(
                out,
                "{name:<12} hero {:>3}  axis {:>3}  {:<7} {accent}",
                preset.hero_hue,
                preset.axis_hue,
                preset.level.name(),
            )?;
        }
    }
    Ok(())
}
