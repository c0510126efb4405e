//! Info command: version, formula and effective scoring settings.

use clap::Args;
use legible_core::config::{Config, ConfigSources};
use legible_core::readability::Difficulty;
use owo_colors::OwoColorize;
use serde::Serialize;
use tracing::{debug, instrument};

/// Arguments for the `info` subcommand.
#[derive(Args, Debug, Default)]
pub struct InfoArgs {}

/// Lower bound of each band, easiest last.
const BAND_FLOORS: &[f64] = &[0.0, 30.0, 50.0, 60.0, 70.0, 80.0, 90.0];

#[derive(Serialize)]
struct Report {
    name: &'static str,
    version: &'static str,
    description: &'static str,
    formula: &'static str,
    config: Settings,
}

#[derive(Serialize)]
struct Settings {
    #[serde(skip_serializing_if = "Option::is_none")]
    config_file: Option<String>,
    log_level: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    log_dir: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    min_score: Option<f64>,
    aggregation: &'static str,
    parallel_threshold: usize,
    #[serde(skip_serializing_if = "Option::is_none")]
    max_input_bytes: Option<usize>,
}

impl Settings {
    fn new(config: &Config, sources: &ConfigSources) -> Self {
        Self {
            config_file: sources.primary_file().map(ToString::to_string),
            log_level: config.log_level.as_str(),
            log_dir: config.log_dir.as_ref().map(ToString::to_string),
            min_score: config.min_score,
            aggregation: config.aggregation.as_str(),
            parallel_threshold: config.score_options().parallel_threshold,
            max_input_bytes: config.input_limit(),
        }
    }
}

impl Report {
    fn new(config: &Config, sources: &ConfigSources) -> Self {
        Self {
            name: env!("CARGO_PKG_NAME"),
            version: env!("CARGO_PKG_VERSION"),
            description: env!("CARGO_PKG_DESCRIPTION"),
            formula: "206.84 - 60 * syllables/words - 102 * sentences/words",
            config: Settings::new(config, sources),
        }
    }
}

/// Print the version, the scoring formula and the settings in effect.
#[instrument(name = "cmd_info", skip_all)]
pub fn cmd_info(
    _args: InfoArgs,
    global_json: bool,
    config: &Config,
    sources: &ConfigSources,
) -> anyhow::Result<()> {
    debug!(json_output = global_json, "executing info command");
    let report = Report::new(config, sources);

    if global_json {
        println!("{}", serde_json::to_string_pretty(&report)?);
        return Ok(());
    }

    println!("{} {}", report.name.bold(), report.version.green());
    println!("{}", report.description);

    println!();
    println!("{}", "Fernández-Huerta".bold().underline());
    println!("  {}", report.formula);
    println!("  Text without words scores 0.0.");
    for floor in BAND_FLOORS {
        println!("  {floor:>4.0}+  {}", Difficulty::from_score(*floor));
    }

    let settings = &report.config;
    println!();
    println!("{}", "Scoring".bold().underline());
    match settings.min_score {
        Some(min) => println!("  {}: {min:.1}", "Gate".dimmed()),
        None => println!("  {}: {}", "Gate".dimmed(), "off".yellow()),
    }
    println!(
        "  {}: {} (parallel from {} words)",
        "Syllable sum".dimmed(),
        settings.aggregation,
        settings.parallel_threshold
    );
    match settings.max_input_bytes {
        Some(max) => println!("  {}: {max} bytes", "Input limit".dimmed()),
        None => println!("  {}: {}", "Input limit".dimmed(), "none".yellow()),
    }

    println!();
    println!("{}", "Sources".bold().underline());
    match settings.config_file {
        Some(ref path) => println!("  {}: {}", "Config".dimmed(), path.cyan()),
        None => println!("  {}: {}", "Config".dimmed(), "defaults".yellow()),
    }
    println!("  {}: {}", "Log level".dimmed(), settings.log_level);
    if let Some(ref dir) = settings.log_dir {
        println!("  {}: {dir}", "Log directory".dimmed());
    }

    Ok(())
}
