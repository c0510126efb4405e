//! Logging setup for the CLI.
//!
//! Human-readable logs always go to stderr (stdout carries command output and
//! the MCP transport). When a log file or directory is configured, a JSONL
//! file layer is added through a non-blocking `tracing-appender` writer.

use std::path::{Path, PathBuf};

use anyhow::Context;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

/// Explicit log file path.
const LOG_PATH_ENV: &str = "LEGIBLE_LOG_PATH";
/// Log directory (daily rotated `legible.log`).
const LOG_DIR_ENV: &str = "LEGIBLE_LOG_DIR";
/// File name prefix for rotated logs.
const LOG_FILE_NAME: &str = "legible.log";

/// Where file logs go, if anywhere.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ObservabilityConfig {
    /// Single log file, never rotated. Wins over `log_dir`.
    pub log_path: Option<PathBuf>,
    /// Directory for daily rotated logs.
    pub log_dir: Option<PathBuf>,
}

impl ObservabilityConfig {
    /// Read `LEGIBLE_LOG_PATH` / `LEGIBLE_LOG_DIR`, falling back to the
    /// configured log directory.
    pub fn from_env_with_overrides(config_log_dir: Option<PathBuf>) -> Self {
        Self::resolve(
            std::env::var_os(LOG_PATH_ENV).map(PathBuf::from),
            std::env::var_os(LOG_DIR_ENV).map(PathBuf::from),
            config_log_dir,
        )
    }

    fn resolve(
        env_path: Option<PathBuf>,
        env_dir: Option<PathBuf>,
        config_dir: Option<PathBuf>,
    ) -> Self {
        Self {
            log_path: env_path,
            log_dir: env_dir.or(config_dir),
        }
    }
}

/// Filter directive for the given flags when `RUST_LOG` is unset.
fn filter_directive(quiet: bool, verbose: u8, config_level: &str) -> String {
    if quiet {
        return "error".to_string();
    }
    match verbose {
        0 => config_level.to_string(),
        1 => "debug".to_string(),
        _ => "trace".to_string(),
    }
}

/// Build the log filter. `RUST_LOG` wins, then `-q`/`-v`, then the config level.
pub fn env_filter(quiet: bool, verbose: u8, config_level: &str) -> EnvFilter {
    EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(filter_directive(quiet, verbose, config_level)))
}

type FileWriter = (fmt::writer::BoxMakeWriter, WorkerGuard);

fn file_writer(config: &ObservabilityConfig) -> anyhow::Result<Option<FileWriter>> {
    let appender = if let Some(ref path) = config.log_path {
        let dir = path.parent().unwrap_or_else(|| Path::new("."));
        let file = path
            .file_name()
            .with_context(|| format!("log path has no file name: {}", path.display()))?;
        std::fs::create_dir_all(dir)
            .with_context(|| format!("failed to create log directory {}", dir.display()))?;
        tracing_appender::rolling::never(dir, file)
    } else if let Some(ref dir) = config.log_dir {
        std::fs::create_dir_all(dir)
            .with_context(|| format!("failed to create log directory {}", dir.display()))?;
        tracing_appender::rolling::daily(dir, LOG_FILE_NAME)
    } else {
        return Ok(None);
    };

    let (writer, guard) = tracing_appender::non_blocking(appender);
    Ok(Some((fmt::writer::BoxMakeWriter::new(writer), guard)))
}

/// Install the global subscriber.
///
/// Keep the returned guard alive for the life of the process; dropping it
/// flushes and stops the file writer.
///
/// `ansi` controls escape codes on the stderr layer; the file layer never
/// gets them.
pub fn init_observability(
    config: &ObservabilityConfig,
    filter: EnvFilter,
    ansi: bool,
) -> anyhow::Result<Option<WorkerGuard>> {
    let (file_layer, guard) = match file_writer(config)? {
        Some((writer, guard)) => (
            Some(fmt::layer().json().with_ansi(false).with_writer(writer)),
            Some(guard),
        ),
        None => (None, None),
    };

    let stderr_layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_ansi(ansi)
        .with_target(true);

    tracing_subscriber::registry()
        .with(filter)
        .with(stderr_layer)
        .with(file_layer)
        .try_init()
        .context("failed to install tracing subscriber")?;

    Ok(guard)
}
