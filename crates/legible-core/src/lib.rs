//! Core library for legible.
//!
//! Scores Spanish text with the Fernández-Huerta readability index, built on a
//! heuristic syllable counter. The pipeline is leaf-first:
//!
//! - [`text`] - Sentence counting and word extraction
//! - [`syllables`] - Letter classes and per-word syllable counting
//! - [`aggregate`] - Sequential or parallel syllable totals
//! - [`readability`] - The formula and the [`Stats`] record
//! - [`config`] - Configuration loading and management
//! - [`error`] - Error types and result aliases
//!
//! # Quick Start
//!
//! ```
//! let stats = legible_core::score("Es una receta que puede prepararse en menos de 30 minutos.");
//! assert_eq!(stats.sentences, 1);
//! assert_eq!(stats.words, 11);
//! ```
#![deny(unsafe_code)]

pub mod aggregate;
pub mod config;
pub mod error;
pub mod readability;
pub mod syllables;
pub mod text;

pub use aggregate::{Aggregation, Totals};
pub use config::{Config, ConfigLoader, ConfigSources, LogLevel};
pub use error::{ConfigError, ConfigResult};
pub use readability::{Difficulty, ScoreOptions, Stats, score, score_with};

/// Default maximum input size in bytes (5 MiB).
pub const DEFAULT_MAX_INPUT_BYTES: usize = 5 * 1024 * 1024;
