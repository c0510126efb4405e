//! Score command: Fernández-Huerta readability.

use anyhow::bail;
use camino::Utf8PathBuf;
use clap::Args;
use owo_colors::OwoColorize;
use tracing::{debug, instrument};

use legible_core::readability::{self, Difficulty, ScoreOptions};

use super::{read_input_file, read_input_stream};

/// Arguments for the `score` subcommand.
#[derive(Args, Debug)]
pub struct ScoreArgs {
    /// File to analyze (`-` or omitted reads stdin).
    pub file: Option<Utf8PathBuf>,

    /// Minimum acceptable readability score.
    #[arg(long)]
    pub min_score: Option<f64>,

    /// How syllables are summed (overrides config).
    #[arg(long, value_enum)]
    pub aggregation: Option<legible_core::Aggregation>,
}

/// Score readability of a file or stdin.
#[instrument(name = "cmd_score", skip_all, fields(file = ?args.file))]
pub fn cmd_score(
    args: ScoreArgs,
    global_json: bool,
    config_min_score: Option<f64>,
    config_options: ScoreOptions,
    max_input_bytes: Option<usize>,
) -> anyhow::Result<()> {
    debug!(min_score = ?args.min_score, "executing score command");

    let (label, content) = match args.file {
        Some(ref path) if path.as_str() != "-" => {
            (path.to_string(), read_input_file(path, max_input_bytes)?)
        }
        _ => (
            "stdin".to_string(),
            read_input_stream(std::io::stdin().lock(), max_input_bytes)?,
        ),
    };

    let options = ScoreOptions {
        aggregation: args.aggregation.unwrap_or(config_options.aggregation),
        ..config_options
    };
    let min_score = args.min_score.or(config_min_score);

    let stats = readability::score_with(&content, &options);
    // The empty-text sentinel is not a real score, so it never fails the gate.
    let below_min = stats.words > 0 && min_score.is_some_and(|min| stats.readability < min);

    if global_json {
        println!("{}", serde_json::to_string_pretty(&stats)?);
        if below_min {
            bail!(
                "{label} scores {:.1} (min: {:.0})",
                stats.readability,
                min_score.unwrap_or(0.0)
            );
        }
    } else if below_min {
        bail!(
            "{label} scores {:.1} (min: {:.0}). Shorten sentences or prefer shorter words.",
            stats.readability,
            min_score.unwrap_or(0.0),
        );
    } else if stats.words == 0 {
        println!("{label}: no words to score");
    } else if let Some(min) = min_score {
        println!(
            "{} {label} scores {:.1} (min: {min:.0})",
            "PASS:".green(),
            stats.readability,
        );
    } else {
        println!(
            "{:.1} ({})",
            stats.readability,
            Difficulty::from_score(stats.readability).to_string().cyan()
        );
        println!(
            "{} sentences, {} words, {} syllables",
            stats.sentences, stats.words, stats.syllables
        );
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn write_temp(contents: &str) -> (tempfile::TempDir, Utf8PathBuf) {
        let tmp = tempfile::TempDir::new().unwrap();
        let path = tmp.path().join("texto.txt");
        std::fs::write(&path, contents).unwrap();
        let path = Utf8PathBuf::try_from(path).unwrap();
        (tmp, path)
    }

    fn args(file: Utf8PathBuf, min_score: Option<f64>) -> ScoreArgs {
        ScoreArgs {
            file: Some(file),
            min_score,
            aggregation: None,
        }
    }

    #[test]
    fn scores_file() {
        let (_tmp, path) = write_temp("Es una receta que puede prepararse en menos de 30 minutos.");
        assert!(cmd_score(args(path, None), false, None, ScoreOptions::default(), None).is_ok());
    }

    #[test]
    fn gate_fails_below_min() {
        let (_tmp, path) = write_temp("Es una receta que puede prepararse en menos de 30 minutos.");
        let result = cmd_score(args(path, Some(95.0)), false, None, ScoreOptions::default(), None);
        assert!(result.is_err());
    }

    #[test]
    fn config_min_score_applies() {
        let (_tmp, path) = write_temp("Es una receta que puede prepararse en menos de 30 minutos.");
        let result = cmd_score(args(path, None), true, Some(95.0), ScoreOptions::default(), None);
        assert!(result.is_err());
    }

    #[test]
    fn missing_file_errors() {
        let result = cmd_score(
            args(Utf8PathBuf::from("/nonexistent/texto.txt"), None),
            false,
            None,
            ScoreOptions::default(),
            None,
        );
        assert!(result.is_err());
    }
}
