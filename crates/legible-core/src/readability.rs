//! Readability scoring using the Fernández-Huerta index.
//!
//! Formula (updated coefficients):
//! `206.84 - 60.0 * (syllables/words) - 102.0 * (sentences/words)`
//!
//! Higher score = easier text. Around 60--70 is ordinary prose; below 50 reads
//! as specialist writing.
//!
//! Uses heuristic syllable counting (via [`crate::syllables::count_syllables`]) and
//! punctuation-run sentence splitting (via [`text::count_sentences`]).

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::aggregate::{self, Aggregation, DEFAULT_PARALLEL_THRESHOLD};
use crate::text;

/// Score reported when the text has no words.
pub const EMPTY_TEXT_SCORE: f64 = 0.0;

/// Counts and readability score for one text.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct Stats {
    /// Total syllable count.
    pub syllables: usize,
    /// Number of words detected.
    pub words: usize,
    /// Number of sentences detected.
    pub sentences: usize,
    /// Fernández-Huerta readability score ([`EMPTY_TEXT_SCORE`] without words).
    pub readability: f64,
}

/// Knobs for [`score_with`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScoreOptions {
    /// How syllables are summed across words.
    pub aggregation: Aggregation,
    /// Word count at which [`Aggregation::Auto`] goes parallel.
    pub parallel_threshold: usize,
}

impl Default for ScoreOptions {
    fn default() -> Self {
        Self {
            aggregation: Aggregation::Auto,
            parallel_threshold: DEFAULT_PARALLEL_THRESHOLD,
        }
    }
}

/// Difficulty band for a Fernández-Huerta score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "kebab-case")]
pub enum Difficulty {
    /// Below 30.
    VeryDifficult,
    /// 30 to 50.
    Difficult,
    /// 50 to 60.
    FairlyDifficult,
    /// 60 to 70.
    Normal,
    /// 70 to 80.
    FairlyEasy,
    /// 80 to 90.
    Easy,
    /// 90 and above.
    VeryEasy,
}

impl Difficulty {
    /// Band containing `score`.
    pub fn from_score(score: f64) -> Self {
        match score {
            s if s < 30.0 => Self::VeryDifficult,
            s if s < 50.0 => Self::Difficult,
            s if s < 60.0 => Self::FairlyDifficult,
            s if s < 70.0 => Self::Normal,
            s if s < 80.0 => Self::FairlyEasy,
            s if s < 90.0 => Self::Easy,
            _ => Self::VeryEasy,
        }
    }

    /// Spanish label for the band.
    pub const fn label(&self) -> &'static str {
        match self {
            Self::VeryDifficult => "muy difícil",
            Self::Difficult => "difícil",
            Self::FairlyDifficult => "algo difícil",
            Self::Normal => "normal",
            Self::FairlyEasy => "algo fácil",
            Self::Easy => "fácil",
            Self::VeryEasy => "muy fácil",
        }
    }
}

impl std::fmt::Display for Difficulty {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// Fernández-Huerta score for the given counts.
///
/// Returns [`EMPTY_TEXT_SCORE`] when `words` is zero instead of dividing by it.
#[allow(clippy::cast_precision_loss)]
pub fn fernandez_huerta(syllables: usize, words: usize, sentences: usize) -> f64 {
    if words == 0 {
        return EMPTY_TEXT_SCORE;
    }
    let words = words as f64;
    let syllables_per_word = syllables as f64 / words;
    let sentences_per_word = sentences as f64 / words;
    (-102.0f64).mul_add(sentences_per_word, (-60.0f64).mul_add(syllables_per_word, 206.84))
}

/// Score `text` with default options.
pub fn score(text: &str) -> Stats {
    score_with(text, &ScoreOptions::default())
}

/// Score `text`: count sentences, words and syllables, then apply the formula.
#[tracing::instrument(skip(text), fields(text_len = text.len()))]
pub fn score_with(text: &str, options: &ScoreOptions) -> Stats {
    let sentences = text::count_sentences(text);
    let words = text::split_words(text);
    let totals = aggregate::aggregate(&words, options.aggregation, options.parallel_threshold);
    let readability = fernandez_huerta(totals.syllables, totals.words, sentences);

    tracing::debug!(
        sentences,
        words = totals.words,
        syllables = totals.syllables,
        readability,
        "scored text"
    );

    Stats {
        syllables: totals.syllables,
        words: totals.words,
        sentences,
        readability,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const RECETA: &str = "Es una receta que puede prepararse en menos de 30 minutos.";

    fn approx(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-9
    }

    #[test]
    fn single_sentence() {
        let stats = score(RECETA);
        assert_eq!(stats.sentences, 1);
        assert_eq!(stats.words, 11);
        assert_eq!(stats.syllables, 23);
        let expected = 206.84 - 60.0 * (23.0 / 11.0) - 102.0 * (1.0 / 11.0);
        assert!(approx(stats.readability, expected), "{}", stats.readability);
    }

    #[test]
    fn two_sentences() {
        let stats = score("Ponle un tomate grande. Ponle una taza de pasta de tomate");
        assert_eq!(stats.sentences, 2);
        assert_eq!(stats.words, 11);
        assert_eq!(stats.syllables, 23);
        assert!(stats.readability < score(RECETA).readability);
    }

    #[test]
    fn syllables_match_per_word_sum() {
        let expected: usize = text::split_words(RECETA)
            .iter()
            .map(|w| crate::syllables::count_syllables(w))
            .sum();
        assert_eq!(score(RECETA).syllables, expected);
    }

    #[test]
    fn punctuation_only_uses_sentinel() {
        let stats = score("¡¿...!?");
        assert_eq!(stats.words, 0);
        assert_eq!(stats.syllables, 0);
        assert_eq!(stats.readability, EMPTY_TEXT_SCORE);
        assert!(stats.readability.is_finite());
    }

    #[test]
    fn empty_text_uses_sentinel() {
        let stats = score("");
        assert_eq!(stats.words, 0);
        assert_eq!(stats.sentences, 1);
        assert_eq!(stats.readability, EMPTY_TEXT_SCORE);
    }

    #[test]
    fn formula_uses_syllables_not_sentences() {
        // Same sentences and words, more syllables must lower the score.
        assert!(fernandez_huerta(30, 10, 1) < fernandez_huerta(15, 10, 1));
    }

    #[test]
    fn options_do_not_change_result() {
        let text = RECETA.repeat(50);
        let sequential = score_with(
            &text,
            &ScoreOptions {
                aggregation: Aggregation::Sequential,
                parallel_threshold: DEFAULT_PARALLEL_THRESHOLD,
            },
        );
        let parallel = score_with(
            &text,
            &ScoreOptions {
                aggregation: Aggregation::Parallel,
                parallel_threshold: DEFAULT_PARALLEL_THRESHOLD,
            },
        );
        assert_eq!(sequential, parallel);
    }

    #[test]
    fn serializes_flat() {
        let json = serde_json::to_value(score(RECETA)).unwrap();
        let object = json.as_object().unwrap();
        let mut keys: Vec<&str> = object.keys().map(String::as_str).collect();
        keys.sort_unstable();
        assert_eq!(keys, vec!["readability", "sentences", "syllables", "words"]);
        assert_eq!(json["words"], 11);
    }

    #[test]
    fn difficulty_bands() {
        assert_eq!(Difficulty::from_score(-12.0), Difficulty::VeryDifficult);
        assert_eq!(Difficulty::from_score(45.0), Difficulty::Difficult);
        assert_eq!(Difficulty::from_score(65.0), Difficulty::Normal);
        assert_eq!(Difficulty::from_score(72.1), Difficulty::FairlyEasy);
        assert_eq!(Difficulty::from_score(90.0), Difficulty::VeryEasy);
        assert_eq!(Difficulty::FairlyEasy.to_string(), "algo fácil");
    }
}
