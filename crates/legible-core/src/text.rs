//! Text tokenization.
//!
//! Provides the sentence and word splitting the scorer runs before any
//! syllable counting. Both splits are deliberately simple: a sentence ends at a
//! run of `.`, `?` or `!` followed by whitespace, and a word is a maximal run of
//! word characters.

use regex::Regex;
use std::sync::LazyLock;

/// Regex for a sentence boundary: a punctuation run followed by whitespace.
static SENTENCE_BOUNDARY: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[.?!]+\s").expect("valid regex"));

/// Regex for a word (Unicode letters, digits and connector punctuation).
static WORD: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\w+").expect("valid regex"));

/// Count the sentences in `text`.
///
/// Returns the number of segments left after splitting on every boundary, so
/// the result is at least 1 for any input. A trailing boundary such as
/// `"Hola. "` leaves an empty final segment, which is counted too.
#[tracing::instrument(skip_all, fields(text_len = text.len()))]
pub fn count_sentences(text: &str) -> usize {
    SENTENCE_BOUNDARY.split(text).count()
}

/// Extract the words of `text`, in order.
///
/// Punctuation, whitespace and the inverted marks `¡` `¿` separate words and
/// never appear as tokens. Words keep their original case.
pub fn split_words(text: &str) -> Vec<&str> {
    WORD.find_iter(text).map(|m| m.as_str()).collect()
}
