//! Syllable totals over a word list.
//!
//! Counting one word never depends on another, so the list can be folded on
//! the calling thread or fanned out over the rayon pool. Both paths return the
//! same [`Totals`]; the parallel `sum` is the only join point and each word is
//! counted exactly once.

use rayon::prelude::*;
use serde::{Deserialize, Serialize};

use crate::syllables::count_syllables;

/// Word count at which [`Aggregation::Auto`] switches to parallel counting.
pub const DEFAULT_PARALLEL_THRESHOLD: usize = 4096;

/// How syllables are summed across words.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
#[cfg_attr(feature = "clap", derive(clap::ValueEnum))]
pub enum Aggregation {
    /// Parallel for large inputs, sequential otherwise (default).
    #[default]
    Auto,
    /// Always fold on the calling thread.
    Sequential,
    /// Always fan out over the rayon thread pool.
    Parallel,
}

impl Aggregation {
    /// Returns the mode as a lowercase string slice.
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Auto => "auto",
            Self::Sequential => "sequential",
            Self::Parallel => "parallel",
        }
    }

    /// Whether `word_count` words should be counted in parallel.
    pub const fn is_parallel(&self, word_count: usize, threshold: usize) -> bool {
        match self {
            Self::Auto => word_count >= threshold,
            Self::Sequential => false,
            Self::Parallel => true,
        }
    }
}

impl std::fmt::Display for Aggregation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Syllable and word totals for a word list.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Totals {
    /// Sum of per-word syllable counts.
    pub syllables: usize,
    /// Number of words counted.
    pub words: usize,
}

/// Sum the syllables of `words`.
///
/// `threshold` only matters for [`Aggregation::Auto`].
#[tracing::instrument(skip(words), fields(word_count = words.len()))]
pub fn aggregate(words: &[&str], mode: Aggregation, threshold: usize) -> Totals {
    if words.is_empty() {
        return Totals::default();
    }

    let syllables = if mode.is_parallel(words.len(), threshold) {
        tracing::debug!("counting syllables in parallel");
        words.par_iter().map(|word| count_syllables(word)).sum()
    } else {
        words.iter().map(|word| count_syllables(word)).sum()
    };

    Totals {
        syllables,
        words: words.len(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    const WORDS: &[&str] = &["Es", "una", "receta", "que", "puede", "prepararse"];

    #[test]
    fn empty_list_is_zero() {
        for mode in [Aggregation::Auto, Aggregation::Sequential, Aggregation::Parallel] {
            assert_eq!(aggregate(&[], mode, 0), Totals::default());
        }
    }

    #[test]
    fn sums_per_word_counts() {
        let totals = aggregate(WORDS, Aggregation::Sequential, DEFAULT_PARALLEL_THRESHOLD);
        assert_eq!(totals.words, 6);
        // 1 + 2 + 3 + 2 + 2 + 4
        assert_eq!(totals.syllables, 14);
    }

    #[test]
    fn modes_agree() {
        let sequential = aggregate(WORDS, Aggregation::Sequential, 0);
        let parallel = aggregate(WORDS, Aggregation::Parallel, 0);
        let auto = aggregate(WORDS, Aggregation::Auto, 1);
        assert_eq!(sequential, parallel);
        assert_eq!(sequential, auto);
    }

    #[test]
    fn large_input_counts_every_word_once() {
        let words: Vec<&str> = std::iter::repeat_n("tomate", 10_000).collect();
        let totals = aggregate(&words, Aggregation::Auto, DEFAULT_PARALLEL_THRESHOLD);
        assert_eq!(totals.words, 10_000);
        assert_eq!(totals.syllables, 30_000);
    }

    #[test]
    fn auto_respects_threshold() {
        assert!(!Aggregation::Auto.is_parallel(10, 11));
        assert!(Aggregation::Auto.is_parallel(11, 11));
        assert!(Aggregation::Parallel.is_parallel(0, 11));
        assert!(!Aggregation::Sequential.is_parallel(1_000_000, 11));
    }

    proptest! {
        #[test]
        fn order_independent(
            mut words in proptest::collection::vec("[a-záéíóúñ]{1,12}", 0..40),
            seed in any::<u64>(),
        ) {
            let refs: Vec<&str> = words.iter().map(String::as_str).collect();
            let before = aggregate(&refs, Aggregation::Sequential, 0);

            // Deterministic shuffle driven by the seed.
            let len = words.len();
            if len > 1 {
                let mut state = seed;
                for i in (1..len).rev() {
                    state = state.wrapping_mul(6_364_136_223_846_793_005).wrapping_add(1);
                    let j = (state >> 33) as usize % (i + 1);
                    words.swap(i, j);
                }
            }
            let refs: Vec<&str> = words.iter().map(String::as_str).collect();
            let after = aggregate(&refs, Aggregation::Parallel, 0);

            prop_assert_eq!(before, after);
        }
    }
}
