//! Shared domain types.
//!
//! These types are intentionally kept lightweight so they can be:
//!
//! - built once per word and shared read-only across a selection search
//! - constructed by hand in tests from tiny synthetic matrices
//! - (config and criterion) serialized alongside a run's outputs

use std::collections::BTreeMap;

use nalgebra::DMatrix;
use serde::{Deserialize, Serialize};

use crate::combine::concat_rows;
use crate::error::DataError;

/// Which criterion drives the state-count search.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Criterion {
    /// Always use the configured constant state count (no search).
    Constant,
    /// Bayesian Information Criterion: penalized likelihood, lower is better.
    Bic,
    /// Discriminative Information Criterion: target-word fit minus average fit
    /// on all other words, higher is better.
    Dic,
    /// Cross-validated mean log-likelihood over the word's own sequences.
    Cv,
}

/// Search configuration shared by all criteria.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SelectionConfig {
    /// Fallback/default state count. `Constant` returns it directly; BIC and
    /// CV seed their "best so far" with a model fitted at this count.
    pub n_constant: usize,
    /// Lower search bound (inclusive).
    pub min_n_components: usize,
    /// Upper search bound (inclusive, before clamping to the shortest
    /// sequence length).
    pub max_n_components: usize,
    /// Seed for reproducible fits and fold splits.
    pub random_state: u64,
    /// Emit per-candidate diagnostics on fit success/failure.
    pub verbose: bool,
}

impl SelectionConfig {
    /// Creates a configuration with the conventional defaults.
    pub fn new() -> Self {
        Self {
            n_constant: 3,
            min_n_components: 2,
            max_n_components: 10,
            random_state: 14,
            verbose: false,
        }
    }

    /// Sets the constant/fallback state count.
    pub fn with_n_constant(mut self, n_constant: usize) -> Self {
        self.n_constant = n_constant;
        self
    }

    /// Sets the inclusive search bounds.
    pub fn with_components(mut self, min: usize, max: usize) -> Self {
        self.min_n_components = min;
        self.max_n_components = max;
        self
    }

    /// Sets the seed used for fits and fold splits.
    pub fn with_random_state(mut self, random_state: u64) -> Self {
        self.random_state = random_state;
        self
    }

    /// Enables per-candidate diagnostics.
    pub fn with_verbose(mut self, verbose: bool) -> Self {
        self.verbose = verbose;
        self
    }
}

impl Default for SelectionConfig {
    fn default() -> Self {
        Self::new()
    }
}

/// Ordered, non-empty list of variable-length feature sequences for one word.
///
/// Each sequence is a frames × dims matrix; all sequences in a set share the
/// same feature dimensionality.
#[derive(Debug, Clone)]
pub struct SequenceSet {
    sequences: Vec<DMatrix<f64>>,
}

impl SequenceSet {
    /// Validate and wrap a list of sequences.
    pub fn new(sequences: Vec<DMatrix<f64>>) -> Result<Self, DataError> {
        let Some(first) = sequences.first() else {
            return Err(DataError::EmptySequenceSet);
        };
        let dim = first.ncols();
        for (index, seq) in sequences.iter().enumerate() {
            if seq.nrows() == 0 {
                return Err(DataError::EmptySequence { index });
            }
            if seq.ncols() != dim {
                return Err(DataError::DimensionMismatch {
                    expected: dim,
                    got: seq.ncols(),
                    index,
                });
            }
        }
        Ok(Self { sequences })
    }

    /// Number of sequences in the set.
    pub fn len(&self) -> usize {
        self.sequences.len()
    }

    /// Always `false` by construction; kept for API symmetry.
    pub fn is_empty(&self) -> bool {
        self.sequences.is_empty()
    }

    /// Feature dimensionality shared by every sequence.
    pub fn dim(&self) -> usize {
        self.sequences[0].ncols()
    }

    /// Frame count of the shortest sequence.
    ///
    /// Used as a safety bound on the state-count search: a model should not be
    /// asked for more states than the shortest sequence has observations.
    pub fn min_len(&self) -> usize {
        self.sequences.iter().map(|s| s.nrows()).min().unwrap_or(0)
    }

    /// Sequence at `index`, if in range.
    pub fn get(&self, index: usize) -> Option<&DMatrix<f64>> {
        self.sequences.get(index)
    }

    /// Iterate over the sequences in order.
    pub fn iter(&self) -> impl Iterator<Item = &DMatrix<f64>> {
        self.sequences.iter()
    }

    /// Concatenate every sequence into the single input shape trainers accept.
    pub fn concatenated(&self) -> ConcatenatedInput {
        let parts: Vec<&DMatrix<f64>> = self.sequences.iter().collect();
        concat_rows(&parts)
    }
}

/// A single feature matrix (rows = all frames across all sequences in a set)
/// plus a parallel vector of per-sequence lengths summing to the row count.
///
/// This is the only shape the trainer accepts. Derived, never hand-built:
/// produced once for a whole word or per fold by the sequence combiner.
#[derive(Debug, Clone)]
pub struct ConcatenatedInput {
    /// All frames, stacked row-wise.
    pub x: DMatrix<f64>,
    /// Per-sequence frame counts, in concatenation order.
    pub lengths: Vec<usize>,
}

impl ConcatenatedInput {
    /// Total number of observation frames.
    pub fn n_frames(&self) -> usize {
        self.x.nrows()
    }

    /// Feature dimensionality.
    pub fn dim(&self) -> usize {
        self.x.ncols()
    }
}

/// The full corpus for one run: per-word sequence sets plus per-word
/// precomputed concatenated inputs.
///
/// DIC scores each candidate model against every other word's input, so the
/// inputs are built once up front. Word iteration is sorted, which keeps
/// floating-point accumulation order (and therefore selection results)
/// reproducible across runs.
#[derive(Debug, Clone)]
pub struct Vocabulary {
    sequences: BTreeMap<String, SequenceSet>,
    inputs: BTreeMap<String, ConcatenatedInput>,
}

impl Vocabulary {
    /// Build the vocabulary, concatenating every word's sequences once.
    pub fn from_sequences(sequences: BTreeMap<String, SequenceSet>) -> Self {
        let inputs = sequences
            .iter()
            .map(|(word, set)| (word.clone(), set.concatenated()))
            .collect();
        Self { sequences, inputs }
    }

    /// Number of words.
    pub fn len(&self) -> usize {
        self.sequences.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sequences.is_empty()
    }

    /// Word identifiers in sorted order.
    pub fn words(&self) -> impl Iterator<Item = &str> {
        self.sequences.keys().map(String::as_str)
    }

    /// Sequence set for `word`.
    pub fn sequences(&self, word: &str) -> Option<&SequenceSet> {
        self.sequences.get(word)
    }

    /// Precomputed concatenated input for `word`.
    pub fn input(&self, word: &str) -> Option<&ConcatenatedInput> {
        self.inputs.get(word)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn seq(frames: usize, dim: usize) -> DMatrix<f64> {
        DMatrix::from_element(frames, dim, 1.0)
    }

    #[test]
    fn sequence_set_rejects_empty_list() {
        assert!(matches!(
            SequenceSet::new(Vec::new()),
            Err(DataError::EmptySequenceSet)
        ));
    }

    #[test]
    fn sequence_set_rejects_mixed_dimensionality() {
        let err = SequenceSet::new(vec![seq(3, 2), seq(4, 3)]).unwrap_err();
        assert!(matches!(
            err,
            DataError::DimensionMismatch {
                expected: 2,
                got: 3,
                index: 1
            }
        ));
    }

    #[test]
    fn sequence_set_rejects_zero_frame_sequence() {
        let err = SequenceSet::new(vec![seq(3, 2), seq(0, 2)]).unwrap_err();
        assert!(matches!(err, DataError::EmptySequence { index: 1 }));
    }

    #[test]
    fn min_len_is_shortest_sequence() {
        let set = SequenceSet::new(vec![seq(5, 2), seq(3, 2), seq(7, 2)]).unwrap();
        assert_eq!(set.min_len(), 3);
        assert_eq!(set.dim(), 2);
        assert_eq!(set.len(), 3);
    }

    #[test]
    fn concatenated_stacks_all_frames() {
        let set = SequenceSet::new(vec![seq(2, 3), seq(4, 3)]).unwrap();
        let input = set.concatenated();
        assert_eq!(input.n_frames(), 6);
        assert_eq!(input.dim(), 3);
        assert_eq!(input.lengths, vec![2, 4]);
    }

    #[test]
    fn vocabulary_words_are_sorted_and_inputs_precomputed() {
        let mut map = BTreeMap::new();
        map.insert("b".to_string(), SequenceSet::new(vec![seq(2, 1)]).unwrap());
        map.insert("a".to_string(), SequenceSet::new(vec![seq(3, 1)]).unwrap());
        let vocab = Vocabulary::from_sequences(map);

        let words: Vec<&str> = vocab.words().collect();
        assert_eq!(words, vec!["a", "b"]);
        assert_eq!(vocab.input("a").unwrap().n_frames(), 3);
        assert_eq!(vocab.input("b").unwrap().n_frames(), 2);
    }

    #[test]
    fn config_defaults_match_convention() {
        let config = SelectionConfig::default();
        assert_eq!(config.n_constant, 3);
        assert_eq!(config.min_n_components, 2);
        assert_eq!(config.max_n_components, 10);
        assert_eq!(config.random_state, 14);
        assert!(!config.verbose);
    }
}
