//! State-count selection.
//!
//! Responsibilities:
//!
//! - hold the per-word view (sequences + concatenated input) and the search
//!   configuration
//! - fit candidate models through the trainer seam, recovering from failures
//! - dispatch to the four criteria (constant / BIC / DIC / CV)
//!
//! Each [`Selector`] is scoped to exactly one word and holds no mutable state,
//! so independent words can be selected in parallel (see [`select_all`]).

use std::collections::BTreeMap;

use rayon::prelude::*;
use tracing::{debug, warn};

use crate::domain::{ConcatenatedInput, Criterion, SelectionConfig, SequenceSet, Vocabulary};
use crate::error::DataError;
use crate::train::{FitRequest, TrainedModel, Trainer};

mod bic;
mod cv;
mod dic;

/// One word's selection search: borrows the trainer, the vocabulary, and the
/// search configuration.
pub struct Selector<'a, T: Trainer> {
    trainer: &'a T,
    vocab: &'a Vocabulary,
    word: &'a str,
    sequences: &'a SequenceSet,
    input: &'a ConcatenatedInput,
    config: SelectionConfig,
}

impl<'a, T: Trainer> Selector<'a, T> {
    /// Construct a selector for `word`.
    ///
    /// Fails only when `word` is not in the vocabulary.
    pub fn new(
        trainer: &'a T,
        vocab: &'a Vocabulary,
        word: &'a str,
        config: SelectionConfig,
    ) -> Result<Self, DataError> {
        let sequences = vocab
            .sequences(word)
            .ok_or_else(|| DataError::UnknownWord(word.to_string()))?;
        let input = vocab
            .input(word)
            .ok_or_else(|| DataError::UnknownWord(word.to_string()))?;
        Ok(Self {
            trainer,
            vocab,
            word,
            sequences,
            input,
            config,
        })
    }

    /// Run the state-count search under `criterion`.
    ///
    /// Returns the best trained model found, or `None` when every candidate
    /// failed and the criterion has no safe fallback. Trainer failures never
    /// propagate past this call.
    pub fn select(&self, criterion: Criterion) -> Option<T::Model> {
        match criterion {
            Criterion::Constant => self.base_model(self.config.n_constant),
            Criterion::Bic => bic::select(self),
            Criterion::Dic => dic::select(self),
            Criterion::Cv => cv::select(self),
        }
    }

    /// Fit the target word's full input with `num_states` states.
    ///
    /// Any trainer failure is reported (when verbose) and swallowed.
    pub fn base_model(&self, num_states: usize) -> Option<T::Model> {
        self.fit(self.input, num_states)
    }

    /// Candidate state counts, ascending.
    ///
    /// With `clamp`, the upper bound is capped at the shortest sequence length:
    /// a model should not be asked for more states than the shortest sequence
    /// has observations. The range may be empty after clamping, in which case
    /// a strategy falls straight through to its fallback.
    fn candidates(&self, clamp: bool) -> std::ops::RangeInclusive<usize> {
        let mut max = self.config.max_n_components;
        if clamp {
            max = max.min(self.sequences.min_len());
        }
        self.config.min_n_components..=max
    }

    fn fit(&self, input: &ConcatenatedInput, num_states: usize) -> Option<T::Model> {
        let request = FitRequest::diagonal(num_states, self.config.random_state);
        match self.trainer.fit(input, &request) {
            Ok(model) => {
                if self.config.verbose {
                    debug!(word = self.word, num_states, "model created");
                }
                Some(model)
            }
            Err(err) => {
                if self.config.verbose {
                    warn!(word = self.word, num_states, %err, "fit failed");
                }
                None
            }
        }
    }

    /// Score `input` under `model`, treating non-finite log-likelihoods as
    /// failures.
    fn score(&self, model: &T::Model, input: &ConcatenatedInput) -> Option<f64> {
        match model.score(input) {
            Ok(log_l) if log_l.is_finite() => Some(log_l),
            Ok(log_l) => {
                if self.config.verbose {
                    warn!(word = self.word, log_l, "non-finite log-likelihood");
                }
                None
            }
            Err(err) => {
                if self.config.verbose {
                    warn!(word = self.word, %err, "score failed");
                }
                None
            }
        }
    }
}

/// Select a model for every word in the vocabulary, in parallel.
///
/// Words are fully independent, so each gets its own selector run on the rayon
/// pool. A word maps to `None` when its search failed outright.
pub fn select_all<T>(
    trainer: &T,
    vocab: &Vocabulary,
    config: &SelectionConfig,
    criterion: Criterion,
) -> BTreeMap<String, Option<T::Model>>
where
    T: Trainer + Sync,
    T::Model: Send,
{
    vocab
        .words()
        .collect::<Vec<_>>()
        .into_par_iter()
        .map(|word| {
            let model = Selector::new(trainer, vocab, word, config.clone())
                .ok()
                .and_then(|selector| selector.select(criterion));
            (word.to_string(), model)
        })
        .collect()
}
