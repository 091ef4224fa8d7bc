//! `hmm-select` library crate.
//!
//! Chooses, for each vocabulary word modeled by a Gaussian-emission hidden
//! Markov model, the number of hidden states that best generalizes to unseen
//! data. A word is a set of observed multivariate feature sequences; a trainer
//! fits an HMM with a requested state count and reports a log-likelihood. This
//! crate owns the selection layer only:
//!
//! - `Constant`: fixed state count, no search (baseline)
//! - `Bic`: Bayesian Information Criterion (penalized likelihood)
//! - `Dic`: Discriminative Information Criterion (target fit vs. other words)
//! - `Cv`: cross-validated mean log-likelihood over the word's own sequences
//!
//! The trainer itself is an external collaborator behind the [`Trainer`]
//! trait; this crate never implements EM/Baum-Welch.

pub mod combine;
pub mod domain;
pub mod error;
pub mod folds;
pub mod select;
pub mod synth;
pub mod train;

pub use combine::combine_sequences;
pub use domain::{ConcatenatedInput, Criterion, SelectionConfig, SequenceSet, Vocabulary};
pub use error::{DataError, FitError, ScoreError};
pub use select::{Selector, select_all};
pub use train::{CovarianceKind, FitRequest, TrainedModel, Trainer};
