//! Trainer seam.
//!
//! Fitting a Gaussian-emission HMM (EM / Baum-Welch) is an external concern:
//! the selection layer only needs to request a fit and read back a
//! log-likelihood. Implementations must be deterministic given a fixed
//! [`FitRequest::seed`] so that selection results are reproducible.

use serde::{Deserialize, Serialize};

use crate::domain::ConcatenatedInput;
use crate::error::{FitError, ScoreError};

/// Iteration cap conventionally applied to every fit.
pub const MAX_FIT_ITERATIONS: usize = 1000;

/// Emission covariance structure requested from the trainer.
///
/// The selection layer always requests `Diagonal`; the other kinds exist for
/// trainers that support them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CovarianceKind {
    Spherical,
    Diagonal,
    Full,
    Tied,
}

/// One fit request: everything a trainer needs besides the data itself.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct FitRequest {
    /// Number of hidden states to fit.
    pub n_states: usize,
    /// Emission covariance structure.
    pub covariance: CovarianceKind,
    /// EM iteration cap.
    pub max_iterations: usize,
    /// Seed for the trainer's initialization.
    pub seed: u64,
}

impl FitRequest {
    /// A diagonal-covariance request with the conventional iteration cap.
    pub fn diagonal(n_states: usize, seed: u64) -> Self {
        Self {
            n_states,
            covariance: CovarianceKind::Diagonal,
            max_iterations: MAX_FIT_ITERATIONS,
            seed,
        }
    }
}

/// Fits a Gaussian-emission HMM to a concatenated input.
pub trait Trainer {
    /// The fitted model type returned on success.
    type Model: TrainedModel;

    /// Attempt a fit. Failures (non-convergence, ill-conditioned covariance,
    /// insufficient data) are reported as [`FitError`]; the selection layer
    /// recovers from them by skipping the candidate or fold.
    fn fit(
        &self,
        input: &ConcatenatedInput,
        request: &FitRequest,
    ) -> Result<Self::Model, FitError>;
}

/// A successfully fitted model.
///
/// Scoring is the only operation the selection layer needs; everything else a
/// model exposes belongs to the caller.
pub trait TrainedModel {
    /// Log-likelihood of `input` under the model (higher is better).
    fn score(&self, input: &ConcatenatedInput) -> Result<f64, ScoreError>;
}
