//! Synthetic word data.
//!
//! Samples sequences from a left-to-right chain of Gaussian states so that
//! tests and experiments have reproducible word data without a corpus. The
//! state means are spread far enough apart that the generating state count is
//! recoverable by a reasonable trainer.

use nalgebra::DMatrix;
use rand::Rng;
use rand::SeedableRng;
use rand::rngs::StdRng;
use rand_distr::StandardNormal;

use crate::domain::SequenceSet;
use crate::error::DataError;

/// Spacing between consecutive state means, in units of the unit noise sigma.
const MEAN_SPACING: f64 = 5.0;

/// Generate `n_sequences` sequences, each walking left-to-right through
/// `n_states` Gaussian states with `frames_per_state` frames per state and
/// unit noise on every feature dimension.
pub fn synthetic_sequence_set(
    seed: u64,
    n_sequences: usize,
    n_states: usize,
    dim: usize,
    frames_per_state: usize,
) -> Result<SequenceSet, DataError> {
    let mut rng = StdRng::seed_from_u64(seed);
    let frames = n_states * frames_per_state;

    let mut sequences = Vec::with_capacity(n_sequences);
    for _ in 0..n_sequences {
        let mut m = DMatrix::<f64>::zeros(frames, dim);
        for state in 0..n_states {
            let mean = state as f64 * MEAN_SPACING;
            for f in 0..frames_per_state {
                let row = state * frames_per_state + f;
                for col in 0..dim {
                    let eps: f64 = rng.sample(StandardNormal);
                    m[(row, col)] = mean + eps;
                }
            }
        }
        sequences.push(m);
    }

    SequenceSet::new(sequences)
}
