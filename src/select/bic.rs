//! Bayesian Information Criterion selection.
//!
//! `BIC = -2·logL + p·ln(N)` where `p` is the free-parameter count of an
//! n-state diagonal-covariance Gaussian HMM and `N` the total frame count of
//! the word's concatenated input. Lower is better; the parameter penalty
//! counters state-count inflation.

use tracing::debug;

use super::Selector;
use crate::train::Trainer;

pub(super) fn select<T: Trainer>(sel: &Selector<'_, T>) -> Option<T::Model> {
    // Fallback in case the entire search yields no valid candidate.
    let mut best = sel.base_model(sel.config.n_constant);
    let mut best_bic = f64::INFINITY;

    let n_frames = sel.input.n_frames();
    let dim = sel.input.dim();

    for n in sel.candidates(true) {
        let Some(model) = sel.fit(sel.input, n) else {
            continue;
        };
        let Some(log_l) = sel.score(&model, sel.input) else {
            continue;
        };

        let score = bic(log_l, free_parameters(n, dim), n_frames);
        if sel.config.verbose {
            debug!(word = sel.word, n, score, log_l, "BIC candidate");
        }

        // Strict improvement: ties keep the smaller state count.
        if score < best_bic {
            best_bic = score;
            best = Some(model);
        }
    }

    best
}

/// Free parameters of an n-state diagonal Gaussian HMM over `d` features:
/// transition matrix plus per-state means and diagonal variances, minus one
/// for the row-stochasticity constraint.
fn free_parameters(n: usize, d: usize) -> usize {
    n * n + 2 * n * d - 1
}

fn bic(log_l: f64, p: usize, n_frames: usize) -> f64 {
    -2.0 * log_l + p as f64 * (n_frames as f64).ln()
}
