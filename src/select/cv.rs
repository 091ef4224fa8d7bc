//! Cross-validated selection.
//!
//! Each candidate state count is scored by its mean held-out log-likelihood
//! over k folds of the word's own sequences. Fold policy:
//!
//! - 1 sequence: cross-validation is impossible; the constant fallback is
//!   returned unconditionally
//! - 2 sequences: 2 folds, natural order
//! - 3 or more sequences: 3 folds, index order shuffled with the configured
//!   seed

use tracing::debug;

use super::Selector;
use crate::combine::combine_sequences;
use crate::folds::KFold;
use crate::train::Trainer;

pub(super) fn select<T: Trainer>(sel: &Selector<'_, T>) -> Option<T::Model> {
    // Fallback in case the entire search yields no successful fold.
    let fallback = sel.base_model(sel.config.n_constant);

    let n_sequences = sel.sequences.len();
    if n_sequences == 1 {
        return fallback;
    }
    let kfold = if n_sequences == 2 {
        KFold::new(2)
    } else {
        KFold::new(3).with_seed(sel.config.random_state)
    };
    let folds = kfold.split(n_sequences);

    let mut best = fallback;
    let mut best_mean = f64::NEG_INFINITY;

    for n in sel.candidates(true) {
        // The mean is per candidate, over its successful folds only.
        let mut sum_log_l = 0.0;
        let mut folds_ok = 0usize;
        let mut last_model: Option<T::Model> = None;

        for (train_idx, test_idx) in &folds {
            let Ok(train) = combine_sequences(train_idx, sel.sequences) else {
                continue;
            };
            let Ok(test) = combine_sequences(test_idx, sel.sequences) else {
                continue;
            };
            let Some(model) = sel.fit(&train, n) else {
                continue;
            };
            let Some(log_l) = sel.score(&model, &test) else {
                continue;
            };
            sum_log_l += log_l;
            folds_ok += 1;
            last_model = Some(model);
        }

        if folds_ok == 0 {
            continue;
        }
        let mean = sum_log_l / folds_ok as f64;
        if sel.config.verbose {
            debug!(word = sel.word, n, mean, folds_ok, "CV candidate");
        }

        if mean > best_mean {
            best_mean = mean;
            best = last_model;
        }
    }

    best
}
