//! Discriminative Information Criterion selection.
//!
//! `DIC = logL(target) - mean(logL(other words))`: reward a state count whose
//! model explains the target word well and every other word poorly. Higher is
//! better; no structural complexity penalty is involved, so the search bounds
//! are used as configured.
//!
//! There is no safe fallback for this criterion — when every candidate fails
//! there is no successful fit to re-derive a state count from, and the search
//! reports an explicit `None`.

use tracing::debug;

use super::Selector;
use crate::train::Trainer;

pub(super) fn select<T: Trainer>(sel: &Selector<'_, T>) -> Option<T::Model> {
    let mut best: Option<T::Model> = None;
    let mut best_dic = f64::NEG_INFINITY;

    for n in sel.candidates(false) {
        let Some(model) = sel.fit(sel.input, n) else {
            continue;
        };
        let Some(dic) = candidate_dic(sel, &model) else {
            continue;
        };

        if sel.config.verbose {
            debug!(word = sel.word, n, dic, "DIC candidate");
        }

        // The fitted model is retained at comparison time; the winner is never
        // refitted after the search.
        if dic > best_dic {
            best_dic = dic;
            best = Some(model);
        }
    }

    best
}

/// DIC of one candidate model, or `None` when the target score or any
/// other-word score fails (the whole candidate is skipped, as with a failed
/// fit).
fn candidate_dic<T: Trainer>(sel: &Selector<'_, T>, model: &T::Model) -> Option<f64> {
    let original = sel.score(model, sel.input)?;

    let mut sum_others = 0.0;
    let mut n_others = 0usize;
    for word in sel.vocab.words() {
        if word == sel.word {
            continue;
        }
        let input = sel.vocab.input(word)?;
        sum_others += sel.score(model, input)?;
        n_others += 1;
    }

    // A single-word vocabulary has no discriminative term; the criterion
    // degenerates to the target log-likelihood.
    if n_others == 0 {
        return Some(original);
    }
    Some(original - sum_others / n_others as f64)
}
