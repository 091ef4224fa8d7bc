//! K-fold splitting over sequence indices.
//!
//! The usual k-fold protocol: indices are (optionally) shuffled with a seeded
//! RNG, then partitioned into k near-equal contiguous test chunks; the train
//! side of each fold is every index outside the chunk.

use rand::SeedableRng;
use rand::rngs::StdRng;
use rand::seq::SliceRandom;

/// Deterministic k-fold splitter.
#[derive(Debug, Clone)]
pub struct KFold {
    n_splits: usize,
    seed: Option<u64>,
}

impl KFold {
    pub fn new(n_splits: usize) -> Self {
        Self {
            n_splits,
            seed: None,
        }
    }

    /// Shuffle the index order (seeded) before chunking.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Produce `(train, test)` index pairs over `0..n_items`.
    ///
    /// Returns no folds when there are fewer items than splits, or fewer than
    /// two splits.
    pub fn split(&self, n_items: usize) -> Vec<(Vec<usize>, Vec<usize>)> {
        if self.n_splits < 2 || n_items < self.n_splits {
            return Vec::new();
        }

        let mut order: Vec<usize> = (0..n_items).collect();
        if let Some(seed) = self.seed {
            let mut rng = StdRng::seed_from_u64(seed);
            order.shuffle(&mut rng);
        }

        // First `n_items % n_splits` test chunks get one extra item.
        let base = n_items / self.n_splits;
        let extra = n_items % self.n_splits;

        let mut folds = Vec::with_capacity(self.n_splits);
        let mut start = 0;
        for k in 0..self.n_splits {
            let size = base + usize::from(k < extra);
            let test: Vec<usize> = order[start..start + size].to_vec();
            let train: Vec<usize> = order[..start]
                .iter()
                .chain(order[start + size..].iter())
                .copied()
                .collect();
            folds.push((train, test));
            start += size;
        }
        folds
    }
}
