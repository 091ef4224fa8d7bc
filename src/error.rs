//! Error types for the selection layer.
//!
//! Trainer failures ([`FitError`], [`ScoreError`]) are always recovered
//! locally by the strategies: the failing candidate or fold is skipped and the
//! search continues. Only [`DataError`] (input-shape violations) ever reaches
//! a caller, and only from constructors and the sequence combiner.

/// Reasons a trainer can fail to fit a model for one (word, state count,
/// fold) combination.
#[derive(Debug, Clone, thiserror::Error)]
pub enum FitError {
    /// EM stopped at the iteration cap without converging.
    #[error("EM did not converge within {iterations} iterations")]
    NonConvergence {
        /// Iteration cap that was exhausted.
        iterations: usize,
    },

    /// An emission covariance became ill-conditioned during fitting.
    #[error("emission covariance became ill-conditioned")]
    IllConditioned,

    /// Too few observation frames for the requested state count.
    #[error("insufficient data: {frames} frames for {n_states} states")]
    InsufficientData {
        /// Frames available in the input.
        frames: usize,
        /// States requested.
        n_states: usize,
    },

    /// Any other trainer-specific failure.
    #[error("{0}")]
    Other(String),
}

/// Reasons a trained model can fail to score an input.
#[derive(Debug, Clone, thiserror::Error)]
pub enum ScoreError {
    /// The input's feature dimensionality does not match the model's.
    #[error("shape mismatch: model expects {expected} features, input has {got}")]
    ShapeMismatch {
        /// Feature dimensionality the model was fitted with.
        expected: usize,
        /// Feature dimensionality of the scored input.
        got: usize,
    },

    /// Any other scoring failure.
    #[error("{0}")]
    Other(String),
}

/// Input-shape violations surfaced by constructors and the sequence combiner.
#[derive(Debug, Clone, thiserror::Error)]
pub enum DataError {
    /// A word must have at least one sequence.
    #[error("sequence set is empty")]
    EmptySequenceSet,

    /// Every sequence must have at least one frame.
    #[error("sequence {index} has no frames")]
    EmptySequence { index: usize },

    /// All sequences of a word share one feature dimensionality.
    #[error("sequence {index} has {got} feature columns, expected {expected}")]
    DimensionMismatch {
        expected: usize,
        got: usize,
        index: usize,
    },

    /// A combiner index referred past the end of the sequence set.
    #[error("sequence index {index} out of range for set of {len}")]
    SequenceIndexOutOfRange { index: usize, len: usize },

    /// The combiner needs at least one index.
    #[error("no sequence indices to combine")]
    NoIndices,

    /// The target word is not in the vocabulary.
    #[error("unknown vocabulary word `{0}`")]
    UnknownWord(String),
}
