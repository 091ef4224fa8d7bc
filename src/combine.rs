//! Concatenating sequences into the single input shape trainers accept.

use nalgebra::DMatrix;

use crate::domain::{ConcatenatedInput, SequenceSet};
use crate::error::DataError;

/// Concatenate the sequences at `indices` (in order) into one input.
///
/// Cross-validation uses this to build per-fold train and test inputs from a
/// fold splitter's index lists.
pub fn combine_sequences(
    indices: &[usize],
    set: &SequenceSet,
) -> Result<ConcatenatedInput, DataError> {
    if indices.is_empty() {
        return Err(DataError::NoIndices);
    }

    let mut parts = Vec::with_capacity(indices.len());
    for &index in indices {
        let seq = set
            .get(index)
            .ok_or(DataError::SequenceIndexOutOfRange { index, len: set.len() })?;
        parts.push(seq);
    }

    Ok(concat_rows(&parts))
}

/// Stack the given matrices row-wise. All parts share a column count.
pub(crate) fn concat_rows(parts: &[&DMatrix<f64>]) -> ConcatenatedInput {
    let dim = parts.first().map_or(0, |m| m.ncols());
    let total: usize = parts.iter().map(|m| m.nrows()).sum();

    let mut x = DMatrix::<f64>::zeros(total, dim);
    let mut lengths = Vec::with_capacity(parts.len());
    let mut row = 0;
    for part in parts {
        x.rows_mut(row, part.nrows()).copy_from(*part);
        row += part.nrows();
        lengths.push(part.nrows());
    }

    ConcatenatedInput { x, lengths }
}
