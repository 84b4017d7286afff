// SPDX-License-Identifier: LGPL-3.0-only
//
// This file is provided WITHOUT ANY WARRANTY;
// without even the implied warranty of MERCHANTABILITY
// or FITNESS FOR A PARTICULAR PURPOSE.

//! Bit-matrix helpers on top of `ndarray`.
//!
//! Matrices are plain `Array2<u8>` with entries read mod 2. [`BitMatrixExt`]
//! adds the structural queries used when validating parity-check matrices.

use crate::errors::{MatrixError, ParityMatrixResult};
use ndarray::{Array1, Array2, ArrayBase, Data, Ix2};

/// Structural queries on a bit-matrix.
///
/// # Example
///
/// ```
/// use bicycle_parity_matrix::BitMatrixExt;
/// use ndarray::array;
///
/// let h = array![[1u8, 1, 0], [0, 1, 1]];
/// assert_eq!(h.row_weight(0), 2);
/// assert_eq!(h.col_weight(1), 2);
/// assert!(h.ensure_binary().is_ok());
/// ```
pub trait BitMatrixExt {
    /// Number of odd entries in row `row`
    fn row_weight(&self, row: usize) -> usize;

    /// Number of odd entries in column `col`
    fn col_weight(&self, col: usize) -> usize;

    /// Whether row `row` is zero mod 2
    fn is_zero_row(&self, row: usize) -> bool;

    /// Whether every entry is zero mod 2
    fn is_zero(&self) -> bool;

    /// Reject any entry other than 0 or 1.
    fn ensure_binary(&self) -> ParityMatrixResult<()>;
}

impl<S> BitMatrixExt for ArrayBase<S, Ix2>
where
    S: Data<Elem = u8>,
{
    fn row_weight(&self, row: usize) -> usize {
        self.row(row).iter().filter(|&&b| b & 1 == 1).count()
    }

    fn col_weight(&self, col: usize) -> usize {
        self.column(col).iter().filter(|&&b| b & 1 == 1).count()
    }

    fn is_zero_row(&self, row: usize) -> bool {
        self.row(row).iter().all(|&b| b & 1 == 0)
    }

    fn is_zero(&self) -> bool {
        self.iter().all(|&b| b & 1 == 0)
    }

    fn ensure_binary(&self) -> ParityMatrixResult<()> {
        match self.indexed_iter().find(|&(_, &value)| value > 1) {
            Some(((row, col), &value)) => {
                Err(MatrixError::NonBinaryEntry { row, col, value }.into())
            }
            None => Ok(()),
        }
    }
}

/// Stacks equal-length row vectors into a matrix with `cols` columns.
///
/// An empty slice yields a `0 × cols` matrix.
pub fn stack_rows(rows: &[Array1<u8>], cols: usize) -> Array2<u8> {
    let mut out = Array2::zeros((rows.len(), cols));
    for (mut dst, src) in out.rows_mut().into_iter().zip(rows) {
        dst.assign(src);
    }
    out
}
