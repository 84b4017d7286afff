// SPDX-License-Identifier: LGPL-3.0-only
//
// This file is provided WITHOUT ANY WARRANTY;
// without even the implied warranty of MERCHANTABILITY
// or FITNESS FOR A PARTICULAR PURPOSE.

//! Arithmetic over GF(2) on `u8` bit arrays. Every entry is read mod 2.

use crate::errors::{ParityMatrixError, ParityMatrixResult};
use crate::matrix::row_echelon;
use crate::matrix_type::BitMatrixExt;
use ndarray::{Array1, Array2, ArrayView1, ArrayView2};

/// Reduce every entry mod 2
pub fn reduce_mod2(matrix: ArrayView2<u8>) -> Array2<u8> {
    matrix.mapv(|b| b & 1)
}

/// GF(2) dot product of two vectors of equal length
pub fn dot(a: ArrayView1<u8>, b: ArrayView1<u8>) -> u8 {
    a.iter().zip(b.iter()).fold(0u8, |acc, (x, y)| acc ^ (x & y & 1))
}

/// Compute `a · b (mod 2)`
pub fn matmul(a: ArrayView2<u8>, b: ArrayView2<u8>) -> ParityMatrixResult<Array2<u8>> {
    if a.ncols() != b.nrows() {
        return Err(ParityMatrixError::dimension_mismatch(
            a.ncols(),
            b.nrows(),
            "matmul inner dimension",
        ));
    }
    let mut out = Array2::zeros((a.nrows(), b.ncols()));
    for (i, row) in a.rows().into_iter().enumerate() {
        for (j, col) in b.columns().into_iter().enumerate() {
            out[[i, j]] = dot(row, col);
        }
    }
    Ok(out)
}

/// Compute the row vector `v · m (mod 2)`
pub fn vec_mat_mul(v: ArrayView1<u8>, m: ArrayView2<u8>) -> ParityMatrixResult<Array1<u8>> {
    if v.len() != m.nrows() {
        return Err(ParityMatrixError::dimension_mismatch(
            m.nrows(),
            v.len(),
            "vector-matrix product",
        ));
    }
    let mut out = Array1::zeros(m.ncols());
    for (bit, row) in v.iter().zip(m.rows()) {
        if bit & 1 == 1 {
            out.zip_mut_with(&row, |acc, &r| *acc ^= r & 1);
        }
    }
    Ok(out)
}

/// Rank over GF(2)
pub fn rank(matrix: ArrayView2<u8>) -> usize {
    let (echelon, _) = row_echelon(matrix, false);
    (0..echelon.nrows())
        .filter(|&r| !echelon.is_zero_row(r))
        .count()
}

/// A square matrix of full rank over GF(2)
pub fn is_invertible(matrix: ArrayView2<u8>) -> bool {
    matrix.is_square() && rank(matrix) == matrix.nrows()
}

/// Add (XOR) row `source` into row `target`
pub(crate) fn add_row(matrix: &mut Array2<u8>, target: usize, source: usize) {
    let src = matrix.row(source).to_owned();
    matrix
        .row_mut(target)
        .zip_mut_with(&src, |t, &s| *t ^= s & 1);
}
