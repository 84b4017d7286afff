// SPDX-License-Identifier: LGPL-3.0-only
//
// This file is provided WITHOUT ANY WARRANTY;
// without even the implied warranty of MERCHANTABILITY
// or FITNESS FOR A PARTICULAR PURPOSE.

//! Gaussian elimination, row decomposition, null spaces and row-space
//! enumeration over GF(2).

use crate::errors::{MatrixError, ParityMatrixError, ParityMatrixResult};
use crate::math::{add_row, dot, reduce_mod2, vec_mat_mul};
use crate::matrix_type::stack_rows;
use ndarray::{Array1, Array2, ArrayView1, ArrayView2};
use tracing::{debug, trace};

/// Largest row count [`iter_rowspace`] accepts; selectors are `u64` bit masks.
pub const MAX_ROWSPACE_ROWS: usize = 63;

/// Row-reduce `matrix` over GF(2).
///
/// Returns `(E, X)` with `X · matrix = E (mod 2)`, `X` invertible and `E` in
/// row echelon form: every nonzero row has its leading one strictly right of
/// the leading one of the row above, and zero rows sit at the bottom. With
/// `reduced` set, each pivot column holds a single one.
///
/// The input is not modified.
pub fn row_echelon(matrix: ArrayView2<u8>, reduced: bool) -> (Array2<u8>, Array2<u8>) {
    let (rows, cols) = matrix.dim();
    let mut echelon = reduce_mod2(matrix);
    let mut transform = Array2::<u8>::eye(rows);

    let mut r = 0;
    for c in 0..cols {
        if r >= rows {
            break;
        }
        let Some(pivot) = (r..rows).find(|&p| echelon[[p, c]] == 1) else {
            continue;
        };
        if pivot != r {
            add_row(&mut echelon, r, pivot);
            add_row(&mut transform, r, pivot);
        }

        let start = if reduced { 0 } else { r + 1 };
        for other in start..rows {
            if other != r && echelon[[other, c]] == 1 {
                add_row(&mut echelon, other, r);
                add_row(&mut transform, other, r);
            }
        }
        r += 1;
    }

    trace!(rows, cols, rank = r, reduced, "row echelon");
    (echelon, transform)
}

/// Express `v` as a combination of the rows of an echelon matrix.
///
/// `echelon` must be in row echelon form. The result is `(leftover, h)`:
/// `leftover` is what remains of `v` after cancelling every pivot it can
/// reach, and `h` selects rows of the original matrix when `transform` is
/// the `X` returned by [`row_echelon`]. Without a transform `h` is all zeros.
///
/// When `transform` is given, `h · A + leftover = v (mod 2)`, and
/// `leftover` is zero exactly when `v` lies in the row space of `A`.
pub fn decompose_row_vector(
    v: ArrayView1<u8>,
    echelon: ArrayView2<u8>,
    transform: Option<ArrayView2<u8>>,
) -> ParityMatrixResult<(Array1<u8>, Array1<u8>)> {
    let (rows, cols) = echelon.dim();
    if v.len() != cols {
        return Err(ParityMatrixError::dimension_mismatch(
            cols,
            v.len(),
            "decomposed vector length",
        ));
    }
    if let Some(x) = transform {
        if x.nrows() != rows {
            return Err(ParityMatrixError::dimension_mismatch(
                rows,
                x.nrows(),
                "transform rows",
            ));
        }
    }

    let mut leftover = v.mapv(|b| b & 1);
    let mut selected = Array1::<u8>::zeros(rows);
    let mut r = 0;
    if rows > 0 {
        for c in 0..cols {
            if echelon[[r, c]] & 1 == 0 {
                continue;
            }
            if leftover[c] == 1 {
                leftover.zip_mut_with(&echelon.row(r), |acc, &e| *acc ^= e & 1);
                selected[r] = 1;
            }
            r += 1;
            if r >= rows {
                break;
            }
        }
    }

    let h = match transform {
        Some(x) => vec_mat_mul(selected.view(), x)?,
        None => Array1::zeros(rows),
    };
    Ok((leftover, h))
}

/// Basis of `{ v : A · vᵀ = 0 (mod 2) }`, one vector per row.
///
/// Starts from the standard basis and, for each row of `matrix`, keeps the
/// vectors orthogonal to it and replaces the rest by pairwise sums with the
/// first violating vector. Zero rows are dropped from the result. A trivial
/// null space gives a `0 × cols` matrix.
pub fn row_nullspace(matrix: ArrayView2<u8>) -> Array2<u8> {
    let cols = matrix.ncols();
    let mut basis: Vec<Array1<u8>> = (0..cols)
        .map(|i| {
            let mut unit = Array1::zeros(cols);
            unit[i] = 1;
            unit
        })
        .collect();

    for (i, row) in matrix.rows().into_iter().enumerate() {
        let (violating, mut orthogonal): (Vec<_>, Vec<_>) =
            basis.into_iter().partition(|b| dot(b.view(), row) == 1);

        if let Some((first, rest)) = violating.split_first() {
            orthogonal.extend(rest.iter().map(|v| v ^ first));
        }

        if orthogonal.is_empty() {
            debug!(row = i, cols, "null space collapsed to zero");
            return Array2::zeros((0, cols));
        }
        basis = orthogonal;
    }

    basis.retain(|b| b.iter().any(|&x| x == 1));
    debug!(
        rows = matrix.nrows(),
        cols,
        dim = basis.len(),
        "computed null space"
    );
    stack_rows(&basis, cols)
}

/// Enumerate every nonzero combination of the rows of `matrix`.
///
/// Selector `i` runs from 1 to `2^rows - 1`; row `j` takes part when bit
/// `rows - 1 - j` of `i` is set, so the first row is the most significant.
/// Vectors are not deduplicated. Each call returns a fresh iterator.
pub fn iter_rowspace(matrix: ArrayView2<u8>) -> ParityMatrixResult<RowSpace<'_>> {
    let rows = matrix.nrows();
    if rows > MAX_ROWSPACE_ROWS {
        return Err(MatrixError::TooManyRows {
            rows,
            max: MAX_ROWSPACE_ROWS,
        }
        .into());
    }
    Ok(RowSpace {
        matrix,
        next: 1,
        end: 1u64 << rows,
    })
}

/// Iterator returned by [`iter_rowspace`].
#[derive(Clone, Debug)]
pub struct RowSpace<'a> {
    matrix: ArrayView2<'a, u8>,
    next: u64,
    end: u64,
}

impl Iterator for RowSpace<'_> {
    type Item = Array1<u8>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.next >= self.end {
            return None;
        }
        let selector = self.next;
        self.next += 1;

        let rows = self.matrix.nrows();
        let mut out = Array1::zeros(self.matrix.ncols());
        for (j, row) in self.matrix.rows().into_iter().enumerate() {
            if (selector >> (rows - 1 - j)) & 1 == 1 {
                out.zip_mut_with(&row, |acc, &b| *acc ^= b & 1);
            }
        }
        Some(out)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let left = usize::try_from(self.end.saturating_sub(self.next)).ok();
        (left.unwrap_or(usize::MAX), left)
    }
}

/// Verify that `H · Gᵀ = 0 (mod 2)`.
///
/// Fails on the first nonzero entry. Empty inputs verify trivially.
pub fn verify_parity_matrix(g: ArrayView2<u8>, h: ArrayView2<u8>) -> ParityMatrixResult<bool> {
    if h.nrows() == 0 || g.nrows() == 0 {
        return Ok(true);
    }
    if h.ncols() != g.ncols() {
        return Err(ParityMatrixError::dimension_mismatch(
            h.ncols(),
            g.ncols(),
            "parity check columns",
        ));
    }

    for (i, h_row) in h.rows().into_iter().enumerate() {
        for (j, g_row) in g.rows().into_iter().enumerate() {
            if dot(h_row, g_row) != 0 {
                return Err(ParityMatrixError::verification(format!(
                    "H · G^T ≠ 0 (mod 2): entry at position ({}, {}) is 1",
                    i, j
                )));
            }
        }
    }

    Ok(true)
}
