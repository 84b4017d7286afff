// SPDX-License-Identifier: LGPL-3.0-only
//
// This file is provided WITHOUT ANY WARRANTY;
// without even the implied warranty of MERCHANTABILITY
// or FITNESS FOR A PARTICULAR PURPOSE.

//! Linear algebra over GF(2) for parity-check matrices.
//!
//! Matrices and vectors are `ndarray` arrays of `u8` whose entries are read
//! mod 2. The crate provides the handful of operations needed to analyse a
//! CSS code given its check matrices:
//!
//! - [`row_echelon`]: Gaussian elimination returning `(E, X)` with `X · A = E`.
//! - [`decompose_row_vector`]: reduce a vector against an echelon form and
//!   recover which rows of `A` produce it.
//! - [`row_nullspace`]: a basis of `{ v : A · vᵀ = 0 }`.
//! - [`iter_rowspace`]: every nonzero combination of the rows of `A`.
//!
//! ## Example
//!
//! ```
//! use bicycle_parity_matrix::{row_nullspace, verify_parity_matrix};
//! use ndarray::array;
//!
//! let h = array![[1u8, 1, 0], [0, 1, 1]];
//! let n = row_nullspace(h.view());
//! assert_eq!(n, array![[1u8, 1, 1]]);
//! assert!(verify_parity_matrix(n.view(), h.view()).unwrap());
//! ```

pub mod errors;
pub mod math;
pub mod matrix;
pub mod matrix_type;
pub mod utils;

// Re-export commonly used types for convenience
pub use errors::{MatrixError, ParityMatrixError, ParityMatrixResult};
pub use math::{dot, is_invertible, matmul, rank, vec_mat_mul};
pub use matrix::{
    decompose_row_vector, iter_rowspace, row_echelon, row_nullspace, verify_parity_matrix,
    RowSpace, MAX_ROWSPACE_ROWS,
};
pub use matrix_type::{stack_rows, BitMatrixExt};
pub use utils::format_matrix;
