// SPDX-License-Identifier: LGPL-3.0-only
//
// This file is provided WITHOUT ANY WARRANTY;
// without even the implied warranty of MERCHANTABILITY
// or FITNESS FOR A PARTICULAR PURPOSE.

use bicycle_parity_matrix::ParityMatrixError;
use bicycle_polynomial::PolynomialError;
use thiserror::Error;

/// Errors raised while building or analysing a bicycle code
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CodeError {
    #[error(transparent)]
    Polynomial(#[from] PolynomialError),

    #[error(transparent)]
    ParityMatrix(#[from] ParityMatrixError),

    #[error("Dimension mismatch in {context}: expected {expected}, got {actual}")]
    DimensionMismatch {
        expected: usize,
        actual: usize,
        context: String,
    },

    #[error("Entry {index} = {value} of the input vector is not a bit")]
    NonBinaryInput { index: usize, value: u8 },
}

pub type CodeResult<T> = Result<T, CodeError>;

impl CodeError {
    pub fn dimension_mismatch(expected: usize, actual: usize, context: impl Into<String>) -> Self {
        CodeError::DimensionMismatch {
            expected,
            actual,
            context: context.into(),
        }
    }
}
