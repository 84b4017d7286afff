// SPDX-License-Identifier: LGPL-3.0-only
//
// This file is provided WITHOUT ANY WARRANTY;
// without even the implied warranty of MERCHANTABILITY
// or FITNESS FOR A PARTICULAR PURPOSE.

//! Error types for GF(2) matrix operations
//!
//! This module defines specific error types using `thiserror` for the linear
//! algebra kernel: shape problems, non-binary input and failed verifications.

use thiserror::Error;

/// Main error type for parity matrix operations
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ParityMatrixError {
    /// Matrix operation errors
    #[error("Matrix operation error: {message}")]
    Matrix { message: String },

    /// Verification errors
    #[error("Verification failed: {message}")]
    Verification { message: String },
}

/// Result type alias for parity matrix operations
pub type ParityMatrixResult<T> = Result<T, ParityMatrixError>;

/// Structural matrix errors
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum MatrixError {
    /// An entry other than 0 or 1 where strict binary input is required
    #[error("Entry ({row}, {col}) = {value} is not a bit")]
    NonBinaryEntry { row: usize, col: usize, value: u8 },

    /// Row-space enumeration is limited by the selector width
    #[error("Cannot enumerate the row space of {rows} rows (at most {max})")]
    TooManyRows { rows: usize, max: usize },
}

impl From<MatrixError> for ParityMatrixError {
    fn from(err: MatrixError) -> Self {
        ParityMatrixError::Matrix {
            message: err.to_string(),
        }
    }
}

impl ParityMatrixError {
    /// Create a verification error with a message
    pub fn verification(message: impl Into<String>) -> Self {
        ParityMatrixError::Verification {
            message: message.into(),
        }
    }

    /// Create a dimension mismatch error
    pub fn dimension_mismatch(expected: usize, actual: usize, context: impl Into<String>) -> Self {
        ParityMatrixError::Matrix {
            message: format!(
                "Dimension mismatch in {}: expected {}, got {}",
                context.into(),
                expected,
                actual
            ),
        }
    }
}
