// SPDX-License-Identifier: LGPL-3.0-only
//
// This file is provided WITHOUT ANY WARRANTY;
// without even the implied warranty of MERCHANTABILITY
// or FITNESS FOR A PARTICULAR PURPOSE.

//! Error types for polynomial operations.

use crate::order::Order;
use thiserror::Error;

/// Errors that can occur during polynomial operations.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PolynomialError {
    /// An order component was zero
    #[error("Invalid order ({l}, {m}): both components must be positive")]
    InvalidOrder { l: usize, m: usize },

    /// Input shape not accepted by the constructor
    #[error("Invalid polynomial input: {message}")]
    InvalidInput { message: String },

    /// Bit-vector or bit-matrix of the wrong size for the order
    #[error("Shape mismatch: expected dimension {expected}, got shape {actual:?}")]
    ShapeMismatch { expected: usize, actual: Vec<usize> },

    /// Integer literal other than 0 or 1
    #[error("Cannot initialize Polynomial from integer {0}")]
    InvalidLiteral(i64),

    /// A multi-term (or zero) polynomial was used where a monomial is required
    #[error("Attempted to truncate {polynomial} to a monomial")]
    NotAMonomial { polynomial: String },

    /// Division or negative power with a non-monomial
    #[error("Division by non-monomials is not supported")]
    NonMonomialDivisor,

    /// Division by the zero polynomial
    #[error("Division by zero polynomial")]
    DivisionByZero,

    /// Operands built over different group orders
    #[error("Order mismatch: {left} vs {right}")]
    OrderMismatch { left: Order, right: Order },

    /// Textual input not matching the monomial grammar
    #[error("Polynomial string not in correct format: {input:?}")]
    Parse { input: String },
}

/// Result type alias for polynomial operations
pub type PolynomialResult<T> = Result<T, PolynomialError>;

impl PolynomialError {
    /// Create an invalid input error with a message
    pub fn invalid_input(message: impl Into<String>) -> Self {
        PolynomialError::InvalidInput {
            message: message.into(),
        }
    }

    /// Create a parse error for the offending input
    pub fn parse(input: impl Into<String>) -> Self {
        PolynomialError::Parse {
            input: input.into(),
        }
    }
}
