// SPDX-License-Identifier: LGPL-3.0-only
//
// This file is provided WITHOUT ANY WARRANTY;
// without even the implied warranty of MERCHANTABILITY
// or FITNESS FOR A PARTICULAR PURPOSE.

//! # Bicycle Polynomial Library
//!
//! Bivariate polynomials over GF(2) modulo `x^l - 1` and `y^m - 1`, i.e. elements of
//! the group algebra GF(2)[Z_l × Z_m] used to define bicycle (two-block) codes.
//!
//! ## Features
//!
//! - Canonical term-set representation: duplicate monomials cancel pairwise.
//! - Ring operations: addition, multiplication, division by monomials, integer powers.
//! - Bit-vector and regular-representation bit-matrix encodings (`ndarray`).
//! - Textual notation with configurable variable labels and power operator.
//! - Serialization: Optional serde support with bincode integration.
//!
//! ## Mathematical Background
//!
//! The monomials `x^a y^b` with `0 <= a < l`, `0 <= b < m` form the group Z_l × Z_m.
//! A polynomial is a subset of this group; addition is symmetric difference and
//! multiplication is convolution. The regular representation maps a monomial to
//! the permutation matrix `S_l(a) ⊗ S_m(b)`, where `S_n(s)` is the cyclic shift
//! by `s`, and a polynomial to the mod-2 sum of its monomials' matrices.
//!
//! Bit position `i` always corresponds to the monomial `(i / m, i % m)`.

pub mod errors;
pub mod notation;
pub mod order;
pub mod polynomial;
pub mod utils;

pub use errors::{PolynomialError, PolynomialResult};
pub use notation::{MonomialParser, Notation};
pub use order::{monomial_index, Monomial, Order};
pub use polynomial::{Polynomial, Term, Terms};
