// SPDX-License-Identifier: LGPL-3.0-only
//
// This file is provided WITHOUT ANY WARRANTY;
// without even the implied warranty of MERCHANTABILITY
// or FITNESS FOR A PARTICULAR PURPOSE.

//! Bivariate bicycle codes.
//!
//! Two polynomials `A`, `B` over the same group Z_l × Z_m give the CSS check
//! matrices
//!
//! ```text
//! Hx = [ A | B ]        Hz = [ Bᵀ | Aᵀ ]
//! ```
//!
//! on `n = 2·l·m` qubits, where `A` and `B` stand for their `l·m × l·m`
//! regular representations. `Hx · Hzᵀ = AB + BA = 0` because the group ring
//! is commutative.

use crate::config::CodeConfig;
use crate::errors::{CodeError, CodeResult};
use bicycle_parity_matrix::{
    decompose_row_vector, dot, format_matrix, row_echelon, row_nullspace, stack_rows,
    verify_parity_matrix, BitMatrixExt,
};
use bicycle_polynomial::{Order, Polynomial, PolynomialError};
use ndarray::{s, Array1, Array2, ArrayView1, ArrayView2};
use tracing::{debug, info, trace};

/// Exponents of `A = 1 + y + x^3 y^-1` for the gross code family
pub const GROSS_A_TERMS: [(i64, i64); 3] = [(0, 0), (0, 1), (3, -1)];

/// Exponents of `B = 1 + x + x^-1 y^-3` for the gross code family
pub const GROSS_B_TERMS: [(i64, i64); 3] = [(0, 0), (1, 0), (-1, -3)];

/// A CSS code built from a pair of group-algebra polynomials.
#[derive(Debug, Clone)]
pub struct BicycleCode {
    name: String,
    a: Polynomial,
    b: Polynomial,
    hx: Array2<u8>,
    hz: Array2<u8>,
    hx_echelon: (Array2<u8>, Array2<u8>),
    hz_echelon: (Array2<u8>, Array2<u8>),
}

impl BicycleCode {
    pub fn new(name: impl Into<String>, a: Polynomial, b: Polynomial) -> CodeResult<Self> {
        let name = name.into();
        if a.order() != b.order() {
            return Err(PolynomialError::OrderMismatch {
                left: a.order(),
                right: b.order(),
            }
            .into());
        }

        let (am, bm) = (a.mat(), b.mat());
        let hx = hstack(am.view(), bm.view());
        let hz = hstack(bm.t(), am.t());
        let hx_echelon = row_echelon(hx.view(), false);
        let hz_echelon = row_echelon(hz.view(), false);

        info!(
            code = %name,
            order = %a.order(),
            qubits = hx.ncols(),
            a = %a,
            b = %b,
            "built bicycle code"
        );
        trace!("{}", format_matrix("Hx", hx.view()));
        trace!("{}", format_matrix("Hz", hz.view()));

        Ok(Self {
            name,
            a,
            b,
            hx,
            hz,
            hx_echelon,
            hz_echelon,
        })
    }

    /// Build the code described by a configuration.
    pub fn from_config(config: &CodeConfig) -> anyhow::Result<Self> {
        let (a, b) = config.polynomials()?;
        Ok(Self::new(config.name.clone(), a, b)?)
    }

    /// The `[[144, 12, 12]]` gross code, order `(12, 6)`.
    pub fn gross() -> CodeResult<Self> {
        Self::from_terms("gross", Order::new(12, 6)?)
    }

    /// The `[[288, 12, 18]]` two-gross code, order `(12, 12)`.
    pub fn two_gross() -> CodeResult<Self> {
        Self::from_terms("two-gross", Order::new(12, 12)?)
    }

    fn from_terms(name: &str, order: Order) -> CodeResult<Self> {
        Self::new(
            name,
            Polynomial::from_terms(&GROSS_A_TERMS, order),
            Polynomial::from_terms(&GROSS_B_TERMS, order),
        )
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn order(&self) -> Order {
        self.a.order()
    }

    pub fn polynomials(&self) -> (&Polynomial, &Polynomial) {
        (&self.a, &self.b)
    }

    /// Block length `n = 2·l·m`
    pub fn num_qubits(&self) -> usize {
        self.hx.ncols()
    }

    pub fn hx(&self) -> &Array2<u8> {
        &self.hx
    }

    pub fn hz(&self) -> &Array2<u8> {
        &self.hz
    }

    /// Check that every X check commutes with every Z check.
    pub fn check_css(&self) -> CodeResult<bool> {
        Ok(verify_parity_matrix(self.hz.view(), self.hx.view())?)
    }

    /// Number of encoded qubits, `n - rank(Hx) - rank(Hz)`
    pub fn logical_qubits(&self) -> usize {
        self.num_qubits() - echelon_rank(&self.hx_echelon.0) - echelon_rank(&self.hz_echelon.0)
    }

    /// Basis of X logical operators: vectors commuting with every Z check,
    /// taken modulo the X stabilizers.
    pub fn x_logicals(&self) -> CodeResult<Array2<u8>> {
        let basis = logical_basis(self.hz.view(), &self.hx_echelon.0)?;
        debug!(code = %self.name, count = basis.nrows(), "found X logicals");
        Ok(basis)
    }

    /// Basis of Z logical operators, dual to [`x_logicals`](Self::x_logicals).
    pub fn z_logicals(&self) -> CodeResult<Array2<u8>> {
        let basis = logical_basis(self.hx.view(), &self.hz_echelon.0)?;
        debug!(code = %self.name, count = basis.nrows(), "found Z logicals");
        Ok(basis)
    }

    /// Both logical bases, computed in parallel.
    pub fn logical_operators(&self) -> CodeResult<(Array2<u8>, Array2<u8>)> {
        let (x, z) = rayon::join(|| self.x_logicals(), || self.z_logicals());
        let (x, z) = (x?, z?);
        info!(
            code = %self.name,
            x = x.nrows(),
            z = z.nrows(),
            "computed logical operators"
        );
        Ok((x, z))
    }

    /// Which rows of `Hx` sum to `v`, or `None` when `v` is not an X stabilizer.
    pub fn x_stabilizer_combination(&self, v: ArrayView1<u8>) -> CodeResult<Option<Array1<u8>>> {
        self.ensure_qubit_vector(v)?;
        stabilizer_combination(v, &self.hx_echelon)
    }

    /// Which rows of `Hz` sum to `v`, or `None` when `v` is not a Z stabilizer.
    pub fn z_stabilizer_combination(&self, v: ArrayView1<u8>) -> CodeResult<Option<Array1<u8>>> {
        self.ensure_qubit_vector(v)?;
        stabilizer_combination(v, &self.hz_echelon)
    }

    pub fn is_x_stabilizer(&self, v: ArrayView1<u8>) -> CodeResult<bool> {
        Ok(self.x_stabilizer_combination(v)?.is_some())
    }

    pub fn is_z_stabilizer(&self, v: ArrayView1<u8>) -> CodeResult<bool> {
        Ok(self.z_stabilizer_combination(v)?.is_some())
    }

    fn ensure_qubit_vector(&self, v: ArrayView1<u8>) -> CodeResult<()> {
        ensure_bit_vector(v, self.num_qubits())
    }
}

/// Syndrome `H · eᵀ (mod 2)` of an error pattern.
pub fn syndrome(h: ArrayView2<u8>, e: ArrayView1<u8>) -> CodeResult<Array1<u8>> {
    ensure_bit_vector(e, h.ncols())?;
    Ok(h.rows().into_iter().map(|row| dot(row, e)).collect())
}

fn ensure_bit_vector(v: ArrayView1<u8>, len: usize) -> CodeResult<()> {
    if v.len() != len {
        return Err(CodeError::dimension_mismatch(len, v.len(), "qubit vector"));
    }
    match v.iter().enumerate().find(|&(_, &value)| value > 1) {
        Some((index, &value)) => Err(CodeError::NonBinaryInput { index, value }),
        None => Ok(()),
    }
}

fn hstack(left: ArrayView2<u8>, right: ArrayView2<u8>) -> Array2<u8> {
    let split = left.ncols();
    let mut out = Array2::zeros((left.nrows(), split + right.ncols()));
    out.slice_mut(s![.., ..split]).assign(&left);
    out.slice_mut(s![.., split..]).assign(&right);
    out
}

fn echelon_rank(echelon: &Array2<u8>) -> usize {
    (0..echelon.nrows())
        .filter(|&r| !echelon.is_zero_row(r))
        .count()
}

fn stabilizer_combination(
    v: ArrayView1<u8>,
    (echelon, transform): &(Array2<u8>, Array2<u8>),
) -> CodeResult<Option<Array1<u8>>> {
    let (leftover, h) = decompose_row_vector(v, echelon.view(), Some(transform.view()))?;
    if leftover.iter().all(|&b| b == 0) {
        Ok(Some(h))
    } else {
        Ok(None)
    }
}

/// Null space of `checks` reduced modulo the row space behind `stabilizers`.
///
/// Each null-space vector outside the current span is kept and the span
/// grows by it, so the result is independent modulo the stabilizers.
fn logical_basis(checks: ArrayView2<u8>, stabilizers: &Array2<u8>) -> CodeResult<Array2<u8>> {
    let candidates = row_nullspace(checks);
    let cols = checks.ncols();
    let mut span = stabilizers.clone();
    let mut logicals = Vec::new();

    for candidate in candidates.rows() {
        let (leftover, _) = decompose_row_vector(candidate, span.view(), None)?;
        if leftover.iter().all(|&b| b == 0) {
            continue;
        }
        logicals.push(candidate.to_owned());

        let mut grown = Array2::zeros((span.nrows() + 1, cols));
        grown.slice_mut(s![..span.nrows(), ..]).assign(&span);
        grown.row_mut(span.nrows()).assign(&leftover);
        span = row_echelon(grown.view(), false).0;
    }

    Ok(stack_rows(&logicals, cols))
}
