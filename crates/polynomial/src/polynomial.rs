// SPDX-License-Identifier: LGPL-3.0-only
//
// This file is provided WITHOUT ANY WARRANTY;
// without even the implied warranty of MERCHANTABILITY
// or FITNESS FOR A PARTICULAR PURPOSE.

//! Polynomial arithmetic in the group algebra GF(2)[Z_l × Z_m].

use crate::errors::{PolynomialError, PolynomialResult};
use crate::notation::Notation;
use crate::order::{Monomial, Order};
use crate::utils::{cyclic_shift_matrix, kron_bits, xor_into};
use ndarray::{Array1, Array2, ArrayView1, ArrayView2};
use std::cmp::Ordering;
use std::collections::{HashMap, HashSet};
use std::fmt;
use std::hash::{Hash, Hasher};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// One entry of a term sequence: a monomial exponent pair or an integer literal.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Term {
    /// `x^a y^b`, not necessarily reduced
    Monomial(i64, i64),
    /// `0` or `1`
    Literal(i64),
}

impl From<(i64, i64)> for Term {
    fn from((a, b): (i64, i64)) -> Self {
        Term::Monomial(a, b)
    }
}

impl From<i64> for Term {
    fn from(value: i64) -> Self {
        Term::Literal(value)
    }
}

impl From<Monomial> for Term {
    fn from(monomial: Monomial) -> Self {
        let (a, b) = monomial.exponents();
        Term::Monomial(a, b)
    }
}

/// The accepted input kinds of [`Polynomial::new`].
#[derive(Clone, Debug)]
pub enum Terms {
    /// Copy of an existing polynomial, re-reduced under the target order
    Polynomial(Polynomial),
    /// A single monomial
    Monomial(i64, i64),
    /// The integer `0` or `1`
    Literal(i64),
    /// A sequence of monomials and literals
    Sequence(Vec<Term>),
    /// An indicator vector of length `l * m`
    BitVector(Array1<u8>),
    /// A one-row, one-column or general matrix; a general matrix contributes its first row
    BitMatrix(Array2<u8>),
}

impl From<Polynomial> for Terms {
    fn from(poly: Polynomial) -> Self {
        Terms::Polynomial(poly)
    }
}

impl From<&Polynomial> for Terms {
    fn from(poly: &Polynomial) -> Self {
        Terms::Polynomial(poly.clone())
    }
}

impl From<(i64, i64)> for Terms {
    fn from((a, b): (i64, i64)) -> Self {
        Terms::Monomial(a, b)
    }
}

impl From<Monomial> for Terms {
    fn from(monomial: Monomial) -> Self {
        let (a, b) = monomial.exponents();
        Terms::Monomial(a, b)
    }
}

impl From<i64> for Terms {
    fn from(value: i64) -> Self {
        Terms::Literal(value)
    }
}

impl From<Vec<Term>> for Terms {
    fn from(terms: Vec<Term>) -> Self {
        Terms::Sequence(terms)
    }
}

impl From<Vec<(i64, i64)>> for Terms {
    fn from(terms: Vec<(i64, i64)>) -> Self {
        Terms::Sequence(terms.into_iter().map(Term::from).collect())
    }
}

impl From<Array1<u8>> for Terms {
    fn from(bits: Array1<u8>) -> Self {
        Terms::BitVector(bits)
    }
}

impl From<Array2<u8>> for Terms {
    fn from(bits: Array2<u8>) -> Self {
        Terms::BitMatrix(bits)
    }
}

/// An element of GF(2)[x,y]/(x^l - 1, y^m - 1).
///
/// The polynomial is stored as the set of monomials with coefficient 1, in
/// canonical form: every monomial is reduced modulo the order and appears at
/// most once. The canonical form is established once at construction and
/// never changes afterwards; every operation returns a new value.
///
/// ```
/// use bicycle_polynomial::{Order, Polynomial};
///
/// let order = Order::new(3, 2).unwrap();
/// let p = Polynomial::from_terms(&[(1, 0), (2, 1)], order);
/// assert_eq!(p.to_string(), "x + x**2*y");
///
/// let x = Polynomial::from_monomial(1, 0, order);
/// let q = p.multiply(&x).unwrap();
/// assert_eq!(q, Polynomial::from_terms(&[(2, 0), (0, 1)], order));
/// ```
#[derive(Clone, Debug)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(
    feature = "serde",
    serde(into = "RawPolynomial", try_from = "RawPolynomial")
)]
pub struct Polynomial {
    order: Order,
    terms: Vec<Monomial>,
}

/// Wire form of [`Polynomial`]: the order and the exponent pairs of its terms.
#[cfg(feature = "serde")]
#[derive(Serialize, Deserialize)]
struct RawPolynomial {
    order: Order,
    terms: Vec<(usize, usize)>,
}

#[cfg(feature = "serde")]
impl From<Polynomial> for RawPolynomial {
    fn from(poly: Polynomial) -> Self {
        Self {
            order: poly.order,
            terms: poly.terms.iter().map(|mon| (mon.x, mon.y)).collect(),
        }
    }
}

/// Rejects exponents outside the order and re-canonicalizes the rest.
#[cfg(feature = "serde")]
impl TryFrom<RawPolynomial> for Polynomial {
    type Error = PolynomialError;

    fn try_from(raw: RawPolynomial) -> PolynomialResult<Self> {
        let order = raw.order;
        let canon = raw
            .terms
            .into_iter()
            .map(|(x, y)| {
                if x < order.l() && y < order.m() {
                    Ok(Monomial { x, y })
                } else {
                    Err(PolynomialError::invalid_input(format!(
                        "term ({x}, {y}) is outside order {order}"
                    )))
                }
            })
            .collect::<PolynomialResult<Vec<_>>>()?;
        Ok(Self {
            order,
            terms: canonicalize(canon),
        })
    }
}

impl fmt::Display for Polynomial {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_string_with(&Notation::default()))
    }
}

impl PartialEq for Polynomial {
    fn eq(&self, other: &Self) -> bool {
        if self.order != other.order || self.terms.len() != other.terms.len() {
            return false;
        }
        let mine: HashSet<&Monomial> = self.terms.iter().collect();
        other.terms.iter().all(|t| mine.contains(t))
    }
}

impl Eq for Polynomial {}

impl Hash for Polynomial {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.order.hash(state);
        let mut sorted = self.terms.clone();
        sorted.sort_unstable();
        sorted.hash(state);
    }
}

/// Monomials of the same order are ordered by index. Any polynomial equals
/// itself; other pairs are incomparable.
impl PartialOrd for Polynomial {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        if self == other {
            return Some(Ordering::Equal);
        }
        self.cmp_monomial(other).ok()
    }
}

/// Keeps the monomials of odd multiplicity, once each, in order of first appearance.
fn canonicalize(canon: Vec<Monomial>) -> Vec<Monomial> {
    let mut counts: HashMap<Monomial, usize> = HashMap::with_capacity(canon.len());
    for mon in &canon {
        *counts.entry(*mon).or_default() += 1;
    }
    let mut retained = HashSet::with_capacity(counts.len());
    canon
        .into_iter()
        .filter(|mon| counts[mon] % 2 == 1 && retained.insert(*mon))
        .collect()
}

fn literal_terms(value: i64) -> PolynomialResult<Option<Monomial>> {
    match value {
        0 => Ok(None),
        1 => Ok(Some(Monomial::ONE)),
        other => Err(PolynomialError::InvalidLiteral(other)),
    }
}

impl Polynomial {
    /// Creates a polynomial from any accepted input kind.
    ///
    /// # Arguments
    ///
    /// * `terms` - The terms, see [`Terms`] for the accepted kinds.
    /// * `order` - The order `(l, m)` of the underlying group.
    ///
    /// # Errors
    ///
    /// Returns `PolynomialError::InvalidLiteral` for integers other than 0 or 1 and
    /// `PolynomialError::ShapeMismatch` for bit arrays that do not have `l * m` entries.
    pub fn new(terms: impl Into<Terms>, order: Order) -> PolynomialResult<Self> {
        match terms.into() {
            Terms::Polynomial(poly) => Ok(Self::from_polynomial(&poly, order)),
            Terms::Monomial(a, b) => Ok(Self::from_monomial(a, b, order)),
            Terms::Literal(value) => Self::from_literal(value, order),
            Terms::Sequence(seq) => Self::from_sequence(&seq, order),
            Terms::BitVector(bits) => Self::from_bit_vector(bits.view(), order),
            Terms::BitMatrix(bits) => Self::from_bit_matrix(bits.view(), order),
        }
    }

    /// The zero polynomial.
    pub fn zero(order: Order) -> Self {
        Self {
            order,
            terms: Vec::new(),
        }
    }

    /// The multiplicative identity `1`.
    pub fn one(order: Order) -> Self {
        Self {
            order,
            terms: vec![Monomial::ONE],
        }
    }

    /// The monomial `x^a y^b`, reduced modulo the order.
    pub fn from_monomial(a: i64, b: i64, order: Order) -> Self {
        Self {
            order,
            terms: vec![order.reduce(a, b)],
        }
    }

    /// Fast path for callers that already hold a non-zero monomial.
    ///
    /// Skips canonicalization; the coordinates are only wrapped into range.
    pub fn from_nonzero_monomial(monomial: Monomial, order: Order) -> Self {
        Self {
            order,
            terms: vec![Monomial {
                x: monomial.x % order.l(),
                y: monomial.y % order.m(),
            }],
        }
    }

    /// `0` maps to the zero polynomial and `1` to the identity.
    pub fn from_literal(value: i64, order: Order) -> PolynomialResult<Self> {
        Ok(Self {
            order,
            terms: literal_terms(value)?.into_iter().collect(),
        })
    }

    /// Sum of the given monomials; pairs of equal monomials cancel.
    pub fn from_terms(terms: &[(i64, i64)], order: Order) -> Self {
        let canon = terms.iter().map(|&(a, b)| order.reduce(a, b)).collect();
        Self {
            order,
            terms: canonicalize(canon),
        }
    }

    /// Sum of a mixed sequence of monomials and `0`/`1` literals.
    pub fn from_sequence(terms: &[Term], order: Order) -> PolynomialResult<Self> {
        let mut canon = Vec::with_capacity(terms.len());
        for term in terms {
            match *term {
                Term::Monomial(a, b) => canon.push(order.reduce(a, b)),
                Term::Literal(value) => canon.extend(literal_terms(value)?),
            }
        }
        Ok(Self {
            order,
            terms: canonicalize(canon),
        })
    }

    /// Copies `poly` into `order`, reducing its exponents if the orders differ.
    pub fn from_polynomial(poly: &Polynomial, order: Order) -> Self {
        if poly.order == order {
            return poly.clone();
        }
        let canon = poly
            .terms
            .iter()
            .map(|mon| {
                let (a, b) = mon.exponents();
                order.reduce(a, b)
            })
            .collect();
        Self {
            order,
            terms: canonicalize(canon),
        }
    }

    /// Reads an indicator vector of length `l * m`; entry `i` selects the monomial of index `i`.
    pub fn from_bit_vector(bits: ArrayView1<u8>, order: Order) -> PolynomialResult<Self> {
        if bits.len() != order.dim() {
            return Err(PolynomialError::ShapeMismatch {
                expected: order.dim(),
                actual: bits.shape().to_vec(),
            });
        }
        let terms = order
            .monomials()
            .zip(bits.iter())
            .filter(|(_, bit)| **bit % 2 == 1)
            .map(|(mon, _)| mon)
            .collect();
        Ok(Self { order, terms })
    }

    /// Reads a row vector, a column vector, or the first row of an `(_, l * m)` matrix.
    pub fn from_bit_matrix(bits: ArrayView2<u8>, order: Order) -> PolynomialResult<Self> {
        let dim = order.dim();
        let (rows, cols) = bits.dim();
        if rows == 1 {
            Self::from_bit_vector(bits.row(0), order)
        } else if cols == 1 {
            Self::from_bit_vector(bits.column(0), order)
        } else if rows > 0 && cols == dim {
            Self::from_bit_vector(bits.row(0), order)
        } else {
            Err(PolynomialError::ShapeMismatch {
                expected: dim,
                actual: vec![rows, cols],
            })
        }
    }

    /// Parses a sum of monomials written with the default notation.
    pub fn parse(expr: &str, order: Order) -> PolynomialResult<Self> {
        Self::parse_with(expr, order, &Notation::default())
    }

    /// Parses a sum of monomials written with `notation`.
    pub fn parse_with(expr: &str, order: Order, notation: &Notation) -> PolynomialResult<Self> {
        let terms = notation.parse_terms(expr)?;
        Ok(Self::from_terms(&terms, order))
    }

    /// Renders the polynomial using `notation`; the zero polynomial renders as `0`.
    pub fn to_string_with(&self, notation: &Notation) -> String {
        if self.terms.is_empty() {
            return "0".to_string();
        }
        self.terms
            .iter()
            .map(|mon| notation.render_monomial(*mon))
            .collect::<Vec<_>>()
            .join(" + ")
    }

    /// The order `(l, m)` of the polynomial.
    pub fn order(&self) -> Order {
        self.order
    }

    /// Number of group elements `l * m`.
    pub fn dim(&self) -> usize {
        self.order.dim()
    }

    /// The canonical monomials of the polynomial.
    pub fn terms(&self) -> &[Monomial] {
        &self.terms
    }

    /// Number of terms.
    pub fn len(&self) -> usize {
        self.terms.len()
    }

    /// Alias for [`Polynomial::len`].
    pub fn abs(&self) -> usize {
        self.len()
    }

    pub fn is_empty(&self) -> bool {
        self.terms.is_empty()
    }

    /// Checks if the polynomial is zero.
    pub fn is_zero(&self) -> bool {
        self.terms.is_empty()
    }

    pub fn is_nonzero(&self) -> bool {
        !self.terms.is_empty()
    }

    /// Exactly one term. The zero polynomial is not a monomial here.
    pub fn is_monomial(&self) -> bool {
        self.terms.len() == 1
    }

    /// The single monomial of the polynomial.
    ///
    /// # Errors
    ///
    /// Returns `PolynomialError::NotAMonomial` unless the polynomial has exactly one term.
    pub fn mon(&self) -> PolynomialResult<Monomial> {
        match self.terms.as_slice() {
            [mon] => Ok(*mon),
            _ => Err(PolynomialError::NotAMonomial {
                polynomial: self.to_string(),
            }),
        }
    }

    /// Index of the single monomial of the polynomial.
    pub fn mon_idx(&self) -> PolynomialResult<usize> {
        Ok(self.order.index(self.mon()?))
    }

    /// Total order on monomials by index.
    pub fn cmp_monomial(&self, other: &Self) -> PolynomialResult<Ordering> {
        self.check_order(other)?;
        Ok(self.mon_idx()?.cmp(&other.mon_idx()?))
    }

    /// Returns the `index`-th term as a monomial polynomial.
    pub fn get(&self, index: usize) -> Option<Polynomial> {
        self.terms
            .get(index)
            .map(|mon| Self::from_nonzero_monomial(*mon, self.order))
    }

    /// Iterates over the terms as monomial polynomials, in canonical order.
    pub fn iter(&self) -> impl Iterator<Item = Polynomial> + '_ {
        self.terms
            .iter()
            .map(move |mon| Self::from_nonzero_monomial(*mon, self.order))
    }

    /// Iterates over all monomials of `order`, consistent with [`Order::index`].
    pub fn iter_monomials(order: Order) -> impl Iterator<Item = Polynomial> {
        order
            .monomials()
            .map(move |mon| Self::from_nonzero_monomial(mon, order))
    }

    /// Iterates over all monomials of this polynomial's order.
    pub fn monomials(&self) -> impl Iterator<Item = Polynomial> {
        Self::iter_monomials(self.order)
    }

    /// Tests whether the monomial `term` appears in the polynomial.
    ///
    /// # Errors
    ///
    /// Returns `PolynomialError::NotAMonomial` if `term` does not reduce to a single monomial.
    pub fn contains(&self, term: impl Into<Terms>) -> PolynomialResult<bool> {
        let other = Self::new(term, self.order)?;
        let mon = other.mon()?;
        Ok(self.terms.contains(&mon))
    }

    fn check_order(&self, other: &Self) -> PolynomialResult<()> {
        if self.order != other.order {
            return Err(PolynomialError::OrderMismatch {
                left: self.order,
                right: other.order,
            });
        }
        Ok(())
    }

    /// Adds two polynomials. Monomials present in both cancel.
    pub fn add(&self, other: &Self) -> PolynomialResult<Self> {
        self.check_order(other)?;
        let canon = self.terms.iter().chain(&other.terms).copied().collect();
        Ok(Self {
            order: self.order,
            terms: canonicalize(canon),
        })
    }

    /// Multiplies two polynomials (convolution over the group).
    pub fn multiply(&self, other: &Self) -> PolynomialResult<Self> {
        self.check_order(other)?;
        let mut canon = Vec::with_capacity(self.terms.len() * other.terms.len());
        for left in &self.terms {
            for right in &other.terms {
                canon.push(left.mul(*right, self.order));
            }
        }
        Ok(Self {
            order: self.order,
            terms: canonicalize(canon),
        })
    }

    /// Computes `self / divisor` where `divisor` is a monomial.
    ///
    /// # Errors
    ///
    /// Returns `PolynomialError::DivisionByZero` if the divisor is zero and
    /// `PolynomialError::NonMonomialDivisor` if it has more than one term.
    pub fn divide(&self, divisor: &Self) -> PolynomialResult<Self> {
        self.check_order(divisor)?;
        if divisor.is_zero() {
            return Err(PolynomialError::DivisionByZero);
        }
        if !divisor.is_monomial() {
            return Err(PolynomialError::NonMonomialDivisor);
        }
        if self.is_zero() {
            return Ok(self.clone());
        }
        let d = divisor.terms[0];
        let canon = self
            .terms
            .iter()
            .map(|t| t.div(d, self.order))
            .collect();
        Ok(Self {
            order: self.order,
            terms: canonicalize(canon),
        })
    }

    /// Computes `dividend / self` where `self` is a monomial.
    pub fn divide_into(&self, dividend: &Self) -> PolynomialResult<Self> {
        dividend.divide(self)
    }

    /// Raises the polynomial to an integer power.
    ///
    /// `p^0` is `1` for every `p`, including zero. Negative powers are only
    /// defined for monomials.
    ///
    /// # Errors
    ///
    /// Returns `PolynomialError::DivisionByZero` for a negative power of zero and
    /// `PolynomialError::NonMonomialDivisor` for a negative power of a non-monomial.
    pub fn power(&self, exponent: i64) -> PolynomialResult<Self> {
        if exponent >= 0 {
            return self.power_unsigned(exponent as u64);
        }
        if self.is_zero() {
            return Err(PolynomialError::DivisionByZero);
        }
        if !self.is_monomial() {
            return Err(PolynomialError::NonMonomialDivisor);
        }
        self.inverse()?.power_unsigned(exponent.unsigned_abs())
    }

    fn power_unsigned(&self, mut exponent: u64) -> PolynomialResult<Self> {
        let mut result = Self::one(self.order);
        let mut base = self.clone();
        while exponent > 0 {
            if exponent & 1 == 1 {
                result = result.multiply(&base)?;
            }
            exponent >>= 1;
            if exponent > 0 {
                base = base.multiply(&base)?;
            }
        }
        Ok(result)
    }

    /// Replaces every term `x^a y^b` by `x^-a y^-b`.
    pub fn pointwise_inverse(&self) -> Self {
        let canon = self
            .terms
            .iter()
            .map(|mon| mon.inverse(self.order))
            .collect();
        Self {
            order: self.order,
            terms: canonicalize(canon),
        }
    }

    /// Alias for [`Polynomial::pointwise_inverse`]; its matrix is the transpose of [`Polynomial::mat`].
    pub fn t(&self) -> Self {
        self.pointwise_inverse()
    }

    /// Multiplicative inverse of a monomial.
    pub fn inverse(&self) -> PolynomialResult<Self> {
        self.mon()?;
        Ok(self.pointwise_inverse())
    }

    /// Indicator row vector of length `l * m`.
    pub fn vec(&self) -> Array1<u8> {
        let mut out = Array1::zeros(self.dim());
        for mon in &self.terms {
            out[self.order.index(*mon)] = 1;
        }
        out
    }

    /// Regular representation: the `(l*m) x (l*m)` matrix `sum_t S_l(a_t) ⊗ S_m(b_t) mod 2`.
    pub fn mat(&self) -> Array2<u8> {
        let (l, m) = (self.order.l(), self.order.m());
        let mut out = Array2::zeros((self.dim(), self.dim()));
        for mon in &self.terms {
            let shift = kron_bits(
                cyclic_shift_matrix(l, mon.x).view(),
                cyclic_shift_matrix(m, mon.y).view(),
            );
            xor_into(&mut out, shift.view());
        }
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ndarray::array;

    fn order(l: usize, m: usize) -> Order {
        Order::new(l, m).unwrap()
    }

    fn matmul_mod2(a: &Array2<u8>, b: &Array2<u8>) -> Array2<u8> {
        let mut out = Array2::zeros((a.nrows(), b.ncols()));
        for i in 0..a.nrows() {
            for j in 0..b.ncols() {
                let mut bit = 0u8;
                for k in 0..a.ncols() {
                    bit ^= a[[i, k]] & b[[k, j]];
                }
                out[[i, j]] = bit;
            }
        }
        out
    }

    #[test]
    fn test_construction_kinds() {
        let o = order(4, 7);
        assert!(Polynomial::new(Vec::<(i64, i64)>::new(), o).unwrap().is_zero());
        assert_eq!(Polynomial::new(0i64, o).unwrap(), Polynomial::zero(o));
        assert_eq!(Polynomial::new(1i64, o).unwrap(), Polynomial::one(o));
        assert_eq!(
            Polynomial::new((3i64, 4i64), order(12, 4)).unwrap().terms(),
            &[Monomial { x: 3, y: 0 }]
        );

        // 0 and 5 contribute nothing / error; (2,3) appears twice and cancels
        let mixed = vec![
            Term::Literal(0),
            Term::Monomial(2, 3),
            Term::Monomial(7, 4),
            Term::Monomial(3, 2),
            Term::Monomial(2, 3),
            Term::Literal(1),
        ];
        let c = Polynomial::new(mixed, o).unwrap();
        assert_eq!(c, Polynomial::from_terms(&[(3, 4), (3, 2), (0, 0)], o));
        assert_eq!(c.len(), 3);
    }

    #[test]
    fn test_invalid_literal() {
        let o = order(4, 7);
        assert_eq!(
            Polynomial::new(5i64, o),
            Err(PolynomialError::InvalidLiteral(5))
        );
        assert_eq!(
            Polynomial::from_sequence(&[Term::Monomial(1, 1), Term::Literal(2)], o),
            Err(PolynomialError::InvalidLiteral(2))
        );
    }

    #[test]
    fn test_odd_multiplicity_kept_once() {
        let o = order(3, 3);
        let p = Polynomial::from_terms(&[(1, 1), (1, 1), (1, 1), (2, 0), (4, 4)], o);
        // (4,4) reduces to (1,1): four copies cancel
        assert_eq!(p.terms(), &[Monomial { x: 2, y: 0 }]);

        let q = Polynomial::from_terms(&[(2, 0), (1, 1), (1, 1), (1, 1)], o);
        assert_eq!(q.terms(), &[Monomial { x: 2, y: 0 }, Monomial { x: 1, y: 1 }]);
    }

    #[test]
    fn test_concrete_product() {
        let o = order(3, 2);
        let p = Polynomial::from_terms(&[(1, 0), (2, 1)], o);
        assert_eq!(p.len(), 2);
        assert_eq!(p.to_string(), "x + x**2*y");

        let x = Polynomial::from_terms(&[(1, 0)], o);
        let product = p.multiply(&x).unwrap();
        assert_eq!(product, Polynomial::from_terms(&[(2, 0), (0, 1)], o));
        assert_eq!(product.to_string(), "x**2 + y");
    }

    #[test]
    fn test_addition_cancels() {
        let o = order(3, 2);
        let a = Polynomial::from_terms(&[(1, 0), (2, 1)], o);
        let b = Polynomial::from_terms(&[(2, 1), (0, 0)], o);
        assert_eq!(
            a.add(&b).unwrap(),
            Polynomial::from_terms(&[(1, 0), (0, 0)], o)
        );
        assert!(a.add(&a).unwrap().is_zero());
        assert_eq!(Polynomial::zero(o).add(&b).unwrap(), b);
    }

    #[test]
    fn test_order_mismatch() {
        let a = Polynomial::one(order(3, 2));
        let b = Polynomial::one(order(2, 3));
        assert_eq!(a, a.clone());
        assert_ne!(a, b);
        assert!(matches!(
            a.add(&b),
            Err(PolynomialError::OrderMismatch { .. })
        ));
        assert!(a.multiply(&b).is_err());
        assert!(a.divide(&b).is_err());
        assert_eq!(a.partial_cmp(&b), None);
    }

    #[test]
    fn test_division() {
        let o = order(5, 5);
        let p = Polynomial::from_terms(&[(1, 2), (3, 0)], o);
        let d = Polynomial::from_monomial(1, 1, o);
        let q = p.divide(&d).unwrap();
        assert_eq!(q, Polynomial::from_terms(&[(0, 1), (2, -1)], o));
        assert_eq!(q.multiply(&d).unwrap(), p);
        assert_eq!(d.divide_into(&p).unwrap(), q);

        assert_eq!(
            p.divide(&Polynomial::zero(o)),
            Err(PolynomialError::DivisionByZero)
        );
        assert_eq!(
            d.divide_into(&Polynomial::zero(o)).unwrap(),
            Polynomial::zero(o)
        );
        assert_eq!(d.divide(&p), Err(PolynomialError::NonMonomialDivisor));
        assert_eq!(
            p.divide_into(&d),
            Err(PolynomialError::NonMonomialDivisor)
        );
        assert_eq!(
            Polynomial::zero(o).divide_into(&d),
            Err(PolynomialError::DivisionByZero)
        );
    }

    #[test]
    fn test_power() {
        let o = order(4, 3);
        let x = Polynomial::from_monomial(1, 0, o);
        let zero = Polynomial::zero(o);
        let p = Polynomial::from_terms(&[(0, 0), (1, 1)], o);

        assert_eq!(zero.power(0).unwrap(), Polynomial::one(o));
        assert_eq!(p.power(0).unwrap(), Polynomial::one(o));
        assert_eq!(p.power(1).unwrap(), p);
        assert_eq!(x.power(4).unwrap(), Polynomial::one(o));
        assert_eq!(x.power(-1).unwrap(), Polynomial::from_monomial(3, 0, o));
        assert_eq!(x.power(-6).unwrap(), Polynomial::from_monomial(2, 0, o));
        // (1 + xy)^2 = 1 + x^2 y^2 over GF(2)
        assert_eq!(
            p.power(2).unwrap(),
            Polynomial::from_terms(&[(0, 0), (2, 2)], o)
        );
        assert_eq!(p.power(3).unwrap(), p.multiply(&p).unwrap().multiply(&p).unwrap());

        assert_eq!(zero.power(-1), Err(PolynomialError::DivisionByZero));
        assert_eq!(p.power(-2), Err(PolynomialError::NonMonomialDivisor));
        assert!(zero.power(3).unwrap().is_zero());
    }

    #[test]
    fn test_inverses() {
        let o = order(12, 6);
        let a = Polynomial::from_terms(&[(0, 0), (0, 1), (3, -1)], o);
        assert_eq!(
            a.t(),
            Polynomial::from_terms(&[(0, 0), (0, -1), (-3, 1)], o)
        );
        assert_eq!(a.t().t(), a);
        assert!(matches!(
            a.inverse(),
            Err(PolynomialError::NotAMonomial { .. })
        ));

        let m = Polynomial::from_monomial(5, 2, o);
        assert_eq!(m.multiply(&m.inverse().unwrap()).unwrap(), Polynomial::one(o));
        assert!(Polynomial::zero(o).inverse().is_err());
    }

    #[test]
    fn test_contains() {
        let o = order(3, 2);
        let p = Polynomial::from_terms(&[(1, 0), (2, 1)], o);
        assert!(p.contains((1i64, 0i64)).unwrap());
        assert!(p.contains((4i64, 0i64)).unwrap());
        assert!(!p.contains(1i64).unwrap());
        assert!(p.contains(p.get(1).unwrap()).unwrap());
        assert!(matches!(
            p.contains(p.clone()),
            Err(PolynomialError::NotAMonomial { .. })
        ));
        assert!(p.contains(0i64).is_err());
    }

    #[test]
    fn test_mon_and_ordering() {
        let o = order(3, 2);
        let a = Polynomial::from_monomial(1, 1, o);
        let b = Polynomial::from_monomial(2, 0, o);
        assert_eq!(a.mon().unwrap(), Monomial { x: 1, y: 1 });
        assert_eq!(a.mon_idx().unwrap(), 3);
        assert!(a < b);
        assert!(b > a);
        assert_eq!(a.cmp_monomial(&b).unwrap(), Ordering::Less);

        let p = a.add(&b).unwrap();
        assert!(p.mon().is_err());
        assert!(p.mon_idx().is_err());
        assert_eq!(p.partial_cmp(&a), None);
        assert!(Polynomial::zero(o).mon().is_err());

        // ordering agrees with equality for every polynomial
        let q = Polynomial::from_terms(&[(2, 0), (1, 1)], o);
        assert_eq!(p, q);
        assert_eq!(p.partial_cmp(&q), Some(Ordering::Equal));
        assert!(p <= q && p >= q);
        let zero = Polynomial::zero(o);
        assert_eq!(zero.partial_cmp(&zero), Some(Ordering::Equal));
    }

    #[test]
    fn test_iteration_and_indexing() {
        let o = order(3, 2);
        let p = Polynomial::from_terms(&[(1, 0), (2, 1)], o);
        let items: Vec<Polynomial> = p.iter().collect();
        assert_eq!(items.len(), 2);
        assert_eq!(items[0], Polynomial::from_monomial(1, 0, o));
        assert_eq!(items[1], Polynomial::from_monomial(2, 1, o));
        assert_eq!(p.get(1), Some(items[1].clone()));
        assert_eq!(p.get(2), None);
        assert_eq!(p.abs(), 2);

        let all: Vec<Polynomial> = Polynomial::iter_monomials(o).collect();
        assert_eq!(all.len(), 6);
        for (i, mon) in all.iter().enumerate() {
            assert_eq!(mon.mon_idx().unwrap(), i);
        }
        assert_eq!(p.monomials().count(), 6);
    }

    #[test]
    fn test_vec_representation() {
        let o = order(3, 2);
        let p = Polynomial::from_terms(&[(2, 1), (1, 0)], o);
        assert_eq!(p.vec(), array![0u8, 0, 1, 0, 0, 1]);
        assert_eq!(Polynomial::from_bit_vector(p.vec().view(), o).unwrap(), p);
        assert_eq!(Polynomial::zero(o).vec(), Array1::<u8>::zeros(6));
    }

    #[test]
    fn test_from_bit_shapes() {
        let o = order(3, 2);
        let p = Polynomial::from_terms(&[(2, 1), (1, 0)], o);
        let row = p.vec().insert_axis(ndarray::Axis(0));
        let col = p.vec().insert_axis(ndarray::Axis(1));
        assert_eq!(Polynomial::new(row, o).unwrap(), p);
        assert_eq!(Polynomial::new(col, o).unwrap(), p);
        assert_eq!(Polynomial::new(p.mat(), o).unwrap(), p);

        // entries are read mod 2
        let odd = array![3u8, 0, 2, 0, 0, 1];
        assert_eq!(
            Polynomial::new(odd, o).unwrap(),
            Polynomial::from_terms(&[(0, 0), (2, 1)], o)
        );

        assert!(matches!(
            Polynomial::new(Array1::<u8>::zeros(5), o),
            Err(PolynomialError::ShapeMismatch { expected: 6, .. })
        ));
        assert!(matches!(
            Polynomial::new(Array2::<u8>::zeros((3, 4)), o),
            Err(PolynomialError::ShapeMismatch { .. })
        ));
    }

    #[test]
    fn test_mat_unit_and_shift() {
        let o = order(4, 3);
        assert_eq!(Polynomial::one(o).mat(), Array2::<u8>::eye(12));

        let line = order(5, 1);
        let shift = Polynomial::from_monomial(2, 0, line).mat();
        assert_eq!(shift, cyclic_shift_matrix(5, 2));
        assert!(Polynomial::zero(o).mat().iter().all(|&b| b == 0));
    }

    #[test]
    fn test_mat_is_a_representation() {
        let o = order(3, 4);
        let a = Polynomial::from_terms(&[(0, 0), (1, 2), (2, 3)], o);
        let b = Polynomial::from_terms(&[(1, 1), (0, 3)], o);
        assert_eq!(
            a.multiply(&b).unwrap().mat(),
            matmul_mod2(&a.mat(), &b.mat())
        );
        assert_eq!(a.t().mat(), a.mat().t().to_owned());
        assert_eq!(a.add(&b).unwrap().mat(), (a.mat() + b.mat()).mapv(|v| v % 2));
        assert_eq!(a.mat().row(0).to_owned(), a.vec());
    }

    #[test]
    fn test_string_round_trip() {
        let o = order(12, 6);
        let a = Polynomial::parse("1 + y + x**3*y**(-1)", o).unwrap();
        assert_eq!(a, Polynomial::from_terms(&[(0, 0), (0, 1), (3, 5)], o));
        assert_eq!(a.to_string(), "1 + y + x**3*y**5");
        assert_eq!(Polynomial::parse(&a.to_string(), o).unwrap(), a);

        let zero = Polynomial::zero(o);
        assert_eq!(zero.to_string(), "0");
        assert_eq!(Polynomial::parse(&zero.to_string(), o).unwrap(), zero);

        let caret = Notation::new(['x', 'y'], "^");
        let rendered = a.to_string_with(&caret);
        assert_eq!(rendered, "1 + y + x^3*y^5");
        assert_eq!(Polynomial::parse_with(&rendered, o, &caret).unwrap(), a);

        assert!(matches!(
            Polynomial::parse("x + w", o),
            Err(PolynomialError::Parse { .. })
        ));
    }

    #[test]
    fn test_recanonicalize_other_order() {
        let p = Polynomial::from_terms(&[(1, 0), (3, 0)], order(6, 1));
        let q = Polynomial::new(&p, order(2, 1)).unwrap();
        assert!(q.is_zero());
    }

    #[test]
    fn test_hash_ignores_term_order() {
        use std::collections::hash_map::DefaultHasher;
        let o = order(3, 2);
        let a = Polynomial::from_terms(&[(1, 0), (2, 1)], o);
        let b = Polynomial::from_terms(&[(2, 1), (1, 0)], o);
        let hash = |p: &Polynomial| {
            let mut h = DefaultHasher::new();
            p.hash(&mut h);
            h.finish()
        };
        assert_eq!(a, b);
        assert_eq!(hash(&a), hash(&b));
    }

    mod laws {
        use super::*;
        use proptest::prelude::*;

        fn arb_terms() -> impl Strategy<Value = Vec<(i64, i64)>> {
            prop::collection::vec((-30i64..30, -30i64..30), 0..8)
        }

        fn arb_triple() -> impl Strategy<Value = (Polynomial, Polynomial, Polynomial)> {
            (1usize..6, 1usize..6).prop_flat_map(|(l, m)| {
                let o = Order::new(l, m).unwrap();
                (arb_terms(), arb_terms(), arb_terms()).prop_map(move |(a, b, c)| {
                    (
                        Polynomial::from_terms(&a, o),
                        Polynomial::from_terms(&b, o),
                        Polynomial::from_terms(&c, o),
                    )
                })
            })
        }

        proptest! {
            #[test]
            fn canonicalization_is_idempotent((a, _, _) in arb_triple()) {
                let exps: Vec<(i64, i64)> = a.terms().iter().map(|m| m.exponents()).collect();
                let again = Polynomial::from_terms(&exps, a.order());
                prop_assert_eq!(again.terms(), a.terms());
                prop_assert_eq!(Polynomial::new(&a, a.order()).unwrap(), a);
            }

            #[test]
            fn additive_group((a, b, c) in arb_triple()) {
                prop_assert_eq!(a.add(&b).unwrap(), b.add(&a).unwrap());
                prop_assert_eq!(
                    a.add(&b).unwrap().add(&c).unwrap(),
                    a.add(&b.add(&c).unwrap()).unwrap()
                );
                prop_assert!(a.add(&a).unwrap().is_zero());
            }

            #[test]
            fn ring_laws((a, b, c) in arb_triple()) {
                let o = a.order();
                prop_assert_eq!(
                    a.multiply(&b.add(&c).unwrap()).unwrap(),
                    a.multiply(&b).unwrap().add(&a.multiply(&c).unwrap()).unwrap()
                );
                prop_assert_eq!(a.multiply(&Polynomial::one(o)).unwrap(), a.clone());
                prop_assert!(Polynomial::zero(o).multiply(&a).unwrap().is_zero());
                prop_assert_eq!(a.multiply(&b).unwrap(), b.multiply(&a).unwrap());
            }

            #[test]
            fn bit_vector_round_trip((a, _, _) in arb_triple()) {
                prop_assert_eq!(Polynomial::from_bit_vector(a.vec().view(), a.order()).unwrap(), a);
            }

            #[test]
            fn string_round_trip((a, _, _) in arb_triple()) {
                prop_assert_eq!(Polynomial::parse(&a.to_string(), a.order()).unwrap(), a);
            }
        }
    }

    #[cfg(feature = "serde")]
    mod serialization_tests {
        use super::*;
        use bincode;

        #[test]
        fn test_polynomial_bincode_serialization() {
            let o = order(12, 6);
            let poly = Polynomial::from_terms(&[(0, 0), (0, 1), (3, -1)], o);

            let bytes = bincode::serialize(&poly).expect("Failed to serialize");
            let reconstructed: Polynomial =
                bincode::deserialize(&bytes).expect("Failed to deserialize");

            assert_eq!(poly, reconstructed);
            assert_eq!(poly.terms(), reconstructed.terms());
            assert_eq!(poly.to_string(), reconstructed.to_string());
        }

        #[test]
        fn test_zero_polynomial_bincode_serialization() {
            let zero = Polynomial::zero(order(3, 3));
            let bytes = bincode::serialize(&zero).expect("Failed to serialize");
            let reconstructed: Polynomial =
                bincode::deserialize(&bytes).expect("Failed to deserialize");
            assert!(reconstructed.is_zero());
            assert_eq!(reconstructed.order(), order(3, 3));
        }

        #[test]
        fn test_deserialize_rejects_out_of_range_terms() {
            let bytes = bincode::serialize(&((3usize, 2usize), vec![(5usize, 0usize), (5, 0)]))
                .expect("Failed to serialize");
            assert!(bincode::deserialize::<Polynomial>(&bytes).is_err());
        }

        #[test]
        fn test_deserialize_rejects_zero_order() {
            let bytes = bincode::serialize(&((0usize, 0usize), Vec::<(usize, usize)>::new()))
                .expect("Failed to serialize");
            assert!(bincode::deserialize::<Polynomial>(&bytes).is_err());
        }

        #[test]
        fn test_deserialize_recanonicalizes_duplicates() {
            let bytes = bincode::serialize(&(
                (3usize, 2usize),
                vec![(1usize, 0usize), (2, 1), (1, 0)],
            ))
            .expect("Failed to serialize");
            let poly: Polynomial = bincode::deserialize(&bytes).expect("Failed to deserialize");
            assert_eq!(poly.terms(), &[Monomial { x: 2, y: 1 }]);
            assert_eq!(poly.vec().len(), 6);
        }
    }
}
