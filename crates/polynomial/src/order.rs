// SPDX-License-Identifier: LGPL-3.0-only
//
// This file is provided WITHOUT ANY WARRANTY;
// without even the implied warranty of MERCHANTABILITY
// or FITNESS FOR A PARTICULAR PURPOSE.

//! Group orders and monomials of Z_l × Z_m.
//!
//! A monomial `x^a y^b` is stored as the exponent pair `(a, b)` reduced so that
//! `0 <= a < l` and `0 <= b < m`. Monomials are enumerated row-major: the index of
//! `(a, b)` is `a * m + b`, which is the bit position used by every vector and
//! matrix encoding in this crate.

use crate::errors::{PolynomialError, PolynomialResult};
use crate::utils::reduce;
use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// The order `(l, m)` of the cyclic group Z_l × Z_m.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "RawOrder"))]
pub struct Order {
    l: usize,
    m: usize,
}

impl Order {
    /// Creates an order, rejecting zero components.
    pub fn new(l: usize, m: usize) -> PolynomialResult<Self> {
        if l == 0 || m == 0 {
            return Err(PolynomialError::InvalidOrder { l, m });
        }
        Ok(Self { l, m })
    }

    /// Order of the first cyclic factor.
    pub fn l(&self) -> usize {
        self.l
    }

    /// Order of the second cyclic factor.
    pub fn m(&self) -> usize {
        self.m
    }

    /// Number of group elements, `l * m`.
    pub fn dim(&self) -> usize {
        self.l * self.m
    }

    /// Reduces an exponent pair to its canonical monomial.
    pub fn reduce(&self, a: i64, b: i64) -> Monomial {
        Monomial {
            x: reduce(a, self.l),
            y: reduce(b, self.m),
        }
    }

    /// Index of a canonical monomial in the row-major enumeration.
    pub fn index(&self, monomial: Monomial) -> usize {
        monomial_index(monomial, *self)
    }

    /// Monomial sitting at `index` in the row-major enumeration.
    pub fn monomial_at(&self, index: usize) -> Monomial {
        Monomial {
            x: index / self.m,
            y: index % self.m,
        }
    }

    /// Iterates over all `l * m` monomials, outer loop over `x`, inner over `y`.
    pub fn monomials(&self) -> impl Iterator<Item = Monomial> {
        let m = self.m;
        (0..self.l).flat_map(move |x| (0..m).map(move |y| Monomial { x, y }))
    }
}

/// Unvalidated wire form of [`Order`].
#[cfg(feature = "serde")]
#[derive(Deserialize)]
struct RawOrder {
    l: usize,
    m: usize,
}

#[cfg(feature = "serde")]
impl TryFrom<RawOrder> for Order {
    type Error = PolynomialError;

    fn try_from(raw: RawOrder) -> PolynomialResult<Self> {
        Order::new(raw.l, raw.m)
    }
}

impl fmt::Display for Order {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.l, self.m)
    }
}

/// A canonical monomial `x^x y^y` of some [`Order`].
///
/// Obtained from [`Order::reduce`], [`Order::monomial_at`] or
/// [`Order::monomials`], so both exponents are always in range.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Monomial {
    pub(crate) x: usize,
    pub(crate) y: usize,
}

impl Monomial {
    /// The identity element `1 = x^0 y^0`.
    pub const ONE: Monomial = Monomial { x: 0, y: 0 };

    /// Exponent of the first variable.
    pub fn x(self) -> usize {
        self.x
    }

    /// Exponent of the second variable.
    pub fn y(self) -> usize {
        self.y
    }

    /// Group law: `x^a y^b * x^c y^d = x^(a+c) y^(b+d)`.
    pub fn mul(self, other: Monomial, order: Order) -> Monomial {
        Monomial {
            x: (self.x % order.l + other.x % order.l) % order.l,
            y: (self.y % order.m + other.y % order.m) % order.m,
        }
    }

    /// `self / other` in the group.
    pub fn div(self, other: Monomial, order: Order) -> Monomial {
        self.mul(other.inverse(order), order)
    }

    /// Group inverse `x^-a y^-b`.
    pub fn inverse(self, order: Order) -> Monomial {
        Monomial {
            x: (order.l - self.x % order.l) % order.l,
            y: (order.m - self.y % order.m) % order.m,
        }
    }

    /// Exponents as signed integers.
    pub fn exponents(self) -> (i64, i64) {
        (self.x as i64, self.y as i64)
    }
}

/// Converts a monomial into its bit position: `(a, b) -> a * m + b`.
pub fn monomial_index(monomial: Monomial, order: Order) -> usize {
    monomial.x * order.m + monomial.y
}
