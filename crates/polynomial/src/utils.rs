// SPDX-License-Identifier: LGPL-3.0-only
//
// This file is provided WITHOUT ANY WARRANTY;
// without even the implied warranty of MERCHANTABILITY
// or FITNESS FOR A PARTICULAR PURPOSE.

//! Utility functions for polynomial operations.

use ndarray::{Array2, ArrayView2};

/// Reduces an exponent modulo a group order.
///
/// # Arguments
///
/// * `x` - The exponent to reduce, possibly negative
/// * `modulus` - The (positive) order of the cyclic group
///
/// # Returns
///
/// The reduced exponent in the range [0, modulus)
pub fn reduce(x: i64, modulus: usize) -> usize {
    x.rem_euclid(modulus as i64) as usize
}

/// Builds the cyclic shift permutation matrix `S` of size `n` with `S[i, (i + shift) mod n] = 1`.
///
/// # Arguments
///
/// * `n` - Size of the square matrix
/// * `shift` - Amount to shift by, reduced modulo `n`
pub fn cyclic_shift_matrix(n: usize, shift: usize) -> Array2<u8> {
    let mut out = Array2::zeros((n, n));
    for i in 0..n {
        out[[i, (i + shift) % n]] = 1;
    }
    out
}

/// Kronecker product of two bit-matrices, reduced mod 2.
///
/// # Arguments
///
/// * `left` - Outer factor of shape `(p, q)`
/// * `right` - Inner factor of shape `(r, s)`
///
/// # Returns
///
/// A matrix of shape `(p * r, q * s)` whose `(i, j)` block is `left[i, j] * right`.
pub fn kron_bits(left: ArrayView2<u8>, right: ArrayView2<u8>) -> Array2<u8> {
    let (p, q) = left.dim();
    let (r, s) = right.dim();
    let mut out = Array2::zeros((p * r, q * s));
    for ((i, j), &a) in left.indexed_iter() {
        if a & 1 == 0 {
            continue;
        }
        for ((k, l), &b) in right.indexed_iter() {
            out[[i * r + k, j * s + l]] = b & 1;
        }
    }
    out
}

/// Adds (XOR) `term` into `acc` entry by entry.
///
/// # Panics
///
/// Panics if the shapes differ.
pub fn xor_into(acc: &mut Array2<u8>, term: ArrayView2<u8>) {
    acc.zip_mut_with(&term, |a, &b| *a ^= b & 1);
}
