// SPDX-License-Identifier: LGPL-3.0-only
//
// This file is provided WITHOUT ANY WARRANTY;
// without even the implied warranty of MERCHANTABILITY
// or FITNESS FOR A PARTICULAR PURPOSE.

use ndarray::ArrayView2;
use std::fmt::Write;

/// Renders a bit-matrix with a `name (rows x cols):` header, one row per line.
pub fn format_matrix(name: &str, matrix: ArrayView2<u8>) -> String {
    let mut out = format!("{} ({}x{}):\n", name, matrix.nrows(), matrix.ncols());
    for row in matrix.rows() {
        let bits: String = row
            .iter()
            .map(|&b| if b & 1 == 1 { '1' } else { '.' })
            .collect();
        // writing to a String cannot fail
        let _ = writeln!(out, "  [{bits}]");
    }
    out
}
