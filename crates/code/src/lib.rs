// SPDX-License-Identifier: LGPL-3.0-only
//
// This file is provided WITHOUT ANY WARRANTY;
// without even the implied warranty of MERCHANTABILITY
// or FITNESS FOR A PARTICULAR PURPOSE.

//! Bivariate bicycle quantum codes.
//!
//! Builds CSS check matrices from two polynomials of
//! [`bicycle_polynomial`] and analyses them with the GF(2) kernel of
//! [`bicycle_parity_matrix`]: ranks, logical operators and stabilizer
//! membership.
//!
//! ```no_run
//! use bicycle_code::BicycleCode;
//!
//! let code = BicycleCode::gross()?;
//! assert_eq!(code.num_qubits(), 144);
//! assert_eq!(code.logical_qubits(), 12);
//! # Ok::<(), bicycle_code::CodeError>(())
//! ```

mod code;
mod config;
mod errors;

pub use code::{syndrome, BicycleCode, GROSS_A_TERMS, GROSS_B_TERMS};
pub use config::{load_config, CodeConfig, ENV_PREFIX};
pub use errors::{CodeError, CodeResult};
