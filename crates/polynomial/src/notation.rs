// SPDX-License-Identifier: LGPL-3.0-only
//
// This file is provided WITHOUT ANY WARRANTY;
// without even the implied warranty of MERCHANTABILITY
// or FITNESS FOR A PARTICULAR PURPOSE.

//! Textual notation for monomials and polynomials.
//!
//! A polynomial is written as a sum of monomials, each monomial being `1` or a
//! product of at most two variable factors with an optional integer exponent:
//!
//! ```text
//! 1 + x + x**2*y + y**(-1)
//! ```
//!
//! The two variable labels and the power operator are configurable through
//! [`Notation`]. Whitespace is ignored when parsing.

use crate::errors::{PolynomialError, PolynomialResult};
use crate::order::Monomial;
use regex::Regex;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Variable labels and power operator used to render and parse polynomials.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct Notation {
    /// Labels of the first and second variable
    pub labels: [char; 2],
    /// Power operator, e.g. `**` or `^`
    pub power: String,
}

impl Default for Notation {
    fn default() -> Self {
        Self {
            labels: ['x', 'y'],
            power: "**".to_string(),
        }
    }
}

impl Notation {
    /// Creates a notation from two labels and a power operator.
    pub fn new(labels: [char; 2], power: impl Into<String>) -> Self {
        Self {
            labels,
            power: power.into(),
        }
    }

    /// Renders a canonical monomial: `1` for the unit, otherwise the `*`-joined
    /// variable factors with exponent 1 omitted.
    pub fn render_monomial(&self, monomial: Monomial) -> String {
        if monomial == Monomial::ONE {
            return "1".to_string();
        }

        [monomial.x, monomial.y]
            .iter()
            .zip(self.labels)
            .filter(|(exp, _)| **exp != 0)
            .map(|(exp, label)| {
                if *exp > 1 {
                    format!("{label}{}{exp}", self.power)
                } else {
                    label.to_string()
                }
            })
            .collect::<Vec<_>>()
            .join("*")
    }

    /// Compiles the monomial grammar for this notation.
    pub fn parser(&self) -> PolynomialResult<MonomialParser> {
        let power = regex::escape(&self.power);
        let factor = |label: char| {
            format!(
                r"({}(?:{}(?:\((-?\d+)\)|(-?\d+)))?)",
                regex::escape(&label.to_string()),
                power
            )
        };
        let pattern = format!(
            r"^(?:{})?(?:\*?{})?$",
            factor(self.labels[0]),
            factor(self.labels[1])
        );
        let regex = Regex::new(&pattern)
            .map_err(|e| PolynomialError::invalid_input(format!("bad notation: {e}")))?;
        Ok(MonomialParser { regex })
    }

    /// Extracts the exponents of a single monomial string, e.g. `x**3*y**9 -> (3, 9)`.
    pub fn parse_monomial(&self, expr: &str) -> PolynomialResult<(i64, i64)> {
        self.parser()?.parse(expr)
    }

    /// Splits a sum of monomials into exponent pairs. The string `0` is the empty sum.
    pub fn parse_terms(&self, expr: &str) -> PolynomialResult<Vec<(i64, i64)>> {
        let compact = strip_whitespace(expr);
        if compact == "0" {
            return Ok(Vec::new());
        }
        let parser = self.parser()?;
        compact.split('+').map(|mon| parser.parse(mon)).collect()
    }
}

/// A compiled monomial grammar.
#[derive(Clone, Debug)]
pub struct MonomialParser {
    regex: Regex,
}

impl MonomialParser {
    /// Parses one monomial. Missing exponents default to 1, missing variables to 0.
    pub fn parse(&self, expr: &str) -> PolynomialResult<(i64, i64)> {
        let compact = strip_whitespace(expr);
        if compact == "1" {
            return Ok((0, 0));
        }

        let caps = self
            .regex
            .captures(&compact)
            .ok_or_else(|| PolynomialError::parse(expr))?;

        // groups per factor: whole factor, parenthesised exponent, bare exponent
        let exponent = |factor: usize| -> PolynomialResult<Option<i64>> {
            let value = caps.get(factor + 1).or_else(|| caps.get(factor + 2));
            match (caps.get(factor), value) {
                (None, _) => Ok(None),
                (Some(_), None) => Ok(Some(1)),
                (Some(_), Some(v)) => v
                    .as_str()
                    .parse::<i64>()
                    .map(Some)
                    .map_err(|_| PolynomialError::parse(expr)),
            }
        };

        match (exponent(1)?, exponent(4)?) {
            (None, None) => Err(PolynomialError::parse(expr)),
            (x, y) => Ok((x.unwrap_or(0), y.unwrap_or(0))),
        }
    }
}

fn strip_whitespace(expr: &str) -> String {
    expr.chars().filter(|c| !c.is_whitespace()).collect()
}
