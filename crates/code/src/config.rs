// SPDX-License-Identifier: LGPL-3.0-only
//
// This file is provided WITHOUT ANY WARRANTY;
// without even the implied warranty of MERCHANTABILITY
// or FITNESS FOR A PARTICULAR PURPOSE.

//! Code definitions loaded from YAML and the environment.
//!
//! Values are layered with `figment`: the gross code defaults, then an
//! optional YAML document, then `BICYCLE_`-prefixed environment variables.
//!
//! ```yaml
//! name: gross
//! order: [12, 6]
//! a: "1 + y + x**3*y**5"
//! b: "1 + x + x**11*y**3"
//! notation:
//!   labels: [x, y]
//!   power: "**"
//! ```

use anyhow::{Context, Result};
use bicycle_polynomial::{Notation, Order, Polynomial};
use figment::{
    providers::{Env, Format, Serialized, Yaml},
    Figment,
};
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::info;

/// Environment prefix for overrides, e.g. `BICYCLE_NAME=custom`
pub const ENV_PREFIX: &str = "BICYCLE_";

/// A bicycle code given by two polynomials over Z_l × Z_m
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq, Eq)]
#[serde(default)]
#[serde(deny_unknown_fields)]
pub struct CodeConfig {
    /// Human readable name used in logs
    pub name: String,
    /// Group order `[l, m]`
    pub order: [usize; 2],
    /// Polynomial `A`
    pub a: String,
    /// Polynomial `B`
    pub b: String,
    /// Notation the polynomial strings are written in
    pub notation: Notation,
}

impl Default for CodeConfig {
    fn default() -> Self {
        Self {
            name: "gross".to_string(),
            order: [12, 6],
            a: "1 + y + x**3*y**5".to_string(),
            b: "1 + x + x**11*y**3".to_string(),
            notation: Notation::default(),
        }
    }
}

impl CodeConfig {
    /// Parse a YAML document on top of the defaults. The environment is not consulted.
    pub fn from_yaml_str(yaml: &str) -> Result<Self> {
        Figment::from(Serialized::defaults(CodeConfig::default()))
            .merge(Yaml::string(yaml))
            .extract()
            .context("Could not parse code configuration")
    }

    pub fn order(&self) -> Result<Order> {
        Order::new(self.order[0], self.order[1]).context("Invalid group order in configuration")
    }

    /// Parse `a` and `b` with the configured notation.
    pub fn polynomials(&self) -> Result<(Polynomial, Polynomial)> {
        let order = self.order()?;
        let a = Polynomial::parse_with(&self.a, order, &self.notation)
            .with_context(|| format!("Could not parse polynomial A = {:?}", self.a))?;
        let b = Polynomial::parse_with(&self.b, order, &self.notation)
            .with_context(|| format!("Could not parse polynomial B = {:?}", self.b))?;
        Ok((a, b))
    }
}

/// Load a code configuration.
///
/// Layers the defaults, the YAML file at `path` (when given) and `BICYCLE_*`
/// environment variables, later layers winning.
pub fn load_config(path: Option<&Path>) -> Result<CodeConfig> {
    let mut figment = Figment::from(Serialized::defaults(CodeConfig::default()));

    if let Some(path) = path {
        let yaml = std::fs::read_to_string(path)
            .with_context(|| format!("Could not read config file {}", path.display()))?;
        figment = figment.merge(Yaml::string(&yaml));
    }

    let config: CodeConfig = figment
        .merge(Env::prefixed(ENV_PREFIX))
        .extract()
        .context("Could not extract code configuration")?;

    info!(name = %config.name, order = ?config.order, "loaded code configuration");
    Ok(config)
}
