// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Geometry configuration.

use crate::error::{Error, Result};

/// Default tolerance for every epsilon-gated comparison.
pub const DEFAULT_EPS: f64 = 1e-5;

/// Configuration shared by polygon and wall construction.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GeometryConfig {
    /// Tolerance used for coplanarity checks, boundary/endpoint classification
    /// and side tests.
    /// Default: 1e-5
    pub eps: f64,
}

impl GeometryConfig {
    /// Create a configuration with a custom tolerance.
    ///
    /// The tolerance must be finite and strictly positive.
    pub fn new(eps: f64) -> Result<Self> {
        let config = Self { eps };
        config.validate()?;
        Ok(config)
    }

    /// Check that the configuration is usable.
    pub fn validate(&self) -> Result<()> {
        if !self.eps.is_finite() || self.eps <= 0.0 {
            return Err(Error::InvalidConfig(format!(
                "tolerance must be finite and positive, got {}",
                self.eps
            )));
        }
        Ok(())
    }
}

impl Default for GeometryConfig {
    fn default() -> Self {
        Self { eps: DEFAULT_EPS }
    }
}
