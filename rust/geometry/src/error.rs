// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use thiserror::Error;

/// Result type for geometry operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while building polygons and walls
#[derive(Error, Debug, Clone, PartialEq)]
pub enum Error {
    #[error("The corners of the polygon do not lie in a plane (smallest singular value {smallest_singular_value:e} > tolerance {eps:e})")]
    NonPlanar {
        smallest_singular_value: f64,
        eps: f64,
    },

    #[error("Expected {expected} corners, found {found}")]
    InvalidCornerCount { expected: &'static str, found: usize },

    #[error("Degenerate wall: {0}")]
    DegenerateWall(String),

    #[error("The number of absorption ({absorption}) and scattering ({scatter}) coefficients is different")]
    BandCountMismatch { absorption: usize, scatter: usize },

    #[error("Invalid {kind} coefficient {value} in band {band}, expected a value in [0, 1]")]
    InvalidCoefficient {
        kind: &'static str,
        band: usize,
        value: f64,
    },

    #[error("Singular value decomposition failed: {0}")]
    Decomposition(String),

    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),
}
