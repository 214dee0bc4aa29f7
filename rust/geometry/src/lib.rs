// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! # RoomSim Geometry
//!
//! Wall geometry for room acoustics simulation, built on
//! [nalgebra](https://docs.rs/nalgebra).
//!
//! ## Overview
//!
//! - **Walls**: [`Wall2D`] (line segment) and [`Wall3D`] (planar polygon,
//!   optionally with holes) sharing one generic [`Wall`] implementation
//! - **Polygons**: [`SimplePolygon`] computes its own plane basis, normal and
//!   flattened corners; [`PolygonWithHole`] cuts openings into it
//! - **Acoustics**: per-band absorption and scattering with the derived
//!   transmission and energy reflection ([`BandCoefficients`])
//! - **Ray queries**: intersection with boundary/endpoint flags, side tests,
//!   mirror images and specular reflection
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use roomsim_geometry::{Point3, Wall3D, Isect};
//!
//! let wall = Wall3D::new(
//!     vec![
//!         Point3::new(0.0, 0.0, 0.0),
//!         Point3::new(4.0, 0.0, 0.0),
//!         Point3::new(4.0, 3.0, 0.0),
//!         Point3::new(0.0, 3.0, 0.0),
//!     ],
//!     vec![0.1, 0.2],
//!     vec![0.0, 0.0],
//! )?;
//!
//! let source = Point3::new(1.0, 1.0, 2.0);
//! let (side, image) = wall.reflect(&source);
//! assert_eq!(side, -1);
//!
//! let status = wall.intersects(&source, &Point3::new(1.0, 1.0, -2.0));
//! assert_eq!(status, Isect::Valid);
//! ```
//!
//! ## Tolerance
//!
//! Every geometric test uses a single tolerance, [`DEFAULT_EPS`] unless a
//! [`GeometryConfig`] is passed to one of the `with_config` constructors.

pub mod bands;
pub mod config;
pub mod error;
pub mod intersection;
pub mod polygon;
pub mod primitives;
pub mod surface;
pub mod wall;

// Re-export nalgebra types for convenience
pub use nalgebra::{Matrix3x2, Point2, Point3, Vector2, Vector3};

pub use bands::BandCoefficients;
pub use config::{GeometryConfig, DEFAULT_EPS};
pub use error::{Error, Result};
pub use intersection::{Intersection, Isect};
pub use polygon::{Polygon, PolygonWithHole, SimplePolygon};
pub use surface::{Segment, Surface};
pub use wall::{Wall, Wall2D, Wall3D};
