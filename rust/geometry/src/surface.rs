// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Surface geometry of a wall
//!
//! A wall in `D` dimensions is backed by a [`Surface<D>`]: a [`Segment`] in 2D
//! and a [`Polygon`] in 3D. The dimension is a compile-time parameter, so all
//! dispatch is static.

use std::fmt;

use nalgebra::{Point, Point2, Point3, SVector, Vector2, Vector3};

use crate::config::GeometryConfig;
use crate::error::{Error, Result};
use crate::intersection::{Intersection, Isect};
use crate::polygon::Polygon;
use crate::primitives::intersect_segments_2d;

/// Geometric capabilities a wall needs from its surface
pub trait Surface<const D: usize>: Clone + fmt::Debug + Send + Sync + 'static {
    /// Reference point on the surface
    fn origin(&self) -> Point<f64, D>;

    /// Unit normal of the surface
    fn normal(&self) -> SVector<f64, D>;

    /// Corners in winding order (outer boundary only)
    fn corners(&self) -> &[Point<f64, D>];

    /// Corners of each hole, empty when the surface has none
    fn holes(&self) -> Vec<&[Point<f64, D>]>;

    /// Length in 2D, area in 3D
    fn area(&self) -> f64;

    /// Intersect the segment `p1 -> p2` with the surface
    fn intersection(&self, p1: &Point<f64, D>, p2: &Point<f64, D>) -> Option<Intersection<D>>;

    /// Geometric equality, without tolerance
    fn same_as(&self, other: &Self) -> bool;
}

/// Line segment surface of a 2D wall
#[derive(Debug, Clone, PartialEq)]
pub struct Segment {
    corners: [Point2<f64>; 2],
    normal: Vector2<f64>,
    eps: f64,
}

impl Segment {
    /// Build a segment from exactly two distinct corners.
    ///
    /// The normal is the edge vector rotated by -90 degrees, so it points to
    /// the right of `corners[0] -> corners[1]`.
    pub fn new(corners: &[Point2<f64>], config: &GeometryConfig) -> Result<Self> {
        config.validate()?;

        let [start, end] = corners else {
            return Err(Error::InvalidCornerCount {
                expected: "exactly 2",
                found: corners.len(),
            });
        };

        let edge = end - start;
        if edge.norm() <= config.eps {
            return Err(Error::DegenerateWall(format!(
                "segment corners {} and {} coincide",
                start, end
            )));
        }

        let normal = Vector2::new(edge.y, -edge.x).normalize();

        Ok(Self {
            corners: [*start, *end],
            normal,
            eps: config.eps,
        })
    }

    pub fn start(&self) -> Point2<f64> {
        self.corners[0]
    }

    pub fn end(&self) -> Point2<f64> {
        self.corners[1]
    }
}

impl Surface<2> for Segment {
    fn origin(&self) -> Point2<f64> {
        self.corners[0]
    }

    fn normal(&self) -> Vector2<f64> {
        self.normal
    }

    fn corners(&self) -> &[Point2<f64>] {
        &self.corners
    }

    fn holes(&self) -> Vec<&[Point2<f64>]> {
        Vec::new()
    }

    fn area(&self) -> f64 {
        (self.corners[1] - self.corners[0]).norm()
    }

    /// The endpoint flag refers to the ray segment `p1 -> p2`, the boundary
    /// flag to the ends of the wall.
    fn intersection(&self, p1: &Point2<f64>, p2: &Point2<f64>) -> Option<Intersection<2>> {
        intersect_segments_2d(p1, p2, &self.corners[0], &self.corners[1], self.eps).map(
            |(hit, point)| {
                Intersection::new(Isect::hit(hit.on_a_endpoint, hit.on_b_endpoint), point)
            },
        )
    }

    fn same_as(&self, other: &Self) -> bool {
        self.corners == other.corners
    }
}

impl Surface<3> for Polygon {
    fn origin(&self) -> Point3<f64> {
        Polygon::origin(self)
    }

    fn normal(&self) -> Vector3<f64> {
        Polygon::normal(self)
    }

    fn corners(&self) -> &[Point3<f64>] {
        Polygon::corners(self)
    }

    fn holes(&self) -> Vec<&[Point3<f64>]> {
        Polygon::holes(self)
    }

    fn area(&self) -> f64 {
        Polygon::area(self)
    }

    fn intersection(&self, p1: &Point3<f64>, p2: &Point3<f64>) -> Option<Intersection<3>> {
        Polygon::intersection(self, p1, p2)
    }

    fn same_as(&self, other: &Self) -> bool {
        Polygon::same_as(self, other)
    }
}
