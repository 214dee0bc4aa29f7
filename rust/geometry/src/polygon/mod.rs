// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Planar polygons in 3D
//!
//! [`Polygon`] is the closed set of surfaces a 3D wall can have: a
//! [`SimplePolygon`], or a [`PolygonWithHole`] when openings are cut into it.

mod simple;
mod with_hole;

pub use simple::SimplePolygon;
pub use with_hole::PolygonWithHole;

use nalgebra::{Matrix3x2, Point2, Point3, Vector3};

use crate::config::GeometryConfig;
use crate::error::Result;
use crate::intersection::Intersection;

/// Polygon surface of a 3D wall
#[derive(Debug, Clone, PartialEq)]
pub enum Polygon {
    Simple(SimplePolygon),
    WithHole(PolygonWithHole),
}

impl Polygon {
    /// Build a polygon with holes when any are given, a simple one otherwise
    pub fn new(
        corners: Vec<Point3<f64>>,
        holes: Vec<Vec<Point3<f64>>>,
        config: &GeometryConfig,
    ) -> Result<Self> {
        if holes.is_empty() {
            Ok(Polygon::Simple(SimplePolygon::with_config(corners, config)?))
        } else {
            Ok(Polygon::WithHole(PolygonWithHole::with_config(
                corners, holes, config,
            )?))
        }
    }

    /// The polygon without its holes
    pub fn outer(&self) -> &SimplePolygon {
        match self {
            Polygon::Simple(polygon) => polygon,
            Polygon::WithHole(polygon) => polygon.outer_polygon(),
        }
    }

    /// Holes cut into the polygon, empty for a simple polygon
    pub fn inner(&self) -> &[SimplePolygon] {
        match self {
            Polygon::Simple(_) => &[],
            Polygon::WithHole(polygon) => polygon.inner_polygons(),
        }
    }

    pub fn area(&self) -> f64 {
        match self {
            Polygon::Simple(polygon) => polygon.area(),
            Polygon::WithHole(polygon) => polygon.area(),
        }
    }

    pub fn intersection(&self, p1: &Point3<f64>, p2: &Point3<f64>) -> Option<Intersection<3>> {
        match self {
            Polygon::Simple(polygon) => polygon.intersection(p1, p2),
            Polygon::WithHole(polygon) => polygon.intersection(p1, p2),
        }
    }

    /// Geometric equality. A simple polygon never equals a polygon with holes,
    /// even one with an empty hole list.
    pub fn same_as(&self, other: &Polygon) -> bool {
        match (self, other) {
            (Polygon::Simple(a), Polygon::Simple(b)) => a.same_as(b),
            (Polygon::WithHole(a), Polygon::WithHole(b)) => a.same_as(b),
            _ => false,
        }
    }

    pub fn corners(&self) -> &[Point3<f64>] {
        self.outer().corners()
    }

    pub fn holes(&self) -> Vec<&[Point3<f64>]> {
        self.inner().iter().map(SimplePolygon::corners).collect()
    }

    pub fn origin(&self) -> Point3<f64> {
        self.outer().origin()
    }

    pub fn normal(&self) -> Vector3<f64> {
        self.outer().normal()
    }

    pub fn basis(&self) -> &Matrix3x2<f64> {
        self.outer().basis()
    }

    pub fn flat_corners(&self) -> &[Point2<f64>] {
        self.outer().flat_corners()
    }
}

impl From<SimplePolygon> for Polygon {
    fn from(polygon: SimplePolygon) -> Self {
        Polygon::Simple(polygon)
    }
}

impl From<PolygonWithHole> for Polygon {
    fn from(polygon: PolygonWithHole) -> Self {
        Polygon::WithHole(polygon)
    }
}
