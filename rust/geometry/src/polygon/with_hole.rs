// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Planar polygon punctured by polygonal holes (e.g. a wall with a window)

use nalgebra::Point3;

use super::simple::SimplePolygon;
use crate::config::GeometryConfig;
use crate::error::Result;
use crate::intersection::Intersection;

/// An outer polygon with zero or more holes.
///
/// Preconditions, not checked at construction:
/// - every hole lies strictly inside the outer polygon and does not touch
///   its boundary,
/// - holes do not overlap each other,
/// - when two instances are compared, their holes are listed in the same
///   order.
///
/// Violations give silently wrong areas, intersections or comparisons.
#[derive(Debug, Clone, PartialEq)]
pub struct PolygonWithHole {
    outer_polygon: SimplePolygon,
    inner_polygons: Vec<SimplePolygon>,
}

impl PolygonWithHole {
    pub fn new(corners: Vec<Point3<f64>>, holes: Vec<Vec<Point3<f64>>>) -> Result<Self> {
        Self::with_config(corners, holes, &GeometryConfig::default())
    }

    /// Build the outer polygon and every hole; each hole uses its own first
    /// corner as origin.
    pub fn with_config(
        corners: Vec<Point3<f64>>,
        holes: Vec<Vec<Point3<f64>>>,
        config: &GeometryConfig,
    ) -> Result<Self> {
        let outer_polygon = SimplePolygon::with_config(corners, config)?;
        let inner_polygons = holes
            .into_iter()
            .map(|hole| SimplePolygon::with_config(hole, config))
            .collect::<Result<Vec<_>>>()?;

        Ok(Self::from_parts(outer_polygon, inner_polygons))
    }

    pub fn from_parts(outer_polygon: SimplePolygon, inner_polygons: Vec<SimplePolygon>) -> Self {
        Self {
            outer_polygon,
            inner_polygons,
        }
    }

    /// Outer area minus the area of every hole
    pub fn area(&self) -> f64 {
        let inner_area: f64 = self.inner_polygons.iter().map(SimplePolygon::area).sum();
        self.outer_polygon.area() - inner_area
    }

    /// Intersect the segment `p1 -> p2` with the punctured surface.
    ///
    /// A hit on the outer boundary is final. Otherwise, a segment that goes
    /// through the inside of a hole misses the surface, while a hit on the
    /// edge of a hole counts as a boundary hit.
    pub fn intersection(&self, p1: &Point3<f64>, p2: &Point3<f64>) -> Option<Intersection<3>> {
        let outer = self.outer_polygon.intersection(p1, p2)?;

        // holes never touch the outer boundary
        if outer.status.on_boundary() {
            return Some(outer);
        }

        for hole in &self.inner_polygons {
            if let Some(hit) = hole.intersection(p1, p2) {
                if hit.status.on_boundary() {
                    return Some(hit);
                }
                return None;
            }
        }

        Some(outer)
    }

    /// Outer polygons equal and holes equal index by index
    pub fn same_as(&self, other: &PolygonWithHole) -> bool {
        self.outer_polygon.same_as(&other.outer_polygon)
            && self.inner_polygons.len() == other.inner_polygons.len()
            && self
                .inner_polygons
                .iter()
                .zip(&other.inner_polygons)
                .all(|(a, b)| a.same_as(b))
    }

    pub fn outer_polygon(&self) -> &SimplePolygon {
        &self.outer_polygon
    }

    pub fn inner_polygons(&self) -> &[SimplePolygon] {
        &self.inner_polygons
    }
}
