// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Planar polygon with a fitted 2D frame

use nalgebra::{Matrix3x2, Matrix3xX, Point2, Point3, Vector3};

use crate::config::GeometryConfig;
use crate::error::{Error, Result};
use crate::intersection::{Intersection, Isect};
use crate::primitives::{
    intersect_segment_plane, point_in_polygon_2d, polygon_area_2d, project_all_to_basis,
    project_to_basis, Containment, PlaneHit,
};

/// A single planar polygon in 3D.
///
/// The plane is fitted to the corners by SVD. Its two dominant singular
/// directions form `basis`, and the corners expressed in that basis are kept
/// as `flat_corners`. The basis is oriented so that the flat polygon winds
/// counter-clockwise, and `normal = basis[0] x basis[1]`.
#[derive(Debug, Clone, PartialEq)]
pub struct SimplePolygon {
    corners: Vec<Point3<f64>>,
    origin: Point3<f64>,
    basis: Matrix3x2<f64>,
    normal: Vector3<f64>,
    flat_corners: Vec<Point2<f64>>,
    eps: f64,
}

impl SimplePolygon {
    /// Build a polygon with the default tolerance, using the first corner as origin
    pub fn new(corners: Vec<Point3<f64>>) -> Result<Self> {
        Self::with_config(corners, &GeometryConfig::default())
    }

    /// Build a polygon using the first corner as origin
    pub fn with_config(corners: Vec<Point3<f64>>, config: &GeometryConfig) -> Result<Self> {
        let origin = corners.first().copied().ok_or(Error::InvalidCornerCount {
            expected: "at least 3",
            found: 0,
        })?;
        Self::with_origin(corners, origin, config)
    }

    /// Build a polygon around an explicit reference point.
    ///
    /// Fails when fewer than 3 corners are given or when the corners do not
    /// lie in a plane within `config.eps`.
    pub fn with_origin(
        corners: Vec<Point3<f64>>,
        origin: Point3<f64>,
        config: &GeometryConfig,
    ) -> Result<Self> {
        config.validate()?;
        let eps = config.eps;

        if corners.len() < 3 {
            return Err(Error::InvalidCornerCount {
                expected: "at least 3",
                found: corners.len(),
            });
        }

        let mut centered = Matrix3xX::<f64>::zeros(corners.len());
        for (mut column, corner) in centered.column_iter_mut().zip(&corners) {
            column.copy_from(&(corner - origin));
        }

        let svd = centered.svd(true, false);
        let u = svd
            .u
            .ok_or_else(|| Error::Decomposition("left singular vectors missing".to_string()))?;
        let singular_values = &svd.singular_values;

        // Descending order of singular values
        let mut order = [0usize, 1, 2];
        order.sort_by(|&a, &b| singular_values[b].total_cmp(&singular_values[a]));

        // Coplanar corners make the centered matrix rank deficient
        let smallest = singular_values[order[2]];
        if smallest > eps {
            return Err(Error::NonPlanar {
                smallest_singular_value: smallest,
                eps,
            });
        }

        let b0: Vector3<f64> = u.column(order[0]).into_owned();
        let b1: Vector3<f64> = u.column(order[1]).into_owned();
        let mut basis = Matrix3x2::from_columns(&[b0, b1]);
        let mut flat_corners = project_all_to_basis(&corners, &origin, &basis);

        // Corners must wind counter-clockwise around the normal
        if polygon_area_2d(&flat_corners) < 0.0 {
            tracing::debug!(
                corners = corners.len(),
                "flipping polygon basis to restore counter-clockwise orientation"
            );
            basis.swap_columns(0, 1);
            for p in flat_corners.iter_mut() {
                *p = Point2::new(p.y, p.x);
            }
        }

        let u_axis: Vector3<f64> = basis.column(0).into_owned();
        let v_axis: Vector3<f64> = basis.column(1).into_owned();
        let normal = u_axis.cross(&v_axis);

        Ok(Self {
            corners,
            origin,
            basis,
            normal,
            flat_corners,
            eps,
        })
    }

    /// Area of the polygon, positive by construction
    pub fn area(&self) -> f64 {
        polygon_area_2d(&self.flat_corners)
    }

    /// Intersect the segment `p1 -> p2` with the polygon.
    ///
    /// The segment is first intersected with the supporting plane, then the
    /// hit is classified against the flattened corners.
    pub fn intersection(&self, p1: &Point3<f64>, p2: &Point3<f64>) -> Option<Intersection<3>> {
        let (plane_hit, point) =
            intersect_segment_plane(p1, p2, &self.origin, &self.normal, self.eps)?;

        let flat = project_to_basis(&point, &self.origin, &self.basis);
        match point_in_polygon_2d(&flat, &self.flat_corners, self.eps) {
            Containment::Outside => None,
            containment => Some(Intersection::new(
                Isect::hit(
                    plane_hit == PlaneHit::Endpoint,
                    containment == Containment::Boundary,
                ),
                point,
            )),
        }
    }

    /// Structural equality on the corners, without tolerance.
    ///
    /// Two identical polygons that belong to different rooms compare equal.
    pub fn same_as(&self, other: &SimplePolygon) -> bool {
        self.corners.len() == other.corners.len()
            && self.corners.iter().zip(&other.corners).all(|(a, b)| a == b)
    }

    /// Map a point of the flat frame back to 3D
    pub fn unflatten(&self, flat: &Point2<f64>) -> Point3<f64> {
        self.origin + self.basis * flat.coords
    }

    pub fn corners(&self) -> &[Point3<f64>] {
        &self.corners
    }

    pub fn origin(&self) -> Point3<f64> {
        self.origin
    }

    pub fn normal(&self) -> Vector3<f64> {
        self.normal
    }

    /// Plane basis, one unit vector per column
    pub fn basis(&self) -> &Matrix3x2<f64> {
        &self.basis
    }

    pub fn flat_corners(&self) -> &[Point2<f64>] {
        &self.flat_corners
    }

    pub fn eps(&self) -> f64 {
        self.eps
    }
}
