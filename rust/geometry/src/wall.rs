// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Acoustic walls
//!
//! A [`Wall`] couples a surface with per-band acoustic coefficients and
//! answers the queries a ray tracer needs at every bounce: intersection,
//! side of a point, mirror image and specular continuation of a ray.
//!
//! Walls are immutable once built and hold no interior mutability, so a
//! scene can share them read-only across worker threads.

use std::any::Any;

use nalgebra::{Matrix3x2, Point, Point2, Point3, SVector};

use crate::bands::BandCoefficients;
use crate::config::GeometryConfig;
use crate::error::Result;
use crate::intersection::{status_of, Intersection, Isect};
use crate::polygon::Polygon;
use crate::surface::{Segment, Surface};

/// Wall in `D` dimensions backed by the surface `S`
#[derive(Debug, Clone, PartialEq)]
pub struct Wall<const D: usize, S: Surface<D>> {
    surface: S,
    bands: BandCoefficients,
    name: String,
    eps: f64,
}

/// 2D wall: a line segment
pub type Wall2D = Wall<2, Segment>;

/// 3D wall: a planar polygon, possibly with holes
pub type Wall3D = Wall<3, Polygon>;

impl<const D: usize, S: Surface<D>> Wall<D, S> {
    /// Dimension of the space the wall lives in
    pub const DIM: usize = D;

    /// Attach acoustic coefficients to an already built surface.
    ///
    /// Fails when `absorption` and `scatter` have different lengths or hold
    /// values outside `[0, 1]`.
    pub fn from_surface(
        surface: S,
        absorption: Vec<f64>,
        scatter: Vec<f64>,
        config: &GeometryConfig,
    ) -> Result<Self> {
        config.validate()?;
        let bands = BandCoefficients::new(absorption, scatter)?;

        tracing::debug!(
            dim = D,
            corners = surface.corners().len(),
            holes = surface.holes().len(),
            bands = bands.n_bands(),
            "built wall"
        );

        Ok(Self {
            surface,
            bands,
            name: String::new(),
            eps: config.eps,
        })
    }

    /// Set the label of the wall
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn surface(&self) -> &S {
        &self.surface
    }

    pub fn bands(&self) -> &BandCoefficients {
        &self.bands
    }

    pub fn absorption(&self) -> &[f64] {
        self.bands.absorption()
    }

    pub fn scatter(&self) -> &[f64] {
        self.bands.scatter()
    }

    pub fn transmission(&self) -> &[f64] {
        self.bands.transmission()
    }

    pub fn energy_reflection(&self) -> &[f64] {
        self.bands.energy_reflection()
    }

    pub fn n_bands(&self) -> usize {
        self.bands.n_bands()
    }

    pub fn eps(&self) -> f64 {
        self.eps
    }

    pub fn origin(&self) -> Point<f64, D> {
        self.surface.origin()
    }

    pub fn normal(&self) -> SVector<f64, D> {
        self.surface.normal()
    }

    pub fn corners(&self) -> &[Point<f64, D>] {
        self.surface.corners()
    }

    pub fn holes(&self) -> Vec<&[Point<f64, D>]> {
        self.surface.holes()
    }

    /// Length of a 2D wall, area of a 3D wall
    pub fn area(&self) -> f64 {
        self.surface.area()
    }

    /// Intersect the segment `p1 -> p2` with the wall
    pub fn intersection(
        &self,
        p1: &Point<f64, D>,
        p2: &Point<f64, D>,
    ) -> Option<Intersection<D>> {
        self.surface.intersection(p1, p2)
    }

    /// Intersection status only
    pub fn intersects(&self, p1: &Point<f64, D>, p2: &Point<f64, D>) -> Isect {
        status_of(&self.intersection(p1, p2))
    }

    /// Mirror `p` across the plane of the wall.
    ///
    /// Returns the mirror image together with the side of the reflection:
    /// 1 when the image lies in the direction of the normal (`p` is behind
    /// the wall), -1 in the opposite case and 0 when `p` is on the wall
    /// within tolerance.
    pub fn reflect(&self, p: &Point<f64, D>) -> (i32, Point<f64, D>) {
        let normal = self.normal();
        let distance = normal.dot(&(self.origin() - p));
        let reflected = p + normal * (2.0 * distance);
        (self.sign(distance), reflected)
    }

    /// Side of the wall `p` lies on: 1 in the direction of the normal,
    /// -1 opposite to it, 0 on the wall within tolerance.
    pub fn side(&self, p: &Point<f64, D>) -> i32 {
        self.sign((p - self.origin()).dot(&self.normal()))
    }

    /// Continue a ray specularly after it hits the wall.
    ///
    /// The direction `start -> hit_point` is mirrored about the wall normal
    /// and the returned point lies `length` away from `hit_point` along it.
    pub fn normal_reflect_from(
        &self,
        start: &Point<f64, D>,
        hit_point: &Point<f64, D>,
        length: f64,
    ) -> Point<f64, D> {
        let incident = (hit_point - start).normalize();
        hit_point + self.normal_reflect(&incident) * length
    }

    /// Mirror a direction vector about the wall normal
    pub fn normal_reflect(&self, incident: &SVector<f64, D>) -> SVector<f64, D> {
        let normal = self.normal();
        incident - normal * (2.0 * incident.dot(&normal))
    }

    /// Cosine of the angle between `p` and the wall normal.
    ///
    /// `p` must not be the zero vector; the result is NaN in that case.
    pub fn cosine_angle(&self, p: &SVector<f64, D>) -> f64 {
        p.dot(&self.normal()) / p.norm()
    }

    /// Geometric equality with another wall, ignoring acoustic properties
    /// and names.
    ///
    /// Walls of different dimensions or surface kinds are never equal. Two
    /// identical walls belonging to different rooms compare equal.
    pub fn same_as<const E: usize, T: Surface<E>>(&self, other: &Wall<E, T>) -> bool {
        if D != E {
            tracing::warn!(
                this = D,
                other = E,
                "cannot compare walls of different dimensions"
            );
            return false;
        }

        match (&other.surface as &dyn Any).downcast_ref::<S>() {
            Some(surface) => self.surface.same_as(surface),
            None => false,
        }
    }

    fn sign(&self, value: f64) -> i32 {
        if value > self.eps {
            1
        } else if value < -self.eps {
            -1
        } else {
            0
        }
    }
}

impl Wall<2, Segment> {
    /// 2D wall between two corners, with the default tolerance
    pub fn new(corners: &[Point2<f64>], absorption: Vec<f64>, scatter: Vec<f64>) -> Result<Self> {
        Self::with_config(corners, absorption, scatter, &GeometryConfig::default())
    }

    pub fn with_config(
        corners: &[Point2<f64>],
        absorption: Vec<f64>,
        scatter: Vec<f64>,
        config: &GeometryConfig,
    ) -> Result<Self> {
        let segment = Segment::new(corners, config)?;
        Self::from_surface(segment, absorption, scatter, config)
    }
}

impl Wall<3, Polygon> {
    /// 3D wall without holes, with the default tolerance
    pub fn new(corners: Vec<Point3<f64>>, absorption: Vec<f64>, scatter: Vec<f64>) -> Result<Self> {
        Self::with_config(corners, Vec::new(), absorption, scatter, &GeometryConfig::default())
    }

    /// 3D wall with openings, with the default tolerance.
    ///
    /// See [`crate::PolygonWithHole`] for the assumptions on the holes.
    pub fn with_holes(
        corners: Vec<Point3<f64>>,
        holes: Vec<Vec<Point3<f64>>>,
        absorption: Vec<f64>,
        scatter: Vec<f64>,
    ) -> Result<Self> {
        Self::with_config(corners, holes, absorption, scatter, &GeometryConfig::default())
    }

    /// Fails when the corners (or the corners of any hole) are not planar
    /// within `config.eps`, or when the coefficients are invalid.
    pub fn with_config(
        corners: Vec<Point3<f64>>,
        holes: Vec<Vec<Point3<f64>>>,
        absorption: Vec<f64>,
        scatter: Vec<f64>,
        config: &GeometryConfig,
    ) -> Result<Self> {
        let polygon = Polygon::new(corners, holes, config)?;
        Self::from_surface(polygon, absorption, scatter, config)
    }

    pub fn polygon(&self) -> &Polygon {
        &self.surface
    }

    /// Plane basis of the outer polygon
    pub fn basis(&self) -> &Matrix3x2<f64> {
        self.surface.basis()
    }

    /// Corners of the outer polygon in the plane basis
    pub fn flat_corners(&self) -> &[Point2<f64>] {
        self.surface.flat_corners()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;
    use approx::assert_relative_eq;
    use nalgebra::{Vector2, Vector3};

    fn floor() -> Wall3D {
        Wall3D::new(
            vec![
                Point3::new(0.0, 0.0, 0.0),
                Point3::new(4.0, 0.0, 0.0),
                Point3::new(4.0, 3.0, 0.0),
                Point3::new(0.0, 3.0, 0.0),
            ],
            vec![0.1, 0.2, 0.3],
            vec![0.05, 0.05, 0.05],
        )
        .unwrap()
    }

    fn wall_2d() -> Wall2D {
        Wall2D::new(
            &[Point2::new(0.0, 0.0), Point2::new(4.0, 0.0)],
            vec![0.36],
            vec![0.0],
        )
        .unwrap()
    }

    #[test]
    fn test_construction_mirrors_polygon() {
        let wall = floor();
        assert_eq!(wall.origin(), Point3::new(0.0, 0.0, 0.0));
        assert_relative_eq!(wall.normal(), Vector3::new(0.0, 0.0, 1.0), epsilon = 1e-10);
        assert_eq!(wall.corners().len(), 4);
        assert!(wall.holes().is_empty());
        assert_eq!(wall.flat_corners().len(), 4);
        assert_relative_eq!(wall.area(), 12.0, epsilon = 1e-10);
        assert_eq!(Wall3D::DIM, 3);
        assert_eq!(Wall2D::DIM, 2);
    }

    #[test]
    fn test_coefficients() {
        let wall = wall_2d();
        assert_eq!(wall.n_bands(), 1);
        assert_relative_eq!(wall.energy_reflection()[0], 0.64, epsilon = 1e-12);
        assert_relative_eq!(wall.transmission()[0], 0.8, epsilon = 1e-12);
        assert_eq!(wall.absorption(), &[0.36]);
        assert_eq!(wall.scatter(), &[0.0]);
    }

    #[test]
    fn test_band_mismatch_fails() {
        let result = Wall2D::new(
            &[Point2::new(0.0, 0.0), Point2::new(1.0, 0.0)],
            vec![0.1, 0.2, 0.3],
            vec![0.1, 0.2],
        );
        assert!(matches!(result, Err(Error::BandCountMismatch { .. })));
    }

    #[test]
    fn test_name() {
        let wall = wall_2d();
        assert_eq!(wall.name(), "");
        let wall = wall.with_name("north");
        assert_eq!(wall.name(), "north");
    }

    #[test]
    fn test_reflect_3d() {
        let wall = floor();
        let (side, image) = wall.reflect(&Point3::new(1.0, 1.0, 2.0));
        assert_eq!(side, -1);
        assert_relative_eq!(image, Point3::new(1.0, 1.0, -2.0), epsilon = 1e-10);

        let (side, image) = wall.reflect(&Point3::new(1.0, 1.0, -0.5));
        assert_eq!(side, 1);
        assert_relative_eq!(image, Point3::new(1.0, 1.0, 0.5), epsilon = 1e-10);

        let (side, image) = wall.reflect(&Point3::new(2.0, 2.0, 0.0));
        assert_eq!(side, 0);
        assert_relative_eq!(image, Point3::new(2.0, 2.0, 0.0), epsilon = 1e-10);
    }

    #[test]
    fn test_reflect_2d() {
        // Normal of (0,0)->(4,0) points to -y
        let wall = wall_2d();
        let (side, image) = wall.reflect(&Point2::new(1.0, 1.0));
        assert_eq!(side, 1);
        assert_relative_eq!(image, Point2::new(1.0, -1.0), epsilon = 1e-10);
    }

    #[test]
    fn test_side() {
        let wall = floor();
        assert_eq!(wall.side(&Point3::new(1.0, 1.0, 1.0)), 1);
        assert_eq!(wall.side(&Point3::new(1.0, 1.0, -1.0)), -1);
        assert_eq!(wall.side(&Point3::new(10.0, 10.0, 1e-7)), 0);

        let wall = wall_2d();
        assert_eq!(wall.side(&Point2::new(1.0, -1.0)), 1);
        assert_eq!(wall.side(&Point2::new(1.0, 1.0)), -1);
    }

    #[test]
    fn test_normal_reflect_direction() {
        let wall = floor();
        let reflected = wall.normal_reflect(&Vector3::new(1.0, 0.0, -1.0));
        assert_relative_eq!(reflected, Vector3::new(1.0, 0.0, 1.0), epsilon = 1e-10);

        let wall = wall_2d();
        let reflected = wall.normal_reflect(&Vector2::new(1.0, 1.0));
        assert_relative_eq!(reflected, Vector2::new(1.0, -1.0), epsilon = 1e-10);
    }

    #[test]
    fn test_normal_reflect_from_hit_point() {
        let wall = floor();
        let start = Point3::new(0.0, 1.0, 1.0);
        let hit = Point3::new(1.0, 1.0, 0.0);
        let next = wall.normal_reflect_from(&start, &hit, 2.0_f64.sqrt());
        assert_relative_eq!(next, Point3::new(2.0, 1.0, 1.0), epsilon = 1e-10);
        assert_relative_eq!((next - hit).norm(), 2.0_f64.sqrt(), epsilon = 1e-10);
    }

    #[test]
    fn test_cosine_angle() {
        let wall = floor();
        assert_relative_eq!(wall.cosine_angle(&Vector3::new(0.0, 0.0, 5.0)), 1.0);
        assert_relative_eq!(wall.cosine_angle(&Vector3::new(3.0, 0.0, 0.0)), 0.0);
        assert_relative_eq!(
            wall.cosine_angle(&Vector3::new(1.0, 0.0, -1.0)),
            -std::f64::consts::FRAC_1_SQRT_2,
            epsilon = 1e-12
        );
        assert!(wall.cosine_angle(&Vector3::zeros()).is_nan());
    }

    #[test]
    fn test_intersects() {
        let wall = floor();
        assert_eq!(
            wall.intersects(&Point3::new(1.0, 1.0, -1.0), &Point3::new(1.0, 1.0, 1.0)),
            Isect::Valid
        );
        assert_eq!(
            wall.intersects(&Point3::new(5.0, 1.0, -1.0), &Point3::new(5.0, 1.0, 1.0)),
            Isect::None
        );

        let wall = wall_2d();
        assert_eq!(
            wall.intersects(&Point2::new(1.0, -1.0), &Point2::new(1.0, 1.0)),
            Isect::Valid
        );
        assert_eq!(
            wall.intersects(&Point2::new(0.0, -1.0), &Point2::new(0.0, 1.0)),
            Isect::Boundary
        );
    }

    #[test]
    fn test_same_as_across_dimensions() {
        let a = floor();
        let b = wall_2d();
        assert!(!a.same_as(&b));
        assert!(!b.same_as(&a));
        assert!(a.same_as(&floor()));
        assert!(b.same_as(&wall_2d()));
    }

    #[test]
    fn test_same_as_ignores_coefficients_and_name() {
        let a = floor();
        let b = Wall3D::new(a.corners().to_vec(), vec![0.9], vec![0.9])
            .unwrap()
            .with_name("other");
        assert!(a.same_as(&b));
    }

    #[test]
    fn test_clone_is_deep() {
        let a = floor();
        let b = a.clone();
        drop(a);
        assert_relative_eq!(b.area(), 12.0, epsilon = 1e-10);
        assert!(b.same_as(&floor()));
    }

    #[test]
    fn test_walls_are_send_and_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<Wall2D>();
        assert_send_sync::<Wall3D>();
    }
}
