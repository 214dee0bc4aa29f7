// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Low-level geometric predicates
//!
//! Pure functions used by polygons and walls: segment/plane and segment/segment
//! intersection, 2D point-in-polygon classification, signed area and plane
//! projection. Every tolerance is passed in explicitly.

use nalgebra::{Matrix3x2, Point2, Point3, Vector2, Vector3};

/// Kind of a segment/plane intersection
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlaneHit {
    /// Strictly between the segment endpoints
    Valid,
    /// At one of the segment endpoints
    Endpoint,
}

/// Location of a point relative to a 2D polygon
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Containment {
    Outside,
    Inside,
    /// On an edge or a vertex, within tolerance
    Boundary,
}

impl Containment {
    /// Numeric code: -1 outside, 0 inside, 1 boundary.
    pub fn code(self) -> i32 {
        match self {
            Containment::Outside => -1,
            Containment::Inside => 0,
            Containment::Boundary => 1,
        }
    }
}

/// Flags of a 2D segment/segment intersection
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SegmentHit {
    /// The hit lies on an endpoint of the first segment
    pub on_a_endpoint: bool,
    /// The hit lies on an endpoint of the second segment
    pub on_b_endpoint: bool,
}

/// 2D cross product `a.x * b.y - a.y * b.x`
#[inline]
pub fn perp_dot(a: &Vector2<f64>, b: &Vector2<f64>) -> f64 {
    a.x * b.y - a.y * b.x
}

/// Orientation of the triangle (p1, p2, p3).
///
/// Returns 1 for counter-clockwise, -1 for clockwise and 0 when the three
/// points are collinear within `eps`.
#[inline]
pub fn ccw(p1: &Point2<f64>, p2: &Point2<f64>, p3: &Point2<f64>, eps: f64) -> i8 {
    let d = perp_dot(&(p2 - p1), &(p3 - p1));
    if d < -eps {
        -1
    } else if d > eps {
        1
    } else {
        0
    }
}

/// Intersect the segment `p1 -> p2` with the plane through `plane_origin`
/// with normal `plane_normal`.
///
/// Segments parallel to the plane (including segments lying in it) never
/// intersect. The hit is flagged as `Endpoint` when it falls within `eps`
/// of either end of the segment (in segment parameter space).
pub fn intersect_segment_plane(
    p1: &Point3<f64>,
    p2: &Point3<f64>,
    plane_origin: &Point3<f64>,
    plane_normal: &Vector3<f64>,
    eps: f64,
) -> Option<(PlaneHit, Point3<f64>)> {
    let u = p2 - p1;
    let denom = plane_normal.dot(&u);

    if denom.abs() <= eps {
        return None;
    }

    let w = p1 - plane_origin;
    let s = -plane_normal.dot(&w) / denom;

    if s < -eps || s > 1.0 + eps {
        return None;
    }

    let point = p1 + u * s;
    let kind = if s.abs() < eps || (s - 1.0).abs() < eps {
        PlaneHit::Endpoint
    } else {
        PlaneHit::Valid
    };

    Some((kind, point))
}

/// Signed area of a 2D polygon (shoelace formula).
///
/// Positive for counter-clockwise winding. A closing vertex equal to the
/// first one does not change the result.
pub fn polygon_area_2d(corners: &[Point2<f64>]) -> f64 {
    let n = corners.len();
    if n < 3 {
        return 0.0;
    }

    let mut twice_area = 0.0;
    for i in 0..n {
        let a = &corners[i];
        let b = &corners[(i + 1) % n];
        twice_area += a.x * b.y - b.x * a.y;
    }

    0.5 * twice_area
}

/// Distance from `p` to the segment `a -> b`
#[inline]
fn distance_to_segment(p: &Point2<f64>, a: &Point2<f64>, b: &Point2<f64>) -> f64 {
    let ab = b - a;
    let len_sq = ab.norm_squared();
    if len_sq == 0.0 {
        return (p - a).norm();
    }
    let t = ((p - a).dot(&ab) / len_sq).clamp(0.0, 1.0);
    (p - (a + ab * t)).norm()
}

/// Classify a point against a 2D polygon.
///
/// Points within `eps` of any edge are on the boundary; the remaining points
/// are classified with the even-odd crossing rule.
pub fn point_in_polygon_2d(point: &Point2<f64>, corners: &[Point2<f64>], eps: f64) -> Containment {
    let n = corners.len();
    if n == 0 {
        return Containment::Outside;
    }

    for i in 0..n {
        if distance_to_segment(point, &corners[i], &corners[(i + 1) % n]) <= eps {
            return Containment::Boundary;
        }
    }

    let mut inside = false;
    let mut j = n - 1;
    for i in 0..n {
        let pi = &corners[i];
        let pj = &corners[j];
        if (pi.y > point.y) != (pj.y > point.y) {
            let x_cross = (pj.x - pi.x) * (point.y - pi.y) / (pj.y - pi.y) + pi.x;
            if point.x < x_cross {
                inside = !inside;
            }
        }
        j = i;
    }

    if inside {
        Containment::Inside
    } else {
        Containment::Outside
    }
}

/// Intersect the 2D segments `a1 -> a2` and `b1 -> b2`.
///
/// Collinear and non-crossing segments yield `None`. Touching configurations
/// are reported through the endpoint flags of the returned [`SegmentHit`].
pub fn intersect_segments_2d(
    a1: &Point2<f64>,
    a2: &Point2<f64>,
    b1: &Point2<f64>,
    b2: &Point2<f64>,
    eps: f64,
) -> Option<(SegmentHit, Point2<f64>)> {
    let a1a2b1 = ccw(a1, a2, b1, eps);
    let a1a2b2 = ccw(a1, a2, b2, eps);
    // both endpoints of b on the same side of a, or all four points collinear
    if a1a2b1 == a1a2b2 {
        return None;
    }

    let b1b2a1 = ccw(b1, b2, a1, eps);
    let b1b2a2 = ccw(b1, b2, a2, eps);
    if b1b2a1 == b1b2a2 {
        return None;
    }

    let va = a2 - a1;
    let vb = b2 - b1;
    let denom = perp_dot(&va, &vb);
    if denom == 0.0 {
        return None;
    }

    let t = perp_dot(&(b1 - a1), &vb) / denom;
    let hit = SegmentHit {
        on_a_endpoint: b1b2a1 == 0 || b1b2a2 == 0,
        on_b_endpoint: a1a2b1 == 0 || a1a2b2 == 0,
    };

    Some((hit, a1 + va * t))
}

/// Project a 3D point into the 2D frame of a plane
#[inline]
pub fn project_to_basis(
    point: &Point3<f64>,
    origin: &Point3<f64>,
    basis: &Matrix3x2<f64>,
) -> Point2<f64> {
    Point2::from(basis.transpose() * (point - origin))
}

/// Project 3D points using an existing plane frame.
/// This ensures multiple sets of points use the same 2D space.
pub fn project_all_to_basis(
    points: &[Point3<f64>],
    origin: &Point3<f64>,
    basis: &Matrix3x2<f64>,
) -> Vec<Point2<f64>> {
    points
        .iter()
        .map(|p| project_to_basis(p, origin, basis))
        .collect()
}
