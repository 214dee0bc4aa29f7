// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Intersection status of a ray segment against a surface
//!
//! The status combines two independent flags: whether the hit happened at an
//! endpoint of the segment, and whether it happened on the boundary of the
//! surface. Numeric codes follow the usual convention
//! (-1 none, 0 valid, 1 endpoint, 2 boundary, 3 both).

use nalgebra::Point;

/// Outcome of a segment/surface intersection test
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Isect {
    /// No intersection
    None,
    /// Strictly between the segment endpoints and in the surface interior
    Valid,
    /// At an endpoint of the segment
    Endpoint,
    /// On the boundary of the surface
    Boundary,
    /// At an endpoint of the segment and on the boundary of the surface
    EndpointBoundary,
}

impl Isect {
    const ENDPOINT_BIT: i32 = 1;
    const BOUNDARY_BIT: i32 = 2;

    /// Build a hit status from its two flags
    pub fn hit(on_endpoint: bool, on_boundary: bool) -> Self {
        match (on_endpoint, on_boundary) {
            (false, false) => Isect::Valid,
            (true, false) => Isect::Endpoint,
            (false, true) => Isect::Boundary,
            (true, true) => Isect::EndpointBoundary,
        }
    }

    /// Numeric status code
    pub fn code(self) -> i32 {
        match self {
            Isect::None => -1,
            Isect::Valid => 0,
            Isect::Endpoint => Self::ENDPOINT_BIT,
            Isect::Boundary => Self::BOUNDARY_BIT,
            Isect::EndpointBoundary => Self::ENDPOINT_BIT | Self::BOUNDARY_BIT,
        }
    }

    /// Inverse of [`Isect::code`]; unknown codes map to `None`
    pub fn from_code(code: i32) -> Self {
        if !(0..=3).contains(&code) {
            return Isect::None;
        }
        Self::hit(
            code & Self::ENDPOINT_BIT != 0,
            code & Self::BOUNDARY_BIT != 0,
        )
    }

    pub fn is_hit(self) -> bool {
        self != Isect::None
    }

    pub fn on_endpoint(self) -> bool {
        matches!(self, Isect::Endpoint | Isect::EndpointBoundary)
    }

    pub fn on_boundary(self) -> bool {
        matches!(self, Isect::Boundary | Isect::EndpointBoundary)
    }
}

/// A successful intersection: where it happened and how
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Intersection<const D: usize> {
    /// Status, never [`Isect::None`]
    pub status: Isect,
    pub point: Point<f64, D>,
}

impl<const D: usize> Intersection<D> {
    pub fn new(status: Isect, point: Point<f64, D>) -> Self {
        debug_assert!(status.is_hit(), "an intersection must carry a hit status");
        Self { status, point }
    }
}

/// Status of an optional intersection, `Isect::None` when there is none
pub fn status_of<const D: usize>(hit: &Option<Intersection<D>>) -> Isect {
    hit.as_ref().map_or(Isect::None, |h| h.status)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_codes() {
        assert_eq!(Isect::None.code(), -1);
        assert_eq!(Isect::Valid.code(), 0);
        assert_eq!(Isect::Endpoint.code(), 1);
        assert_eq!(Isect::Boundary.code(), 2);
        assert_eq!(Isect::EndpointBoundary.code(), 3);
    }

    #[test]
    fn test_code_round_trip() {
        for code in -1..=3 {
            assert_eq!(Isect::from_code(code).code(), code);
        }
        assert_eq!(Isect::from_code(7), Isect::None);
    }

    #[test]
    fn test_flags_are_independent() {
        let both = Isect::hit(true, true);
        assert!(both.on_endpoint());
        assert!(both.on_boundary());
        assert!(!Isect::Valid.on_endpoint());
        assert!(!Isect::Valid.on_boundary());
        assert!(Isect::Boundary.on_boundary());
        assert!(!Isect::Boundary.on_endpoint());
        assert!(!Isect::None.is_hit());
    }
}
