//! Hit testing for annotations.
//!
//! Pure geometric classification of a pointer position against a single
//! annotation: does it grab a handle, the body, or nothing? Callers test
//! each annotation in front-to-back order and apply their own priority when
//! several annotations overlap; these functions only arbitrate within one
//! annotation's geometry.
//!
//! All coordinates are pixel-space. Invalid input (NaN coordinates, paths
//! with fewer than two points) fails closed to "no hit" - comparisons
//! against NaN are false, so nothing here ever panics.

use bevy::prelude::*;

use crate::constants::{FREEHAND_HIT_TOLERANCE, HANDLE_RADIUS, LINE_HIT_TOLERANCE};

use super::components::{CircleAnnotation, FreehandAnnotation, LineAnnotation};

/// The part of an annotation a pointer position lands on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HitRegion {
    /// Grab handle at a line's start endpoint
    LineStart,
    /// Grab handle at a line's end endpoint
    LineEnd,
    /// Anywhere along a line within tolerance
    LineBody,
    /// Inside a circle or near its edge ring
    CircleBody,
    /// The circle's east-side resize handle
    CircleResize,
    /// Within tolerance of any freehand segment
    FreehandBody,
}

/// Distance from `point` to the closest point on segment (`a`, `b`).
///
/// Projects onto the infinite line and clamps the parameter to [0, 1] so
/// the closest point never leaves the segment. A zero-length segment
/// degenerates to the distance to `a`.
pub fn distance_to_segment(point: Vec2, a: Vec2, b: Vec2) -> f32 {
    let segment = b - a;
    let len_sq = segment.length_squared();

    if len_sq < 1e-4 {
        return point.distance(a);
    }

    let t = ((point - a).dot(segment) / len_sq).clamp(0.0, 1.0);
    point.distance(a + segment * t)
}

/// Hit-test a line annotation.
///
/// Endpoint handles are checked before the body because they visually
/// overlap it near the ends and must win there.
pub fn check_line_hit(point: Vec2, line: &LineAnnotation) -> Option<HitRegion> {
    if point.distance(line.start) <= HANDLE_RADIUS {
        return Some(HitRegion::LineStart);
    }
    if point.distance(line.end) <= HANDLE_RADIUS {
        return Some(HitRegion::LineEnd);
    }
    if distance_to_segment(point, line.start, line.end) <= LINE_HIT_TOLERANCE {
        return Some(HitRegion::LineBody);
    }
    None
}

/// Hit-test a circle annotation.
///
/// The resize handle sits on the east side of the circle at
/// `center + (radius, 0)` and takes priority over the body. The body hits
/// either near the edge ring (within the line tolerance) or anywhere
/// strictly inside the disk.
pub fn check_circle_hit(point: Vec2, circle: &CircleAnnotation) -> Option<HitRegion> {
    let handle = circle.center + Vec2::new(circle.radius, 0.0);
    if point.distance(handle) <= HANDLE_RADIUS {
        return Some(HitRegion::CircleResize);
    }

    let distance = point.distance(circle.center);
    if (distance - circle.radius).abs() <= LINE_HIT_TOLERANCE || distance < circle.radius {
        return Some(HitRegion::CircleBody);
    }
    None
}

/// Hit-test a freehand annotation.
///
/// Walks consecutive point pairs in path order; the first segment within
/// tolerance wins. Paths with fewer than two points never hit. No closing
/// segment back to the first point is tested.
pub fn check_freehand_hit(point: Vec2, path: &FreehandAnnotation) -> Option<HitRegion> {
    if path.points.len() < 2 {
        return None;
    }

    for window in path.points.windows(2) {
        if distance_to_segment(point, window[0], window[1]) <= FREEHAND_HIT_TOLERANCE {
            return Some(HitRegion::FreehandBody);
        }
    }
    None
}
