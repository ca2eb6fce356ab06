// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Small 2D vector kernel used by the stroke pipeline.
//!
//! Positions are [`Point`]s and directions/offsets are [`Vec2`]s. The helpers
//! here are thin, exact wrappers: no rounding or snapping is applied, since the
//! outline relies on sub-pixel precision. Where kurbo's own operators would
//! compute a slightly different expression (for example dividing by
//! multiplying with a reciprocal), the arithmetic is spelled out instead.

#[cfg(not(feature = "std"))]
use kurbo::common::FloatFuncs as _;
use kurbo::{Point, Vec2};

/// Negate a vector.
#[inline]
#[must_use]
pub fn neg(v: Vec2) -> Vec2 {
    Vec2::new(-v.x, -v.y)
}

/// Offset a point by a vector.
#[inline]
#[must_use]
pub fn add(a: Point, v: Vec2) -> Point {
    Point::new(a.x + v.x, a.y + v.y)
}

/// The vector from `b` to `a`.
#[inline]
#[must_use]
pub fn sub(a: Point, b: Point) -> Vec2 {
    Vec2::new(a.x - b.x, a.y - b.y)
}

/// Scale a vector.
#[inline]
#[must_use]
pub fn mul(v: Vec2, n: f64) -> Vec2 {
    Vec2::new(v.x * n, v.y * n)
}

/// Divide each component of a vector by a scalar.
#[inline]
#[must_use]
pub fn div(v: Vec2, n: f64) -> Vec2 {
    Vec2::new(v.x / n, v.y / n)
}

/// Perpendicular rotation: `(x, y)` becomes `(y, -x)`.
///
/// Note that this is the opposite turn from [`Vec2::turn_90`].
#[inline]
#[must_use]
pub fn per(v: Vec2) -> Vec2 {
    Vec2::new(v.y, -v.x)
}

/// Dot product.
#[inline]
#[must_use]
pub fn dot(a: Vec2, b: Vec2) -> f64 {
    a.x * b.x + a.y * b.y
}

/// Length of a vector.
#[inline]
#[must_use]
pub fn len(v: Vec2) -> f64 {
    v.x.hypot(v.y)
}

/// Squared length of a vector.
#[inline]
#[must_use]
pub fn len2(v: Vec2) -> f64 {
    v.x * v.x + v.y * v.y
}

/// Unit vector in the direction of `v`.
///
/// A zero-length `v` yields NaN components; callers must guard against that.
#[inline]
#[must_use]
pub fn unit(v: Vec2) -> Vec2 {
    div(v, len(v))
}

/// Euclidean distance between two points.
#[inline]
#[must_use]
pub fn dist(a: Point, b: Point) -> f64 {
    len(sub(a, b))
}

/// Squared euclidean distance between two points.
#[inline]
#[must_use]
pub fn dist2(a: Point, b: Point) -> f64 {
    len2(sub(a, b))
}

/// Rotate `p` around `center` by `radians` (counter-clockwise in a y-up frame).
#[inline]
#[must_use]
pub fn rotate_around(p: Point, center: Point, radians: f64) -> Point {
    let s = radians.sin();
    let c = radians.cos();

    let px = p.x - center.x;
    let py = p.y - center.y;

    let nx = px * c - py * s;
    let ny = px * s + py * c;

    Point::new(nx + center.x, ny + center.y)
}

/// Linear interpolation between two points: `a + (b - a) * t`.
///
/// `t` is not clamped; values outside `[0, 1]` extrapolate.
#[inline]
#[must_use]
pub fn lerp(a: Point, b: Point, t: f64) -> Point {
    add(a, mul(sub(b, a), t))
}

/// Linear interpolation between two vectors: `a + (b - a) * t`.
#[inline]
#[must_use]
pub fn lerp_vec(a: Vec2, b: Vec2, t: f64) -> Vec2 {
    Vec2::new(a.x + (b.x - a.x) * t, a.y + (b.y - a.y) * t)
}

/// Project `a` along `direction` by `scalar`: `a + direction * scalar`.
#[inline]
#[must_use]
pub fn project(a: Point, direction: Vec2, scalar: f64) -> Point {
    add(a, mul(direction, scalar))
}
