// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Pressure to radius mapping and the default easing curves.

/// An easing curve applied to a value nominally in `[0, 1]`.
///
/// This is a plain function pointer so that [`StrokeOptions`](crate::StrokeOptions)
/// stays `Copy` and can be built in `const` contexts.
pub type Easing = fn(f64) -> f64;

/// Identity easing; the default response curve for pressure.
#[must_use]
pub fn linear(t: f64) -> f64 {
    t
}

/// Quadratic ease-out, `t * (2 - t)`; the default start taper curve.
#[must_use]
pub fn ease_out_quad(t: f64) -> f64 {
    t * (2.0 - t)
}

/// Cubic-like curve `(t - 1)² * t`; the default end taper curve.
#[must_use]
pub fn ease_taper_end(t: f64) -> f64 {
    (t - 1.0) * (t - 1.0) * t
}

/// Compute the stroke radius for a pressure value.
///
/// `radius = size * easing(0.5 - thinning * (0.5 - pressure))`
///
/// With `thinning == 0` the radius is exactly `size / 2` whatever the pressure
/// or easing, which is the same constant the outline generator uses when it
/// skips pressure entirely. Negative thinning inverts the response so that
/// harder presses draw thinner lines.
#[must_use]
pub fn stroke_radius(size: f64, thinning: f64, pressure: f64, easing: Easing) -> f64 {
    if thinning == 0.0 {
        return size / 2.0;
    }
    size * easing(0.5 - thinning * (0.5 - pressure))
}
