// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=understory_freehand --heading-base-level=0

//! Understory Freehand: pressure-sensitive freehand stroke outlines.
//!
//! This crate turns the raw samples of one pen-down to pen-up motion into a
//! closed polygon that can be filled to draw the "ink" of the stroke. It is a
//! pure geometry computation: there is no rendering, input capture, or
//! persistence here, and every call is independent.
//!
//! The pipeline has two stages:
//!
//! - [`stroke_points`] normalizes the raw samples into [`StrokePoint`]s:
//!   streamlined positions annotated with pressure, motion vector, segment
//!   distance and running length.
//! - [`stroke_outline`] builds the left and right sides of the stroke around
//!   those points, with pressure-driven width, tapers, rounded sharp corners
//!   and end [`Cap`]s.
//!
//! [`stroke`] runs both stages with one set of [`StrokeOptions`]. Most
//! callers only need that.
//!
//! ## Example
//!
//! ```rust
//! use understory_freehand::{StrokeOptions, Taper, outline_path, stroke};
//!
//! // Samples as (x, y, pressure); pressure is optional.
//! let samples = [
//!     [10.0, 10.0, 0.5],
//!     [30.0, 14.0, 0.6],
//!     [55.0, 22.0, 0.7],
//!     [80.0, 35.0, 0.6],
//!     [100.0, 52.0, 0.4],
//! ];
//!
//! let options = StrokeOptions::size(12.0)
//!     .with_end_taper(Taper::Auto)
//!     .with_last(true);
//! let outline = stroke(samples, &options);
//! assert!(outline.len() > 4);
//! assert!(outline.iter().all(|p| p.is_finite()));
//!
//! // The polygon is implicitly closed; `outline_path` makes a fillable path.
//! let path = outline_path(&outline);
//! assert!(!path.elements().is_empty());
//! ```
//!
//! ## Input
//!
//! Anything that converts into an [`InputPoint`] can be fed in: `(x, y)` and
//! `(x, y, pressure)` tuples, `[f64; 2]` and `[f64; 3]` arrays, [`kurbo::Point`],
//! or labeled records built with [`InputPoint::labeled`]. With the `serde`
//! feature, `[x, y]`, `[x, y, pressure]` and `{"x", "y", "pressure"}` JSON
//! shapes deserialize directly.
//!
//! ## Degenerate input
//!
//! Nothing here returns an error. Empty input and a non-positive size give an
//! empty outline; a single point gives a small dot; repeated samples are
//! skipped. For finite input and options, the output is always finite.
//!
//! ## Features
//!
//! - `std` *(default)*: use `std` float functions through `kurbo/std`.
//! - `libm`: use `libm` float functions through `kurbo/libm` for `no_std`.
//! - `serde`: (de)serialization of input points, stroke points and options.
//!
//! This crate is `no_std` and uses `alloc`. It logs through the [`log`]
//! facade at `trace`/`debug` level only.

#![no_std]

extern crate alloc;

mod input;
mod options;
mod outline;
mod points;
mod radius;
pub mod vector;

use alloc::vec::Vec;

use kurbo::Point;

pub use input::InputPoint;
pub use options::{Cap, StrokeOptions, Taper};
pub use outline::{outline_path, stroke_outline};
pub use points::{StrokePoint, stroke_points};
pub use radius::{Easing, ease_out_quad, ease_taper_end, linear, stroke_radius};

/// Turn raw samples straight into an outline polygon.
///
/// This is [`stroke_points`] followed by [`stroke_outline`] with the same
/// `options`, so `size` and `last` are shared by both stages.
///
/// ```
/// use understory_freehand::{StrokeOptions, stroke};
///
/// let none: [(f64, f64); 0] = [];
/// assert!(stroke(none, &StrokeOptions::DEFAULT).is_empty());
/// ```
#[must_use]
pub fn stroke<I>(points: I, options: &StrokeOptions) -> Vec<Point>
where
    I: IntoIterator,
    I::Item: Into<InputPoint>,
{
    let stroke_points = stroke_points(points, options);
    let outline = stroke_outline(&stroke_points, options);
    log::trace!(
        "stroke: {} stroke points, {} outline points",
        stroke_points.len(),
        outline.len()
    );
    outline
}
