// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Normalization of raw samples into stroke points.
//!
//! Raw samples are streamed towards rather than visited exactly: each new
//! stroke point is interpolated from the previous one towards the next raw
//! sample, which is what gives `streamline` its smoothing and lag. Every
//! emitted point is annotated with its motion vector, the distance from the
//! previous point and the running length of the stroke so far.

use alloc::vec::Vec;

use kurbo::{Point, Vec2};

use crate::input::{InputPoint, Sample};
use crate::options::StrokeOptions;
use crate::vector;

/// Pressure of a first sample that carries none.
const FIRST_DEFAULT_PRESSURE: f64 = 0.25;

/// Pressure of any later sample that carries none.
const DEFAULT_PRESSURE: f64 = 0.5;

/// A normalized point along a stroke.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct StrokePoint {
    /// Streamlined position.
    pub point: Point,
    /// Input (or defaulted) pressure, nominally in `[0, 1]`.
    pub pressure: f64,
    /// Unit vector pointing from this point back to the previous one.
    ///
    /// The first point borrows the vector of the second; a stroke with a
    /// single point has a zero vector.
    pub vector: Vec2,
    /// Distance from the previous point; `0.0` for the first point.
    pub distance: f64,
    /// Cumulative length of the stroke up to this point.
    pub running_length: f64,
}

/// Turn raw samples into stroke points.
///
/// Reads `size`, `streamline` and `last` from `options`. Empty input gives an
/// empty result; any other input gives at least one point.
///
/// Near the pen-down location, points are suppressed until the stroke has
/// travelled `size` units; suppressed points are not back-filled, so the very
/// start of a tapered stroke is slightly less accurate than the rest.
///
/// ```
/// use understory_freehand::{StrokeOptions, stroke_points};
///
/// let points = stroke_points([[0.0, 0.0], [100.0, 100.0]], &StrokeOptions::DEFAULT);
/// // Two samples are densified so that tapers have something to work with.
/// assert!(points.len() > 2);
/// assert_eq!(points[0].running_length, 0.0);
/// ```
#[must_use]
pub fn stroke_points<I>(points: I, options: &StrokeOptions) -> Vec<StrokePoint>
where
    I: IntoIterator,
    I::Item: Into<InputPoint>,
{
    let mut samples: Vec<Sample> = points
        .into_iter()
        .map(|p| p.into().to_sample())
        .collect();

    let Some(first) = samples.first().copied() else {
        return Vec::new();
    };

    // Not clamped: streamline outside [0, 1] extrapolates.
    let t = 0.15 + (1.0 - options.streamline) * 0.85;

    // Densify two-sample strokes so that tapering does not collapse into a
    // single straight dash.
    if samples.len() == 2 {
        let end = samples[1].point;
        samples.truncate(1);
        samples.extend((1..=4).map(|i| {
            Sample::synthesized(vector::lerp(first.point, end, f64::from(i) / 4.0))
        }));
    }

    if samples.len() == 1 {
        samples.push(Sample::synthesized(vector::add(
            first.point,
            Vec2::new(1.0, 1.0),
        )));
    }

    let mut stream = Streamer::new(
        StrokePoint {
            point: first.point,
            pressure: first.pressure.unwrap_or(FIRST_DEFAULT_PRESSURE),
            vector: Vec2::new(1.0, 1.0),
            distance: 0.0,
            running_length: 0.0,
        },
        samples.len(),
    );

    let final_index = samples.len() - 1;
    for (i, sample) in samples.iter().enumerate().skip(1) {
        let target = if options.last && i == final_index {
            sample.point
        } else {
            vector::lerp(stream.prev().point, sample.point, t)
        };
        stream.step(target, sample.pressure, i < final_index, options.size);
    }

    let mut out = stream.finish();
    log::trace!("normalized {} samples into {} stroke points", samples.len(), out.len());

    // The first point has no motion of its own.
    let first_vector = out.get(1).map_or(Vec2::ZERO, |second| second.vector);
    out[0].vector = first_vector;
    out
}

/// Accumulator threaded through the normalization loop.
#[derive(Debug)]
struct Streamer {
    out: Vec<StrokePoint>,
    running_length: f64,
    reached_min_length: bool,
}

impl Streamer {
    fn new(first: StrokePoint, capacity: usize) -> Self {
        let mut out = Vec::with_capacity(capacity);
        out.push(first);
        Self {
            out,
            running_length: 0.0,
            reached_min_length: false,
        }
    }

    fn prev(&self) -> &StrokePoint {
        // `out` is seeded with the first point and never shrinks.
        &self.out[self.out.len() - 1]
    }

    /// Offer the next streamlined position.
    ///
    /// `gated` is true for every sample but the final one; gated positions
    /// are held back until the stroke has run `size` units.
    fn step(&mut self, point: Point, pressure: Option<f64>, gated: bool, size: f64) {
        let prev = *self.prev();
        if prev.point == point {
            return;
        }

        let distance = vector::dist(point, prev.point);
        if distance == 0.0 {
            return;
        }

        // Suppressed positions still count towards the running length.
        self.running_length += distance;

        if gated && !self.reached_min_length {
            if self.running_length < size {
                return;
            }
            self.reached_min_length = true;
        }

        self.out.push(StrokePoint {
            point,
            pressure: pressure.unwrap_or(DEFAULT_PRESSURE),
            vector: vector::unit(vector::sub(prev.point, point)),
            distance,
            running_length: self.running_length,
        });
    }

    fn finish(self) -> Vec<StrokePoint> {
        self.out
    }
}
