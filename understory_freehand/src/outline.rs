// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Outline generation around normalized stroke points.
//!
//! The outline is built as two sides. Each stroke point contributes a point on
//! the left and on the right, offset perpendicular to the direction of travel
//! by the radius at that point. Sharp turns get a rounded fan instead of a
//! plain offset, and the two ends get caps (or nothing, when tapered).
//!
//! The resulting polygon is ordered left side (start to end), end cap, right
//! side (end to start), start cap. It is implicitly closed: the last point
//! connects back to the first. [`outline_path`] makes that explicit.

use alloc::vec::Vec;
use core::f64::consts::PI;

use kurbo::{BezPath, Point, Vec2};

use crate::options::{Cap, StrokeOptions};
use crate::points::StrokePoint;
use crate::radius::stroke_radius;
use crate::vector;

/// A half turn, nudged so that fans fully close.
const FIXED_PI: f64 = PI + 0.0001;

/// How quickly simulated pressure follows pointer speed.
const RATE_OF_PRESSURE_CHANGE: f64 = 0.275;

/// Number of leading points used to seed the simulated pressure.
const PRESSURE_WARMUP_POINTS: usize = 10;

/// Interior points closer than this to the end of the stroke are dropped.
const END_NOISE_LENGTH: f64 = 3.0;

/// Smallest radius a tapered point may shrink to.
const MIN_RADIUS: f64 = 0.01;

/// Pressure derived from how far the pointer moved since the last point.
///
/// Slow movement pushes the pressure up towards 1, fast movement pulls it
/// down.
fn simulated_pressure(prev_pressure: f64, distance: f64, size: f64) -> f64 {
    let speed = (distance / size).min(1.0);
    let rate = (1.0 - speed).min(1.0);
    (prev_pressure + (rate - prev_pressure) * (speed * RATE_OF_PRESSURE_CHANGE)).min(1.0)
}

/// Seed pressure for the stroke, so lines do not start artificially fat.
fn warmup_pressure(
    first: &StrokePoint,
    points: &[StrokePoint],
    size: f64,
    simulate: bool,
) -> f64 {
    points
        .iter()
        .take(PRESSURE_WARMUP_POINTS)
        .fold(first.pressure, |prev, p| {
            let pressure = if simulate {
                simulated_pressure(prev, p.distance, size)
            } else {
                p.pressure
            };
            (prev + pressure) / 2.0
        })
}

/// `steps` points rotated around `center` from `start`, ending at `turns`
/// half turns.
fn fan(start: Point, center: Point, turns: f64, steps: u32) -> impl Iterator<Item = Point> {
    (1..=steps).map(move |i| {
        let t = f64::from(i) / f64::from(steps);
        vector::rotate_around(start, center, FIXED_PI * turns * t)
    })
}

/// Accumulator for the two sides of the outline.
#[derive(Debug)]
struct Sides {
    left: Vec<Point>,
    right: Vec<Point>,
    /// Last accepted left point.
    pl: Point,
    /// Last accepted right point.
    pr: Point,
    prev_pressure: f64,
    prev_vector: Vec2,
    /// Whether the previous point opened a sharp corner.
    prev_sharp: bool,
}

impl Sides {
    fn new(first: &StrokePoint, prev_pressure: f64, capacity: usize) -> Self {
        Self {
            left: Vec::with_capacity(capacity),
            right: Vec::with_capacity(capacity),
            pl: first.point,
            pr: first.point,
            prev_pressure,
            prev_vector: first.vector,
            prev_sharp: false,
        }
    }

    /// A rounded fan of 14 points per side around a sharp corner.
    fn corner(&mut self, point: Point, radius: f64) {
        let offset = vector::mul(vector::per(self.prev_vector), radius);
        let (mut tl, mut tr) = (point, point);
        for i in 0..14_u32 {
            let t = f64::from(i) / 13.0;
            let l = vector::add(point, vector::neg(offset));
            tl = vector::rotate_around(l, point, FIXED_PI * t);
            self.left.push(tl);
            tr = vector::rotate_around(vector::add(point, offset), point, FIXED_PI * -t);
            self.right.push(tr);
        }
        self.pl = tl;
        self.pr = tr;
    }

    /// The final point: a plain perpendicular offset.
    fn terminal(&mut self, point: Point, direction: Vec2, radius: f64) {
        let offset = vector::mul(vector::per(direction), radius);
        self.left.push(vector::add(point, vector::neg(offset)));
        self.right.push(vector::add(point, offset));
    }

    /// An interior point, dropped per side when too close to the last one.
    fn regular(&mut self, point: Point, offset: Vec2, always: bool, min_distance: f64) {
        let tl = vector::add(point, vector::neg(offset));
        if always || vector::dist2(self.pl, tl) > min_distance {
            self.left.push(tl);
            self.pl = tl;
        }

        let tr = vector::add(point, offset);
        if always || vector::dist2(self.pr, tr) > min_distance {
            self.right.push(tr);
            self.pr = tr;
        }
    }
}

/// Build the outline polygon around a set of stroke points.
///
/// Empty input or a non-positive `size` gives an empty outline. A single
/// stroke point gives a 13-point dot unless the stroke is tapered and not
/// yet `last`.
#[must_use]
pub fn stroke_outline(points: &[StrokePoint], options: &StrokeOptions) -> Vec<Point> {
    let size = options.size;
    let (Some(first), Some(last)) = (points.first(), points.last()) else {
        return Vec::new();
    };
    if size <= 0.0 {
        log::debug!("no outline for non-positive size {size}");
        return Vec::new();
    }

    let thinning = options.thinning;
    let total_length = last.running_length;
    let taper_start = options.taper_start.resolve(size, total_length);
    let taper_end = options.taper_end.resolve(size, total_length);
    let min_distance = (size * options.smoothing) * (size * options.smoothing);

    let mut sides = Sides::new(
        first,
        warmup_pressure(first, points, size, options.simulate_pressure),
        points.len(),
    );
    let mut radius = stroke_radius(size, thinning, last.pressure, options.easing);
    let mut first_radius = None;

    let final_index = points.len() - 1;
    for (i, sp) in points.iter().enumerate() {
        let is_final = i == final_index;
        if !is_final && total_length - sp.running_length < END_NOISE_LENGTH {
            continue;
        }

        let mut pressure = sp.pressure;
        if thinning != 0.0 {
            if options.simulate_pressure {
                pressure = simulated_pressure(sides.prev_pressure, sp.distance, size);
            }
            radius = stroke_radius(size, thinning, pressure, options.easing);
        } else {
            radius = size / 2.0;
        }
        first_radius.get_or_insert(radius);

        let ts = if sp.running_length < taper_start {
            (options.taper_start_easing)(sp.running_length / taper_start)
        } else {
            1.0
        };
        let remaining = total_length - sp.running_length;
        let te = if remaining < taper_end {
            (options.taper_end_easing)(remaining / taper_end)
        } else {
            1.0
        };
        radius = (radius * ts.min(te)).max(MIN_RADIUS);

        let next_vector = if is_final {
            sp.vector
        } else {
            points[i + 1].vector
        };
        let next_dpr = if is_final {
            1.0
        } else {
            vector::dot(sp.vector, next_vector)
        };
        let prev_dpr = vector::dot(sp.vector, sides.prev_vector);

        let is_point_sharp = prev_dpr < 0.0 && !sides.prev_sharp;
        let is_next_sharp = next_dpr < 0.0;
        if is_point_sharp || is_next_sharp {
            sides.corner(sp.point, radius);
            if is_next_sharp {
                sides.prev_sharp = true;
            }
            continue;
        }
        sides.prev_sharp = false;

        if is_final {
            sides.terminal(sp.point, sp.vector, radius);
            continue;
        }

        let offset = vector::mul(
            vector::per(vector::lerp_vec(next_vector, sp.vector, next_dpr)),
            radius,
        );
        sides.regular(sp.point, offset, i <= 1, min_distance);

        sides.prev_pressure = pressure;
        sides.prev_vector = sp.vector;
    }

    let first_point = first.point;
    let last_point = if points.len() > 1 {
        last.point
    } else {
        vector::add(first_point, Vec2::new(1.0, 1.0))
    };
    let first_radius = first_radius.unwrap_or(radius);
    let start_tapered = taper_start != 0.0;
    let end_tapered = taper_end != 0.0;

    let mut start_cap = Vec::new();
    let mut end_cap = Vec::new();

    if points.len() == 1 {
        if !(start_tapered || end_tapered) || options.last {
            log::debug!("single stroke point, drawing a dot of radius {first_radius}");
            let start = vector::project(
                first_point,
                vector::unit(vector::per(vector::sub(first_point, last_point))),
                -first_radius,
            );
            return fan(start, first_point, 2.0, 13).collect();
        }
    } else {
        if !start_tapered {
            match options.cap_start {
                Cap::Round => {
                    if let Some(&right) = sides.right.first() {
                        start_cap.extend(fan(right, first_point, 1.0, 13));
                    }
                }
                Cap::Flat => {
                    if let (Some(&l), Some(&r)) = (sides.left.first(), sides.right.first()) {
                        let corners = vector::sub(l, r);
                        let a = vector::mul(corners, 0.5);
                        let b = vector::mul(corners, 0.51);
                        start_cap.extend([
                            vector::add(first_point, vector::neg(a)),
                            vector::add(first_point, vector::neg(b)),
                            vector::add(first_point, b),
                            vector::add(first_point, a),
                        ]);
                    }
                }
            }
        }

        let direction = vector::per(vector::neg(last.vector));
        if end_tapered {
            end_cap.push(last_point);
        } else {
            match options.cap_end {
                Cap::Round => {
                    // One and a half turns, so sharp final turns still get a
                    // full cap.
                    let start = vector::project(last_point, direction, radius);
                    end_cap.extend(fan(start, last_point, 3.0, 29));
                }
                Cap::Flat => {
                    end_cap.extend([
                        vector::project(last_point, direction, radius),
                        vector::project(last_point, direction, radius * 0.99),
                        vector::project(last_point, direction, -(radius * 0.99)),
                        vector::project(last_point, direction, -radius),
                    ]);
                }
            }
        }
    }

    let Sides {
        mut left, right, ..
    } = sides;
    left.reserve(end_cap.len() + right.len() + start_cap.len());
    left.extend(end_cap);
    left.extend(right.into_iter().rev());
    left.extend(start_cap);
    left
}

/// Turn an outline into a closed path suitable for filling.
///
/// An empty outline gives an empty path.
///
/// ```
/// use understory_freehand::{StrokeOptions, outline_path, stroke};
///
/// let outline = stroke([[0.0, 0.0], [30.0, 10.0], [60.0, 0.0]], &StrokeOptions::DEFAULT);
/// let path = outline_path(&outline);
/// assert_eq!(path.elements().len(), outline.len() + 1);
/// ```
#[must_use]
pub fn outline_path(outline: &[Point]) -> BezPath {
    let mut path = BezPath::new();
    let mut pts = outline.iter().copied();
    if let Some(start) = pts.next() {
        path.move_to(start);
        for p in pts {
            path.line_to(p);
        }
        path.close_path();
    }
    path
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::options::Taper;
    use crate::points::stroke_points;
    use alloc::vec;
    use kurbo::{PathEl, Shape};

    fn all_finite(outline: &[Point]) -> bool {
        outline.iter().all(|p| p.is_finite())
    }

    fn line(n: u32, step: f64) -> Vec<[f64; 2]> {
        (0..n).map(|i| [f64::from(i) * step, 0.0]).collect()
    }

    #[test]
    fn empty_and_non_positive_size_give_nothing() {
        assert!(stroke_outline(&[], &StrokeOptions::DEFAULT).is_empty());

        let pts = stroke_points(line(10, 5.0), &StrokeOptions::DEFAULT);
        assert!(!pts.is_empty());
        assert!(stroke_outline(&pts, &StrokeOptions::size(0.0)).is_empty());
        assert!(stroke_outline(&pts, &StrokeOptions::size(-3.0)).is_empty());
    }

    #[test]
    fn single_point_draws_a_dot() {
        let pts = stroke_points([[1.0, 1.0, 0.0], [1.0, 1.0, 0.0]], &StrokeOptions::DEFAULT);
        assert_eq!(pts.len(), 1);
        let dot = stroke_outline(&pts, &StrokeOptions::DEFAULT);
        assert_eq!(dot.len(), 13);
        let center = Point::new(1.0, 1.0);
        let r0 = vector::dist(dot[0], center);
        for p in &dot {
            assert!((vector::dist(*p, center) - r0).abs() < 1e-9);
        }
    }

    #[test]
    fn tapered_single_point_skips_the_dot_until_last() {
        let pts = stroke_points([[1.0, 1.0], [1.0, 1.0]], &StrokeOptions::DEFAULT);
        let tapered = StrokeOptions::DEFAULT.with_start_taper(Taper::Auto);
        let open = stroke_outline(&pts, &tapered);
        assert_eq!(open.len(), 2);
        assert_eq!(open[0], open[1]);

        let done = stroke_outline(&pts, &tapered.with_last(true));
        assert_eq!(done.len(), 13);
    }

    #[test]
    fn caps_are_emitted() {
        let pts = stroke_points(line(20, 4.0), &StrokeOptions::DEFAULT);
        let round = stroke_outline(&pts, &StrokeOptions::DEFAULT);
        let flat = stroke_outline(&pts, &StrokeOptions::DEFAULT.with_cap(Cap::Flat));
        assert!(round.len() > 4);
        // Round: 13 start + 29 end; flat: 4 + 4.
        assert_eq!(round.len() - flat.len(), 13 + 29 - 8);
        assert!(all_finite(&round) && all_finite(&flat));
    }

    #[test]
    fn tapered_end_closes_on_the_last_point() {
        let opts = StrokeOptions::DEFAULT.with_end_taper(Taper::Auto).with_last(true);
        let pts = stroke_points(line(20, 4.0), &opts);
        let outline = stroke_outline(&pts, &opts);
        let last = pts.last().expect("points").point;
        assert!(outline.contains(&last));
    }

    #[test]
    fn zero_and_negative_taper_distances() {
        let input = line(20, 4.0);
        let pts = stroke_points(&input, &StrokeOptions::DEFAULT);
        let off = stroke_outline(&pts, &StrokeOptions::DEFAULT);

        let zero = StrokeOptions::DEFAULT
            .with_start_taper(Taper::Distance(0.0))
            .with_end_taper(Taper::Distance(0.0));
        assert_eq!(stroke_outline(&pts, &zero), off);

        // A negative distance drops both caps but never narrows the sides.
        let negative = StrokeOptions::DEFAULT
            .with_start_taper(Taper::Distance(-5.0))
            .with_end_taper(Taper::Distance(-5.0));
        let tapered = stroke_outline(&pts, &negative);
        assert_eq!(tapered.len(), off.len() - 13 - 29 + 1);

        let last = pts.last().expect("points").point;
        let split = tapered
            .iter()
            .position(|p| *p == last)
            .expect("end is the last stroke point");
        assert_eq!(tapered[..split], off[..split]);
        assert_eq!(tapered[split + 1..], off[split + 29..off.len() - 13]);
    }

    #[test]
    fn zero_thinning_is_constant_width() {
        let opts = StrokeOptions::DEFAULT
            .with_thinning(0.0)
            .with_last(true)
            .with_smoothing(0.0);
        let pts = stroke_points(line(30, 3.0), &opts);
        let outline = stroke_outline(&pts, &opts);
        // Along a horizontal line the sides sit at +-size/2.
        let sides: Vec<_> = outline
            .iter()
            .filter(|p| p.x > 20.0 && p.x < 60.0)
            .collect();
        assert!(!sides.is_empty());
        for p in sides {
            assert!((p.y.abs() - 8.0).abs() < 1e-9, "unexpected {p:?}");
        }
    }

    #[test]
    fn reversal_draws_a_corner_fan() {
        let mut input = line(10, 5.0);
        input.extend((0..10).rev().map(|i| [f64::from(i) * 5.0, 1.0]));
        let opts = StrokeOptions::size(4.0).with_last(true);
        let pts = stroke_points(&input, &opts);
        let outline = stroke_outline(&pts, &opts);
        assert!(all_finite(&outline));
        // A straight run without the turn has far fewer points.
        let straight = stroke_outline(&stroke_points(line(10, 5.0), &opts), &opts);
        assert!(outline.len() >= straight.len() + 14);
    }

    #[test]
    fn deterministic() {
        let input = vec![[0.0, 0.0, 0.2], [5.0, 3.0, 0.4], [12.0, 9.0, 0.9], [30.0, 2.0, 0.6]];
        let opts = StrokeOptions::size(6.0).with_simulate_pressure(false);
        let a = stroke_outline(&stroke_points(&input, &opts), &opts);
        let b = stroke_outline(&stroke_points(&input, &opts), &opts);
        assert_eq!(a, b);
    }

    #[test]
    fn simulated_pressure_tracks_speed() {
        assert_eq!(simulated_pressure(0.5, 0.0, 16.0), 0.5);
        // Slow movement raises the pressure, fast movement lowers it.
        assert!(simulated_pressure(0.5, 1.0, 16.0) > 0.5);
        assert!(simulated_pressure(0.5, 100.0, 16.0) < 0.5);
    }

    #[test]
    fn warmup_folds_from_the_first_point() {
        let pts = stroke_points(
            [[0.0, 0.0, 0.2], [10.0, 0.0, 0.6], [20.0, 0.0, 1.0]],
            &StrokeOptions::size(1.0).with_last(true),
        );
        assert_eq!(pts.len(), 3);
        // Recorded pressure: ((0.2 + 0.2) / 2 + 0.6) / 2, then with 1.0.
        let recorded = warmup_pressure(&pts[0], &pts, 1.0, false);
        assert!((recorded - 0.7).abs() < 1e-12);
        // A seed on its own is left untouched.
        assert_eq!(warmup_pressure(&pts[0], &pts[..1], 1.0, false), 0.2);
    }

    #[test]
    fn path_is_closed() {
        let outline = [
            Point::new(0.0, 0.0),
            Point::new(10.0, 0.0),
            Point::new(10.0, 10.0),
        ];
        let path = outline_path(&outline);
        assert_eq!(path.elements().first(), Some(&PathEl::MoveTo(outline[0])));
        assert_eq!(path.elements().last(), Some(&PathEl::ClosePath));
        assert!((path.area().abs() - 50.0).abs() < 1e-9);
        assert!(outline_path(&[]).elements().is_empty());
    }
}
