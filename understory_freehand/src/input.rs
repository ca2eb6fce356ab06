// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Raw pointer samples accepted by the pipeline.

use kurbo::Point;

/// Pressure used for a labeled sample that carries none.
const LABELED_DEFAULT_PRESSURE: f64 = 0.5;

/// One raw pointer sample as captured from a stylus, mouse or touch device.
///
/// Samples come in two shapes, which only differ in how a missing pressure is
/// filled in:
///
/// - [`InputPoint::Positional`] is the `(x, y)` / `(x, y, pressure)` tuple
///   form. A missing pressure is resolved from context by the normalizer:
///   `0.25` for the very first sample of a stroke and `0.5` everywhere else.
/// - [`InputPoint::Labeled`] is the `{ x, y, pressure? }` record form. A
///   missing pressure is always `0.5`.
///
/// With the `serde` feature, both shapes deserialize from JSON-like data:
/// `[x, y]`, `[x, y, pressure]` or `{"x": .., "y": .., "pressure": ..}`.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(from = "repr::Repr", into = "repr::Repr")
)]
pub enum InputPoint {
    /// A tuple or array sample.
    Positional {
        /// Horizontal coordinate.
        x: f64,
        /// Vertical coordinate.
        y: f64,
        /// Optional stylus pressure, nominally in `[0, 1]`.
        pressure: Option<f64>,
    },
    /// A record sample with named fields.
    Labeled {
        /// Horizontal coordinate.
        x: f64,
        /// Vertical coordinate.
        y: f64,
        /// Optional stylus pressure, nominally in `[0, 1]`.
        pressure: Option<f64>,
    },
}

impl InputPoint {
    /// A positional sample without pressure.
    #[must_use]
    pub const fn new(x: f64, y: f64) -> Self {
        Self::Positional {
            x,
            y,
            pressure: None,
        }
    }

    /// A positional sample with pressure.
    #[must_use]
    pub const fn with_pressure(x: f64, y: f64, pressure: f64) -> Self {
        Self::Positional {
            x,
            y,
            pressure: Some(pressure),
        }
    }

    /// A labeled sample, as produced by record-shaped input.
    #[must_use]
    pub const fn labeled(x: f64, y: f64, pressure: Option<f64>) -> Self {
        Self::Labeled { x, y, pressure }
    }

    /// The sample position.
    #[must_use]
    pub const fn point(&self) -> Point {
        match *self {
            Self::Positional { x, y, .. } | Self::Labeled { x, y, .. } => Point::new(x, y),
        }
    }

    /// Collapse either shape into the uniform internal sample.
    pub(crate) fn to_sample(self) -> Sample {
        let (point, pressure) = match self {
            Self::Positional { x, y, pressure } => (Point::new(x, y), pressure),
            Self::Labeled { x, y, pressure } => (
                Point::new(x, y),
                Some(pressure.unwrap_or(LABELED_DEFAULT_PRESSURE)),
            ),
        };
        debug_assert!(
            point.is_finite() && pressure.is_none_or(f64::is_finite),
            "input samples must be finite; got {point:?} with pressure {pressure:?}"
        );
        Sample { point, pressure }
    }
}

/// A raw sample after boundary normalization.
///
/// `pressure` is `None` when the caller gave none (or the sample was
/// synthesized); the normalizer picks the contextual default.
#[derive(Clone, Copy, Debug, PartialEq)]
pub(crate) struct Sample {
    pub(crate) point: Point,
    pub(crate) pressure: Option<f64>,
}

impl Sample {
    pub(crate) const fn synthesized(point: Point) -> Self {
        Self {
            point,
            pressure: None,
        }
    }
}

impl From<(f64, f64)> for InputPoint {
    fn from((x, y): (f64, f64)) -> Self {
        Self::new(x, y)
    }
}

impl From<(f64, f64, f64)> for InputPoint {
    fn from((x, y, pressure): (f64, f64, f64)) -> Self {
        Self::with_pressure(x, y, pressure)
    }
}

impl From<[f64; 2]> for InputPoint {
    fn from([x, y]: [f64; 2]) -> Self {
        Self::new(x, y)
    }
}

impl From<[f64; 3]> for InputPoint {
    fn from([x, y, pressure]: [f64; 3]) -> Self {
        Self::with_pressure(x, y, pressure)
    }
}

impl From<Point> for InputPoint {
    fn from(p: Point) -> Self {
        Self::new(p.x, p.y)
    }
}

macro_rules! from_ref {
    ($($ty:ty),*) => {
        $(
            impl From<&$ty> for InputPoint {
                fn from(value: &$ty) -> Self {
                    (*value).into()
                }
            }
        )*
    };
}

from_ref!((f64, f64), (f64, f64, f64), [f64; 2], [f64; 3], Point);

impl From<&Self> for InputPoint {
    fn from(value: &Self) -> Self {
        *value
    }
}

#[cfg(feature = "serde")]
mod repr {
    use super::InputPoint;

    /// Wire shape of an [`InputPoint`].
    #[derive(serde::Serialize, serde::Deserialize)]
    #[serde(untagged)]
    pub(super) enum Repr {
        Triple(f64, f64, f64),
        Pair(f64, f64),
        Labeled {
            x: f64,
            y: f64,
            #[serde(default, skip_serializing_if = "Option::is_none")]
            pressure: Option<f64>,
        },
    }

    impl From<Repr> for InputPoint {
        fn from(repr: Repr) -> Self {
            match repr {
                Repr::Triple(x, y, p) => Self::with_pressure(x, y, p),
                Repr::Pair(x, y) => Self::new(x, y),
                Repr::Labeled { x, y, pressure } => Self::labeled(x, y, pressure),
            }
        }
    }

    impl From<InputPoint> for Repr {
        fn from(point: InputPoint) -> Self {
            match point {
                InputPoint::Positional {
                    x,
                    y,
                    pressure: Some(p),
                } => Self::Triple(x, y, p),
                InputPoint::Positional {
                    x,
                    y,
                    pressure: None,
                } => Self::Pair(x, y),
                InputPoint::Labeled { x, y, pressure } => Self::Labeled { x, y, pressure },
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn positional_keeps_missing_pressure_open() {
        let s = InputPoint::from((1.0, 2.0)).to_sample();
        assert_eq!(s.point, Point::new(1.0, 2.0));
        assert_eq!(s.pressure, None);

        let s = InputPoint::from([1.0, 2.0, 0.7]).to_sample();
        assert_eq!(s.pressure, Some(0.7));
    }

    #[test]
    fn labeled_defaults_pressure_eagerly() {
        let s = InputPoint::labeled(3.0, 4.0, None).to_sample();
        assert_eq!(s.pressure, Some(0.5));
        let s = InputPoint::labeled(3.0, 4.0, Some(0.1)).to_sample();
        assert_eq!(s.pressure, Some(0.1));
    }

    #[test]
    fn conversions_from_references() {
        let pts = [[0.0, 0.0], [1.0, 1.0]];
        let converted: alloc::vec::Vec<InputPoint> = pts.iter().map(InputPoint::from).collect();
        assert_eq!(converted[1].point(), Point::new(1.0, 1.0));
        assert_eq!(InputPoint::from(&Point::new(5.0, 6.0)), InputPoint::new(5.0, 6.0));
    }

    #[cfg(feature = "serde")]
    #[test]
    fn deserializes_every_shape() {
        let pts: alloc::vec::Vec<InputPoint> = serde_json::from_str(
            r#"[[1, 2], [3, 4, 0.25], {"x": 5, "y": 6}, {"x": 7, "y": 8, "pressure": 0.9}]"#,
        )
        .expect("valid points");
        assert_eq!(pts[0], InputPoint::new(1.0, 2.0));
        assert_eq!(pts[1], InputPoint::with_pressure(3.0, 4.0, 0.25));
        assert_eq!(pts[2], InputPoint::labeled(5.0, 6.0, None));
        assert_eq!(pts[3], InputPoint::labeled(7.0, 8.0, Some(0.9)));

        let json = serde_json::to_string(&pts).expect("serializable");
        assert_eq!(
            json,
            r#"[[1.0,2.0],[3.0,4.0,0.25],{"x":5.0,"y":6.0},{"x":7.0,"y":8.0,"pressure":0.9}]"#
        );
    }
}
