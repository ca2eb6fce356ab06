// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Configuration shared by both pipeline stages.

use crate::radius::{Easing, ease_out_quad, ease_taper_end, linear};

/// How far a stroke end narrows towards a point.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Taper {
    /// No taper.
    #[default]
    Off,
    /// Taper over the whole stroke: `max(size, total_length)`.
    Auto,
    /// Taper over a fixed distance along the stroke.
    ///
    /// `Distance(0.0)` is the same as [`Taper::Off`]. A negative distance
    /// never narrows the radius, but it still counts as tapered when
    /// deciding whether to draw a cap.
    Distance(f64),
}

impl Taper {
    /// Resolve the taper to a distance along the stroke; `0.0` means no taper.
    #[must_use]
    pub fn resolve(self, size: f64, total_length: f64) -> f64 {
        match self {
            Self::Off => 0.0,
            Self::Auto => size.max(total_length),
            Self::Distance(d) => d,
        }
    }
}

impl From<bool> for Taper {
    fn from(enabled: bool) -> Self {
        if enabled { Self::Auto } else { Self::Off }
    }
}

impl From<f64> for Taper {
    fn from(distance: f64) -> Self {
        Self::Distance(distance)
    }
}

/// Geometry drawn at a stroke end that is not tapered.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Cap {
    /// A half-circle (start) or an over-drawn circular sweep (end).
    #[default]
    Round,
    /// A squared-off end, no wider than the stroke.
    Flat,
}

#[cfg(feature = "serde")]
fn default_easing() -> Easing {
    linear
}

#[cfg(feature = "serde")]
fn default_taper_start_easing() -> Easing {
    ease_out_quad
}

#[cfg(feature = "serde")]
fn default_taper_end_easing() -> Easing {
    ease_taper_end
}

/// Parameters for turning raw samples into a stroke outline.
///
/// Each stage reads only what it needs: [`stroke_points`](crate::stroke_points)
/// uses `size`, `streamline` and `last`; [`stroke_outline`](crate::stroke_outline)
/// uses everything except `streamline`.
///
/// With the `serde` feature the easing functions are not serialized; they
/// deserialize as the defaults.
#[derive(Clone, Copy, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct StrokeOptions {
    /// Base diameter of the stroke.
    ///
    /// Default value: `StrokeOptions::DEFAULT_SIZE`.
    pub size: f64,

    /// Effect of pressure on the stroke width, roughly in `[-1, 1]`.
    ///
    /// Zero gives a constant width; negative values invert the response.
    /// Default value: `StrokeOptions::DEFAULT_THINNING`.
    pub thinning: f64,

    /// How much to soften the stroke edges by dropping near side points.
    ///
    /// Default value: `StrokeOptions::DEFAULT_SMOOTHING`.
    pub smoothing: f64,

    /// How strongly input positions are streamlined (lagged) towards the
    /// raw samples. Values outside `[0, 1]` extrapolate.
    ///
    /// Default value: `StrokeOptions::DEFAULT_STREAMLINE`.
    pub streamline: f64,

    /// Response curve from pressure to radius.
    #[cfg_attr(feature = "serde", serde(skip, default = "default_easing"))]
    pub easing: Easing,

    /// Derive pressure from pointer velocity instead of the recorded values.
    ///
    /// Default value: `true`.
    pub simulate_pressure: bool,

    /// Treat the samples as a finished stroke that ends exactly at the last
    /// sample, rather than slightly behind it.
    ///
    /// Default value: `false`.
    pub last: bool,

    /// Cap drawn at the start when it is not tapered.
    ///
    /// Default value: `Cap::Round`.
    pub cap_start: Cap,

    /// Taper at the start of the stroke.
    ///
    /// Default value: `Taper::Off`.
    pub taper_start: Taper,

    /// Shaping curve for the start taper.
    ///
    /// Default value: [`ease_out_quad`].
    #[cfg_attr(feature = "serde", serde(skip, default = "default_taper_start_easing"))]
    pub taper_start_easing: Easing,

    /// Cap drawn at the end when it is not tapered.
    ///
    /// Default value: `Cap::Round`.
    pub cap_end: Cap,

    /// Taper at the end of the stroke.
    ///
    /// Default value: `Taper::Off`.
    pub taper_end: Taper,

    /// Shaping curve for the end taper.
    ///
    /// Default value: [`ease_taper_end`].
    #[cfg_attr(feature = "serde", serde(skip, default = "default_taper_end_easing"))]
    pub taper_end_easing: Easing,
}

impl StrokeOptions {
    /// Default base diameter.
    pub const DEFAULT_SIZE: f64 = 16.0;
    /// Default thinning.
    pub const DEFAULT_THINNING: f64 = 0.5;
    /// Default smoothing.
    pub const DEFAULT_SMOOTHING: f64 = 0.5;
    /// Default streamline.
    pub const DEFAULT_STREAMLINE: f64 = 0.5;

    /// The default options.
    pub const DEFAULT: Self = Self {
        size: Self::DEFAULT_SIZE,
        thinning: Self::DEFAULT_THINNING,
        smoothing: Self::DEFAULT_SMOOTHING,
        streamline: Self::DEFAULT_STREAMLINE,
        easing: linear,
        simulate_pressure: true,
        last: false,
        cap_start: Cap::Round,
        taper_start: Taper::Off,
        taper_start_easing: ease_out_quad,
        cap_end: Cap::Round,
        taper_end: Taper::Off,
        taper_end_easing: ease_taper_end,
    };

    /// Default options with the given size.
    #[inline]
    #[must_use]
    pub const fn size(size: f64) -> Self {
        Self::DEFAULT.with_size(size)
    }

    /// Set the base diameter.
    #[inline]
    #[must_use]
    pub const fn with_size(mut self, size: f64) -> Self {
        self.size = size;
        self
    }

    /// Set the thinning.
    #[inline]
    #[must_use]
    pub const fn with_thinning(mut self, thinning: f64) -> Self {
        self.thinning = thinning;
        self
    }

    /// Set the smoothing.
    #[inline]
    #[must_use]
    pub const fn with_smoothing(mut self, smoothing: f64) -> Self {
        self.smoothing = smoothing;
        self
    }

    /// Set the streamline.
    #[inline]
    #[must_use]
    pub const fn with_streamline(mut self, streamline: f64) -> Self {
        self.streamline = streamline;
        self
    }

    /// Set the pressure easing.
    #[inline]
    #[must_use]
    pub const fn with_easing(mut self, easing: Easing) -> Self {
        self.easing = easing;
        self
    }

    /// Enable or disable velocity-based pressure.
    #[inline]
    #[must_use]
    pub const fn with_simulate_pressure(mut self, simulate: bool) -> Self {
        self.simulate_pressure = simulate;
        self
    }

    /// Mark the stroke as finished.
    #[inline]
    #[must_use]
    pub const fn with_last(mut self, last: bool) -> Self {
        self.last = last;
        self
    }

    /// Set the cap for both ends.
    #[inline]
    #[must_use]
    pub const fn with_cap(mut self, cap: Cap) -> Self {
        self.cap_start = cap;
        self.cap_end = cap;
        self
    }

    /// Set the start cap.
    #[inline]
    #[must_use]
    pub const fn with_start_cap(mut self, cap: Cap) -> Self {
        self.cap_start = cap;
        self
    }

    /// Set the end cap.
    #[inline]
    #[must_use]
    pub const fn with_end_cap(mut self, cap: Cap) -> Self {
        self.cap_end = cap;
        self
    }

    /// Set the start taper.
    #[inline]
    #[must_use]
    pub const fn with_start_taper(mut self, taper: Taper) -> Self {
        self.taper_start = taper;
        self
    }

    /// Set the end taper.
    #[inline]
    #[must_use]
    pub const fn with_end_taper(mut self, taper: Taper) -> Self {
        self.taper_end = taper;
        self
    }

    /// Set the start taper curve.
    #[inline]
    #[must_use]
    pub const fn with_start_easing(mut self, easing: Easing) -> Self {
        self.taper_start_easing = easing;
        self
    }

    /// Set the end taper curve.
    #[inline]
    #[must_use]
    pub const fn with_end_easing(mut self, easing: Easing) -> Self {
        self.taper_end_easing = easing;
        self
    }
}

impl Default for StrokeOptions {
    fn default() -> Self {
        Self::DEFAULT
    }
}
