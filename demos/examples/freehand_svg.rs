// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Freehand stroke to SVG.
//!
//! This example shows how to:
//! - feed raw samples (from a JSON file, or a seeded random scribble) to
//!   `understory_freehand::stroke`,
//! - turn the outline into a closed `kurbo::BezPath` with `outline_path`,
//! - print the result as a small SVG document.
//!
//! Run:
//! - `cargo run -p understory_freehand_demos --example freehand_svg > stroke.svg`
//! - `RUST_LOG=trace cargo run -p understory_freehand_demos --example freehand_svg -- --input points.json --last`
//!
//! The input file holds a JSON array of `[x, y]`, `[x, y, pressure]` or
//! `{"x": .., "y": .., "pressure": ..}` samples.

use std::error::Error;
use std::fs;
use std::path::PathBuf;

use clap::Parser;
use kurbo::{Rect, Shape};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use understory_freehand::{Cap, InputPoint, StrokeOptions, Taper, outline_path, stroke};

#[derive(Debug, Parser)]
#[command(about = "Render a pressure-sensitive freehand stroke as SVG")]
struct Args {
    /// JSON file with input samples; a random scribble is drawn when omitted.
    #[arg(long)]
    input: Option<PathBuf>,

    /// Seed for the random scribble.
    #[arg(long, default_value_t = 1)]
    seed: u64,

    /// Number of samples in the random scribble.
    #[arg(long, default_value_t = 48)]
    samples: usize,

    /// Base diameter of the stroke.
    #[arg(long, default_value_t = StrokeOptions::DEFAULT_SIZE)]
    size: f64,

    /// Effect of pressure on the stroke width.
    #[arg(long, default_value_t = StrokeOptions::DEFAULT_THINNING, allow_negative_numbers = true)]
    thinning: f64,

    /// Softening of the stroke edges.
    #[arg(long, default_value_t = StrokeOptions::DEFAULT_SMOOTHING)]
    smoothing: f64,

    /// Streamlining of the input positions.
    #[arg(long, default_value_t = StrokeOptions::DEFAULT_STREAMLINE)]
    streamline: f64,

    /// Use recorded pressure instead of simulating it from velocity.
    #[arg(long)]
    recorded_pressure: bool,

    /// Treat the samples as a finished stroke.
    #[arg(long)]
    last: bool,

    /// Taper distance at the start; `0` disables, a negative value tapers
    /// over the whole stroke.
    #[arg(long, default_value_t = 0.0, allow_negative_numbers = true)]
    taper_start: f64,

    /// Taper distance at the end; `0` disables, a negative value tapers over
    /// the whole stroke.
    #[arg(long, default_value_t = 0.0, allow_negative_numbers = true)]
    taper_end: f64,

    /// Draw flat caps instead of round ones.
    #[arg(long)]
    flat_caps: bool,
}

fn taper(distance: f64) -> Taper {
    if distance < 0.0 {
        Taper::Auto
    } else {
        Taper::from(distance)
    }
}

impl Args {
    fn options(&self) -> StrokeOptions {
        StrokeOptions::size(self.size)
            .with_thinning(self.thinning)
            .with_smoothing(self.smoothing)
            .with_streamline(self.streamline)
            .with_simulate_pressure(!self.recorded_pressure)
            .with_last(self.last)
            .with_cap(if self.flat_caps { Cap::Flat } else { Cap::Round })
            .with_start_taper(taper(self.taper_start))
            .with_end_taper(taper(self.taper_end))
    }
}

/// A wandering scribble with slowly varying pressure.
fn scribble(seed: u64, samples: usize) -> Vec<InputPoint> {
    let mut rng = StdRng::seed_from_u64(seed);
    let mut pos = (100.0, 200.0);
    let mut heading: f64 = 0.0;
    let mut pressure = 0.5;
    (0..samples)
        .map(|_| {
            heading += rng.gen_range(-0.6..0.6);
            let step = rng.gen_range(4.0..14.0);
            pos.0 += heading.cos() * step;
            pos.1 += heading.sin() * step;
            pressure = (pressure + rng.gen_range(-0.1..0.1_f64)).clamp(0.1, 1.0);
            InputPoint::with_pressure(pos.0, pos.1, pressure)
        })
        .collect()
}

fn main() -> Result<(), Box<dyn Error>> {
    env_logger::init();
    let args = Args::parse();

    let samples: Vec<InputPoint> = match &args.input {
        Some(path) => serde_json::from_str(&fs::read_to_string(path)?)?,
        None => scribble(args.seed, args.samples),
    };
    log::info!("read {} samples", samples.len());

    let outline = stroke(&samples, &args.options());
    let path = outline_path(&outline);
    let bounds = if outline.is_empty() {
        Rect::ZERO
    } else {
        path.bounding_box().inflate(10.0, 10.0)
    };
    log::info!("outline has {} points, bounds {bounds:?}", outline.len());

    println!(
        r#"<svg xmlns="http://www.w3.org/2000/svg" viewBox="{} {} {} {}">"#,
        bounds.x0,
        bounds.y0,
        bounds.width(),
        bounds.height()
    );
    println!(r#"  <path fill="black" d="{}"/>"#, path.to_svg());
    println!("</svg>");
    Ok(())
}
