// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Randomized option sweeps: outlines stay finite and reproducible.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use understory_freehand::{Cap, InputPoint, StrokeOptions, Taper, stroke};

const ROUNDS: usize = 500;

fn strokes() -> Vec<Vec<InputPoint>> {
    let mut out = vec![
        vec![InputPoint::with_pressure(1.0, 1.0, 0.0)],
        vec![
            InputPoint::with_pressure(0.0, 0.0, 0.5),
            InputPoint::with_pressure(10.0, 10.0, 0.5),
        ],
        vec![
            InputPoint::with_pressure(1.0, 1.0, 0.0),
            InputPoint::with_pressure(1.0, 1.0, 0.0),
        ],
        vec![
            InputPoint::new(0.0, 0.0),
            InputPoint::new(0.0, 0.0),
            InputPoint::new(5.0, 5.0),
            InputPoint::new(5.0, 5.0),
            InputPoint::new(12.0, 9.0),
            InputPoint::new(20.0, 12.0),
            InputPoint::new(20.0, 12.0),
        ],
        // Hairpin turns.
        [0.0, 40.0, 0.0, 40.0, 0.0]
            .iter()
            .enumerate()
            .map(|(i, &x)| InputPoint::labeled(x, i as f64, None))
            .collect(),
    ];

    let mut rng = StdRng::seed_from_u64(0x5eed);
    for len in [3, 10, 60] {
        let mut x = 0.0;
        let mut y = 0.0;
        out.push(
            (0..len)
                .map(|_| {
                    x += rng.gen_range(-20.0..20.0);
                    y += rng.gen_range(-20.0..20.0);
                    InputPoint::with_pressure(x, y, rng.gen_range(0.0..1.0))
                })
                .collect(),
        );
    }
    out
}

fn random_taper(rng: &mut StdRng) -> Taper {
    match rng.gen_range(0..3) {
        0 => Taper::Off,
        1 => Taper::Auto,
        _ => Taper::Distance(rng.gen_range(-100.0..100.0)),
    }
}

fn random_cap(rng: &mut StdRng) -> Cap {
    if rng.gen_bool(0.5) { Cap::Round } else { Cap::Flat }
}

#[test]
fn random_options_give_finite_outlines() {
    let mut rng = StdRng::seed_from_u64(7);
    for input in strokes() {
        for _ in 0..ROUNDS {
            let options = StrokeOptions::size(rng.gen_range(-100.0..100.0))
                .with_thinning(rng.gen_range(-1.0..1.0))
                .with_streamline(rng.gen_range(-1.0..1.0))
                .with_smoothing(rng.gen_range(-1.0..1.0))
                .with_simulate_pressure(rng.gen_bool(0.75))
                .with_last(rng.gen_bool(0.25))
                .with_start_cap(random_cap(&mut rng))
                .with_end_cap(random_cap(&mut rng))
                .with_start_taper(random_taper(&mut rng))
                .with_end_taper(random_taper(&mut rng));

            let outline = stroke(&input, &options);
            assert!(
                outline.iter().all(|p| p.is_finite()),
                "non-finite outline for {options:?} and {input:?}"
            );
            if options.size <= 0.0 {
                assert!(outline.is_empty());
            }
        }
    }
}

#[test]
fn repeated_calls_are_bit_identical() {
    let mut rng = StdRng::seed_from_u64(11);
    for input in strokes() {
        let options = StrokeOptions::size(rng.gen_range(1.0..40.0))
            .with_thinning(rng.gen_range(-1.0..1.0))
            .with_start_taper(random_taper(&mut rng))
            .with_end_taper(random_taper(&mut rng));
        let first = stroke(&input, &options);
        let second = stroke(&input, &options);
        assert_eq!(first.len(), second.len());
        for (a, b) in first.iter().zip(&second) {
            assert_eq!(a.x.to_bits(), b.x.to_bits());
            assert_eq!(a.y.to_bits(), b.y.to_bits());
        }
    }
}
