//! In-memory synthetic run: a jittered ring polygon and random points.
//!
//! Usage:
//!   cargo run -p pipbench --release --example synthetic -- [prepared|naive]
//!
//! Prints the summary of a 5-pass run over 10k points.

use geo_types::{Geometry, LineString, Polygon};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use pipbench::prelude::*;

fn ring_polygon(vertices: usize, seed: u64) -> Polygon<f64> {
    let mut rng = StdRng::seed_from_u64(seed);
    let coords: Vec<(f64, f64)> = (0..vertices)
        .map(|i| {
            let theta = i as f64 / vertices as f64 * std::f64::consts::TAU;
            let r = 1.0 + 0.25 * (rng.gen::<f64>() * 2.0 - 1.0);
            (r * theta.cos(), r * theta.sin())
        })
        .collect();
    Polygon::new(LineString::from(coords), vec![])
}

fn main() {
    let mode = match std::env::args().nth(1).as_deref() {
        Some("naive") => PredicateMode::Naive,
        Some("prepared") | None => PredicateMode::Prepared,
        Some(other) => {
            eprintln!("usage: synthetic [prepared|naive] (got {other:?})");
            std::process::exit(2);
        }
    };

    let polygons = vec![Geometry::Polygon(ring_polygon(128, 7))];
    let points: Vec<Geometry<f64>> = uniform_points(&SampleCfg {
        count: 10_000,
        bbox: Bbox {
            min_x: -1.5,
            min_y: -1.5,
            max_x: 1.5,
            max_y: 1.5,
        },
        seed: 42,
    })
    .into_iter()
    .map(Geometry::Point)
    .collect();

    let summary = run(
        &points,
        &polygons,
        mode,
        BenchCfg {
            iterations: 5,
            warmup: 1,
        },
    );
    println!(
        "mode={} points={} hits={} min={:.2}ms median={:.2}ms mean={:.2}ms",
        summary.mode.as_str(),
        summary.points,
        summary.hits,
        summary.min_ms(),
        summary.median_ms(),
        summary.mean_ms()
    );
}
