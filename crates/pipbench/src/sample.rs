//! Deterministic point datasets.
//!
//! Model
//! - Uniform draws over a lon/lat box from a seeded `StdRng`; the same
//!   `SampleCfg` always reproduces the same dataset, so generated inputs
//!   can be regenerated instead of checked in.

use geo_types::Point;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Axis-aligned sampling window.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Bbox {
    pub min_x: f64,
    pub min_y: f64,
    pub max_x: f64,
    pub max_y: f64,
}

impl Default for Bbox {
    /// The whole lon/lat plane.
    fn default() -> Self {
        Self {
            min_x: -180.0,
            min_y: -90.0,
            max_x: 180.0,
            max_y: 90.0,
        }
    }
}

/// Sampler configuration.
#[derive(Clone, Copy, Debug)]
pub struct SampleCfg {
    pub count: usize,
    pub bbox: Bbox,
    pub seed: u64,
}

impl Default for SampleCfg {
    fn default() -> Self {
        Self {
            count: 1000,
            bbox: Bbox::default(),
            seed: 0,
        }
    }
}

/// Draw `cfg.count` uniform points inside `cfg.bbox`.
pub fn uniform_points(cfg: &SampleCfg) -> Vec<Point<f64>> {
    let mut rng = StdRng::seed_from_u64(cfg.seed);
    (0..cfg.count)
        .map(|_| {
            let x = draw(&mut rng, cfg.bbox.min_x, cfg.bbox.max_x);
            let y = draw(&mut rng, cfg.bbox.min_y, cfg.bbox.max_y);
            Point::new(x, y)
        })
        .collect()
}

// A degenerate axis (min == max) pins the coordinate.
fn draw<R: Rng>(rng: &mut R, min: f64, max: f64) -> f64 {
    if max > min {
        rng.gen_range(min..max)
    } else {
        min
    }
}
