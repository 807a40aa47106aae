//! The timed containment run.
//!
//! Only the predicate loop is measured. File reading, parsing, and
//! preparation all happen before the clock starts, matching the usual
//! prepared-geometry benchmark protocol.

use std::time::Instant;

use geo_types::Geometry;

use crate::prepared::{contains_naive, PredicateMode, PreparedSet};

/// Run configuration.
///
/// The defaults (one timed pass, no warmup) reproduce a one-shot run.
#[derive(Clone, Copy, Debug)]
pub struct BenchCfg {
    pub iterations: usize,
    pub warmup: usize,
}

impl Default for BenchCfg {
    fn default() -> Self {
        Self {
            iterations: 1,
            warmup: 0,
        }
    }
}

/// Outcome of a run: per-pass wall times plus the hit count.
#[derive(Clone, Debug)]
pub struct RunSummary {
    pub mode: PredicateMode,
    pub points: usize,
    pub polygons: usize,
    /// Probes contained by at least one polygon member. Identical across
    /// passes, so a single figure suffices.
    pub hits: usize,
    pub samples_ms: Vec<f64>,
}

impl RunSummary {
    pub fn min_ms(&self) -> f64 {
        if self.samples_ms.is_empty() {
            return 0.0;
        }
        self.samples_ms
            .iter()
            .copied()
            .fold(f64::INFINITY, f64::min)
    }

    pub fn mean_ms(&self) -> f64 {
        if self.samples_ms.is_empty() {
            return 0.0;
        }
        self.samples_ms.iter().sum::<f64>() / self.samples_ms.len() as f64
    }

    pub fn median_ms(&self) -> f64 {
        let mut sorted = self.samples_ms.clone();
        sorted.sort_by(|a, b| a.partial_cmp(b).unwrap_or(std::cmp::Ordering::Equal));
        let n = sorted.len();
        if n == 0 {
            0.0
        } else if n % 2 == 1 {
            sorted[n / 2]
        } else {
            0.5 * (sorted[n / 2 - 1] + sorted[n / 2])
        }
    }
}

/// Time containment of every point against the polygon set.
///
/// `cfg.iterations` is clamped to at least one timed pass.
pub fn run(
    points: &[Geometry<f64>],
    polygons: &[Geometry<f64>],
    mode: PredicateMode,
    cfg: BenchCfg,
) -> RunSummary {
    let iterations = cfg.iterations.max(1);
    let prepared = match mode {
        PredicateMode::Prepared => Some(PreparedSet::build(polygons)),
        PredicateMode::Naive => None,
    };
    let pass = || match &prepared {
        Some(set) => points.iter().filter(|p| set.contains(p)).count(),
        None => points.iter().filter(|p| contains_naive(polygons, p)).count(),
    };

    for _ in 0..cfg.warmup {
        pass();
    }

    let mut hits = 0;
    let mut samples_ms = Vec::with_capacity(iterations);
    for _ in 0..iterations {
        let start = Instant::now();
        hits = pass();
        samples_ms.push(start.elapsed().as_secs_f64() * 1_000.0);
    }

    RunSummary {
        mode,
        points: points.len(),
        polygons: polygons.len(),
        hits,
        samples_ms,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use geo_types::{polygon, Point};

    fn fixture() -> (Vec<Geometry<f64>>, Vec<Geometry<f64>>) {
        let polygons = vec![Geometry::Polygon(polygon![
            (x: 0.0, y: 0.0),
            (x: 1.0, y: 0.0),
            (x: 1.0, y: 1.0),
            (x: 0.0, y: 1.0),
        ])];
        let points = vec![
            Geometry::Point(Point::new(0.5, 0.5)),
            Geometry::Point(Point::new(0.25, 0.75)),
            Geometry::Point(Point::new(2.0, 2.0)),
        ];
        (points, polygons)
    }

    #[test]
    fn counts_hits_in_both_modes() {
        let (points, polygons) = fixture();
        for mode in [PredicateMode::Prepared, PredicateMode::Naive] {
            let s = run(&points, &polygons, mode, BenchCfg::default());
            assert_eq!(s.hits, 2);
            assert_eq!(s.points, 3);
            assert_eq!(s.polygons, 1);
            assert_eq!(s.samples_ms.len(), 1);
        }
    }

    #[test]
    fn iterations_clamped_to_one() {
        let (points, polygons) = fixture();
        let s = run(
            &points,
            &polygons,
            PredicateMode::Prepared,
            BenchCfg {
                iterations: 0,
                warmup: 2,
            },
        );
        assert_eq!(s.samples_ms.len(), 1);
        assert_eq!(s.hits, 2);
    }

    #[test]
    fn one_sample_per_iteration() {
        let (points, polygons) = fixture();
        let s = run(
            &points,
            &polygons,
            PredicateMode::Naive,
            BenchCfg {
                iterations: 3,
                warmup: 0,
            },
        );
        assert_eq!(s.samples_ms.len(), 3);
        assert!(s.samples_ms.iter().all(|&ms| ms >= 0.0));
    }

    #[test]
    fn empty_inputs_run_trivially() {
        let (points, polygons) = fixture();
        let s = run(&[], &polygons, PredicateMode::Prepared, BenchCfg::default());
        assert_eq!((s.points, s.hits), (0, 0));
        let s = run(&points, &[], PredicateMode::Naive, BenchCfg::default());
        assert_eq!((s.polygons, s.hits), (0, 0));
    }

    #[test]
    fn summary_statistics() {
        let s = RunSummary {
            mode: PredicateMode::Prepared,
            points: 0,
            polygons: 0,
            hits: 0,
            samples_ms: vec![3.0, 1.0, 2.0],
        };
        assert_eq!(s.min_ms(), 1.0);
        assert_eq!(s.median_ms(), 2.0);
        assert!((s.mean_ms() - 2.0).abs() < 1e-12);

        let even = RunSummary {
            samples_ms: vec![1.0, 2.0, 3.0, 4.0],
            ..s
        };
        assert_eq!(even.median_ms(), 2.5);
    }
}
