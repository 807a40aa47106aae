use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand};
use serde::Serialize;
use tracing_subscriber::fmt::SubscriberBuilder;

use pipbench::bench::{run as time_run, BenchCfg, RunSummary};
use pipbench::io::{flatten, read_collection, write_points};
use pipbench::prepared::PredicateMode;
use pipbench::sample::{uniform_points, Bbox, SampleCfg};

mod report;

#[derive(Parser)]
#[command(name = "cli")]
#[command(about = "Point-in-polygon containment benchmark")]
struct Cmd {
    #[command(subcommand)]
    action: Action,
}

#[derive(Subcommand)]
enum Action {
    /// Time containment of every point against the polygon dataset
    Run {
        /// GeoJSON file with the query points
        points: PathBuf,
        /// GeoJSON file with the polygon dataset
        polygons: PathBuf,
        /// Predicate path: "prepared" or "naive"
        #[arg(long, default_value = "prepared")]
        mode: String,
        /// Timed passes; stdout reports the median
        #[arg(long, default_value_t = 1)]
        iterations: usize,
        /// Untimed passes before measuring
        #[arg(long, default_value_t = 0)]
        warmup: usize,
        /// Write a JSON summary (plus provenance sidecar) here
        #[arg(long)]
        out: Option<PathBuf>,
    },
    /// Generate a random point dataset as GeoJSON
    Gen {
        /// Output GeoJSON path
        out: PathBuf,
        #[arg(long, default_value_t = 1000)]
        count: usize,
        #[arg(long, default_value_t = 0)]
        seed: u64,
        /// Sampling window "minx,miny,maxx,maxy"; default is the whole
        /// lon/lat plane
        #[arg(long, allow_hyphen_values = true)]
        bbox: Option<String>,
    },
}

fn main() -> Result<()> {
    // Logs go to stderr; stdout is reserved for the measured milliseconds.
    SubscriberBuilder::default()
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
    let cmd = Cmd::parse();
    match cmd.action {
        Action::Run {
            points,
            polygons,
            mode,
            iterations,
            warmup,
            out,
        } => run(points, polygons, mode, iterations, warmup, out),
        Action::Gen {
            out,
            count,
            seed,
            bbox,
        } => gen(out, count, seed, bbox),
    }
}

fn run(
    points_path: PathBuf,
    polygons_path: PathBuf,
    mode: String,
    iterations: usize,
    warmup: usize,
    out: Option<PathBuf>,
) -> Result<()> {
    let mode = parse_mode(&mode)?;
    let points_fc = read_collection(&points_path)
        .with_context(|| format!("loading points from {}", points_path.display()))?;
    let polygons_fc = read_collection(&polygons_path)
        .with_context(|| format!("loading polygons from {}", polygons_path.display()))?;
    let points = flatten(&points_fc);
    let polygons = flatten(&polygons_fc);
    tracing::info!(
        points = points.len(),
        polygons = polygons.len(),
        mode = mode.as_str(),
        iterations,
        warmup,
        "run"
    );

    let summary = time_run(&points, &polygons, mode, BenchCfg { iterations, warmup });
    tracing::info!(
        hits = summary.hits,
        min_ms = summary.min_ms(),
        median_ms = summary.median_ms(),
        mean_ms = summary.mean_ms(),
        "timed"
    );

    if let Some(out_path) = &out {
        write_summary(out_path, &summary, &points_path, &polygons_path)?;
    }

    // The harness reads stdout as the result cell: one line, whole ms.
    println!("{}", summary.median_ms().round() as u64);
    Ok(())
}

fn gen(out: PathBuf, count: usize, seed: u64, bbox: Option<String>) -> Result<()> {
    let bbox = match bbox {
        Some(s) => parse_bbox(&s)?,
        None => Bbox::default(),
    };
    let pts = uniform_points(&SampleCfg { count, bbox, seed });
    ensure_parent(&out)?;
    write_points(&out, &pts).with_context(|| format!("writing {}", out.display()))?;
    tracing::info!(count, seed, out = %out.display(), "gen");
    Ok(())
}

fn parse_mode(s: &str) -> Result<PredicateMode> {
    match s {
        "prepared" => Ok(PredicateMode::Prepared),
        "naive" => Ok(PredicateMode::Naive),
        other => bail!("unknown mode {other:?} (expected \"prepared\" or \"naive\")"),
    }
}

fn parse_bbox(s: &str) -> Result<Bbox> {
    let parts: Vec<f64> = s
        .split(',')
        .map(|part| part.trim().parse::<f64>())
        .collect::<Result<_, _>>()
        .with_context(|| format!("invalid bbox {s:?}"))?;
    if parts.len() != 4 {
        bail!("bbox needs four comma-separated numbers, got {}", parts.len());
    }
    if parts[0] > parts[2] || parts[1] > parts[3] {
        bail!("bbox min must not exceed max in {s:?}");
    }
    Ok(Bbox {
        min_x: parts[0],
        min_y: parts[1],
        max_x: parts[2],
        max_y: parts[3],
    })
}

#[derive(Serialize)]
struct RunDoc {
    mode: &'static str,
    points: usize,
    polygons: usize,
    hits: usize,
    samples_ms: Vec<f64>,
    min_ms: f64,
    mean_ms: f64,
    median_ms: f64,
}

fn write_summary(
    out: &Path,
    summary: &RunSummary,
    points_path: &Path,
    polygons_path: &Path,
) -> Result<()> {
    ensure_parent(out)?;
    let doc = RunDoc {
        mode: summary.mode.as_str(),
        points: summary.points,
        polygons: summary.polygons,
        hits: summary.hits,
        samples_ms: summary.samples_ms.clone(),
        min_ms: summary.min_ms(),
        mean_ms: summary.mean_ms(),
        median_ms: summary.median_ms(),
    };
    fs::write(out, serde_json::to_vec_pretty(&doc)?)
        .with_context(|| format!("writing {}", out.display()))?;
    report::write_sidecar(
        out,
        report::RunRecord {
            params: serde_json::json!({
                "mode": summary.mode.as_str(),
                "points_file": points_path.to_string_lossy(),
                "polygons_file": polygons_path.to_string_lossy(),
                "iterations": summary.samples_ms.len(),
            }),
            outputs: vec![out.to_string_lossy().into_owned()],
        },
    )?;
    Ok(())
}

fn ensure_parent(path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)
                .with_context(|| format!("creating {}", parent.display()))?;
        }
    }
    Ok(())
}
