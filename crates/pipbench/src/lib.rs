//! Point-in-polygon containment benchmark core.
//!
//! The geometry work is delegated: GeoJSON parsing is `geojson`, the
//! geometry model is `geo-types`, and both containment paths (prepared
//! and naive) are `geo`. This crate only loads datasets, drives the
//! predicate loop, and measures it.

pub mod bench;
pub mod error;
pub mod io;
pub mod prepared;
pub mod sample;

/// Library version string.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub use error::{PipError, PipResult};

/// Common exports for quick imports in callers.
pub mod prelude {
    pub use crate::bench::{run, BenchCfg, RunSummary};
    pub use crate::error::{PipError, PipResult};
    pub use crate::io::{flatten, parse_collection, read_collection, write_points};
    pub use crate::prepared::{contains_naive, PredicateMode, PreparedSet};
    pub use crate::sample::{uniform_points, Bbox, SampleCfg};
}
