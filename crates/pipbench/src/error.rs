use std::path::PathBuf;

use thiserror::Error;

/// Errors surfaced by dataset loading and writing.
#[derive(Error, Debug)]
pub enum PipError {
    #[error("io error on {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid GeoJSON: {0}")]
    Geojson(#[from] geojson::Error),
}

/// Result alias for pipbench operations.
pub type PipResult<T> = Result<T, PipError>;
