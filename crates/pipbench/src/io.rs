//! Dataset loading and writing.
//!
//! Files are slurped into a string, handed to `geojson`, and converted to
//! `geo-types` collections; no coordinate parsing happens here. Any
//! GeoJSON root is accepted (FeatureCollection, Feature, or a bare
//! geometry).

use std::fs;
use std::path::Path;

use geo_types::{Geometry, GeometryCollection, Point};
use geojson::{quick_collection, Feature, FeatureCollection, GeoJson};

use crate::error::{PipError, PipResult};

/// Read a GeoJSON file into a geometry collection.
pub fn read_collection(path: &Path) -> PipResult<GeometryCollection<f64>> {
    let text = fs::read_to_string(path).map_err(|source| PipError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    parse_collection(&text)
}

/// Parse GeoJSON text into a geometry collection.
pub fn parse_collection(text: &str) -> PipResult<GeometryCollection<f64>> {
    let gj: GeoJson = text.parse()?;
    Ok(quick_collection(&gj)?)
}

/// Top-level members of `collection`, with nested geometry collections
/// inlined recursively.
///
/// The predicates operate on concrete members; a collection-of-collections
/// probe or target is never passed to the engine.
pub fn flatten(collection: &GeometryCollection<f64>) -> Vec<Geometry<f64>> {
    let mut out = Vec::with_capacity(collection.len());
    push_members(collection, &mut out);
    out
}

fn push_members(collection: &GeometryCollection<f64>, out: &mut Vec<Geometry<f64>>) {
    for g in collection {
        match g {
            Geometry::GeometryCollection(inner) => push_members(inner, out),
            other => out.push(other.clone()),
        }
    }
}

/// Write points as a GeoJSON FeatureCollection of Point features.
pub fn write_points(path: &Path, points: &[Point<f64>]) -> PipResult<()> {
    let features = points
        .iter()
        .map(|p| Feature {
            bbox: None,
            geometry: Some(geojson::Geometry::new(geojson::Value::from(p))),
            id: None,
            properties: None,
            foreign_members: None,
        })
        .collect();
    let fc = FeatureCollection {
        bbox: None,
        features,
        foreign_members: None,
    };
    fs::write(path, GeoJson::from(fc).to_string()).map_err(|source| PipError::Io {
        path: path.to_path_buf(),
        source,
    })
}
