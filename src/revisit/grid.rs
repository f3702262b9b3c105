use std::fs;
use std::path::Path;

use serde::Deserialize;

use crate::geometry::{self, GeoPoint};
use crate::revisit::error::RevisitError;
use crate::revisit::types::PassMode;

/// One path/row cell of the reference grid.
#[derive(Debug, Clone)]
pub struct OrbitCell {
    pub path: u32,
    pub row: u32,
    pub mode: PassMode,
    rings: Vec<Vec<GeoPoint>>,
}

impl OrbitCell {
    pub fn new(path: u32, row: u32, mode: PassMode, rings: Vec<Vec<GeoPoint>>) -> Self {
        Self {
            path,
            row,
            mode,
            rings,
        }
    }

    pub fn contains(&self, point: GeoPoint) -> bool {
        self.rings.iter().any(|ring| geometry::contains(ring, point))
    }
}

#[derive(Deserialize)]
struct FeatureCollection {
    features: Vec<Feature>,
}

#[derive(Deserialize)]
struct Feature {
    properties: CellProperties,
    geometry: Option<Geometry>,
}

#[derive(Deserialize)]
struct CellProperties {
    #[serde(rename = "PATH")]
    path: u32,
    #[serde(rename = "ROW")]
    row: u32,
    #[serde(rename = "MODE")]
    mode: String,
}

// positions are [lon, lat, ...]
#[derive(Deserialize)]
#[serde(tag = "type")]
enum Geometry {
    Polygon {
        coordinates: Vec<Vec<Vec<f64>>>,
    },
    MultiPolygon {
        coordinates: Vec<Vec<Vec<Vec<f64>>>>,
    },
    #[serde(other)]
    Unsupported,
}

fn exterior_ring(polygon: &[Vec<Vec<f64>>]) -> Option<Vec<GeoPoint>> {
    let ring: Vec<GeoPoint> = polygon
        .first()?
        .iter()
        .filter(|pos| pos.len() >= 2)
        .map(|pos| GeoPoint::new(pos[1], pos[0]))
        .collect();
    (ring.len() >= 3).then_some(ring)
}

/// Static path/row grid, kept in file order.
#[derive(Debug, Clone, Default)]
pub struct OrbitGrid {
    cells: Vec<OrbitCell>,
}

impl OrbitGrid {
    pub fn new(cells: Vec<OrbitCell>) -> Self {
        Self { cells }
    }

    pub fn from_file(path: &Path) -> Result<Self, RevisitError> {
        let content = fs::read_to_string(path)?;
        let grid = Self::from_geojson(&content)?;
        if grid.cells.is_empty() {
            return Err(RevisitError::NoCells(path.display().to_string()));
        }
        log::info!("Loaded {} orbit grid cells from {}", grid.len(), path.display());
        Ok(grid)
    }

    /// Parse a GeoJSON feature collection with `PATH`, `ROW` and `MODE`
    /// properties. Features without a usable polygon or with an unknown mode
    /// are skipped.
    pub fn from_geojson(content: &str) -> Result<Self, RevisitError> {
        let collection: FeatureCollection = serde_json::from_str(content)?;

        let mut cells = Vec::with_capacity(collection.features.len());
        for feature in collection.features {
            let props = feature.properties;
            let Some(mode) = PassMode::from_tag(&props.mode) else {
                log::warn!("Skipping cell {}/{}: unknown mode {:?}", props.path, props.row, props.mode);
                continue;
            };
            let rings: Vec<Vec<GeoPoint>> = match feature.geometry {
                Some(Geometry::Polygon { coordinates }) => {
                    exterior_ring(&coordinates).into_iter().collect()
                }
                Some(Geometry::MultiPolygon { coordinates }) => coordinates
                    .iter()
                    .filter_map(|polygon| exterior_ring(polygon))
                    .collect(),
                Some(Geometry::Unsupported) | None => Vec::new(),
            };
            if rings.is_empty() {
                log::warn!("Skipping cell {}/{}: no polygon geometry", props.path, props.row);
                continue;
            }
            cells.push(OrbitCell::new(props.path, props.row, mode, rings));
        }

        Ok(Self::new(cells))
    }

    pub fn len(&self) -> usize {
        self.cells.len()
    }

    /// First cell of the given mode, in grid order, that contains `point`.
    pub fn locate(&self, point: GeoPoint, mode: PassMode) -> Option<&OrbitCell> {
        self.cells
            .iter()
            .filter(|cell| cell.mode == mode)
            .find(|cell| cell.contains(point))
    }
}
