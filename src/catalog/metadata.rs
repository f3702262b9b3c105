use serde::Serialize;
use utoipa::ToSchema;

use crate::catalog::matcher::MatchResult;
use crate::catalog::types::SceneRecord;
use crate::geometry::GeoPoint;

const UNKNOWN: &str = "Unknown";

/// Stable output view of a matched scene.
///
/// `cloud_coverage` defaults to 0.0 when the scene does not report it, which
/// cannot be told apart from a genuinely clear scene.
#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
pub struct MetadataView {
    pub satellite: String,
    pub acquisition_date: String,
    pub acquisition_time: String,
    /// Query latitude
    pub latitude: f64,
    /// Query longitude
    pub longitude: f64,
    pub wrs_path: Option<i64>,
    pub wrs_row: Option<i64>,
    pub cloud_coverage: f64,
    pub image_quality: String,
    pub sun_elevation: Option<f64>,
    pub sun_azimuth: Option<f64>,
    /// Meters per pixel
    pub ground_sampling_distance: Option<f64>,
    pub projection: Option<String>,
    pub processing_level: String,
    pub scene_id: String,
    pub orbit_number: Option<u32>,
    pub sensor_type: String,
    pub cloud_mask: Option<String>,
    /// Only present when no footprint covers the query point.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub distance_km: Option<f64>,
}

impl MetadataView {
    pub fn project(scene: &SceneRecord, query: GeoPoint, distance_km: Option<f64>) -> Self {
        let image = &scene.image;
        let text = |key: &str| image.get_string(key).unwrap_or_else(|| UNKNOWN.to_string());
        // level-2 processing takes precedence over level-1
        let processed = |key: &str| {
            scene
                .level2
                .get_string(key)
                .or_else(|| scene.level1.get_string(key))
                .unwrap_or_else(|| UNKNOWN.to_string())
        };

        MetadataView {
            satellite: text("SPACECRAFT_ID"),
            acquisition_date: text("DATE_ACQUIRED"),
            acquisition_time: text("SCENE_CENTER_TIME"),
            latitude: query.latitude,
            longitude: query.longitude,
            wrs_path: image.get_i64("WRS_PATH"),
            wrs_row: image.get_i64("WRS_ROW"),
            cloud_coverage: image.get_f64("CLOUD_COVER").unwrap_or(0.0),
            image_quality: text("IMAGE_QUALITY_OLI"),
            sun_elevation: image.get_f64("SUN_ELEVATION"),
            sun_azimuth: image.get_f64("SUN_AZIMUTH"),
            ground_sampling_distance: scene.projection.get_f64("GRID_CELL_SIZE_REFLECTIVE"),
            projection: scene.projection.get_string("MAP_PROJECTION"),
            processing_level: processed("PROCESSING_LEVEL"),
            scene_id: processed("LANDSAT_PRODUCT_ID"),
            orbit_number: None,
            sensor_type: text("SENSOR_ID"),
            cloud_mask: None,
            distance_km,
        }
    }

    pub fn from_match(result: &MatchResult<'_>, query: GeoPoint) -> Option<Self> {
        result
            .scene()
            .map(|scene| Self::project(scene, query, result.distance_km()))
    }
}
