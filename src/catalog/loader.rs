use std::fs;
use std::path::{Path, PathBuf};

use serde_json::Value;

use crate::catalog::error::{CatalogError, SceneParseError};
use crate::catalog::types::{AttributeGroup, Catalog, ScenePolygon, SceneRecord};
use crate::geometry::GeoPoint;

const METADATA_ROOT: &str = "LANDSAT_METADATA_FILE";

// (lat key, lon key) in UL, UR, LR, LL order
const CORNER_KEYS: [(&str, &str); 4] = [
    ("CORNER_UL_LAT_PRODUCT", "CORNER_UL_LON_PRODUCT"),
    ("CORNER_UR_LAT_PRODUCT", "CORNER_UR_LON_PRODUCT"),
    ("CORNER_LR_LAT_PRODUCT", "CORNER_LR_LON_PRODUCT"),
    ("CORNER_LL_LAT_PRODUCT", "CORNER_LL_LON_PRODUCT"),
];

pub struct CatalogLoader {
    catalog_dir: PathBuf,
}

impl CatalogLoader {
    pub fn new(catalog_dir: PathBuf) -> Self {
        Self { catalog_dir }
    }

    /// Scan the directory and build a fresh catalog.
    ///
    /// Files that fail to parse or carry an incomplete footprint are skipped
    /// and counted; only a missing or unreadable directory is an error.
    /// Scenes are kept in file-name order so that matching is repeatable.
    pub fn load(&self) -> Result<Catalog, CatalogError> {
        if !self.catalog_dir.is_dir() {
            return Err(CatalogError::DirectoryNotFound(
                self.catalog_dir.display().to_string(),
            ));
        }

        let mut paths = Vec::new();
        for entry in fs::read_dir(&self.catalog_dir)? {
            let path = entry?.path();
            if path.is_file() && path.extension().is_some_and(|ext| ext == "json") {
                paths.push(path);
            }
        }
        paths.sort();

        let mut scenes = Vec::with_capacity(paths.len());
        let mut skipped = 0;
        for path in paths {
            match parse_scene_file(&path) {
                Ok(scene) => scenes.push(scene),
                Err(e) => {
                    log::warn!("Skipping scene file {}: {}", path.display(), e);
                    skipped += 1;
                }
            }
        }

        log::info!(
            "Loaded {} scenes from {} ({} skipped)",
            scenes.len(),
            self.catalog_dir.display(),
            skipped
        );

        Ok(Catalog::new(scenes, skipped))
    }
}

fn parse_scene_file(path: &Path) -> Result<SceneRecord, SceneParseError> {
    let content = fs::read_to_string(path)?;
    let source = path
        .file_name()
        .unwrap_or_default()
        .to_string_lossy()
        .to_string();
    parse_scene(source, &content)
}

pub(crate) fn parse_scene(source: String, content: &str) -> Result<SceneRecord, SceneParseError> {
    let root: Value = serde_json::from_str(content)?;
    // product metadata files nest the groups one level down
    let groups = root.get(METADATA_ROOT).unwrap_or(&root);

    let projection = AttributeGroup::from_value(groups.get("PROJECTION_ATTRIBUTES"))
        .filter(|g| !g.is_empty())
        .ok_or(SceneParseError::MissingFootprint)?;

    let mut corners = [GeoPoint::new(0.0, 0.0); 4];
    for (corner, (lat_key, lon_key)) in corners.iter_mut().zip(CORNER_KEYS) {
        let lat = projection
            .get_f64(lat_key)
            .ok_or(SceneParseError::MissingCorner(lat_key))?;
        let lon = projection
            .get_f64(lon_key)
            .ok_or(SceneParseError::MissingCorner(lon_key))?;
        *corner = GeoPoint::new(lat, lon);
    }
    let footprint = ScenePolygon::new(corners).ok_or(SceneParseError::InvalidFootprint)?;

    let group = |name: &str| AttributeGroup::from_value(groups.get(name)).unwrap_or_default();

    Ok(SceneRecord {
        source,
        footprint,
        image: group("IMAGE_ATTRIBUTES"),
        level1: group("LEVEL1_PROCESSING_RECORD"),
        level2: group("LEVEL2_PROCESSING_RECORD"),
        projection,
    })
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use serde_json::json;

    pub(crate) fn scene_json(ul: (f64, f64), lr: (f64, f64)) -> Value {
        json!({
            "IMAGE_ATTRIBUTES": { "SPACECRAFT_ID": "LANDSAT_8", "CLOUD_COVER": 12.5 },
            "PROJECTION_ATTRIBUTES": {
                "CORNER_UL_LAT_PRODUCT": ul.0, "CORNER_UL_LON_PRODUCT": ul.1,
                "CORNER_UR_LAT_PRODUCT": ul.0, "CORNER_UR_LON_PRODUCT": lr.1,
                "CORNER_LR_LAT_PRODUCT": lr.0, "CORNER_LR_LON_PRODUCT": lr.1,
                "CORNER_LL_LAT_PRODUCT": lr.0, "CORNER_LL_LON_PRODUCT": ul.1
            }
        })
    }

    pub(crate) fn write_scene(dir: &Path, name: &str, value: &Value) {
        fs::write(dir.join(name), value.to_string()).unwrap();
    }

    #[test]
    fn test_missing_directory_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let loader = CatalogLoader::new(dir.path().join("nope"));
        assert!(matches!(loader.load(), Err(CatalogError::DirectoryNotFound(_))));
    }

    #[test]
    fn test_empty_directory_is_an_empty_catalog() {
        let dir = tempfile::tempdir().unwrap();
        let catalog = CatalogLoader::new(dir.path().to_path_buf()).load().unwrap();
        assert!(catalog.is_empty());
        assert_eq!(catalog.skipped(), 0);
    }

    #[test]
    fn test_skips_malformed_and_incomplete_files() {
        let dir = tempfile::tempdir().unwrap();
        write_scene(dir.path(), "a_good.json", &scene_json((35.0, -119.0), (33.0, -117.0)));
        fs::write(dir.path().join("b_broken.json"), "{ not json").unwrap();

        let mut missing_corner = scene_json((35.0, -119.0), (33.0, -117.0));
        missing_corner["PROJECTION_ATTRIBUTES"]
            .as_object_mut()
            .unwrap()
            .remove("CORNER_LR_LON_PRODUCT");
        write_scene(dir.path(), "c_missing_corner.json", &missing_corner);

        write_scene(dir.path(), "d_no_projection.json", &json!({ "IMAGE_ATTRIBUTES": {} }));
        fs::write(dir.path().join("e_notes.txt"), "ignored").unwrap();

        let catalog = CatalogLoader::new(dir.path().to_path_buf()).load().unwrap();
        assert_eq!(catalog.len(), 1);
        assert_eq!(catalog.skipped(), 3);
        assert_eq!(catalog.scenes()[0].source, "a_good.json");
    }

    #[test]
    fn test_each_missing_corner_field_excludes_the_scene() {
        for (lat_key, lon_key) in CORNER_KEYS {
            for key in [lat_key, lon_key] {
                let mut value = scene_json((35.0, -119.0), (33.0, -117.0));
                value["PROJECTION_ATTRIBUTES"].as_object_mut().unwrap().remove(key);
                let err = parse_scene("x.json".into(), &value.to_string()).unwrap_err();
                assert!(
                    matches!(err, SceneParseError::MissingCorner(k) if k == key),
                    "{}: {}",
                    key,
                    err
                );
            }
        }
    }

    #[test]
    fn test_parses_nested_metadata_with_string_numbers() {
        let content = json!({
            "LANDSAT_METADATA_FILE": {
                "IMAGE_ATTRIBUTES": { "CLOUD_COVER": "3.25" },
                "PROJECTION_ATTRIBUTES": {
                    "CORNER_UL_LAT_PRODUCT": "35.0", "CORNER_UL_LON_PRODUCT": "-119.0",
                    "CORNER_UR_LAT_PRODUCT": "35.0", "CORNER_UR_LON_PRODUCT": "-117.0",
                    "CORNER_LR_LAT_PRODUCT": "33.0", "CORNER_LR_LON_PRODUCT": "-117.0",
                    "CORNER_LL_LAT_PRODUCT": "33.0", "CORNER_LL_LON_PRODUCT": "-119.0"
                }
            }
        })
        .to_string();

        let scene = parse_scene("nested.json".into(), &content).unwrap();
        assert_eq!(scene.image.get_f64("CLOUD_COVER"), Some(3.25));
        assert!(scene.footprint.contains(GeoPoint::new(34.0, -118.0)));
    }

    #[test]
    fn test_self_intersecting_footprint_is_rejected() {
        let mut value = scene_json((35.0, -119.0), (33.0, -117.0));
        let projection = value["PROJECTION_ATTRIBUTES"].as_object_mut().unwrap();
        projection.insert("CORNER_LR_LON_PRODUCT".into(), json!(-119.0));
        projection.insert("CORNER_LL_LON_PRODUCT".into(), json!(-117.0));

        let err = parse_scene("bowtie.json".into(), &value.to_string()).unwrap_err();
        assert!(matches!(err, SceneParseError::InvalidFootprint));
    }
}
