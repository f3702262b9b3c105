use serde_json::{Map, Value};

use crate::geometry::{self, GeoPoint};

/// Scene footprint, corners ordered UL, UR, LR, LL.
#[derive(Debug, Clone)]
pub struct ScenePolygon {
    corners: [GeoPoint; 4],
    centroid: GeoPoint,
}

impl ScenePolygon {
    /// Returns `None` for degenerate or self-intersecting quadrilaterals.
    pub fn new(corners: [GeoPoint; 4]) -> Option<Self> {
        if !geometry::is_simple_quad(&corners) {
            return None;
        }
        let centroid = geometry::centroid(&corners)?;
        Some(Self { corners, centroid })
    }

    pub fn centroid(&self) -> GeoPoint {
        self.centroid
    }

    pub fn contains(&self, point: GeoPoint) -> bool {
        geometry::contains(&self.corners, point)
    }
}

/// One attribute group of a scene record (e.g. `IMAGE_ATTRIBUTES`).
///
/// Scene metadata files encode numbers either as JSON numbers or as numeric
/// strings, so the typed getters accept both.
#[derive(Debug, Clone, Default)]
pub struct AttributeGroup(Map<String, Value>);

impl AttributeGroup {
    pub fn from_value(value: Option<&Value>) -> Option<Self> {
        value.and_then(Value::as_object).cloned().map(AttributeGroup)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn get(&self, key: &str) -> Option<&Value> {
        self.0.get(key).filter(|v| !v.is_null())
    }

    /// Scalar value rendered as a string (numbers and booleans are coerced).
    pub fn get_string(&self, key: &str) -> Option<String> {
        match self.get(key)? {
            Value::String(s) => Some(s.clone()),
            Value::Number(n) => Some(n.to_string()),
            Value::Bool(b) => Some(b.to_string()),
            _ => None,
        }
    }

    pub fn get_f64(&self, key: &str) -> Option<f64> {
        match self.get(key)? {
            Value::Number(n) => n.as_f64(),
            Value::String(s) => s.trim().parse().ok(),
            _ => None,
        }
    }

    pub fn get_i64(&self, key: &str) -> Option<i64> {
        match self.get(key)? {
            Value::Number(n) => n.as_i64(),
            Value::String(s) => s.trim().parse().ok(),
            _ => None,
        }
    }
}

/// A scene loaded from one catalog file. Immutable after loading.
#[derive(Debug, Clone)]
pub struct SceneRecord {
    pub source: String,
    pub footprint: ScenePolygon,
    pub image: AttributeGroup,
    pub projection: AttributeGroup,
    pub level1: AttributeGroup,
    pub level2: AttributeGroup,
}

/// The valid scenes of one catalog directory scan.
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    scenes: Vec<SceneRecord>,
    skipped: usize,
}

impl Catalog {
    pub fn new(scenes: Vec<SceneRecord>, skipped: usize) -> Self {
        Self { scenes, skipped }
    }

    pub fn scenes(&self) -> &[SceneRecord] {
        &self.scenes
    }

    pub fn len(&self) -> usize {
        self.scenes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.scenes.is_empty()
    }

    /// Number of files left out during the load.
    pub fn skipped(&self) -> usize {
        self.skipped
    }
}
