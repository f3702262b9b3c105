use crate::catalog::types::{Catalog, SceneRecord};
use crate::geometry::{haversine_km, round2, GeoPoint};

#[derive(Debug, Clone)]
pub enum MatchResult<'a> {
    /// The point lies inside (or on the edge of) the scene footprint.
    Covered(&'a SceneRecord),
    /// No footprint covers the point; this scene's centroid is the closest.
    Nearest {
        scene: &'a SceneRecord,
        distance_km: f64,
    },
    NoMatch,
}

impl<'a> MatchResult<'a> {
    pub fn scene(&self) -> Option<&'a SceneRecord> {
        match self {
            MatchResult::Covered(scene) | MatchResult::Nearest { scene, .. } => Some(scene),
            MatchResult::NoMatch => None,
        }
    }

    pub fn distance_km(&self) -> Option<f64> {
        match self {
            MatchResult::Nearest { distance_km, .. } => Some(*distance_km),
            _ => None,
        }
    }
}

/// Find the scene covering `point`, or the one whose footprint centroid is
/// nearest to it.
///
/// Overlapping footprints resolve to the first covering scene in catalog
/// order. Distance ties also go to the first scene in catalog order.
pub fn match_point(catalog: &Catalog, point: GeoPoint) -> MatchResult<'_> {
    if let Some(scene) = catalog
        .scenes()
        .iter()
        .find(|scene| scene.footprint.contains(point))
    {
        log::debug!("Point {:?} covered by {}", point, scene.source);
        return MatchResult::Covered(scene);
    }

    let mut nearest: Option<(&SceneRecord, f64)> = None;
    for scene in catalog.scenes() {
        let distance = haversine_km(scene.footprint.centroid(), point);
        if nearest.map_or(true, |(_, best)| distance < best) {
            nearest = Some((scene, distance));
        }
    }

    match nearest {
        Some((scene, distance)) => {
            log::debug!(
                "Point {:?} outside all footprints, nearest is {} at {:.2} km",
                point,
                scene.source,
                distance
            );
            MatchResult::Nearest {
                scene,
                distance_km: round2(distance),
            }
        }
        None => MatchResult::NoMatch,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::loader::parse_scene;
    use crate::catalog::loader::tests::scene_json;

    fn catalog(footprints: &[((f64, f64), (f64, f64))]) -> Catalog {
        let scenes = footprints
            .iter()
            .enumerate()
            .map(|(i, (ul, lr))| {
                parse_scene(format!("scene_{}.json", i), &scene_json(*ul, *lr).to_string()).unwrap()
            })
            .collect();
        Catalog::new(scenes, 0)
    }

    #[test]
    fn test_point_inside_single_footprint() {
        let catalog = catalog(&[((35.0, -119.0), (33.0, -117.0)), ((10.0, 0.0), (8.0, 2.0))]);
        let result = match_point(&catalog, GeoPoint::new(9.0, 1.0));
        assert!(matches!(result, MatchResult::Covered(s) if s.source == "scene_1.json"));
        assert_eq!(result.distance_km(), None);
    }

    #[test]
    fn test_overlapping_footprints_first_found_wins() {
        let catalog = catalog(&[((35.0, -119.0), (33.0, -117.0)), ((36.0, -120.0), (32.0, -116.0))]);
        let result = match_point(&catalog, GeoPoint::new(34.0, -118.0));
        assert_eq!(result.scene().unwrap().source, "scene_0.json");
    }

    #[test]
    fn test_fallback_picks_minimum_centroid_distance() {
        let footprints = [
            ((35.0, -119.0), (33.0, -117.0)),
            ((10.0, 0.0), (8.0, 2.0)),
            ((-20.0, 130.0), (-22.0, 132.0)),
        ];
        let catalog = catalog(&footprints);
        let query = GeoPoint::new(12.0, 5.0);

        let expected = catalog
            .scenes()
            .iter()
            .map(|s| haversine_km(s.footprint.centroid(), query))
            .fold(f64::INFINITY, f64::min);

        match match_point(&catalog, query) {
            MatchResult::Nearest { scene, distance_km } => {
                assert_eq!(scene.source, "scene_1.json");
                assert!((distance_km - expected).abs() <= 0.005 + 1e-9);
            }
            other => panic!("expected nearest, got {:?}", other),
        }
    }

    #[test]
    fn test_distance_ties_go_to_first_scene() {
        let catalog = catalog(&[((12.0, 0.0), (10.0, 2.0)), ((12.0, 0.0), (10.0, 2.0))]);
        let result = match_point(&catalog, GeoPoint::new(0.0, 1.0));
        assert_eq!(result.scene().unwrap().source, "scene_0.json");
        assert!(result.distance_km().unwrap() > 0.0);
    }

    #[test]
    fn test_empty_catalog_is_no_match() {
        let empty = Catalog::default();
        let result = match_point(&empty, GeoPoint::new(0.0, 0.0));
        assert!(matches!(result, MatchResult::NoMatch));
    }
}
