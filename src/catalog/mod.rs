mod cache;
mod error;
mod loader;
mod matcher;
mod metadata;
mod types;

pub use cache::CatalogSource;
pub use error::CatalogError;
pub use loader::CatalogLoader;
pub use matcher::match_point;
pub use metadata::MetadataView;
pub use types::Catalog;

use crate::geometry::GeoPoint;

/// Match `point` against `catalog` and project the winning scene.
///
/// Returns `None` only when the catalog holds no scene at all.
pub fn lookup(catalog: &Catalog, point: GeoPoint) -> Option<MetadataView> {
    if catalog.is_empty() {
        log::debug!("Catalog is empty, nothing to match {:?}", point);
        return None;
    }
    MetadataView::from_match(&match_point(catalog, point), point)
}
