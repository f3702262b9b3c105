use std::sync::Arc;

use tokio::sync::RwLock;

use crate::catalog::error::CatalogError;
use crate::catalog::loader::CatalogLoader;
use crate::catalog::types::Catalog;

/// Where lookups get their catalog from.
///
/// Without caching every call re-scans the directory. With caching a snapshot
/// is loaded up front and replaced only by an explicit [`reload`]; readers
/// always hold a complete snapshot.
///
/// [`reload`]: CatalogSource::reload
pub struct CatalogSource {
    loader: CatalogLoader,
    snapshot: Option<RwLock<Arc<Catalog>>>,
}

impl CatalogSource {
    pub fn uncached(loader: CatalogLoader) -> Self {
        Self {
            loader,
            snapshot: None,
        }
    }

    pub fn cached(loader: CatalogLoader) -> Result<Self, CatalogError> {
        let catalog = loader.load()?;
        Ok(Self {
            loader,
            snapshot: Some(RwLock::new(Arc::new(catalog))),
        })
    }

    pub fn is_cached(&self) -> bool {
        self.snapshot.is_some()
    }

    pub async fn current(&self) -> Result<Arc<Catalog>, CatalogError> {
        match &self.snapshot {
            Some(snapshot) => Ok(snapshot.read().await.clone()),
            None => self.loader.load().map(Arc::new),
        }
    }

    /// Replace the cached snapshot. Returns `None` when caching is disabled.
    ///
    /// On failure the previous snapshot stays in place.
    pub async fn reload(&self) -> Result<Option<Arc<Catalog>>, CatalogError> {
        let Some(snapshot) = &self.snapshot else {
            return Ok(None);
        };
        let catalog = Arc::new(self.loader.load()?);
        *snapshot.write().await = catalog.clone();
        log::info!("Catalog snapshot replaced ({} scenes)", catalog.len());
        Ok(Some(catalog))
    }
}
