use std::sync::Arc;

use thiserror::Error;

use crate::catalog::{CatalogError, CatalogLoader, CatalogSource};
use crate::revisit::{OrbitGrid, RevisitCalculator, RevisitError, RevisitPlanner};

use super::config::{CatalogConfig, Config, RevisitConfig};

#[derive(Debug, Error)]
pub enum StartupError {
    #[error("catalog: {0}")]
    Catalog(#[from] CatalogError),
    #[error("revisit: {0}")]
    Revisit(#[from] RevisitError),
}

#[derive(Clone)]
pub struct AppState {
    pub config: Arc<Config>,
    pub catalog: Arc<CatalogSource>,
    pub revisit: Option<Arc<RevisitPlanner>>,
}

impl AppState {
    pub fn from_config(config: Config) -> Result<Self, StartupError> {
        let catalog = catalog_source(&config.catalog)?;
        let revisit = match &config.revisit {
            Some(revisit_config) => Some(Arc::new(revisit_planner(revisit_config)?)),
            None => {
                log::warn!("No revisit section configured, revisit predictions disabled");
                None
            }
        };

        Ok(Self {
            config: Arc::new(config),
            catalog: Arc::new(catalog),
            revisit,
        })
    }
}

pub fn catalog_source(config: &CatalogConfig) -> Result<CatalogSource, CatalogError> {
    let loader = CatalogLoader::new(config.folder.clone());
    if config.cache {
        CatalogSource::cached(loader)
    } else {
        Ok(CatalogSource::uncached(loader))
    }
}

pub fn revisit_planner(config: &RevisitConfig) -> Result<RevisitPlanner, RevisitError> {
    let grid = OrbitGrid::from_file(&config.grid_file)?;
    Ok(RevisitPlanner::new(
        grid,
        RevisitCalculator::new(config.cycle_anchor),
    ))
}
