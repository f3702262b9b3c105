use axum::{extract::State, Json};
use serde::Serialize;
use utoipa::ToSchema;

use crate::catalog::Catalog;
use crate::web::api::error::{ApiError, ApiResult, ErrorResponse};
use crate::web::state::AppState;

#[derive(Debug, Serialize, ToSchema)]
pub struct CatalogSummary {
    /// Scenes with a valid footprint
    pub scenes: usize,
    /// Files left out of the catalog
    pub skipped: usize,
    pub cached: bool,
}

impl CatalogSummary {
    fn new(catalog: &Catalog, cached: bool) -> Self {
        Self {
            scenes: catalog.len(),
            skipped: catalog.skipped(),
            cached,
        }
    }
}

#[utoipa::path(
    get,
    path = "/api/catalog",
    tag = "catalog",
    responses(
        (status = 200, description = "Current catalog summary", body = CatalogSummary),
        (status = 500, description = "Catalog directory unavailable", body = ErrorResponse)
    )
)]
pub async fn summary(State(state): State<AppState>) -> ApiResult<Json<CatalogSummary>> {
    let catalog = state.catalog.current().await?;
    Ok(Json(CatalogSummary::new(&catalog, state.catalog.is_cached())))
}

#[utoipa::path(
    post,
    path = "/api/catalog/reload",
    tag = "catalog",
    responses(
        (status = 200, description = "Snapshot replaced", body = CatalogSummary),
        (status = 409, description = "Catalog caching is disabled", body = ErrorResponse),
        (status = 500, description = "Reload failed, previous snapshot kept", body = ErrorResponse)
    )
)]
pub async fn reload(State(state): State<AppState>) -> ApiResult<Json<CatalogSummary>> {
    let catalog = state
        .catalog
        .reload()
        .await?
        .ok_or(ApiError::Conflict("cache_disabled"))?;
    Ok(Json(CatalogSummary::new(&catalog, true)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::{CatalogLoader, CatalogSource};
    use crate::web::config::Config;
    use axum::http::StatusCode;
    use axum::response::IntoResponse;
    use std::path::Path;
    use std::sync::Arc;

    fn state(dir: &Path, cached: bool) -> AppState {
        let loader = CatalogLoader::new(dir.to_path_buf());
        let source = if cached {
            CatalogSource::cached(loader).unwrap()
        } else {
            CatalogSource::uncached(loader)
        };
        AppState {
            config: Arc::new(Config::from_yaml("catalog:\n  folder: data\n").unwrap()),
            catalog: Arc::new(source),
            revisit: None,
        }
    }

    #[tokio::test]
    async fn test_summary_counts_skipped_files() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("broken.json"), "{").unwrap();

        let Json(summary) = summary(State(state(dir.path(), false))).await.unwrap();
        assert_eq!(summary.scenes, 0);
        assert_eq!(summary.skipped, 1);
        assert!(!summary.cached);
    }

    #[tokio::test]
    async fn test_reload_requires_cache() {
        let dir = tempfile::tempdir().unwrap();
        let err = reload(State(state(dir.path(), false))).await.unwrap_err();
        assert_eq!(err.into_response().status(), StatusCode::CONFLICT);
    }

    #[tokio::test]
    async fn test_reload_picks_up_new_files() {
        let dir = tempfile::tempdir().unwrap();
        let state = state(dir.path(), true);
        std::fs::write(dir.path().join("broken.json"), "{").unwrap();

        let Json(before) = summary(State(state.clone())).await.unwrap();
        assert_eq!(before.skipped, 0);

        let Json(after) = reload(State(state)).await.unwrap();
        assert_eq!(after.skipped, 1);
        assert!(after.cached);
    }
}
