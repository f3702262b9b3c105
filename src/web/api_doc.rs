use utoipa::OpenApi;

use super::api::catalog::CatalogSummary;
use super::api::error::ErrorResponse;
use super::api::revisit::{RevisitRequest, RevisitResponse};
use super::api::root::WelcomeResponse;
use super::api::LocationQuery;
use crate::catalog::MetadataView;

#[derive(OpenApi)]
#[openapi(
    paths(
        super::api::root::welcome,
        super::api::metadata::get_metadata,
        super::api::revisit::calculate,
        super::api::catalog::summary,
        super::api::catalog::reload,
    ),
    components(
        schemas(
            LocationQuery,
            MetadataView,
            RevisitRequest,
            RevisitResponse,
            CatalogSummary,
            WelcomeResponse,
            ErrorResponse,
        )
    ),
    info(
        title = "Landsat Locator API",
        description = "Scene lookup and revisit prediction for the Landsat WRS-2 grid",
        version = "0.1.0"
    ),
    tags(
        (name = "metadata", description = "Scene lookup"),
        (name = "revisit", description = "Revisit prediction"),
        (name = "catalog", description = "Scene catalog management")
    )
)]
pub struct ApiDoc;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_openapi_lists_endpoints() {
        let doc = ApiDoc::openapi();
        for path in ["/", "/api/metadata", "/api/calculate", "/api/catalog", "/api/catalog/reload"] {
            assert!(doc.paths.paths.contains_key(path), "missing {}", path);
        }
    }
}
