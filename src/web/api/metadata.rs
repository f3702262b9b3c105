use axum::{
    extract::{Query, State},
    Json,
};

use crate::catalog::{self, MetadataView};
use crate::web::api::error::{ApiError, ApiResult, ErrorResponse};
use crate::web::api::LocationQuery;
use crate::web::state::AppState;

#[utoipa::path(
    get,
    path = "/api/metadata",
    tag = "metadata",
    params(LocationQuery),
    responses(
        (status = 200, description = "Scene covering or nearest to the location", body = MetadataView),
        (status = 400, description = "Invalid parameters"),
        (status = 404, description = "Catalog holds no usable scene", body = ErrorResponse),
        (status = 500, description = "Catalog directory unavailable", body = ErrorResponse)
    )
)]
pub async fn get_metadata(
    State(state): State<AppState>,
    Query(query): Query<LocationQuery>,
) -> ApiResult<Json<MetadataView>> {
    log::info!(
        "Looking for metadata for location: ({}, {})",
        query.latitude,
        query.longitude
    );

    let catalog = state.catalog.current().await?;
    catalog::lookup(&catalog, query.point())
        .map(Json)
        .ok_or(ApiError::NotFound("no_metadata_found"))
}
