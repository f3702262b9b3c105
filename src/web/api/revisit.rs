use axum::{extract::State, Json};
use chrono::{Local, NaiveDate};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::geometry::GeoPoint;
use crate::revisit::RevisitOutcome;
use crate::web::api::error::{ApiError, ApiResult, ErrorResponse};
use crate::web::state::AppState;

#[derive(Debug, Deserialize, ToSchema)]
pub struct RevisitRequest {
    pub latitude: f64,
    pub longitude: f64,
    /// Predict from this date instead of today (local time)
    #[serde(default)]
    pub date: Option<NaiveDate>,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct RevisitResponse {
    pub date_landsat_8: NaiveDate,
    pub date_landsat_9: NaiveDate,
    /// WRS-2 path of the location
    pub path: u32,
    /// WRS-2 row of the location
    pub row: u32,
}

#[utoipa::path(
    post,
    path = "/api/calculate",
    tag = "revisit",
    request_body = RevisitRequest,
    responses(
        (status = 200, description = "Next imaging dates per satellite", body = RevisitResponse),
        (status = 400, description = "Requested date too close to the calendar end", body = ErrorResponse),
        (status = 404, description = "Location outside the grid or path not scheduled", body = ErrorResponse),
        (status = 503, description = "Revisit predictions not configured", body = ErrorResponse)
    )
)]
pub async fn calculate(
    State(state): State<AppState>,
    Json(request): Json<RevisitRequest>,
) -> ApiResult<Json<RevisitResponse>> {
    let planner = state
        .revisit
        .as_ref()
        .ok_or(ApiError::Unavailable("revisit_not_configured"))?;

    let as_of = request.date.unwrap_or_else(|| Local::now().date_naive());
    let point = GeoPoint::new(request.latitude, request.longitude);

    match planner.plan(point, as_of) {
        RevisitOutcome::Scheduled {
            path,
            row,
            prediction,
        } => Ok(Json(RevisitResponse {
            date_landsat_8: prediction.date_landsat_8,
            date_landsat_9: prediction.date_landsat_9,
            path,
            row,
        })),
        RevisitOutcome::OutsideGrid => Err(ApiError::NotFound("outside_grid")),
        RevisitOutcome::PathNotScheduled(_) => Err(ApiError::NotFound("path_not_scheduled")),
        RevisitOutcome::DateOutOfRange(_) => Err(ApiError::BadRequest("date_out_of_range")),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::{CatalogLoader, CatalogSource};
    use crate::revisit::{OrbitGrid, RevisitCalculator, RevisitPlanner};
    use crate::web::config::Config;
    use axum::http::StatusCode;
    use axum::response::IntoResponse;
    use std::sync::Arc;

    const GRID: &str = r#"{
        "type": "FeatureCollection",
        "features": [{
            "type": "Feature",
            "properties": { "PATH": 42, "ROW": 36, "MODE": "D" },
            "geometry": { "type": "Polygon", "coordinates": [[[-119, 35], [-117, 35], [-117, 33], [-119, 33], [-119, 35]]] }
        }]
    }"#;

    fn state(with_revisit: bool) -> AppState {
        let config = Config::from_yaml("catalog:\n  folder: data\n").unwrap();
        let revisit = with_revisit.then(|| {
            Arc::new(RevisitPlanner::new(
                OrbitGrid::from_geojson(GRID).unwrap(),
                RevisitCalculator::default(),
            ))
        });
        AppState {
            catalog: Arc::new(CatalogSource::uncached(CatalogLoader::new("data".into()))),
            config: Arc::new(config),
            revisit,
        }
    }

    fn request(latitude: f64, longitude: f64, date: Option<NaiveDate>) -> Json<RevisitRequest> {
        Json(RevisitRequest {
            latitude,
            longitude,
            date,
        })
    }

    #[tokio::test]
    async fn test_calculate_for_date() {
        let date = NaiveDate::from_ymd_opt(2024, 9, 5);
        let Json(response) = calculate(State(state(true)), request(34.0, -118.0, date))
            .await
            .unwrap();

        assert_eq!((response.path, response.row), (42, 36));
        assert_eq!(response.date_landsat_8, NaiveDate::from_ymd_opt(2024, 9, 23).unwrap());
        assert_eq!(response.date_landsat_9, NaiveDate::from_ymd_opt(2024, 10, 1).unwrap());
    }

    #[tokio::test]
    async fn test_calculate_defaults_to_today() {
        let today = Local::now().date_naive();
        let Json(response) = calculate(State(state(true)), request(34.0, -118.0, None))
            .await
            .unwrap();
        assert!(response.date_landsat_8 >= today);
        assert!(response.date_landsat_9 >= today);
    }

    #[tokio::test]
    async fn test_outside_grid_is_not_found() {
        let err = calculate(State(state(true)), request(-80.0, 0.0, None))
            .await
            .unwrap_err();
        assert_eq!(err.into_response().status(), StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn test_date_near_calendar_end_is_bad_request() {
        let date = NaiveDate::MAX - chrono::Duration::days(3);
        let err = calculate(State(state(true)), request(34.0, -118.0, Some(date)))
            .await
            .unwrap_err();
        assert_eq!(err.into_response().status(), StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn test_unconfigured_revisit_is_unavailable() {
        let err = calculate(State(state(false)), request(34.0, -118.0, None))
            .await
            .unwrap_err();
        assert_eq!(err.into_response().status(), StatusCode::SERVICE_UNAVAILABLE);
    }
}
