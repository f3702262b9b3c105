pub mod catalog;
pub mod error;
pub mod metadata;
pub mod revisit;
pub mod root;

use serde::Deserialize;
use utoipa::{IntoParams, ToSchema};

use crate::geometry::GeoPoint;

#[derive(Debug, Clone, Copy, Deserialize, ToSchema, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct LocationQuery {
    /// Latitude of the target location
    pub latitude: f64,
    /// Longitude of the target location
    pub longitude: f64,
}

impl LocationQuery {
    pub fn point(&self) -> GeoPoint {
        GeoPoint::new(self.latitude, self.longitude)
    }
}
