mod distance;
mod point;
mod polygon;

pub use distance::{haversine_km, round2};
pub use point::GeoPoint;
pub use polygon::{centroid, contains, is_simple_quad};
