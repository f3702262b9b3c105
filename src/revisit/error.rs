use thiserror::Error;

#[derive(Debug, Error)]
pub enum RevisitError {
    #[error("Orbit grid file read error: {0}")]
    GridFile(#[from] std::io::Error),
    #[error("Invalid orbit grid format: {0}")]
    GridFormat(#[from] serde_json::Error),
    #[error("Orbit grid {0} contains no usable cells")]
    NoCells(String),
    #[error("No revisit date representable after {0}")]
    DateOutOfRange(chrono::NaiveDate),
}
