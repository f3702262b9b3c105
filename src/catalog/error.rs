use thiserror::Error;

#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("Catalog directory not found: {0}")]
    DirectoryNotFound(String),
    #[error("Catalog read error: {0}")]
    Io(#[from] std::io::Error),
}

/// Reasons a single scene file is left out of the catalog.
#[derive(Debug, Error)]
pub(crate) enum SceneParseError {
    #[error("unreadable file: {0}")]
    Read(#[from] std::io::Error),
    #[error("malformed JSON: {0}")]
    Json(#[from] serde_json::Error),
    #[error("no PROJECTION_ATTRIBUTES group")]
    MissingFootprint,
    #[error("missing corner coordinate {0}")]
    MissingCorner(&'static str),
    #[error("footprint is degenerate or self-intersecting")]
    InvalidFootprint,
}
