use thiserror::Error;

#[derive(Error, Debug)]
pub enum CatalogError {
    #[error("listing not found")]
    NotFound,
    #[error("duplicate listing id: {0}")]
    DuplicateId(String),
    #[error("invalid listing {id}: {reason}")]
    InvalidListing { id: String, reason: String },
    #[error("unknown category {category:?} on listing {id}")]
    UnknownCategory { id: String, category: String },
    #[error("catalog source error: {0}")]
    Source(String),
}

pub type Result<T> = std::result::Result<T, CatalogError>;
