use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("Invalid catalog: {0}")]
    InvalidCatalog(String),

    #[error("Duplicate product id: {0}")]
    DuplicateId(String),

    #[error("Unknown sort option: {0}")]
    UnknownSort(String),
}

pub type Result<T> = std::result::Result<T, Error>;
