/// Errors produced by model constructors and validation routines.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ModelError {
    #[error("invalid geometry: {0}")]
    InvalidGeometry(String),

    #[error("invalid page: {0}")]
    InvalidPage(String),
}

pub type Result<T> = std::result::Result<T, ModelError>;
