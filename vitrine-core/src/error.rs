use vitrine_model::{ModelError, SectionId};

use crate::config::ConfigError;

/// Errors raised while assembling or querying a showcase.
///
/// Input handlers never return these: UI events addressed to something
/// that does not exist are dropped.
#[derive(Debug, thiserror::Error)]
pub enum ShowcaseError {
    #[error("section {0} registered twice")]
    DuplicateSection(SectionId),

    #[error("unknown section {0}")]
    UnknownSection(SectionId),

    #[error("page {index} of {section}: media element does not match the page description")]
    MediaMismatch { section: SectionId, index: usize },

    #[error(transparent)]
    Model(#[from] ModelError),

    #[error(transparent)]
    Config(#[from] ConfigError),
}

pub type Result<T> = std::result::Result<T, ShowcaseError>;
