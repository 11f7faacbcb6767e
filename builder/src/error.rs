//! Builder error types

use ntfly_core::NtflyError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum BuilderError {
    #[error(transparent)]
    Core(#[from] NtflyError),

    #[error("Unknown project category: {0}")]
    InvalidCategory(String),

    #[error("Project not found: {0}")]
    ProjectNotFound(String),

    #[error("Project has no {0}")]
    MissingFile(String),

    #[error("Packaging failed: {0}")]
    Packaging(String),
}

impl From<zip::result::ZipError> for BuilderError {
    fn from(err: zip::result::ZipError) -> Self {
        BuilderError::Packaging(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, BuilderError>;
