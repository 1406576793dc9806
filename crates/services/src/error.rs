//! Shared error types for the services crate.

use thiserror::Error;

use literacy_core::model::{CatalogError, PassageError};
use storage::repository::StorageError;

/// Errors emitted by `CatalogService`.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum CatalogServiceError {
    #[error(transparent)]
    Catalog(#[from] CatalogError),
    #[error(transparent)]
    Passage(#[from] PassageError),
    #[error(transparent)]
    Storage(#[from] StorageError),
}

/// Errors emitted by `ProgressService`.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum ProgressServiceError {
    #[error("no student named {0:?} has logged in")]
    UnknownStudent(String),
    #[error(transparent)]
    Storage(#[from] StorageError),
}
