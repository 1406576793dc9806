use thiserror::Error;

use services::{CatalogServiceError, ProgressServiceError};

/// Failures that end a console session.
///
/// Bad menu input, an empty catalog and a wrong password are handled inside
/// the session; only terminal I/O and store writes surface here.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum SessionError {
    #[error("terminal I/O failed: {0}")]
    Io(#[from] std::io::Error),
    #[error(transparent)]
    Catalog(#[from] CatalogServiceError),
    #[error(transparent)]
    Progress(#[from] ProgressServiceError),
}
