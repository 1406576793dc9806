#![forbid(unsafe_code)]

pub mod catalog_service;
pub mod error;
pub mod progress_service;

pub use literacy_core::Clock;

pub use catalog_service::CatalogService;
pub use error::{CatalogServiceError, ProgressServiceError};
pub use progress_service::ProgressService;
