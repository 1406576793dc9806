use std::path::PathBuf;
use std::sync::{Arc, Mutex};

use literacy_core::model::{PassageCatalog, StudentBook};
use thiserror::Error;

/// Errors surfaced by storage adapters.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum StorageError {
    #[error("failed to write {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("store lock poisoned: {0}")]
    Poisoned(String),

    #[error("serialization error: {0}")]
    Serialization(String),
}

/// Repository contract for the passage catalog.
///
/// The whole catalog is loaded and saved as one document.
pub trait PassageRepository: Send + Sync {
    /// Load the catalog, or an empty one if nothing usable is stored.
    ///
    /// # Errors
    ///
    /// Returns `StorageError` only if the backend itself is unavailable.
    fn load_passages(&self) -> Result<PassageCatalog, StorageError>;

    /// Replace the stored catalog.
    ///
    /// # Errors
    ///
    /// Returns `StorageError` if the catalog cannot be written.
    fn save_passages(&self, catalog: &PassageCatalog) -> Result<(), StorageError>;
}

/// Repository contract for student progress records.
pub trait StudentRepository: Send + Sync {
    /// Load every student record, or an empty book if nothing usable is stored.
    ///
    /// # Errors
    ///
    /// Returns `StorageError` only if the backend itself is unavailable.
    fn load_students(&self) -> Result<StudentBook, StorageError>;

    /// Replace the stored student records.
    ///
    /// # Errors
    ///
    /// Returns `StorageError` if the records cannot be written.
    fn save_students(&self, book: &StudentBook) -> Result<(), StorageError>;
}

/// Simple in-memory repository implementation for testing and prototyping.
#[derive(Clone, Default)]
pub struct InMemoryRepository {
    passages: Arc<Mutex<PassageCatalog>>,
    students: Arc<Mutex<StudentBook>>,
}

impl InMemoryRepository {
    #[must_use]
    pub fn new() -> Self {
        Self {
            passages: Arc::new(Mutex::new(PassageCatalog::new())),
            students: Arc::new(Mutex::new(StudentBook::new())),
        }
    }
}

impl PassageRepository for InMemoryRepository {
    fn load_passages(&self) -> Result<PassageCatalog, StorageError> {
        let guard = self
            .passages
            .lock()
            .map_err(|e| StorageError::Poisoned(e.to_string()))?;
        Ok(guard.clone())
    }

    fn save_passages(&self, catalog: &PassageCatalog) -> Result<(), StorageError> {
        let mut guard = self
            .passages
            .lock()
            .map_err(|e| StorageError::Poisoned(e.to_string()))?;
        *guard = catalog.clone();
        Ok(())
    }
}

impl StudentRepository for InMemoryRepository {
    fn load_students(&self) -> Result<StudentBook, StorageError> {
        let guard = self
            .students
            .lock()
            .map_err(|e| StorageError::Poisoned(e.to_string()))?;
        Ok(guard.clone())
    }

    fn save_students(&self, book: &StudentBook) -> Result<(), StorageError> {
        let mut guard = self
            .students
            .lock()
            .map_err(|e| StorageError::Poisoned(e.to_string()))?;
        *guard = book.clone();
        Ok(())
    }
}

/// Aggregates passage and student repositories behind trait objects for easy backend swapping.
#[derive(Clone)]
pub struct Storage {
    pub passages: Arc<dyn PassageRepository>,
    pub students: Arc<dyn StudentRepository>,
}

impl Storage {
    #[must_use]
    pub fn in_memory() -> Self {
        let repo = InMemoryRepository::new();
        let passages: Arc<dyn PassageRepository> = Arc::new(repo.clone());
        let students: Arc<dyn StudentRepository> = Arc::new(repo);
        Self { passages, students }
    }
}
