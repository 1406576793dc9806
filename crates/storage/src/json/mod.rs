use std::path::{Path, PathBuf};
use std::sync::Arc;

use literacy_core::model::{PassageCatalog, StudentBook};

use crate::repository::{PassageRepository, Storage, StorageError, StudentRepository};

mod document;
pub mod mapping;

pub use document::{load_document, save_document};
use mapping::{PassageDoc, StudentsDoc, catalog_from_docs, catalog_to_docs};

pub const DEFAULT_PASSAGES_FILE: &str = "passages.json";
pub const DEFAULT_STUDENTS_FILE: &str = "students.json";

/// Flat-file backend: one JSON document for passages, one for students.
///
/// No locking; a single session is expected to own the files.
#[derive(Debug, Clone)]
pub struct JsonRepository {
    passages_path: PathBuf,
    students_path: PathBuf,
}

impl JsonRepository {
    #[must_use]
    pub fn new(passages_path: impl Into<PathBuf>, students_path: impl Into<PathBuf>) -> Self {
        Self {
            passages_path: passages_path.into(),
            students_path: students_path.into(),
        }
    }

    /// Both documents under `dir` with their default file names.
    #[must_use]
    pub fn in_dir(dir: &Path) -> Self {
        Self::new(
            dir.join(DEFAULT_PASSAGES_FILE),
            dir.join(DEFAULT_STUDENTS_FILE),
        )
    }

    #[must_use]
    pub fn passages_path(&self) -> &Path {
        &self.passages_path
    }

    #[must_use]
    pub fn students_path(&self) -> &Path {
        &self.students_path
    }
}

impl PassageRepository for JsonRepository {
    fn load_passages(&self) -> Result<PassageCatalog, StorageError> {
        let docs: Vec<PassageDoc> = load_document(&self.passages_path, Vec::new());
        Ok(catalog_from_docs(docs))
    }

    fn save_passages(&self, catalog: &PassageCatalog) -> Result<(), StorageError> {
        save_document(&self.passages_path, &catalog_to_docs(catalog))
    }
}

impl StudentRepository for JsonRepository {
    fn load_students(&self) -> Result<StudentBook, StorageError> {
        let doc: StudentsDoc = load_document(&self.students_path, StudentsDoc::default());
        Ok(doc.into_book())
    }

    fn save_students(&self, book: &StudentBook) -> Result<(), StorageError> {
        save_document(&self.students_path, &StudentsDoc::from_book(book))
    }
}

impl Storage {
    /// Build a `Storage` backed by two JSON files.
    #[must_use]
    pub fn json(repo: JsonRepository) -> Self {
        let passages: Arc<dyn PassageRepository> = Arc::new(repo.clone());
        let students: Arc<dyn StudentRepository> = Arc::new(repo);
        Self { passages, students }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn in_dir_uses_default_file_names() {
        let repo = JsonRepository::in_dir(Path::new("/data"));
        assert_eq!(repo.passages_path(), Path::new("/data/passages.json"));
        assert_eq!(repo.students_path(), Path::new("/data/students.json"));
    }
}
