use std::sync::Arc;

use literacy_core::model::{Passage, PassageCatalog, PassageDraft};
use storage::repository::PassageRepository;

use crate::error::CatalogServiceError;

/// Owns the passage catalog for a session and saves it after every change.
pub struct CatalogService {
    repo: Arc<dyn PassageRepository>,
    catalog: PassageCatalog,
}

impl CatalogService {
    /// Load the catalog once from the repository.
    ///
    /// # Errors
    ///
    /// Returns `CatalogServiceError::Storage` if the backend is unavailable.
    pub fn load(repo: Arc<dyn PassageRepository>) -> Result<Self, CatalogServiceError> {
        let catalog = repo.load_passages()?;
        tracing::info!(passages = catalog.len(), "passage catalog loaded");
        Ok(Self { repo, catalog })
    }

    #[must_use]
    pub fn catalog(&self) -> &PassageCatalog {
        &self.catalog
    }

    #[must_use]
    pub fn passages(&self) -> &[Passage] {
        self.catalog.list()
    }

    /// Fetch a passage by zero-based index.
    ///
    /// # Errors
    ///
    /// Returns `CatalogServiceError::Catalog` for an empty catalog or an
    /// out-of-range index.
    pub fn select(&self, index: usize) -> Result<&Passage, CatalogServiceError> {
        Ok(self.catalog.select(index)?)
    }

    /// Validate a draft, append it and persist the catalog.
    ///
    /// If persistence fails, the passage is removed again.
    ///
    /// # Errors
    ///
    /// Returns `CatalogServiceError::Passage` for validation failures.
    /// Returns `CatalogServiceError::Storage` if persistence fails.
    pub fn add_passage(&mut self, draft: PassageDraft) -> Result<&Passage, CatalogServiceError> {
        let passage = draft.validate()?;
        let title = passage.title().to_owned();
        self.catalog.append(passage);

        if let Err(err) = self.repo.save_passages(&self.catalog) {
            self.catalog.pop();
            return Err(err.into());
        }

        tracing::info!(%title, passages = self.catalog.len(), "passage added");
        Ok(self.catalog.select(self.catalog.len() - 1)?)
    }

    /// Delete the passage at a zero-based index and persist the catalog.
    ///
    /// If persistence fails, the passage is put back in place.
    ///
    /// # Errors
    ///
    /// Returns `CatalogServiceError::Catalog` if the index is out of range; the
    /// catalog is unchanged and nothing is written.
    /// Returns `CatalogServiceError::Storage` if persistence fails.
    pub fn delete_at(&mut self, index: usize) -> Result<Passage, CatalogServiceError> {
        let original = self.catalog.clone();
        let removed = self.catalog.delete_at(index)?;

        if let Err(err) = self.repo.save_passages(&self.catalog) {
            self.catalog = original;
            return Err(err.into());
        }

        tracing::info!(title = %removed.title(), passages = self.catalog.len(), "passage deleted");
        Ok(removed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use literacy_core::model::{CatalogError, PassageError};
    use storage::repository::{InMemoryRepository, StorageError};

    struct ReadOnlyRepository;

    impl PassageRepository for ReadOnlyRepository {
        fn load_passages(&self) -> Result<PassageCatalog, StorageError> {
            let mut catalog = PassageCatalog::new();
            catalog.append(PassageDraft::new("Kept", "b", "q", "a").validate().unwrap());
            Ok(catalog)
        }

        fn save_passages(&self, _catalog: &PassageCatalog) -> Result<(), StorageError> {
            Err(StorageError::Io {
                path: "read-only.json".into(),
                source: std::io::Error::other("read-only"),
            })
        }
    }

    fn draft(title: &str) -> PassageDraft {
        PassageDraft::new(title, "body", "question?", "Answer")
    }

    #[test]
    fn add_passage_persists_catalog() {
        let repo = Arc::new(InMemoryRepository::new());
        let mut service = CatalogService::load(repo.clone()).unwrap();

        let added = service.add_passage(draft("Kancil")).unwrap();
        assert_eq!(added.answer_key(), "answer");

        let stored = repo.load_passages().unwrap();
        assert_eq!(stored.len(), 1);
        assert_eq!(stored.list()[0].title(), "Kancil");
    }

    #[test]
    fn add_passage_rejects_invalid_draft_without_saving() {
        let repo = Arc::new(InMemoryRepository::new());
        let mut service = CatalogService::load(repo.clone()).unwrap();

        let err = service.add_passage(draft("   ")).unwrap_err();
        assert!(matches!(err, CatalogServiceError::Passage(PassageError::EmptyTitle)));
        assert!(service.catalog().is_empty());
        assert!(repo.load_passages().unwrap().is_empty());
    }

    #[test]
    fn delete_at_persists_and_invalid_index_does_not() {
        let repo = Arc::new(InMemoryRepository::new());
        let mut service = CatalogService::load(repo.clone()).unwrap();
        for title in ["A", "B", "C"] {
            service.add_passage(draft(title)).unwrap();
        }

        let removed = service.delete_at(0).unwrap();
        assert_eq!(removed.title(), "A");
        assert_eq!(repo.load_passages().unwrap().len(), 2);

        let err = service.delete_at(2).unwrap_err();
        assert!(matches!(
            err,
            CatalogServiceError::Catalog(CatalogError::InvalidSelection { index: 2, len: 2 })
        ));
        assert_eq!(service.passages().len(), 2);
    }

    #[test]
    fn failed_save_rolls_back() {
        let mut service = CatalogService::load(Arc::new(ReadOnlyRepository)).unwrap();

        assert!(matches!(
            service.add_passage(draft("New")),
            Err(CatalogServiceError::Storage(_))
        ));
        assert_eq!(service.passages().len(), 1);

        assert!(service.delete_at(0).is_err());
        assert_eq!(service.passages()[0].title(), "Kept");
    }

    #[test]
    fn select_on_empty_catalog_reports_empty() {
        let service = CatalogService::load(Arc::new(InMemoryRepository::new())).unwrap();
        assert!(matches!(
            service.select(0),
            Err(CatalogServiceError::Catalog(CatalogError::EmptyCatalog))
        ));
    }
}
