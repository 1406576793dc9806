use thiserror::Error;

use crate::model::passage::Passage;

//
// ─── ERRORS ────────────────────────────────────────────────────────────────────
//

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum CatalogError {
    #[error("invalid selection: {index} (catalog has {len} passages)")]
    InvalidSelection { index: usize, len: usize },

    #[error("no passages available")]
    EmptyCatalog,
}

//
// ─── CATALOG ───────────────────────────────────────────────────────────────────
//

/// Ordered collection of passages.
///
/// Order is insertion order; deleting shifts later passages down by one.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PassageCatalog {
    passages: Vec<Passage>,
}

impl PassageCatalog {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn from_passages(passages: Vec<Passage>) -> Self {
        Self { passages }
    }

    /// Add a passage at the end of the catalog.
    pub fn append(&mut self, passage: Passage) {
        self.passages.push(passage);
    }

    /// Remove and return the most recently appended passage.
    pub fn pop(&mut self) -> Option<Passage> {
        self.passages.pop()
    }

    #[must_use]
    pub fn list(&self) -> &[Passage] {
        &self.passages
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.passages.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.passages.is_empty()
    }

    /// Fetch the passage at a zero-based index.
    ///
    /// # Errors
    ///
    /// Returns `CatalogError::EmptyCatalog` when there are no passages, or
    /// `CatalogError::InvalidSelection` when `index` is out of range.
    pub fn select(&self, index: usize) -> Result<&Passage, CatalogError> {
        self.ensure_not_empty()?;
        self.passages
            .get(index)
            .ok_or(CatalogError::InvalidSelection {
                index,
                len: self.passages.len(),
            })
    }

    /// Remove and return the passage at a zero-based index.
    ///
    /// # Errors
    ///
    /// Returns `CatalogError::InvalidSelection` if `index >= len`; the catalog
    /// is left untouched.
    pub fn delete_at(&mut self, index: usize) -> Result<Passage, CatalogError> {
        if index >= self.passages.len() {
            return Err(CatalogError::InvalidSelection {
                index,
                len: self.passages.len(),
            });
        }
        Ok(self.passages.remove(index))
    }

    /// # Errors
    ///
    /// Returns `CatalogError::EmptyCatalog` if there are no passages.
    pub fn ensure_not_empty(&self) -> Result<(), CatalogError> {
        if self.passages.is_empty() {
            return Err(CatalogError::EmptyCatalog);
        }
        Ok(())
    }
}
