mod catalog;
mod passage;
mod student;

pub use catalog::{CatalogError, PassageCatalog};
pub use passage::{Passage, PassageDraft, PassageError};
pub use student::{AttemptEntry, Outcome, StudentBook, StudentRecord};
