use std::fs;
use std::io::ErrorKind;
use std::path::Path;

use serde::Serialize;
use serde::de::DeserializeOwned;
use thiserror::Error;

use crate::repository::StorageError;

/// Why a stored document could not be used.
#[derive(Debug, Error)]
pub(crate) enum DocumentError {
    #[error("document does not exist")]
    Missing,
    #[error("document could not be read: {0}")]
    Unreadable(#[source] std::io::Error),
    #[error("document is corrupt: {0}")]
    Corrupt(#[source] serde_json::Error),
}

pub(crate) fn read_document<T: DeserializeOwned>(path: &Path) -> Result<T, DocumentError> {
    let contents = match fs::read_to_string(path) {
        Ok(contents) => contents,
        Err(e) if e.kind() == ErrorKind::NotFound => return Err(DocumentError::Missing),
        Err(e) => return Err(DocumentError::Unreadable(e)),
    };
    serde_json::from_str(&contents).map_err(DocumentError::Corrupt)
}

/// Load a JSON document, falling back to `default` when it is missing or unusable.
///
/// This is the one place where read failures are swallowed. A corrupt file is
/// logged and replaced by the default on the next save.
pub fn load_document<T: DeserializeOwned>(path: &Path, default: T) -> T {
    match read_document(path) {
        Ok(doc) => doc,
        Err(DocumentError::Missing) => {
            tracing::debug!(path = %path.display(), "store missing, using default");
            default
        }
        Err(err) => {
            tracing::warn!(path = %path.display(), error = %err, "store unusable, using default");
            default
        }
    }
}

/// Serialize `doc` as pretty JSON, fully replacing whatever `path` held.
///
/// # Errors
///
/// Returns `StorageError::Serialization` if encoding fails, or
/// `StorageError::Io` if the file cannot be written.
pub fn save_document<T: Serialize>(path: &Path, doc: &T) -> Result<(), StorageError> {
    let json =
        serde_json::to_string_pretty(doc).map_err(|e| StorageError::Serialization(e.to_string()))?;
    fs::write(path, json).map_err(|source| StorageError::Io {
        path: path.to_path_buf(),
        source,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::BTreeMap;

    #[test]
    fn missing_file_yields_default() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nope.json");
        let loaded: Vec<String> = load_document(&path, vec!["fallback".to_owned()]);
        assert_eq!(loaded, vec!["fallback".to_owned()]);
        assert!(matches!(
            read_document::<Vec<String>>(&path),
            Err(DocumentError::Missing)
        ));
    }

    #[test]
    fn corrupt_file_yields_default() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("broken.json");
        fs::write(&path, "{ not json").unwrap();

        let loaded: BTreeMap<String, u32> = load_document(&path, BTreeMap::new());
        assert!(loaded.is_empty());
        assert!(matches!(
            read_document::<BTreeMap<String, u32>>(&path),
            Err(DocumentError::Corrupt(_))
        ));
    }

    #[test]
    fn wrong_shape_counts_as_corrupt() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("shape.json");
        fs::write(&path, r#"{"a": 1}"#).unwrap();

        let loaded: Vec<u32> = load_document(&path, vec![7]);
        assert_eq!(loaded, vec![7]);
    }

    #[test]
    fn save_then_load_round_trips_and_overwrites() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("doc.json");

        save_document(&path, &vec![1, 2, 3]).unwrap();
        save_document(&path, &vec![4]).unwrap();

        let loaded: Vec<u32> = load_document(&path, Vec::new());
        assert_eq!(loaded, vec![4]);
    }

    #[test]
    fn save_into_missing_directory_is_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("missing").join("doc.json");
        let err = save_document(&path, &vec![1]).unwrap_err();
        assert!(matches!(err, StorageError::Io { .. }));
    }
}
