//! Document storage.
//!
//! The model only produces [`Document`] values. Persisting them belongs to a
//! [`DocumentStore`]; [`DirectoryStore`] is the filesystem implementation.

use crate::config::ExportConfig;
use crate::models::{Custard, Document};
use anyhow::{Context, Result};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

/// Destination for serialized custard documents.
pub trait DocumentStore {
    /// Persists `document` and returns where it was stored.
    fn store(&self, document: &Document) -> Result<PathBuf>;
}

/// Writes each document to `<output_dir>/<identifier>.json`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DirectoryStore {
    output_dir: PathBuf,
    pretty: bool,
}

impl DirectoryStore {
    /// Creates a store writing into `output_dir`.
    pub fn new(output_dir: impl Into<PathBuf>, pretty: bool) -> Self {
        Self {
            output_dir: output_dir.into(),
            pretty,
        }
    }

    /// Creates a store from export settings.
    pub fn from_config(config: &ExportConfig) -> Self {
        Self::new(config.output_dir.clone(), config.pretty)
    }

    /// Target directory.
    pub fn output_dir(&self) -> &Path {
        &self.output_dir
    }

    /// Path a document with `identifier` is written to.
    pub fn path_for(&self, identifier: &str) -> PathBuf {
        self.output_dir.join(format!("{identifier}.json"))
    }

    /// Serializes `custard` with this store's formatting and writes it.
    pub fn write_custard(&self, custard: &Custard) -> Result<PathBuf> {
        debug!(identifier = custard.identifier(), pretty = self.pretty, "Exporting custard");
        self.store(&custard.to_document(self.pretty))
            .with_context(|| format!("Failed to export custard '{}'", custard.identifier()))
    }
}

impl DocumentStore for DirectoryStore {
    fn store(&self, document: &Document) -> Result<PathBuf> {
        fs::create_dir_all(&self.output_dir).with_context(|| {
            format!(
                "Failed to create output directory: {}",
                self.output_dir.display()
            )
        })?;

        let path = self.path_for(document.identifier());
        atomic_write(&path, document.bytes())?;

        info!(path = %path.display(), bytes = document.bytes().len(), "Wrote custard document");
        Ok(path)
    }
}

/// Writes through a temp file and renames it into place.
fn atomic_write(path: &Path, content: &[u8]) -> Result<()> {
    let temp_path = path.with_extension("json.tmp");

    fs::write(&temp_path, content)
        .with_context(|| format!("Failed to write to temporary file: {}", temp_path.display()))?;

    fs::rename(&temp_path, path)
        .with_context(|| format!("Failed to rename temporary file to: {}", path.display()))?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_store_writes_identifier_json() {
        let temp_dir = TempDir::new().unwrap();
        let store = DirectoryStore::new(temp_dir.path().join("results"), false);
        let document = Document::new("my_custard", b"{}".to_vec()).unwrap();

        let path = store.store(&document).unwrap();

        assert_eq!(path, temp_dir.path().join("results").join("my_custard.json"));
        assert_eq!(fs::read(&path).unwrap(), b"{}");
        assert!(!path.with_extension("json.tmp").exists());
    }

    #[test]
    fn test_store_overwrites_existing_document() {
        let temp_dir = TempDir::new().unwrap();
        let store = DirectoryStore::new(temp_dir.path(), true);

        for body in ["[1]", "[2]"] {
            store.store(&Document::new("bundle", body).unwrap()).unwrap();
        }

        assert_eq!(fs::read_to_string(store.path_for("bundle")).unwrap(), "[2]");
    }

    #[test]
    fn test_from_config() {
        let config = ExportConfig {
            output_dir: PathBuf::from("out"),
            pretty: false,
        };
        let store = DirectoryStore::from_config(&config);
        assert_eq!(store.output_dir(), Path::new("out"));
        assert_eq!(store.path_for("x"), PathBuf::from("out").join("x.json"));
    }
}
