use std::io::{self, Write};
use std::path::{Path, PathBuf};
use async_trait::async_trait;
use tempfile::NamedTempFile;
use tokio::fs;
use tracing::{debug, info};

use crate::models::patient::PatientDocument;
use super::errors::RepositoryError;
use super::record_store::RecordStore;

/// Record store backed by a single pretty-printed JSON file.
///
/// Each save writes its own uniquely named temp file next to the target and
/// renames it over the target, so a reader sees either the old or the new
/// document, never a partial one.
#[derive(Debug, Clone)]
pub struct JsonFileStore {
    path: PathBuf,
}

impl JsonFileStore {
    /// Create a store for the document at `path`
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Location of the backing document
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Create the parent directory and an empty document if the file is missing.
    ///
    /// Returns `true` when a new document was written.
    pub async fn ensure_exists(&self) -> Result<bool, RepositoryError> {
        if fs::try_exists(&self.path)
            .await
            .map_err(|e| RepositoryError::io(&self.path, e))?
        {
            return Ok(false);
        }

        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent)
                .await
                .map_err(|e| RepositoryError::io(parent, e))?;
        }

        info!("Creating empty patient document at {}", self.path.display());
        self.save(&PatientDocument::new()).await?;
        Ok(true)
    }
}

fn write_atomically(path: &Path, bytes: &[u8]) -> Result<(), RepositoryError> {
    let dir = path
        .parent()
        .filter(|p| !p.as_os_str().is_empty())
        .unwrap_or_else(|| Path::new("."));

    let mut temp = NamedTempFile::new_in(dir).map_err(|e| RepositoryError::io(dir, e))?;
    temp.write_all(bytes)
        .and_then(|_| temp.as_file().sync_all())
        .map_err(|e| RepositoryError::io(temp.path(), e))?;
    // Dropping the error's file handle removes the temp file
    temp.persist(path)
        .map_err(|e| RepositoryError::io(path, e.error))?;
    Ok(())
}

#[async_trait]
impl RecordStore for JsonFileStore {
    async fn load(&self) -> Result<PatientDocument, RepositoryError> {
        let bytes = fs::read(&self.path)
            .await
            .map_err(|e| RepositoryError::io(&self.path, e))?;
        let document: PatientDocument = serde_json::from_slice(&bytes)?;
        debug!("Loaded {} records from {}", document.len(), self.path.display());
        Ok(document)
    }

    async fn save(&self, document: &PatientDocument) -> Result<(), RepositoryError> {
        let bytes = serde_json::to_vec_pretty(document)?;
        let path = self.path.clone();

        tokio::task::spawn_blocking(move || write_atomically(&path, &bytes))
            .await
            .map_err(|e| RepositoryError::io(&self.path, io::Error::new(io::ErrorKind::Other, e)))??;

        debug!("Saved {} records to {}", document.len(), self.path.display());
        Ok(())
    }
}
