//! JSON file backend for the order document.
//!
//! Saves go through a sibling temporary file that is flushed to disk and then
//! renamed over the target, so a crash mid-write leaves the previous document
//! intact.

use crate::document_store::{DocumentStore, DocumentStoreError, OrderDocument};
use std::future::Future;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use std::pin::Pin;
use tokio::io::AsyncWriteExt;

/// Stores the order document as pretty-printed JSON at a fixed path.
#[derive(Debug, Clone)]
pub struct JsonFileStore {
    path: PathBuf,
}

impl JsonFileStore {
    /// Creates a store backed by the file at `path`.
    ///
    /// Nothing is touched on disk until the first load or save.
    #[must_use]
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Path of the backing file
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    fn temp_path(&self) -> PathBuf {
        let mut name = self
            .path
            .file_name()
            .map(std::ffi::OsStr::to_os_string)
            .unwrap_or_default();
        name.push(".tmp");
        self.path.with_file_name(name)
    }

    async fn read_document(&self) -> Result<Option<OrderDocument>, DocumentStoreError> {
        let bytes = match tokio::fs::read(&self.path).await {
            Ok(bytes) => bytes,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(None),
            Err(e) => return Err(e.into()),
        };

        // A blank file has never held a document.
        if bytes.iter().all(u8::is_ascii_whitespace) {
            return Ok(None);
        }

        let document = serde_json::from_slice(&bytes)?;
        Ok(Some(document))
    }

    async fn write_document(&self, document: &OrderDocument) -> Result<(), DocumentStoreError> {
        let bytes = serde_json::to_vec_pretty(document)?;

        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            tokio::fs::create_dir_all(parent).await?;
        }

        let temp_path = self.temp_path();
        let mut file = tokio::fs::File::create(&temp_path).await?;
        file.write_all(&bytes).await?;
        file.sync_all().await?;
        drop(file);

        tokio::fs::rename(&temp_path, &self.path).await?;
        tracing::debug!(path = %self.path.display(), bytes = bytes.len(), "Order document written");
        Ok(())
    }
}

impl DocumentStore for JsonFileStore {
    fn load(
        &self,
    ) -> Pin<Box<dyn Future<Output = Result<Option<OrderDocument>, DocumentStoreError>> + Send + '_>>
    {
        Box::pin(self.read_document())
    }

    fn save<'a>(
        &'a self,
        document: &'a OrderDocument,
    ) -> Pin<Box<dyn Future<Output = Result<(), DocumentStoreError>> + Send + 'a>> {
        Box::pin(self.write_document(document))
    }

    fn describe(&self) -> String {
        format!("json file {}", self.path.display())
    }
}
