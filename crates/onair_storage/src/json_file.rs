//! Single-file JSON history backend.

use crate::{HISTORY_CAP, ScriptHistory};
use onair_core::GeneratedScript;
use onair_error::{OnairResult, StorageError, StorageErrorKind};
use std::path::PathBuf;
use tokio::sync::Mutex;

/// Script history stored as one JSON file.
///
/// The whole history is held in memory and rewritten on every mutation.
/// Writes go to a temp file first and are renamed into place, so a crash
/// mid-write never leaves a truncated history behind.
pub struct JsonFileHistory {
    path: PathBuf,
    entries: Mutex<Vec<GeneratedScript>>,
}

impl JsonFileHistory {
    /// Create a history backed by the given file.
    ///
    /// No I/O happens here; call [`ScriptHistory::load`] to hydrate from disk.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        tracing::debug!(path = %path.display(), "Created JSON file history");
        Self {
            path,
            entries: Mutex::new(Vec::new()),
        }
    }

    /// The file this history persists to.
    pub fn path(&self) -> &std::path::Path {
        &self.path
    }

    async fn persist(&self, entries: &[GeneratedScript]) -> OnairResult<()> {
        let json = serde_json::to_string_pretty(entries)
            .map_err(|e| StorageError::new(StorageErrorKind::Serialization(e.to_string())))?;

        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                tokio::fs::create_dir_all(parent).await.map_err(|e| {
                    StorageError::new(StorageErrorKind::DirectoryCreation(format!(
                        "{}: {}",
                        parent.display(),
                        e
                    )))
                })?;
            }
        }

        // Write to temp file first, then rename for atomicity
        let temp_path = self.path.with_extension("tmp");
        tokio::fs::write(&temp_path, json).await.map_err(|e| {
            StorageError::new(StorageErrorKind::FileWrite(format!(
                "{}: {}",
                temp_path.display(),
                e
            )))
        })?;

        tokio::fs::rename(&temp_path, &self.path).await.map_err(|e| {
            StorageError::new(StorageErrorKind::FileWrite(format!(
                "rename {} to {}: {}",
                temp_path.display(),
                self.path.display(),
                e
            )))
        })?;

        tracing::debug!(
            path = %self.path.display(),
            count = entries.len(),
            "Persisted history"
        );

        Ok(())
    }
}

#[async_trait::async_trait]
impl ScriptHistory for JsonFileHistory {
    #[tracing::instrument(skip(self), fields(path = %self.path.display()))]
    async fn load(&self) -> OnairResult<()> {
        let data = match tokio::fs::read(&self.path).await {
            Ok(data) => data,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                tracing::debug!("No history file yet, starting empty");
                let mut entries = self.entries.lock().await;
                entries.clear();
                return Ok(());
            }
            Err(e) => {
                return Err(StorageError::new(StorageErrorKind::FileRead(format!(
                    "{}: {}",
                    self.path.display(),
                    e
                )))
                .into());
            }
        };

        let loaded: Vec<GeneratedScript> = serde_json::from_slice(&data).map_err(|e| {
            StorageError::new(StorageErrorKind::MalformedHistory(format!(
                "{}: {}",
                self.path.display(),
                e
            )))
        })?;

        tracing::info!(count = loaded.len(), "Loaded history");

        let mut entries = self.entries.lock().await;
        *entries = loaded;
        entries.truncate(HISTORY_CAP);
        Ok(())
    }

    async fn list(&self) -> OnairResult<Vec<GeneratedScript>> {
        Ok(self.entries.lock().await.clone())
    }

    #[tracing::instrument(skip(self, script), fields(id = %script.id))]
    async fn append(&self, script: GeneratedScript) -> OnairResult<()> {
        let mut entries = self.entries.lock().await;
        entries.insert(0, script);
        entries.truncate(HISTORY_CAP);
        self.persist(&entries).await?;
        tracing::info!(count = entries.len(), "Appended script to history");
        Ok(())
    }

    #[tracing::instrument(skip(self))]
    async fn remove(&self, id: &str) -> OnairResult<()> {
        let mut entries = self.entries.lock().await;
        let before = entries.len();
        entries.retain(|entry| entry.id != id);
        if entries.len() == before {
            tracing::debug!(id = %id, "No history entry with this id");
            return Ok(());
        }
        self.persist(&entries).await?;
        tracing::info!(id = %id, "Removed script from history");
        Ok(())
    }

    #[tracing::instrument(skip(self), fields(path = %self.path.display()))]
    async fn clear(&self) -> OnairResult<()> {
        let mut entries = self.entries.lock().await;
        entries.clear();
        self.persist(&entries).await?;
        tracing::info!("Cleared history");
        Ok(())
    }
}
