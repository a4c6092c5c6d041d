//! JSON file storage backend
//!
//! Stores the document as pretty-printed JSON in a single file. Writes go
//! to a sibling temporary file which is then renamed over the target, so a
//! reader never sees a half-written document.

use std::collections::HashMap;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use async_trait::async_trait;
use tokio::fs;
use tracing::{debug, trace};

use super::backend::{DocumentBackend, HealthStatus};
use super::error::{StorageError, StorageResult};
use super::schema::Document;

/// Document backend writing to a JSON file
#[derive(Debug, Clone)]
pub struct JsonFileBackend {
    path: PathBuf,
}

impl JsonFileBackend {
    /// Create a backend for the given file path
    ///
    /// Nothing is touched on disk until the first read or write.
    pub fn new(path: impl AsRef<Path>) -> Self {
        let path = path.as_ref().to_path_buf();
        debug!("using JSON file backend at {}", path.display());
        Self { path }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn temp_path(&self) -> PathBuf {
        let mut name = self
            .path
            .file_name()
            .map(|n| n.to_os_string())
            .unwrap_or_else(|| "db.json".into());
        name.push(".tmp");
        self.path.with_file_name(name)
    }

    async fn ensure_parent_dir(&self) -> StorageResult<()> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent).await?;
            }
        }
        Ok(())
    }
}

#[async_trait]
impl DocumentBackend for JsonFileBackend {
    async fn read(&self) -> StorageResult<Option<Document>> {
        let raw = match fs::read_to_string(&self.path).await {
            Ok(raw) => raw,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                trace!("no document at {}", self.path.display());
                return Ok(None);
            }
            Err(e) => return Err(e.into()),
        };

        let document = serde_json::from_str(&raw).map_err(|e| {
            StorageError::SerializationError(format!("{}: {}", self.path.display(), e))
        })?;

        Ok(Some(document))
    }

    async fn write(&self, document: &Document) -> StorageResult<()> {
        self.ensure_parent_dir().await?;

        let encoded = serde_json::to_string_pretty(document)?;
        let temp = self.temp_path();

        fs::write(&temp, encoded).await?;
        if let Err(e) = fs::rename(&temp, &self.path).await {
            let _ = fs::remove_file(&temp).await;
            return Err(StorageError::BackendError(format!(
                "failed to replace {}: {}",
                self.path.display(),
                e
            )));
        }

        trace!(
            "wrote document ({} services, {} history entries) to {}",
            document.services.len(),
            document.status_history.len(),
            self.path.display()
        );
        Ok(())
    }

    async fn health_check(&self) -> StorageResult<HealthStatus> {
        let mut metadata = HashMap::from([
            ("backend".to_string(), "file".to_string()),
            ("path".to_string(), self.path.display().to_string()),
        ]);

        let exists = match fs::try_exists(&self.path).await {
            Ok(exists) => exists,
            Err(e) => {
                return Ok(HealthStatus {
                    healthy: false,
                    message: format!("cannot access {}: {}", self.path.display(), e),
                    metadata,
                });
            }
        };
        metadata.insert("exists".to_string(), exists.to_string());

        Ok(HealthStatus {
            healthy: true,
            message: if exists {
                format!("JSON file backend operational ({})", self.path.display())
            } else {
                format!("JSON file backend not initialized yet ({})", self.path.display())
            },
            metadata,
        })
    }

    fn describe(&self) -> String {
        format!("JSON file: {}", self.path.display())
    }
}
