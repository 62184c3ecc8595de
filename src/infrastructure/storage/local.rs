use crate::domain::errors::{DomainError, DomainResult};
use crate::domain::ports::key_value_store::KeyValueStore;
use async_trait::async_trait;
use std::path::PathBuf;
use tokio::fs;

/// Stores each key as `<base_path>/<key>.json`
#[derive(Clone)]
pub struct LocalFileStore {
    base_path: PathBuf,
}

impl LocalFileStore {
    pub fn new(base_path: impl Into<PathBuf>) -> Self {
        Self {
            base_path: base_path.into(),
        }
    }

    pub fn base_path(&self) -> &PathBuf {
        &self.base_path
    }

    /// Map a key to its file, refusing anything that could leave `base_path`
    fn resolve_path(&self, key: &str) -> DomainResult<PathBuf> {
        if key.is_empty()
            || key.contains('/')
            || key.contains('\\')
            || key.contains("..")
            || key.starts_with('.')
            || key.contains("__")
            || key.contains("_:")
            || key.contains(":_")
        {
            return Err(DomainError::Storage(format!("Invalid storage key: {}", key)));
        }

        // ':' separates the namespace and is not portable in file names. A literal
        // '_' never touches another '_' or ':', so the mapping stays one-to-one.
        let file_name = format!("{}.json", key.replace(':', "__"));
        Ok(self.base_path.join(file_name))
    }
}

#[async_trait]
impl KeyValueStore for LocalFileStore {
    async fn get(&self, key: &str) -> DomainResult<Option<String>> {
        let file_path = self.resolve_path(key)?;

        match fs::read_to_string(&file_path).await {
            Ok(contents) => Ok(Some(contents)),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(None),
            Err(e) => Err(DomainError::Storage(format!(
                "Failed to read {}: {}",
                file_path.display(),
                e
            ))),
        }
    }

    async fn set(&self, key: &str, value: &str) -> DomainResult<()> {
        let file_path = self.resolve_path(key)?;

        fs::create_dir_all(&self.base_path)
            .await
            .map_err(|e| DomainError::Storage(format!("Failed to create directory: {}", e)))?;

        // Write next to the target and rename, so a reader never sees half a snapshot
        let tmp_path = file_path.with_extension("json.tmp");
        fs::write(&tmp_path, value)
            .await
            .map_err(|e| DomainError::Storage(format!("Failed to write file: {}", e)))?;
        fs::rename(&tmp_path, &file_path)
            .await
            .map_err(|e| DomainError::Storage(format!("Failed to replace file: {}", e)))?;

        tracing::debug!("Stored snapshot: path={}", file_path.display());
        Ok(())
    }

    async fn remove(&self, key: &str) -> DomainResult<()> {
        let file_path = self.resolve_path(key)?;
        match fs::remove_file(&file_path).await {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(()),
            Err(e) => Err(DomainError::Storage(format!("Failed to delete file: {}", e))),
        }
    }
}
