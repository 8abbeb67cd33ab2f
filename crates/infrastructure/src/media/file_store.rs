use async_trait::async_trait;
use domain::{DomainError, MediaStore};
use std::path::PathBuf;
use tracing::debug;

/// Stores uploads as plain files under a media directory.
///
/// Writes are not synchronized: two uploads with the same name race and the
/// last one wins.
#[derive(Clone, Debug)]
pub struct FileMediaStore {
    root: PathBuf,
}

impl FileMediaStore {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }
}

#[async_trait]
impl MediaStore for FileMediaStore {
    async fn store(&self, file_name: &str, contents: &[u8]) -> Result<String, DomainError> {
        tokio::fs::create_dir_all(&self.root).await.map_err(|e| {
            DomainError::Storage(format!("Failed to create {}: {}", self.root.display(), e))
        })?;

        let path = self.root.join(file_name);
        tokio::fs::write(&path, contents)
            .await
            .map_err(|e| DomainError::Storage(format!("Failed to write {}: {}", path.display(), e)))?;

        debug!(path = %path.display(), bytes = contents.len(), "Stored upload");
        Ok(path.to_string_lossy().into_owned())
    }
}
