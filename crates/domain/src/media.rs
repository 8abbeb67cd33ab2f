use crate::DomainError;
use async_trait::async_trait;

/// Storage for uploaded delivery photos.
#[async_trait]
pub trait MediaStore: Send + Sync {
    /// Write `contents` under `file_name`, replacing any existing file with
    /// the same name. Returns the stored path reference.
    async fn store(&self, file_name: &str, contents: &[u8]) -> Result<String, DomainError>;
}

/// Name under which a delivery photo is stored:
/// `{package_id}_{agent_id}_{original_filename}`.
///
/// Only the final path component of the client-supplied name is kept.
pub fn delivery_photo_name(package_id: i32, agent_id: i32, original: &str) -> String {
    let base = original
        .rsplit(['/', '\\'])
        .next()
        .map(str::trim)
        .filter(|s| !s.is_empty() && *s != "." && *s != "..")
        .unwrap_or("upload");
    format!("{package_id}_{agent_id}_{base}")
}
