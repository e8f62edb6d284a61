use async_trait::async_trait;
use shared::errors::StorageError;
use std::sync::Arc;

pub type DynObjectStore = Arc<dyn ObjectStoreTrait + Send + Sync>;

/// Blob store collaborator. `put` returns a public locator URL; `delete`
/// inverts a locator back to the stored object.
#[async_trait]
pub trait ObjectStoreTrait {
    async fn put(&self, key: &str, bytes: &[u8]) -> Result<String, StorageError>;
    async fn delete(&self, locator: &str) -> Result<(), StorageError>;
}
