use crate::abstract_trait::storage::ObjectStoreTrait;
use async_trait::async_trait;
use shared::errors::StorageError;
use std::path::PathBuf;
use tokio::fs;
use tracing::{error, info};

/// Object storage rooted at a local directory. Objects are addressed by
/// locator URLs of the form `<base_url>/<key>`; deletion inverts a locator
/// back to the key it was issued for.
pub struct FsObjectStore {
    root: PathBuf,
    base_url: String,
}

impl FsObjectStore {
    pub fn new(root: impl Into<PathBuf>, base_url: &str) -> Self {
        Self {
            root: root.into(),
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    fn checked_key(&self, key: &str) -> Result<(), StorageError> {
        let traversal = key
            .split('/')
            .any(|segment| segment.is_empty() || segment == "." || segment == "..");
        if key.is_empty() || traversal {
            return Err(StorageError::InvalidLocator(key.to_string()));
        }
        Ok(())
    }

    fn key_from_locator(&self, locator: &str) -> Result<String, StorageError> {
        let rest = locator
            .strip_prefix(&self.base_url)
            .ok_or_else(|| StorageError::InvalidLocator(locator.to_string()))?;
        let key = rest.trim_start_matches('/');
        self.checked_key(key)?;
        Ok(key.to_string())
    }
}

#[async_trait]
impl ObjectStoreTrait for FsObjectStore {
    async fn put(&self, key: &str, bytes: &[u8]) -> Result<String, StorageError> {
        self.checked_key(key)?;

        let path = self.root.join(key);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).await?;
        }
        fs::write(&path, bytes).await.map_err(|e| {
            error!("❌ Failed to store object '{key}': {:?}", e);
            StorageError::from(e)
        })?;

        info!("📦 Stored object '{key}' ({} bytes)", bytes.len());
        Ok(format!("{}/{key}", self.base_url))
    }

    async fn delete(&self, locator: &str) -> Result<(), StorageError> {
        let key = self.key_from_locator(locator)?;

        fs::remove_file(self.root.join(&key)).await?;

        info!("🗑️ Deleted object '{key}'");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn store(dir: &tempfile::TempDir) -> FsObjectStore {
        FsObjectStore::new(dir.path(), "http://localhost:8080/media")
    }

    #[tokio::test]
    async fn put_issues_locator_and_delete_inverts_it() {
        let dir = tempfile::tempdir().unwrap();
        let store = store(&dir);

        let locator = store.put("product_images/a.jpg", b"bytes").await.unwrap();
        assert_eq!(locator, "http://localhost:8080/media/product_images/a.jpg");
        assert!(dir.path().join("product_images/a.jpg").exists());

        store.delete(&locator).await.unwrap();
        assert!(!dir.path().join("product_images/a.jpg").exists());
    }

    #[tokio::test]
    async fn delete_rejects_foreign_locators() {
        let dir = tempfile::tempdir().unwrap();
        let store = store(&dir);

        let err = store
            .delete("https://elsewhere.example/o/thing.jpg")
            .await
            .unwrap_err();
        assert!(matches!(err, StorageError::InvalidLocator(_)));

        let err = store
            .delete("http://localhost:8080/media/../secrets")
            .await
            .unwrap_err();
        assert!(matches!(err, StorageError::InvalidLocator(_)));
    }

    #[tokio::test]
    async fn delete_of_missing_object_errors() {
        let dir = tempfile::tempdir().unwrap();
        let store = store(&dir);

        let err = store
            .delete("http://localhost:8080/media/product_images/gone.jpg")
            .await
            .unwrap_err();
        assert!(matches!(err, StorageError::Io(_)));
    }
}
