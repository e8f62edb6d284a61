use std::io::Error as IoError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum StorageError {
    #[error("I/O error: {0}")]
    Io(#[from] IoError),

    #[error("Locator not owned by this store: {0}")]
    InvalidLocator(String),
}
