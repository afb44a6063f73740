//! Still-photo camera abstraction.

use std::path::PathBuf;

use async_trait::async_trait;

use crate::error::StudioError;

/// A camera that can take a single still photo on request.
#[async_trait]
pub trait Camera: Send + Sync {
    /// Ask for permission to use the camera. `false` means access is denied.
    async fn request_access(&self) -> bool;

    /// Take one still photo and return its encoded bytes (JPEG or PNG).
    async fn capture_still(&self) -> Result<Vec<u8>, StudioError>;
}

/// Serves a photo from disk, for headless front-ends.
#[derive(Debug, Clone)]
pub struct FileCamera {
    path: PathBuf,
}

impl FileCamera {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

#[async_trait]
impl Camera for FileCamera {
    async fn request_access(&self) -> bool {
        tokio::fs::try_exists(&self.path).await.unwrap_or(false)
    }

    async fn capture_still(&self) -> Result<Vec<u8>, StudioError> {
        Ok(tokio::fs::read(&self.path).await?)
    }
}
