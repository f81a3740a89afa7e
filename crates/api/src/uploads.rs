//! Local disk storage for uploaded point photos.
//!
//! Acceptance rules and filename generation live in
//! [`ecopoints_core::uploads`]; this module only moves bytes.

use std::path::{Path, PathBuf};

use crate::error::{AppError, AppResult};

/// A photo received in a multipart request, not yet written anywhere.
#[derive(Debug)]
pub struct PendingUpload {
    pub original_name: String,
    pub content_type: Option<String>,
    pub data: Vec<u8>,
}

/// Write `data` to `dir/filename`, creating `dir` if needed.
pub async fn store(dir: &Path, filename: &str, data: &[u8]) -> AppResult<PathBuf> {
    tokio::fs::create_dir_all(dir)
        .await
        .map_err(|e| AppError::InternalError(e.to_string()))?;

    let path = dir.join(filename);
    tokio::fs::write(&path, data)
        .await
        .map_err(|e| AppError::InternalError(e.to_string()))?;

    tracing::debug!(path = %path.display(), bytes = data.len(), "Stored upload");
    Ok(path)
}

/// Remove a stored photo whose registration failed. Failures are logged only.
pub async fn discard(path: &Path) {
    if let Err(e) = tokio::fs::remove_file(path).await {
        tracing::warn!(path = %path.display(), error = %e, "Failed to remove orphaned upload");
    }
}
