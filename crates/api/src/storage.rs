//! Local media storage for legacy direct uploads.
//!
//! Files are written under a configured root with generated names and
//! served back by the router at `/media`.

use std::path::{Path, PathBuf};

use roadclips_core::upload::{is_stored_file_name, stored_file_name};

use crate::error::{AppError, AppResult};

/// URL path prefix uploads are served under.
pub const MEDIA_PATH: &str = "/media";

/// A file written to media storage.
#[derive(Debug, Clone)]
pub struct StoredMedia {
    pub file_name: String,
    pub url: String,
}

/// Writes uploads to disk and maps them to public URLs.
#[derive(Debug, Clone)]
pub struct MediaStorage {
    root: PathBuf,
    public_base_url: String,
}

impl MediaStorage {
    pub fn new(root: impl Into<PathBuf>, public_base_url: &str) -> Self {
        Self {
            root: root.into(),
            public_base_url: public_base_url.trim_end_matches('/').to_string(),
        }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn public_url(&self, file_name: &str) -> String {
        format!("{}{MEDIA_PATH}/{file_name}", self.public_base_url)
    }

    /// Store an upload under a fresh name derived from its original name.
    pub async fn save(&self, original_name: &str, data: &[u8]) -> AppResult<StoredMedia> {
        let file_name = stored_file_name(original_name)?;

        tokio::fs::create_dir_all(&self.root)
            .await
            .map_err(|e| AppError::InternalError(format!("Failed to create media root: {e}")))?;
        tokio::fs::write(self.root.join(&file_name), data)
            .await
            .map_err(|e| AppError::InternalError(format!("Failed to write upload: {e}")))?;

        tracing::info!(file_name = %file_name, bytes = data.len(), "Upload stored");
        Ok(StoredMedia {
            url: self.public_url(&file_name),
            file_name,
        })
    }

    /// The stored file name behind one of our public URLs, if it is one.
    pub fn file_name_for_url<'a>(&self, url: &'a str) -> Option<&'a str> {
        let prefix = self.public_url("");
        url.strip_prefix(prefix.as_str())
            .filter(|name| is_stored_file_name(name))
    }

    /// Remove the file behind a public URL. Best-effort: failures are logged
    /// and reported as `false`, never as errors.
    pub async fn remove_by_url(&self, url: &str) -> bool {
        let Some(file_name) = self.file_name_for_url(url) else {
            return false;
        };
        match tokio::fs::remove_file(self.root.join(file_name)).await {
            Ok(()) => {
                tracing::info!(file_name, "Upload removed");
                true
            }
            Err(e) => {
                tracing::warn!(file_name, error = %e, "Failed to remove upload");
                false
            }
        }
    }
}
