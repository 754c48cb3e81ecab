use std::path::PathBuf;

use anyhow::{Context, Result};
use tracing::info;

/// Writes uploaded résumés into a single directory, named after the
/// client-supplied filename. A second upload with the same name replaces the
/// first; files are never cleaned up.
#[derive(Debug, Clone)]
pub struct UploadStore {
    dir: PathBuf,
}

impl UploadStore {
    /// Creates the upload directory if it does not exist yet. Called once at startup.
    pub async fn prepare(dir: impl Into<PathBuf>) -> Result<Self> {
        let dir = dir.into();
        tokio::fs::create_dir_all(&dir)
            .await
            .with_context(|| format!("Cannot create upload directory '{}'", dir.display()))?;
        info!("Upload directory ready at {}", dir.display());
        Ok(Self { dir })
    }

    /// Persists `bytes` under [`stored_name`] of `filename` and returns the
    /// written path. A filename with no usable component is `InvalidInput`.
    pub async fn save(&self, filename: &str, bytes: &[u8]) -> std::io::Result<PathBuf> {
        let name = stored_name(filename).ok_or_else(|| {
            std::io::Error::new(
                std::io::ErrorKind::InvalidInput,
                format!("'{filename}' has no file name component"),
            )
        })?;
        let path = self.dir.join(name);
        tokio::fs::write(&path, bytes).await?;
        info!(bytes = bytes.len(), "Saved upload to {}", path.display());
        Ok(path)
    }
}

/// The last non-empty path component of a client filename, or `None` when
/// there is none or it is `.`/`..`. Writes therefore stay inside the upload
/// directory, and the format check sees the same name that is saved.
pub fn stored_name(filename: &str) -> Option<&str> {
    filename
        .rsplit(['/', '\\'])
        .find(|part| !part.is_empty())
        .filter(|name| *name != "." && *name != "..")
}
