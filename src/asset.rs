//! In-memory source assets flowing through the pipeline.

use std::path::{Path, PathBuf};

use tokio::fs;
use tracing::debug;

use crate::error::Result;

/// One source file's content plus its identity metadata.
///
/// Content is fully materialized before the pipeline runs; no module
/// in this crate does partial or streaming reads.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Asset {
    /// Full text content of the file.
    pub content: String,
    /// Stable identity, used for module-name derivation and for
    /// persisting the rewritten result.
    pub source_path: PathBuf,
    /// Human-readable name for diagnostics.
    pub display_name: String,
}

impl Asset {
    /// Create an asset from already-loaded content.
    pub fn new(content: impl Into<String>, source_path: impl Into<PathBuf>) -> Self {
        let source_path = source_path.into();
        let display_name = display_name_for(&source_path);
        Self {
            content: content.into(),
            source_path,
            display_name,
        }
    }

    /// Read an asset from disk, fully materializing its content.
    pub async fn read(path: impl Into<PathBuf>) -> Result<Self> {
        let path = path.into();
        let content = fs::read_to_string(&path).await?;
        Ok(Self::new(content, path))
    }

    /// Write new content to this asset's source path, then re-read a
    /// fresh asset from that location.
    ///
    /// Downstream build steps must observe the rewritten file exactly
    /// as it would be read fresh from storage, so the replacement
    /// asset is re-loaded rather than swapped in memory.
    pub async fn replace(self, new_content: String) -> Result<Self> {
        debug!(
            "Persisting rewritten content to {}",
            self.source_path.display()
        );
        fs::write(&self.source_path, new_content).await?;
        Asset::read(self.source_path).await
    }
}

fn display_name_for(path: &Path) -> String {
    path.file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string())
}
