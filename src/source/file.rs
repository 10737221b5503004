//! File-based latency source.

use std::path::{Path, PathBuf};

use tracing::debug;

use super::decode;
use crate::data::Sample;
use crate::error::LoadError;

/// Reads a latency array from a JSON file on disk.
#[derive(Debug, Clone)]
pub struct FileSource {
    path: PathBuf,
    description: String,
}

impl FileSource {
    /// Create a new file source for the given path.
    pub fn new<P: AsRef<Path>>(path: P) -> Self {
        let path = path.as_ref().to_path_buf();
        let description = format!("file: {}", path.display());
        Self { path, description }
    }

    /// Returns the path being read.
    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    /// Read and parse the file.
    pub async fn load(&self) -> Result<Vec<Sample>, LoadError> {
        debug!(path = %self.path.display(), "reading latency file");
        let bytes = tokio::fs::read(&self.path)
            .await
            .map_err(|source| LoadError::Io {
                resource: self.description.clone(),
                source,
            })?;
        decode(&self.description, &bytes)
    }
}
