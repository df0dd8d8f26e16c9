//! Instance file loading.
//!
//! Loading is fatal on failure: a missing file and malformed content are
//! distinct errors, both reported before any search starts.

use std::fs;
use std::path::{Path, PathBuf};

use thiserror::Error;

use super::hospital::Hospital;
use super::types::InstanceData;

/// Errors raised while loading an instance file.
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("failed to read instance file {path}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to parse instance file {path}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

impl Hospital {
    /// Reads, parses, and indexes an instance file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, LoadError> {
        let path = path.as_ref();
        let text = fs::read_to_string(path).map_err(|source| LoadError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let data: InstanceData =
            serde_json::from_str(&text).map_err(|source| LoadError::Parse {
                path: path.to_path_buf(),
                source,
            })?;
        Ok(Hospital::new(data))
    }
}
