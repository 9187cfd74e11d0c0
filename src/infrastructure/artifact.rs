//! Local Artifact Source
//!
//! Reads deployment packages from the local file system.

use std::io::ErrorKind;
use std::path::Path;

use crate::domain::ports::{ArtifactError, ArtifactResult, ArtifactSource};

#[derive(Debug, Clone, Copy, Default)]
pub struct LocalArtifactSource;

impl LocalArtifactSource {
    pub fn new() -> Self {
        Self
    }
}

impl ArtifactSource for LocalArtifactSource {
    fn read(&self, path: &Path) -> ArtifactResult<Vec<u8>> {
        if path.is_dir() {
            return Err(ArtifactError::Io {
                path: path.to_path_buf(),
                source: std::io::Error::new(ErrorKind::InvalidInput, "is a directory"),
            });
        }
        std::fs::read(path).map_err(|source| match source.kind() {
            ErrorKind::NotFound => ArtifactError::NotFound(path.to_path_buf()),
            _ => ArtifactError::Io {
                path: path.to_path_buf(),
                source,
            },
        })
    }
}
