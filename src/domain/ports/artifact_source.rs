//! ArtifactSource port - abstraction for reading deployment packages

use std::path::{Path, PathBuf};

use thiserror::Error;

/// Result type for artifact reads
pub type ArtifactResult<T> = Result<T, ArtifactError>;

/// Artifact read errors
#[derive(Debug, Error)]
pub enum ArtifactError {
    /// No package at the given location
    #[error("Deployment package not found: {}", .0.display())]
    NotFound(PathBuf),

    /// Package exists but could not be read
    #[error("Failed to read {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Reads deployment package bytes
pub trait ArtifactSource {
    fn read(&self, path: &Path) -> ArtifactResult<Vec<u8>>;
}

impl<A: ArtifactSource + ?Sized> ArtifactSource for &A {
    fn read(&self, path: &Path) -> ArtifactResult<Vec<u8>> {
        (**self).read(path)
    }
}
