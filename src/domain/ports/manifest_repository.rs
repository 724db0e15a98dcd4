//! ManifestRepository port - abstraction for manifest persistence
//!
//! Lets the generate use case load and save the artifact manifest without
//! knowing about TOML serialization details.

use std::path::Path;

use thiserror::Error;

use crate::domain::entities::Manifest;

/// Result type for manifest operations
pub type ManifestResult<T> = Result<T, ManifestError>;

/// Manifest operation errors
#[derive(Debug, Error)]
pub enum ManifestError {
    /// Invalid manifest format
    #[error("invalid manifest format: {0}")]
    Parse(String),

    /// Manifest written by an incompatible version
    #[error("manifest version mismatch: found {found}, expected {expected}")]
    VersionMismatch { found: u32, expected: u32 },

    /// I/O error
    #[error("manifest I/O error: {0}")]
    Io(String),
}

/// Abstract repository for manifest persistence
pub trait ManifestRepository {
    /// Load the manifest, or an empty one if the file does not exist
    fn load(&self, path: &Path) -> ManifestResult<Manifest>;

    /// Load the manifest, falling back to an empty one on any error
    fn load_or_new(&self, path: &Path) -> Manifest {
        self.load(path).unwrap_or_else(|err| {
            tracing::warn!(path = %path.display(), error = %err, "discarding unreadable manifest");
            Manifest::new()
        })
    }

    /// Save the manifest
    fn save(&self, manifest: &Manifest, path: &Path) -> ManifestResult<()>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn manifest_error_display() {
        let err = ManifestError::Parse("bad toml".to_string());
        assert!(err.to_string().contains("bad toml"));

        let err = ManifestError::VersionMismatch {
            found: 2,
            expected: 1,
        };
        assert_eq!(
            err.to_string(),
            "manifest version mismatch: found 2, expected 1"
        );
    }
}
