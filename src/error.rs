//! Error types for assetgen
//!
//! Uses `thiserror` for library errors. Anything that reaches this enum
//! aborts the current generation pass; non-fatal conditions are reported as
//! [`Diagnostic`](crate::domain::value_objects::Diagnostic)s instead.

use std::path::PathBuf;
use thiserror::Error;

use crate::domain::ports::ManifestError;

/// Result type alias for assetgen operations
pub type GenerateResult<T> = Result<T, GenerateError>;

/// Main error type for assetgen operations
#[derive(Error, Debug)]
pub enum GenerateError {
    /// A file passed the extension allow-list but the classifier has no kind for it.
    ///
    /// This can only happen when the allow-list and the classifier drift apart.
    #[error("no asset kind registered for extension '{extension}' ({path}); extension allow-list and classifier are out of sync")]
    UnclassifiedExtension { extension: String, path: String },

    /// Two directory groups map to the same artifact name
    #[error("artifact name '{name}' is produced by both folder '{first}' and folder '{second}'")]
    DuplicateArtifactName {
        name: String,
        first: String,
        second: String,
    },

    /// Two assets in one folder would declare the same accessor
    #[error("asset member '{name}' is declared by both '{first}' and '{second}' in folder '{folder}'")]
    DuplicateMemberName {
        name: String,
        folder: String,
        first: String,
        second: String,
    },

    /// The pass was superseded before it finished
    #[error("generation pass cancelled")]
    Cancelled,

    /// Invalid configuration file
    #[error("invalid config in {file}: {message}")]
    InvalidConfig { file: PathBuf, message: String },

    /// Directory not found
    #[error("directory not found: {path}")]
    DirectoryNotFound { path: PathBuf },

    /// Directory scan failed
    #[error("failed to scan {path}: {message}")]
    Scan { path: PathBuf, message: String },

    /// Manifest could not be loaded or saved
    #[error(transparent)]
    Manifest(#[from] ManifestError),

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl GenerateError {
    /// Whether this error only signals a superseded pass.
    pub fn is_cancellation(&self) -> bool {
        matches!(self, GenerateError::Cancelled)
    }
}
