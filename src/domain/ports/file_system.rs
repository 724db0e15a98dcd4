//! FileSystem port - abstraction over artifact file I/O
//!
//! Lets the generate use case write and prune artifacts without depending on
//! a concrete implementation (local disk, in-memory for tests).

use std::io;
use std::path::{Path, PathBuf};

use thiserror::Error;

pub type FsResult<T> = Result<T, FsError>;

/// Artifact I/O failures, keeping the offending path where one is known
#[derive(Debug, Error)]
pub enum FsError {
    #[error("file not found: {}", .0.display())]
    NotFound(PathBuf),

    #[error("permission denied: {}", .0.display())]
    PermissionDenied(PathBuf),

    #[error("I/O error: {0}")]
    Io(#[source] io::Error),
}

impl From<io::Error> for FsError {
    fn from(err: io::Error) -> Self {
        match err.kind() {
            io::ErrorKind::NotFound => FsError::NotFound(PathBuf::new()),
            io::ErrorKind::PermissionDenied => FsError::PermissionDenied(PathBuf::new()),
            _ => FsError::Io(err),
        }
    }
}

/// Lets the use case surface port failures as `GenerateError::Io`.
impl From<FsError> for io::Error {
    fn from(err: FsError) -> Self {
        match err {
            FsError::Io(e) => e,
            other @ FsError::NotFound(_) => io::Error::new(io::ErrorKind::NotFound, other.to_string()),
            other @ FsError::PermissionDenied(_) => {
                io::Error::new(io::ErrorKind::PermissionDenied, other.to_string())
            }
        }
    }
}

/// Abstract file system interface
///
/// Implementations:
/// - `LocalFs` - standard file I/O with atomic writes
/// - `MemoryFs` (tests) - in-memory map
pub trait FileSystem {
    /// Read file content as string
    fn read(&self, path: &Path) -> FsResult<String>;

    /// Write content to file atomically, creating parent directories
    fn write(&self, path: &Path, content: &str) -> FsResult<()>;

    /// Check if file exists
    fn exists(&self, path: &Path) -> bool;

    /// Remove a file
    fn remove(&self, path: &Path) -> FsResult<()>;
}
