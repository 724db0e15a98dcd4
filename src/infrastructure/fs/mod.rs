//! File System Implementations
//!
//! Concrete implementations of the FileSystem port, plus the project scanner.

mod local;
mod scan;

pub use local::{atomic_write, LocalFs};
pub use scan::{scan_files, IGNORE_FILE_NAME};
