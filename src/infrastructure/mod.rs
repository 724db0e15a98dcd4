//! Infrastructure Layer
//!
//! Concrete implementations of domain ports.
//! This layer handles all I/O operations.
//!
//! ## Structure
//!
//! - `emitters/` - Text back ends (C#)
//! - `fs/` - Local file system and project scanner
//! - `repositories/` - Manifest persistence

pub mod emitters;
pub mod fs;
pub mod repositories;

// Re-export for convenience
pub use emitters::CSharpEmitter;
pub use fs::{scan_files, LocalFs};
pub use repositories::TomlManifestRepository;
