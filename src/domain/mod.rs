//! Domain Layer
//!
//! Pure pipeline logic without I/O dependencies.
//!
//! ## Structure
//!
//! - `entities/` - Core domain entities (AssetFile, DirectoryGroup, Artifact, Manifest)
//! - `value_objects/` - Immutable value types (AssetKind, ContentHash, Fingerprint, path helpers)
//! - `services/` - Stage logic (root resolution, discovery, grouping, naming)
//! - `ports/` - Interface definitions for infrastructure

pub mod entities;
pub mod ports;
pub mod services;
pub mod value_objects;
