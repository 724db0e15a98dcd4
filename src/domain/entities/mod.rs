//! Domain Entities
//!
//! - `AssetFile` - A classified asset under the asset root
//! - `GeneratorInput` / `FileInformation` - Per-pass inputs
//! - `DirectoryGroup` - Assets sharing a folder
//! - `Artifact` - A generated source text
//! - `Manifest` - Artifacts written by the previous run

mod artifact;
mod asset;
mod directory_group;
mod generator_input;
mod manifest;

pub use artifact::Artifact;
pub use asset::{AssetFile, ExactAsset};
pub use directory_group::DirectoryGroup;
pub use generator_input::{FileInformation, GeneratorInput};
pub use manifest::{Manifest, ManifestEntry};
