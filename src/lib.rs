//! assetgen - incremental asset registry generator
//!
//! Scans a mod project's asset tree and emits strongly-typed C# accessor
//! classes, one artifact per asset folder plus a root declaration. Passes
//! are memoized per node, so a host that re-runs generation on every file
//! change only recomputes the folders that actually changed.
//!
//! ## Layers
//!
//! - `domain` - entities, pure services and ports
//! - `application` - the incremental pass driver and the generate use case
//! - `infrastructure` - C# emitter, local file system, TOML manifest
//! - `config` - `assetgen.toml` loading with env overrides

pub mod application;
pub mod config;
pub mod domain;
pub mod error;
pub mod infrastructure;

// Re-exports for convenience
pub use application::{
    generate, CancellationToken, GenerateOptions, GenerateReport, GenerateUseCase,
    IncrementalGenerator, PassOutput, PassStats,
};
pub use config::{GeneratorConfig, GeneratorSection};
pub use domain::entities::{Artifact, AssetFile, DirectoryGroup};
pub use domain::ports::ArtifactEmitter;
pub use domain::value_objects::{AssetKind, Diagnostic, DiagnosticCode};
pub use error::{GenerateError, GenerateResult};
pub use infrastructure::{CSharpEmitter, LocalFs, TomlManifestRepository};
