//! Domain Ports (Interfaces)
//!
//! These traits define the boundaries of the domain layer.
//! Infrastructure layer provides concrete implementations.

pub mod emitter;
pub mod file_system;
pub mod manifest_repository;
pub mod pass_events;

pub use emitter::ArtifactEmitter;
pub use file_system::{FileSystem, FsError, FsResult};
pub use manifest_repository::{ManifestError, ManifestRepository, ManifestResult};
pub use pass_events::{NoopEventSink, PassEvent, PassEventSink, StepOutcome, TracingEventSink};
