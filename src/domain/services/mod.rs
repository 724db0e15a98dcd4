//! Domain Services
//!
//! Pure business logic services that operate on domain entities.
//! These services have no I/O dependencies and are easily testable.

pub mod discovery;
mod grouping;
mod naming;
mod root_resolver;

pub use grouping::group_by_folder;
pub use naming::{is_artifact_file_name, ArtifactNaming, USINGS_ARTIFACT_NAME};
pub use root_resolver::{RootResolution, RootResolver};
