//! ArtifactEmitter port - the text back end
//!
//! The pipeline decides *what* gets generated and under which name; an
//! emitter only decides how it reads. Implementations must be pure: the same
//! arguments always render the same text.

use crate::domain::entities::DirectoryGroup;

/// Renders generated source text
///
/// Implementations:
/// - `CSharpEmitter` - partial classes with lazy asset accessors
pub trait ArtifactEmitter: Send + Sync {
    /// Short identifier used in logs and generated headers
    fn id(&self) -> &'static str;

    /// The fixed top-level declaration emitted once per pass.
    ///
    /// `warning` carries the missing-root annotation, if any.
    fn root_declaration(&self, assembly_name: &str, warning: Option<&str>) -> String;

    /// One module with constants and accessors for every member of `group`.
    fn group_module(&self, group: &DirectoryGroup, assembly_name: &str) -> String;

    /// Project-wide import of the top-level generated type.
    fn global_usings(&self, assembly_name: &str) -> String;

    /// Whether `content` was rendered by this emitter.
    ///
    /// Stale-artifact cleanup only deletes files that pass this check.
    fn has_signature(&self, content: &str) -> bool;
}
