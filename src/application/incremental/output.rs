//! Pass Output
//!
//! Result types for one generation pass.

use crate::domain::entities::Artifact;
use crate::domain::ports::StepOutcome;
use crate::domain::value_objects::{Diagnostic, Fingerprint};

/// One artifact produced by a pass
#[derive(Debug, Clone)]
pub struct EmittedArtifact {
    pub artifact: Artifact,
    pub outcome: StepOutcome,
    /// Fingerprint of the node input the artifact was emitted from
    pub input: Fingerprint,
}

impl EmittedArtifact {
    pub fn name(&self) -> &str {
        self.artifact.name()
    }

    pub fn content(&self) -> &str {
        self.artifact.content()
    }
}

/// Counters for one pass
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PassStats {
    /// Inputs that passed the extension allow-list
    pub candidates: usize,
    /// Candidates that became assets
    pub assets: usize,
    pub groups: usize,
    /// Per-file derivations that had to run
    pub files_recomputed: usize,
    pub artifacts_recomputed: usize,
    pub artifacts_reused: usize,
}

/// Result of a successful pass
#[derive(Debug, Clone, Default)]
pub struct PassOutput {
    /// Monotonic pass number, starting at 1
    pub pass: u64,
    /// Root artifact first, then one per group in group order, then usings
    pub artifacts: Vec<EmittedArtifact>,
    /// Names produced by the previous pass but not by this one
    pub removed: Vec<String>,
    pub diagnostics: Vec<Diagnostic>,
    pub stats: PassStats,
}

impl PassOutput {
    pub fn artifact(&self, name: &str) -> Option<&EmittedArtifact> {
        self.artifacts.iter().find(|a| a.name() == name)
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.artifacts.iter().map(|a| a.name())
    }

    /// Artifacts whose node ran in this pass
    pub fn changed(&self) -> impl Iterator<Item = &EmittedArtifact> {
        self.artifacts.iter().filter(|a| !a.outcome.is_reused())
    }

    pub fn has_changes(&self) -> bool {
        self.changed().next().is_some() || !self.removed.is_empty()
    }
}
