//! Generate Report
//!
//! Result types for generate operations.

use std::path::PathBuf;

use crate::application::incremental::PassStats;
use crate::domain::value_objects::Diagnostic;

/// Result of a generate operation
#[derive(Debug, Clone, Default)]
pub struct GenerateReport {
    /// Artifacts that were written (or would be, in a dry run)
    pub written: Vec<PathBuf>,
    /// Artifacts already up to date on disk
    pub skipped: Vec<PathBuf>,
    /// Stale artifacts that were deleted
    pub removed: Vec<PathBuf>,
    pub diagnostics: Vec<Diagnostic>,
    pub artifact_count: usize,
    pub stats: PassStats,
    pub dry_run: bool,
}

impl GenerateReport {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn has_changes(&self) -> bool {
        !self.written.is_empty() || !self.removed.is_empty()
    }

    pub fn has_warnings(&self) -> bool {
        !self.diagnostics.is_empty()
    }
}
