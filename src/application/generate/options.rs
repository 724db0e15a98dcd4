//! Generate Options
//!
//! Configuration types for generate operations.

use std::path::PathBuf;

/// Options for the generate use case
#[derive(Debug, Clone)]
pub struct GenerateOptions {
    /// Project root (scan root, and base for the output directory)
    pub project_root: PathBuf,
    /// Assembly name of the consuming project
    pub assembly_name: String,
    /// Input file list provided by a build host; scanned from `project_root` when `None`
    pub files: Option<Vec<String>>,
    /// Dry run (don't write or delete files, don't save the manifest)
    pub dry_run: bool,
}

impl GenerateOptions {
    pub fn new(project_root: impl Into<PathBuf>, assembly_name: impl Into<String>) -> Self {
        Self {
            project_root: project_root.into(),
            assembly_name: assembly_name.into(),
            files: None,
            dry_run: false,
        }
    }

    pub fn with_files(mut self, files: Vec<String>) -> Self {
        self.files = Some(files);
        self
    }

    pub fn with_dry_run(mut self, dry_run: bool) -> Self {
        self.dry_run = dry_run;
        self
    }
}
