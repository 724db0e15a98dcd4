//! Root resolver
//!
//! Locates the marker file among the pass's inputs and derives the asset
//! root from its containing directory.

use crate::domain::value_objects::path::{self, normalize_separators, SEPARATOR};
use crate::domain::value_objects::{Diagnostic, DiagnosticCode};

/// Outcome of root resolution
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RootResolution {
    /// `/`-separated asset root, `None` when no usable marker exists
    pub asset_root: Option<String>,
    pub diagnostics: Vec<Diagnostic>,
}

/// Finds the asset root by marker file name
#[derive(Debug, Clone)]
pub struct RootResolver {
    marker_file: String,
}

impl RootResolver {
    pub fn new(marker_file: impl Into<String>) -> Self {
        Self {
            marker_file: marker_file.into(),
        }
    }

    pub fn marker_file(&self) -> &str {
        &self.marker_file
    }

    /// Whether `path` names the marker file (whole final segment, ordinal).
    pub fn is_marker(&self, path: &str) -> bool {
        let path = normalize_separators(path);
        match path.strip_suffix(self.marker_file.as_str()) {
            Some(rest) => rest.is_empty() || rest.ends_with(SEPARATOR),
            None => false,
        }
    }

    /// The normalized, sorted, de-duplicated marker subset of `files`.
    ///
    /// This is the memo input of the resolution node: unrelated file changes
    /// leave it untouched.
    pub fn marker_paths<S: AsRef<str>>(&self, files: &[S]) -> Vec<String> {
        let mut markers: Vec<String> = files
            .iter()
            .map(AsRef::as_ref)
            .filter(|p| self.is_marker(p))
            .map(|p| normalize_separators(p).into_owned())
            .collect();
        markers.sort();
        markers.dedup();
        markers
    }

    /// Resolve the asset root from a marker subset.
    ///
    /// Several markers are tolerated: the lexicographically smallest path
    /// wins so the choice does not depend on discovery order.
    pub fn resolve(&self, markers: &[String]) -> RootResolution {
        let mut resolution = RootResolution::default();

        let Some(chosen) = markers.iter().min() else {
            resolution.diagnostics.push(Diagnostic::new(
                DiagnosticCode::MissingAssetRoot,
                format!("missing {} file", self.marker_file),
            ));
            return resolution;
        };

        if markers.len() > 1 {
            tracing::warn!(
                count = markers.len(),
                chosen = %chosen,
                "multiple asset root markers found"
            );
            resolution.diagnostics.push(
                Diagnostic::new(
                    DiagnosticCode::MultipleAssetRoots,
                    format!(
                        "found {} {} files, using the first by path",
                        markers.len(),
                        self.marker_file
                    ),
                )
                .with_path(chosen.clone()),
            );
        }

        match path::folder(chosen).filter(|dir| !dir.trim().is_empty()) {
            Some(dir) => resolution.asset_root = Some(dir.to_string()),
            None => resolution.diagnostics.push(
                Diagnostic::new(
                    DiagnosticCode::MissingAssetRoot,
                    format!("{} has no containing directory", self.marker_file),
                )
                .with_path(chosen.clone()),
            ),
        }

        resolution
    }
}
