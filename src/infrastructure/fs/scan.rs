//! Project directory scanner
//!
//! Produces the input file list a build host would otherwise provide.
//! Walks with `.gitignore` / `.ignore` / `.assetgenignore` semantics and
//! returns paths sorted so two scans of the same tree are identical.

use std::path::Path;

use ignore::WalkBuilder;

use crate::domain::value_objects::path::normalize_separators;
use crate::error::{GenerateError, GenerateResult};

/// Project-local ignore file, same syntax as `.gitignore`
pub const IGNORE_FILE_NAME: &str = ".assetgenignore";

/// List every file under `root` as a `/`-separated path prefixed by `root`.
pub fn scan_files(root: &Path) -> GenerateResult<Vec<String>> {
    if !root.is_dir() {
        return Err(GenerateError::DirectoryNotFound {
            path: root.to_path_buf(),
        });
    }

    let walker = WalkBuilder::new(root)
        .standard_filters(true)
        .add_custom_ignore_filename(IGNORE_FILE_NAME)
        .build();

    let mut files = Vec::new();
    for entry in walker {
        let entry = match entry {
            Ok(entry) => entry,
            Err(err) => {
                tracing::warn!(root = %root.display(), error = %err, "skipping unreadable entry");
                continue;
            }
        };
        if !entry.file_type().is_some_and(|t| t.is_file()) {
            continue;
        }
        let Some(path) = entry.path().to_str() else {
            tracing::warn!(path = %entry.path().display(), "skipping non UTF-8 path");
            continue;
        };
        files.push(normalize_separators(path).into_owned());
    }

    files.sort();
    tracing::debug!(root = %root.display(), count = files.len(), "scanned project files");
    Ok(files)
}
