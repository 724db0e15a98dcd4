//! Discovery and filtering
//!
//! Turns raw build inputs into classified [`AssetFile`]s: extension
//! allow-list, separator normalization, root containment, root-relative
//! decomposition, and classification.

use crate::domain::entities::{AssetFile, FileInformation, GeneratorInput};
use crate::domain::value_objects::path::{normalize_separators, SEPARATOR};
use crate::domain::value_objects::AssetKind;
use crate::error::GenerateResult;

/// Whether a raw input path has a recognized asset extension.
pub fn is_candidate(path: &str) -> bool {
    AssetKind::is_recognized_path(path)
}

/// Normalize `path` and join it with the pass input.
pub fn join(path: &str, input: &GeneratorInput) -> FileInformation {
    FileInformation::new(normalize_separators(path), input.clone())
}

/// The part of the file's path below the asset root.
///
/// `None` when the root is absent or the file lies outside it. Containment
/// is an ordinal prefix match on whole segments, so `proj/AssetsOld/x.png`
/// is not under `proj/Assets`.
pub fn relative_to_root(info: &FileInformation) -> Option<&str> {
    let root = info.input.asset_root()?;
    let rest = info.full_path.strip_prefix(root)?;
    rest.strip_prefix(SEPARATOR).filter(|r| !r.is_empty())
}

/// Derive the asset record for one joined file.
///
/// Returns `Ok(None)` for files that are silently excluded (no root, or
/// outside it). Classification failures are defects and propagate.
pub fn derive(info: &FileInformation, strip_segment: &str) -> GenerateResult<Option<AssetFile>> {
    match relative_to_root(info) {
        Some(relative) => AssetFile::from_relative(relative, strip_segment).map(Some),
        None => Ok(None),
    }
}
