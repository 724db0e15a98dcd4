//! AssetFile entity - one classified asset under the asset root
//!
//! All fields are relative to the asset root. Identity is `(path, extension)`
//! compared case-insensitively; `folder`, `name` and `kind` are derived from
//! those two and deliberately left out of equality, so recomputing them with
//! different casing does not invalidate memoized pipeline nodes.
//!
//! Generated text spells every field exactly, so nodes that render text key
//! on [`ExactAsset`] instead.

use std::hash::{Hash, Hasher};

use crate::domain::value_objects::path;
use crate::domain::value_objects::{AssetKind, FingerprintHasher, StableHash};
use crate::error::GenerateResult;

/// A classified asset file
#[derive(Debug, Clone)]
pub struct AssetFile {
    /// Root-relative path without extension (`Jungle/Monkey`)
    path: String,
    /// Root-relative folder, empty for root-level files
    folder: String,
    /// File name without extension (`Monkey`)
    name: String,
    /// Extension including the dot (`.png`)
    extension: String,
    kind: AssetKind,
}

impl AssetFile {
    /// Create an AssetFile from already derived parts
    pub fn new(
        path: impl Into<String>,
        folder: impl Into<String>,
        name: impl Into<String>,
        extension: impl Into<String>,
        kind: AssetKind,
    ) -> Self {
        Self {
            path: path.into(),
            folder: folder.into(),
            name: name.into(),
            extension: extension.into(),
            kind,
        }
    }

    /// Derive an AssetFile from a root-relative, `/`-separated path.
    ///
    /// A leading `strip_segment` folder (compared case-insensitively) is
    /// removed from `folder` only; `path` keeps it so the asset key still
    /// points at the real file.
    pub fn from_relative(relative: &str, strip_segment: &str) -> GenerateResult<Self> {
        let extension = path::extension(relative).unwrap_or("");
        let kind = AssetKind::classify(extension, relative)?;
        let folder = path::folder(relative).unwrap_or("");

        Ok(Self::new(
            path::remove_extension(relative),
            strip_leading_segment(folder, strip_segment),
            path::file_name_without_extension(relative),
            extension,
            kind,
        ))
    }

    // --- Getters ---

    pub fn path(&self) -> &str {
        &self.path
    }

    pub fn folder(&self) -> &str {
        &self.folder
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn extension(&self) -> &str {
        &self.extension
    }

    pub fn kind(&self) -> AssetKind {
        self.kind
    }

    /// Fully qualified asset key: `{assembly}/{path}`
    pub fn key(&self, assembly_name: &str) -> String {
        format!("{}/{}", assembly_name, self.path)
    }

    /// Ordinal comparison of every field, including the derived ones.
    pub fn eq_exact(&self, other: &Self) -> bool {
        self.path == other.path
            && self.folder == other.folder
            && self.name == other.name
            && self.extension == other.extension
            && self.kind == other.kind
    }

    pub(crate) fn stable_hash_exact(&self, hasher: &mut FingerprintHasher) {
        hasher.write_str(&self.path);
        hasher.write_str(&self.folder);
        hasher.write_str(&self.name);
        hasher.write_str(&self.extension);
        hasher.write_str(self.kind.as_str());
    }
}

/// An [`AssetFile`] compared and fingerprinted case-sensitively
#[derive(Debug, Clone)]
pub struct ExactAsset(pub AssetFile);

impl ExactAsset {
    pub fn asset(&self) -> &AssetFile {
        &self.0
    }
}

impl PartialEq for ExactAsset {
    fn eq(&self, other: &Self) -> bool {
        self.0.eq_exact(&other.0)
    }
}

impl Eq for ExactAsset {}

impl StableHash for ExactAsset {
    fn stable_hash(&self, hasher: &mut FingerprintHasher) {
        self.0.stable_hash_exact(hasher);
    }
}

fn strip_leading_segment<'a>(folder: &'a str, segment: &str) -> &'a str {
    if segment.is_empty() {
        return folder;
    }
    let (bytes, seg) = (folder.as_bytes(), segment.as_bytes());
    if bytes.len() < seg.len() || !bytes[..seg.len()].eq_ignore_ascii_case(seg) {
        return folder;
    }
    match bytes.get(seg.len()) {
        None => "",
        Some(b'/') => &folder[seg.len() + 1..],
        Some(_) => folder,
    }
}

fn eq_ignore_case(a: &str, b: &str) -> bool {
    a.chars()
        .flat_map(char::to_lowercase)
        .eq(b.chars().flat_map(char::to_lowercase))
}

impl PartialEq for AssetFile {
    fn eq(&self, other: &Self) -> bool {
        eq_ignore_case(&self.path, &other.path) && eq_ignore_case(&self.extension, &other.extension)
    }
}

impl Eq for AssetFile {}

impl Hash for AssetFile {
    fn hash<H: Hasher>(&self, state: &mut H) {
        for c in self.path.chars().flat_map(char::to_lowercase) {
            state.write_u32(c as u32);
        }
        state.write_u8(0xff);
        for c in self.extension.chars().flat_map(char::to_lowercase) {
            state.write_u32(c as u32);
        }
        state.write_u8(0xff);
    }
}

impl StableHash for AssetFile {
    fn stable_hash(&self, hasher: &mut FingerprintHasher) {
        hasher.write_str_folded(&self.path);
        hasher.write_str_folded(&self.extension);
    }
}
