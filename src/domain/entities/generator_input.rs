//! Per-pass generator input and the transient file join.

use crate::domain::value_objects::{FingerprintHasher, StableHash};

/// Resolved asset root plus the consuming assembly's identity
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct GeneratorInput {
    /// `/`-separated asset root directory; `None` when no marker file was found
    pub asset_root: Option<String>,
    /// Assembly (module/namespace) name of the consuming project
    pub assembly_name: String,
}

impl GeneratorInput {
    pub fn new(asset_root: Option<String>, assembly_name: impl Into<String>) -> Self {
        Self {
            asset_root,
            assembly_name: assembly_name.into(),
        }
    }

    pub fn asset_root(&self) -> Option<&str> {
        self.asset_root.as_deref()
    }

    pub fn assembly_name(&self) -> &str {
        &self.assembly_name
    }
}

impl StableHash for GeneratorInput {
    fn stable_hash(&self, hasher: &mut FingerprintHasher) {
        hasher.write_opt_str(self.asset_root.as_deref());
        hasher.write_str(&self.assembly_name);
    }
}

/// A normalized input path joined with the pass's [`GeneratorInput`].
///
/// Lives only inside the discovery stage; it is the memo key input of the
/// per-file derivation node.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct FileInformation {
    /// Full path with `/` separators
    pub full_path: String,
    pub input: GeneratorInput,
}

impl FileInformation {
    pub fn new(full_path: impl Into<String>, input: GeneratorInput) -> Self {
        Self {
            full_path: full_path.into(),
            input,
        }
    }
}

impl StableHash for FileInformation {
    fn stable_hash(&self, hasher: &mut FingerprintHasher) {
        hasher.write_str(&self.full_path);
        self.input.stable_hash(hasher);
    }
}
