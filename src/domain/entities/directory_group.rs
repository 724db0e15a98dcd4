//! DirectoryGroup entity - the unit of incremental output.
//!
//! A group is exactly what one artifact renders, so its equality is ordinal
//! over every member field, unlike [`AssetFile`]'s own.

use crate::domain::entities::AssetFile;
use crate::domain::value_objects::{FingerprintHasher, StableHash};

/// All assets sharing one folder, in arrival order
#[derive(Debug, Clone)]
pub struct DirectoryGroup {
    key: String,
    members: Vec<AssetFile>,
}

impl DirectoryGroup {
    pub fn new(key: impl Into<String>, members: Vec<AssetFile>) -> Self {
        Self {
            key: key.into(),
            members,
        }
    }

    /// Folder path, empty for root-level assets
    pub fn key(&self) -> &str {
        &self.key
    }

    pub fn members(&self) -> &[AssetFile] {
        &self.members
    }

    pub fn is_root_level(&self) -> bool {
        self.key.is_empty()
    }

    pub fn len(&self) -> usize {
        self.members.len()
    }

    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }
}

impl PartialEq for DirectoryGroup {
    fn eq(&self, other: &Self) -> bool {
        self.key == other.key
            && self.members.len() == other.members.len()
            && self
                .members
                .iter()
                .zip(&other.members)
                .all(|(a, b)| a.eq_exact(b))
    }
}

impl Eq for DirectoryGroup {}

impl StableHash for DirectoryGroup {
    fn stable_hash(&self, hasher: &mut FingerprintHasher) {
        hasher.write_str(&self.key);
        hasher.write_u64(self.members.len() as u64);
        for member in &self.members {
            member.stable_hash_exact(hasher);
        }
    }
}
