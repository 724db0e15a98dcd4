//! Manifest entity - artifacts written by the previous run
//!
//! Persisted next to the output directory so a fresh process can skip
//! rewriting artifacts whose content is unchanged and delete the ones that
//! are no longer produced. It's a pure data structure - I/O is handled by
//! a `ManifestRepository`.

use std::collections::BTreeMap;

use crate::domain::value_objects::ContentHash;

/// Manifest entry for one written artifact
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ManifestEntry {
    hash: ContentHash,
}

impl ManifestEntry {
    pub fn new(hash: ContentHash) -> Self {
        Self { hash }
    }

    pub fn hash(&self) -> &ContentHash {
        &self.hash
    }
}

/// Artifact name → entry, ordered for stable serialization
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Manifest {
    version: u32,
    entries: BTreeMap<String, ManifestEntry>,
}

impl Manifest {
    /// Current on-disk format version
    pub const VERSION: u32 = 1;

    pub fn new() -> Self {
        Self {
            version: Self::VERSION,
            entries: BTreeMap::new(),
        }
    }

    pub fn version(&self) -> u32 {
        self.version
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn get(&self, name: &str) -> Option<&ManifestEntry> {
        self.entries.get(name)
    }

    pub fn get_hash(&self, name: &str) -> Option<&ContentHash> {
        self.entries.get(name).map(|e| e.hash())
    }

    pub fn set(&mut self, name: impl Into<String>, entry: ManifestEntry) {
        self.entries.insert(name.into(), entry);
    }

    pub fn remove(&mut self, name: &str) -> Option<ManifestEntry> {
        self.entries.remove(name)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.entries.contains_key(name)
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(|s| s.as_str())
    }

    pub fn entries(&self) -> impl Iterator<Item = (&str, &ManifestEntry)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v))
    }
}
