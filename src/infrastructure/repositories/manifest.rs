//! TOML Manifest Repository
//!
//! Implements the ManifestRepository port using TOML format.

use std::collections::BTreeMap;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::domain::entities::{Manifest, ManifestEntry};
use crate::domain::ports::file_system::FileSystem;
use crate::domain::ports::manifest_repository::{
    ManifestError, ManifestRepository, ManifestResult,
};
use crate::domain::value_objects::ContentHash;
use crate::infrastructure::fs::LocalFs;

/// TOML-based manifest repository
///
/// ```toml
/// version = 1
///
/// [artifacts."Assets.Jungle.cs"]
/// hash = "sha256:..."
/// ```
pub struct TomlManifestRepository<FS: FileSystem = LocalFs> {
    fs: FS,
}

impl TomlManifestRepository<LocalFs> {
    /// Create a new repository with the default file system
    pub fn new() -> Self {
        Self { fs: LocalFs::new() }
    }
}

impl<FS: FileSystem> TomlManifestRepository<FS> {
    /// Create with a custom file system (for testing)
    pub fn with_fs(fs: FS) -> Self {
        Self { fs }
    }
}

impl Default for TomlManifestRepository<LocalFs> {
    fn default() -> Self {
        Self::new()
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
struct TomlArtifactEntry {
    hash: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
struct TomlManifest {
    version: u32,
    #[serde(default)]
    artifacts: BTreeMap<String, TomlArtifactEntry>,
}

impl<FS: FileSystem> ManifestRepository for TomlManifestRepository<FS> {
    fn load(&self, path: &Path) -> ManifestResult<Manifest> {
        if !self.fs.exists(path) {
            return Ok(Manifest::new());
        }

        let content = self
            .fs
            .read(path)
            .map_err(|e| ManifestError::Io(e.to_string()))?;
        let toml_manifest: TomlManifest =
            toml::from_str(&content).map_err(|e| ManifestError::Parse(e.to_string()))?;

        if toml_manifest.version != Manifest::VERSION {
            return Err(ManifestError::VersionMismatch {
                found: toml_manifest.version,
                expected: Manifest::VERSION,
            });
        }

        let mut manifest = Manifest::new();
        for (name, entry) in toml_manifest.artifacts {
            manifest.set(name, ManifestEntry::new(ContentHash::new(&entry.hash)));
        }

        Ok(manifest)
    }

    fn save(&self, manifest: &Manifest, path: &Path) -> ManifestResult<()> {
        let artifacts = manifest
            .entries()
            .map(|(name, entry)| {
                (
                    name.to_string(),
                    TomlArtifactEntry {
                        hash: entry.hash().to_string(),
                    },
                )
            })
            .collect();

        let toml_manifest = TomlManifest {
            version: manifest.version(),
            artifacts,
        };

        let content = toml::to_string_pretty(&toml_manifest)
            .map_err(|e| ManifestError::Parse(e.to_string()))?;
        self.fs
            .write(path, &content)
            .map_err(|e| ManifestError::Io(e.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::tempdir;

    #[test]
    fn load_missing_file_returns_empty_manifest() {
        let dir = tempdir().unwrap();
        let repo = TomlManifestRepository::new();

        let manifest = repo.load(&dir.path().join(".assetgen.lock")).unwrap();

        assert!(manifest.is_empty());
    }

    #[test]
    fn save_then_load_preserves_entries() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("obj").join(".assetgen.lock");
        let repo = TomlManifestRepository::new();

        let mut manifest = Manifest::new();
        manifest.set(
            "Assets.Jungle.cs",
            ManifestEntry::new(ContentHash::from_content("a")),
        );
        manifest.set(
            "Assets.default.g.cs",
            ManifestEntry::new(ContentHash::from_content("b")),
        );
        repo.save(&manifest, &path).unwrap();

        let loaded = repo.load(&path).unwrap();
        assert_eq!(loaded, manifest);
    }

    #[test]
    fn extra_entry_keys_are_ignored() {
        let dir = tempdir().unwrap();
        let path = dir.path().join(".assetgen.lock");
        fs::write(
            &path,
            "version = 1\n\n[artifacts.\"Assets.g.cs\"]\nhash = \"sha256:ab\"\ninput = \"3f2a\"\n",
        )
        .unwrap();

        let loaded = TomlManifestRepository::new().load(&path).unwrap();

        assert_eq!(loaded.get_hash("Assets.g.cs"), Some(&ContentHash::new("sha256:ab")));
    }

    #[test]
    fn saved_file_is_readable_toml() {
        let dir = tempdir().unwrap();
        let path = dir.path().join(".assetgen.lock");
        let repo = TomlManifestRepository::new();

        let mut manifest = Manifest::new();
        manifest.set(
            "Assets.g.cs",
            ManifestEntry::new(ContentHash::from_content("x")),
        );
        repo.save(&manifest, &path).unwrap();

        let content = fs::read_to_string(&path).unwrap();
        assert!(content.contains("version = 1"));
        assert!(content.contains("[artifacts.\"Assets.g.cs\"]"));
        assert!(content.contains("hash = \"sha256:"));
        assert!(!content.contains("input"));
    }

    #[test]
    fn version_mismatch_is_reported() {
        let dir = tempdir().unwrap();
        let path = dir.path().join(".assetgen.lock");
        fs::write(&path, "version = 99\n").unwrap();

        let err = TomlManifestRepository::new().load(&path).unwrap_err();

        assert!(matches!(
            err,
            ManifestError::VersionMismatch {
                found: 99,
                expected: 1
            }
        ));
    }

    #[test]
    fn corrupt_manifest_falls_back_to_empty() {
        let dir = tempdir().unwrap();
        let path = dir.path().join(".assetgen.lock");
        fs::write(&path, "this is not toml [").unwrap();

        let repo = TomlManifestRepository::new();
        assert!(matches!(repo.load(&path), Err(ManifestError::Parse(_))));
        assert!(repo.load_or_new(&path).is_empty());
    }
}
