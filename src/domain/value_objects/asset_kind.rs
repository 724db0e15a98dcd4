//! Asset kind value object
//!
//! The closed mapping from recognized file extensions to asset kinds.
//! Extending the registry means adding a variant here; the allow-list is
//! derived from [`AssetKind::ALL`] so the two cannot drift apart by accident.

use std::fmt;

use crate::error::{GenerateError, GenerateResult};

/// How a generated accessor realizes its asset
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LoadPolicy {
    /// Requested on first access of the accessor
    Deferred,
    /// Requested synchronously when the declaring type initializes
    Immediate,
}

/// Kind of asset, decided by file extension
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum AssetKind {
    /// `.png` image loaded as a 2D texture
    Texture2D,
    /// `.fxc` compiled shader effect
    Effect,
}

impl AssetKind {
    /// Every kind, in declaration order
    pub const ALL: [AssetKind; 2] = [AssetKind::Texture2D, AssetKind::Effect];

    /// The extension (with leading dot, lowercase) this kind is recognized by
    pub fn extension(self) -> &'static str {
        match self {
            AssetKind::Texture2D => ".png",
            AssetKind::Effect => ".fxc",
        }
    }

    /// When the generated accessor requests the asset
    pub fn load_policy(self) -> LoadPolicy {
        match self {
            AssetKind::Texture2D => LoadPolicy::Deferred,
            AssetKind::Effect => LoadPolicy::Immediate,
        }
    }

    /// Stable identifier used in fingerprints and logs
    pub fn as_str(self) -> &'static str {
        match self {
            AssetKind::Texture2D => "texture2d",
            AssetKind::Effect => "effect",
        }
    }

    /// Extensions accepted by the discovery stage
    pub fn recognized_extensions() -> impl Iterator<Item = &'static str> {
        Self::ALL.iter().map(|kind| kind.extension())
    }

    /// Whether `path` ends with a recognized extension (case-insensitive)
    pub fn is_recognized_path(path: &str) -> bool {
        Self::recognized_extensions()
            .any(|ext| super::path::ends_with_ignore_case(path, ext))
    }

    /// Map an extension (with leading dot, any case) to its kind.
    ///
    /// Inputs are pre-filtered by [`AssetKind::is_recognized_path`], so an
    /// error here means the allow-list and this mapping disagree.
    pub fn classify(extension: &str, path: &str) -> GenerateResult<AssetKind> {
        Self::ALL
            .into_iter()
            .find(|kind| kind.extension().eq_ignore_ascii_case(extension))
            .ok_or_else(|| GenerateError::UnclassifiedExtension {
                extension: extension.to_string(),
                path: path.to_string(),
            })
    }
}

impl fmt::Display for AssetKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
