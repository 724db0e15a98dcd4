//! Artifact entity - one generated source text
//!
//! Artifacts are the result of emitting a directory group (or the fixed root
//! declaration). They are handed to the host build under their `name`.

use crate::domain::value_objects::ContentHash;

/// A named generated text blob
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Artifact {
    /// Artifact (hint) name, e.g. `Assets.Jungle.cs`
    name: String,
    content: String,
    hash: ContentHash,
}

impl Artifact {
    /// Create a new Artifact; the content hash is computed once here
    pub fn new(name: impl Into<String>, content: impl Into<String>) -> Self {
        let content = content.into();
        Self {
            name: name.into(),
            hash: ContentHash::from_content(&content),
            content,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn content(&self) -> &str {
        &self.content
    }

    /// SHA-256 of the content
    pub fn hash(&self) -> &ContentHash {
        &self.hash
    }

    /// Get content length in bytes
    pub fn len(&self) -> usize {
        self.content.len()
    }

    pub fn is_empty(&self) -> bool {
        self.content.is_empty()
    }
}
