//! Artifact naming
//!
//! Artifact names are derived from the folder path alone, so a group always
//! lands in the same artifact across runs.

use std::collections::HashMap;
use std::path::{Component, Path};

use crate::domain::entities::DirectoryGroup;
use crate::error::{GenerateError, GenerateResult};

/// Name of the optional global-usings artifact
pub const USINGS_ARTIFACT_NAME: &str = "_Usings.g.cs";

/// Derives artifact names under a top-level namespace
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArtifactNaming {
    namespace: String,
}

impl ArtifactNaming {
    pub fn new(namespace: impl Into<String>) -> Self {
        Self {
            namespace: namespace.into(),
        }
    }

    pub fn namespace(&self) -> &str {
        &self.namespace
    }

    /// `{ns}.default.g.cs`, always emitted once per pass
    pub fn root_artifact_name(&self) -> String {
        format!("{}.default.g.cs", self.namespace)
    }

    /// `{ns}.g.cs` for root-level assets
    pub fn default_group_artifact_name(&self) -> String {
        format!("{}.g.cs", self.namespace)
    }

    /// `{ns}.{folder with / as .}.cs`, or the default name for an empty folder
    pub fn group_artifact_name(&self, folder: &str) -> String {
        if folder.is_empty() {
            return self.default_group_artifact_name();
        }
        let mut name = String::with_capacity(self.namespace.len() + folder.len() + 4);
        name.push_str(&self.namespace);
        name.push('.');
        name.extend(folder.chars().map(|c| if c == '/' { '.' } else { c }));
        name.push_str(".cs");
        name
    }

    /// Fail when two groups would produce the same artifact name.
    ///
    /// Names differing only in case collide: they share one file on
    /// case-insensitive file systems.
    pub fn ensure_unique(&self, groups: &[DirectoryGroup]) -> GenerateResult<()> {
        let mut seen: HashMap<String, &str> = HashMap::new();
        seen.insert(self.root_artifact_name().to_lowercase(), "<root>");
        seen.insert(USINGS_ARTIFACT_NAME.to_lowercase(), "<usings>");

        for group in groups {
            let name = self.group_artifact_name(group.key());
            if let Some(first) = seen.insert(name.to_lowercase(), group.key()) {
                return Err(GenerateError::DuplicateArtifactName {
                    name,
                    first: first.to_string(),
                    second: group.key().to_string(),
                });
            }
        }
        Ok(())
    }

    /// Fail when two members of one group would declare the same accessor.
    ///
    /// Member names are C# identifiers, so they compare ordinally.
    pub fn ensure_unique_members(&self, groups: &[DirectoryGroup]) -> GenerateResult<()> {
        for group in groups {
            let mut seen: HashMap<&str, &str> = HashMap::with_capacity(group.len());
            for asset in group.members() {
                if let Some(first) = seen.insert(asset.name(), asset.extension()) {
                    return Err(GenerateError::DuplicateMemberName {
                        name: asset.name().to_string(),
                        folder: group.key().to_string(),
                        first: format!("{}{}", asset.name(), first),
                        second: format!("{}{}", asset.name(), asset.extension()),
                    });
                }
            }
        }
        Ok(())
    }
}

/// Whether `name` is a bare file name, so joining it onto the output
/// directory cannot leave that directory.
pub fn is_artifact_file_name(name: &str) -> bool {
    if name.contains(['/', '\\']) {
        return false;
    }
    let mut components = Path::new(name).components();
    matches!(
        (components.next(), components.next()),
        (Some(Component::Normal(part)), None) if part.to_str() == Some(name)
    )
}

impl Default for ArtifactNaming {
    fn default() -> Self {
        Self::new("Assets")
    }
}
