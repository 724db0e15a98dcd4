//! Configuration type definitions

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::GenerateResult;

use super::loader::{self, ConfigWarning};

/// Pipeline settings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GeneratorSection {
    /// File whose directory becomes the asset root
    #[serde(default = "default_marker_file")]
    pub marker_file: String,

    /// Leading folder segment removed from generated namespaces
    #[serde(default = "default_strip_prefix")]
    pub strip_prefix: String,

    /// Top-level generated namespace and class name
    #[serde(default = "default_namespace")]
    pub namespace: String,

    #[serde(default = "default_tool_name")]
    pub tool_name: String,

    #[serde(default = "default_tool_version")]
    pub tool_version: String,

    #[serde(default)]
    pub emit_global_usings: bool,

    /// Report recognized assets outside the asset root
    #[serde(default)]
    pub warn_outside_root: bool,
}

impl Default for GeneratorSection {
    fn default() -> Self {
        Self {
            marker_file: default_marker_file(),
            strip_prefix: default_strip_prefix(),
            namespace: default_namespace(),
            tool_name: default_tool_name(),
            tool_version: default_tool_version(),
            emit_global_usings: false,
            warn_outside_root: false,
        }
    }
}

fn default_marker_file() -> String {
    "AssetRoot.txt".to_string()
}

fn default_strip_prefix() -> String {
    "Assets".to_string()
}

fn default_namespace() -> String {
    "Assets".to_string()
}

fn default_tool_name() -> String {
    env!("CARGO_PKG_NAME").to_string()
}

fn default_tool_version() -> String {
    "1.0".to_string()
}

/// Where generated artifacts and the manifest go
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OutputSection {
    /// Artifact directory, relative to the project root
    #[serde(default = "default_output_directory")]
    pub directory: PathBuf,

    /// Manifest file name inside the artifact directory
    #[serde(default = "default_manifest")]
    pub manifest: String,
}

impl Default for OutputSection {
    fn default() -> Self {
        Self {
            directory: default_output_directory(),
            manifest: default_manifest(),
        }
    }
}

fn default_output_directory() -> PathBuf {
    PathBuf::from("obj/assetgen")
}

fn default_manifest() -> String {
    ".assetgen.lock".to_string()
}

/// Complete `assetgen.toml`
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GeneratorConfig {
    #[serde(default)]
    pub generator: GeneratorSection,

    #[serde(default)]
    pub output: OutputSection,
}

impl GeneratorConfig {
    /// Load configuration from a TOML file
    pub fn load(path: &Path) -> GenerateResult<Self> {
        Ok(Self::load_with_warnings(path)?.0)
    }

    /// Load configuration and collect warnings for unknown keys
    pub fn load_with_warnings(path: &Path) -> GenerateResult<(Self, Vec<ConfigWarning>)> {
        loader::load_with_warnings(path)
    }

    /// Load from the project config or defaults, then apply env overrides
    pub fn load_or_default(project_root: Option<&Path>) -> Self {
        loader::load_or_default(project_root)
    }

    /// Manifest location for a project rooted at `project_root`
    pub fn manifest_path(&self, project_root: &Path) -> PathBuf {
        self.output_dir(project_root).join(&self.output.manifest)
    }

    /// Artifact directory for a project rooted at `project_root`
    pub fn output_dir(&self, project_root: &Path) -> PathBuf {
        project_root.join(&self.output.directory)
    }
}
