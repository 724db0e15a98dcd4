//! Configuration loading

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::Context;

use crate::error::{GenerateError, GenerateResult};

use super::types::GeneratorConfig;

pub use crate::domain::value_objects::ConfigWarning;

/// Project config file name
pub const CONFIG_FILE_NAME: &str = "assetgen.toml";

/// Load configuration and collect non-fatal warnings (e.g. unknown keys).
pub fn load_with_warnings(path: &Path) -> GenerateResult<(GeneratorConfig, Vec<ConfigWarning>)> {
    let content = fs::read_to_string(path)?;
    parse_with_warnings(&content, path)
}

/// Parse configuration text; `path` is only used for warnings and errors.
pub fn parse_with_warnings(
    content: &str,
    path: &Path,
) -> GenerateResult<(GeneratorConfig, Vec<ConfigWarning>)> {
    let mut unknown_paths: Vec<String> = Vec::new();
    let deserializer = toml::de::Deserializer::new(content);

    let config: GeneratorConfig = serde_ignored::deserialize(deserializer, |p| {
        unknown_paths.push(p.to_string());
    })
    .map_err(|e| GenerateError::InvalidConfig {
        file: path.to_path_buf(),
        message: e.to_string(),
    })?;

    let warnings = unknown_paths
        .into_iter()
        .map(|key| {
            let leaf = key.rsplit('.').next().unwrap_or(key.as_str()).to_string();
            ConfigWarning {
                line: find_line_number(content, &leaf),
                suggestion: suggest_key(&leaf),
                file: path.to_path_buf(),
                key,
            }
        })
        .collect();

    Ok((config, warnings))
}

/// Resolve configuration for a project.
///
/// Order: `explicit` path (must exist), then `<project_root>/assetgen.toml`,
/// then built-in defaults. Environment overrides apply last.
pub fn resolve(
    project_root: &Path,
    explicit: Option<&Path>,
) -> anyhow::Result<(GeneratorConfig, Vec<ConfigWarning>)> {
    let candidate: Option<PathBuf> = match explicit {
        Some(path) => Some(path.to_path_buf()),
        None => Some(project_root.join(CONFIG_FILE_NAME)).filter(|p| p.exists()),
    };

    let (config, warnings) = match candidate {
        Some(path) => load_with_warnings(&path)
            .with_context(|| format!("failed to load config from {}", path.display()))?,
        None => (GeneratorConfig::default(), Vec::new()),
    };

    for warning in &warnings {
        tracing::warn!("{}", warning);
    }

    Ok((with_env_overrides(config), warnings))
}

/// Load from project config or defaults, ignoring unreadable files
pub fn load_or_default(project_root: Option<&Path>) -> GeneratorConfig {
    if let Some(root) = project_root {
        let project_config = root.join(CONFIG_FILE_NAME);
        if project_config.exists() {
            match load_with_warnings(&project_config) {
                Ok((config, _)) => return with_env_overrides(config),
                Err(err) => {
                    tracing::warn!(path = %project_config.display(), error = %err, "ignoring invalid config")
                }
            }
        }
    }

    with_env_overrides(GeneratorConfig::default())
}

/// Apply environment variable overrides (ASSETGEN_* prefix)
pub fn with_env_overrides(config: GeneratorConfig) -> GeneratorConfig {
    with_overrides_from(config, |name| std::env::var(name).ok())
}

pub(super) fn with_overrides_from<F>(mut config: GeneratorConfig, lookup: F) -> GeneratorConfig
where
    F: Fn(&str) -> Option<String>,
{
    // ASSETGEN_MARKER_FILE
    if let Some(marker) = lookup("ASSETGEN_MARKER_FILE").filter(|v| !v.trim().is_empty()) {
        config.generator.marker_file = marker.trim().to_string();
    }

    // ASSETGEN_OUTPUT_DIR
    if let Some(dir) = lookup("ASSETGEN_OUTPUT_DIR").filter(|v| !v.trim().is_empty()) {
        config.output.directory = PathBuf::from(dir.trim());
    }

    config
}

fn find_line_number(content: &str, needle: &str) -> Option<usize> {
    content
        .lines()
        .position(|line| line.trim_start().starts_with(needle))
        .map(|i| i + 1)
}

pub(super) fn suggest_key(unknown: &str) -> Option<String> {
    const CANDIDATES: &[&str] = &[
        "generator",
        "marker_file",
        "strip_prefix",
        "namespace",
        "tool_name",
        "tool_version",
        "emit_global_usings",
        "warn_outside_root",
        "output",
        "directory",
        "manifest",
    ];

    CANDIDATES
        .iter()
        .map(|candidate| (*candidate, levenshtein(unknown, candidate)))
        .min_by_key(|(_, dist)| *dist)
        .filter(|(_, dist)| *dist <= 2)
        .map(|(candidate, _)| candidate.to_string())
}

pub(super) fn levenshtein(a: &str, b: &str) -> usize {
    if a == b {
        return 0;
    }

    let a_bytes = a.as_bytes();
    let b_bytes = b.as_bytes();

    let mut prev: Vec<usize> = (0..=b_bytes.len()).collect();
    let mut curr = vec![0usize; b_bytes.len() + 1];

    for (i, &ac) in a_bytes.iter().enumerate() {
        curr[0] = i + 1;
        for (j, &bc) in b_bytes.iter().enumerate() {
            let cost = usize::from(ac != bc);
            curr[j + 1] = (prev[j + 1] + 1).min(curr[j] + 1).min(prev[j] + cost);
        }
        prev.clone_from_slice(&curr);
    }

    prev[b_bytes.len()]
}
