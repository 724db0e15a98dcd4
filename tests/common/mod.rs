//! Common test utilities for assetgen scenario tests.
//!
//! - `TestProject`: an isolated project directory with helpers to add,
//!   remove and read files, and to run the generate use case against it.

#![allow(dead_code)]

use std::fs;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use assetgen::application::{GenerateOptions, GenerateReport, GenerateUseCase};
use assetgen::config::{self, GeneratorConfig};
use assetgen::{CSharpEmitter, LocalFs, TomlManifestRepository};
use tempfile::TempDir;

pub type ProjectUseCase = GenerateUseCase<TomlManifestRepository, LocalFs>;

pub const ASSEMBLY: &str = "Mod";

pub struct TestProject {
    dir: TempDir,
}

impl TestProject {
    pub fn new() -> Self {
        Self {
            dir: TempDir::new().unwrap(),
        }
    }

    /// A project with the marker at `Assets/AssetRoot.txt`.
    pub fn with_asset_root() -> Self {
        let project = Self::new();
        project.touch("Assets/AssetRoot.txt");
        project
    }

    pub fn root(&self) -> &Path {
        self.dir.path()
    }

    pub fn path(&self, relative: &str) -> PathBuf {
        self.dir.path().join(relative)
    }

    pub fn touch(&self, relative: &str) {
        self.write(relative, "");
    }

    pub fn write(&self, relative: &str, content: &str) {
        let path = self.path(relative);
        fs::create_dir_all(path.parent().unwrap()).unwrap();
        fs::write(path, content).unwrap();
    }

    pub fn remove(&self, relative: &str) {
        fs::remove_file(self.path(relative)).unwrap();
    }

    /// Read a generated artifact by name.
    pub fn artifact(&self, name: &str) -> Option<String> {
        let config = GeneratorConfig::default();
        fs::read_to_string(config.output_dir(self.root()).join(name)).ok()
    }

    /// Names of every generated `.cs` file, sorted.
    pub fn artifact_names(&self) -> Vec<String> {
        let dir = GeneratorConfig::default().output_dir(self.root());
        let Ok(entries) = fs::read_dir(dir) else {
            return Vec::new();
        };
        let mut names: Vec<String> = entries
            .filter_map(|e| e.ok())
            .map(|e| e.file_name().to_string_lossy().into_owned())
            .filter(|n| n.ends_with(".cs"))
            .collect();
        names.sort();
        names
    }

    /// A long-lived use case configured from the project's `assetgen.toml`.
    pub fn use_case(&self) -> ProjectUseCase {
        let (config, _warnings) = config::resolve(self.root(), None).unwrap();
        let emitter = Arc::new(CSharpEmitter::from_settings(&config.generator));
        GenerateUseCase::new(
            config,
            TomlManifestRepository::new(),
            LocalFs::new(),
            emitter,
        )
    }

    pub fn options(&self) -> GenerateOptions {
        GenerateOptions::new(self.root(), ASSEMBLY)
    }

    /// One-shot generation with a fresh use case.
    pub fn generate(&self) -> GenerateReport {
        self.use_case().execute(&self.options()).unwrap()
    }
}
