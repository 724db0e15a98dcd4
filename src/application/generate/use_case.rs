//! Generate Use Case
//!
//! Orchestrates one generation run against a project directory:
//! 1. Collect the input file list (host-provided or scanned)
//! 2. Run an incremental pass
//! 3. Write artifacts whose content differs from the manifest
//! 4. Delete artifacts the manifest knows but the pass no longer produced,
//!    provided they still look generated
//! 5. Save the manifest
//!
//! The use case owns its `IncrementalGenerator`, so repeated `execute` calls
//! on one instance only recompute what changed in between.

use std::path::Path;
use std::sync::Arc;

use crate::application::cancellation::CancellationToken;
use crate::application::incremental::{IncrementalGenerator, PassOutput};
use crate::config::GeneratorConfig;
use crate::domain::entities::{Manifest, ManifestEntry};
use crate::domain::ports::{ArtifactEmitter, FileSystem, ManifestRepository, PassEventSink};
use crate::domain::services::is_artifact_file_name;
use crate::error::GenerateResult;
use crate::infrastructure::fs::scan_files;

use super::options::GenerateOptions;
use super::result::GenerateReport;

/// Generate use case - writes the asset registry for a project
///
/// Parameterized by its ports, allowing for easy testing and different
/// implementations.
pub struct GenerateUseCase<MR, FS>
where
    MR: ManifestRepository,
    FS: FileSystem,
{
    config: GeneratorConfig,
    generator: IncrementalGenerator,
    emitter: Arc<dyn ArtifactEmitter>,
    manifest_repo: MR,
    file_system: FS,
}

impl<MR, FS> GenerateUseCase<MR, FS>
where
    MR: ManifestRepository,
    FS: FileSystem,
{
    pub fn new(
        config: GeneratorConfig,
        manifest_repo: MR,
        file_system: FS,
        emitter: Arc<dyn ArtifactEmitter>,
    ) -> Self {
        Self {
            generator: IncrementalGenerator::new(config.generator.clone(), Arc::clone(&emitter)),
            emitter,
            config,
            manifest_repo,
            file_system,
        }
    }

    /// Report pass events to `events`
    pub fn with_event_sink(mut self, events: Arc<dyn PassEventSink>) -> Self {
        self.generator = self.generator.with_event_sink(events);
        self
    }

    pub fn config(&self) -> &GeneratorConfig {
        &self.config
    }

    /// Execute the generate use case
    pub fn execute(&mut self, options: &GenerateOptions) -> GenerateResult<GenerateReport> {
        self.execute_with_cancellation(options, &CancellationToken::new())
    }

    /// Execute, abandoning the run if `cancel` fires before writing starts
    pub fn execute_with_cancellation(
        &mut self,
        options: &GenerateOptions,
        cancel: &CancellationToken,
    ) -> GenerateResult<GenerateReport> {
        let scanned;
        let files: &[String] = match &options.files {
            Some(files) => files,
            None => {
                scanned = scan_files(&options.project_root)?;
                &scanned
            }
        };

        let output = self.generator.run(files, &options.assembly_name, cancel)?;
        // last point where a superseded run can leave the disk untouched
        cancel.check()?;

        let output_dir = self.config.output_dir(&options.project_root);
        let manifest_path = self.config.manifest_path(&options.project_root);
        let previous = self.manifest_repo.load_or_new(&manifest_path);

        let mut report = GenerateReport {
            diagnostics: output.diagnostics.clone(),
            artifact_count: output.artifacts.len(),
            stats: output.stats,
            dry_run: options.dry_run,
            ..GenerateReport::new()
        };

        let manifest = self.write_artifacts(&output, &previous, &output_dir, options, &mut report)?;
        self.remove_stale(&previous, &manifest, &output_dir, options, &mut report)?;

        if !options.dry_run {
            self.manifest_repo.save(&manifest, &manifest_path)?;
        }

        tracing::info!(
            written = report.written.len(),
            skipped = report.skipped.len(),
            removed = report.removed.len(),
            dry_run = options.dry_run,
            output = %output_dir.display(),
            "generate finished"
        );
        Ok(report)
    }

    fn write_artifacts(
        &self,
        output: &PassOutput,
        previous: &Manifest,
        output_dir: &Path,
        options: &GenerateOptions,
        report: &mut GenerateReport,
    ) -> GenerateResult<Manifest> {
        let mut manifest = Manifest::new();

        for emitted in &output.artifacts {
            let artifact = &emitted.artifact;
            let path = output_dir.join(artifact.name());
            let up_to_date = previous.get_hash(artifact.name()) == Some(artifact.hash())
                && self.file_system.exists(&path);

            if up_to_date {
                tracing::debug!(name = artifact.name(), "artifact up to date");
                report.skipped.push(path);
            } else {
                if !options.dry_run {
                    self.file_system
                        .write(&path, artifact.content())
                        .map_err(std::io::Error::from)?;
                }
                tracing::debug!(name = artifact.name(), bytes = artifact.len(), "artifact written");
                report.written.push(path);
            }

            manifest.set(
                artifact.name(),
                ManifestEntry::new(artifact.hash().clone()),
            );
        }

        Ok(manifest)
    }

    fn remove_stale(
        &self,
        previous: &Manifest,
        current: &Manifest,
        output_dir: &Path,
        options: &GenerateOptions,
        report: &mut GenerateReport,
    ) -> GenerateResult<()> {
        for name in previous.names().filter(|name| !current.contains(name)) {
            if !is_artifact_file_name(name) {
                tracing::warn!(name = %name, "manifest entry is not a plain file name, not removed");
                continue;
            }
            let path = output_dir.join(name);
            if !self.file_system.exists(&path) {
                continue;
            }
            if !self.is_generated(&path) {
                tracing::warn!(
                    path = %path.display(),
                    "stale file lacks the generated header, not removed"
                );
                continue;
            }
            if !options.dry_run {
                self.file_system
                    .remove(&path)
                    .map_err(std::io::Error::from)?;
            }
            tracing::debug!(path = %path.display(), "stale artifact removed");
            report.removed.push(path);
        }

        Ok(())
    }

    fn is_generated(&self, path: &Path) -> bool {
        match self.file_system.read(path) {
            Ok(content) => self.emitter.has_signature(&content),
            Err(e) => {
                tracing::debug!(path = %path.display(), error = %e, "stale artifact unreadable");
                false
            }
        }
    }
}
