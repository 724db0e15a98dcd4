//! Incremental generator
//!
//! Drives one generation pass over the memoized node graph:
//!
//! ```text
//! marker subset ──► root ──┐
//!                          ├──► per-file derivation ──► grouping ──► per-group emission
//! raw files ───────────────┘                                      └─► root / usings artifacts
//! ```
//!
//! Every node reads the previous pass's tables and records into a fresh
//! set. The fresh set replaces the old one only after the whole pass
//! succeeded, so a cancelled or failing pass leaves the previous cache
//! untouched.

use std::collections::HashSet;
use std::sync::Arc;

use crate::application::cancellation::CancellationToken;
use crate::config::GeneratorSection;
use crate::domain::entities::{
    Artifact, AssetFile, DirectoryGroup, ExactAsset, FileInformation, GeneratorInput,
};
use crate::domain::ports::{ArtifactEmitter, NoopEventSink, PassEvent, PassEventSink};
use crate::domain::services::{
    discovery, group_by_folder, ArtifactNaming, RootResolution, RootResolver,
    USINGS_ARTIFACT_NAME,
};
use crate::domain::value_objects::{Diagnostic, DiagnosticCode};
use crate::error::GenerateResult;

use super::memo::{Evaluated, MemoTable};
use super::output::{EmittedArtifact, PassOutput};

#[derive(Debug, Default)]
struct PassState {
    root: MemoTable<(), Vec<String>, RootResolution>,
    files: MemoTable<String, FileInformation, Option<AssetFile>>,
    groups: MemoTable<(), Vec<ExactAsset>, Vec<DirectoryGroup>>,
    group_artifacts: MemoTable<String, (DirectoryGroup, String), Artifact>,
    root_artifact: MemoTable<(), (Option<String>, String), Artifact>,
    usings: MemoTable<(), String, Artifact>,
    artifact_names: Vec<String>,
}

/// Incremental asset registry generator
///
/// Holds the memo tables between passes. Feed it the full input file list
/// on every pass; only nodes whose inputs changed are recomputed.
pub struct IncrementalGenerator {
    settings: GeneratorSection,
    resolver: RootResolver,
    naming: ArtifactNaming,
    emitter: Arc<dyn ArtifactEmitter>,
    events: Arc<dyn PassEventSink>,
    state: PassState,
    pass: u64,
}

impl IncrementalGenerator {
    pub fn new(settings: GeneratorSection, emitter: Arc<dyn ArtifactEmitter>) -> Self {
        Self {
            resolver: RootResolver::new(settings.marker_file.clone()),
            naming: ArtifactNaming::new(settings.namespace.clone()),
            settings,
            emitter,
            events: Arc::new(NoopEventSink),
            state: PassState::default(),
            pass: 0,
        }
    }

    pub fn with_event_sink(mut self, events: Arc<dyn PassEventSink>) -> Self {
        self.events = events;
        self
    }

    pub fn settings(&self) -> &GeneratorSection {
        &self.settings
    }

    /// Number of passes that completed successfully
    pub fn passes(&self) -> u64 {
        self.pass
    }

    /// Number of per-file nodes currently cached
    pub fn cached_files(&self) -> usize {
        self.state.files.len()
    }

    /// Forget all cached nodes; the next pass recomputes everything
    pub fn reset(&mut self) {
        self.state = PassState::default();
    }

    /// Run one pass over the complete input file list.
    pub fn run<S: AsRef<str>>(
        &mut self,
        files: &[S],
        assembly_name: &str,
        cancel: &CancellationToken,
    ) -> GenerateResult<PassOutput> {
        cancel.check()?;

        let pass = self.pass + 1;
        let mut next = PassState::default();
        let mut output = PassOutput {
            pass,
            ..PassOutput::default()
        };
        self.events.on_event(PassEvent::Started {
            pass,
            input_count: files.len(),
        });

        let input = self.resolve_root(files, assembly_name, &mut next, &mut output)?;
        let assets = self.discover(files, &input, &mut next, &mut output, cancel)?;
        let groups = self.group(assets, &mut next, &mut output, cancel)?;
        self.emit(&groups, &input, &mut next, &mut output, cancel)?;

        next.artifact_names = output.names().map(str::to_string).collect();
        let current: HashSet<&str> = next.artifact_names.iter().map(String::as_str).collect();
        output.removed = self
            .state
            .artifact_names
            .iter()
            .filter(|name| !current.contains(name.as_str()))
            .cloned()
            .collect();

        for name in &output.removed {
            self.events.on_event(PassEvent::ArtifactRemoved { name: name.clone() });
        }
        for diagnostic in &output.diagnostics {
            self.events.on_event(PassEvent::Warning {
                diagnostic: diagnostic.clone(),
            });
        }

        self.state = next;
        self.pass = pass;

        let stats = output.stats;
        tracing::info!(
            pass,
            artifacts = output.artifacts.len(),
            recomputed = stats.artifacts_recomputed,
            reused = stats.artifacts_reused,
            removed = output.removed.len(),
            "generation pass completed"
        );
        self.events.on_event(PassEvent::Completed {
            pass,
            artifact_count: output.artifacts.len(),
            recomputed_count: stats.artifacts_recomputed,
            reused_count: stats.artifacts_reused,
        });

        Ok(output)
    }

    fn resolve_root<S: AsRef<str>>(
        &self,
        files: &[S],
        assembly_name: &str,
        next: &mut PassState,
        output: &mut PassOutput,
    ) -> GenerateResult<GeneratorInput> {
        let markers = self.resolver.marker_paths(files);
        let root = self.state.root.evaluate(&mut next.root, (), markers, |markers| {
            Ok(self.resolver.resolve(markers))
        })?;

        output.diagnostics.extend(root.output.diagnostics.iter().cloned());
        self.events.on_event(PassEvent::RootResolved {
            asset_root: root.output.asset_root.clone(),
            outcome: root.outcome,
        });

        Ok(GeneratorInput::new(root.output.asset_root, assembly_name))
    }

    fn discover<S: AsRef<str>>(
        &self,
        files: &[S],
        input: &GeneratorInput,
        next: &mut PassState,
        output: &mut PassOutput,
        cancel: &CancellationToken,
    ) -> GenerateResult<Vec<AssetFile>> {
        cancel.check()?;

        let strip = self.settings.strip_prefix.as_str();
        let mut seen: HashSet<String> = HashSet::new();
        let mut assets = Vec::new();

        for raw in files {
            let raw = raw.as_ref();
            if !discovery::is_candidate(raw) {
                continue;
            }
            let info = discovery::join(raw, input);
            let path = info.full_path.clone();
            if !seen.insert(path.clone()) {
                tracing::debug!(path = %path, "duplicate input ignored");
                continue;
            }
            cancel.check()?;

            output.stats.candidates += 1;
            let derived = self
                .state
                .files
                .evaluate(&mut next.files, path.clone(), info, |info| {
                    discovery::derive(info, strip)
                })?;
            if !derived.outcome.is_reused() {
                output.stats.files_recomputed += 1;
            }

            match derived.output {
                Some(asset) => assets.push(asset),
                None if input.asset_root().is_none() => {
                    tracing::debug!(path = %path, "no asset root, file excluded")
                }
                None => {
                    tracing::debug!(path = %path, "outside asset root, file excluded");
                    if self.settings.warn_outside_root {
                        output.diagnostics.push(
                            Diagnostic::new(
                                DiagnosticCode::OutsideAssetRoot,
                                "recognized asset lies outside the asset root",
                            )
                            .with_path(path),
                        );
                    }
                }
            }
        }

        output.stats.assets = assets.len();
        Ok(assets)
    }

    fn group(
        &self,
        assets: Vec<AssetFile>,
        next: &mut PassState,
        output: &mut PassOutput,
        cancel: &CancellationToken,
    ) -> GenerateResult<Vec<DirectoryGroup>> {
        cancel.check()?;

        let asset_count = assets.len();
        // exact casing: a case-only rename must reach the rendered text
        let assets: Vec<ExactAsset> = assets.into_iter().map(ExactAsset).collect();
        let grouped = self.state.groups.evaluate(&mut next.groups, (), assets, |assets| {
            let groups = group_by_folder(assets.iter().map(ExactAsset::asset));
            self.naming.ensure_unique(&groups)?;
            self.naming.ensure_unique_members(&groups)?;
            Ok(groups)
        })?;

        output.stats.groups = grouped.output.len();
        self.events.on_event(PassEvent::Grouped {
            asset_count,
            group_count: grouped.output.len(),
            outcome: grouped.outcome,
        });

        Ok(grouped.output)
    }

    fn emit(
        &self,
        groups: &[DirectoryGroup],
        input: &GeneratorInput,
        next: &mut PassState,
        output: &mut PassOutput,
        cancel: &CancellationToken,
    ) -> GenerateResult<()> {
        cancel.check()?;

        let assembly = input.assembly_name().to_string();
        let warning = format!("missing {} file", self.resolver.marker_file());

        let root = self.state.root_artifact.evaluate(
            &mut next.root_artifact,
            (),
            (input.asset_root.clone(), assembly.clone()),
            |(asset_root, assembly)| {
                let warning = asset_root.is_none().then_some(warning.as_str());
                Ok(Artifact::new(
                    self.naming.root_artifact_name(),
                    self.emitter.root_declaration(assembly, warning),
                ))
            },
        )?;
        self.record(root, output);

        for group in groups {
            cancel.check()?;
            let emitted = self.state.group_artifacts.evaluate(
                &mut next.group_artifacts,
                group.key().to_string(),
                (group.clone(), assembly.clone()),
                |(group, assembly)| {
                    Ok(Artifact::new(
                        self.naming.group_artifact_name(group.key()),
                        self.emitter.group_module(group, assembly),
                    ))
                },
            )?;
            self.record(emitted, output);
        }

        if self.settings.emit_global_usings {
            let usings =
                self.state
                    .usings
                    .evaluate(&mut next.usings, (), assembly, |assembly| {
                        Ok(Artifact::new(
                            USINGS_ARTIFACT_NAME,
                            self.emitter.global_usings(assembly),
                        ))
                    })?;
            self.record(usings, output);
        }

        Ok(())
    }

    fn record(&self, evaluated: Evaluated<Artifact>, output: &mut PassOutput) {
        if evaluated.outcome.is_reused() {
            output.stats.artifacts_reused += 1;
        } else {
            output.stats.artifacts_recomputed += 1;
        }

        tracing::trace!(
            name = %evaluated.output.name(),
            outcome = ?evaluated.outcome,
            emitter = self.emitter.id(),
            "artifact"
        );
        if self.events.wants_detailed_events() {
            self.events.on_event(PassEvent::ArtifactEmitted {
                name: evaluated.output.name().to_string(),
                outcome: evaluated.outcome,
            });
        }

        output.artifacts.push(EmittedArtifact {
            artifact: evaluated.output,
            outcome: evaluated.outcome,
            input: evaluated.fingerprint,
        });
    }
}
