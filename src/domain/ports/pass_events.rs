//! Pass Event Port
//!
//! Provides an observable interface for generation passes.
//! Enables progress reporting and debugging without coupling to a UI.

use crate::domain::value_objects::Diagnostic;

/// How a node's value was obtained in the current pass
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StepOutcome {
    /// No entry existed for this key in the previous pass
    New,
    /// Input changed, value recomputed
    Modified,
    /// Input structurally equal to the previous pass, value reused
    Unchanged,
}

impl StepOutcome {
    pub fn is_reused(self) -> bool {
        self == StepOutcome::Unchanged
    }
}

/// Event emitted during a generation pass
#[derive(Debug, Clone)]
pub enum PassEvent {
    /// Pass started
    Started { pass: u64, input_count: usize },

    /// Asset root resolved (or not)
    RootResolved {
        asset_root: Option<String>,
        outcome: StepOutcome,
    },

    /// Assets grouped by folder
    Grouped {
        asset_count: usize,
        group_count: usize,
        outcome: StepOutcome,
    },

    /// One artifact produced
    ArtifactEmitted { name: String, outcome: StepOutcome },

    /// A previously produced artifact is no longer produced
    ArtifactRemoved { name: String },

    /// Non-fatal warning
    Warning { diagnostic: Diagnostic },

    /// Pass completed
    Completed {
        pass: u64,
        artifact_count: usize,
        recomputed_count: usize,
        reused_count: usize,
    },
}

/// Trait for receiving pass events
///
/// Implementations can be:
/// - TracingEventSink: forwards to `tracing`
/// - NoopEventSink: Silent operation
pub trait PassEventSink: Send + Sync {
    /// Handle a pass event
    fn on_event(&self, event: PassEvent);

    /// Check if this sink wants per-artifact events
    fn wants_detailed_events(&self) -> bool {
        true
    }
}

/// No-op event sink for silent operation
pub struct NoopEventSink;

impl PassEventSink for NoopEventSink {
    fn on_event(&self, _event: PassEvent) {}

    fn wants_detailed_events(&self) -> bool {
        false
    }
}

/// Forwards events to the `tracing` facade
pub struct TracingEventSink;

impl PassEventSink for TracingEventSink {
    fn on_event(&self, event: PassEvent) {
        match event {
            PassEvent::Started { pass, input_count } => {
                tracing::debug!(pass, input_count, "generation pass started")
            }
            PassEvent::RootResolved {
                asset_root,
                outcome,
            } => tracing::debug!(?asset_root, ?outcome, "asset root resolved"),
            PassEvent::Grouped {
                asset_count,
                group_count,
                outcome,
            } => tracing::debug!(asset_count, group_count, ?outcome, "assets grouped"),
            PassEvent::ArtifactEmitted { name, outcome } => {
                tracing::trace!(%name, ?outcome, "artifact emitted")
            }
            PassEvent::ArtifactRemoved { name } => tracing::debug!(%name, "artifact removed"),
            PassEvent::Warning { diagnostic } => tracing::warn!("{}", diagnostic),
            PassEvent::Completed {
                pass,
                artifact_count,
                recomputed_count,
                reused_count,
            } => tracing::info!(
                pass,
                artifact_count,
                recomputed_count,
                reused_count,
                "generation pass completed"
            ),
        }
    }
}
