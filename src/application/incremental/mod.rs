//! Incremental generation
//!
//! - `MemoTable` - per-node cache keyed by structural input equality
//! - `IncrementalGenerator` - pass driver holding the tables across passes
//! - `PassOutput` - artifacts, removals, diagnostics and counters of a pass
//!
//! ## Usage
//!
//! ```ignore
//! let mut generator = IncrementalGenerator::new(settings, emitter);
//! let output = generator.run(&files, "MyMod", &CancellationToken::new())?;
//! for artifact in output.changed() { /* hand to the host */ }
//! ```

mod generator;
mod memo;
mod output;

use std::sync::Arc;

pub use generator::IncrementalGenerator;
pub use memo::{Evaluated, MemoTable};
pub use output::{EmittedArtifact, PassOutput, PassStats};

use crate::application::cancellation::CancellationToken;
use crate::config::GeneratorSection;
use crate::domain::ports::ArtifactEmitter;
use crate::error::GenerateResult;

/// Run a single non-incremental pass.
pub fn generate<S: AsRef<str>>(
    files: &[S],
    assembly_name: &str,
    settings: &GeneratorSection,
    emitter: Arc<dyn ArtifactEmitter>,
) -> GenerateResult<PassOutput> {
    IncrementalGenerator::new(settings.clone(), emitter).run(
        files,
        assembly_name,
        &CancellationToken::new(),
    )
}
