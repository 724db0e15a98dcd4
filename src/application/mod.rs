//! Application Layer
//!
//! Use cases that orchestrate the business flow.
//! This layer:
//! - Depends on Domain layer (entities, services, ports)
//! - Does NOT contain business rules (those are in Domain)
//! - Coordinates between Infrastructure and Domain
//!
//! ## Use Cases
//!
//! - `IncrementalGenerator` - Runs memoized generation passes in memory
//! - `GenerateUseCase` - Runs a pass against a project directory and
//!   keeps the output directory and manifest in sync

pub mod cancellation;
pub mod generate;
pub mod incremental;

pub use cancellation::CancellationToken;
pub use generate::{GenerateOptions, GenerateReport, GenerateUseCase};
pub use incremental::{
    generate, EmittedArtifact, Evaluated, IncrementalGenerator, MemoTable, PassOutput, PassStats,
};
