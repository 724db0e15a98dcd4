//! Artifact Emitters
//!
//! Concrete implementations of the ArtifactEmitter port.

mod csharp;
mod writer;

pub use csharp::CSharpEmitter;
pub use writer::IndentedWriter;
