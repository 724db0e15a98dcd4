//! Domain Value Objects
//!
//! Immutable value types that represent domain concepts.

mod asset_kind;
mod config_warning;
mod diagnostic;
mod hash;
pub mod path;

pub use asset_kind::{AssetKind, LoadPolicy};
pub use config_warning::ConfigWarning;
pub use diagnostic::{Diagnostic, DiagnosticCode};
pub use hash::{ContentHash, Fingerprint, FingerprintHasher, StableHash};
