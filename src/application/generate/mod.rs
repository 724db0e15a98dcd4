//! Generate Use Case Module
//!
//! Turns a project directory (or a host-provided file list) into generated
//! artifacts on disk, keeping a manifest so unchanged files are not
//! rewritten and vanished groups are cleaned up.

mod options;
mod result;
mod use_case;

pub use options::GenerateOptions;
pub use result::GenerateReport;
pub use use_case::GenerateUseCase;
