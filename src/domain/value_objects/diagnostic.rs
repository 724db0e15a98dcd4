//! Build diagnostic value object.

use std::fmt;

/// Stable identifiers for the warnings a pass can report
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DiagnosticCode {
    /// No marker file among the inputs
    MissingAssetRoot,
    /// More than one marker file, one was picked
    MultipleAssetRoots,
    /// Recognized asset outside the asset root (opt-in)
    OutsideAssetRoot,
}

impl DiagnosticCode {
    pub fn id(self) -> &'static str {
        match self {
            DiagnosticCode::MissingAssetRoot => "AG0001",
            DiagnosticCode::MultipleAssetRoots => "AG0002",
            DiagnosticCode::OutsideAssetRoot => "AG0003",
        }
    }
}

/// Non-fatal warning surfaced to the host build.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Diagnostic {
    pub code: DiagnosticCode,
    pub message: String,
    /// Input path the warning is about, if any
    pub path: Option<String>,
}

impl Diagnostic {
    pub fn new(code: DiagnosticCode, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
            path: None,
        }
    }

    pub fn with_path(mut self, path: impl Into<String>) -> Self {
        self.path = Some(path.into());
        self
    }
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.path {
            Some(path) => write!(f, "warning {}: {} ({})", self.code.id(), self.message, path),
            None => write!(f, "warning {}: {}", self.code.id(), self.message),
        }
    }
}
