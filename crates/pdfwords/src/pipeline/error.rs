use std::fmt;
use std::path::PathBuf;

use serde::Serialize;
use thiserror::Error;

/// Failures that stop a run before any statistics exist.
#[derive(Error, Debug)]
pub enum PipelineError {
    #[error("Scan failed: {0}")]
    Scan(#[from] crate::error::ScanError),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum DiagnosticKind {
    /// A matching document could not be extracted.
    Extraction,
    /// Part of the tree could not be walked.
    Scan,
}

/// A non-fatal problem met during a run, naming the offending file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Diagnostic {
    pub kind: DiagnosticKind,
    pub path: PathBuf,
    pub message: String,
}

impl Diagnostic {
    pub fn extraction(path: PathBuf, message: impl Into<String>) -> Self {
        Self {
            kind: DiagnosticKind::Extraction,
            path,
            message: message.into(),
        }
    }

    pub fn scan(path: PathBuf, message: impl Into<String>) -> Self {
        Self {
            kind: DiagnosticKind::Scan,
            path,
            message: message.into(),
        }
    }

    pub fn file_name(&self) -> String {
        self.path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| self.path.display().to_string())
    }
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.kind {
            DiagnosticKind::Extraction => {
                write!(f, "Error processing file {}: {}", self.file_name(), self.message)
            }
            DiagnosticKind::Scan => {
                write!(f, "Error scanning {}: {}", self.path.display(), self.message)
            }
        }
    }
}
