use std::path::Path;

use log::{debug, info, warn};

use crate::error::ProcessError;
use crate::processor::TextSource;

/// Events emitted by the pipeline while it walks the corpus.
pub enum ProgressEvent<'a> {
    DocumentStarted {
        path: &'a Path,
    },
    DocumentCompleted {
        path: &'a Path,
        tokens: usize,
        source: TextSource,
    },
    DocumentFailed {
        path: &'a Path,
        error: &'a ProcessError,
    },
    /// A visited file that is not a document.
    Skipped {
        path: &'a Path,
    },
}

pub trait ProgressReporter {
    fn report(&self, event: ProgressEvent<'_>);
}

/// No-op reporter for unit tests.
pub struct NoopProgress;

impl ProgressReporter for NoopProgress {
    fn report(&self, _event: ProgressEvent<'_>) {}
}

/// Forwards events to the `log` facade.
pub struct LogProgress;

impl ProgressReporter for LogProgress {
    fn report(&self, event: ProgressEvent<'_>) {
        match event {
            ProgressEvent::DocumentStarted { path } => {
                info!("Processing {}", path.display());
            }
            ProgressEvent::DocumentCompleted {
                path,
                tokens,
                source,
            } => {
                debug!(
                    "Extracted {} words from {} ({:?})",
                    tokens,
                    path.display(),
                    source
                );
            }
            ProgressEvent::DocumentFailed { path, error } => {
                let name = path
                    .file_name()
                    .map(|n| n.to_string_lossy())
                    .unwrap_or_else(|| path.to_string_lossy());
                warn!("Error processing file {}: {}", name, error);
            }
            ProgressEvent::Skipped { path } => {
                debug!("Skipping {}", path.display());
            }
        }
    }
}
