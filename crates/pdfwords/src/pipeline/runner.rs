use std::path::Path;

use tracing::{debug, info, info_span};

use crate::processor::{DocumentProcessor, OcrProcessor, PdfProcessor};
use crate::scanner::{DirectoryScanner, ScanEntry};
use crate::stats::{rank, tokenize, Aggregator, CorpusStats, RankedEntry};

use super::config::PipelineConfig;
use super::error::{Diagnostic, PipelineError};
use super::progress::{ProgressEvent, ProgressReporter};

/// Everything a finished run produced.
#[derive(Debug)]
pub struct RunOutcome {
    pub stats: CorpusStats,
    pub diagnostics: Vec<Diagnostic>,
}

impl RunOutcome {
    pub fn ranked(&self) -> Vec<RankedEntry> {
        rank(&self.stats)
    }
}

/// Walks the input tree once, extracting and counting every matching
/// document in traversal order.
pub struct Pipeline<P> {
    config: PipelineConfig,
    processor: P,
}

impl Pipeline<PdfProcessor> {
    /// Production constructor: OCR through Tesseract and poppler.
    pub fn from_config(config: PipelineConfig) -> Self {
        let ocr = OcrProcessor::new(&config.ocr_languages, config.ocr_dpi)
            .with_tessdata_dir(config.tessdata_dir.as_ref());
        let processor = PdfProcessor::new(ocr, config.ocr_mode);
        Self::new(config, processor)
    }
}

impl<P: DocumentProcessor> Pipeline<P> {
    pub fn new(config: PipelineConfig, processor: P) -> Self {
        Self { config, processor }
    }

    pub fn run(&self, progress: &dyn ProgressReporter) -> Result<RunOutcome, PipelineError> {
        let root = &self.config.input_directory;
        let _span = info_span!("pipeline", root = %root.display()).entered();

        let entries = DirectoryScanner::new(root)
            .follow_links(self.config.follow_links)
            .entries()?;

        let mut aggregator = Aggregator::new();
        let mut diagnostics = Vec::new();

        for entry in entries {
            match entry {
                ScanEntry::Directory { .. } => aggregator.record_directory(),
                ScanEntry::File { path, name } => {
                    aggregator.record_file();

                    if !self.config.filter.matches(&name) {
                        progress.report(ProgressEvent::Skipped { path: &path });
                        continue;
                    }

                    if let Some(diagnostic) = self.process_document(&path, &mut aggregator, progress)
                    {
                        diagnostics.push(diagnostic);
                    }
                }
                ScanEntry::Error { path, message } => {
                    let path = path.unwrap_or_else(|| root.clone());
                    diagnostics.push(Diagnostic::scan(path, message));
                }
            }
        }

        let stats = aggregator.into_stats();
        info!(
            "Scanned {} files in {} directories: {} documents processed, {} failed, {} distinct words",
            stats.total_files_seen,
            stats.total_directories_seen,
            stats.documents_processed,
            stats.documents_failed,
            stats.distinct_words()
        );

        Ok(RunOutcome { stats, diagnostics })
    }

    /// Extracts one document and records its words. A failed extraction
    /// records nothing and comes back as a diagnostic.
    fn process_document(
        &self,
        path: &Path,
        aggregator: &mut Aggregator,
        progress: &dyn ProgressReporter,
    ) -> Option<Diagnostic> {
        progress.report(ProgressEvent::DocumentStarted { path });

        let processed = match self.processor.process(path) {
            Ok(processed) => processed,
            Err(e) => {
                progress.report(ProgressEvent::DocumentFailed { path, error: &e });
                aggregator.record_failure();
                return Some(Diagnostic::extraction(path.to_path_buf(), e.to_string()));
            }
        };

        let tokens = tokenize(&processed.text);
        debug!(
            "{}: {} pages, {} tokens",
            path.display(),
            processed.page_count,
            tokens.len()
        );

        aggregator.record_document(&tokens);

        progress.report(ProgressEvent::DocumentCompleted {
            path,
            tokens: tokens.len(),
            source: processed.source,
        });
        None
    }
}
