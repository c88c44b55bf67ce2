//! Test harness for isolated pipeline runs.
//!
//! Documents are plain files whose contents play the part of the OCR output,
//! so the whole pipeline runs without Tesseract or poppler installed.

#![allow(dead_code)]

use std::path::{Path, PathBuf};

use assert_fs::prelude::*;
use assert_fs::TempDir;

use pdfwords::config::Config;
use pdfwords::error::ProcessError;
use pdfwords::pipeline::{NoopProgress, Pipeline, PipelineConfig, RunOutcome};
use pdfwords::processor::{DocumentProcessor, ExtensionFilter, ProcessedContent, TextSource};

/// Documents starting with this marker fail extraction.
pub const FAILURE_MARKER: &str = "%CORRUPT%";

/// Returns the file contents as extracted text.
pub struct TextLayerStub;

impl DocumentProcessor for TextLayerStub {
    fn process(&self, path: &Path) -> Result<ProcessedContent, ProcessError> {
        let text = std::fs::read_to_string(path).map_err(|e| ProcessError::ReadDocument {
            path: path.to_path_buf(),
            source: e,
        })?;

        if text.starts_with(FAILURE_MARKER) {
            return Err(ProcessError::PdfProcessing(
                "invalid cross-reference table".to_string(),
            ));
        }

        Ok(ProcessedContent {
            text,
            page_count: 1,
            source: TextSource::Ocr,
        })
    }
}

/// Test harness providing an isolated document tree.
pub struct TestHarness {
    /// Root of the tree handed to the pipeline.
    pub root: TempDir,
}

impl TestHarness {
    pub fn new() -> Self {
        Self {
            root: TempDir::new().expect("Failed to create temp directory"),
        }
    }

    pub fn root_path(&self) -> &Path {
        self.root.path()
    }

    /// Writes a document (or any file) relative to the root, creating parent
    /// directories as needed.
    pub fn write(&self, relative_path: &str, content: &str) -> PathBuf {
        let child = self.root.child(relative_path);
        child.write_str(content).expect("Failed to write file");
        child.path().to_path_buf()
    }

    pub fn mkdir(&self, relative_path: &str) -> PathBuf {
        let child = self.root.child(relative_path);
        child.create_dir_all().expect("Failed to create directory");
        child.path().to_path_buf()
    }

    pub fn pipeline_config(&self) -> PipelineConfig {
        let mut config = Config::default();
        config.input_directory = Some(self.root_path().to_string_lossy().into_owned());
        PipelineConfig::from_config(&config).expect("Failed to build pipeline config")
    }

    /// Runs the pipeline with default settings and the stub processor.
    pub fn run(&self) -> RunOutcome {
        self.run_with(self.pipeline_config())
    }

    pub fn run_with(&self, config: PipelineConfig) -> RunOutcome {
        Pipeline::new(config, TextLayerStub)
            .run(&NoopProgress)
            .expect("Pipeline run failed")
    }

    pub fn run_with_filter(&self, filter: ExtensionFilter) -> RunOutcome {
        let mut config = self.pipeline_config();
        config.filter = filter;
        self.run_with(config)
    }
}
