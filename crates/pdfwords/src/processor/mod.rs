pub mod filter;
pub mod ocr;
pub mod pdf;

use std::path::Path;

use serde::Serialize;

use crate::error::ProcessError;

pub use filter::ExtensionFilter;
pub use ocr::OcrProcessor;
pub use pdf::PdfProcessor;

/// Where a document's text came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum TextSource {
    /// Pages were rasterised and run through the OCR engine.
    Ocr,
    /// The PDF's embedded text layer was usable as-is.
    TextLayer,
}

pub struct ProcessedContent {
    pub text: String,
    pub page_count: usize,
    pub source: TextSource,
}

/// Turns one document on disk into raw text.
pub trait DocumentProcessor {
    fn process(&self, path: &Path) -> Result<ProcessedContent, ProcessError>;
}

impl<P: DocumentProcessor + ?Sized> DocumentProcessor for Box<P> {
    fn process(&self, path: &Path) -> Result<ProcessedContent, ProcessError> {
        (**self).process(path)
    }
}
