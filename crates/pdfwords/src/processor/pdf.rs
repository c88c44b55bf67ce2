use std::path::{Path, PathBuf};
use std::process::Command;

use log::{debug, warn};

use crate::config::ExtractionMode;
use crate::error::ProcessError;
use crate::processor::ocr::OcrProcessor;
use crate::processor::{DocumentProcessor, ProcessedContent, TextSource};

/// Extracts text from scanned PDFs: every page is rasterised with
/// `pdftoppm` and run through Tesseract.
pub struct PdfProcessor {
    ocr: OcrProcessor,
    mode: ExtractionMode,
}

impl PdfProcessor {
    pub fn new(ocr: OcrProcessor, mode: ExtractionMode) -> Self {
        Self { ocr, mode }
    }
}

impl DocumentProcessor for PdfProcessor {
    fn process(&self, path: &Path) -> Result<ProcessedContent, ProcessError> {
        let _span = tracing::info_span!("processor.pdf", path = %path.display()).entered();

        let pdf_bytes = std::fs::read(path).map_err(|e| ProcessError::ReadDocument {
            path: path.to_path_buf(),
            source: e,
        })?;

        match lopdf::Document::load_mem(&pdf_bytes) {
            Ok(doc) => {
                let page_count = doc.get_pages().len();
                if page_count == 0 {
                    return Err(ProcessError::NoPages);
                }

                if self.mode == ExtractionMode::Auto {
                    let text = extract_text_layer(&doc);
                    if !should_use_ocr(&text) {
                        debug!("Using embedded text layer of {}", path.display());
                        return Ok(ProcessedContent {
                            text,
                            page_count,
                            source: TextSource::TextLayer,
                        });
                    }
                    debug!("Text layer of {} unusable, falling back to OCR", path.display());
                }

                let text = self.ocr_pages(&pdf_bytes, page_count)?;
                Ok(ProcessedContent {
                    text,
                    page_count,
                    source: TextSource::Ocr,
                })
            }
            Err(e) => {
                // poppler copes with more broken files than lopdf does
                warn!(
                    "lopdf failed to parse {}: {}. Counting pages with pdfinfo.",
                    path.display(),
                    e
                );
                let scratch = ScratchPdf::write(&pdf_bytes)?;
                let page_count = count_pdf_pages(scratch.path())?;
                let text = self.ocr_scratch_pages(&scratch, page_count)?;
                Ok(ProcessedContent {
                    text,
                    page_count,
                    source: TextSource::Ocr,
                })
            }
        }
    }
}

impl PdfProcessor {
    fn ocr_pages(&self, pdf_bytes: &[u8], page_count: usize) -> Result<String, ProcessError> {
        let scratch = ScratchPdf::write(pdf_bytes)?;
        self.ocr_scratch_pages(&scratch, page_count)
    }

    /// OCRs pages one by one. A failing page is skipped; the document only
    /// fails when no page at all could be read.
    fn ocr_scratch_pages(
        &self,
        scratch: &ScratchPdf,
        page_count: usize,
    ) -> Result<String, ProcessError> {
        let mut all_text = String::new();
        let mut pages_read = 0;
        let mut last_error = None;

        for page_num in 1..=page_count {
            let page_text =
                render_pdf_page_to_image(scratch.path(), page_num as u32, self.ocr.dpi())
                    .and_then(|image_data| self.ocr.process_image_bytes(&image_data));

            match page_text {
                Ok(text) => {
                    all_text.push_str(&text);
                    all_text.push('\n');
                    pages_read += 1;
                }
                Err(e) => {
                    warn!("Skipping page {} of {}: {}", page_num, page_count, e);
                    last_error = Some(e);
                }
            }
        }

        match last_error {
            Some(e) if pages_read == 0 => Err(e),
            _ => Ok(all_text),
        }
    }
}

fn extract_text_layer(doc: &lopdf::Document) -> String {
    let mut text = String::new();

    for (page_num, _) in doc.get_pages() {
        if let Ok(page_text) = doc.extract_text(&[page_num]) {
            text.push_str(&page_text);
            text.push('\n');
        }
    }

    text
}

/// Marker lopdf emits for CID fonts it cannot decode.
const IDENTITY_H_PATTERN: &str = "?Identity-H Unimplemented?";

/// Text shorter than this is accepted regardless of its composition.
const MIN_TOTAL_CHARS: usize = 50;

/// Below this share of alphanumeric characters a text layer counts as garbage.
const MIN_ALPHANUMERIC_PERCENT: usize = 10;

/// Decides whether an embedded text layer is too poor to use.
fn should_use_ocr(text: &str) -> bool {
    let trimmed = text.trim();

    if trimmed.is_empty() {
        return true;
    }

    let cleaned = trimmed
        .replace(IDENTITY_H_PATTERN, "")
        .replace(['\n', ' '], "");

    if cleaned.is_empty() {
        return true;
    }

    let total_chars = trimmed.chars().count();
    let alphanumeric_chars = trimmed.chars().filter(|c| c.is_alphanumeric()).count();

    total_chars > MIN_TOTAL_CHARS
        && alphanumeric_chars * 100 < total_chars * MIN_ALPHANUMERIC_PERCENT
}

/// A copy of the document in the temp directory for the poppler tools,
/// removed on drop.
struct ScratchPdf {
    path: PathBuf,
}

impl ScratchPdf {
    fn write(pdf_bytes: &[u8]) -> Result<Self, ProcessError> {
        let path =
            std::env::temp_dir().join(format!("pdfwords_{}.pdf", uuid::Uuid::new_v4()));
        std::fs::write(&path, pdf_bytes)
            .map_err(|e| ProcessError::PdfProcessing(format!("Failed to write temp PDF: {}", e)))?;
        Ok(Self { path })
    }

    fn path(&self) -> &Path {
        &self.path
    }
}

impl Drop for ScratchPdf {
    fn drop(&mut self) {
        let _ = std::fs::remove_file(&self.path);
    }
}

/// Page count via `pdfinfo`, for files lopdf cannot parse.
fn count_pdf_pages(pdf_path: &Path) -> Result<usize, ProcessError> {
    let output = Command::new("pdfinfo").arg(pdf_path).output().map_err(|e| {
        ProcessError::PdfProcessing(format!(
            "Failed to run pdfinfo: {}. Make sure poppler-utils is installed.",
            e
        ))
    })?;

    if !output.status.success() {
        return Err(ProcessError::PdfProcessing(format!(
            "pdfinfo failed: {}",
            String::from_utf8_lossy(&output.stderr).trim()
        )));
    }

    let stdout = String::from_utf8_lossy(&output.stdout);
    Ok(parse_page_count(&stdout).unwrap_or(1))
}

fn parse_page_count(pdfinfo_output: &str) -> Option<usize> {
    pdfinfo_output
        .lines()
        .filter_map(|line| line.strip_prefix("Pages:"))
        .find_map(|count| count.trim().parse().ok())
}

fn render_pdf_page_to_image(
    pdf_path: &Path,
    page_num: u32,
    dpi: u32,
) -> Result<Vec<u8>, ProcessError> {
    let output_prefix =
        std::env::temp_dir().join(format!("pdfwords_page_{}", uuid::Uuid::new_v4()));
    let page = page_num.to_string();

    let output = Command::new("pdftoppm")
        .args(["-png", "-singlefile", "-r", &dpi.to_string(), "-f", &page, "-l", &page])
        .arg(pdf_path)
        .arg(&output_prefix)
        .output()
        .map_err(|e| {
            ProcessError::PdfProcessing(format!(
                "Failed to run pdftoppm: {}. Make sure poppler-utils is installed.",
                e
            ))
        })?;

    if !output.status.success() {
        return Err(ProcessError::PdfProcessing(format!(
            "pdftoppm failed: {}",
            String::from_utf8_lossy(&output.stderr).trim()
        )));
    }

    // -singlefile drops the page number suffix
    let image_path = output_prefix.with_extension("png");
    let image_data = std::fs::read(&image_path).map_err(|e| {
        ProcessError::PdfProcessing(format!("Failed to read rendered image: {}", e))
    })?;
    let _ = std::fs::remove_file(&image_path);

    Ok(image_data)
}
