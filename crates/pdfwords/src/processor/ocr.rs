use std::io::Cursor;
use std::path::{Path, PathBuf};

use crate::error::ProcessError;

/// Tesseract settings used for every page of every document in a run.
#[derive(Debug, Clone)]
pub struct OcrProcessor {
    languages: String,
    dpi: u32,
    tessdata_dir: Option<PathBuf>,
}

impl OcrProcessor {
    pub fn new(languages: &[String], dpi: u32) -> Self {
        let lang_str = if languages.is_empty() {
            "eng".to_string()
        } else {
            languages.join("+")
        };

        Self {
            languages: lang_str,
            dpi,
            tessdata_dir: None,
        }
    }

    /// Points Tesseract at a specific `tessdata` directory instead of its
    /// compiled-in default.
    pub fn with_tessdata_dir<P: AsRef<Path>>(mut self, dir: Option<P>) -> Self {
        self.tessdata_dir = dir.map(|d| d.as_ref().to_path_buf());
        self
    }

    pub fn dpi(&self) -> u32 {
        self.dpi
    }

    pub fn languages(&self) -> &str {
        &self.languages
    }

    pub fn process_image_bytes(&self, image_data: &[u8]) -> Result<String, ProcessError> {
        let _span = tracing::info_span!("processor.ocr").entered();

        let img = image::load_from_memory(image_data)
            .map_err(|e| ProcessError::OcrFailed(format!("Failed to load image: {}", e)))?;

        // leptess only reads encoded images; normalise whatever we got to PNG
        let mut png_data = Vec::new();
        let mut cursor = Cursor::new(&mut png_data);
        img.write_to(&mut cursor, image::ImageFormat::Png)
            .map_err(|e| ProcessError::OcrFailed(format!("Failed to convert image: {}", e)))?;

        let tessdata = self
            .tessdata_dir
            .as_ref()
            .map(|p| p.to_string_lossy().into_owned());

        let mut lt = leptess::LepTess::new(tessdata.as_deref(), &self.languages).map_err(
            |e| ProcessError::OcrFailed(format!("Failed to initialize Tesseract: {}", e)),
        )?;

        lt.set_image_from_mem(&png_data)
            .map_err(|e| ProcessError::OcrFailed(format!("Failed to set image for OCR: {}", e)))?;
        lt.set_source_resolution(self.dpi as i32);

        lt.get_utf8_text()
            .map_err(|e| ProcessError::OcrFailed(format!("OCR failed: {}", e)))
    }
}
