use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    pub version: String,
    #[serde(default)]
    pub input_directory: Option<String>,
    #[serde(default)]
    pub follow_links: bool,
    #[serde(default = "default_extensions")]
    pub extensions: Vec<String>,
    #[serde(default)]
    pub case_insensitive_extensions: bool,
    #[serde(default)]
    pub ocr: OcrConfig,
    #[serde(default)]
    pub report: ReportConfig,
}

fn default_extensions() -> Vec<String> {
    vec!["pdf".to_string()]
}

impl Default for Config {
    fn default() -> Self {
        Self {
            version: "1.0".to_string(),
            input_directory: None,
            follow_links: false,
            extensions: default_extensions(),
            case_insensitive_extensions: false,
            ocr: OcrConfig::default(),
            report: ReportConfig::default(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OcrConfig {
    #[serde(default = "default_languages")]
    pub languages: Vec<String>,
    #[serde(default = "default_dpi")]
    pub dpi: u32,
    #[serde(default)]
    pub mode: ExtractionMode,
    /// Overrides Tesseract's `tessdata` location.
    #[serde(default)]
    pub tessdata_dir: Option<String>,
}

fn default_languages() -> Vec<String> {
    vec!["eng".to_string()]
}

fn default_dpi() -> u32 {
    300
}

impl Default for OcrConfig {
    fn default() -> Self {
        Self {
            languages: default_languages(),
            dpi: default_dpi(),
            mode: ExtractionMode::default(),
            tessdata_dir: None,
        }
    }
}

/// How text is pulled out of a PDF.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ExtractionMode {
    /// Always rasterise and OCR every page.
    #[default]
    Ocr,
    /// Use the embedded text layer when it looks usable, OCR otherwise.
    Auto,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ReportConfig {
    #[serde(default)]
    pub format: ReportFormat,
    /// Keep only the first N ranked words.
    #[serde(default)]
    pub limit: Option<usize>,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ReportFormat {
    #[default]
    Text,
    Json,
}
