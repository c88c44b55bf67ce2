use std::path::PathBuf;

use clap::{ArgAction, Parser, ValueEnum};

use pdfwords::config::{Config, ExtractionMode, ReportFormat};

#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum CliMode {
    /// Rasterise and OCR every page
    Ocr,
    /// Use the PDF text layer when it is usable, OCR otherwise
    Auto,
}

impl From<CliMode> for ExtractionMode {
    fn from(mode: CliMode) -> Self {
        match mode {
            CliMode::Ocr => ExtractionMode::Ocr,
            CliMode::Auto => ExtractionMode::Auto,
        }
    }
}

#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum CliFormat {
    Text,
    Json,
}

impl From<CliFormat> for ReportFormat {
    fn from(format: CliFormat) -> Self {
        match format {
            CliFormat::Text => ReportFormat::Text,
            CliFormat::Json => ReportFormat::Json,
        }
    }
}

#[derive(Debug, Parser)]
#[command(name = "pdfwords", version)]
#[command(about = "OCR every PDF below a directory and rank the words found", long_about = None)]
pub struct Cli {
    /// Directory to scan recursively (overrides input_directory)
    pub directory: Option<PathBuf>,

    /// Config file (default: <config dir>/pdfwords/config.json if present)
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Tesseract language, repeatable (e.g. -l eng -l deu)
    #[arg(short = 'l', long = "lang")]
    pub languages: Vec<String>,

    /// Rasterisation resolution for OCR
    #[arg(long)]
    pub dpi: Option<u32>,

    /// Text extraction mode
    #[arg(short, long, value_enum)]
    pub mode: Option<CliMode>,

    /// Directory holding Tesseract traineddata files
    #[arg(long)]
    pub tessdata: Option<PathBuf>,

    /// File extension to treat as a document, repeatable (default: pdf)
    #[arg(short = 'e', long = "ext")]
    pub extensions: Vec<String>,

    /// Match extensions case-insensitively
    #[arg(short = 'i', long)]
    pub ignore_case: bool,

    /// Descend into symlinked directories
    #[arg(long)]
    pub follow_links: bool,

    /// Report format
    #[arg(short, long, value_enum)]
    pub format: Option<CliFormat>,

    /// Only print the first N ranked words
    #[arg(short = 'n', long)]
    pub limit: Option<usize>,

    /// More log output (-v debug, -vv trace)
    #[arg(short, long, action = ArgAction::Count)]
    pub verbose: u8,

    /// Only log warnings and errors
    #[arg(short, long, conflicts_with = "verbose")]
    pub quiet: bool,
}

impl Cli {
    /// Layers command-line values over the loaded config.
    pub fn apply(&self, config: &mut Config) {
        if let Some(directory) = &self.directory {
            config.input_directory = Some(directory.to_string_lossy().into_owned());
        }
        if !self.languages.is_empty() {
            config.ocr.languages = self.languages.clone();
        }
        if let Some(dpi) = self.dpi {
            config.ocr.dpi = dpi;
        }
        if let Some(mode) = self.mode {
            config.ocr.mode = mode.into();
        }
        if let Some(tessdata) = &self.tessdata {
            config.ocr.tessdata_dir = Some(tessdata.to_string_lossy().into_owned());
        }
        if !self.extensions.is_empty() {
            config.extensions = self.extensions.clone();
        }
        if self.ignore_case {
            config.case_insensitive_extensions = true;
        }
        if self.follow_links {
            config.follow_links = true;
        }
        if let Some(format) = self.format {
            config.report.format = format.into();
        }
        if self.limit.is_some() {
            config.report.limit = self.limit;
        }
    }

    /// Default `EnvFilter` directive when `RUST_LOG` is unset.
    pub fn log_level(&self) -> &'static str {
        if self.quiet {
            return "warn";
        }
        match self.verbose {
            0 => "info",
            1 => "debug",
            _ => "trace",
        }
    }
}
