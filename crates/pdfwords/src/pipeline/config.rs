use std::path::PathBuf;

use crate::config::{Config, ExtractionMode};
use crate::error::ConfigError;
use crate::processor::ExtensionFilter;

/// Settings for one run, resolved from the config file and CLI overrides.
pub struct PipelineConfig {
    pub input_directory: PathBuf,
    pub follow_links: bool,
    pub filter: ExtensionFilter,
    pub ocr_languages: Vec<String>,
    pub ocr_dpi: u32,
    pub ocr_mode: ExtractionMode,
    pub tessdata_dir: Option<PathBuf>,
}

impl PipelineConfig {
    pub fn from_config(config: &Config) -> Result<Self, ConfigError> {
        let input_directory = config
            .input_directory
            .as_ref()
            .map(PathBuf::from)
            .ok_or(ConfigError::MissingInputDirectory)?;

        Ok(Self {
            input_directory,
            follow_links: config.follow_links,
            filter: ExtensionFilter::new(&config.extensions, config.case_insensitive_extensions),
            ocr_languages: config.ocr.languages.clone(),
            ocr_dpi: config.ocr.dpi,
            ocr_mode: config.ocr.mode,
            tessdata_dir: config.ocr.tessdata_dir.as_ref().map(PathBuf::from),
        })
    }
}
