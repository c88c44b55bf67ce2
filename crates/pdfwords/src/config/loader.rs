use std::path::{Path, PathBuf};

use log::debug;

use crate::config::schema::Config;
use crate::error::ConfigError;

const SCHEMA_JSON: &str = include_str!("../../../../schema/config-v1.json");

const MIN_DPI: u32 = 72;
const MAX_DPI: u32 = 1200;

pub fn load_config<P: AsRef<Path>>(path: P) -> Result<Config, ConfigError> {
    let path = path.as_ref();
    let content = std::fs::read_to_string(path).map_err(|e| ConfigError::ReadFile {
        path: path.to_path_buf(),
        source: e,
    })?;

    load_config_from_str(&content)
}

pub fn load_config_from_str(content: &str) -> Result<Config, ConfigError> {
    let json_value: serde_json::Value = serde_json::from_str(content)?;

    validate_schema(&json_value)?;

    let config: Config = serde_json::from_value(json_value)?;

    validate_config(&config)?;

    Ok(config)
}

/// `$CONFIG_DIR/pdfwords/config.json`, when the platform has a config dir.
pub fn default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join("pdfwords").join("config.json"))
}

/// Loads the explicit config file if one was given, otherwise the default
/// location if a file exists there, otherwise built-in defaults.
pub fn resolve_config(explicit: Option<&Path>) -> Result<Config, ConfigError> {
    if let Some(path) = explicit {
        debug!("Loading config from {}", path.display());
        return load_config(path);
    }

    match default_config_path() {
        Some(path) if path.is_file() => {
            debug!("Loading config from {}", path.display());
            load_config(&path)
        }
        _ => {
            debug!("No config file found, using defaults");
            Ok(Config::default())
        }
    }
}

fn validate_schema(json_value: &serde_json::Value) -> Result<(), ConfigError> {
    let schema: serde_json::Value =
        serde_json::from_str(SCHEMA_JSON).map_err(|e| ConfigError::Validation {
            message: format!("Invalid embedded schema JSON: {}", e),
        })?;

    let validator = jsonschema::validator_for(&schema).map_err(|e| ConfigError::Validation {
        message: format!("Failed to compile JSON schema: {}", e),
    })?;

    let error_messages: Vec<String> = validator
        .iter_errors(json_value)
        .map(|e| e.to_string())
        .collect();

    if !error_messages.is_empty() {
        return Err(ConfigError::SchemaValidation {
            errors: error_messages.join("; "),
        });
    }

    Ok(())
}

pub fn validate_config(config: &Config) -> Result<(), ConfigError> {
    if config.version != "1.0" {
        return Err(ConfigError::Validation {
            message: format!("Unsupported config version: {}", config.version),
        });
    }

    if !(MIN_DPI..=MAX_DPI).contains(&config.ocr.dpi) {
        return Err(ConfigError::Validation {
            message: format!(
                "OCR dpi must be between {} and {}, got {}",
                MIN_DPI, MAX_DPI, config.ocr.dpi
            ),
        });
    }

    for extension in &config.extensions {
        if extension.is_empty() {
            return Err(ConfigError::InvalidExtension {
                extension: extension.clone(),
                reason: "Extension must not be empty".to_string(),
            });
        }
        if extension.contains('.') {
            return Err(ConfigError::InvalidExtension {
                extension: extension.clone(),
                reason: "Extension must be given without dots, e.g. \"pdf\"".to_string(),
            });
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::schema::{ExtractionMode, ReportFormat};

    #[test]
    fn test_load_minimal_config() {
        let config = load_config_from_str(r#"{ "version": "1.0" }"#).unwrap();

        assert_eq!(config.version, "1.0");
        assert!(config.input_directory.is_none());
        assert_eq!(config.extensions, ["pdf"]);
        assert!(!config.follow_links);
        assert!(!config.case_insensitive_extensions);
        assert_eq!(config.ocr.languages, ["eng"]);
        assert_eq!(config.ocr.dpi, 300);
        assert_eq!(config.ocr.mode, ExtractionMode::Ocr);
        assert_eq!(config.report.format, ReportFormat::Text);
        assert!(config.report.limit.is_none());
    }

    #[test]
    fn test_load_full_config() {
        let config_json = r#"
        {
            "version": "1.0",
            "input_directory": "/scans",
            "follow_links": true,
            "extensions": ["pdf", "PDF"],
            "case_insensitive_extensions": true,
            "ocr": {
                "languages": ["eng", "deu"],
                "dpi": 400,
                "mode": "auto",
                "tessdata_dir": "/usr/share/tessdata"
            },
            "report": { "format": "json", "limit": 25 }
        }
        "#;

        let config = load_config_from_str(config_json).unwrap();
        assert_eq!(config.input_directory.as_deref(), Some("/scans"));
        assert!(config.follow_links);
        assert_eq!(config.extensions, ["pdf", "PDF"]);
        assert!(config.case_insensitive_extensions);
        assert_eq!(config.ocr.languages, ["eng", "deu"]);
        assert_eq!(config.ocr.dpi, 400);
        assert_eq!(config.ocr.mode, ExtractionMode::Auto);
        assert_eq!(config.ocr.tessdata_dir.as_deref(), Some("/usr/share/tessdata"));
        assert_eq!(config.report.format, ReportFormat::Json);
        assert_eq!(config.report.limit, Some(25));
    }

    #[test]
    fn test_invalid_version() {
        let result = load_config_from_str(r#"{ "version": "2.0" }"#);
        match result {
            Err(ConfigError::Validation { message }) => {
                assert!(message.contains("Unsupported config version"));
            }
            other => panic!("Expected Validation error, got {:?}", other),
        }
    }

    #[test]
    fn test_missing_version_fails_schema() {
        let result = load_config_from_str(r#"{ "input_directory": "/scans" }"#);
        assert!(matches!(result, Err(ConfigError::SchemaValidation { .. })));
    }

    #[test]
    fn test_unknown_field_fails_schema() {
        let result = load_config_from_str(r#"{ "version": "1.0", "workers": 4 }"#);
        assert!(matches!(result, Err(ConfigError::SchemaValidation { .. })));
    }

    #[test]
    fn test_unknown_mode_fails_schema() {
        let result = load_config_from_str(r#"{ "version": "1.0", "ocr": { "mode": "magic" } }"#);
        assert!(matches!(result, Err(ConfigError::SchemaValidation { .. })));
    }

    #[test]
    fn test_dpi_out_of_range() {
        let result = load_config_from_str(r#"{ "version": "1.0", "ocr": { "dpi": 10 } }"#);
        match result {
            Err(ConfigError::Validation { message }) => assert!(message.contains("dpi")),
            other => panic!("Expected Validation error, got {:?}", other),
        }
    }

    #[test]
    fn test_extension_with_dot_rejected() {
        let result = load_config_from_str(r#"{ "version": "1.0", "extensions": [".pdf"] }"#);
        assert!(matches!(
            result,
            Err(ConfigError::InvalidExtension { ref extension, .. }) if extension == ".pdf"
        ));
    }

    #[test]
    fn test_empty_extension_rejected() {
        let result = load_config_from_str(r#"{ "version": "1.0", "extensions": [""] }"#);
        assert!(matches!(result, Err(ConfigError::InvalidExtension { .. })));
    }

    #[test]
    fn test_invalid_json() {
        let result = load_config_from_str("{ not json");
        assert!(matches!(result, Err(ConfigError::ParseJson(_))));
    }

    #[test]
    fn test_load_config_missing_file() {
        let result = load_config("/nonexistent/pdfwords/config.json");
        assert!(matches!(result, Err(ConfigError::ReadFile { .. })));
    }

    #[test]
    fn test_resolve_explicit_file() {
        let temp_dir = tempfile::TempDir::new().unwrap();
        let path = temp_dir.path().join("config.json");
        std::fs::write(&path, r#"{ "version": "1.0", "ocr": { "dpi": 150 } }"#).unwrap();

        let config = resolve_config(Some(path.as_path())).unwrap();
        assert_eq!(config.ocr.dpi, 150);
    }

    #[test]
    fn test_default_config_is_valid() {
        assert!(validate_config(&Config::default()).is_ok());
    }
}
