use thiserror::Error;

use crate::config::SkyConfig;
use crate::defaults::DEFAULT_CONFIG_RON;
use crate::validator::{validate_config, ValidationError};

#[derive(Debug, Error)]
pub enum LoadError {
    #[error("Failed to parse sky config RON: {0}")]
    ParseError(String),
    #[error("Failed to read sky config {path}: {message}")]
    ReadError { path: String, message: String },
    #[error("Sky config invalid: {}", format_errors(.0))]
    Invalid(Vec<ValidationError>),
}

fn format_errors(errors: &[ValidationError]) -> String {
    errors
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("; ")
}

/// Parse a sky config from a RON string without validating it.
pub fn load_config_from_str(ron_str: &str) -> Result<SkyConfig, LoadError> {
    let options = ron::Options::default();
    options
        .from_str(ron_str)
        .map_err(|e| LoadError::ParseError(e.to_string()))
}

/// Parse and validate a sky config.
pub fn load_validated_config(ron_str: &str) -> Result<SkyConfig, LoadError> {
    let config = load_config_from_str(ron_str)?;
    if let Err(errors) = validate_config(&config) {
        for e in &errors {
            log::warn!("Sky config: {e}");
        }
        return Err(LoadError::Invalid(errors));
    }
    Ok(config)
}

/// Read, parse and validate a sky config file.
pub fn load_config_file(path: &std::path::Path) -> Result<SkyConfig, LoadError> {
    let text = std::fs::read_to_string(path).map_err(|e| LoadError::ReadError {
        path: path.display().to_string(),
        message: e.to_string(),
    })?;
    load_validated_config(&text)
}

/// The shipped default config.
pub fn load_default_config() -> Result<SkyConfig, LoadError> {
    load_validated_config(DEFAULT_CONFIG_RON)
}
