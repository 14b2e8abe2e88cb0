//! Settings loading from disk.

use std::fs;
use std::path::Path;

use thiserror::Error;

use crate::config::schema::RegistrySettings;
use crate::config::validation::{validate_settings, ValidationError};

/// Error type for settings loading.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Parse error: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("Validation failed: {}", join(.0))]
    Validation(Vec<ValidationError>),
}

fn join(errors: &[ValidationError]) -> String {
    errors
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(", ")
}

/// Parse and validate settings from TOML text.
pub fn parse_settings(content: &str) -> Result<RegistrySettings, ConfigError> {
    let settings: RegistrySettings = toml::from_str(content)?;
    validate_settings(&settings).map_err(ConfigError::Validation)?;
    Ok(settings)
}

/// Load and validate settings from a TOML file.
///
/// A relative `routes.path` is taken relative to the settings file.
pub fn load_settings(path: &Path) -> Result<RegistrySettings, ConfigError> {
    let content = fs::read_to_string(path)?;
    let mut settings = parse_settings(&content)?;
    if let Some(dir) = path.parent() {
        settings.routes.resolve_path(dir);
    }

    tracing::debug!(
        settings = %path.display(),
        routes = %settings.routes.path.display(),
        "Settings loaded"
    );
    Ok(settings)
}
