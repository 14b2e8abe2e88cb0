//! Settings validation.
//!
//! # Responsibilities
//! - Semantic validation (serde handles syntactic)
//! - Check the route source is usable (path set, format known)
//! - Validate the log level
//!
//! # Design Decisions
//! - Returns all validation errors, not just the first
//! - Validation is a pure function: RegistrySettings → Result<(), Vec<ValidationError>>

use std::fmt;

use crate::config::schema::RegistrySettings;

/// Accepted log levels.
pub const LOG_LEVELS: [&str; 5] = ["trace", "debug", "info", "warn", "error"];

/// A single semantic problem in the settings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// `routes.path` is empty.
    EmptyRoutePath,
    /// No `routes.format` and the extension does not imply one.
    UnknownRouteFormat(String),
    /// `observability.log_level` is not a known level.
    InvalidLogLevel(String),
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ValidationError::EmptyRoutePath => write!(f, "routes.path must not be empty"),
            ValidationError::UnknownRouteFormat(path) => {
                write!(f, "cannot infer route format from '{}'; set routes.format", path)
            }
            ValidationError::InvalidLogLevel(level) => {
                write!(f, "invalid log level '{}'", level)
            }
        }
    }
}

/// Validate settings, collecting every error.
pub fn validate_settings(settings: &RegistrySettings) -> Result<(), Vec<ValidationError>> {
    let mut errors = Vec::new();

    if settings.routes.path.as_os_str().is_empty() {
        errors.push(ValidationError::EmptyRoutePath);
    } else if settings.routes.resolved_format().is_none() {
        errors.push(ValidationError::UnknownRouteFormat(
            settings.routes.path.display().to_string(),
        ));
    }

    let level = settings.observability.log_level.to_ascii_lowercase();
    if !LOG_LEVELS.contains(&level.as_str()) {
        errors.push(ValidationError::InvalidLogLevel(
            settings.observability.log_level.clone(),
        ));
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}
