//! Settings schema definitions.
//!
//! All types derive Serde traits for deserialization from a TOML settings
//! file. Every field has a default so a minimal file is valid.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::loader::RouteFormat;
use crate::registry::EligibilityPolicy;

/// Root settings for a route registry host.
#[derive(Debug, Clone, Deserialize, Serialize, Default)]
#[serde(default)]
pub struct RegistrySettings {
    /// Where the route declarations live.
    pub routes: RoutesSettings,

    /// Registry behavior.
    pub registry: RegistryBehavior,

    /// Observability settings.
    pub observability: ObservabilitySettings,
}

/// Route declaration source.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct RoutesSettings {
    /// Path to the declaration file.
    pub path: PathBuf,

    /// Declaration format; inferred from the extension when absent.
    pub format: Option<RouteFormat>,
}

impl Default for RoutesSettings {
    fn default() -> Self {
        Self {
            path: PathBuf::from("routes.yaml"),
            format: None,
        }
    }
}

impl RoutesSettings {
    /// Explicit format, else the one implied by the file extension.
    pub fn resolved_format(&self) -> Option<RouteFormat> {
        self.format.or_else(|| RouteFormat::from_path(&self.path))
    }

    /// Resolve a relative `path` against the settings file's directory.
    pub fn resolve_path(&mut self, base: &Path) {
        if self.path.is_relative() {
            self.path = base.join(&self.path);
        }
    }
}

/// Registry behavior.
#[derive(Debug, Clone, Deserialize, Serialize, Default)]
#[serde(default)]
pub struct RegistryBehavior {
    /// Which routes navigation affordances list.
    pub eligibility: EligibilityPolicy,
}

/// Observability settings.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct ObservabilitySettings {
    /// Log level (trace, debug, info, warn, error).
    pub log_level: String,
}

impl Default for ObservabilitySettings {
    fn default() -> Self {
        Self {
            log_level: "info".to_string(),
        }
    }
}
