//! Route declaration loaders.
//!
//! # Data Flow
//! ```text
//! byte stream + RenderCallbacks
//!     → yaml.rs / json.rs / toml.rs  (document → process_routes)
//!     → xml.rs                       (element tree walk)
//!     → compact.rs                   (line-oriented declarations)
//!     → LoadedRoutes { startup, routes }
//! ```
//!
//! # Design Decisions
//! - Every loader returns a fresh `LoadedRoutes`; none touches shared state
//! - Structured formats fail hard on a malformed root, skip malformed entries
//! - Compact and markup formats tolerate missing sections
//! - Startup name is returned unresolved; the registry resolves it

pub mod compact;
pub mod json;
pub mod toml;
pub mod xml;
pub mod yaml;

use std::fmt;
use std::io::Read;
use std::path::Path;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::error::LoadError;
use crate::observability::metrics;
use crate::route::{DynamicRoute, RenderCallbacks, Route, StaticRoute};

pub use compact::CompactLoader;
pub use json::JsonLoader;
pub use self::toml::TomlLoader;
pub use xml::XmlLoader;
pub use yaml::YamlLoader;

/// Startup name used when a document does not declare one.
pub const DEFAULT_STARTUP: &str = "default";

/// Result of a single load: the declared startup name plus routes in order.
#[derive(Debug, Clone)]
pub struct LoadedRoutes {
    pub startup: String,
    pub routes: Vec<Route>,
}

impl LoadedRoutes {
    pub fn new(startup: impl Into<String>, routes: Vec<Route>) -> Self {
        Self {
            startup: startup.into(),
            routes,
        }
    }
}

/// Common contract of all route declaration parsers.
pub trait RouteLoader: Send + Sync {
    /// The format this loader reads.
    fn format(&self) -> RouteFormat;

    /// Parse `source`, resolving composable names against `callbacks`.
    fn load_routes(
        &self,
        callbacks: &RenderCallbacks,
        source: &mut dyn Read,
    ) -> Result<LoadedRoutes, LoadError>;
}

/// Supported declaration formats.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RouteFormat {
    Yaml,
    Json,
    Xml,
    Compact,
    Toml,
}

impl RouteFormat {
    pub fn as_str(&self) -> &'static str {
        match self {
            RouteFormat::Yaml => "yaml",
            RouteFormat::Json => "json",
            RouteFormat::Xml => "xml",
            RouteFormat::Compact => "compact",
            RouteFormat::Toml => "toml",
        }
    }

    /// Infer the format from a file extension.
    pub fn from_path(path: &Path) -> Option<Self> {
        let ext = path.extension()?.to_str()?.to_ascii_lowercase();
        match ext.as_str() {
            "yaml" | "yml" => Some(RouteFormat::Yaml),
            "json" => Some(RouteFormat::Json),
            "xml" => Some(RouteFormat::Xml),
            "routes" | "nav" => Some(RouteFormat::Compact),
            "toml" => Some(RouteFormat::Toml),
            _ => None,
        }
    }

    /// A loader for this format.
    pub fn loader(&self) -> Box<dyn RouteLoader> {
        match self {
            RouteFormat::Yaml => Box::new(YamlLoader),
            RouteFormat::Json => Box::new(JsonLoader),
            RouteFormat::Xml => Box::new(XmlLoader),
            RouteFormat::Compact => Box::new(CompactLoader),
            RouteFormat::Toml => Box::new(TomlLoader),
        }
    }
}

impl fmt::Display for RouteFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for RouteFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "yaml" | "yml" => Ok(RouteFormat::Yaml),
            "json" => Ok(RouteFormat::Json),
            "xml" => Ok(RouteFormat::Xml),
            "compact" | "routes" => Ok(RouteFormat::Compact),
            "toml" => Ok(RouteFormat::Toml),
            other => Err(format!("unknown route format: {other}")),
        }
    }
}

/// Shared tail of the structured loaders: check the root, then walk it.
pub(crate) fn load_document(
    document: Value,
    callbacks: &RenderCallbacks,
    format: RouteFormat,
) -> Result<LoadedRoutes, LoadError> {
    let Value::Object(data) = document else {
        return Err(LoadError::Structure(format!(
            "{format} root must be a map, found {}",
            value_kind(&document)
        )));
    };

    let startup = data
        .get("startup")
        .and_then(Value::as_str)
        .unwrap_or(DEFAULT_STARTUP)
        .to_string();
    let routes = process_routes(&data, callbacks, format);
    Ok(LoadedRoutes::new(startup, routes))
}

/// Walk the `routes` sequence of a structured document.
///
/// Entries without a string `name` and `composable` are skipped. `hidden`
/// must be boolean `true` to count. A `params` sequence of strings makes the
/// route dynamic; anything else makes it static.
pub fn process_routes(
    data: &Map<String, Value>,
    callbacks: &RenderCallbacks,
    format: RouteFormat,
) -> Vec<Route> {
    let Some(entries) = data.get("routes").and_then(Value::as_array) else {
        return Vec::new();
    };

    let mut routes = Vec::with_capacity(entries.len());
    for (index, entry) in entries.iter().enumerate() {
        let Some(entry) = entry.as_object() else {
            skip_entry(format, index, "entry is not a map");
            continue;
        };
        let Some(name) = entry.get("name").and_then(Value::as_str) else {
            skip_entry(format, index, "missing string `name`");
            continue;
        };
        let Some(composable) = entry.get("composable").and_then(Value::as_str) else {
            skip_entry(format, index, "missing string `composable`");
            continue;
        };

        let render = callbacks.resolve(composable);
        let hidden = matches!(entry.get("hidden"), Some(Value::Bool(true)));
        let params = entry
            .get("params")
            .and_then(Value::as_array)
            .and_then(|params| {
                params
                    .iter()
                    .map(|p| p.as_str().map(str::to_string))
                    .collect::<Option<Vec<_>>>()
            });

        let route: Route = match params {
            Some(params) => DynamicRoute::new(name, render, hidden, params).into(),
            None => StaticRoute::new(name, render, hidden).into(),
        };
        metrics::record_route_loaded(format.as_str(), route.kind());
        routes.push(route);
    }
    routes
}

fn skip_entry(format: RouteFormat, index: usize, reason: &str) {
    tracing::debug!(%format, index, reason, "Skipping route entry");
    metrics::record_entry_skipped(format.as_str());
}

fn value_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "sequence",
        Value::Object(_) => "map",
    }
}
