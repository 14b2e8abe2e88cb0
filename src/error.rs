//! Error taxonomy for route loading and registry access.
//!
//! # Design Decisions
//! - Structural failures in the structured formats are surfaced, never retried
//! - Unresolved render callbacks are not errors (see `route::render`)
//! - Malformed lines/elements in the compact and markup formats are skipped
//!   by the loaders and never reach this module

use thiserror::Error;

/// Errors produced while reading a route declaration stream.
#[derive(Debug, Error)]
pub enum LoadError {
    /// The source stream could not be read.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// The YAML document is not well-formed.
    #[error("YAML parse error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    /// The JSON document is not well-formed.
    #[error("JSON parse error: {0}")]
    Json(#[from] serde_json::Error),

    /// The TOML document is not well-formed.
    #[error("TOML parse error: {0}")]
    Toml(#[from] toml::de::Error),

    /// The XML document is not well-formed.
    #[error("XML parse error: {0}")]
    Xml(#[from] roxmltree::Error),

    /// The document parsed, but its top-level shape is not a route table.
    #[error("Malformed route document: {0}")]
    Structure(String),
}

/// Errors returned by [`crate::registry::RouteRegistry`].
#[derive(Debug, Error)]
pub enum RegistryError {
    /// A query ran before the first successful `initialize`.
    #[error("Route registry is not initialized; call initialize() first")]
    NotInitialized,

    /// Navigation was requested but no navigator has been bound.
    #[error("No navigator bound to the route registry")]
    NavigatorUnbound,

    /// No stored route carries the requested name.
    #[error("Unknown route: {0}")]
    UnknownRoute(String),

    /// Loading the route declarations failed; the registry stays uninitialized.
    #[error(transparent)]
    Load(#[from] LoadError),
}
