//! Navigation route registry.
//!
//! Ingests route declarations (YAML, JSON, XML, TOML or the compact line
//! format), normalizes them into [`route::Route`] values and serves them
//! from a one-time-initialized [`registry::RouteRegistry`].

pub mod builder;
pub mod config;
pub mod error;
pub mod loader;
pub mod observability;
pub mod registry;
pub mod route;

pub use builder::RouteBuilder;
pub use config::RegistrySettings;
pub use error::{LoadError, RegistryError};
pub use loader::{LoadedRoutes, RouteFormat, RouteLoader};
pub use registry::{EligibilityPolicy, Navigator, RouteRegistry};
pub use route::{DynamicRoute, Render, RenderCallbacks, Route, StaticRoute};
