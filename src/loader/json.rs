//! JSON route declarations.
//!
//! Same shape as the YAML format: a root object with an optional
//! `startup` string and a `routes` array.

use std::io::Read;

use serde_json::Value;

use crate::error::LoadError;
use crate::loader::{load_document, LoadedRoutes, RouteFormat, RouteLoader};
use crate::route::RenderCallbacks;

/// Loader for JSON documents.
#[derive(Debug, Clone, Copy, Default)]
pub struct JsonLoader;

impl RouteLoader for JsonLoader {
    fn format(&self) -> RouteFormat {
        RouteFormat::Json
    }

    fn load_routes(
        &self,
        callbacks: &RenderCallbacks,
        source: &mut dyn Read,
    ) -> Result<LoadedRoutes, LoadError> {
        let document: Value = serde_json::from_reader(source)?;
        load_document(document, callbacks, RouteFormat::Json)
    }
}
