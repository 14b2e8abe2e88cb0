//! TOML route declarations.
//!
//! ```toml
//! startup = "home"
//!
//! [[routes]]
//! name = "home"
//! composable = "Home"
//!
//! [[routes]]
//! name = "user"
//! composable = "User"
//! params = ["id", "tab?"]
//! ```

use std::io::Read;

use serde_json::Value;

use crate::error::LoadError;
use crate::loader::{load_document, LoadedRoutes, RouteFormat, RouteLoader};
use crate::route::RenderCallbacks;

/// Loader for TOML documents.
#[derive(Debug, Clone, Copy, Default)]
pub struct TomlLoader;

impl RouteLoader for TomlLoader {
    fn format(&self) -> RouteFormat {
        RouteFormat::Toml
    }

    fn load_routes(
        &self,
        callbacks: &RenderCallbacks,
        source: &mut dyn Read,
    ) -> Result<LoadedRoutes, LoadError> {
        let mut content = String::new();
        source.read_to_string(&mut content)?;
        // A TOML document root is always a table
        let document: Value = ::toml::from_str(&content)?;
        load_document(document, callbacks, RouteFormat::Toml)
    }
}
