//! YAML route declarations.
//!
//! ```yaml
//! startup: home
//! routes:
//!   - name: home
//!     composable: Home
//!   - name: profile
//!     composable: Profile
//!     hidden: true
//!     params: [id, tab?]
//! ```

use std::io::Read;

use serde_json::Value;

use crate::error::LoadError;
use crate::loader::{load_document, LoadedRoutes, RouteFormat, RouteLoader};
use crate::route::RenderCallbacks;

/// Loader for YAML documents.
#[derive(Debug, Clone, Copy, Default)]
pub struct YamlLoader;

impl RouteLoader for YamlLoader {
    fn format(&self) -> RouteFormat {
        RouteFormat::Yaml
    }

    fn load_routes(
        &self,
        callbacks: &RenderCallbacks,
        source: &mut dyn Read,
    ) -> Result<LoadedRoutes, LoadError> {
        let document: Value = serde_yaml::from_reader(source)?;
        load_document(document, callbacks, RouteFormat::Yaml)
    }
}
