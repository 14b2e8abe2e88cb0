//! XML route declarations.
//!
//! ```xml
//! <navigation>
//!   <startup>home</startup>
//!   <route>
//!     <name>home</name>
//!     <composable>Home</composable>
//!   </route>
//!   <route>
//!     <name>user</name>
//!     <composable>User</composable>
//!     <hidden>true</hidden>
//!     <param>id</param>
//!     <param>tab?</param>
//!   </route>
//! </navigation>
//! ```
//!
//! # Design Decisions
//! - Every `route` element in the document is a declaration
//! - A `route` without `name` or `composable` is skipped
//! - `hidden` is true only for the text `true` (any case)
//! - Text content is trimmed; element order is document order

use std::io::Read;

use roxmltree::{Document, Node};

use crate::error::LoadError;
use crate::loader::{LoadedRoutes, RouteFormat, RouteLoader, DEFAULT_STARTUP};
use crate::observability::metrics;
use crate::route::{DynamicRoute, RenderCallbacks, Route, StaticRoute};

/// Loader for XML documents.
#[derive(Debug, Clone, Copy, Default)]
pub struct XmlLoader;

impl RouteLoader for XmlLoader {
    fn format(&self) -> RouteFormat {
        RouteFormat::Xml
    }

    fn load_routes(
        &self,
        callbacks: &RenderCallbacks,
        source: &mut dyn Read,
    ) -> Result<LoadedRoutes, LoadError> {
        let mut content = String::new();
        source.read_to_string(&mut content)?;
        let document = Document::parse(&content)?;

        let mut routes = Vec::new();
        for (index, element) in elements(document.root(), "route").enumerate() {
            let name = first_text(element, "name");
            let composable = first_text(element, "composable");
            let (Some(name), Some(composable)) = (name, composable) else {
                tracing::debug!(index, "Skipping route element without name or composable");
                metrics::record_entry_skipped(RouteFormat::Xml.as_str());
                continue;
            };

            let render = callbacks.resolve(&composable);
            let hidden = first_text(element, "hidden")
                .map(|text| text.eq_ignore_ascii_case("true"))
                .unwrap_or(false);
            let params: Vec<String> = elements(element, "param").map(text_content).collect();

            let route: Route = if params.is_empty() {
                StaticRoute::new(name, render, hidden).into()
            } else {
                DynamicRoute::new(name, render, hidden, params).into()
            };
            metrics::record_route_loaded(RouteFormat::Xml.as_str(), route.kind());
            routes.push(route);
        }

        let startup = first_text(document.root(), "startup")
            .unwrap_or_else(|| DEFAULT_STARTUP.to_string());

        Ok(LoadedRoutes::new(startup, routes))
    }
}

/// Descendant elements of `node` named `tag`, in document order.
fn elements<'a, 'input: 'a>(
    node: Node<'a, 'input>,
    tag: &'a str,
) -> impl Iterator<Item = Node<'a, 'input>> + 'a {
    node.descendants()
        .filter(move |n| n.is_element() && n.has_tag_name(tag))
}

/// Trimmed text content of the first descendant element named `tag`.
fn first_text(node: Node<'_, '_>, tag: &str) -> Option<String> {
    elements(node, tag).next().map(text_content)
}

/// Concatenated text of all descendant text nodes, trimmed.
fn text_content(node: Node<'_, '_>) -> String {
    let text: String = node
        .descendants()
        .filter(Node::is_text)
        .filter_map(|n| n.text())
        .collect();
    text.trim().to_string()
}
