//! Builder DSL.
//!
//! ```
//! use route_registry::builder::RouteBuilder;
//!
//! let mut builder = RouteBuilder::new();
//! builder
//!     .startup("home", |s| s.text("Home"))
//!     .dynamic_route("user", ["id", "tab?"], |s, args| {
//!         s.text(args[0].as_deref().unwrap_or("anonymous"));
//!     })
//!     .hidden_static_route("debug", |s| s.text("Debug"));
//!
//! let loaded = builder.build();
//! assert_eq!(loaded.startup, "home");
//! assert_eq!(loaded.routes.len(), 3);
//! ```

use crate::loader::{LoadedRoutes, DEFAULT_STARTUP};
use crate::route::{DynamicRoute, Render, Route, StaticRoute, Surface};

/// Collects routes declared in code.
#[derive(Debug, Default)]
pub struct RouteBuilder {
    routes: Vec<Route>,
    startup: Option<String>,
}

impl RouteBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a visible static route.
    pub fn static_route<F>(&mut self, name: impl Into<String>, view: F) -> &mut Self
    where
        F: Fn(&mut dyn Surface) + Send + Sync + 'static,
    {
        self.push_static(name.into(), false, view)
    }

    /// Add a static route left out of navigation affordances.
    pub fn hidden_static_route<F>(&mut self, name: impl Into<String>, view: F) -> &mut Self
    where
        F: Fn(&mut dyn Surface) + Send + Sync + 'static,
    {
        self.push_static(name.into(), true, view)
    }

    /// Add a visible dynamic route.
    pub fn dynamic_route<I, S, F>(
        &mut self,
        name: impl Into<String>,
        params: I,
        view: F,
    ) -> &mut Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
        F: Fn(&mut dyn Surface, &[Option<String>]) + Send + Sync + 'static,
    {
        self.route(DynamicRoute::new(name, Render::new(view), false, params))
    }

    /// Add a dynamic route left out of navigation affordances.
    pub fn hidden_dynamic_route<I, S, F>(
        &mut self,
        name: impl Into<String>,
        params: I,
        view: F,
    ) -> &mut Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
        F: Fn(&mut dyn Surface, &[Option<String>]) + Send + Sync + 'static,
    {
        self.route(DynamicRoute::new(name, Render::new(view), true, params))
    }

    /// Add a static route and make it the startup route.
    ///
    /// Startup routes take no params. A later call replaces the startup name.
    pub fn startup<F>(&mut self, name: impl Into<String>, view: F) -> &mut Self
    where
        F: Fn(&mut dyn Surface) + Send + Sync + 'static,
    {
        let name = name.into();
        self.startup = Some(name.clone());
        self.push_static(name, false, view)
    }

    /// Add an already constructed route.
    pub fn route(&mut self, route: impl Into<Route>) -> &mut Self {
        self.routes.push(route.into());
        self
    }

    /// Finish: startup is the explicit one, else the first route, else `"default"`.
    pub fn build(self) -> LoadedRoutes {
        let startup = self
            .startup
            .or_else(|| self.routes.first().map(|r| r.name().to_string()))
            .unwrap_or_else(|| DEFAULT_STARTUP.to_string());
        LoadedRoutes::new(startup, self.routes)
    }

    fn push_static<F>(&mut self, name: String, hidden: bool, view: F) -> &mut Self
    where
        F: Fn(&mut dyn Surface) + Send + Sync + 'static,
    {
        let render = Render::new(move |surface, _| view(surface));
        self.route(StaticRoute::new(name, render, hidden))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::route::{RouteKind, TextSurface};

    #[test]
    fn test_build_preserves_declaration_order() {
        let mut builder = RouteBuilder::new();
        builder
            .static_route("a", |s| s.text("a"))
            .dynamic_route("b", ["id"], |s, _| s.text("b"))
            .hidden_static_route("c", |s| s.text("c"))
            .hidden_dynamic_route("d", ["x?"], |s, _| s.text("d"));

        let loaded = builder.build();
        let summary: Vec<_> = loaded
            .routes
            .iter()
            .map(|r| (r.name(), r.kind(), r.is_hidden()))
            .collect();
        assert_eq!(
            summary,
            vec![
                ("a", RouteKind::Static, false),
                ("b", RouteKind::Dynamic, false),
                ("c", RouteKind::Static, true),
                ("d", RouteKind::Dynamic, true),
            ]
        );
    }

    #[test]
    fn test_startup_resolution_order() {
        let mut explicit = RouteBuilder::new();
        explicit.static_route("a", |_| {}).startup("b", |_| {});
        assert_eq!(explicit.build().startup, "b");

        let mut implicit = RouteBuilder::new();
        implicit.dynamic_route("first", ["id"], |_, _| {}).static_route("second", |_| {});
        assert_eq!(implicit.build().startup, "first");

        assert_eq!(RouteBuilder::new().build().startup, DEFAULT_STARTUP);
    }

    #[test]
    fn test_static_view_is_wrapped() {
        let mut builder = RouteBuilder::new();
        builder.startup("home", |s| s.text("Home"));
        let loaded = builder.build();

        let mut surface = TextSurface::new();
        loaded.routes[0].draw(&mut surface, &[Some("ignored".into())]);
        assert_eq!(surface.lines(), ["Home"]);
    }
}
