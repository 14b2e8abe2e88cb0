//! Canonical route model.
//!
//! # Responsibilities
//! - Represent static and parameterized navigation destinations
//! - Derive the path template a router mounts a dynamic route under
//!
//! # Design Decisions
//! - Routes are immutable after construction; fields are private
//! - Variant is chosen at construction, never inferred from `params`
//! - Param strings are accepted verbatim (no validation)

use std::borrow::Cow;
use std::collections::HashMap;

use serde::Serialize;

use crate::route::render::{Render, Surface};

/// Discriminant of a [`Route`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum RouteKind {
    Static,
    Dynamic,
}

/// A navigable destination.
#[derive(Debug, Clone)]
pub enum Route {
    Static(StaticRoute),
    Dynamic(DynamicRoute),
}

/// A route without parameters.
#[derive(Debug, Clone)]
pub struct StaticRoute {
    name: String,
    render: Render,
    hidden: bool,
}

impl StaticRoute {
    pub fn new(name: impl Into<String>, render: Render, hidden: bool) -> Self {
        Self {
            name: name.into(),
            render,
            hidden,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn render(&self) -> &Render {
        &self.render
    }

    pub fn hidden(&self) -> bool {
        self.hidden
    }
}

/// A route whose path carries named parameters.
///
/// A parameter ending in `?` is optional.
#[derive(Debug, Clone)]
pub struct DynamicRoute {
    name: String,
    render: Render,
    hidden: bool,
    params: Vec<String>,
}

impl DynamicRoute {
    pub fn new<I, S>(name: impl Into<String>, render: Render, hidden: bool, params: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            name: name.into(),
            render,
            hidden,
            params: params.into_iter().map(Into::into).collect(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn render(&self) -> &Render {
        &self.render
    }

    pub fn hidden(&self) -> bool {
        self.hidden
    }

    /// Declared params, including any trailing `?` markers.
    pub fn params(&self) -> &[String] {
        &self.params
    }

    /// Path template, e.g. `app1/{id}/{name}?` for params `["id", "name?"]`.
    ///
    /// An optional param closes its brace before the `?`. With no params the
    /// template is the bare name.
    pub fn full_path(&self) -> String {
        let mut path = self.name.clone();
        if self.params.is_empty() {
            return path;
        }
        path.push('/');
        for (i, param) in self.params.iter().enumerate() {
            if i > 0 {
                path.push('/');
            }
            path.push('{');
            match param.strip_suffix('?') {
                Some(stripped) => {
                    path.push_str(stripped);
                    path.push_str("}?");
                }
                None => {
                    path.push_str(param);
                    path.push('}');
                }
            }
        }
        path
    }

    /// Param names with the optional marker removed.
    pub fn param_names(&self) -> Vec<&str> {
        self.params
            .iter()
            .map(|p| p.strip_suffix('?').unwrap_or(p))
            .collect()
    }

    /// True if every param is optional (vacuously true with no params).
    pub fn all_params_optional(&self) -> bool {
        self.params.iter().all(|p| p.ends_with('?'))
    }

    /// Order path values by declared param, `None` where a value is missing.
    pub fn resolve_args(&self, values: &HashMap<String, String>) -> Vec<Option<String>> {
        self.param_names()
            .into_iter()
            .map(|name| values.get(name).cloned())
            .collect()
    }
}

impl Route {
    pub fn name(&self) -> &str {
        match self {
            Route::Static(r) => r.name(),
            Route::Dynamic(r) => r.name(),
        }
    }

    pub fn render(&self) -> &Render {
        match self {
            Route::Static(r) => r.render(),
            Route::Dynamic(r) => r.render(),
        }
    }

    pub fn is_hidden(&self) -> bool {
        match self {
            Route::Static(r) => r.hidden(),
            Route::Dynamic(r) => r.hidden(),
        }
    }

    pub fn kind(&self) -> RouteKind {
        match self {
            Route::Static(_) => RouteKind::Static,
            Route::Dynamic(_) => RouteKind::Dynamic,
        }
    }

    /// Declared params; always empty for a static route.
    pub fn params(&self) -> &[String] {
        match self {
            Route::Static(_) => &[],
            Route::Dynamic(r) => r.params(),
        }
    }

    /// Key the rendering layer mounts this route under.
    pub fn mount_key(&self) -> Cow<'_, str> {
        match self {
            Route::Static(r) => Cow::Borrowed(r.name()),
            Route::Dynamic(r) => Cow::Owned(r.full_path()),
        }
    }

    /// Draw the route. Static routes always receive an empty argument list.
    pub fn draw(&self, surface: &mut dyn Surface, args: &[Option<String>]) {
        match self {
            Route::Static(r) => r.render().call(surface, &[]),
            Route::Dynamic(r) => r.render().call(surface, args),
        }
    }

    /// Serializable description used by the CLI.
    pub fn summary(&self) -> RouteSummary {
        RouteSummary {
            name: self.name().to_string(),
            kind: self.kind(),
            mount_key: self.mount_key().into_owned(),
            hidden: self.is_hidden(),
            params: self.params().to_vec(),
        }
    }
}

impl From<StaticRoute> for Route {
    fn from(route: StaticRoute) -> Self {
        Route::Static(route)
    }
}

impl From<DynamicRoute> for Route {
    fn from(route: DynamicRoute) -> Self {
        Route::Dynamic(route)
    }
}

/// Plain-data view of a route.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RouteSummary {
    pub name: String,
    pub kind: RouteKind,
    pub mount_key: String,
    pub hidden: bool,
    pub params: Vec<String>,
}
