//! Partitioned route storage.
//!
//! # Responsibilities
//! - Split loaded routes into static and dynamic collections
//! - Preserve relative order within each collection
//! - Expose the static-first concatenation as `all_routes`

use crate::route::{DynamicRoute, Route, StaticRoute};

/// Static and dynamic routes, each in registration order.
#[derive(Debug, Clone, Default)]
pub struct RouteCollection {
    statics: Vec<Route>,
    dynamics: Vec<Route>,
}

impl RouteCollection {
    pub fn new() -> Self {
        Self::default()
    }

    /// Partition `routes` by variant.
    pub fn from_routes(routes: impl IntoIterator<Item = Route>) -> Self {
        let mut collection = Self::new();
        for route in routes {
            collection.push(route);
        }
        collection
    }

    pub fn push(&mut self, route: Route) {
        match route {
            Route::Static(_) => self.statics.push(route),
            Route::Dynamic(_) => self.dynamics.push(route),
        }
    }

    pub fn static_routes(&self) -> impl Iterator<Item = &StaticRoute> {
        self.statics.iter().filter_map(|route| match route {
            Route::Static(r) => Some(r),
            Route::Dynamic(_) => None,
        })
    }

    pub fn dynamic_routes(&self) -> impl Iterator<Item = &DynamicRoute> {
        self.dynamics.iter().filter_map(|route| match route {
            Route::Dynamic(r) => Some(r),
            Route::Static(_) => None,
        })
    }

    /// Static routes followed by dynamic routes.
    pub fn all_routes(&self) -> impl Iterator<Item = &Route> {
        self.statics.iter().chain(self.dynamics.iter())
    }

    /// First route named `name`, in `all_routes` order.
    pub fn find(&self, name: &str) -> Option<&Route> {
        self.all_routes().find(|route| route.name() == name)
    }

    pub fn len(&self) -> usize {
        self.statics.len() + self.dynamics.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
