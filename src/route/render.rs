//! Render callbacks and the surface they draw into.
//!
//! # Responsibilities
//! - Wrap caller-owned view callbacks in a cheap, cloneable handle
//! - Resolve composable names against the caller's callback table
//! - Substitute the "Unknown route" fallback on a miss
//!
//! # Design Decisions
//! - The core never inspects what a callback draws
//! - A miss is never an error; it degrades to the fallback view

use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;

use crate::observability::metrics;

/// Text drawn by the fallback view when a composable name has no callback.
pub const UNKNOWN_ROUTE_TEXT: &str = "Unknown route";

/// Drawing target handed to render callbacks by the rendering layer.
pub trait Surface {
    /// Draw a run of text.
    fn text(&mut self, content: &str);
}

/// A surface that records every text run, in order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TextSurface {
    lines: Vec<String>,
}

impl TextSurface {
    pub fn new() -> Self {
        Self::default()
    }

    /// Text runs drawn so far.
    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    pub fn into_lines(self) -> Vec<String> {
        self.lines
    }
}

impl Surface for TextSurface {
    fn text(&mut self, content: &str) {
        self.lines.push(content.to_string());
    }
}

/// Signature of a view callback: the surface plus resolved parameter values.
pub type RenderFn = dyn Fn(&mut dyn Surface, &[Option<String>]) + Send + Sync;

/// Shared handle to a caller-owned view callback.
#[derive(Clone)]
pub struct Render(Arc<RenderFn>);

impl Render {
    pub fn new<F>(f: F) -> Self
    where
        F: Fn(&mut dyn Surface, &[Option<String>]) + Send + Sync + 'static,
    {
        Self(Arc::new(f))
    }

    /// The view substituted for unresolved composable names.
    pub fn fallback() -> Self {
        Self::new(|surface, _| surface.text(UNKNOWN_ROUTE_TEXT))
    }

    /// Invoke the callback.
    pub fn call(&self, surface: &mut dyn Surface, args: &[Option<String>]) {
        (self.0)(surface, args)
    }

    /// True if both handles point at the same callback.
    pub fn ptr_eq(&self, other: &Render) -> bool {
        Arc::ptr_eq(&self.0, &other.0)
    }
}

impl fmt::Debug for Render {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Render(..)")
    }
}

/// Caller-supplied table from composable name to view callback.
#[derive(Debug, Clone, Default)]
pub struct RenderCallbacks {
    callbacks: HashMap<String, Render>,
}

impl RenderCallbacks {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a callback, returning the one it replaced.
    pub fn insert(&mut self, name: impl Into<String>, render: Render) -> Option<Render> {
        self.callbacks.insert(name.into(), render)
    }

    /// Chaining form of [`RenderCallbacks::insert`].
    pub fn with<F>(mut self, name: impl Into<String>, f: F) -> Self
    where
        F: Fn(&mut dyn Surface, &[Option<String>]) + Send + Sync + 'static,
    {
        self.insert(name, Render::new(f));
        self
    }

    pub fn get(&self, name: &str) -> Option<&Render> {
        self.callbacks.get(name)
    }

    pub fn len(&self) -> usize {
        self.callbacks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.callbacks.is_empty()
    }

    /// Exact-match lookup, falling back to the "Unknown route" view.
    pub fn resolve(&self, name: &str) -> Render {
        match self.callbacks.get(name) {
            Some(render) => render.clone(),
            None => {
                tracing::warn!(
                    composable = %name,
                    "No render callback registered, using fallback view"
                );
                metrics::record_unresolved_callback();
                Render::fallback()
            }
        }
    }
}

impl<K: Into<String>> FromIterator<(K, Render)> for RenderCallbacks {
    fn from_iter<I: IntoIterator<Item = (K, Render)>>(iter: I) -> Self {
        Self {
            callbacks: iter.into_iter().map(|(k, v)| (k.into(), v)).collect(),
        }
    }
}
