//! Route model subsystem.
//!
//! # Data Flow
//! ```text
//! loader / builder
//!     → model.rs (StaticRoute | DynamicRoute, wrapped in Route)
//!     → render.rs (callback resolved by composable name, fallback on miss)
//!     → registry (stored, partitioned, queried)
//! ```
//!
//! # Design Decisions
//! - Route is a sum type; `RouteCollection::push` and `Route::mount_key`
//!   match on the variant, and only `DynamicRoute::full_path` builds templates
//! - Render callbacks are opaque and owned by the caller

pub mod model;
pub mod render;

pub use model::{DynamicRoute, Route, RouteKind, RouteSummary, StaticRoute};
pub use render::{Render, RenderCallbacks, Surface, TextSurface, UNKNOWN_ROUTE_TEXT};
