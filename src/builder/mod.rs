//! In-code route declaration.
//!
//! Bypasses the loaders entirely: routes are registered with closures and
//! handed to the registry as a [`crate::loader::LoadedRoutes`].

pub mod dsl;

pub use dsl::RouteBuilder;
