//! Route registry subsystem.
//!
//! # Data Flow
//! ```text
//! initialize(source, loader, callbacks, navigator?)
//!     → loader.load_routes (once; skipped when already initialized)
//!     → collection.rs (partition into static / dynamic)
//!     → startup name resolved against stored routes, else "default"
//!
//! Queries (Initialized only):
//!     all_routes / eligible_routes / non_hidden_routes / mount_entries
//!     → eligibility.rs (affordance policy)
//!     navigate(name) → navigator.rs (bound collaborator)
//! ```
//!
//! # Design Decisions
//! - Route data is frozen after the first successful initialization
//! - The navigator is swappable at any time

pub mod collection;
pub mod eligibility;
pub mod navigator;
#[allow(clippy::module_inception)]
pub mod registry;

pub use collection::RouteCollection;
pub use eligibility::EligibilityPolicy;
pub use navigator::{HistoryNavigator, Navigator};
pub use registry::{InitOutcome, MountEntry, RouteRegistry};
