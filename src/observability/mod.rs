//! Observability subsystem.
//!
//! # Data Flow
//! ```text
//! loaders, registry, navigator produce:
//!     → logging.rs (structured log events via tracing)
//!     → metrics.rs (counters via the metrics facade)
//!
//! Consumers:
//!     → whichever tracing subscriber / metrics recorder the host installs
//! ```
//!
//! # Design Decisions
//! - The library only emits; installing a subscriber is the binary's job
//! - No recorder installed means metric updates are no-ops

pub mod logging;
pub mod metrics;
