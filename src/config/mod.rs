//! Settings subsystem.
//!
//! # Data Flow
//! ```text
//! settings file (TOML)
//!     → loader.rs (read & deserialize)
//!     → validation.rs (semantic checks)
//!     → RegistrySettings (validated, immutable)
//!     → route file path + format, eligibility policy, log level
//! ```
//!
//! # Design Decisions
//! - All fields have defaults to allow minimal settings files
//! - Validation separates syntactic (serde) from semantic checks

pub mod loader;
pub mod schema;
pub mod validation;

pub use loader::{load_settings, parse_settings, ConfigError};
pub use schema::{ObservabilitySettings, RegistryBehavior, RegistrySettings, RoutesSettings};
pub use validation::ValidationError;
