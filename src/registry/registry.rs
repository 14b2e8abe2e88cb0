//! Route registry state machine.
//!
//! # States
//! - Uninitialized: every query fails with `NotInitialized`
//! - Initialized: route collections and startup route are frozen
//!
//! # State Transitions
//! ```text
//! Uninitialized → Initialized: first successful initialize / initialize_with
//! Initialized → Initialized: further initialize calls leave routes untouched
//! ```
//!
//! # Design Decisions
//! - Explicit instance with injected loader, callbacks and navigator
//! - Check-and-set of the transition runs under a mutex, so racing callers
//!   never both load and partition routes
//! - A failed load leaves the registry Uninitialized
//! - Navigator rebinding is allowed in either state
//! - Duplicate names are stored as-is; lookups return the first match in
//!   `all_routes` order

use std::fmt;
use std::io::Read;
use std::sync::{Arc, Mutex, OnceLock, PoisonError};

use arc_swap::ArcSwapOption;

use crate::builder::RouteBuilder;
use crate::error::{LoadError, RegistryError};
use crate::loader::{LoadedRoutes, RouteLoader, DEFAULT_STARTUP};
use crate::observability::metrics;
use crate::registry::collection::RouteCollection;
use crate::registry::eligibility::EligibilityPolicy;
use crate::registry::navigator::Navigator;
use crate::route::{Render, RenderCallbacks, Route, Surface};

/// What an `initialize` call did to the route data.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InitOutcome {
    /// Routes were loaded and stored by this call.
    Applied,
    /// The registry was already initialized; route data unchanged.
    AlreadyInitialized,
}

/// A mountable view for the rendering layer.
#[derive(Debug, Clone)]
pub struct MountEntry {
    /// `full_path` for dynamic routes, `name` for static routes.
    pub path_key: String,
    pub render: Render,
    /// Param names without optional markers; empty for static routes.
    pub param_names: Vec<String>,
}

#[derive(Debug)]
struct RegistryState {
    routes: RouteCollection,
    startup: String,
}

/// Owns the application's routes after a one-time initialization.
pub struct RouteRegistry {
    policy: EligibilityPolicy,
    state: OnceLock<RegistryState>,
    init_lock: Mutex<()>,
    navigator: ArcSwapOption<Arc<dyn Navigator>>,
}

impl RouteRegistry {
    /// Registry using the default [`EligibilityPolicy::NonHidden`] policy.
    pub fn new() -> Self {
        Self::with_policy(EligibilityPolicy::default())
    }

    pub fn with_policy(policy: EligibilityPolicy) -> Self {
        Self {
            policy,
            state: OnceLock::new(),
            init_lock: Mutex::new(()),
            navigator: ArcSwapOption::empty(),
        }
    }

    pub fn policy(&self) -> EligibilityPolicy {
        self.policy
    }

    pub fn is_initialized(&self) -> bool {
        self.state.get().is_some()
    }

    /// Load routes from `source` with `loader`, once.
    ///
    /// Later calls skip loading entirely. `navigator`, when given, is bound
    /// whether or not this call loaded anything. On a load error nothing is
    /// stored or bound.
    pub fn initialize(
        &self,
        source: &mut dyn Read,
        loader: &dyn RouteLoader,
        callbacks: &RenderCallbacks,
        navigator: Option<Arc<dyn Navigator>>,
    ) -> Result<InitOutcome, RegistryError> {
        let format = loader.format();
        let outcome = self
            .apply_once(|| loader.load_routes(callbacks, source))
            .inspect_err(|e| {
                tracing::error!(%format, error = %e, "Failed to load routes");
            })?;

        if let Some(navigator) = navigator {
            self.bind_navigator(navigator);
        }
        Ok(outcome)
    }

    /// Initialize from routes declared in code, once.
    pub fn initialize_with<F>(
        &self,
        navigator: Option<Arc<dyn Navigator>>,
        declare: F,
    ) -> InitOutcome
    where
        F: FnOnce(&mut RouteBuilder),
    {
        let outcome = self.apply_once(|| {
            let mut builder = RouteBuilder::new();
            declare(&mut builder);
            Ok(builder.build())
        });

        if let Some(navigator) = navigator {
            self.bind_navigator(navigator);
        }
        // The builder path cannot fail to load
        outcome.unwrap_or(InitOutcome::AlreadyInitialized)
    }

    /// Replace the active navigator.
    pub fn bind_navigator(&self, navigator: Arc<dyn Navigator>) {
        tracing::debug!("Binding navigator");
        self.navigator.store(Some(Arc::new(navigator)));
    }

    fn apply_once<F>(&self, load: F) -> Result<InitOutcome, LoadError>
    where
        F: FnOnce() -> Result<LoadedRoutes, LoadError>,
    {
        let _guard = self.init_lock.lock().unwrap_or_else(PoisonError::into_inner);
        if self.state.get().is_some() {
            tracing::debug!("Route registry already initialized, skipping route load");
            metrics::record_initialization("skipped");
            return Ok(InitOutcome::AlreadyInitialized);
        }

        let loaded = load().inspect_err(|_| metrics::record_initialization("failed"))?;
        let routes = RouteCollection::from_routes(loaded.routes);
        let startup = if routes.find(&loaded.startup).is_some() {
            loaded.startup
        } else {
            if loaded.startup != DEFAULT_STARTUP {
                tracing::warn!(
                    requested = %loaded.startup,
                    "Startup route not declared, falling back to default"
                );
            }
            DEFAULT_STARTUP.to_string()
        };

        tracing::info!(
            static_routes = routes.static_routes().count(),
            dynamic_routes = routes.dynamic_routes().count(),
            startup = %startup,
            "Route registry initialized"
        );
        metrics::record_route_count(routes.len());
        metrics::record_initialization("applied");

        // Only written while holding init_lock, so this cannot already be set
        let _ = self.state.set(RegistryState { routes, startup });
        Ok(InitOutcome::Applied)
    }

    fn state(&self) -> Result<&RegistryState, RegistryError> {
        self.state.get().ok_or(RegistryError::NotInitialized)
    }

    /// The partitioned route storage.
    pub fn collection(&self) -> Result<&RouteCollection, RegistryError> {
        Ok(&self.state()?.routes)
    }

    /// Name of the route current after initialization.
    pub fn startup_route(&self) -> Result<&str, RegistryError> {
        Ok(&self.state()?.startup)
    }

    /// Static routes followed by dynamic routes, in registration order.
    pub fn all_routes(&self) -> Result<Vec<&Route>, RegistryError> {
        Ok(self.state()?.routes.all_routes().collect())
    }

    /// Routes listed in navigation affordances under the configured policy.
    pub fn eligible_routes(&self) -> Result<Vec<&Route>, RegistryError> {
        self.routes_admitted_by(self.policy)
    }

    /// Routes whose `hidden` flag is false, regardless of policy.
    pub fn non_hidden_routes(&self) -> Result<Vec<&Route>, RegistryError> {
        self.routes_admitted_by(EligibilityPolicy::NonHidden)
    }

    fn routes_admitted_by(&self, policy: EligibilityPolicy) -> Result<Vec<&Route>, RegistryError> {
        Ok(self
            .state()?
            .routes
            .all_routes()
            .filter(|route| policy.admits(route))
            .collect())
    }

    /// First route named `name`.
    pub fn find(&self, name: &str) -> Result<Option<&Route>, RegistryError> {
        Ok(self.state()?.routes.find(name))
    }

    /// Mount table for the rendering layer, in `all_routes` order.
    pub fn mount_entries(&self) -> Result<Vec<MountEntry>, RegistryError> {
        Ok(self
            .state()?
            .routes
            .all_routes()
            .map(|route| MountEntry {
                path_key: route.mount_key().into_owned(),
                render: route.render().clone(),
                param_names: match route {
                    Route::Static(_) => Vec::new(),
                    Route::Dynamic(r) => r.param_names().into_iter().map(str::to_string).collect(),
                },
            })
            .collect())
    }

    /// Draw the route named `name` onto `surface`.
    pub fn draw(
        &self,
        name: &str,
        surface: &mut dyn Surface,
        args: &[Option<String>],
    ) -> Result<(), RegistryError> {
        let route = self
            .find(name)?
            .ok_or_else(|| RegistryError::UnknownRoute(name.to_string()))?;
        route.draw(surface, args);
        Ok(())
    }

    /// Hand `route` to the bound navigator.
    ///
    /// The name is not checked against stored routes; an unknown destination
    /// is the navigator's concern.
    pub fn navigate(&self, route: &str) -> Result<(), RegistryError> {
        self.state()?;
        let navigator = self
            .navigator
            .load_full()
            .ok_or(RegistryError::NavigatorUnbound)?;
        metrics::record_navigation();
        navigator.navigate(route);
        Ok(())
    }
}

impl Default for RouteRegistry {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for RouteRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RouteRegistry")
            .field("policy", &self.policy)
            .field("state", &self.state.get())
            .field("navigator_bound", &self.navigator.load().is_some())
            .finish()
    }
}
