//! Navigation affordance policies.
//!
//! # Policies
//! - `NonHidden` (default): every route whose `hidden` flag is false
//! - `AllOptionalParams`: static routes, plus dynamic routes whose params
//!   are all optional, i.e. routes reachable without supplying a value
//!
//! # Design Decisions
//! - The two policies are never combined; the registry applies exactly one
//! - `hidden` never affects routability, only affordance listing

use serde::{Deserialize, Serialize};

use crate::route::Route;

/// Which routes appear in navigation affordances (sidebars, menus).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EligibilityPolicy {
    #[default]
    NonHidden,
    AllOptionalParams,
}

impl EligibilityPolicy {
    /// Returns true if `route` should be listed under this policy.
    pub fn admits(&self, route: &Route) -> bool {
        match self {
            EligibilityPolicy::NonHidden => !route.is_hidden(),
            EligibilityPolicy::AllOptionalParams => match route {
                Route::Static(_) => true,
                Route::Dynamic(r) => r.all_params_optional(),
            },
        }
    }
}
