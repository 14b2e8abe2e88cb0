//! Navigator collaborator.
//!
//! The registry never performs transitions itself; it hands a route name to
//! whatever [`Navigator`] is bound.

use std::sync::{Mutex, PoisonError};

/// Dispatch target for navigation requests.
pub trait Navigator: Send + Sync {
    /// Navigate to `route`, a route name or a filled-in path template.
    fn navigate(&self, route: &str);
}

/// Navigator that keeps a back stack and logs each transition.
#[derive(Debug, Default)]
pub struct HistoryNavigator {
    stack: Mutex<Vec<String>>,
}

impl HistoryNavigator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Every destination, oldest first.
    pub fn history(&self) -> Vec<String> {
        self.stack.lock().unwrap_or_else(PoisonError::into_inner).clone()
    }

    pub fn current(&self) -> Option<String> {
        self.stack
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .last()
            .cloned()
    }

    /// Pop the current destination; returns the one now on top.
    pub fn back(&self) -> Option<String> {
        let mut stack = self.stack.lock().unwrap_or_else(PoisonError::into_inner);
        stack.pop()?;
        let current = stack.last().cloned();
        tracing::debug!(current = ?current, "Navigated back");
        current
    }
}

impl Navigator for HistoryNavigator {
    fn navigate(&self, route: &str) {
        tracing::info!(route = %route, "Navigating");
        self.stack
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push(route.to_string());
    }
}
