//! Metrics collection.
//!
//! # Metrics
//! - `route_registry_routes_loaded_total` (counter): routes produced, by format and kind
//! - `route_registry_entries_skipped_total` (counter): malformed entries dropped, by format
//! - `route_registry_unresolved_callbacks_total` (counter): fallback views substituted
//! - `route_registry_initializations_total` (counter): initialize calls, by outcome
//! - `route_registry_navigations_total` (counter): navigations dispatched
//! - `route_registry_routes` (gauge): routes stored after initialization

use crate::route::RouteKind;

pub fn record_route_loaded(format: &'static str, kind: RouteKind) {
    let kind = match kind {
        RouteKind::Static => "static",
        RouteKind::Dynamic => "dynamic",
    };
    ::metrics::counter!("route_registry_routes_loaded_total", "format" => format, "kind" => kind)
        .increment(1);
}

pub fn record_entry_skipped(format: &'static str) {
    ::metrics::counter!("route_registry_entries_skipped_total", "format" => format).increment(1);
}

pub fn record_unresolved_callback() {
    ::metrics::counter!("route_registry_unresolved_callbacks_total").increment(1);
}

/// `outcome` is one of `applied`, `skipped`, `failed`.
pub fn record_initialization(outcome: &'static str) {
    ::metrics::counter!("route_registry_initializations_total", "outcome" => outcome).increment(1);
}

pub fn record_navigation() {
    ::metrics::counter!("route_registry_navigations_total").increment(1);
}

pub fn record_route_count(count: usize) {
    ::metrics::gauge!("route_registry_routes").set(count as f64);
}
