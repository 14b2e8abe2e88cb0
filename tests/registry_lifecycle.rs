//! Registry initialization, queries and navigation end to end.

use std::sync::{Arc, Barrier};
use std::thread;

use route_registry::loader::{CompactLoader, JsonLoader, XmlLoader, YamlLoader};
use route_registry::registry::{HistoryNavigator, InitOutcome};
use route_registry::route::TextSurface;
use route_registry::{EligibilityPolicy, RegistryError, RouteRegistry};

mod common;

#[test]
fn test_first_initialize_wins() {
    let registry = RouteRegistry::new();
    let callbacks = common::callbacks();

    let first = registry
        .initialize(&mut common::YAML.as_bytes(), &YamlLoader, &callbacks, None)
        .unwrap();
    let second = registry
        .initialize(
            &mut r#"{"startup":"solo","routes":[{"name":"solo","composable":"Home"}]}"#.as_bytes(),
            &JsonLoader,
            &callbacks,
            None,
        )
        .unwrap();

    assert_eq!(first, InitOutcome::Applied);
    assert_eq!(second, InitOutcome::AlreadyInitialized);
    assert_eq!(
        common::names(registry.all_routes().unwrap()),
        vec!["home", "RepoList", "app1", "hidden"]
    );
    assert_eq!(registry.startup_route().unwrap(), "RepoList");
}

#[test]
fn test_concurrent_initialize_loads_once() {
    let registry = Arc::new(RouteRegistry::new());
    let barrier = Arc::new(Barrier::new(8));

    let handles: Vec<_> = (0..8)
        .map(|i| {
            let registry = registry.clone();
            let barrier = barrier.clone();
            thread::spawn(move || {
                let text = format!("route{i}* -> Home\nshared -> Text\n");
                barrier.wait();
                registry
                    .initialize(&mut text.as_bytes(), &CompactLoader, &common::callbacks(), None)
                    .unwrap()
            })
        })
        .collect();

    let outcomes: Vec<_> = handles.into_iter().map(|h| h.join().unwrap()).collect();
    let applied = outcomes.iter().filter(|o| **o == InitOutcome::Applied).count();
    assert_eq!(applied, 1);

    let routes = registry.all_routes().unwrap();
    assert_eq!(routes.len(), 2);
    // Startup belongs to whichever thread won
    assert_eq!(registry.startup_route().unwrap(), routes[0].name());
}

#[test]
fn test_queries_fail_before_initialize() {
    let registry = RouteRegistry::new();
    assert!(matches!(registry.eligible_routes(), Err(RegistryError::NotInitialized)));
    assert!(matches!(registry.non_hidden_routes(), Err(RegistryError::NotInitialized)));
    assert!(matches!(registry.mount_entries(), Err(RegistryError::NotInitialized)));
    assert!(matches!(registry.find("home"), Err(RegistryError::NotInitialized)));
}

#[test]
fn test_eligible_routes_follow_policy() {
    let non_hidden = RouteRegistry::new();
    non_hidden
        .initialize(&mut common::XML.as_bytes(), &XmlLoader, &common::callbacks(), None)
        .unwrap();
    assert_eq!(
        common::names(non_hidden.eligible_routes().unwrap()),
        vec!["home", "RepoList"]
    );

    let optional = RouteRegistry::with_policy(EligibilityPolicy::AllOptionalParams);
    optional
        .initialize(&mut common::XML.as_bytes(), &XmlLoader, &common::callbacks(), None)
        .unwrap();
    assert_eq!(
        common::names(optional.eligible_routes().unwrap()),
        vec!["home", "RepoList", "hidden"]
    );
}

#[test]
fn test_mount_table_drives_rendering() {
    let registry = RouteRegistry::new();
    registry
        .initialize(&mut common::COMPACT.as_bytes(), &CompactLoader, &common::callbacks(), None)
        .unwrap();

    let mut surface = TextSurface::new();
    for entry in registry.mount_entries().unwrap() {
        let args: Vec<Option<String>> = entry
            .param_names
            .iter()
            .map(|p| Some(format!("<{p}>")))
            .collect();
        entry.render.call(&mut surface, &args);
    }

    assert_eq!(
        surface.lines(),
        ["Home", "RepoList", "App1", "<id>", "<name>", "Text", "<text>"]
    );
}

#[test]
fn test_navigation_through_bound_navigator() {
    let registry = RouteRegistry::new();
    let navigator = Arc::new(HistoryNavigator::new());
    registry
        .initialize(
            &mut common::COMPACT.as_bytes(),
            &CompactLoader,
            &common::callbacks(),
            Some(navigator.clone()),
        )
        .unwrap();

    let startup = registry.startup_route().unwrap().to_string();
    registry.navigate(&startup).unwrap();
    registry.navigate("app1/7").unwrap();

    assert_eq!(navigator.history(), vec!["RepoList", "app1/7"]);
    assert_eq!(navigator.back().as_deref(), Some("RepoList"));
}

#[test]
fn test_builder_path() {
    let registry = RouteRegistry::new();
    let navigator = Arc::new(HistoryNavigator::new());
    registry.initialize_with(Some(navigator.clone()), |routes| {
        routes
            .static_route("settings", |s| s.text("Settings"))
            .startup("dashboard", |s| s.text("Dashboard"))
            .hidden_dynamic_route("report", ["id", "page?"], |s, args| {
                s.text(args[0].as_deref().unwrap_or("?"));
            });
    });

    assert_eq!(registry.startup_route().unwrap(), "dashboard");
    assert_eq!(
        common::names(registry.non_hidden_routes().unwrap()),
        vec!["settings", "dashboard"]
    );

    let mut surface = TextSurface::new();
    registry
        .draw("report", &mut surface, &[Some("r-1".into()), None])
        .unwrap();
    assert_eq!(surface.lines(), ["r-1"]);

    registry.navigate("report/r-1").unwrap();
    assert_eq!(navigator.current().as_deref(), Some("report/r-1"));
}
