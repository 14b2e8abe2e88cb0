//! Shared fixtures for integration tests.

#![allow(dead_code)]

use route_registry::route::{RenderCallbacks, RouteSummary};
use route_registry::Route;

/// Callbacks that draw their composable name followed by each argument.
pub fn callbacks() -> RenderCallbacks {
    let mut callbacks = RenderCallbacks::new();
    for name in ["Home", "App1", "RepoList", "Text"] {
        callbacks = callbacks.with(name, move |surface, args| {
            surface.text(name);
            for arg in args {
                surface.text(arg.as_deref().unwrap_or("-"));
            }
        });
    }
    callbacks
}

pub fn summaries(routes: &[Route]) -> Vec<RouteSummary> {
    routes.iter().map(Route::summary).collect()
}

pub fn names<'a>(routes: impl IntoIterator<Item = &'a Route>) -> Vec<String> {
    routes.into_iter().map(|r| r.name().to_string()).collect()
}

/// The same four routes in every supported format.
pub const COMPACT: &str = "\
# navigation
home -> Home
app1 -> App1? [id, name?]
RepoList* -> RepoList
hidden -> Text? [text?]
";

pub const YAML: &str = r#"
startup: RepoList
routes:
  - name: home
    composable: Home
  - name: app1
    composable: App1
    hidden: true
    params: [id, name?]
  - name: RepoList
    composable: RepoList
  - name: hidden
    composable: Text
    hidden: true
    params: [text?]
"#;

pub const JSON: &str = r#"{
  "startup": "RepoList",
  "routes": [
    { "name": "home", "composable": "Home" },
    { "name": "app1", "composable": "App1", "hidden": true, "params": ["id", "name?"] },
    { "name": "RepoList", "composable": "RepoList" },
    { "name": "hidden", "composable": "Text", "hidden": true, "params": ["text?"] }
  ]
}"#;

pub const TOML: &str = r#"
startup = "RepoList"

[[routes]]
name = "home"
composable = "Home"

[[routes]]
name = "app1"
composable = "App1"
hidden = true
params = ["id", "name?"]

[[routes]]
name = "RepoList"
composable = "RepoList"

[[routes]]
name = "hidden"
composable = "Text"
hidden = true
params = ["text?"]
"#;

pub const XML: &str = r#"<?xml version="1.0" encoding="UTF-8"?>
<navigation>
  <startup>RepoList</startup>
  <route>
    <name>home</name>
    <composable>Home</composable>
  </route>
  <route>
    <name>app1</name>
    <composable>App1</composable>
    <hidden>true</hidden>
    <param>id</param>
    <param>name?</param>
  </route>
  <route>
    <name>RepoList</name>
    <composable>RepoList</composable>
  </route>
  <route>
    <name>hidden</name>
    <composable>Text</composable>
    <hidden>true</hidden>
    <param>text?</param>
  </route>
</navigation>
"#;
