//! Compact line-oriented route declarations.
//!
//! ```text
//! # comment
//! home -> Home
//! app1 -> App1? [id, name?]
//! RepoList* -> RepoList
//! ```
//!
//! # Line Grammar
//! - `<name>[*] -> <composable>[?][ [param, param?, ...]]`
//! - `*` after the name marks the startup route; the last marked line wins
//! - the composable name is everything before the first `?` on the right
//! - any `?` on the right-hand side marks the route hidden
//! - params come from the first `[...]` group, trimmed, empties dropped
//!
//! # Design Decisions
//! - Blank lines, comments and lines without exactly one `->` are skipped
//! - Lines that are not valid UTF-8 are skipped, never fatal
//! - Params are kept verbatim, including their `?` markers

use std::io::{BufRead, BufReader, Read};

use crate::error::LoadError;
use crate::loader::{LoadedRoutes, RouteFormat, RouteLoader, DEFAULT_STARTUP};
use crate::observability::metrics;
use crate::route::{DynamicRoute, RenderCallbacks, Route, StaticRoute};

/// Loader for the compact line format.
#[derive(Debug, Clone, Copy, Default)]
pub struct CompactLoader;

/// One parsed declaration line.
#[derive(Debug, Clone, PartialEq, Eq)]
struct Declaration<'a> {
    name: &'a str,
    startup: bool,
    composable: &'a str,
    hidden: bool,
    params: Vec<&'a str>,
}

impl RouteLoader for CompactLoader {
    fn format(&self) -> RouteFormat {
        RouteFormat::Compact
    }

    fn load_routes(
        &self,
        callbacks: &RenderCallbacks,
        source: &mut dyn Read,
    ) -> Result<LoadedRoutes, LoadError> {
        let mut startup = DEFAULT_STARTUP.to_string();
        let mut routes = Vec::new();

        for (number, bytes) in BufReader::new(source).split(b'\n').enumerate() {
            let bytes = bytes?;
            let Ok(line) = std::str::from_utf8(&bytes) else {
                tracing::debug!(line = number + 1, "Skipping route line that is not valid UTF-8");
                metrics::record_entry_skipped(RouteFormat::Compact.as_str());
                continue;
            };
            let Some(decl) = parse_line(line) else {
                let trimmed = line.trim();
                if !trimmed.is_empty() && !trimmed.starts_with('#') {
                    tracing::debug!(
                        line = number + 1,
                        content = %trimmed,
                        "Skipping malformed route line"
                    );
                    metrics::record_entry_skipped(RouteFormat::Compact.as_str());
                }
                continue;
            };

            if decl.startup {
                startup = decl.name.to_string();
            }

            let render = callbacks.resolve(decl.composable);
            let route: Route = if decl.params.is_empty() {
                StaticRoute::new(decl.name, render, decl.hidden).into()
            } else {
                DynamicRoute::new(decl.name, render, decl.hidden, decl.params).into()
            };
            metrics::record_route_loaded(RouteFormat::Compact.as_str(), route.kind());
            routes.push(route);
        }

        Ok(LoadedRoutes::new(startup, routes))
    }
}

/// Parse a single line; `None` for blanks, comments and malformed lines.
fn parse_line(line: &str) -> Option<Declaration<'_>> {
    let line = line.trim();
    if line.is_empty() || line.starts_with('#') {
        return None;
    }

    let mut parts = line.split("->");
    let (left, right) = match (parts.next(), parts.next(), parts.next()) {
        (Some(left), Some(right), None) => (left.trim(), right.trim()),
        _ => return None,
    };

    let startup = left.ends_with('*');
    let name = left.strip_suffix('*').unwrap_or(left).trim();

    let composable = right.split('?').next().unwrap_or(right).trim();
    let hidden = right.contains('?');

    let params = match right.split_once('[') {
        Some((_, rest)) => match rest.split_once(']') {
            Some((group, _)) => group
                .split(',')
                .map(str::trim)
                .filter(|p| !p.is_empty())
                .collect(),
            None => Vec::new(),
        },
        None => Vec::new(),
    };

    Some(Declaration {
        name,
        startup,
        composable,
        hidden,
        params,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::route::{RouteKind, TextSurface, UNKNOWN_ROUTE_TEXT};

    fn callbacks() -> RenderCallbacks {
        RenderCallbacks::new()
            .with("Home", |s, _| s.text("Home"))
            .with("App1", |s, _| s.text("App1"))
            .with("RepoList", |s, _| s.text("RepoList"))
            .with("Text", |s, _| s.text("Text"))
    }

    fn load(text: &str) -> LoadedRoutes {
        CompactLoader.load_routes(&callbacks(), &mut text.as_bytes()).unwrap()
    }

    #[test]
    fn test_load_reference_config() {
        let loaded = load(
            "routes:\n  home -> Home\n  app1 -> App1? [id, name?]\n  RepoList* -> RepoList\n  hidden -> Text? [text?]\n",
        );

        assert_eq!(loaded.startup, "RepoList");
        assert_eq!(loaded.routes.len(), 4);

        let home = &loaded.routes[0];
        assert_eq!(
            (home.name(), home.kind(), home.is_hidden()),
            ("home", RouteKind::Static, false)
        );

        let app1 = &loaded.routes[1];
        assert_eq!(app1.name(), "app1");
        assert_eq!(app1.kind(), RouteKind::Dynamic);
        assert!(app1.is_hidden());
        assert_eq!(app1.params(), ["id".to_string(), "name?".to_string()]);

        let repo_list = &loaded.routes[2];
        assert_eq!(repo_list.name(), "RepoList");
        assert_eq!(repo_list.kind(), RouteKind::Static);
        assert!(!repo_list.is_hidden());

        let hidden = &loaded.routes[3];
        assert_eq!(hidden.name(), "hidden");
        assert!(hidden.is_hidden());
        assert_eq!(hidden.params(), ["text?".to_string()]);
    }

    #[test]
    fn test_callbacks_resolved_by_composable() {
        let loaded = load("app1 -> App1? [id]\nother -> Nope\n");

        let mut surface = TextSurface::new();
        loaded.routes[0].draw(&mut surface, &[Some("1".into())]);
        loaded.routes[1].draw(&mut surface, &[]);
        assert_eq!(surface.lines(), ["App1", UNKNOWN_ROUTE_TEXT]);
    }

    #[test]
    fn test_skips_blank_comment_and_malformed_lines() {
        let loaded = load("\n   \n# home -> Home\n  # x -> y\nno arrow here\na -> b -> c\nok -> Home\n");
        assert_eq!(loaded.routes.len(), 1);
        assert_eq!(loaded.routes[0].name(), "ok");
        assert_eq!(loaded.startup, DEFAULT_STARTUP);
    }

    #[test]
    fn test_last_startup_marker_wins() {
        let loaded = load("a* -> Home\nb* -> Home\nc -> Home\n");
        assert_eq!(loaded.startup, "b");
    }

    #[test]
    fn test_params_trimmed_and_empties_dropped() {
        let decl = parse_line("  user ->   User? [ id ,, tab? , ] ").unwrap();
        assert_eq!(decl.composable, "User");
        assert_eq!(decl.params, vec!["id", "tab?"]);
        assert!(decl.hidden);
    }

    #[test]
    fn test_composable_runs_to_first_question_mark() {
        let decl = parse_line("user -> User [id]").unwrap();
        assert_eq!(decl.composable, "User [id]");
        assert_eq!(decl.params, vec!["id"]);
        assert!(!decl.hidden);

        // `?` inside the params still marks the route hidden
        let decl = parse_line("user -> User [id?]").unwrap();
        assert_eq!(decl.composable, "User [id");
        assert_eq!(decl.params, vec!["id?"]);
        assert!(decl.hidden);
    }

    #[test]
    fn test_bracket_without_marker_uses_fallback() {
        let callbacks = RenderCallbacks::new().with("User", |s, _| s.text("User"));
        let loaded = CompactLoader
            .load_routes(&callbacks, &mut "user -> User [id]\n".as_bytes())
            .unwrap();

        let mut surface = TextSurface::new();
        loaded.routes[0].draw(&mut surface, &[Some("1".into())]);
        assert_eq!(surface.lines(), [UNKNOWN_ROUTE_TEXT]);
    }

    #[test]
    fn test_invalid_utf8_line_is_skipped() {
        let mut input = b"home -> Home\nbad ".to_vec();
        input.extend_from_slice(&[0xff, 0xfe]);
        input.extend_from_slice(b" -> Text\nabout* -> Text\r\n");

        let loaded = CompactLoader
            .load_routes(&callbacks(), &mut input.as_slice())
            .unwrap();
        let names: Vec<_> = loaded.routes.iter().map(Route::name).collect();
        assert_eq!(names, vec!["home", "about"]);
        assert_eq!(loaded.startup, "about");
    }

    #[test]
    fn test_unclosed_bracket_has_no_params() {
        let decl = parse_line("user -> User [id").unwrap();
        assert!(decl.params.is_empty());
        assert!(!decl.hidden);
    }

    #[test]
    fn test_empty_bracket_is_static() {
        let loaded = load("user -> User []\n");
        assert_eq!(loaded.routes[0].kind(), RouteKind::Static);
    }

    #[test]
    fn test_startup_name_is_trimmed() {
        let decl = parse_line("home  * -> Home").unwrap();
        assert!(decl.startup);
        assert_eq!(decl.name, "home");
    }

    #[test]
    fn test_empty_input() {
        let loaded = load("");
        assert!(loaded.routes.is_empty());
        assert_eq!(loaded.startup, DEFAULT_STARTUP);
    }
}
