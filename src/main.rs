//! route-registry
//!
//! Command-line front end for inspecting route declaration files.
//!
//! ```text
//! route-registry --routes app.routes list
//! route-registry --config settings.toml eligible
//! route-registry --routes nav.xml navigate user/42
//! ```

use std::fs::File;
use std::io::BufReader;
use std::path::PathBuf;
use std::sync::Arc;

use clap::{Parser, Subcommand};
use serde_json::{json, Value};

use route_registry::config::{load_settings, RegistrySettings};
use route_registry::observability::logging::init_logging;
use route_registry::registry::HistoryNavigator;
use route_registry::route::{RenderCallbacks, RouteSummary, TextSurface};
use route_registry::{RouteFormat, RouteRegistry};

#[derive(Parser)]
#[command(name = "route-registry")]
#[command(about = "Inspect navigation route declarations", long_about = None)]
struct Cli {
    /// Route declaration file
    #[arg(short, long, conflicts_with = "config")]
    routes: Option<PathBuf>,

    /// Settings file (TOML)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Declaration format (yaml, json, xml, compact, toml)
    #[arg(short, long)]
    format: Option<RouteFormat>,

    /// Log level, overriding the settings file
    #[arg(long)]
    log_level: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List every route, static routes first
    List,
    /// List routes shown in navigation affordances
    Eligible,
    /// Print the resolved startup route
    Startup,
    /// Print the mount table handed to the rendering layer
    Mounts,
    /// Navigate to a route and print the navigation history
    Navigate { route: String },
    /// Draw a route onto a text surface
    Render {
        route: String,
        /// Resolved parameter values, in declaration order
        args: Vec<String>,
    },
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    let mut settings = match (&cli.config, &cli.routes) {
        (Some(config), _) => load_settings(config)?,
        (None, Some(routes)) => {
            let mut settings = RegistrySettings::default();
            settings.routes.path = routes.clone();
            settings
        }
        (None, None) => return Err("either --routes or --config is required".into()),
    };
    if let Some(format) = cli.format {
        settings.routes.format = Some(format);
    }

    let level = cli
        .log_level
        .as_deref()
        .unwrap_or(&settings.observability.log_level);
    init_logging(level);

    let format = settings.routes.resolved_format().ok_or_else(|| {
        format!(
            "cannot infer route format from '{}'; pass --format",
            settings.routes.path.display()
        )
    })?;

    tracing::info!(
        routes = %settings.routes.path.display(),
        %format,
        eligibility = ?settings.registry.eligibility,
        "Loading route declarations"
    );

    let navigator = Arc::new(HistoryNavigator::new());
    let registry = RouteRegistry::with_policy(settings.registry.eligibility);
    let mut source = BufReader::new(File::open(&settings.routes.path)?);
    registry.initialize(
        &mut source,
        format.loader().as_ref(),
        &builtin_callbacks(),
        Some(navigator.clone()),
    )?;

    let output = match cli.command {
        Commands::List => summaries(registry.all_routes()?.into_iter().map(|r| r.summary())),
        Commands::Eligible => {
            summaries(registry.eligible_routes()?.into_iter().map(|r| r.summary()))
        }
        Commands::Startup => json!({ "startup": registry.startup_route()? }),
        Commands::Mounts => Value::Array(
            registry
                .mount_entries()?
                .into_iter()
                .map(|entry| json!({ "path": entry.path_key, "params": entry.param_names }))
                .collect(),
        ),
        Commands::Navigate { route } => {
            registry.navigate(registry.startup_route()?)?;
            registry.navigate(&route)?;
            json!({ "history": navigator.history() })
        }
        Commands::Render { route, args } => {
            let args: Vec<Option<String>> = args.into_iter().map(Some).collect();
            let mut surface = TextSurface::new();
            registry.draw(&route, &mut surface, &args)?;
            json!({ "route": route, "output": surface.into_lines() })
        }
    };

    println!("{}", serde_json::to_string_pretty(&output)?);
    Ok(())
}

/// Views available to declarations loaded by the CLI.
///
/// `Text` echoes its arguments; every other composable name draws the
/// fallback view.
fn builtin_callbacks() -> RenderCallbacks {
    RenderCallbacks::new().with("Text", |surface, args| {
        for arg in args {
            surface.text(arg.as_deref().unwrap_or(""));
        }
    })
}

fn summaries(routes: impl Iterator<Item = RouteSummary>) -> Value {
    Value::Array(
        routes
            .map(|summary| serde_json::to_value(summary).unwrap_or(Value::Null))
            .collect(),
    )
}
