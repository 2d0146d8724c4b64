//! Mauka Router - Main entrypoint.
//!
//! Loads the route configuration and answers match and completion queries
//! against it from the command line.

use clap::{Parser, Subcommand};
use mauka_router::config::{to_toml, ConfigLoader, LogConfig, RouterConfig, ENV_PREFIX};
use mauka_router::error::{
    get_error_reporting, set_error_reporter, ErrorContext, RouterError, RouterResult,
    TracingErrorReporter,
};
use mauka_router::route_table::RouteTable;
use std::path::PathBuf;
use std::process;
use std::sync::Arc;
use tracing::info;
use tracing_subscriber::EnvFilter;

/// Command line arguments for the Mauka router.
#[derive(Parser, Debug)]
#[clap(name = "Mauka Router", version, author, about)]
struct Args {
    /// Path to configuration file
    #[clap(short, long, value_parser)]
    config: Option<PathBuf>,

    /// Command to execute
    #[clap(subcommand)]
    command: Command,
}

/// Available subcommands.
#[derive(Subcommand, Debug)]
enum Command {
    /// Match a request path against the configured routes
    Match {
        /// Request path, starting with '/'
        path: String,

        /// Print the match as JSON
        #[clap(long)]
        json: bool,
    },

    /// List configured routes under a literal prefix
    Complete {
        /// Literal path prefix, starting with '/'
        prefix: String,
    },

    /// Validate the configuration file
    Validate,

    /// Generate a default configuration file
    GenConfig {
        /// Path to output configuration file
        #[clap(short, long, value_parser)]
        output: PathBuf,
    },
}

/// Initialize the logging system.
///
/// `RUST_LOG` wins over the configured level when set.
fn init_logging(log: &LogConfig) -> RouterResult<()> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&log.level));
    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_line_number(true)
        .with_file(true);

    let result = if log.json {
        tracing::subscriber::set_global_default(builder.json().finish())
    } else {
        tracing::subscriber::set_global_default(builder.finish())
    };

    result.map_err(|e| RouterError::Custom(format!("Failed to set global tracing subscriber: {e}")))
}

fn load_config(args: &Args) -> RouterResult<RouterConfig> {
    let loader = ConfigLoader::new(args.config.as_deref(), ENV_PREFIX);
    Ok(loader.load()?)
}

fn run(args: Args, config: RouterConfig) -> RouterResult<()> {
    match args.command {
        Command::Match { path, json } => {
            let table = RouteTable::from_config(&config)?;
            let Some(found) = table.lookup(&path) else {
                info!(path = %path, "no route matched");
                process::exit(2);
            };

            if json {
                println!("{}", serde_json::to_string_pretty(&found)?);
            } else {
                println!("{}", found.pattern);
                if let Some(tag) = &found.tag {
                    println!("tag: {tag}");
                }
                for param in &found.params {
                    println!("{} = {}", param.key, param.value);
                }
            }
            Ok(())
        }
        Command::Complete { prefix } => {
            let table = RouteTable::from_config(&config)?;
            for pattern in table.complete(&prefix) {
                println!("{pattern}");
            }
            Ok(())
        }
        Command::Validate => {
            let table = RouteTable::from_config(&config)?;
            info!(routes = table.len(), "Configuration validated successfully");
            Ok(())
        }
        Command::GenConfig { output } => {
            info!("Generating default configuration");
            let default_config = RouterConfig::default();

            if let Some(parent) = output.parent() {
                std::fs::create_dir_all(parent)?;
            }

            std::fs::write(&output, to_toml(&default_config)?)?;

            info!("Default configuration written to {:?}", output);
            Ok(())
        }
    }
}

/// Main entry point for the application.
fn main() {
    let args = Args::parse();

    // gen-config must work even when the configured file is broken
    let loaded = match args.command {
        Command::GenConfig { .. } => Ok(RouterConfig::default()),
        _ => load_config(&args),
    };
    let log = loaded
        .as_ref()
        .map(|config| config.log.clone())
        .unwrap_or_default();

    if let Err(e) = init_logging(&log) {
        eprintln!("{e}");
    }
    set_error_reporter(Arc::new(TracingErrorReporter));

    let outcome = loaded.and_then(|config| run(args, config));
    if let Err(e) = outcome {
        get_error_reporting().report(ErrorContext::new(e, "cli"));
        process::exit(1);
    }
}
