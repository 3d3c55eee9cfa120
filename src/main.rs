//! MedFinder: a local doctor finder server
//!
//! This is the main entry point for the application.

use anyhow::{Context, Result};
use medfinder::{
    config,
    web::{create_router, AppState},
};
use std::net::SocketAddr;
use std::path::PathBuf;
use tracing::info;
use tracing_subscriber::EnvFilter;

/// What the command line asked for
enum Command {
    Serve { config: Option<PathBuf> },
    Help,
    Version,
}

#[tokio::main]
async fn main() -> Result<()> {
    let config_path = match parse_args(std::env::args().skip(1))? {
        Command::Serve { config } => config,
        Command::Help => {
            print_usage();
            return Ok(());
        }
        Command::Version => {
            println!("medfinder {}", medfinder::VERSION);
            return Ok(());
        }
    };

    let settings_path = config::locate(config_path)?;
    let settings = config::load(settings_path.as_deref())?;
    init_logging(settings.general.debug);

    info!("Starting MedFinder v{}", medfinder::VERSION);
    match settings_path {
        Some(path) => info!("Loaded settings from: {}", path.display()),
        None => info!("No settings file found, using defaults"),
    }
    info!("Loaded configuration for instance: {}", settings.general.instance_name);

    let addr = SocketAddr::new(
        settings
            .server
            .bind_address
            .parse()
            .with_context(|| format!("Invalid bind address: {}", settings.server.bind_address))?,
        settings.server.port,
    );

    let state = AppState::new(settings);
    info!("Application state initialized");

    let app = create_router(state);

    info!("Starting server on http://{}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

fn init_logging(debug: bool) {
    let default_level = if debug { "debug" } else { "info" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .init();
}

fn parse_args<I: Iterator<Item = String>>(mut args: I) -> Result<Command> {
    let mut config = None;

    while let Some(arg) = args.next() {
        match arg.as_str() {
            "-c" | "--config" => {
                let path = args
                    .next()
                    .with_context(|| format!("{} requires a file path", arg))?;
                config = Some(PathBuf::from(path));
            }
            "-h" | "--help" => return Ok(Command::Help),
            "-V" | "--version" => return Ok(Command::Version),
            other => anyhow::bail!("Unknown argument: {} (see --help)", other),
        }
    }

    Ok(Command::Serve { config })
}

/// Print usage information
fn print_usage() {
    println!(
        r#"
MedFinder v{}
A local doctor finder server

USAGE:
    medfinder [OPTIONS]

OPTIONS:
    -c, --config <FILE>    Path to configuration file
    -h, --help             Print help information
    -V, --version          Print version information

ENVIRONMENT VARIABLES:
    MEDFINDER_SETTINGS_PATH  Path to settings.yml
    MEDFINDER_DEBUG          Enable debug logging (1/0, true/false)
    MEDFINDER_PORT           Server port
    MEDFINDER_BIND_ADDRESS   Bind address
    MEDFINDER_STATIC_DIR     Directory served for non-API paths
    MEDFINDER_CACHE_TTL      Population cache lifetime in seconds
    MEDFINDER_RNG_SEED       Fixed seed for generated doctors
    RUST_LOG                 Log filter (overrides the debug flag)
"#,
        medfinder::VERSION
    );
}
