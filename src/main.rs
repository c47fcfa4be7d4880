//! probe-service entry point.
//!
//! Parses the command line, loads configuration, initializes tracing, builds
//! the router and serves it until interrupted.

use std::process::ExitCode;

use clap::Parser;

use probe_service::config::{AppConfig, ConfigError, DEFAULT_CONFIG_PATH};
use probe_service::{create_router, logging, server, AppState};

/// Minimal web service exposing greeting, health and runtime-info endpoints
#[derive(Parser, Debug)]
#[command(name = "probe-service", version, about)]
struct Args {
    /// Path to configuration file (optional unless given explicitly)
    #[arg(short, long)]
    config: Option<String>,

    /// Address to bind (default 0.0.0.0)
    #[arg(long)]
    host: Option<String>,

    /// Port to listen on (default 5000)
    #[arg(short, long, env = "PORT")]
    port: Option<u16>,

    /// Log level filter (e.g., "probe_service=debug,tower_http=info")
    #[arg(short, long)]
    log_level: Option<String>,

    /// Log format: text or json
    #[arg(long)]
    log_format: Option<String>,
}

#[tokio::main]
async fn main() -> ExitCode {
    let args = Args::parse();

    let config = match load_config(&args) {
        Ok(config) => config,
        Err(e) => {
            // No subscriber yet, report directly on stderr
            eprintln!("probe-service: {}", e);
            return ExitCode::FAILURE;
        }
    };

    let filter = logging::resolve_filter(args.log_level, std::env::var("RUST_LOG").ok());
    logging::init(&filter, &config.logging);

    tracing::info!(
        version = env!("CARGO_PKG_VERSION"),
        environment_var = %config.app.environment_var,
        "Loaded configuration"
    );

    match run(config).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::error!(error = %e, "Fatal server error");
            ExitCode::FAILURE
        }
    }
}

fn load_config(args: &Args) -> Result<AppConfig, ConfigError> {
    let mut config = match &args.config {
        Some(path) => AppConfig::load(path, true)?,
        None => AppConfig::load(DEFAULT_CONFIG_PATH, false)?,
    };
    config.apply_overrides(args.host.clone(), args.port, args.log_format.clone())?;
    Ok(config)
}

async fn run(config: AppConfig) -> Result<(), Box<dyn std::error::Error>> {
    let addr = config.socket_addr()?;
    let app = create_router(AppState::new(config));

    let listener = server::bind(addr).await?;
    server::serve(listener, app, server::shutdown_signal()).await?;

    Ok(())
}
