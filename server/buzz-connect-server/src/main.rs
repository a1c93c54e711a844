use std::path::PathBuf;

use clap::Parser;
use colored::*;
use tracing::{info, warn};

use buzz_connect_server::{create_app, BuzzConnectServer, Settings};
use error_common::{log_error, BuzzConnectError, Result};
use logger_redacted::{init_tracing, LoggerConfig};

/// Buzz Connect HTTP Server
#[derive(Parser, Debug)]
#[command(name = "buzz-connect-server")]
#[command(about = "Social account connection API server")]
struct Args {
    /// Server bind address, overrides server.host
    #[arg(long, env = "BUZZ_HOST")]
    host: Option<String>,

    /// Server port, overrides server.port
    #[arg(short, long, env = "BUZZ_PORT")]
    port: Option<u16>,

    /// Configuration file path (TOML, YAML or JSON)
    #[arg(short, long, env = "BUZZ_CONFIG", default_value = "buzz-connect.toml")]
    config: PathBuf,

    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,
}

#[tokio::main]
async fn main() -> Result<()> {
    // .env is optional
    let _ = dotenvy::dotenv();

    let args = Args::parse();

    init_tracing(&LoggerConfig::from_env(args.verbose))
        .map_err(|e| BuzzConnectError::InternalError(format!("Tracing init failed: {e}")))?;

    if let Err(e) = run(args).await {
        log_error("startup", &e);
        return Err(e);
    }

    Ok(())
}

async fn run(args: Args) -> Result<()> {
    info!("🐝 {}", "Starting Buzz Connect HTTP Server".bright_cyan());
    info!("📋 Version: {}", env!("CARGO_PKG_VERSION").bright_white());

    let mut settings = Settings::load(Some(args.config.as_path()))?;
    if let Some(host) = args.host {
        settings.server.host = host;
    }
    if let Some(port) = args.port {
        settings.server.port = port;
    }
    settings.validate()?;

    let is_production = std::env::var("BUZZ_ENV").is_ok_and(|env| env == "production");
    if is_production && settings.oauth.uses_dev_secret() {
        return Err(BuzzConnectError::ConfigError(
            "oauth.state_secret must be set in production".to_string(),
        ));
    }

    if settings.server.cors_origins.is_empty() {
        warn!("No CORS origins configured; allowing any origin");
    }

    let addr = settings.bind_address();
    info!("🌐 Bind address: {}", addr.bright_yellow());

    let server = BuzzConnectServer::new(settings)?;
    let app = create_app(server)?;

    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .map_err(|e| BuzzConnectError::NetworkError(format!("Failed to bind to {addr}: {e}")))?;

    info!("🚀 {}", format!("Buzz Connect server running on http://{addr}").bright_green());
    info!("📋 {}", format!("Health check available at: http://{addr}/health").bright_blue());
    info!("🔐 {}", format!("Twitter authentication: http://{addr}/auth").bright_blue());
    info!("📖 {}", format!("API docs: http://{addr}/docs").bright_blue());

    axum::serve(listener, app)
        .await
        .map_err(|e| BuzzConnectError::ServerError(format!("HTTP server error: {e}")))
}
