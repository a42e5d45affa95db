//! Resource server.
//!
//! Serves the bundled employees resource over HTTP.
//!
//! ```text
//!     Client Request
//!     ──────────▶ axum::serve ──▶ request-id / trace / timeout layers
//!                                        │
//!                                        ▼
//!                                 resource Router
//!                                   │         │
//!                               /health   /employees[/:id]
//!                                            │
//!                                            ▼
//!                                   EmployeeResource
//! ```

use std::path::PathBuf;

use clap::Parser;
use tokio::net::TcpListener;

use resource_router::config::{read_config, validate_config, ConfigError, ServerConfig};
use resource_router::demo::app_router;
use resource_router::observability::init_logging;
use resource_router::{HttpServer, Shutdown};

#[derive(Parser)]
#[command(name = "resource-server")]
#[command(about = "Serve REST resources over HTTP", long_about = None)]
struct Cli {
    /// Path to a TOML configuration file.
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Override listener.bind_address.
    #[arg(short, long)]
    bind: Option<String>,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    // overrides first, then a single validation pass
    let mut config = match &cli.config {
        Some(path) => read_config(path)?,
        None => ServerConfig::default(),
    };
    if let Some(bind) = cli.bind {
        config.listener.bind_address = bind;
    }
    validate_config(&config).map_err(ConfigError::Validation)?;

    init_logging(&config.observability.filter_directive())?;

    tracing::info!(
        bind_address = %config.listener.bind_address,
        request_timeout_secs = config.timeouts.request_secs,
        employees_path = %config.demo.employees_path,
        "Configuration loaded"
    );

    let router = app_router(&config.demo)?;

    let listener = TcpListener::bind(&config.listener.bind_address).await?;
    tracing::info!(address = %listener.local_addr()?, "Listening for connections");

    let shutdown = Shutdown::new();
    let server = HttpServer::new(config, router);
    server.run(listener, shutdown.subscribe()).await?;

    tracing::info!("Shutdown complete");
    Ok(())
}
