//! Binary TCP server for weather queries.

use std::process::ExitCode;

use clap::Parser;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

use weather_server::config::Config;
use weather_server::server;

#[derive(Parser)]
#[command(name = "weather-server")]
#[command(about = "Answer temperature, humidity, wind and pressure queries over TCP")]
struct Cli {
    /// Port to listen on (default 56700)
    #[arg(allow_hyphen_values = true)]
    port: Option<String>,
}

/// Exit status for socket setup failures (-1 as a byte).
const SETUP_FAILURE: u8 = 255;

#[tokio::main]
async fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let cli = Cli::parse();

    let config = match Config::from_env() {
        Ok(config) => config,
        Err(e) => {
            error!("{}", e);
            return ExitCode::from(SETUP_FAILURE);
        }
    };

    let Some(config) = config.with_port_arg(cli.port.as_deref()) else {
        return ExitCode::SUCCESS;
    };

    info!(
        "Starting weather-server on {}:{} (max_clients = {})",
        config.bind_addr, config.port, config.max_clients
    );

    match server::run(config).await {
        Ok(()) => {
            info!("Server stopped");
            ExitCode::SUCCESS
        }
        Err(e) => {
            error!("{:#}", e);
            ExitCode::from(SETUP_FAILURE)
        }
    }
}
