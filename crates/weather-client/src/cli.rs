use clap::Parser;
use weather_protocol::DEFAULT_PORT;

/// Ask a weather server for one measurement.
#[derive(Debug, Parser)]
#[command(name = "weather-client", version)]
#[command(about = "Query temperature (t), humidity (h), wind (w) or pressure (p) for a city")]
pub struct Cli {
    /// Server address or hostname
    #[arg(short, long, default_value = "127.0.0.1")]
    pub server: String,

    /// Server port
    #[arg(short, long, default_value_t = DEFAULT_PORT)]
    pub port: u16,

    /// Query as "<kind> <city>", e.g. "t Roma"
    #[arg(short, long, value_name = "QUERY")]
    pub request: String,

    /// Give up after this many seconds (connect + exchange)
    #[arg(short, long, value_name = "SECS")]
    pub timeout: Option<u64>,

    /// Enable debug logging
    #[arg(short, long)]
    pub debug: bool,
}
