//! Configuration for the weather TCP server.
//!
//! Defaults can be overridden via environment variables:
//!
//! - `WEATHER_BIND_ADDR`       (default: "0.0.0.0")
//! - `WEATHER_PORT`            (default: 56700)
//! - `WEATHER_MAX_CLIENTS`     (default: 1024)
//! - `WEATHER_IO_TIMEOUT_SECS` (default: unset, no deadline)
//! - `WEATHER_INVALID_PORT`    (`exit` or `default`, default: `exit`)
//!
//! A port given as the first command-line argument beats `WEATHER_PORT`.

use std::env;
use std::str::FromStr;
use std::time::Duration;

use thiserror::Error;
use tracing::warn;
use weather_protocol::DEFAULT_PORT;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid value {value:?} for {key}")]
    InvalidEnv { key: &'static str, value: String },
}

/// What to do when the port argument cannot be used.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InvalidPortPolicy {
    /// Print a warning and stop with exit status 0.
    Exit,
    /// Print a warning and listen on the default port.
    UseDefault,
}

impl FromStr for InvalidPortPolicy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "exit" => Ok(InvalidPortPolicy::Exit),
            "default" => Ok(InvalidPortPolicy::UseDefault),
            other => Err(format!("expected `exit` or `default`, got {:?}", other)),
        }
    }
}

/// Server configuration.
#[derive(Debug, Clone)]
pub struct Config {
    /// IP address / interface to bind to (e.g. "0.0.0.0" or "127.0.0.1").
    pub bind_addr: String,

    /// TCP port to listen on.
    pub port: u16,

    /// Maximum number of simultaneously connected clients.
    pub max_clients: usize,

    /// Deadline for each read of a request and each write of a response.
    /// `None` waits as long as the transport does.
    pub io_timeout: Option<Duration>,

    pub invalid_port: InvalidPortPolicy,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            bind_addr: "0.0.0.0".to_string(),
            port: DEFAULT_PORT,
            max_clients: 1024,
            io_timeout: None,
            invalid_port: InvalidPortPolicy::Exit,
        }
    }
}

impl Config {
    /// Construct a `Config` from environment variables, falling back
    /// to defaults.
    pub fn from_env() -> Result<Self, ConfigError> {
        let defaults = Config::default();

        let bind_addr = env::var("WEATHER_BIND_ADDR").unwrap_or(defaults.bind_addr);
        let port = read_env_or_default("WEATHER_PORT", defaults.port)?;
        let max_clients = read_env_or_default("WEATHER_MAX_CLIENTS", defaults.max_clients)?;
        let io_timeout = read_env_opt::<u64>("WEATHER_IO_TIMEOUT_SECS")?.map(Duration::from_secs);
        let invalid_port = read_env_or_default("WEATHER_INVALID_PORT", defaults.invalid_port)?;

        Ok(Config {
            bind_addr,
            port,
            max_clients,
            io_timeout,
            invalid_port,
        })
    }

    /// Apply the port command-line argument, if any.
    ///
    /// Returns `None` when the argument is unusable and the policy says
    /// to stop. The caller should then exit with status 0.
    pub fn with_port_arg(mut self, arg: Option<&str>) -> Option<Self> {
        let Some(arg) = arg else {
            return Some(self);
        };

        match parse_port(arg) {
            Some(port) => {
                self.port = port;
                Some(self)
            }
            None => {
                warn!("invalid port number: {}", arg);
                match self.invalid_port {
                    InvalidPortPolicy::Exit => None,
                    InvalidPortPolicy::UseDefault => {
                        self.port = DEFAULT_PORT;
                        Some(self)
                    }
                }
            }
        }
    }

    /// Convenience: `addr:port` socket string.
    pub fn socket_addr_string(&self) -> String {
        format!("{}:{}", self.bind_addr, self.port)
    }
}

/// A usable listen port: 1..=65535. Negative, zero and non-numeric
/// arguments are rejected.
pub fn parse_port(arg: &str) -> Option<u16> {
    match arg.trim().parse::<u16>() {
        Ok(0) | Err(_) => None,
        Ok(port) => Some(port),
    }
}

fn read_env_or_default<T: FromStr>(key: &'static str, default: T) -> Result<T, ConfigError> {
    Ok(read_env_opt(key)?.unwrap_or(default))
}

fn read_env_opt<T: FromStr>(key: &'static str) -> Result<Option<T>, ConfigError> {
    match env::var(key) {
        Ok(val) => {
            let parsed = val.trim().parse::<T>();
            match parsed {
                Ok(v) => Ok(Some(v)),
                Err(_) => Err(ConfigError::InvalidEnv { key, value: val }),
            }
        }
        Err(_) => Ok(None),
    }
}
