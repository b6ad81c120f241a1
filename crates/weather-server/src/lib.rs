//! weather-server
//!
//! Multi-client async TCP server for weather queries.

pub mod config;
pub mod connection;
pub mod server;
pub mod types;
