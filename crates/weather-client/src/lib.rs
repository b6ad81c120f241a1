//! weather-client
//!
//! One-shot client: parse a `"<kind> <city>"` query, send it, wait for
//! the single response, render it as a line of text.

pub mod cli;
pub mod network;

use std::time::Duration;

use weather_core::{City, WeatherRequest, WeatherResponse};
use weather_protocol::text_codec::{format_response, parse_query};

pub use network::{ClientError, WeatherConnection};

/// A completed query.
#[derive(Debug, Clone)]
pub struct QueryOutcome {
    /// City as sent (after truncation).
    pub city: City,
    pub response: WeatherResponse,
}

impl QueryOutcome {
    /// The line shown to the user.
    pub fn render(&self) -> String {
        format_response(self.city.as_str(), &self.response)
    }
}

/// Build the request for a query line.
///
/// A blank query becomes a NUL kind, which the server rejects as an
/// invalid request.
pub fn request_for(query: &str) -> WeatherRequest {
    parse_query(query).unwrap_or_else(|| WeatherRequest::new(0, ""))
}

/// Connect, send one request, return the response.
pub async fn query(
    server: &str,
    port: u16,
    line: &str,
    timeout: Option<Duration>,
) -> Result<QueryOutcome, ClientError> {
    let req = request_for(line);

    let exchange = async {
        let mut conn = WeatherConnection::connect(server, port).await?;
        conn.request(&req).await
    };

    let response = match timeout {
        Some(limit) => tokio::time::timeout(limit, exchange)
            .await
            .map_err(|_| ClientError::Timeout)??,
        None => exchange.await?,
    };

    Ok(QueryOutcome {
        city: req.city,
        response,
    })
}
