// crates/weather-client/src/network.rs

use std::io;
use std::net::SocketAddr;

use thiserror::Error;
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::TcpStream;
use tracing::{debug, info};

use weather_core::{WeatherRequest, WeatherResponse};
use weather_protocol::{decode_response, encode_request, ResponseFrame, RESPONSE_LEN};

#[derive(Debug, Error)]
pub enum ClientError {
    #[error("failed to connect to {addr}: {source}")]
    Connect {
        addr: String,
        #[source]
        source: io::Error,
    },

    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("server closed after {received} of {expected} response bytes")]
    TruncatedResponse { received: usize, expected: usize },

    #[error("timed out")]
    Timeout,
}

/// One TCP connection to a weather server.
///
/// Requests are answered in order; several may be sent on the same
/// connection.
pub struct WeatherConnection {
    stream: TcpStream,
    peer: SocketAddr,
}

impl WeatherConnection {
    /// Resolve `host` (address or hostname) and connect.
    pub async fn connect(host: &str, port: u16) -> Result<Self, ClientError> {
        let addr = format!("{}:{}", host, port);
        debug!("Connecting to {}...", addr);

        let stream = TcpStream::connect((host, port))
            .await
            .map_err(|source| ClientError::Connect {
                addr: addr.clone(),
                source,
            })?;
        stream.set_nodelay(true)?;
        let peer = stream.peer_addr()?;

        info!("Connected to {}", peer);
        Ok(WeatherConnection { stream, peer })
    }

    pub fn peer_addr(&self) -> SocketAddr {
        self.peer
    }

    /// Send one request and wait for its response.
    pub async fn request(&mut self, req: &WeatherRequest) -> Result<WeatherResponse, ClientError> {
        let frame = encode_request(req);
        self.stream.write_all(&frame).await?;
        self.stream.flush().await?;
        debug!(kind = req.kind, city = %req.city, "request sent");

        let frame = self.read_response().await?;
        let resp = decode_response(&frame);
        debug!(status = resp.status.code(), value = resp.value, "response received");
        Ok(resp)
    }

    async fn read_response(&mut self) -> Result<ResponseFrame, ClientError> {
        let mut buf = [0u8; RESPONSE_LEN];
        let mut filled = 0;

        while filled < RESPONSE_LEN {
            let n = self.stream.read(&mut buf[filled..]).await?;
            if n == 0 {
                return Err(ClientError::TruncatedResponse {
                    received: filled,
                    expected: RESPONSE_LEN,
                });
            }
            filled += n;
        }

        Ok(buf)
    }
}
