// crates/weather-server/tests/server.rs
use std::io;
use std::sync::Arc;

use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::{TcpListener, TcpStream};

use weather_core::{ResponseBuilder, Status, WeatherRequest};
use weather_protocol::{decode_response, encode_request, RESPONSE_LEN};
use weather_server::config::Config;
use weather_server::server::{accept_retrying, serve};

#[tokio::test]
async fn failed_accepts_are_retried() {
    let mut attempts = 0;

    let accepted = accept_retrying(|| {
        attempts += 1;
        let result = match attempts {
            1 => Err(io::Error::from(io::ErrorKind::ConnectionAborted)),
            2 => Err(io::Error::new(io::ErrorKind::Other, "too many open files")),
            _ => Ok(attempts),
        };
        std::future::ready(result)
    })
    .await;

    assert_eq!(accepted, 3);
    assert_eq!(attempts, 3);
}

#[tokio::test]
async fn aborted_client_does_not_stop_the_server() {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    let server = tokio::spawn(serve(listener, Config::default(), Arc::new(ResponseBuilder::new())));

    // Half a request, then gone.
    {
        let mut stream = TcpStream::connect(addr).await.unwrap();
        stream.write_all(&[b't', b'R']).await.unwrap();
    }

    let mut stream = TcpStream::connect(addr).await.unwrap();
    stream
        .write_all(&encode_request(&WeatherRequest::new(b'h', "Palermo")))
        .await
        .unwrap();
    let mut buf = [0u8; RESPONSE_LEN];
    stream.read_exact(&mut buf).await.unwrap();
    assert_eq!(decode_response(&buf).status, Status::Success);

    assert!(!server.is_finished());
    server.abort();
}
