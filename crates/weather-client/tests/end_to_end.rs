// crates/weather-client/tests/end_to_end.rs
use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;

use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::TcpListener;

use weather_client::{query, ClientError, WeatherConnection};
use weather_core::{MeasurementKind, ResponseBuilder, Status, WeatherRequest};
use weather_protocol::text_codec::{CITY_UNAVAILABLE_MSG, INVALID_REQUEST_MSG};
use weather_server::config::Config;
use weather_server::server::serve;

async fn start_server() -> SocketAddr {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();

    tokio::spawn(serve(listener, Config::default(), Arc::new(ResponseBuilder::new())));
    addr
}

#[tokio::test]
async fn temperature_for_known_city() {
    let addr = start_server().await;

    let outcome = query("127.0.0.1", addr.port(), "t Roma", None).await.unwrap();
    assert_eq!(outcome.response.status, Status::Success);
    assert_eq!(outcome.response.kind, b't');
    assert!(MeasurementKind::Temperature.contains(outcome.response.value));

    let line = outcome.render();
    assert_eq!(line, format!("Roma: Temperatura = {:.1}°C", outcome.response.value));
}

#[tokio::test]
async fn unknown_city_prints_fixed_message() {
    let addr = start_server().await;

    let outcome = query("127.0.0.1", addr.port(), "h Atlantis", None).await.unwrap();
    assert_eq!(outcome.response.status, Status::CityUnavailable);
    assert_eq!(outcome.render(), CITY_UNAVAILABLE_MSG);
}

#[tokio::test]
async fn unknown_kind_prints_fixed_message() {
    let addr = start_server().await;

    let outcome = query("127.0.0.1", addr.port(), "x Roma", None).await.unwrap();
    assert_eq!(outcome.response.status, Status::InvalidRequest);
    assert_eq!(outcome.render(), INVALID_REQUEST_MSG);

    let outcome = query("127.0.0.1", addr.port(), "   ", None).await.unwrap();
    assert_eq!(outcome.response.status, Status::InvalidRequest);
}

#[tokio::test]
async fn two_requests_on_one_connection() {
    let addr = start_server().await;

    let mut conn = WeatherConnection::connect("127.0.0.1", addr.port()).await.unwrap();
    assert_eq!(conn.peer_addr(), addr);

    let first = conn.request(&WeatherRequest::new(b't', "Bari")).await.unwrap();
    assert_eq!(first.status, Status::Success);
    assert_eq!(first.kind, b't');
    assert!(MeasurementKind::Temperature.contains(first.value));

    let second = conn.request(&WeatherRequest::new(b'w', "Milano")).await.unwrap();
    assert_eq!(second.status, Status::Success);
    assert_eq!(second.kind, b'w');
    assert!(MeasurementKind::Wind.contains(second.value));
}

#[tokio::test]
async fn clients_are_served_concurrently() {
    let addr = start_server().await;

    // An idle connection must not hold up the next client.
    let _idle = WeatherConnection::connect("127.0.0.1", addr.port()).await.unwrap();

    let outcome = query(
        "127.0.0.1",
        addr.port(),
        "p Napoli",
        Some(Duration::from_secs(5)),
    )
    .await
    .unwrap();
    assert_eq!(outcome.response.status, Status::Success);
    assert!(MeasurementKind::Pressure.contains(outcome.response.value));
}

#[tokio::test]
async fn hostname_is_resolved() {
    let addr = start_server().await;

    let outcome = query("localhost", addr.port(), "w Genova", Some(Duration::from_secs(5)))
        .await
        .unwrap();
    assert_eq!(outcome.response.status, Status::Success);
}

#[tokio::test]
async fn refused_connection_is_an_error() {
    // Grab a free port, then release it so nothing listens there.
    let port = {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        listener.local_addr().unwrap().port()
    };

    let err = query("127.0.0.1", port, "t Roma", None).await.unwrap_err();
    assert!(matches!(err, ClientError::Connect { .. }), "{:?}", err);
}

#[tokio::test]
async fn short_response_is_an_error() {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let port = listener.local_addr().unwrap().port();

    tokio::spawn(async move {
        let (mut stream, _) = listener.accept().await.unwrap();
        let mut buf = [0u8; 65];
        stream.read_exact(&mut buf).await.unwrap();
        stream.write_all(&[0, 0, 0]).await.unwrap();
    });

    let err = query("127.0.0.1", port, "t Roma", None).await.unwrap_err();
    match err {
        ClientError::TruncatedResponse { received, expected } => {
            assert_eq!(received, 3);
            assert_eq!(expected, 9);
        }
        other => panic!("expected truncated response, got {:?}", other),
    }
}
