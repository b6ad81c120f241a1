// crates/weather-server/tests/config.rs
use weather_protocol::{DEFAULT_PORT, LEGACY_PORT};
use weather_server::config::{parse_port, Config, InvalidPortPolicy};
use weather_server::types::ConnectionTracker;

#[test]
fn defaults() {
    let config = Config::default();
    assert_eq!(config.bind_addr, "0.0.0.0");
    assert_eq!(config.port, DEFAULT_PORT);
    assert_eq!(config.port, 56700);
    assert!(config.io_timeout.is_none());
    assert_eq!(config.invalid_port, InvalidPortPolicy::Exit);
    assert_eq!(config.socket_addr_string(), "0.0.0.0:56700");
}

#[test]
fn port_argument_parsing() {
    assert_eq!(parse_port("57015"), Some(57015));
    assert_eq!(parse_port(" 8080 "), Some(8080));
    assert_eq!(parse_port("-1"), None);
    assert_eq!(parse_port("0"), None);
    assert_eq!(parse_port("70000"), None);
    assert_eq!(parse_port("abc"), None);
}

#[test]
fn valid_port_argument_overrides() {
    let config = Config::default().with_port_arg(Some("60000")).unwrap();
    assert_eq!(config.port, 60000);

    let config = Config::default().with_port_arg(Some("57015")).unwrap();
    assert_eq!(config.port, LEGACY_PORT);

    let config = Config::default().with_port_arg(None).unwrap();
    assert_eq!(config.port, DEFAULT_PORT);
}

// A bad port argument is a soft failure: either a clean stop or a
// fallback, never a hard error.
#[test]
fn invalid_port_with_exit_policy_stops() {
    let config = Config {
        invalid_port: InvalidPortPolicy::Exit,
        ..Config::default()
    };
    assert!(config.with_port_arg(Some("-5")).is_none());
}

#[test]
fn invalid_port_with_default_policy_falls_back() {
    let config = Config {
        port: 1234,
        invalid_port: InvalidPortPolicy::UseDefault,
        ..Config::default()
    };
    let config = config.with_port_arg(Some("-5")).unwrap();
    assert_eq!(config.port, DEFAULT_PORT);
}

#[test]
fn policy_parsing() {
    assert_eq!("exit".parse(), Ok(InvalidPortPolicy::Exit));
    assert_eq!("DEFAULT".parse(), Ok(InvalidPortPolicy::UseDefault));
    assert!("sometimes".parse::<InvalidPortPolicy>().is_err());
}

#[test]
fn tracker_caps_and_releases() {
    let tracker = ConnectionTracker::new();

    let a = tracker.try_acquire(2).unwrap();
    let b = tracker.try_acquire(2).unwrap();
    assert!(tracker.try_acquire(2).is_none());
    assert_eq!(tracker.active(), 2);

    drop(a);
    assert_eq!(tracker.active(), 1);
    let _c = tracker.try_acquire(2).unwrap();

    drop(b);
    assert_eq!(tracker.active(), 1);
}
