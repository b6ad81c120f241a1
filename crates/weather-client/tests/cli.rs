// crates/weather-client/tests/cli.rs
use clap::Parser;

use weather_client::cli::Cli;
use weather_client::request_for;

#[test]
fn defaults() {
    let cli = Cli::try_parse_from(["weather-client", "-r", "t Roma"]).unwrap();
    assert_eq!(cli.server, "127.0.0.1");
    assert_eq!(cli.port, 56700);
    assert_eq!(cli.request, "t Roma");
    assert!(cli.timeout.is_none());
    assert!(!cli.debug);
}

#[test]
fn all_flags() {
    let cli = Cli::try_parse_from([
        "weather-client",
        "-s",
        "meteo.example.org",
        "-p",
        "57015",
        "-r",
        "w Milano",
        "-t",
        "3",
        "-d",
    ])
    .unwrap();
    assert_eq!(cli.server, "meteo.example.org");
    assert_eq!(cli.port, 57015);
    assert_eq!(cli.request, "w Milano");
    assert_eq!(cli.timeout, Some(3));
    assert!(cli.debug);
}

#[test]
fn request_flag_is_required() {
    assert!(Cli::try_parse_from(["weather-client", "-s", "127.0.0.1"]).is_err());
}

#[test]
fn unknown_flag_is_rejected() {
    assert!(Cli::try_parse_from(["weather-client", "-r", "t Roma", "-x"]).is_err());
}

#[test]
fn request_for_query_lines() {
    let req = request_for("t Roma");
    assert_eq!(req.kind, b't');
    assert_eq!(req.city.as_str(), "Roma");

    let req = request_for("");
    assert_eq!(req.kind, 0);
    assert!(req.city.is_empty());
}
