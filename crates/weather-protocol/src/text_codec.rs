//! Human-facing text forms.
//!
//! - Query parsing: `"<kind> <city>"` as typed on the client command line.
//! - Result rendering: one line per response, Italian labels.
//!
//! Output examples:
//!
//! ```text
//! Roma: Temperatura = 21.4°C
//! Bari: Umidità = 63.0%
//! Milano: Vento = 12.7km/h
//! Napoli: Pressione = 1013.2hPa
//! Città non disponibile
//! Richiesta non valida
//! ```

use weather_core::{City, MeasurementKind, Status, WeatherRequest, WeatherResponse};

pub const CITY_UNAVAILABLE_MSG: &str = "Città non disponibile";
pub const INVALID_REQUEST_MSG: &str = "Richiesta non valida";

/// Parse a `"<kind> <city>"` query.
///
/// The kind is the first non-whitespace byte; the city is whatever
/// follows, minus leading whitespace, truncated to the wire limit. The
/// kind is not validated here: that is the server's job.
///
/// Returns `None` only for a blank query.
pub fn parse_query(line: &str) -> Option<WeatherRequest> {
    let trimmed = line.trim_start();
    let kind = *trimmed.as_bytes().first()?;

    // Step over the whole first char so a multi-byte kind doesn't split
    // the city on a non-boundary.
    let kind_len = trimmed.chars().next().map_or(1, char::len_utf8);
    let city = trimmed[kind_len..].trim_start();

    Some(WeatherRequest {
        kind,
        city: City::new(city),
    })
}

/// Italian label for a kind.
pub fn kind_label(kind: MeasurementKind) -> &'static str {
    match kind {
        MeasurementKind::Temperature => "Temperatura",
        MeasurementKind::Humidity => "Umidità",
        MeasurementKind::Wind => "Vento",
        MeasurementKind::Pressure => "Pressione",
    }
}

/// Unit suffix for a kind; printed directly after the value.
pub fn kind_unit(kind: MeasurementKind) -> &'static str {
    match kind {
        MeasurementKind::Temperature => "°C",
        MeasurementKind::Humidity => "%",
        MeasurementKind::Wind => "km/h",
        MeasurementKind::Pressure => "hPa",
    }
}

/// Render a response for the user.
///
/// A success whose echoed kind is not a known code is treated like any
/// other unrecognised answer.
pub fn format_response(city: &str, resp: &WeatherResponse) -> String {
    match resp.status {
        Status::Success => match resp.measurement_kind() {
            Some(kind) => format!(
                "{}: {} = {:.1}{}",
                city,
                kind_label(kind),
                resp.value,
                kind_unit(kind)
            ),
            None => INVALID_REQUEST_MSG.to_string(),
        },
        Status::CityUnavailable => CITY_UNAVAILABLE_MSG.to_string(),
        Status::InvalidRequest | Status::Other(_) => INVALID_REQUEST_MSG.to_string(),
    }
}
