//! Message types exchanged between client and server.
//!
//! These are **transport-agnostic** logical messages:
//! - [`WeatherRequest`]: what the server consumes.
//! - [`WeatherResponse`]: what the server produces.
//!
//! The fixed-layout byte encoding lives in the `weather-protocol`
//! crate; this module is purely logical.

use crate::city::City;
use crate::kind::MeasurementKind;

/// Outcome of a request.
///
/// Codes outside the three known ones are kept in `Other` so a decoded
/// response re-encodes to the same bytes.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum Status {
    Success,
    CityUnavailable,
    InvalidRequest,
    Other(u32),
}

impl Status {
    pub const SUCCESS: u32 = 0;
    pub const CITY_UNAVAILABLE: u32 = 1;
    pub const INVALID_REQUEST: u32 = 2;

    pub fn code(self) -> u32 {
        match self {
            Status::Success => Self::SUCCESS,
            Status::CityUnavailable => Self::CITY_UNAVAILABLE,
            Status::InvalidRequest => Self::INVALID_REQUEST,
            Status::Other(code) => code,
        }
    }

    pub fn from_code(code: u32) -> Self {
        match code {
            Self::SUCCESS => Status::Success,
            Self::CITY_UNAVAILABLE => Status::CityUnavailable,
            Self::INVALID_REQUEST => Status::InvalidRequest,
            other => Status::Other(other),
        }
    }
}

/// A weather query (client -> server).
///
/// `kind` is the raw wire byte: the client sends whatever the user
/// typed and the server decides whether it is valid.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WeatherRequest {
    pub kind: u8,
    pub city: City,
}

impl WeatherRequest {
    pub fn new(kind: u8, city: impl Into<City>) -> Self {
        WeatherRequest {
            kind,
            city: city.into(),
        }
    }

    /// Typed kind, if the byte names one.
    pub fn measurement_kind(&self) -> Option<MeasurementKind> {
        MeasurementKind::from_byte(self.kind)
    }
}

/// Answer to a [`WeatherRequest`] (server -> client).
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct WeatherResponse {
    pub status: Status,

    /// Echo of the request kind on success, NUL otherwise.
    pub kind: u8,

    /// Measured value; only meaningful when `status` is `Success`.
    pub value: f32,
}

// -----------------------------------------------------------------------------
// Convenience constructors
// -----------------------------------------------------------------------------

impl WeatherResponse {
    pub fn success(kind: MeasurementKind, value: f32) -> Self {
        WeatherResponse {
            status: Status::Success,
            kind: kind.as_byte(),
            value,
        }
    }

    /// The kind field stays NUL even though the kind itself was valid.
    pub fn city_unavailable() -> Self {
        WeatherResponse {
            status: Status::CityUnavailable,
            kind: 0,
            value: 0.0,
        }
    }

    pub fn invalid_request() -> Self {
        WeatherResponse {
            status: Status::InvalidRequest,
            kind: 0,
            value: 0.0,
        }
    }

    pub fn measurement_kind(&self) -> Option<MeasurementKind> {
        MeasurementKind::from_byte(self.kind)
    }
}
