//! Request -> response decision procedure.
//!
//! Checks run in a fixed order:
//! 1. kind not one of `t`/`h`/`w`/`p`  => `InvalidRequest`
//! 2. city empty or not whitelisted    => `CityUnavailable`
//! 3. otherwise                        => `Success` with a generated value
//!
//! When both kind and city are bad the kind check wins. Every input,
//! including empty or garbage strings, yields a well-formed response.

use crate::generator::WeatherGenerator;
use crate::kind::MeasurementKind;
use crate::messages::{WeatherRequest, WeatherResponse};
use crate::validator::is_valid_city;

/// Builds responses; owns the value generator.
#[derive(Debug, Default)]
pub struct ResponseBuilder {
    generator: WeatherGenerator,
}

impl ResponseBuilder {
    /// Builder with a time-seeded generator.
    pub fn new() -> Self {
        ResponseBuilder::default()
    }

    pub fn with_generator(generator: WeatherGenerator) -> Self {
        ResponseBuilder { generator }
    }

    /// Answer a decoded request.
    pub fn process_request(&self, req: &WeatherRequest) -> WeatherResponse {
        self.build(req.kind, req.city.as_str())
    }

    pub fn build(&self, kind: u8, city: &str) -> WeatherResponse {
        let Some(kind) = MeasurementKind::from_byte(kind) else {
            return WeatherResponse::invalid_request();
        };

        if !is_valid_city(city) {
            return WeatherResponse::city_unavailable();
        }

        WeatherResponse::success(kind, self.generator.generate(kind))
    }
}
