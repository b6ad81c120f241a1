//! weather-core
//!
//! Pure weather query logic:
//! - measurement kinds and their value ranges
//! - request / response types
//! - city whitelist and validation
//! - random value generator
//! - response builder (validation + generation)

pub mod kind;
pub mod city;
pub mod messages;
pub mod validator;
pub mod generator;
pub mod response_builder;
pub mod error;

pub use kind::MeasurementKind;
pub use city::{City, MAX_CITY_LEN};

pub use messages::{Status, WeatherRequest, WeatherResponse};

pub use validator::{is_valid_city, is_valid_kind, CITY_WHITELIST};
pub use generator::WeatherGenerator;
pub use response_builder::ResponseBuilder;
pub use error::CoreError;
