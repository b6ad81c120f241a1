//! weather-protocol
//!
//! Wire-level encoding/decoding for the weather query service.
//!
//! This crate turns logical messages (`weather_core::WeatherRequest` /
//! `WeatherResponse`) into fixed-size byte frames and back, and holds
//! the text forms the client shows to people.
//!
//! - [`wire_types`]  : frame sizes, offsets, ports
//! - [`binary_codec`]: 65-byte request / 9-byte response frames
//! - [`text_codec`]  : query parsing and result lines

pub mod wire_types;
pub mod binary_codec;
pub mod text_codec;

pub use binary_codec::{decode_request, decode_response, encode_request, encode_response};
pub use wire_types::{
    RequestFrame, ResponseFrame, DEFAULT_PORT, LEGACY_PORT, REQUEST_LEN, RESPONSE_LEN,
};
