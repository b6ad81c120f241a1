//! Binary encoding/decoding for weather messages.
//!
//! This module converts between:
//! - fixed-size frames ([`RequestFrame`] / [`ResponseFrame`])
//! - `weather_core::WeatherRequest` / `WeatherResponse`
//!
//! Every function here is total. The frame types carry the length, so
//! there is nothing to reject: the transport is responsible for reading
//! exactly [`REQUEST_LEN`] / [`RESPONSE_LEN`] bytes before decoding.

use weather_core::{City, Status, WeatherRequest, WeatherResponse};

use crate::wire_types::{
    RequestFrame, ResponseFrame, CITY_FIELD_LEN, REQUEST_LEN, REQ_CITY_OFFSET, REQ_KIND_OFFSET,
    RESPONSE_LEN, RESP_KIND_OFFSET, RESP_STATUS_OFFSET, RESP_VALUE_OFFSET,
};

// ============================================================================
// REQUEST: client -> server
// ============================================================================

/// Encode a request into its 65-byte frame.
///
/// `City` is already bounded to 63 bytes, so the field always keeps at
/// least one trailing NUL.
pub fn encode_request(req: &WeatherRequest) -> RequestFrame {
    let mut out = [0u8; REQUEST_LEN];
    out[REQ_KIND_OFFSET] = req.kind;

    let city = req.city.as_bytes();
    out[REQ_CITY_OFFSET..REQ_CITY_OFFSET + city.len()].copy_from_slice(city);

    out
}

/// Decode a 65-byte request frame.
///
/// The city ends at the first NUL, or spans the whole field if there is
/// none. Invalid UTF-8 is replaced rather than rejected: the server will
/// answer "city unavailable" for it anyway.
pub fn decode_request(buf: &RequestFrame) -> WeatherRequest {
    let kind = buf[REQ_KIND_OFFSET];

    let field = &buf[REQ_CITY_OFFSET..REQ_CITY_OFFSET + CITY_FIELD_LEN];
    let end = field.iter().position(|&b| b == 0).unwrap_or(field.len());
    let city = String::from_utf8_lossy(&field[..end]).into_owned();

    // Full-width fields lose their last byte: City holds at most 63.
    WeatherRequest {
        kind,
        city: City::new(city),
    }
}

// ============================================================================
// RESPONSE: server -> client
// ============================================================================

/// Encode a response into its 9-byte frame.
pub fn encode_response(resp: &WeatherResponse) -> ResponseFrame {
    let mut out = [0u8; RESPONSE_LEN];

    out[RESP_STATUS_OFFSET..RESP_STATUS_OFFSET + 4]
        .copy_from_slice(&resp.status.code().to_be_bytes());
    out[RESP_KIND_OFFSET] = resp.kind;
    out[RESP_VALUE_OFFSET..RESP_VALUE_OFFSET + 4]
        .copy_from_slice(&resp.value.to_bits().to_be_bytes());

    out
}

/// Decode a 9-byte response frame.
///
/// The float is rebuilt from its bit pattern, so NaN payloads and
/// signed zeros survive unchanged.
pub fn decode_response(buf: &ResponseFrame) -> WeatherResponse {
    let status = read_u32_be(buf, RESP_STATUS_OFFSET);
    let kind = buf[RESP_KIND_OFFSET];
    let value = f32::from_bits(read_u32_be(buf, RESP_VALUE_OFFSET));

    WeatherResponse {
        status: Status::from_code(status),
        kind,
        value,
    }
}

// -----------------------------------------------------------------------------
// Helpers
// -----------------------------------------------------------------------------

fn read_u32_be(buf: &[u8], offset: usize) -> u32 {
    let mut arr = [0u8; 4];
    arr.copy_from_slice(&buf[offset..offset + 4]);
    u32::from_be_bytes(arr)
}
