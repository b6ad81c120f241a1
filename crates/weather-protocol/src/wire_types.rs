//! Low-level wire constants.
//!
//! This is the one place the layout is defined; client and server both
//! build on it.
//!
//! ```text
//! Request (client -> server), 65 bytes
//! ------------------------------------
//! [0]      kind ('t' | 'h' | 'w' | 'p', anything else is invalid)
//! [1..65]  city, UTF-8, NUL-padded (at most 63 bytes + NUL)
//!
//! Response (server -> client), 9 bytes
//! ------------------------------------
//! [0..4]   status (u32 BE): 0 success, 1 city unavailable, 2 invalid
//! [4]      kind echo (NUL unless status = 0)
//! [5..9]   value (IEEE-754 f32 BE)
//! ```

use weather_core::MAX_CITY_LEN;

/// Default TCP port.
pub const DEFAULT_PORT: u16 = 56700;

/// Port used by older deployments.
pub const LEGACY_PORT: u16 = 57015;

/// Width of the NUL-padded city field.
pub const CITY_FIELD_LEN: usize = MAX_CITY_LEN + 1;

pub const REQUEST_LEN: usize = 1 + CITY_FIELD_LEN;
pub const RESPONSE_LEN: usize = 4 + 1 + 4;

pub const REQ_KIND_OFFSET: usize = 0;
pub const REQ_CITY_OFFSET: usize = 1;

pub const RESP_STATUS_OFFSET: usize = 0;
pub const RESP_KIND_OFFSET: usize = 4;
pub const RESP_VALUE_OFFSET: usize = 5;

pub type RequestFrame = [u8; REQUEST_LEN];
pub type ResponseFrame = [u8; RESPONSE_LEN];
