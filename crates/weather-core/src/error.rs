//! Error types for the weather core.
//!
//! Building a response never fails: bad kinds and unknown cities are
//! reported through [`Status`](crate::Status) codes instead. These
//! errors only surface when a caller asks for a typed
//! [`MeasurementKind`](crate::MeasurementKind) from raw input.

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CoreError {
    /// The byte is not one of `t`, `h`, `w`, `p`.
    #[error("unknown measurement kind: {0:#04x}")]
    UnknownKind(u8),

    /// The text is not a single-byte kind code.
    #[error("malformed measurement kind: {0:?}")]
    MalformedKind(String),
}
