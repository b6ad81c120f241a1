//! Measurement kind (temperature / humidity / wind / pressure).

use std::fmt;
use std::str::FromStr;

use crate::error::CoreError;

/// Which weather measurement a request asks for.
///
/// On the wire each kind is a single ASCII byte:
/// `'t'`, `'h'`, `'w'`, `'p'`.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum MeasurementKind {
    Temperature,
    Humidity,
    Wind,
    Pressure,
}

impl MeasurementKind {
    /// All kinds, in wire-code order.
    pub const ALL: [MeasurementKind; 4] = [
        MeasurementKind::Temperature,
        MeasurementKind::Humidity,
        MeasurementKind::Wind,
        MeasurementKind::Pressure,
    ];

    /// Wire byte for this kind.
    pub fn as_byte(self) -> u8 {
        match self {
            MeasurementKind::Temperature => b't',
            MeasurementKind::Humidity => b'h',
            MeasurementKind::Wind => b'w',
            MeasurementKind::Pressure => b'p',
        }
    }

    /// Try to parse from a wire byte (case-sensitive).
    pub fn from_byte(b: u8) -> Option<Self> {
        match b {
            b't' => Some(MeasurementKind::Temperature),
            b'h' => Some(MeasurementKind::Humidity),
            b'w' => Some(MeasurementKind::Wind),
            b'p' => Some(MeasurementKind::Pressure),
            _ => None,
        }
    }

    /// Closed range `(min, max)` that generated values fall into.
    pub fn range(self) -> (f32, f32) {
        match self {
            MeasurementKind::Temperature => (-10.0, 40.0),
            MeasurementKind::Humidity => (20.0, 100.0),
            MeasurementKind::Wind => (0.0, 100.0),
            MeasurementKind::Pressure => (950.0, 1050.0),
        }
    }

    /// True if `value` lies inside [`range`](Self::range).
    pub fn contains(self, value: f32) -> bool {
        let (min, max) = self.range();
        (min..=max).contains(&value)
    }
}

impl TryFrom<u8> for MeasurementKind {
    type Error = CoreError;

    fn try_from(b: u8) -> Result<Self, Self::Error> {
        MeasurementKind::from_byte(b).ok_or(CoreError::UnknownKind(b))
    }
}

impl FromStr for MeasurementKind {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.as_bytes() {
            [b] => MeasurementKind::try_from(*b),
            _ => Err(CoreError::MalformedKind(s.to_string())),
        }
    }
}

impl fmt::Display for MeasurementKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_byte() as char)
    }
}
