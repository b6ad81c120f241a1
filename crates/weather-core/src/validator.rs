//! Kind and city validation.

use crate::kind::MeasurementKind;

/// Cities the server can answer for. Matching is case-insensitive.
pub const CITY_WHITELIST: [&str; 10] = [
    "Bari", "Roma", "Milano", "Napoli", "Torino", "Palermo", "Genova", "Bologna", "Firenze",
    "Venezia",
];

/// True iff `kind` is one of `t`, `h`, `w`, `p`.
pub fn is_valid_kind(kind: u8) -> bool {
    MeasurementKind::from_byte(kind).is_some()
}

/// True iff `city` equals a whitelist entry, ignoring case.
///
/// No prefix or partial matches; the empty string is never valid.
pub fn is_valid_city(city: &str) -> bool {
    if city.is_empty() {
        return false;
    }
    CITY_WHITELIST
        .iter()
        .any(|known| known.eq_ignore_ascii_case(city))
}
