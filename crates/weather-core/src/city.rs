//! Bounded city name.

use std::fmt;

/// Maximum number of city bytes carried on the wire.
///
/// The wire field is 64 bytes wide and always keeps one trailing NUL.
pub const MAX_CITY_LEN: usize = 63;

/// A city name of at most [`MAX_CITY_LEN`] bytes.
///
/// Longer input is truncated silently, on a UTF-8 character boundary,
/// when the value is constructed. Anything holding a `City` can encode
/// it without further length checks.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct City(String);

impl City {
    pub fn new(name: impl Into<String>) -> Self {
        let mut name = name.into();
        let cut = truncate_boundary(&name, MAX_CITY_LEN);
        name.truncate(cut);
        City(name)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn as_bytes(&self) -> &[u8] {
        self.0.as_bytes()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }
}

/// Largest char boundary of `s` that is `<= max`.
fn truncate_boundary(s: &str, max: usize) -> usize {
    if s.len() <= max {
        return s.len();
    }
    let mut cut = max;
    while !s.is_char_boundary(cut) {
        cut -= 1;
    }
    cut
}

impl From<&str> for City {
    fn from(s: &str) -> Self {
        City::new(s)
    }
}

impl From<String> for City {
    fn from(s: String) -> Self {
        City::new(s)
    }
}

impl fmt::Display for City {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
