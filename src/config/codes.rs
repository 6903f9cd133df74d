use std::fmt;

use serde::Deserialize;

/// An inclusive range of accepted HTTP status codes.
///
/// The range is stored as given. An inverted range (`min > max`) is accepted
/// and simply never matches any status code.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize)]
#[serde(from = "RawStatusRange")]
pub struct StatusRange {
    pub min: u16,
    pub max: u16,
}

/// Successful HTTP status codes.
pub const DEFAULT_STATUS_RANGE: StatusRange = StatusRange { min: 200, max: 299 };

impl StatusRange {
    pub const fn new(min: u16, max: u16) -> Self {
        Self { min, max }
    }

    /// A range that accepts exactly one status code.
    pub const fn single(code: u16) -> Self {
        Self::new(code, code)
    }

    pub fn contains(&self, code: u16) -> bool {
        self.min <= code && code <= self.max
    }

    pub fn is_inverted(&self) -> bool {
        self.min > self.max
    }
}

impl Default for StatusRange {
    fn default() -> Self {
        DEFAULT_STATUS_RANGE
    }
}

impl fmt::Display for StatusRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}", self.min, self.max)
    }
}

/// `expected_codes: 204` or `expected_codes: [200, 204]`
#[derive(Deserialize)]
#[serde(untagged)]
enum RawStatusRange {
    Single(u16),
    Pair(u16, u16),
}

impl From<RawStatusRange> for StatusRange {
    fn from(raw: RawStatusRange) -> Self {
        match raw {
            RawStatusRange::Single(code) => StatusRange::single(code),
            RawStatusRange::Pair(min, max) => StatusRange::new(min, max),
        }
    }
}
