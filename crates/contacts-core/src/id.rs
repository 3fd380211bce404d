//! Contact identifiers and the sequence that issues them.
//!
//! [`ContactId`] is a newtype over `i64` so a raw integer from a request path
//! has to be parsed into one explicitly. [`IdSequence`] hands out ids in
//! strictly increasing order and is never rewound.

use std::fmt;
use std::num::ParseIntError;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Stable contact identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ContactId(pub i64);

impl fmt::Display for ContactId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for ContactId {
    type Err = ParseIntError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.parse::<i64>().map(ContactId)
    }
}

/// Monotonic identifier generator.
///
/// Holds the next id to issue. Every issued id is strictly smaller than
/// [`peek`](IdSequence::peek), which is what keeps ids unique across
/// deletions.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IdSequence {
    next: i64,
}

impl IdSequence {
    /// Creates a sequence whose first issued id is `1`.
    pub fn new() -> Self {
        IdSequence { next: 1 }
    }

    /// Issues the next id and advances the sequence by one.
    pub fn issue(&mut self) -> ContactId {
        let id = ContactId(self.next);
        self.next += 1;
        id
    }

    /// Returns the id the next call to [`issue`](IdSequence::issue) would
    /// return, without consuming it.
    pub fn peek(&self) -> ContactId {
        ContactId(self.next)
    }
}

impl Default for IdSequence {
    fn default() -> Self {
        Self::new()
    }
}
