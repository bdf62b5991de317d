//! Bitmask arithmetic
use crate::errors::ParseError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// The integer declared to the gateway as the client's capability set.
///
/// Backed by a `u64` so growth past the current 32-bit catalog never needs a
/// type change. All arithmetic is exact integer arithmetic.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Bitmask(u64);

impl Bitmask {
    pub const EMPTY: Bitmask = Bitmask(0);

    pub const fn new(value: u64) -> Self {
        Self(value)
    }

    /// Mask with only `position` set.
    pub const fn bit(position: u8) -> Self {
        Self(1u64 << position)
    }

    /// Recompute a mask from scratch out of a set of bit positions.
    pub fn from_positions<I>(positions: I) -> Self
    where
        I: IntoIterator<Item = u8>,
    {
        positions
            .into_iter()
            .fold(Self::EMPTY, |mask, position| Self(mask.0 | (1u64 << position)))
    }

    pub const fn value(self) -> u64 {
        self.0
    }

    pub const fn is_empty(self) -> bool {
        self.0 == 0
    }

    pub const fn contains_bit(self, position: u8) -> bool {
        self.0 & (1u64 << position) != 0
    }

    /// Add `1 << position` to the mask.
    ///
    /// The caller guarantees the bit is currently clear.
    pub fn add_bit(self, position: u8) -> Self {
        debug_assert!(!self.contains_bit(position), "bit {position} already set");
        Self(self.0 + (1u64 << position))
    }

    /// Subtract `1 << position` from the mask.
    ///
    /// The caller guarantees the bit is currently set.
    pub fn sub_bit(self, position: u8) -> Self {
        debug_assert!(self.contains_bit(position), "bit {position} not set");
        Self(self.0 - (1u64 << position))
    }

    /// Set bit positions, lowest first.
    pub fn positions(self) -> impl Iterator<Item = u8> {
        (0..64u8).filter(move |position| self.contains_bit(*position))
    }

    pub const fn count(self) -> u32 {
        self.0.count_ones()
    }

    pub const fn difference(self, other: Bitmask) -> Self {
        Self(self.0 & !other.0)
    }
}

impl fmt::Display for Bitmask {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<u64> for Bitmask {
    fn from(value: u64) -> Self {
        Self(value)
    }
}

impl From<Bitmask> for u64 {
    fn from(mask: Bitmask) -> Self {
        mask.0
    }
}

/// Accepts decimal (`3276799`) or hexadecimal with a `0x` prefix (`0x31FFFF`).
impl FromStr for Bitmask {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        let parsed = match trimmed
            .strip_prefix("0x")
            .or_else(|| trimmed.strip_prefix("0X"))
        {
            Some(hex) => u64::from_str_radix(hex, 16),
            None => trimmed.parse::<u64>(),
        };
        parsed
            .map(Self)
            .map_err(|_| ParseError::InvalidBitmask(s.to_string()))
    }
}
