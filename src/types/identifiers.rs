//! Room identifier type for the room allocator
//!
//! A [`RoomNumber`] is the integer a guest sees on the door. The encoding carries
//! the room's floor and its horizontal position, so no lookup table is needed:
//!
//! - floors 1-9: `floor * 100 + index` where `index` is 1..=10
//! - floor 10: `1000 + index` where `index` is 1..=7
//!
//! Every constructor validates against this 97-room universe, so a `RoomNumber`
//! held by the rest of the crate is always a real room.

use super::config::building::{FLOORS, ROOMS_PER_FLOOR, TOP_FLOOR_ROOMS};
use super::error::{ReservationError, ReservationResult};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

/// Identifier of a single room in the building
///
/// Ordering follows the canonical (floor, position) key, which coincides with
/// numeric order of the encoding.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct RoomNumber(u16);

impl RoomNumber {
    /// Validate a raw integer and wrap it as a room number
    pub fn new(value: i64) -> ReservationResult<Self> {
        if Self::is_valid(value) {
            Ok(Self(value as u16))
        } else {
            Err(ReservationError::InvalidRoomIdentifier(value))
        }
    }

    /// Build the room number for a (floor, zero-based position) pair
    pub fn from_position(floor: u8, position: u8) -> ReservationResult<Self> {
        let index = i64::from(position) + 1;
        let raw = if floor == FLOORS {
            1000 + index
        } else {
            i64::from(floor) * 100 + index
        };
        Self::new(raw)
    }

    /// Check whether a raw integer names one of the 97 rooms
    pub fn is_valid(value: i64) -> bool {
        if value > 1000 {
            return value - 1000 <= i64::from(TOP_FLOOR_ROOMS);
        }
        let floor = value / 100;
        let index = value % 100;
        (1..i64::from(FLOORS)).contains(&floor) && (1..=i64::from(ROOMS_PER_FLOOR)).contains(&index)
    }

    /// Raw integer value
    pub fn value(self) -> u16 {
        self.0
    }

    /// Floor this room is on (1..=10)
    pub fn floor(self) -> u8 {
        if self.0 >= 1000 {
            FLOORS
        } else {
            (self.0 / 100) as u8
        }
    }

    /// Zero-based position on the floor, counted from the corridor
    pub fn position(self) -> u8 {
        if self.0 >= 1000 {
            (self.0 - 1001) as u8
        } else {
            (self.0 % 100 - 1) as u8
        }
    }

    /// Sort key used wherever a deterministic visiting or tie-break order is needed
    pub fn canonical_key(self) -> (u8, u8) {
        (self.floor(), self.position())
    }
}

impl fmt::Display for RoomNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl TryFrom<i64> for RoomNumber {
    type Error = ReservationError;

    fn try_from(value: i64) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<RoomNumber> for u16 {
    fn from(room: RoomNumber) -> Self {
        room.0
    }
}

impl FromStr for RoomNumber {
    type Err = ReservationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        // Non-numeric input is never coerced into a room
        let value: i64 = s
            .trim()
            .parse()
            .map_err(|_| ReservationError::MalformedRoomIdentifier(s.to_string()))?;
        Self::new(value)
    }
}

impl Serialize for RoomNumber {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_u16(self.0)
    }
}

impl<'de> Deserialize<'de> for RoomNumber {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let value = i64::deserialize(deserializer)?;
        RoomNumber::new(value).map_err(serde::de::Error::custom)
    }
}
