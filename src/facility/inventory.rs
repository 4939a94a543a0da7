//! Inventory snapshot
//!
//! An [`InventorySnapshot`] partitions the building into occupied, booked and
//! available rooms at a single point in time. Available rooms are never stored;
//! they are always derived as everything neither occupied nor booked.

use crate::facility::building::all_room_numbers;
use crate::types::building::TOTAL_ROOMS;
use crate::types::{ReservationError, ReservationResult, RoomNumber, RoomStatus};
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use tracing::debug;

/// Occupied and booked rooms at one point in time
///
/// Deserialization goes through [`InventorySnapshot::from_parts`], so a
/// snapshot with overlapping sets can never be built from JSON.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "SnapshotParts")]
pub struct InventorySnapshot {
    occupied: BTreeSet<RoomNumber>,
    booked: BTreeSet<RoomNumber>,
}

/// Unchecked wire form of a snapshot
#[derive(Deserialize)]
struct SnapshotParts {
    #[serde(default)]
    occupied: BTreeSet<RoomNumber>,
    #[serde(default)]
    booked: BTreeSet<RoomNumber>,
}

impl TryFrom<SnapshotParts> for InventorySnapshot {
    type Error = ReservationError;

    fn try_from(parts: SnapshotParts) -> Result<Self, Self::Error> {
        Self::from_parts(parts.occupied, parts.booked)
    }
}

impl InventorySnapshot {
    /// Create a snapshot with every room available
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a snapshot with the given rooms occupied
    pub fn with_occupied<I>(occupied: I) -> Self
    where
        I: IntoIterator<Item = RoomNumber>,
    {
        Self { occupied: occupied.into_iter().collect(), booked: BTreeSet::new() }
    }

    /// Create a snapshot from explicit occupied and booked sets
    ///
    /// Fails with `RoomUnavailable` naming the first room found in both sets.
    pub fn from_parts(
        occupied: BTreeSet<RoomNumber>,
        booked: BTreeSet<RoomNumber>,
    ) -> ReservationResult<Self> {
        if let Some(room) = occupied.intersection(&booked).next() {
            return Err(ReservationError::RoomUnavailable(*room));
        }
        Ok(Self { occupied, booked })
    }

    /// Rooms taken by existing guests
    pub fn occupied(&self) -> &BTreeSet<RoomNumber> {
        &self.occupied
    }

    /// Rooms booked in this session
    pub fn booked(&self) -> &BTreeSet<RoomNumber> {
        &self.booked
    }

    /// Free rooms in canonical order
    pub fn available(&self) -> Vec<RoomNumber> {
        all_room_numbers()
            .into_iter()
            .filter(|room| !self.occupied.contains(room) && !self.booked.contains(room))
            .collect()
    }

    /// Number of free rooms
    pub fn available_count(&self) -> usize {
        TOTAL_ROOMS - self.occupied.len() - self.booked.len()
    }

    /// Status of a single room
    pub fn status_of(&self, room: RoomNumber) -> RoomStatus {
        if self.occupied.contains(&room) {
            RoomStatus::Occupied
        } else if self.booked.contains(&room) {
            RoomStatus::Booked
        } else {
            RoomStatus::Available
        }
    }

    /// Check whether a room is free
    pub fn is_available(&self, room: RoomNumber) -> bool {
        self.status_of(room) == RoomStatus::Available
    }

    /// Replace the occupied set, clearing all bookings
    pub fn replace_occupied(&mut self, occupied: BTreeSet<RoomNumber>) {
        self.occupied = occupied;
        self.booked.clear();
    }

    /// Mark rooms as booked
    ///
    /// Either every room is booked or none is: the first room that is not free
    /// aborts the whole call with `RoomUnavailable`.
    pub fn book(&mut self, rooms: &[RoomNumber]) -> ReservationResult<()> {
        if rooms.is_empty() {
            return Err(ReservationError::NothingSelected);
        }
        let mut pending = BTreeSet::new();
        for &room in rooms {
            if !self.is_available(room) || !pending.insert(room) {
                return Err(ReservationError::RoomUnavailable(room));
            }
        }
        debug!(rooms = ?pending, "Booking rooms");
        self.booked.extend(pending);
        Ok(())
    }

    /// Return every room to the available pool
    pub fn reset(&mut self) {
        self.occupied.clear();
        self.booked.clear();
    }
}
