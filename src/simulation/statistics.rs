//! Inventory statistics and reporting
//!
//! Summaries of an [`InventorySnapshot`]: building totals and a per-floor
//! breakdown of available, occupied and booked rooms.

use crate::facility::building::{floor_capacity, group_by_floor};
use crate::facility::InventorySnapshot;
use crate::types::building::{FLOORS, TOTAL_ROOMS};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Room counts for a single floor
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct FloorStatistics {
    /// Floor number
    pub floor: u8,
    /// Rooms on the floor
    pub capacity: usize,
    /// Free rooms
    pub available: usize,
    /// Rooms taken by existing guests
    pub occupied: usize,
    /// Rooms booked in this session
    pub booked: usize,
}

impl FloorStatistics {
    /// Share of the floor that is occupied or booked, in percent
    pub fn occupancy_percentage(&self) -> f64 {
        percentage(self.occupied + self.booked, self.capacity)
    }
}

/// Building-wide room counts
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InventoryStatistics {
    /// Rooms in the building
    pub total_rooms: usize,
    /// Free rooms
    pub available: usize,
    /// Rooms taken by existing guests
    pub occupied: usize,
    /// Rooms booked in this session
    pub booked: usize,
    /// Per-floor breakdown, lowest floor first
    pub floors: Vec<FloorStatistics>,
}

impl InventoryStatistics {
    /// Collect statistics from a snapshot
    pub fn from_snapshot(snapshot: &InventorySnapshot) -> Self {
        let occupied_by_floor = group_by_floor(snapshot.occupied().iter().copied());
        let booked_by_floor = group_by_floor(snapshot.booked().iter().copied());

        let floors = (1..=FLOORS)
            .map(|floor| {
                let capacity = usize::from(floor_capacity(floor).unwrap_or(0));
                let occupied = occupied_by_floor.get(&floor).map_or(0, Vec::len);
                let booked = booked_by_floor.get(&floor).map_or(0, Vec::len);
                FloorStatistics {
                    floor,
                    capacity,
                    available: capacity - occupied - booked,
                    occupied,
                    booked,
                }
            })
            .collect();

        Self {
            total_rooms: TOTAL_ROOMS,
            available: snapshot.available_count(),
            occupied: snapshot.occupied().len(),
            booked: snapshot.booked().len(),
            floors,
        }
    }

    /// Share of the building that is occupied or booked, in percent
    pub fn occupancy_percentage(&self) -> f64 {
        percentage(self.occupied + self.booked, self.total_rooms)
    }

    /// Share of the building that is free, in percent
    pub fn availability_percentage(&self) -> f64 {
        percentage(self.available, self.total_rooms)
    }

    /// Floor with the most free rooms (lowest floor on ties)
    pub fn most_available_floor(&self) -> Option<&FloorStatistics> {
        self.floors
            .iter()
            .filter(|floor| floor.available > 0)
            .max_by(|a, b| a.available.cmp(&b.available).then(b.floor.cmp(&a.floor)))
    }
}

impl fmt::Display for InventoryStatistics {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Inventory Statistics")?;
        writeln!(f, "====================")?;
        writeln!(f, "Total Rooms: {}", self.total_rooms)?;
        writeln!(f, "Available: {} ({:.1}%)", self.available, self.availability_percentage())?;
        writeln!(f, "Occupied: {}", self.occupied)?;
        writeln!(f, "Booked: {}", self.booked)?;
        writeln!(f, "Occupancy: {:.1}%", self.occupancy_percentage())?;
        writeln!(f)?;
        writeln!(f, "Floor  Total  Available  Occupied  Booked")?;
        for floor in &self.floors {
            writeln!(
                f,
                "{:>5}  {:>5}  {:>9}  {:>8}  {:>6}",
                floor.floor, floor.capacity, floor.available, floor.occupied, floor.booked
            )?;
        }
        Ok(())
    }
}

fn percentage(part: usize, whole: usize) -> f64 {
    if whole == 0 {
        0.0
    } else {
        part as f64 / whole as f64 * 100.0
    }
}
