//! Reservation session
//!
//! The stateful layer around the pure allocation core. A session owns the
//! inventory snapshot and the current selection, and is the only place they
//! change: randomising occupancy, finding rooms, committing a booking and
//! resetting the building.

use crate::allocation::{Allocation, AllocationEngine};
use crate::facility::InventorySnapshot;
use crate::simulation::sampler::OccupancySampler;
use crate::simulation::statistics::InventoryStatistics;
use crate::types::{ReservationError, ReservationResult, RoomNumber};
use tracing::{info, instrument, warn};

/// Mutable booking state for a single user of the allocator
#[derive(Debug, Clone)]
pub struct ReservationSession {
    inventory: InventorySnapshot,
    engine: AllocationEngine,
    sampler: OccupancySampler,
    selection: Option<Allocation>,
}

impl ReservationSession {
    /// Create a session over an empty building
    pub fn new(engine: AllocationEngine, sampler: OccupancySampler) -> Self {
        Self { inventory: InventorySnapshot::new(), engine, sampler, selection: None }
    }

    /// Replace the inventory snapshot, discarding any selection
    pub fn with_inventory(mut self, inventory: InventorySnapshot) -> Self {
        self.inventory = inventory;
        self.selection = None;
        self
    }

    /// Current inventory snapshot
    pub fn inventory(&self) -> &InventorySnapshot {
        &self.inventory
    }

    /// Rooms picked by the last successful search, if not yet booked
    pub fn selection(&self) -> Option<&Allocation> {
        self.selection.as_ref()
    }

    /// Free rooms in canonical order
    pub fn available(&self) -> Vec<RoomNumber> {
        self.inventory.available()
    }

    /// Replace occupancy with a random snapshot and clear bookings
    #[instrument(skip(self))]
    pub fn randomize_occupancy(&mut self, probability: f64) -> ReservationResult<()> {
        let occupied = self.sampler.sample(probability)?;
        info!("Randomised occupancy: {} rooms occupied", occupied.len());
        self.inventory.replace_occupied(occupied);
        self.selection = None;
        Ok(())
    }

    /// Search the current snapshot for `count` rooms and remember the result
    #[instrument(skip(self))]
    pub fn find_optimal(&mut self, count: usize) -> ReservationResult<&Allocation> {
        self.selection = None;
        let available = self.inventory.available();
        match self.engine.select(&available, count) {
            Ok(allocation) => {
                info!("Selected rooms {}", allocation);
                Ok(self.selection.insert(allocation))
            }
            Err(error) => {
                warn!("Room search failed: {}", error);
                Err(error)
            }
        }
    }

    /// Book the current selection
    ///
    /// Fails with `NothingSelected` when there is no selection. If the booking
    /// is rejected the selection is kept.
    #[instrument(skip(self))]
    pub fn book_selection(&mut self) -> ReservationResult<Allocation> {
        let allocation = self.selection.take().ok_or(ReservationError::NothingSelected)?;
        if let Err(error) = self.inventory.book(&allocation.rooms) {
            warn!("Booking failed: {}", error);
            self.selection = Some(allocation);
            return Err(error);
        }
        info!("Booked rooms {}", allocation);
        Ok(allocation)
    }

    /// Free every room and drop the selection
    pub fn reset(&mut self) {
        info!("Resetting all rooms");
        self.inventory.reset();
        self.selection = None;
    }

    /// Travel time of the current selection, 0 without one
    pub fn selection_travel_time(&self) -> u32 {
        self.selection.as_ref().map_or(0, |allocation| allocation.travel_time)
    }

    /// Statistics for the current snapshot
    pub fn statistics(&self) -> InventoryStatistics {
        InventoryStatistics::from_snapshot(&self.inventory)
    }
}

impl Default for ReservationSession {
    fn default() -> Self {
        Self::new(AllocationEngine::default(), OccupancySampler::new())
    }
}
