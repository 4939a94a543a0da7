//! Room allocation
//!
//! This module contains the allocation engine that turns a snapshot of free
//! rooms and a requested count into a concrete, low travel-time set of rooms.
//!
//! # Usage Example
//!
//! ```rust
//! use room_allocator::allocation::*;
//! use room_allocator::types::{AllocationKind, RoomNumber, TieBreakPolicy};
//!
//! let available: Vec<RoomNumber> = (301..=310)
//!     .map(RoomNumber::new)
//!     .collect::<Result<_, _>>()?;
//!
//! let allocation = select_rooms(&available, 3)?;
//! assert_eq!(allocation.travel_time, 2);
//! assert_eq!(allocation.kind, AllocationKind::SameFloor);
//!
//! let engine = AllocationEngine::new(TieBreakPolicy::LexicographicallySmallest);
//! assert_eq!(engine.select(&available, 3)?, allocation);
//! # Ok::<(), room_allocator::types::ReservationError>(())
//! ```

pub mod engine;

// Re-export all public types for convenience
pub use engine::{select_rooms, Allocation, AllocationEngine};
