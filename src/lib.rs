//! Room Allocator
//!
//! Selects a set of free rooms in a fixed 10-floor, 97-room building so that
//! the total travel time between them is as small as the search allows.
//!
//! # Overview
//!
//! Floors 1-9 hold rooms `floor * 100 + index` with index 1-10; floor 10
//! holds rooms `1000 + index` with index 1-7. A room's zero-based position is
//! `index - 1`. Every floor is reached through a corridor at position 0, so
//! moving between floors means walking back to the corridor, taking the
//! stairs (2 minutes per floor) and walking out again (1 minute per room).
//!
//! ## Key Features
//!
//! - **Deterministic allocation**: same-floor windows first, multi-floor fallback second
//! - **Configurable tie-breaking**: first found or lexicographically smallest
//! - **Exact route cost**: optimal visiting order for small selections
//! - **Reservation sessions**: random occupancy, booking and reset
//!
//! ## Quick Start
//!
//! ```rust
//! use room_allocator::*;
//!
//! let snapshot = InventorySnapshot::with_occupied([RoomNumber::new(101)?, RoomNumber::new(102)?]);
//! let allocation = select_rooms(&snapshot.available(), 2)?;
//!
//! // Floor 1 lost two rooms, so floor 2 is searched first
//! assert_eq!(allocation.rooms, vec![RoomNumber::new(201)?, RoomNumber::new(202)?]);
//! assert_eq!(allocation.travel_time, 1);
//! # Ok::<(), ReservationError>(())
//! ```
//!
//! ## Module Organization
//!
//! - [`types`]: room identifiers, enums, errors and configuration
//! - [`facility`]: building topology, travel times and the inventory snapshot
//! - [`allocation`]: the allocation engine
//! - [`simulation`]: occupancy sampling, sessions, statistics and logging
#![warn(missing_docs, missing_debug_implementations, unreachable_pub)]

pub mod allocation;
pub mod facility;
pub mod simulation;
pub mod types;

// Core types and identifiers
pub use types::{
    AllocationKind, AllocatorConfig, ConfigValidationError, OutputFormat, ReservationError,
    ReservationResult, RoomNumber, RoomStatus, TieBreakPolicy,
};

// Building topology and travel times
pub use facility::{
    all_room_numbers, floor_of, optimal_travel_time, position_on_floor, total_travel_time,
    InventorySnapshot,
};

// Allocation
pub use allocation::{select_rooms, Allocation, AllocationEngine};

// Sessions and sampling
pub use simulation::{
    sample_occupancy, InventoryStatistics, LoggingConfig, OccupancySampler, ReservationSession,
};
