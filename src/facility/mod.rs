//! Building topology, travel times and room inventory
//!
//! # Overview
//!
//! The facility module models the single fixed building rooms are allocated in:
//!
//! - **building**: maps room identifiers to floors and positions
//! - **travel**: the corridor-based travel-time model
//! - **inventory**: occupied / booked / available snapshot of every room
//!
//! # Usage Example
//!
//! ```rust
//! use room_allocator::facility::*;
//! use room_allocator::types::RoomNumber;
//!
//! let rooms = all_room_numbers();
//! assert_eq!(rooms.len(), 97);
//!
//! let pair = [RoomNumber::new(101)?, RoomNumber::new(1001)?];
//! assert_eq!(total_travel_time(&pair), 18);
//!
//! let snapshot = InventorySnapshot::with_occupied([RoomNumber::new(101)?]);
//! assert_eq!(snapshot.available_count(), 96);
//! # Ok::<(), room_allocator::types::ReservationError>(())
//! ```

pub mod building;
pub mod inventory;
pub mod travel;

// Re-export all public types for convenience
pub use building::{all_room_numbers, floor_capacity, floor_of, group_by_floor, position_on_floor};
pub use inventory::InventorySnapshot;
pub use travel::{
    corridor_time, horizontal_travel_time, optimal_travel_time, route_legs, total_travel_time,
    travel_time_between, vertical_travel_time, visiting_order, RouteLeg,
};
