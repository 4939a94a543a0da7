//! Travel-time model
//!
//! A single vertical corridor (stairs and lift) sits at position 0 of every
//! floor. Walking along a floor costs [`HORIZONTAL_TRAVEL_TIME`] per room and
//! changing floors costs [`VERTICAL_TRAVEL_TIME`] per floor, plus the walk to
//! the corridor on the departure floor and from it on the arrival floor.
//!
//! [`total_travel_time`] visits a set of rooms in canonical (floor, position)
//! order. That order is a heuristic, not a shortest-route solver: it is exact
//! for rooms on one floor and reasonable for clustered rooms.
//! [`optimal_travel_time`] searches every visiting order for booking-sized sets.

use crate::types::building::{HORIZONTAL_TRAVEL_TIME, MAX_ROOMS_PER_BOOKING, VERTICAL_TRAVEL_TIME};
use crate::types::{ReservationError, ReservationResult, RoomNumber};
use serde::{Deserialize, Serialize};

/// One step of a route between two consecutive rooms
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RouteLeg {
    /// Room the leg starts in
    pub from: RoomNumber,
    /// Room the leg ends in
    pub to: RoomNumber,
    /// Minutes spent on this leg
    pub minutes: u32,
}

/// Walking time between two positions on the same corridor
pub fn corridor_time(position_a: u8, position_b: u8) -> u32 {
    u32::from(position_a.abs_diff(position_b)) * HORIZONTAL_TRAVEL_TIME
}

/// Horizontal travel time between two rooms, `None` when they are on different floors
pub fn horizontal_travel_time(a: RoomNumber, b: RoomNumber) -> Option<u32> {
    (a.floor() == b.floor()).then(|| corridor_time(a.position(), b.position()))
}

/// Vertical travel time between two floors
pub fn vertical_travel_time(floor_a: u8, floor_b: u8) -> u32 {
    u32::from(floor_a.abs_diff(floor_b)) * VERTICAL_TRAVEL_TIME
}

/// Travel time of a single move from one room to another
///
/// Moves between floors pass through the corridor at position 0.
pub fn travel_time_between(from: RoomNumber, to: RoomNumber) -> u32 {
    match horizontal_travel_time(from, to) {
        Some(minutes) => minutes,
        None => {
            vertical_travel_time(from.floor(), to.floor())
                + corridor_time(from.position(), 0)
                + corridor_time(0, to.position())
        }
    }
}

/// Rooms in the fixed visiting order used for scoring
pub fn visiting_order(rooms: &[RoomNumber]) -> Vec<RoomNumber> {
    let mut ordered = rooms.to_vec();
    ordered.sort_by_key(|room| room.canonical_key());
    ordered
}

/// Legs of the canonical route through a set of rooms
pub fn route_legs(rooms: &[RoomNumber]) -> Vec<RouteLeg> {
    visiting_order(rooms)
        .windows(2)
        .map(|pair| RouteLeg { from: pair[0], to: pair[1], minutes: travel_time_between(pair[0], pair[1]) })
        .collect()
}

/// Total travel time to visit a set of rooms in canonical order
///
/// Independent of input order; 0 for sets of zero or one room.
pub fn total_travel_time(rooms: &[RoomNumber]) -> u32 {
    visiting_order(rooms)
        .windows(2)
        .map(|pair| travel_time_between(pair[0], pair[1]))
        .sum()
}

/// Minimum travel time over every visiting order of a booking-sized set
///
/// Never exceeds [`total_travel_time`] for the same rooms. Sets larger than a
/// single booking fail with `InvalidRequestSize`.
pub fn optimal_travel_time(rooms: &[RoomNumber]) -> ReservationResult<u32> {
    if rooms.len() > MAX_ROOMS_PER_BOOKING {
        return Err(ReservationError::invalid_request_size(rooms.len(), MAX_ROOMS_PER_BOOKING));
    }
    if rooms.len() <= 1 {
        return Ok(0);
    }

    let ordered = visiting_order(rooms);
    let mut best = total_travel_time(&ordered);
    let mut used = vec![false; ordered.len()];
    for start in 0..ordered.len() {
        used[start] = true;
        search_routes(&ordered, &mut used, ordered[start], 1, 0, &mut best);
        used[start] = false;
    }
    Ok(best)
}

fn search_routes(
    rooms: &[RoomNumber],
    used: &mut [bool],
    current: RoomNumber,
    visited: usize,
    elapsed: u32,
    best: &mut u32,
) {
    if elapsed >= *best {
        return;
    }
    if visited == rooms.len() {
        *best = elapsed;
        return;
    }
    for next in 0..rooms.len() {
        if used[next] {
            continue;
        }
        used[next] = true;
        let cost = elapsed + travel_time_between(current, rooms[next]);
        search_routes(rooms, used, rooms[next], visited + 1, cost, best);
        used[next] = false;
    }
}
