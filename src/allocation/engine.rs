//! Allocation engine
//!
//! Picks `count` rooms out of a snapshot of free rooms so that the canonical
//! route through them is as short as the search allows. The search is a
//! bounded heuristic:
//!
//! 1. Floors are ranked by how many free rooms they hold (most first, lower
//!    floor first on ties).
//! 2. Every floor with at least `count` free rooms contributes its contiguous
//!    windows of `count` rooms (sorted by position); the cheapest window wins.
//! 3. Only when no floor can hold the whole request, rooms are taken greedily
//!    from the ranked floors, lowest positions first.
//!
//! The engine is a pure function of its inputs. The caller's room list is
//! never mutated; all sorting happens on a private copy.

use crate::facility::building::group_by_floor;
use crate::facility::travel::total_travel_time;
use crate::types::building::MAX_ROOMS_PER_BOOKING;
use crate::types::{AllocationKind, ReservationError, ReservationResult, RoomNumber, TieBreakPolicy};
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, BTreeSet};
use std::fmt;
use tracing::{debug, instrument};

/// A complete answer to a room request
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Allocation {
    /// Selected rooms in canonical order
    pub rooms: Vec<RoomNumber>,
    /// Total travel time of the canonical route through the rooms
    pub travel_time: u32,
    /// Which pass of the engine produced the rooms
    pub kind: AllocationKind,
}

impl Allocation {
    /// Build an allocation, sorting the rooms and scoring them
    pub fn new(mut rooms: Vec<RoomNumber>, kind: AllocationKind) -> Self {
        rooms.sort_by_key(|room| room.canonical_key());
        let travel_time = total_travel_time(&rooms);
        Self { rooms, travel_time, kind }
    }

    /// Number of rooms in the allocation
    pub fn len(&self) -> usize {
        self.rooms.len()
    }

    /// Whether the allocation holds no rooms
    pub fn is_empty(&self) -> bool {
        self.rooms.is_empty()
    }

    /// Check whether a room is part of the allocation
    pub fn contains(&self, room: RoomNumber) -> bool {
        self.rooms.contains(&room)
    }

    /// Distinct floors the allocation touches
    pub fn floors(&self) -> BTreeSet<u8> {
        self.rooms.iter().map(|room| room.floor()).collect()
    }
}

impl fmt::Display for Allocation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let rooms: Vec<String> = self.rooms.iter().map(|room| room.to_string()).collect();
        write!(f, "{} ({} min, {})", rooms.join(", "), self.travel_time, self.kind)
    }
}

/// Room allocation engine
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct AllocationEngine {
    tie_break: TieBreakPolicy,
}

impl AllocationEngine {
    /// Create an engine with the given tie-break policy
    pub fn new(tie_break: TieBreakPolicy) -> Self {
        Self { tie_break }
    }

    /// Tie-break policy in use
    pub fn tie_break(&self) -> TieBreakPolicy {
        self.tie_break
    }

    /// Select `count` rooms from the free rooms in `available`
    ///
    /// Duplicates in `available` are ignored. Fails with `InvalidRequestSize`
    /// when `count` is 0 or above [`MAX_ROOMS_PER_BOOKING`], and with
    /// `InsufficientAvailability` when fewer than `count` distinct rooms are free.
    /// A successful result always holds exactly `count` rooms from `available`.
    #[instrument(skip(self, available), fields(available = available.len(), tie_break = %self.tie_break))]
    pub fn select(&self, available: &[RoomNumber], count: usize) -> ReservationResult<Allocation> {
        if count == 0 || count > MAX_ROOMS_PER_BOOKING {
            return Err(ReservationError::invalid_request_size(count, MAX_ROOMS_PER_BOOKING));
        }

        let pool: BTreeSet<RoomNumber> = available.iter().copied().collect();
        if count > pool.len() {
            return Err(ReservationError::insufficient_availability(count, pool.len()));
        }

        if count == 1 {
            // BTreeSet iterates in canonical order
            let first = pool.iter().next().copied();
            return first
                .map(|room| Allocation::new(vec![room], AllocationKind::SingleRoom))
                .ok_or_else(|| ReservationError::insufficient_availability(count, 0));
        }

        let by_floor = group_by_floor(pool);
        let ranked = rank_floors(&by_floor);
        debug!(
            ranking = ?ranked.iter().map(|(floor, rooms)| (*floor, rooms.len())).collect::<Vec<_>>(),
            "Ranked floors by free rooms"
        );

        if let Some(rooms) = self.same_floor_pass(&ranked, count) {
            let allocation = Allocation::new(rooms, AllocationKind::SameFloor);
            debug!(%allocation, "Same-floor pass found a window");
            return Ok(allocation);
        }

        let allocation = multi_floor_fallback(&ranked, count)?;
        debug!(%allocation, "Multi-floor fallback filled the request");
        Ok(allocation)
    }

    fn same_floor_pass(&self, ranked: &[(u8, &[RoomNumber])], count: usize) -> Option<Vec<RoomNumber>> {
        let mut best: Option<(u32, &[RoomNumber])> = None;

        for &(floor, rooms) in ranked.iter().filter(|(_, rooms)| rooms.len() >= count) {
            for window in rooms.windows(count) {
                let cost = total_travel_time(window);
                let better = match best {
                    None => true,
                    Some((best_cost, best_window)) => match self.tie_break {
                        TieBreakPolicy::FirstFound => cost < best_cost,
                        TieBreakPolicy::LexicographicallySmallest => {
                            cost < best_cost || (cost == best_cost && window < best_window)
                        }
                    },
                };
                if better {
                    debug!(floor, cost, "New best window");
                    best = Some((cost, window));
                }
            }
        }

        best.map(|(_, window)| window.to_vec())
    }
}

/// Floors ordered by descending free-room count, ascending floor number on ties
fn rank_floors(by_floor: &BTreeMap<u8, Vec<RoomNumber>>) -> Vec<(u8, &[RoomNumber])> {
    let mut ranked: Vec<(u8, &[RoomNumber])> =
        by_floor.iter().map(|(floor, rooms)| (*floor, rooms.as_slice())).collect();
    ranked.sort_by(|a, b| b.1.len().cmp(&a.1.len()).then(a.0.cmp(&b.0)));
    ranked
}

/// Greedily take the lowest-position rooms from the ranked floors
fn multi_floor_fallback(ranked: &[(u8, &[RoomNumber])], count: usize) -> ReservationResult<Allocation> {
    let mut selected = Vec::with_capacity(count);
    for &(_, rooms) in ranked {
        let remaining = count - selected.len();
        if remaining == 0 {
            break;
        }
        selected.extend_from_slice(&rooms[..remaining.min(rooms.len())]);
    }

    if selected.len() == count {
        Ok(Allocation::new(selected, AllocationKind::MultiFloor))
    } else {
        Err(ReservationError::insufficient_availability(count, selected.len()))
    }
}

/// Select rooms with the default engine (first-found tie-break)
pub fn select_rooms(available: &[RoomNumber], count: usize) -> ReservationResult<Allocation> {
    AllocationEngine::default().select(available, count)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rooms(raw: &[i64]) -> Vec<RoomNumber> {
        raw.iter().map(|&r| RoomNumber::new(r).unwrap()).collect()
    }

    fn values(allocation: &Allocation) -> Vec<u16> {
        allocation.rooms.iter().map(|r| r.value()).collect()
    }

    #[test]
    fn test_request_size_limits() {
        let available = rooms(&[101, 102, 103, 104, 105, 106]);
        assert_eq!(
            select_rooms(&available, 0),
            Err(ReservationError::InvalidRequestSize { requested: 0, max: 5 })
        );
        assert_eq!(
            select_rooms(&available, 6),
            Err(ReservationError::InvalidRequestSize { requested: 6, max: 5 })
        );
    }

    #[test]
    fn test_request_size_checked_before_availability() {
        assert!(matches!(
            select_rooms(&rooms(&[101]), 6),
            Err(ReservationError::InvalidRequestSize { .. })
        ));
    }

    #[test]
    fn test_insufficient_availability() {
        assert_eq!(
            select_rooms(&rooms(&[101, 205]), 3),
            Err(ReservationError::InsufficientAvailability { requested: 3, available: 2 })
        );
        // Duplicates do not count as extra rooms
        assert!(matches!(
            select_rooms(&rooms(&[101, 101, 101]), 2),
            Err(ReservationError::InsufficientAvailability { requested: 2, available: 1 })
        ));
        assert!(select_rooms(&[], 1).is_err());
    }

    #[test]
    fn test_single_room_uses_canonical_order() {
        let allocation = select_rooms(&rooms(&[1003, 502, 207, 1001]), 1).unwrap();
        assert_eq!(values(&allocation), vec![207]);
        assert_eq!(allocation.travel_time, 0);
        assert_eq!(allocation.kind, AllocationKind::SingleRoom);
    }

    #[test]
    fn test_same_floor_window() {
        let available = rooms(&[301, 302, 303, 304, 305, 306, 307, 308, 309, 310]);
        let allocation = select_rooms(&available, 3).unwrap();
        assert_eq!(values(&allocation), vec![301, 302, 303]);
        assert_eq!(allocation.travel_time, 2);
        assert_eq!(allocation.kind, AllocationKind::SameFloor);
    }

    #[test]
    fn test_same_floor_prefers_tightest_window() {
        // Gaps on floor 2 make 207-209 the only contiguous run
        let available = rooms(&[201, 204, 207, 208, 209]);
        let allocation = select_rooms(&available, 3).unwrap();
        assert_eq!(values(&allocation), vec![207, 208, 209]);
        assert_eq!(allocation.travel_time, 2);
    }

    #[test]
    fn test_same_floor_considers_every_qualifying_floor() {
        // Floor 1 ranks first but its rooms are spread out; floor 6 is tighter
        let available = rooms(&[101, 104, 107, 110, 605, 606]);
        let allocation = select_rooms(&available, 2).unwrap();
        assert_eq!(values(&allocation), vec![605, 606]);
        assert_eq!(allocation.travel_time, 1);
    }

    #[test]
    fn test_first_found_tie_break_follows_floor_rank() {
        // Floor 4 has more free rooms so its window is seen first
        let available = rooms(&[201, 202, 401, 402, 409]);
        let allocation = select_rooms(&available, 2).unwrap();
        assert_eq!(values(&allocation), vec![401, 402]);
    }

    #[test]
    fn test_lexicographic_tie_break() {
        let available = rooms(&[201, 202, 401, 402, 409]);
        let engine = AllocationEngine::new(TieBreakPolicy::LexicographicallySmallest);
        let allocation = engine.select(&available, 2).unwrap();
        assert_eq!(values(&allocation), vec![201, 202]);
        assert_eq!(engine.tie_break(), TieBreakPolicy::LexicographicallySmallest);
    }

    #[test]
    fn test_multi_floor_fallback() {
        let allocation = select_rooms(&rooms(&[101, 1001]), 2).unwrap();
        assert_eq!(values(&allocation), vec![101, 1001]);
        assert_eq!(allocation.travel_time, 18);
        assert_eq!(allocation.kind, AllocationKind::MultiFloor);
    }

    #[test]
    fn test_multi_floor_takes_from_richest_floors_first() {
        // Floor 5 has 2 free rooms, floors 2 and 8 have one each
        let available = rooms(&[208, 503, 509, 801]);
        let allocation = select_rooms(&available, 3).unwrap();
        assert_eq!(values(&allocation), vec![208, 503, 509]);
        assert_eq!(allocation.floors().len(), 2);
    }

    #[test]
    fn test_input_is_not_mutated() {
        let available = rooms(&[310, 301, 305, 302]);
        let before = available.clone();
        let _ = select_rooms(&available, 2).unwrap();
        assert_eq!(available, before);
    }

    #[test]
    fn test_allocation_display() {
        let allocation = select_rooms(&rooms(&[101, 1001]), 2).unwrap();
        assert_eq!(allocation.to_string(), "101, 1001 (18 min, Multi Floor)");
        assert_eq!(allocation.len(), 2);
        assert!(!allocation.is_empty());
        assert!(allocation.contains(RoomNumber::new(1001).unwrap()));
    }
}
