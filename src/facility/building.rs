//! Building topology
//!
//! This module maps room identifiers onto the fixed building geometry: ten
//! floors, ten rooms on floors 1-9 and seven rooms on floor 10. Every room is
//! addressed by its floor and its zero-based position from the corridor.

use crate::types::building::{FLOORS, ROOMS_PER_FLOOR, TOP_FLOOR_ROOMS, TOTAL_ROOMS};
use crate::types::{ReservationResult, RoomNumber};
use std::collections::BTreeMap;

/// Floor of a raw room identifier
///
/// Identifiers outside the 97-room universe fail with
/// [`ReservationError::InvalidRoomIdentifier`](crate::types::ReservationError::InvalidRoomIdentifier)
/// instead of being coerced onto some floor.
pub fn floor_of(room: i64) -> ReservationResult<u8> {
    Ok(RoomNumber::new(room)?.floor())
}

/// Zero-based position of a raw room identifier on its floor
pub fn position_on_floor(room: i64) -> ReservationResult<u8> {
    Ok(RoomNumber::new(room)?.position())
}

/// Number of rooms on a floor, or `None` if the floor does not exist
pub fn floor_capacity(floor: u8) -> Option<u8> {
    match floor {
        f if f == FLOORS => Some(TOP_FLOOR_ROOMS),
        f if (1..FLOORS).contains(&f) => Some(ROOMS_PER_FLOOR),
        _ => None,
    }
}

/// Every room in the building in canonical order
///
/// Floors ascend from 1 to 10 and positions ascend within each floor. This is
/// the order used for every deterministic default in the crate.
pub fn all_room_numbers() -> Vec<RoomNumber> {
    let mut rooms = Vec::with_capacity(TOTAL_ROOMS);
    for floor in 1..=FLOORS {
        let capacity = floor_capacity(floor).unwrap_or(0);
        // from_position cannot fail inside the capacity table
        rooms.extend((0..capacity).filter_map(|position| RoomNumber::from_position(floor, position).ok()));
    }
    rooms
}

/// Group rooms by floor, each floor's rooms sorted by position
///
/// Works on a private copy; duplicates in the input are collapsed.
pub fn group_by_floor<I>(rooms: I) -> BTreeMap<u8, Vec<RoomNumber>>
where
    I: IntoIterator<Item = RoomNumber>,
{
    let mut by_floor: BTreeMap<u8, Vec<RoomNumber>> = BTreeMap::new();
    for room in rooms {
        by_floor.entry(room.floor()).or_default().push(room);
    }
    for floor_rooms in by_floor.values_mut() {
        floor_rooms.sort_by_key(|room| room.position());
        floor_rooms.dedup();
    }
    by_floor
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::ReservationError;
    use std::collections::HashSet;

    #[test]
    fn test_floor_of() {
        assert_eq!(floor_of(101).unwrap(), 1);
        assert_eq!(floor_of(910).unwrap(), 9);
        assert_eq!(floor_of(1001).unwrap(), 10);
        assert_eq!(floor_of(1007).unwrap(), 10);
    }

    #[test]
    fn test_position_on_floor() {
        assert_eq!(position_on_floor(101).unwrap(), 0);
        assert_eq!(position_on_floor(110).unwrap(), 9);
        assert_eq!(position_on_floor(1001).unwrap(), 0);
        assert_eq!(position_on_floor(1007).unwrap(), 6);
    }

    #[test]
    fn test_invalid_identifiers_are_rejected() {
        assert_eq!(floor_of(0), Err(ReservationError::InvalidRoomIdentifier(0)));
        assert_eq!(floor_of(-101), Err(ReservationError::InvalidRoomIdentifier(-101)));
        assert_eq!(position_on_floor(1008), Err(ReservationError::InvalidRoomIdentifier(1008)));
        assert!(position_on_floor(150).is_err());
    }

    #[test]
    fn test_floor_capacity() {
        assert_eq!(floor_capacity(1), Some(10));
        assert_eq!(floor_capacity(9), Some(10));
        assert_eq!(floor_capacity(10), Some(7));
        assert_eq!(floor_capacity(0), None);
        assert_eq!(floor_capacity(11), None);
    }

    #[test]
    fn test_all_room_numbers() {
        let rooms = all_room_numbers();
        assert_eq!(rooms.len(), 97);
        assert_eq!(rooms.first().unwrap().value(), 101);
        assert_eq!(rooms.last().unwrap().value(), 1007);

        let distinct: HashSet<_> = rooms.iter().collect();
        assert_eq!(distinct.len(), 97);

        assert!(rooms.windows(2).all(|pair| pair[0].canonical_key() < pair[1].canonical_key()));
    }

    #[test]
    fn test_topology_is_a_bijection() {
        let rooms = all_room_numbers();
        let pairs: HashSet<(u8, u8)> = rooms.iter().map(|r| r.canonical_key()).collect();
        assert_eq!(pairs.len(), rooms.len());

        for room in rooms {
            let rebuilt = RoomNumber::from_position(room.floor(), room.position()).unwrap();
            assert_eq!(rebuilt, room);
        }
    }

    #[test]
    fn test_group_by_floor() {
        let rooms = [305, 1002, 301, 303, 1002]
            .into_iter()
            .map(|raw| RoomNumber::new(raw).unwrap());
        let grouped = group_by_floor(rooms);

        assert_eq!(grouped.len(), 2);
        let floor_three: Vec<u16> = grouped[&3].iter().map(|r| r.value()).collect();
        assert_eq!(floor_three, vec![301, 303, 305]);
        assert_eq!(grouped[&10].len(), 1);
    }
}
