//! Tests for the travel-time model
//!
//! Covers the cost primitives, the canonical route and the exact solver.

use rand::{rngs::StdRng, seq::SliceRandom, Rng, SeedableRng};
use room_allocator::facility::{
    all_room_numbers, horizontal_travel_time, optimal_travel_time, route_legs, total_travel_time,
    travel_time_between, vertical_travel_time,
};
use room_allocator::types::{ReservationError, RoomNumber};

fn rooms(raw: &[i64]) -> Vec<RoomNumber> {
    raw.iter().map(|&r| RoomNumber::new(r).unwrap()).collect()
}

#[test]
fn test_cost_primitives() {
    let r = rooms(&[301, 305, 1001, 1007]);

    assert_eq!(horizontal_travel_time(r[0], r[1]), Some(4));
    assert_eq!(horizontal_travel_time(r[1], r[0]), Some(4));
    assert_eq!(horizontal_travel_time(r[0], r[0]), Some(0));
    assert_eq!(horizontal_travel_time(r[0], r[2]), None);

    assert_eq!(vertical_travel_time(1, 10), 18);
    assert_eq!(vertical_travel_time(7, 3), 8);

    // 305 -> corridor (4) + floors 3..10 (14) + corridor -> 1007 (6)
    assert_eq!(travel_time_between(r[1], r[3]), 24);
}

#[test]
fn test_small_sets_cost_nothing() {
    assert_eq!(total_travel_time(&[]), 0);
    for room in all_room_numbers() {
        assert_eq!(total_travel_time(&[room]), 0);
    }
}

#[test]
fn test_known_routes() {
    assert_eq!(total_travel_time(&rooms(&[301, 302, 303])), 2);
    assert_eq!(total_travel_time(&rooms(&[101, 1001])), 18);
    // 101 -> 102 is 1, then 102 -> 203 is 1 + 2 + 2
    assert_eq!(total_travel_time(&rooms(&[203, 102, 101])), 6);
}

#[test]
fn test_travel_time_ignores_input_order() {
    let mut rng = StdRng::seed_from_u64(7);
    let universe = all_room_numbers();

    for _ in 0..200 {
        let size = rng.gen_range(0..=8);
        let mut selection: Vec<RoomNumber> =
            universe.choose_multiple(&mut rng, size).copied().collect();
        let expected = total_travel_time(&selection);

        for _ in 0..5 {
            selection.shuffle(&mut rng);
            assert_eq!(total_travel_time(&selection), expected);
        }
    }
}

#[test]
fn test_interior_room_costs_no_more_than_edge_room() {
    // On one floor the cost is the span, so filling the inside is free
    let base = rooms(&[402, 406]);
    let inner = rooms(&[402, 404, 406]);
    let edge = rooms(&[402, 406, 407]);

    assert_eq!(total_travel_time(&base), 4);
    assert_eq!(total_travel_time(&inner), total_travel_time(&base));
    assert!(total_travel_time(&inner) <= total_travel_time(&edge));

    for floor in 1..=9i64 {
        for low in 1..=8i64 {
            for high in (low + 2)..=10 {
                let span = rooms(&[floor * 100 + low, floor * 100 + high]);
                let cost = total_travel_time(&span);
                for middle in (low + 1)..high {
                    let mut filled = span.clone();
                    filled.push(RoomNumber::new(floor * 100 + middle).unwrap());
                    assert_eq!(total_travel_time(&filled), cost);
                }
            }
        }
    }
}

#[test]
fn test_route_legs_sum_to_total() {
    let selection = rooms(&[1003, 205, 201, 207]);
    let legs = route_legs(&selection);

    assert_eq!(legs.len(), 3);
    assert_eq!(legs[0].from.value(), 201);
    assert_eq!(legs[2].to.value(), 1003);
    assert_eq!(legs.iter().map(|leg| leg.minutes).sum::<u32>(), total_travel_time(&selection));
}

#[test]
fn test_optimal_route_beats_canonical_order() {
    // Canonical order walks 101 -> 110 -> 201 (9 + 11); starting at 110 is cheaper
    let selection = rooms(&[101, 110, 201]);
    assert_eq!(total_travel_time(&selection), 20);
    assert_eq!(optimal_travel_time(&selection).unwrap(), 11);
}

#[test]
fn test_optimal_route_never_exceeds_canonical() {
    let mut rng = StdRng::seed_from_u64(11);
    let universe = all_room_numbers();

    for _ in 0..100 {
        let size = rng.gen_range(0..=5);
        let selection: Vec<RoomNumber> =
            universe.choose_multiple(&mut rng, size).copied().collect();
        assert!(optimal_travel_time(&selection).unwrap() <= total_travel_time(&selection));
    }

    let too_many = rooms(&[101, 102, 103, 104, 105, 106]);
    assert_eq!(
        optimal_travel_time(&too_many),
        Err(ReservationError::InvalidRequestSize { requested: 6, max: 5 })
    );
}
