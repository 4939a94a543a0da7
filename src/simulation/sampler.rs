//! Occupancy sampler
//!
//! Produces random occupancy snapshots to exercise the allocation engine. Each
//! room is an independent Bernoulli trial with the same probability.

use crate::facility::building::all_room_numbers;
use crate::types::{ReservationError, ReservationResult, RoomNumber};
use rand::{rngs::StdRng, Rng, SeedableRng};
use std::collections::BTreeSet;
use tracing::{debug, info};

/// Random generator of occupied-room sets
#[derive(Debug, Clone)]
pub struct OccupancySampler {
    rng: StdRng,
}

impl OccupancySampler {
    /// Create a sampler seeded from system entropy
    pub fn new() -> Self {
        debug!("Using entropy-based random seed");
        Self { rng: StdRng::from_entropy() }
    }

    /// Create a sampler with a specific seed for reproducible snapshots
    pub fn with_seed(seed: u64) -> Self {
        info!("Using deterministic seed: {}", seed);
        Self { rng: StdRng::seed_from_u64(seed) }
    }

    /// Create a sampler from an optional seed
    pub fn from_seed(seed: Option<u64>) -> Self {
        seed.map_or_else(Self::new, Self::with_seed)
    }

    /// Mark each room occupied with the given probability
    ///
    /// Probabilities outside [0, 1] (and NaN) are rejected with
    /// `InvalidProbability`; they are never clamped.
    pub fn sample(&mut self, probability: f64) -> ReservationResult<BTreeSet<RoomNumber>> {
        if !(0.0..=1.0).contains(&probability) {
            return Err(ReservationError::InvalidProbability(probability));
        }

        let occupied: BTreeSet<RoomNumber> = all_room_numbers()
            .into_iter()
            .filter(|_| self.rng.gen_bool(probability))
            .collect();

        debug!(probability, occupied = occupied.len(), "Sampled random occupancy");
        Ok(occupied)
    }
}

impl Default for OccupancySampler {
    fn default() -> Self {
        Self::new()
    }
}

/// Sample a random occupied set with an entropy-seeded generator
pub fn sample_occupancy(probability: f64) -> ReservationResult<BTreeSet<RoomNumber>> {
    OccupancySampler::new().sample(probability)
}
