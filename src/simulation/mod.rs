//! Stateful layer around the allocation core
//!
//! - [`OccupancySampler`]: random occupancy snapshots for exercising the engine
//! - [`ReservationSession`]: inventory, current selection and booking
//! - [`InventoryStatistics`]: building and per-floor summaries
//! - [`LoggingConfig`]: tracing subscriber setup
//!
//! ```rust
//! use room_allocator::simulation::*;
//! use room_allocator::allocation::AllocationEngine;
//!
//! let mut session = ReservationSession::new(AllocationEngine::default(), OccupancySampler::with_seed(3));
//! session.randomize_occupancy(0.0)?;
//! let selection = session.find_optimal(2)?;
//! assert_eq!(selection.travel_time, 1);
//! # Ok::<(), room_allocator::types::ReservationError>(())
//! ```

pub mod logging;
pub mod sampler;
pub mod session;
pub mod statistics;

pub use logging::*;
pub use sampler::*;
pub use session::*;
pub use statistics::*;
