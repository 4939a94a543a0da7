//! Error types and handling
//!
//! Every failure the allocator can report is an explicit value of
//! [`ReservationError`]. Nothing is silently mapped onto a default room or a
//! zero cost.

use super::identifiers::RoomNumber;
use thiserror::Error;

/// Errors that can occur while classifying, scoring, sampling or booking rooms
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ReservationError {
    /// Requested room count is zero or above the per-booking limit
    #[error("Invalid request size: {requested} rooms requested (allowed: 1 to {max})")]
    InvalidRequestSize {
        /// Number of rooms that was asked for
        requested: usize,
        /// Maximum rooms allowed in a single booking
        max: usize,
    },

    /// Not enough free rooms exist right now to satisfy the request
    #[error("Insufficient availability: {requested} rooms requested but only {available} available")]
    InsufficientAvailability {
        /// Number of rooms that was asked for
        requested: usize,
        /// Number of rooms that could be supplied
        available: usize,
    },

    /// Integer that does not name one of the building's rooms
    #[error("Invalid room identifier: {0}")]
    InvalidRoomIdentifier(i64),

    /// Text that could not be read as a room identifier at all
    #[error("Malformed room identifier: {0:?}")]
    MalformedRoomIdentifier(String),

    /// Occupancy probability outside [0, 1] (or NaN)
    #[error("Invalid occupancy probability: {0} (must be between 0.0 and 1.0)")]
    InvalidProbability(f64),

    /// Room is occupied or already booked
    #[error("Room {0} is not available")]
    RoomUnavailable(RoomNumber),

    /// A booking was committed without a current selection
    #[error("No rooms are selected for booking")]
    NothingSelected,
}

impl ReservationError {
    /// Create an invalid request size error against the given limit
    pub fn invalid_request_size(requested: usize, max: usize) -> Self {
        Self::InvalidRequestSize { requested, max }
    }

    /// Create an insufficient availability error
    pub fn insufficient_availability(requested: usize, available: usize) -> Self {
        Self::InsufficientAvailability { requested, available }
    }

    /// Check whether the caller can fix this by changing the request alone
    pub fn is_request_error(&self) -> bool {
        matches!(
            self,
            ReservationError::InvalidRequestSize { .. }
                | ReservationError::InvalidRoomIdentifier(_)
                | ReservationError::MalformedRoomIdentifier(_)
                | ReservationError::InvalidProbability(_)
                | ReservationError::NothingSelected
        )
    }

    /// Get the error category
    pub fn category(&self) -> &'static str {
        match self {
            ReservationError::InvalidRequestSize { .. } => "Request Size",
            ReservationError::InsufficientAvailability { .. } => "Availability",
            ReservationError::InvalidRoomIdentifier(_) => "Room Identifier",
            ReservationError::MalformedRoomIdentifier(_) => "Room Identifier",
            ReservationError::InvalidProbability(_) => "Occupancy",
            ReservationError::RoomUnavailable(_) => "Availability",
            ReservationError::NothingSelected => "Booking",
        }
    }
}

/// Result type for reservation operations
pub type ReservationResult<T> = Result<T, ReservationError>;
