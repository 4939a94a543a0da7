//! Core types and identifiers for the room allocator
//!
//! This module contains fundamental types, identifiers, errors and configuration
//! structures used throughout the crate.
//!
//! # Overview
//!
//! - **Identifiers**: [`RoomNumber`], a validated room identifier
//! - **Enums**: room status, allocation kind, tie-break policy, output format
//! - **Errors**: [`ReservationError`], the single error type of the core
//! - **Configuration**: building constants and the allocator configuration
//!
//! # Usage Example
//!
//! ```rust
//! use room_allocator::types::*;
//!
//! let room = RoomNumber::new(305)?;
//! assert_eq!(room.floor(), 3);
//! assert_eq!(room.position(), 4);
//!
//! let config = AllocatorConfig {
//!     requested_rooms: 3,
//!     ..Default::default()
//! };
//! assert!(config.validate().is_ok());
//! # Ok::<(), ReservationError>(())
//! ```

pub mod config;
pub mod enums;
pub mod error;
pub mod identifiers;

// Re-export all public types for convenience
pub use config::*;
pub use enums::*;
pub use error::*;
pub use identifiers::*;
