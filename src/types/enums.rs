//! Enumeration types for the room allocator
//!
//! This module contains the enumerations shared across the crate: room status,
//! allocation outcome kinds, the tie-break policy and output formats.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Availability status of a room within an inventory snapshot
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RoomStatus {
    /// Free to be allocated
    Available,
    /// Taken by an existing guest
    Occupied,
    /// Reserved by a booking committed in this session
    Booked,
}

impl fmt::Display for RoomStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RoomStatus::Available => write!(f, "Available"),
            RoomStatus::Occupied => write!(f, "Occupied"),
            RoomStatus::Booked => write!(f, "Booked"),
        }
    }
}

/// Which pass of the allocation engine produced a result
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum AllocationKind {
    /// Single room request, answered by canonical order
    SingleRoom,
    /// All rooms found on one floor
    SameFloor,
    /// Greedy fallback spanning several floors
    MultiFloor,
}

impl fmt::Display for AllocationKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AllocationKind::SingleRoom => write!(f, "Single Room"),
            AllocationKind::SameFloor => write!(f, "Same Floor"),
            AllocationKind::MultiFloor => write!(f, "Multi Floor"),
        }
    }
}

/// How the same-floor pass resolves windows with equal travel time
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "kebab-case")]
pub enum TieBreakPolicy {
    /// Keep the first minimum in floor-rank then window order
    #[default]
    FirstFound,
    /// Keep the lexicographically smallest room list among equal minima
    LexicographicallySmallest,
}

impl fmt::Display for TieBreakPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TieBreakPolicy::FirstFound => write!(f, "first-found"),
            TieBreakPolicy::LexicographicallySmallest => write!(f, "lexicographically-smallest"),
        }
    }
}

impl FromStr for TieBreakPolicy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "first-found" | "firstfound" | "first" => Ok(TieBreakPolicy::FirstFound),
            "lexicographically-smallest" | "lexicographic" | "lexicographical" | "smallest" => {
                Ok(TieBreakPolicy::LexicographicallySmallest)
            }
            _ => Err(format!("Unknown tie-break policy: {}", s)),
        }
    }
}

/// Output formats for the command line report
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum OutputFormat {
    /// Human-readable text
    Text,
    /// JSON format for structured data
    Json,
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OutputFormat::Text => write!(f, "TEXT"),
            OutputFormat::Json => write!(f, "JSON"),
        }
    }
}

impl FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "text" | "txt" => Ok(OutputFormat::Text),
            "json" => Ok(OutputFormat::Json),
            _ => Err(format!("Unknown output format: {}", s)),
        }
    }
}
