//! Configuration structures for the room allocator
//!
//! This module contains the fixed building constants, the allocator
//! configuration, and the CLI / config-file layering used by the binary.

use super::identifiers::RoomNumber;
use super::{OutputFormat, ReservationError, TieBreakPolicy};
use clap::Parser;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::fs;
use std::path::Path;

/// Building geometry and cost constants
///
/// Presentation layers read these instead of hardcoding the numbers.
pub mod building {
    /// Number of floors in the building
    pub const FLOORS: u8 = 10;

    /// Rooms on each of floors 1-9
    pub const ROOMS_PER_FLOOR: u8 = 10;

    /// Rooms on the top floor
    pub const TOP_FLOOR_ROOMS: u8 = 7;

    /// Total rooms in the building
    pub const TOTAL_ROOMS: usize =
        (FLOORS as usize - 1) * ROOMS_PER_FLOOR as usize + TOP_FLOOR_ROOMS as usize;

    /// Maximum rooms a single booking may request
    pub const MAX_ROOMS_PER_BOOKING: usize = 5;

    /// Minutes to walk one room along a corridor
    pub const HORIZONTAL_TRAVEL_TIME: u32 = 1;

    /// Minutes to move one floor up or down
    pub const VERTICAL_TRAVEL_TIME: u32 = 2;

    /// Occupancy probability used when none is configured
    pub const DEFAULT_OCCUPANCY_PROBABILITY: f64 = 0.3;
}

/// Command line arguments structure
#[derive(Debug, Clone, Parser)]
#[command(
    name = "room-allocator",
    version = "0.1.0",
    about = "Room Allocator - Picks the lowest travel-time set of free rooms",
    long_about = "Selects a set of free rooms in a 10-floor building (97 rooms) that minimises total travel time between them, using a fixed corridor at the start of every floor.

EXAMPLES:
    # Book 3 rooms against a random 30% occupancy
    room-allocator --rooms 3

    # Reproducible occupancy snapshot
    room-allocator --rooms 4 --occupancy-probability 0.6 --seed 42

    # Explicit snapshot
    room-allocator --rooms 2 --occupied 101,102,103 --booked 201

    # Commit the selection and show the resulting inventory
    room-allocator --rooms 5 --book --output-format json

    # Generate configuration template
    room-allocator --print-config > my-config.json

CONFIGURATION:
    Configuration can be provided via:
    1. Command line arguments (highest priority)
    2. Configuration file (--config flag)
    3. Default values (lowest priority)

    Supported configuration file formats: JSON (.json)"
)]
pub struct CliArgs {
    /// Configuration file path (JSON format)
    #[arg(
        short,
        long,
        help = "Configuration file path (JSON format)",
        long_help = "Path to a JSON configuration file. CLI arguments will override file settings."
    )]
    pub config: Option<String>,

    /// Number of rooms to allocate
    #[arg(
        short = 'n',
        long,
        help = "Number of rooms to allocate (1-5)",
        long_help = "Number of rooms requested in a single booking. Range: 1-5. Default: 1"
    )]
    pub rooms: Option<usize>,

    /// Probability that each room is occupied in a random snapshot
    #[arg(
        long,
        help = "Random occupancy probability (0.0-1.0)",
        long_help = "Each room is independently marked occupied with this probability when no explicit --occupied list is given. Range: 0.0-1.0. Default: 0.3"
    )]
    pub occupancy_probability: Option<f64>,

    /// Explicitly occupied rooms
    #[arg(long, value_delimiter = ',', help = "Comma-separated occupied rooms (disables random occupancy)")]
    pub occupied: Vec<i64>,

    /// Explicitly booked rooms
    #[arg(long, value_delimiter = ',', help = "Comma-separated rooms already booked")]
    pub booked: Vec<i64>,

    /// Tie-break policy for equal-cost same-floor windows
    #[arg(
        long,
        help = "Tie-break policy (first-found or lexicographic)",
        long_help = "How equal-cost candidates on a single floor are resolved. first-found keeps the first minimum in floor-rank order; lexicographic keeps the smallest room list. Default: first-found"
    )]
    pub tie_break: Option<TieBreakPolicy>,

    /// Output format for the report
    #[arg(long, help = "Output format (text or json)")]
    pub output_format: Option<String>,

    /// Random seed for reproducible results
    #[arg(long, help = "Random seed for reproducible results")]
    pub seed: Option<u64>,

    /// Also report the exact minimum route time for the selection
    #[arg(long, help = "Report the exact minimum travel time over all visiting orders")]
    pub exact_route: bool,

    /// Commit the selected rooms as booked
    #[arg(long, help = "Book the selected rooms and report the updated inventory")]
    pub book: bool,

    /// Enable verbose logging
    #[arg(short, long, help = "Enable verbose logging")]
    pub verbose: bool,

    /// Enable debug logging
    #[arg(short, long, help = "Enable debug logging")]
    pub debug: bool,

    /// Dry run mode - validate configuration without allocating
    #[arg(long, help = "Validate configuration without allocating rooms")]
    pub dry_run: bool,

    /// Print default configuration and exit
    #[arg(long, help = "Print default configuration in JSON format and exit")]
    pub print_config: bool,
}

/// Configuration file structure (allows partial configuration)
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct ConfigFile {
    /// Number of rooms to allocate
    pub requested_rooms: Option<usize>,

    /// Probability that each room is occupied in a random snapshot
    pub occupancy_probability: Option<f64>,

    /// Explicitly occupied rooms
    pub occupied_rooms: Option<Vec<i64>>,

    /// Explicitly booked rooms
    pub booked_rooms: Option<Vec<i64>>,

    /// Tie-break policy for equal-cost same-floor windows
    pub tie_break: Option<TieBreakPolicy>,

    /// Output format for the report
    pub output_format: Option<String>,

    /// Random seed for reproducible results
    pub seed: Option<u64>,

    /// Also report the exact minimum route time
    pub exact_route: Option<bool>,

    /// Commit the selected rooms as booked
    pub commit_booking: Option<bool>,
}

/// Configuration for a room allocation run
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct AllocatorConfig {
    /// Number of rooms to allocate
    pub requested_rooms: usize,

    /// Probability that each room is occupied in a random snapshot
    pub occupancy_probability: f64,

    /// Explicitly occupied rooms (replaces random occupancy when set)
    pub occupied_rooms: Option<Vec<i64>>,

    /// Explicitly booked rooms
    pub booked_rooms: Vec<i64>,

    /// Tie-break policy for equal-cost same-floor windows
    pub tie_break: TieBreakPolicy,

    /// Output format for the report
    pub output_format: String,

    /// Random seed for reproducible results
    pub seed: Option<u64>,

    /// Also report the exact minimum route time
    pub exact_route: bool,

    /// Commit the selected rooms as booked
    pub commit_booking: bool,
}

/// Configuration loading errors
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// Configuration file not found
    #[error("Configuration file not found: {0}")]
    FileNotFound(String),

    /// Configuration file read error
    #[error("Failed to read configuration file: {0}")]
    ReadError(#[from] std::io::Error),

    /// JSON parsing error
    #[error("Failed to parse JSON configuration: {0}")]
    JsonError(#[from] serde_json::Error),

    /// Unsupported configuration file format
    #[error("Unsupported configuration file format: {0} (supported: .json)")]
    UnsupportedFormat(String),
}

/// Validation errors for allocator configuration
#[derive(Debug, thiserror::Error)]
pub enum ConfigValidationError {
    /// Requested room count is out of range
    #[error("Requested rooms must be between 1 and {max}, got {requested}")]
    InvalidRequestedRooms {
        /// The requested room count
        requested: usize,
        /// Maximum rooms per booking
        max: usize,
    },

    /// Percentage value is out of range
    #[error("Invalid percentage for {field}: {value} (must be between 0.0 and 1.0)")]
    InvalidPercentage {
        /// Name of the field with invalid percentage
        field: String,
        /// The invalid percentage value
        value: f64,
    },

    /// A room list contains an identifier outside the building
    #[error("Invalid room in {field}: {source}")]
    InvalidRoom {
        /// Name of the field holding the bad identifier
        field: String,
        /// Underlying identifier error
        source: ReservationError,
    },

    /// A room is listed as both occupied and booked
    #[error("Room {0} is listed as both occupied and booked")]
    OverlappingRooms(RoomNumber),

    /// Output format is not recognised
    #[error("Unknown output format: {0}")]
    InvalidOutputFormat(String),
}

impl Default for AllocatorConfig {
    fn default() -> Self {
        Self {
            requested_rooms: 1,
            occupancy_probability: building::DEFAULT_OCCUPANCY_PROBABILITY,
            occupied_rooms: None,
            booked_rooms: Vec::new(),
            tie_break: TieBreakPolicy::FirstFound,
            output_format: "text".to_string(),
            seed: None,
            exact_route: false,
            commit_booking: false,
        }
    }
}

impl AllocatorConfig {
    /// Create a new configuration from command line arguments and optional config file
    pub fn from_args() -> Result<Self, ConfigError> {
        let args = CliArgs::parse();
        Self::from_cli_args(args)
    }

    /// Create configuration from parsed CLI arguments
    pub fn from_cli_args(args: CliArgs) -> Result<Self, ConfigError> {
        let mut config = Self::default();

        if let Some(config_path) = &args.config {
            config = Self::from_file(config_path)?;
        }

        // CLI takes precedence over the file
        Self::apply_cli_overrides(&mut config, args);

        Ok(config)
    }

    /// Load configuration from a JSON file
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let path = path.as_ref();

        if !path.exists() {
            return Err(ConfigError::FileNotFound(path.display().to_string()));
        }

        let content = fs::read_to_string(path)?;

        match path.extension().and_then(|ext| ext.to_str()) {
            Some("json") => {
                let config_file: ConfigFile = serde_json::from_str(&content)?;
                Ok(Self::from_config_file(config_file))
            }
            Some(ext) => Err(ConfigError::UnsupportedFormat(ext.to_string())),
            None => Err(ConfigError::UnsupportedFormat("no extension".to_string())),
        }
    }

    /// Create configuration from a config file, merging with defaults
    fn from_config_file(config_file: ConfigFile) -> Self {
        let defaults = Self::default();

        Self {
            requested_rooms: config_file.requested_rooms.unwrap_or(defaults.requested_rooms),
            occupancy_probability: config_file
                .occupancy_probability
                .unwrap_or(defaults.occupancy_probability),
            occupied_rooms: config_file.occupied_rooms.or(defaults.occupied_rooms),
            booked_rooms: config_file.booked_rooms.unwrap_or(defaults.booked_rooms),
            tie_break: config_file.tie_break.unwrap_or(defaults.tie_break),
            output_format: config_file.output_format.unwrap_or(defaults.output_format),
            seed: config_file.seed.or(defaults.seed),
            exact_route: config_file.exact_route.unwrap_or(defaults.exact_route),
            commit_booking: config_file.commit_booking.unwrap_or(defaults.commit_booking),
        }
    }

    /// Apply CLI argument overrides to configuration
    fn apply_cli_overrides(config: &mut Self, args: CliArgs) {
        if let Some(value) = args.rooms {
            config.requested_rooms = value;
        }
        if let Some(value) = args.occupancy_probability {
            config.occupancy_probability = value;
        }
        if !args.occupied.is_empty() {
            config.occupied_rooms = Some(args.occupied);
        }
        if !args.booked.is_empty() {
            config.booked_rooms = args.booked;
        }
        if let Some(value) = args.tie_break {
            config.tie_break = value;
        }
        if let Some(value) = args.output_format {
            config.output_format = value;
        }
        if let Some(value) = args.seed {
            config.seed = Some(value);
        }

        // Flags can only switch features on
        config.exact_route |= args.exact_route;
        config.commit_booking |= args.book;
    }

    /// Save configuration to a JSON file
    pub fn save_to_file<P: AsRef<Path>>(&self, path: P) -> Result<(), ConfigError> {
        let content = serde_json::to_string_pretty(self)?;
        fs::write(path, content)?;
        Ok(())
    }

    /// Print configuration as JSON
    pub fn print_json(&self) -> Result<String, ConfigError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Validate the configuration parameters
    pub fn validate(&self) -> Result<(), ConfigValidationError> {
        if self.requested_rooms == 0 || self.requested_rooms > building::MAX_ROOMS_PER_BOOKING {
            return Err(ConfigValidationError::InvalidRequestedRooms {
                requested: self.requested_rooms,
                max: building::MAX_ROOMS_PER_BOOKING,
            });
        }

        self.validate_percentage("occupancy_probability", self.occupancy_probability)?;

        let occupied = self.occupied_room_numbers()?.unwrap_or_default();
        let booked = self.booked_room_numbers()?;
        if let Some(room) = occupied.intersection(&booked).next() {
            return Err(ConfigValidationError::OverlappingRooms(*room));
        }

        self.get_output_format()?;

        Ok(())
    }

    /// Helper method to validate percentage values
    fn validate_percentage(&self, field: &str, value: f64) -> Result<(), ConfigValidationError> {
        if !(0.0..=1.0).contains(&value) {
            return Err(ConfigValidationError::InvalidPercentage {
                field: field.to_string(),
                value,
            });
        }
        Ok(())
    }

    /// Explicit occupied rooms as validated room numbers, if configured
    pub fn occupied_room_numbers(
        &self,
    ) -> Result<Option<BTreeSet<RoomNumber>>, ConfigValidationError> {
        self.occupied_rooms
            .as_deref()
            .map(|rooms| parse_room_list("occupied_rooms", rooms))
            .transpose()
    }

    /// Explicit booked rooms as validated room numbers
    pub fn booked_room_numbers(&self) -> Result<BTreeSet<RoomNumber>, ConfigValidationError> {
        parse_room_list("booked_rooms", &self.booked_rooms)
    }

    /// Get the output format as an enum value
    pub fn get_output_format(&self) -> Result<OutputFormat, ConfigValidationError> {
        self.output_format
            .parse()
            .map_err(|_| ConfigValidationError::InvalidOutputFormat(self.output_format.clone()))
    }
}

fn parse_room_list(field: &str, rooms: &[i64]) -> Result<BTreeSet<RoomNumber>, ConfigValidationError> {
    rooms
        .iter()
        .map(|&raw| {
            RoomNumber::new(raw).map_err(|source| ConfigValidationError::InvalidRoom {
                field: field.to_string(),
                source,
            })
        })
        .collect()
}
