//! Tests for CLI argument parsing functionality
//!
//! These tests verify that command line arguments are parsed and layered on
//! top of the configuration file and the defaults.

use clap::Parser;
use room_allocator::types::config::{AllocatorConfig, CliArgs, ConfigValidationError};
use room_allocator::types::{OutputFormat, TieBreakPolicy};
use std::io::Write;

/// Test parsing with no arguments
#[test]
fn test_default_arguments() {
    let cli_args = CliArgs::try_parse_from(["test"]).unwrap();
    assert!(cli_args.rooms.is_none());
    assert!(cli_args.occupied.is_empty());
    assert!(!cli_args.book);

    let config = AllocatorConfig::from_cli_args(cli_args).unwrap();
    assert_eq!(config, AllocatorConfig::default());
    config.validate().unwrap();
}

/// Test parsing of the room count
#[test]
fn test_rooms_argument_parsing() {
    let cli_args = CliArgs::try_parse_from(["test", "--rooms", "4"]).unwrap();
    assert_eq!(cli_args.rooms, Some(4));

    let cli_args = CliArgs::try_parse_from(["test", "-n", "2"]).unwrap();
    assert_eq!(cli_args.rooms, Some(2));

    // Out-of-range counts parse but fail validation
    let cli_args = CliArgs::try_parse_from(["test", "--rooms", "9"]).unwrap();
    let config = AllocatorConfig::from_cli_args(cli_args).unwrap();
    assert!(matches!(
        config.validate(),
        Err(ConfigValidationError::InvalidRequestedRooms { requested: 9, max: 5 })
    ));

    assert!(CliArgs::try_parse_from(["test", "--rooms", "three"]).is_err());
}

/// Test comma-separated room lists
#[test]
fn test_room_list_parsing() {
    let cli_args =
        CliArgs::try_parse_from(["test", "--occupied", "101,102,1003", "--booked", "205"]).unwrap();
    assert_eq!(cli_args.occupied, vec![101, 102, 1003]);
    assert_eq!(cli_args.booked, vec![205]);

    let config = AllocatorConfig::from_cli_args(cli_args).unwrap();
    assert_eq!(config.occupied_rooms, Some(vec![101, 102, 1003]));
    assert_eq!(config.occupied_room_numbers().unwrap().map(|rooms| rooms.len()), Some(3));
    config.validate().unwrap();
}

/// Test rooms that are outside the building or listed twice
#[test]
fn test_invalid_room_lists() {
    let cli_args = CliArgs::try_parse_from(["test", "--occupied", "101,1008"]).unwrap();
    let config = AllocatorConfig::from_cli_args(cli_args).unwrap();
    assert!(matches!(config.validate(), Err(ConfigValidationError::InvalidRoom { .. })));

    let cli_args =
        CliArgs::try_parse_from(["test", "--occupied", "101,102", "--booked", "102"]).unwrap();
    let config = AllocatorConfig::from_cli_args(cli_args).unwrap();
    assert!(matches!(config.validate(), Err(ConfigValidationError::OverlappingRooms(_))));
}

/// Test tie-break and output format arguments
#[test]
fn test_policy_and_format_arguments() {
    let cli_args = CliArgs::try_parse_from([
        "test",
        "--tie-break",
        "lexicographic",
        "--output-format",
        "json",
        "--seed",
        "42",
        "--exact-route",
        "--book",
    ])
    .unwrap();
    assert_eq!(cli_args.tie_break, Some(TieBreakPolicy::LexicographicallySmallest));

    let config = AllocatorConfig::from_cli_args(cli_args).unwrap();
    assert_eq!(config.get_output_format().unwrap(), OutputFormat::Json);
    assert_eq!(config.seed, Some(42));
    assert!(config.exact_route);
    assert!(config.commit_booking);

    assert!(CliArgs::try_parse_from(["test", "--tie-break", "random"]).is_err());
}

/// Test logging and control flags
#[test]
fn test_control_flags() {
    let cli_args =
        CliArgs::try_parse_from(["test", "-v", "--debug", "--dry-run", "--print-config"]).unwrap();
    assert!(cli_args.verbose);
    assert!(cli_args.debug);
    assert!(cli_args.dry_run);
    assert!(cli_args.print_config);
}

/// Test that CLI values override the configuration file
#[test]
fn test_config_file_with_cli_overrides() {
    let mut file = tempfile::Builder::new().suffix(".json").tempfile().unwrap();
    write!(
        file,
        r#"{{
            "requested_rooms": 2,
            "occupancy_probability": 0.6,
            "tie_break": "lexicographically-smallest",
            "exact_route": true
        }}"#
    )
    .unwrap();
    let path = file.path().to_str().unwrap();

    let cli_args = CliArgs::try_parse_from(["test", "--config", path, "--rooms", "5"]).unwrap();
    let config = AllocatorConfig::from_cli_args(cli_args).unwrap();

    assert_eq!(config.requested_rooms, 5);
    assert_eq!(config.occupancy_probability, 0.6);
    assert_eq!(config.tie_break, TieBreakPolicy::LexicographicallySmallest);
    assert!(config.exact_route);
    assert!(!config.commit_booking);
    config.validate().unwrap();
}

/// Test a missing configuration file
#[test]
fn test_missing_config_file() {
    let cli_args =
        CliArgs::try_parse_from(["test", "--config", "/nonexistent/allocator.json"]).unwrap();
    assert!(AllocatorConfig::from_cli_args(cli_args).is_err());
}
