// Room Allocator - Main Entry Point
//
// You can run it via Cargo:
//
// ```console
// $ cargo build --release
// $ ./target/release/room-allocator --rooms 3
// ```
//
// Or with an explicit snapshot:
//
// ```console
// $ ./target/release/room-allocator --rooms 2 --occupied 101,102 --booked 201 --output-format json
// ```

use anyhow::{Context, Result};
use clap::Parser;
use room_allocator::allocation::{Allocation, AllocationEngine};
use room_allocator::facility::{optimal_travel_time, route_legs, InventorySnapshot};
use room_allocator::simulation::{
    InventoryStatistics, LoggingConfig, OccupancySampler, ReservationSession,
};
use room_allocator::types::config::CliArgs;
use room_allocator::types::{AllocatorConfig, OutputFormat};
use serde::Serialize;
use std::process;
use tracing::{error, info};

/// Machine-readable result of one run
#[derive(Debug, Serialize)]
struct AllocationReport {
    requested_rooms: usize,
    allocation: Allocation,
    optimal_travel_time: Option<u32>,
    booked: bool,
    statistics: InventoryStatistics,
}

fn main() {
    // Parse CLI arguments first to check for special flags
    let args = CliArgs::parse();

    if args.print_config {
        match AllocatorConfig::default().print_json() {
            Ok(json) => {
                println!("{}", json);
                return;
            }
            Err(e) => {
                eprintln!("Failed to serialize default configuration: {}", e);
                process::exit(1);
            }
        }
    }

    let logging_result = if args.debug {
        LoggingConfig::init_debug()
    } else if args.verbose {
        LoggingConfig::init_verbose()
    } else {
        LoggingConfig::new().with_level(tracing::Level::WARN).init()
    };

    let logging_guard = match logging_result {
        Ok(guard) => guard,
        Err(e) => {
            eprintln!("Failed to initialize logging: {}", e);
            process::exit(1);
        }
    };

    let code = run(args);
    // Flush buffered log lines; process::exit skips destructors
    drop(logging_guard);
    process::exit(code);
}

/// Load, validate and execute the configuration, returning the exit code
fn run(args: CliArgs) -> i32 {
    info!("Starting Room Allocator");

    let dry_run = args.dry_run;
    let config = match AllocatorConfig::from_cli_args(args) {
        Ok(config) => config,
        Err(e) => {
            error!("Failed to load configuration: {}", e);
            return 1;
        }
    };

    if let Err(e) = config.validate() {
        error!("Configuration validation failed: {}", e);
        return 1;
    }

    info!("Configuration loaded and validated successfully");

    if dry_run {
        eprintln!("Configuration validation successful!");
        eprintln!("Dry run mode - no rooms will be selected.");
        print_configuration_summary(&config);
        return 0;
    }

    if let Err(e) = run_allocation(&config) {
        error!("Allocation failed: {:#}", e);
        return 1;
    }

    info!("Room Allocator completed successfully");
    0
}

/// Build the session described by the configuration
fn build_session(config: &AllocatorConfig) -> Result<ReservationSession> {
    let engine = AllocationEngine::new(config.tie_break);
    let sampler = OccupancySampler::from_seed(config.seed);
    let mut session = ReservationSession::new(engine, sampler);

    let booked = config.booked_room_numbers().context("Invalid booked rooms")?;
    let occupied = match config.occupied_room_numbers().context("Invalid occupied rooms")? {
        Some(occupied) => occupied,
        None => {
            session
                .randomize_occupancy(config.occupancy_probability)
                .context("Failed to sample occupancy")?;
            // Explicitly booked rooms win over sampled occupancy
            session.inventory().occupied().difference(&booked).copied().collect()
        }
    };

    let snapshot =
        InventorySnapshot::from_parts(occupied, booked).context("Inconsistent room snapshot")?;
    Ok(session.with_inventory(snapshot))
}

/// Select rooms, report them and optionally commit the booking
fn run_allocation(config: &AllocatorConfig) -> Result<()> {
    let output_format = config.get_output_format()?;
    let mut session = build_session(config)?;

    let allocation = session
        .find_optimal(config.requested_rooms)
        .with_context(|| format!("No allocation for {} rooms", config.requested_rooms))?
        .clone();

    let optimal = if config.exact_route {
        Some(optimal_travel_time(&allocation.rooms)?)
    } else {
        None
    };

    if config.commit_booking {
        session.book_selection().context("Failed to book the selected rooms")?;
    }

    let report = AllocationReport {
        requested_rooms: config.requested_rooms,
        allocation,
        optimal_travel_time: optimal,
        booked: config.commit_booking,
        statistics: session.statistics(),
    };

    match output_format {
        OutputFormat::Json => {
            let json = serde_json::to_string_pretty(&report).context("Failed to serialize report")?;
            println!("{}", json);
        }
        OutputFormat::Text => print_text_report(&report),
    }
    Ok(())
}

fn print_text_report(report: &AllocationReport) {
    println!("Selected Rooms: {}", report.allocation);
    println!();
    println!("Route:");
    for leg in route_legs(&report.allocation.rooms) {
        println!("  {} -> {}: {} min", leg.from, leg.to, leg.minutes);
    }
    println!("Total Travel Time: {} min", report.allocation.travel_time);
    if let Some(optimal) = report.optimal_travel_time {
        println!("Optimal Visiting Order: {} min", optimal);
    }
    if report.booked {
        println!("Booked: yes");
    }
    println!();
    print!("{}", report.statistics);
}

fn print_configuration_summary(config: &AllocatorConfig) {
    eprintln!("Configuration:");
    eprintln!("  Requested Rooms: {}", config.requested_rooms);
    match &config.occupied_rooms {
        Some(rooms) => eprintln!("  Occupied Rooms: {:?}", rooms),
        None => eprintln!(
            "  Occupancy Probability: {:.1}%",
            config.occupancy_probability * 100.0
        ),
    }
    if !config.booked_rooms.is_empty() {
        eprintln!("  Booked Rooms: {:?}", config.booked_rooms);
    }
    eprintln!("  Tie Break: {}", config.tie_break);
    eprintln!("  Output Format: {}", config.output_format);
    if let Some(seed) = config.seed {
        eprintln!("  Random Seed: {}", seed);
    }
    eprintln!("  Exact Route: {}", config.exact_route);
    eprintln!("  Commit Booking: {}", config.commit_booking);
    eprintln!();
}
