//! `slot` CLI — check a day's events for conflicts and find alternative slots.
//!
//! ## Usage
//!
//! ```sh
//! # Add events from a JSON array (stdin → stdout) and list conflicts
//! echo '[{"name":"A","start":"09:00","end":"10:00"},
//!        {"name":"B","start":"09:30","end":"10:30"}]' | slot check
//!
//! # Same, from a file, as JSON
//! slot check -i day.json --json
//!
//! # Custom working hours and a 15-minute suggestion grid
//! slot --work-start 09:00 --work-end 17:00 --step 15 check -i day.json
//!
//! # Free slots for an event that is not yet in the schedule
//! slot suggest -i day.json --name "1:1" --start 09:00 --end 09:45
//! ```

use std::fmt::Write as _;
use std::io::{self, Read};

use anyhow::{Context, Result};
use clap::{ArgAction, Parser, Subcommand};
use serde::Deserialize;
use slot_engine::{Conflict, Event, Scheduler, SchedulerConfig, Suggestion, TimeOfDay};
use tracing::info;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(
    name = "slot",
    version,
    about = "Detect overlapping events and suggest alternative slots"
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Start of working hours (HH:MM)
    #[arg(long, global = true, default_value = "08:00")]
    work_start: TimeOfDay,

    /// End of working hours (HH:MM); no suggestion ends after it
    #[arg(long, global = true, default_value = "18:00")]
    work_end: TimeOfDay,

    /// Minutes between candidate start times for suggestions
    #[arg(long, global = true, default_value_t = 30)]
    step: u16,

    /// Log more to stderr (-v debug, -vv trace); RUST_LOG takes precedence
    #[arg(short, long, global = true, action = ArgAction::Count)]
    verbose: u8,
}

#[derive(Subcommand)]
enum Commands {
    /// Add events in order and report the resulting conflicts
    Check {
        /// JSON array of {name, start, end} (reads from stdin if omitted)
        #[arg(short, long)]
        input: Option<String>,
        /// Print machine-readable JSON instead of text
        #[arg(long)]
        json: bool,
    },
    /// Suggest free slots for an event without adding it
    Suggest {
        /// JSON array of already scheduled events (reads from stdin if omitted)
        #[arg(short, long)]
        input: Option<String>,
        /// Name of the event to place
        #[arg(long, default_value = "New event")]
        name: String,
        /// Desired start time (HH:MM)
        #[arg(long)]
        start: String,
        /// Desired end time (HH:MM)
        #[arg(long)]
        end: String,
        /// Print machine-readable JSON instead of text
        #[arg(long)]
        json: bool,
    },
}

/// One entry of the input JSON array.
#[derive(Deserialize)]
struct EventInput {
    name: String,
    start: String,
    end: String,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let config = SchedulerConfig {
        working_hour_start: cli.work_start,
        working_hour_end: cli.work_end,
        slot_step_minutes: cli.step,
    };
    let mut scheduler = Scheduler::with_config(config).context("Invalid working hours")?;

    match cli.command {
        Commands::Check { input, json } => {
            let conflicts = load_schedule(&mut scheduler, input.as_deref())?;
            info!(
                events = scheduler.len(),
                conflicts = conflicts.len(),
                "schedule checked"
            );

            if json {
                let report = serde_json::json!({
                    "events": scheduler.events(),
                    "conflicts": conflicts,
                });
                println!("{}", serde_json::to_string_pretty(&report)?);
            } else {
                print!("{}", render_report(scheduler.events(), &conflicts));
            }
        }
        Commands::Suggest {
            input,
            name,
            start,
            end,
            json,
        } => {
            // Validate the requested event before touching the schedule.
            let event = Event::parse(name, &start, &end).context("Invalid event")?;
            load_schedule(&mut scheduler, input.as_deref())?;

            let suggestions = scheduler.find_alternative_slots(&event);
            if json {
                println!("{}", serde_json::to_string_pretty(&suggestions)?);
            } else {
                print!(
                    "{}",
                    render_suggestions(&event, &suggestions, scheduler.config())
                );
            }
        }
    }

    Ok(())
}

/// Install a stderr subscriber so stdout carries only the report.
fn init_tracing(verbose: u8) {
    let default_level = match verbose {
        0 => "warn",
        1 => "debug",
        _ => "trace",
    };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}

/// Add every event from the input array in order, returning the conflicts
/// reported by the last insertion.
fn load_schedule(scheduler: &mut Scheduler, path: Option<&str>) -> Result<Vec<Conflict>> {
    let raw = read_input(path)?;
    let inputs: Vec<EventInput> =
        serde_json::from_str(&raw).context("Expected a JSON array of {name, start, end}")?;

    let mut conflicts = Vec::new();
    for (index, input) in inputs.iter().enumerate() {
        conflicts = scheduler
            .add(&input.name, &input.start, &input.end)
            .with_context(|| format!("Invalid event #{} ({:?})", index + 1, input.name))?;
    }
    Ok(conflicts)
}

fn render_report(events: &[Event], conflicts: &[Conflict]) -> String {
    let mut out = String::new();

    let _ = writeln!(out, "Events:");
    if events.is_empty() {
        let _ = writeln!(out, "  (none)");
    }
    for event in events {
        let _ = writeln!(
            out,
            "  {}  Start: {} - End: {}",
            event.name(),
            event.start(),
            event.end()
        );
    }

    let _ = writeln!(out);
    let _ = writeln!(out, "Conflicts:");
    if conflicts.is_empty() {
        let _ = writeln!(out, "  No conflicts found.");
        return out;
    }

    for conflict in conflicts {
        let _ = writeln!(out, "  Conflict between:");
        let _ = writeln!(out, "    {}", conflict.earlier);
        let _ = writeln!(out, "    {}", conflict.later);
        let _ = writeln!(out, "    Overlap: {} minutes", conflict.overlap_minutes);
        if !conflict.suggestions.is_empty() {
            let _ = writeln!(
                out,
                "    Suggested alternative times for \"{}\":",
                conflict.later.name()
            );
            for slot in &conflict.suggestions {
                let _ = writeln!(out, "      Start: {} - End: {}", slot.start, slot.end);
            }
        }
    }

    out
}

fn render_suggestions(
    event: &Event,
    suggestions: &[Suggestion],
    config: &SchedulerConfig,
) -> String {
    let mut out = String::new();

    if suggestions.is_empty() {
        let _ = writeln!(
            out,
            "No free {}-minute slot for \"{}\" between {} and {}.",
            event.duration_minutes(),
            event.name(),
            config.working_hour_start,
            config.working_hour_end
        );
        return out;
    }

    let _ = writeln!(out, "Suggested alternative times for \"{}\":", event.name());
    for slot in suggestions {
        let _ = writeln!(out, "  Start: {} - End: {}", slot.start, slot.end);
    }
    out
}

fn read_input(path: Option<&str>) -> Result<String> {
    match path {
        Some(path) => {
            std::fs::read_to_string(path).with_context(|| format!("Failed to read file: {}", path))
        }
        None => {
            let mut buf = String::new();
            io::stdin()
                .read_to_string(&mut buf)
                .context("Failed to read from stdin")?;
            Ok(buf)
        }
    }
}
