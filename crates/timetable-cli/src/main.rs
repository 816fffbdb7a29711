//! `timetable` CLI: check a school timetable for conflicts and print its views.
//!
//! Timetables are JSON arrays of schedule entries, read from a file (`-i`) or
//! stdin. Every command prints JSON on stdout; diagnostics go to stderr.
//!
//! ## Usage
//!
//! ```sh
//! # List every teacher/room/class double-booking (exit 1 if any)
//! timetable check -i timetable.json
//!
//! # Try to add a session; prints the stored entry or the first conflict
//! timetable add -i timetable.json --entry physics.json -o timetable.json
//!
//! # Weekly view of one class
//! timetable week --class 6A --week-start 2026-09-07 -i timetable.json
//!
//! # A teacher's load, broken down by class and subject
//! timetable teacher --id T1 -i timetable.json
//!
//! # Free periods of a room on Monday
//! timetable free --day monday --room A-101 --location "Main building" -i timetable.json
//! ```
//!
//! `RUST_LOG` controls log output (default `warn`); `-v`/`-vv` raise it to
//! `info`/`debug`.

use std::io::{self, Read};
use std::process;

use anyhow::{Context, Result};
use chrono::NaiveDate;
use clap::{ArgGroup, Parser, Subcommand};
use serde::Serialize;
use tracing::info;
use tracing_subscriber::EnvFilter;

use timetable_engine::{
    find_all_conflicts, EngineConfig, ScheduleDraft, ScheduleEntry, ScheduleStore, SchoolDay,
};

#[derive(Parser)]
#[command(
    name = "timetable",
    version,
    about = "School timetable conflict checker"
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// TOML configuration file (academic year, school-day window)
    #[arg(long, global = true)]
    config: Option<String>,

    /// Increase log verbosity (-v info, -vv debug)
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    verbose: u8,
}

#[derive(Subcommand)]
enum Commands {
    /// Report every conflict in a timetable
    Check {
        /// Timetable JSON file (reads from stdin if omitted)
        #[arg(short, long)]
        input: Option<String>,
        /// Exit with status 0 even when conflicts are found
        #[arg(long)]
        allow_conflicts: bool,
    },
    /// Add one session to a timetable, rejecting it on conflict
    Add {
        /// Timetable JSON file (reads from stdin if omitted)
        #[arg(short, long)]
        input: Option<String>,
        /// JSON file holding the session to add
        #[arg(long)]
        entry: String,
        /// Write the updated timetable here
        #[arg(short, long)]
        output: Option<String>,
    },
    /// Show the weekly schedule of one class
    Week {
        #[arg(short, long)]
        input: Option<String>,
        /// Class name, e.g. "6A"
        #[arg(long = "class")]
        class_name: String,
        /// First day of the week (YYYY-MM-DD)
        #[arg(long)]
        week_start: NaiveDate,
    },
    /// Show a teacher's weekly load
    Teacher {
        #[arg(short, long)]
        input: Option<String>,
        /// Teacher id
        #[arg(long)]
        id: String,
    },
    /// List free periods of a teacher, room or class on one day
    #[command(group(ArgGroup::new("target").required(true).args(["teacher", "room", "class_name"])))]
    Free {
        #[arg(short, long)]
        input: Option<String>,
        /// Teaching day (monday..saturday)
        #[arg(long)]
        day: SchoolDay,
        #[arg(long)]
        teacher: Option<String>,
        #[arg(long, requires = "location")]
        room: Option<String>,
        /// Building or site of the room
        #[arg(long)]
        location: Option<String>,
        #[arg(long = "class")]
        class_name: Option<String>,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let config = match cli.config.as_deref() {
        Some(path) => EngineConfig::from_file(path)
            .with_context(|| format!("Failed to load config: {}", path))?,
        None => EngineConfig::default(),
    };

    match cli.command {
        Commands::Check {
            input,
            allow_conflicts,
        } => {
            let entries = load_entries(input.as_deref())?;
            let conflicts = find_all_conflicts(&entries);
            info!(
                entries = entries.len(),
                conflicts = conflicts.len(),
                "checked timetable"
            );
            print_json(&conflicts)?;
            if !conflicts.is_empty() && !allow_conflicts {
                process::exit(1);
            }
        }
        Commands::Add {
            input,
            entry,
            output,
        } => {
            let mut store = ScheduleStore::with_entries(config, load_entries(input.as_deref())?);
            let raw = read_input(Some(entry.as_str()))?;
            let draft: ScheduleDraft = serde_json::from_str(&raw)
                .with_context(|| format!("Failed to parse schedule entry: {}", entry))?;

            let stored = store
                .add_entry(draft)
                .context("Schedule entry rejected")?;

            if let Some(path) = output.as_deref() {
                let json = serde_json::to_string_pretty(store.entries())?;
                write_output(path, &json)?;
            }
            print_json(&stored)?;
        }
        Commands::Week {
            input,
            class_name,
            week_start,
        } => {
            let store = ScheduleStore::with_entries(config, load_entries(input.as_deref())?);
            print_json(&store.class_weekly_schedule(&class_name, week_start))?;
        }
        Commands::Teacher { input, id } => {
            let store = ScheduleStore::with_entries(config, load_entries(input.as_deref())?);
            let schedule = store.teacher_schedule(&id)?;
            print_json(&schedule)?;
        }
        Commands::Free {
            input,
            day,
            teacher,
            room,
            location,
            class_name,
        } => {
            let store = ScheduleStore::with_entries(config, load_entries(input.as_deref())?);
            let free = match (teacher, room, class_name) {
                (Some(teacher), _, _) => store.teacher_free_periods(&teacher, day)?,
                (_, Some(room), _) => {
                    let location = location.unwrap_or_default();
                    store.room_free_periods(&location, &room, day)?
                }
                (_, _, Some(class_name)) => store.class_free_periods(&class_name, day)?,
                (None, None, None) => anyhow::bail!("one of --teacher, --room or --class is required"),
            };
            print_json(&free)?;
        }
    }

    Ok(())
}

/// Log level precedence: `-v` flags, then `RUST_LOG`, then `warn`.
fn init_logging(verbose: u8) {
    let filter = match verbose {
        0 => EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        1 => EnvFilter::new("info"),
        _ => EnvFilter::new("debug"),
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_target(false)
        .init();
}

fn load_entries(path: Option<&str>) -> Result<Vec<ScheduleEntry>> {
    let raw = read_input(path)?;
    serde_json::from_str(&raw).context("Failed to parse timetable JSON")
}

fn print_json<T: Serialize + ?Sized>(value: &T) -> Result<()> {
    let json = serde_json::to_string_pretty(value)?;
    println!("{}", json);
    Ok(())
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

fn write_output(path: &str, content: &str) -> Result<()> {
    std::fs::write(path, content).with_context(|| format!("Failed to write file: {}", path))
}
