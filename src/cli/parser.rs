use crate::export::ExportFormat;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Command-line interface definition for rTimecard
#[derive(Parser)]
#[command(
    name = "rtimecard",
    version = env!("CARGO_PKG_VERSION"),
    about = "Timecard calendar editor: work types, time presets, bulk fill and submission",
    long_about = None
)]
pub struct Cli {
    /// Override configuration file path
    #[arg(global = true, long = "config")]
    pub config: Option<PathBuf>,

    /// Override database path (useful for tests or custom DB)
    #[arg(global = true, long = "db")]
    pub db: Option<PathBuf>,

    /// Override calendar file path
    #[arg(global = true, long = "calendar")]
    pub calendar: Option<PathBuf>,

    /// Answer "yes" to every confirmation prompt
    #[arg(global = true, long = "yes", short = 'y')]
    pub yes: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Initialize the configuration file and the database
    Init,

    /// Show the configuration file
    Config {
        #[arg(long = "print", help = "Print the current configuration")]
        print_config: bool,
    },

    /// Create the calendar for a month
    New {
        /// Month (YYYY-MM)
        month: String,

        /// Day of month that is a public holiday (repeatable)
        #[arg(long = "holiday", value_name = "DAY")]
        holidays: Vec<u32>,

        /// Render a contract selector on every row
        #[arg(long = "contracts")]
        contracts: bool,

        /// Replace an existing calendar file
        #[arg(long, short = 'f')]
        force: bool,
    },

    /// Print the calendar table
    Show,

    /// Edit one day row
    Set {
        /// Day of month
        day: u32,

        /// Work type code: 10, 20, 30, 40, 50, 60, 70 or "" (unset)
        #[arg(long = "type", value_name = "CODE")]
        work_type: Option<String>,

        /// Start time (HH:MM, "" to clear)
        #[arg(long = "in", value_name = "HH:MM")]
        start: Option<String>,

        /// End time (HH:MM, "" to clear)
        #[arg(long = "out", value_name = "HH:MM")]
        end: Option<String>,

        /// Break duration in minutes
        #[arg(long = "break", value_name = "MIN")]
        break_minutes: Option<u32>,

        /// Paid leave flag (0 or 1)
        #[arg(long = "paid-leave", value_name = "0|1")]
        paid_leave: Option<u8>,

        /// Start time falls on the following day
        #[arg(long = "start-next-day", value_name = "BOOL")]
        start_next_day: Option<bool>,

        /// End time falls on the following day
        #[arg(long = "end-next-day", value_name = "BOOL")]
        end_next_day: Option<bool>,

        /// Contract selection ("" to unset)
        #[arg(long = "contract", value_name = "ID")]
        contract: Option<String>,
    },

    /// Apply a named time preset to a day ("" selects nothing)
    Preset { day: u32, name: String },

    /// Fill weekdays with the default times, weekends and holidays with "no work"
    Fill,

    /// Reset every row
    Clear,

    /// Validate the calendar and store it
    Submit,

    /// Show monthly totals
    Summary,

    /// Export the calendar
    Export {
        #[arg(long, value_enum, default_value = "csv")]
        format: ExportFormat,

        #[arg(long, value_name = "FILE")]
        file: PathBuf,

        #[arg(long, short = 'f')]
        force: bool,
    },

    /// Print the internal log table
    Log {
        #[arg(long = "print", help = "Print rows from the internal log table")]
        print: bool,
    },
}
