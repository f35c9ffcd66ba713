use crate::export::ExportFormat;
use clap::{Parser, Subcommand};

/// Command-line interface definition for rHabits
/// CLI application to track good and bad habits with SQLite
#[derive(Parser)]
#[command(
    name = "rhabits",
    version = env!("CARGO_PKG_VERSION"),
    about = "A simple habit tracker CLI: mark daily successes and failures, follow streaks and success rates",
    long_about = None
)]
pub struct Cli {
    /// Override database path (useful for tests or custom DB)
    #[arg(global = true, long = "db")]
    pub db: Option<String>,

    /// Run in test mode (no config file update)
    #[arg(global = true, long = "test", hide = true)]
    pub test: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Initialize the database and configuration
    Init,

    /// Manage the configuration file (view or edit)
    Config {
        #[arg(long = "print", help = "Print the current configuration file")]
        print_config: bool,

        #[arg(long = "check", help = "Check configuration file for missing fields")]
        check: bool,

        #[arg(long = "migrate", help = "Add missing fields to the configuration file")]
        migrate: bool,

        #[arg(
            long = "edit",
            help = "Edit the configuration file (default editor: $EDITOR, or nano/notepad)"
        )]
        edit_config: bool,

        #[arg(
            long = "editor",
            help = "Specify the editor to use (vim, nano, or custom path)"
        )]
        editor: Option<String>,
    },

    /// Manage the database (migrations, integrity checks, etc.)
    Db {
        #[arg(long = "migrate", help = "Run pending database migrations")]
        migrate: bool,

        #[arg(long = "check", help = "Check database integrity")]
        check: bool,

        #[arg(long = "vacuum", help = "Optimize the database using VACUUM")]
        vacuum: bool,

        #[arg(long = "info", help = "Show database information")]
        info: bool,
    },

    /// Print the internal log table
    Log {
        #[arg(long = "print", help = "Print rows from the internal log table")]
        print: bool,
    },

    /// Add, edit, delete or list habits
    Habit {
        #[command(subcommand)]
        action: HabitAction,
    },

    /// Record a success (default) or a failure for a habit on a day
    Mark {
        /// Habit id, id prefix or name
        habit: String,

        /// Day of the record (YYYY-MM-DD, default: today)
        date: Option<String>,

        #[arg(long = "fail", help = "Record a failure instead of a success")]
        fail: bool,

        #[arg(
            long = "flip",
            conflicts_with_all = ["fail", "value", "time"],
            help = "Flip the status of the existing record (success <-> fail)"
        )]
        flip: bool,

        #[arg(long = "value", help = "Measured value (measurable habits only)")]
        value: Option<String>,

        #[arg(long = "time", help = "Elapsed time as H:M:S, M:S or seconds")]
        time: Option<String>,

        #[arg(long = "note", help = "Note for this day")]
        note: Option<String>,
    },

    /// Remove the record of a habit for a day (back to pending)
    Unmark {
        /// Habit id, id prefix or name
        habit: String,

        /// Day of the record (YYYY-MM-DD, default: today)
        date: Option<String>,
    },

    /// Show every habit with its state for one day
    Day {
        /// Day to show (YYYY-MM-DD, default: today)
        date: Option<String>,

        #[arg(long = "type", help = "Only 'good' or 'bad' habits")]
        kind: Option<String>,

        #[arg(long, short, help = "Filter by name or tag")]
        search: Option<String>,
    },

    /// Show overall statistics, or the detail of one habit
    Stats {
        #[arg(long, help = "Habit id, id prefix or name")]
        habit: Option<String>,

        #[arg(long, help = "Rolling window in days (default from config)")]
        days: Option<u32>,
    },

    /// Show the month calendar with per-day counts
    Calendar {
        #[arg(long, short, help = "Month to show (YYYY-MM, default: current)")]
        month: Option<String>,
    },

    /// Show trends, weekly totals and the most failed bad habits
    Insights {
        #[arg(long, help = "Days of the trend series (default from config)")]
        days: Option<u32>,
    },

    /// Delete ALL habits and records
    Reset {
        #[arg(long, short = 'y', help = "Do not ask for confirmation")]
        yes: bool,
    },

    /// Create a backup copy of the database
    Backup {
        #[arg(long, value_name = "FILE")]
        file: String,

        #[arg(long)]
        compress: bool,
    },

    /// Export habits and records
    Export {
        #[arg(long, value_enum, default_value = "json")]
        format: ExportFormat,

        #[arg(long, value_name = "FILE")]
        file: String,

        #[arg(long, short = 'f')]
        force: bool,
    },
}

#[derive(Subcommand)]
pub enum HabitAction {
    /// Add a new habit
    Add {
        name: String,

        #[arg(long, help = "The habit is a bad one (success = avoided)")]
        bad: bool,

        #[arg(long, default_value = "💪")]
        icon: String,

        #[arg(long)]
        note: Option<String>,

        #[arg(long = "tag", value_delimiter = ',', help = "Tags (repeat or comma separated)")]
        tags: Vec<String>,

        #[arg(long, help = "Make the habit measurable with this unit (km, m, min, h, kg, g, l, ml, kcal, reps, sets, pages, pcs, custom)")]
        unit: Option<String>,

        #[arg(long, requires = "unit", help = "Label shown with values (e.g. for custom units)")]
        label: Option<String>,

        #[arg(long, requires = "unit", help = "Daily goal for the measured value")]
        goal: Option<String>,

        #[arg(long = "track-time", requires = "unit", help = "Also track elapsed time")]
        track_time: bool,

        #[arg(long = "time-goal", requires = "track_time", help = "Daily time goal (H:M:S)")]
        time_goal: Option<String>,
    },

    /// Edit an existing habit (only the given fields change)
    Edit {
        /// Habit id, id prefix or name
        habit: String,

        #[arg(long)]
        name: Option<String>,

        #[arg(long, conflicts_with = "bad")]
        good: bool,

        #[arg(long)]
        bad: bool,

        #[arg(long)]
        icon: Option<String>,

        #[arg(long, help = "New note (empty string clears it)")]
        note: Option<String>,

        #[arg(long = "tag", value_delimiter = ',', help = "Replace the tags")]
        tags: Vec<String>,

        #[arg(long = "clear-tags", conflicts_with = "tags")]
        clear_tags: bool,

        #[arg(long)]
        unit: Option<String>,

        #[arg(long)]
        label: Option<String>,

        #[arg(long)]
        goal: Option<String>,

        #[arg(long = "track-time", conflicts_with = "no_track_time")]
        track_time: bool,

        #[arg(long = "no-track-time")]
        no_track_time: bool,

        #[arg(long = "time-goal")]
        time_goal: Option<String>,

        #[arg(long = "not-measurable", conflicts_with_all = ["unit", "label", "goal", "track_time", "time_goal"])]
        not_measurable: bool,
    },

    /// Delete a habit together with all its records
    Del {
        /// Habit id, id prefix or name
        habit: String,

        #[arg(long, short = 'y', help = "Do not ask for confirmation")]
        yes: bool,
    },

    /// List habits
    List {
        #[arg(long = "type", help = "Only 'good' or 'bad' habits")]
        kind: Option<String>,

        #[arg(long, short, help = "Filter by name or tag")]
        search: Option<String>,
    },
}
