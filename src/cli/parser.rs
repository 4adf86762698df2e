use clap::{Parser, Subcommand};

/// Command-line interface definition for shiftclock
#[derive(Parser)]
#[command(
    name = "shiftclock",
    version = env!("CARGO_PKG_VERSION"),
    about = "Clock in and out of shifts, keep notes, and see regular vs. overtime hours per day and month",
    long_about = None
)]
pub struct Cli {
    /// Override the shift data file (useful for tests or a second ledger)
    #[arg(global = true, long = "data", value_name = "FILE")]
    pub data: Option<String>,

    /// Run in test mode (no config file update)
    #[arg(global = true, long = "test", hide = true)]
    pub test: bool,

    /// Identifier for the credential gate, when one is configured
    #[arg(global = true, long = "user", env = "SHIFTCLOCK_USER")]
    pub user: Option<String>,

    /// Secret for the credential gate, when one is configured
    #[arg(
        global = true,
        long = "password",
        env = "SHIFTCLOCK_PASSWORD",
        hide_env_values = true
    )]
    pub password: Option<String>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Initialize the configuration and an empty shift data file
    Init,

    /// Manage the configuration file (view, check or edit)
    Config {
        #[arg(long = "print", help = "Print the effective configuration")]
        print_config: bool,

        #[arg(long = "check", help = "Check the configuration file for missing or invalid fields")]
        check: bool,

        #[arg(
            long = "edit",
            help = "Edit the configuration file (default editor: $EDITOR, or nano/notepad)"
        )]
        edit_config: bool,

        #[arg(long = "editor", help = "Specify the editor to use (vim, nano, or custom path)")]
        editor: Option<String>,
    },

    /// Clock in now, opening a new shift
    In,

    /// Clock out now, closing the open shift
    Out,

    /// Save a note on the open shift (replaces any previous note)
    Note {
        /// Note text
        text: String,
    },

    /// Add a past shift manually
    Add {
        /// Clock-in time (YYYY-MM-DD HH:MM)
        #[arg(long = "in", value_name = "DATETIME")]
        start: Option<String>,

        /// Clock-out time (YYYY-MM-DD HH:MM)
        #[arg(long = "out", value_name = "DATETIME")]
        end: Option<String>,

        /// Free-text notes
        #[arg(long, default_value = "")]
        notes: String,
    },

    /// Edit an existing shift
    Edit {
        /// Shift id, or a unique prefix of it
        id: String,

        /// New clock-in time (YYYY-MM-DD HH:MM)
        #[arg(long = "in", value_name = "DATETIME")]
        start: Option<String>,

        /// New clock-out time (YYYY-MM-DD HH:MM)
        #[arg(long = "out", value_name = "DATETIME")]
        end: Option<String>,

        /// Replace the notes
        #[arg(long)]
        notes: Option<String>,
    },

    /// Delete a shift
    Del {
        /// Shift id, or a unique prefix of it
        id: String,

        #[arg(long, short = 'y', help = "Do not ask for confirmation")]
        yes: bool,
    },

    /// List shifts, newest first
    List {
        #[arg(
            long,
            short,
            value_name = "YYYY-MM",
            help = "Only shifts clocked in during this month"
        )]
        month: Option<String>,
    },

    /// Show hours, regular hours and overtime per month with a daily breakdown
    Stats {
        #[arg(long, short, value_name = "YYYY-MM", help = "Summarize a single month")]
        month: Option<String>,

        #[arg(
            long,
            value_name = "N",
            value_parser = clap::value_parser!(u32).range(1..),
            help = "Number of recent months to show (default from config)"
        )]
        months: Option<u32>,
    },

    /// Show the open shift and its elapsed time
    Status {
        #[arg(long, short, help = "Keep the elapsed time ticking until Ctrl-C or clock out")]
        watch: bool,
    },
}
