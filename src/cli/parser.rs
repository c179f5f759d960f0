use clap::{Parser, Subcommand};

/// Command-line interface definition for pontolog
/// CLI punch-clock: record entry/break/exit punches and absence justifications
#[derive(Parser)]
#[command(
    name = "pontolog",
    version = env!("CARGO_PKG_VERSION"),
    about = "A simple punch-clock CLI: record entry/break/exit punches and absences, filter by week/month/year",
    long_about = None
)]
pub struct Cli {
    /// Override store path (useful for tests or custom store)
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
    /// Initialize the store and configuration
    Init,

    /// Manage the configuration file (view or check)
    Config {
        #[arg(long = "print", help = "Print the current configuration")]
        print_config: bool,

        #[arg(long = "check", help = "Check configuration file for missing fields")]
        check: bool,
    },

    /// Record a punch (entrada, intervalo, volta-intervalo, saida)
    Punch {
        /// Punch type; defaults to the suggested next type in the cycle
        kind: Option<String>,

        /// Free-text annotation for the record
        #[arg(long, short)]
        comment: Option<String>,

        /// Coordinates for this punch, e.g. "-23.5505,-46.6333"
        #[arg(long, value_name = "LAT,LONG", allow_hyphen_values = true)]
        location: Option<String>,

        /// Backfill date (defaults to today)
        #[arg(long, value_name = "DD/MM/YYYY")]
        date: Option<String>,

        /// Backfill time (defaults to now)
        #[arg(long, value_name = "HH:MM:SS")]
        time: Option<String>,
    },

    /// Record an absence justification
    Absence {
        /// Reason for the absence
        #[arg(long, short)]
        comment: String,

        /// Name of an attached file (label only; content is never stored)
        #[arg(long, value_name = "NAME")]
        file: Option<String>,

        /// Backfill date (defaults to today)
        #[arg(long, value_name = "DD/MM/YYYY")]
        date: Option<String>,
    },

    /// Show the suggested type for the next punch
    Next,

    /// List records, optionally filtered by period
    List {
        /// Time window: week, month, year or all
        #[arg(long, short, default_value = "all")]
        period: String,

        #[arg(long, help = "Show punch records only")]
        punches: bool,

        #[arg(long, help = "Show absence records only")]
        absences: bool,
    },

    /// Edit a punch record in place by id
    Edit {
        id: i64,

        #[arg(long, value_name = "DD/MM/YYYY")]
        date: Option<String>,

        #[arg(long, value_name = "HH:MM:SS")]
        time: Option<String>,

        #[arg(long)]
        comment: Option<String>,
    },

    /// Delete a record by id
    Del {
        id: i64,

        /// Skip the confirmation prompt
        #[arg(long, short = 'y')]
        yes: bool,
    },

    /// Print or manage the internal log table
    Log {
        #[arg(long = "print", help = "Print rows from the internal log table")]
        print: bool,
    },
}
