use clap::{Parser, Subcommand};

/// Command-line interface definition for tripplan
#[derive(Parser)]
#[command(
    name = "tripplan",
    version = env!("CARGO_PKG_VERSION"),
    about = "Plan multi-day trips: one record per day, your details, a printable itinerary (SQLite)",
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

    /// Interactive menu: add trips, fill in days, print itineraries
    Menu,

    /// Add a trip; one day is generated for every date in the range
    Add {
        /// Trip location, e.g. "Paris"
        location: String,

        #[arg(long, help = "Overall budget, e.g. 2000 or 2000.50")]
        budget: String,

        #[arg(long, help = "First day of the trip (configured format or YYYY-MM-DD)")]
        start: String,

        #[arg(long, help = "Last day of the trip (configured format or YYYY-MM-DD)")]
        end: String,
    },

    /// List all trips
    Trips,

    /// List the days of a trip
    Days {
        /// Trip id as shown by `trips`
        trip: i64,
    },

    /// Set the details of a day (omitted fields keep their value)
    Update {
        /// Day id as shown by `days`
        day: i64,

        #[arg(long = "location", help = "Where you will be that day")]
        location: Option<String>,

        #[arg(long = "activities", help = "What you plan to do")]
        activities: Option<String>,

        #[arg(long = "restaurants", help = "Where you will eat")]
        restaurants: Option<String>,

        #[arg(long = "hotel", help = "Where you will sleep")]
        hotel: Option<String>,
    },

    /// Print the itinerary of a trip
    Print {
        /// Trip id as shown by `trips`
        trip: i64,
    },

    /// Manage the configuration file (view or edit)
    Config {
        #[arg(long = "print", help = "Print the current configuration")]
        print_config: bool,

        #[arg(
            long = "edit",
            help = "Edit the configuration file (default editor: $EDITOR, or nano/notepad)"
        )]
        edit_config: bool,

        #[arg(long = "editor", help = "Editor to use with --edit")]
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
}
