use crate::export::ExportFormat;
use clap::{Parser, Subcommand};

/// Command-line interface definition for rGallery
/// CLI inventory of an art gallery backed by SQLite
#[derive(Parser)]
#[command(
    name = "rgallery",
    version = env!("CARGO_PKG_VERSION"),
    about = "A simple art gallery inventory: add, list and delete artworks stored in SQLite",
    long_about = None
)]
pub struct Cli {
    /// Override database path (useful for tests or custom DB)
    #[arg(global = true, long = "db")]
    pub db: Option<String>,

    /// Override the activity log file
    #[arg(global = true, long = "activity-log")]
    pub activity_log: Option<String>,

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

    /// Show or edit the configuration file
    Config {
        #[arg(long = "print", help = "Print the current configuration")]
        print_config: bool,

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

    /// Database maintenance
    Db {
        #[arg(long = "info", help = "Show database information")]
        info: bool,

        #[arg(long = "check", help = "Check database integrity")]
        check: bool,

        #[arg(long = "vacuum", help = "Optimize the database using VACUUM")]
        vacuum: bool,
    },

    /// Print the activity log
    Log {
        #[arg(long = "print", help = "Print the activity log")]
        print: bool,

        #[arg(long = "tail", value_name = "N", help = "Only show the last N entries")]
        tail: Option<usize>,
    },

    /// Add an artwork to the collection
    Add {
        #[arg(long, help = "Title, e.g. \"Starry Night\"")]
        title: String,

        #[arg(long, help = "Artist, e.g. \"Van Gogh\"")]
        artist: String,

        /// Kept as text so non-numeric input gets a readable error
        #[arg(long, allow_hyphen_values = true, help = "Year of creation, e.g. 1889")]
        year: String,

        #[arg(long, help = "Style, e.g. \"Post-Impressionism\"")]
        style: String,

        #[arg(long, allow_hyphen_values = true, help = "Price, e.g. 1000000")]
        price: String,
    },

    /// List every artwork, newest first
    List {
        #[arg(long, help = "Print as JSON instead of a table")]
        json: bool,
    },

    /// Delete an artwork by ID
    Del {
        #[arg(allow_negative_numbers = true)]
        id: i64,

        #[arg(long, short = 'y', help = "Do not ask for confirmation")]
        yes: bool,
    },

    /// Create a backup copy of the database
    Backup {
        #[arg(long, value_name = "FILE")]
        file: String,

        #[arg(long)]
        compress: bool,

        #[arg(long, short = 'f')]
        force: bool,
    },

    /// Export the collection
    Export {
        #[arg(long, value_enum, default_value = "csv")]
        format: ExportFormat,

        #[arg(long, value_name = "FILE")]
        file: String,

        #[arg(long, short = 'f')]
        force: bool,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_add_with_negative_price() {
        let cli = Cli::try_parse_from([
            "rgallery", "add", "--title", "T", "--artist", "A", "--year", "2000", "--style",
            "S", "--price", "-5",
        ])
        .unwrap();
        match cli.command {
            Commands::Add { price, year, .. } => {
                assert_eq!(price, "-5");
                assert_eq!(year, "2000");
            }
            _ => panic!("expected add"),
        }
    }

    #[test]
    fn global_overrides_after_subcommand() {
        let cli =
            Cli::try_parse_from(["rgallery", "del", "-1", "--yes", "--db", "/tmp/x.db"]).unwrap();
        assert_eq!(cli.db.as_deref(), Some("/tmp/x.db"));
        assert!(matches!(cli.command, Commands::Del { id: -1, yes: true }));
    }
}
