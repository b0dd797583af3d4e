use std::path::PathBuf;

use clap::{Parser, Subcommand};

use crate::api::{DEFAULT_BASE_URL, DEFAULT_TIMEOUT_SECS};

/// Diet board: daily nutrition totals, food logging, and backend lookups.
#[derive(Parser, Debug)]
#[command(name = "diet_board")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Backend base URL.
    #[arg(long, env = "DIET_BOARD_BASE_URL", default_value = DEFAULT_BASE_URL, global = true)]
    pub base_url: String,

    /// Access token sent as a bearer token.
    #[arg(long, env = "DIET_BOARD_TOKEN", hide_env_values = true, global = true)]
    pub token: Option<String>,

    /// Request timeout in seconds.
    #[arg(long, default_value_t = DEFAULT_TIMEOUT_SECS, global = true)]
    pub timeout_secs: u64,

    /// Enable debug logging.
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Print nutrient totals for a local day file.
    Summary {
        /// Path to the day JSON file.
        day_file: PathBuf,
    },

    /// Export a local day file as CSV.
    Export {
        /// Path to the day JSON file.
        day_file: PathBuf,

        /// Output CSV path.
        #[arg(short, long, default_value = "day.csv")]
        out: PathBuf,
    },

    /// Interactively add a food to a meal in a local day file.
    Log {
        /// Path to the day JSON file (created if missing).
        day_file: PathBuf,

        /// Search a local food catalogue instead of the backend.
        #[arg(short, long)]
        catalog: Option<PathBuf>,
    },

    /// Fetch one day of a diet plan from the backend.
    FetchDay {
        /// Diet plan id.
        #[arg(long)]
        plan: i64,

        /// Date as YYYY-MM-DD.
        #[arg(long)]
        date: String,

        /// Also save the fetched day to this file.
        #[arg(long)]
        save: Option<PathBuf>,
    },

    /// Search the backend food database.
    SearchFood {
        /// Food name to search for.
        name: String,
    },

    /// Print every date in a range, both ends included.
    Dates {
        /// First date as YYYY-MM-DD.
        start: String,

        /// Last date as YYYY-MM-DD.
        end: String,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_fetch_day() {
        let cli = Cli::try_parse_from([
            "diet_board",
            "fetch-day",
            "--plan",
            "4",
            "--date",
            "2025-01-02",
            "--base-url",
            "http://api.test",
        ])
        .unwrap();

        assert_eq!(cli.base_url, "http://api.test");
        assert_eq!(cli.timeout_secs, DEFAULT_TIMEOUT_SECS);
        assert!(matches!(
            cli.command,
            Command::FetchDay { plan: 4, ref date, save: None } if date == "2025-01-02"
        ));
    }

    #[test]
    fn test_subcommand_required() {
        assert!(Cli::try_parse_from(["diet_board"]).is_err());
    }

    #[test]
    fn test_cli_definition() {
        use clap::CommandFactory;
        Cli::command().debug_assert();
    }
}
