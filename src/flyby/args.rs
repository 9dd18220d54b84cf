use std::path::PathBuf;

use chrono::NaiveDate;
use clap::{Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(name = "flyby")]
#[command(about = "Search a close-approach dataset from the command line", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Dataset CSV to load (overrides the configured data-file)
    #[arg(long, global = true)]
    pub data: Option<PathBuf>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Search objects by approach date
    #[command(alias = "q")]
    Query {
        /// Exact approach date (YYYY-MM-DD); wins over --start-date/--end-date
        #[arg(short, long)]
        date: Option<NaiveDate>,

        /// Range start, inclusive (YYYY-MM-DD)
        #[arg(long)]
        start_date: Option<NaiveDate>,

        /// Range end, inclusive (YYYY-MM-DD)
        #[arg(long)]
        end_date: Option<NaiveDate>,

        /// Maximum number of results
        #[arg(short, long)]
        number: Option<usize>,

        /// Attribute filter as field:op:value (e.g. "diameter:>=:0.042")
        #[arg(short, long)]
        filter: Vec<String>,

        /// Result shape to request: "neo" or "path"
        #[arg(long)]
        return_kind: Option<String>,

        /// Emit results as CSV instead of a table
        #[arg(long)]
        csv: bool,
    },

    /// Show one object and all of its recorded approaches
    #[command(alias = "i")]
    Inspect {
        /// Object name as it appears in the dataset
        name: String,
    },

    /// Summary statistics for the loaded dataset
    Stats,

    /// Get or set configuration
    Config {
        /// Configuration key (e.g., data-file)
        key: Option<String>,

        /// Value to set (if omitted, prints current value)
        value: Option<String>,
    },
}
