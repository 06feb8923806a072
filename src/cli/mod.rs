//! Command-line interface definitions.

pub mod setup;

use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable lines
    Text,
    /// A single JSON document
    Json,
}

#[derive(Parser, Debug)]
#[command(name = "usermgr")]
#[command(about = "Process user submissions and track accepted names", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Configuration file (defaults to searching for .usermgr.toml)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Process a single user submission
    Process {
        /// User name (omit to submit without a name)
        #[arg(long)]
        name: Option<String>,

        /// User email
        #[arg(long)]
        email: String,

        /// User age
        #[arg(long)]
        age: u32,

        /// Output format
        #[arg(short, long, value_enum, default_value = "text")]
        format: OutputFormat,
    },

    /// Process a JSON array of submissions in order
    Batch {
        /// JSON file with `{ "name", "email", "age" }` records
        input: PathBuf,

        /// Output format
        #[arg(short, long, value_enum, default_value = "text")]
        format: OutputFormat,
    },

    /// Check whether an email looks valid (exit code 1 when invalid)
    CheckEmail {
        email: String,
    },

    /// Print the host operating system identifier
    SystemInfo,

    /// Divide two numbers
    Divide {
        #[arg(allow_negative_numbers = true)]
        dividend: f64,

        #[arg(allow_negative_numbers = true)]
        divisor: f64,
    },

    /// Increment a fresh counter and print each value
    Count {
        /// Number of increments
        #[arg(long, default_value = "1")]
        times: u64,
    },

    /// Initialize a usermgr configuration file
    Init {
        /// Force overwrite existing config
        #[arg(short, long)]
        force: bool,
    },
}
