//! Command-line interface.
//!
//! `run` starts the island; `config` reads and edits the configuration
//! file; `poll-once` queries the player a single time and prints what it
//! found.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

pub mod config;
pub mod formatting;
pub mod gestures;
mod types;

pub use gestures::parse_gesture;
pub use types::{CliError, CommandResult};

/// Top-level command line
#[derive(Parser, Debug)]
#[command(name = "media-island")]
#[command(about = "Now-playing island overlay for an external media player")]
pub struct Cli {
    /// Configuration file to use instead of the default location
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Command to run; defaults to `run`
    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Subcommands
#[derive(Subcommand, Debug, PartialEq)]
pub enum Commands {
    /// Start the island and read gestures from stdin
    Run {
        /// Also write logs to a daily rotated file
        #[arg(long)]
        log_file: bool,
    },

    /// Read or change configuration values
    Config {
        /// Configuration action
        #[command(subcommand)]
        action: ConfigCommand,
    },

    /// Query the player once and print the snapshot as JSON
    PollOnce,
}

/// `config` actions
#[derive(Subcommand, Debug, PartialEq)]
pub enum ConfigCommand {
    /// Print the value at a dotted path
    Get {
        /// Configuration path (e.g., behavior.hover_to_expand)
        path: String,
    },

    /// Set the value at a dotted path and save the file
    Set {
        /// Configuration path (e.g., behavior.hover_to_expand)
        path: String,
        /// New value
        value: String,
    },

    /// Print the configuration JSON schema
    Schema,
}
