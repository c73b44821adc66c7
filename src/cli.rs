// src/cli.rs

//! CLI argument parsing using `clap`.

use clap::{Parser, Subcommand, ValueEnum};

use crate::types::NodeStatus;

/// Command-line arguments for `trailmap`.
#[derive(Debug, Clone, Parser)]
#[command(
    name = "trailmap",
    version,
    about = "Track learning progress through a roadmap of topics.",
    long_about = None
)]
pub struct CliArgs {
    /// Path to the roadmap definition (TOML).
    ///
    /// Default: `Roadmap.toml` in the current working directory.
    #[arg(long, value_name = "PATH", default_value = "Roadmap.toml")]
    pub roadmap: String,

    /// Path to the progress database.
    ///
    /// If omitted, `TRAILMAP_DB` or a platform data directory is used.
    #[arg(long, value_name = "PATH")]
    pub db: Option<String>,

    /// Keep progress in memory only; nothing is written to disk.
    #[arg(long)]
    pub memory: bool,

    /// Logging level (error, warn, info, debug, trace).
    ///
    /// If omitted, `TRAILMAP_LOG` or a default level will be used.
    #[arg(long, value_enum, value_name = "LEVEL")]
    pub log_level: Option<LogLevel>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Clone, Subcommand)]
pub enum Command {
    /// Print the roadmap with the current status of every topic.
    Show,

    /// Set the status of a single topic.
    Set {
        /// Node id as declared in the roadmap file.
        #[arg(value_name = "NODE")]
        node: String,

        /// New status for the node.
        #[arg(value_enum, value_name = "STATUS")]
        status: NodeStatus,
    },

    /// Print aggregate progress statistics.
    Stats,

    /// Reset every required/optional topic back to pending.
    Reset {
        /// Also delete all stored progress records in one sweep.
        #[arg(long)]
        purge: bool,
    },

    /// Parse and validate the roadmap file without touching the database.
    Check,
}

/// Log level as exposed on the CLI.
#[derive(Debug, Copy, Clone, ValueEnum)]
pub enum LogLevel {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

/// Convenience wrapper around `CliArgs::parse()`.
pub fn parse() -> CliArgs {
    CliArgs::parse()
}
