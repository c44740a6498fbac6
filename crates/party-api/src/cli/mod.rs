//! CLI command definitions for the `party` binary.
//!
//! Uses clap derive macros for argument parsing.

pub mod activity;

use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// Serve school and classroom party activities over HTTP.
#[derive(Parser)]
#[command(name = "party", version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Output machine-readable JSON instead of styled text.
    #[arg(long, global = true)]
    pub json: bool,

    /// Suppress all output except errors.
    #[arg(long, global = true)]
    pub quiet: bool,

    /// Detailed output (-v for verbose, -vv for debug/trace).
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Path to a TOML config file.
    #[arg(long, global = true, env = "PARTY_CONFIG")]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Start the HTTP server.
    Serve {
        /// Port to listen on (overrides config).
        #[arg(short, long)]
        port: Option<u16>,

        /// Host to bind to (overrides config).
        #[arg(long)]
        host: Option<String>,

        /// Export tracing spans through OpenTelemetry (stdout).
        #[arg(long)]
        otel: bool,
    },

    /// List every registered venue:activity key.
    #[command(alias = "ls")]
    List,

    /// Run one activity locally and print the result.
    Call {
        /// Venue name (e.g. "school").
        venue: String,

        /// Activity name (e.g. "sing").
        activity: String,
    },
}
