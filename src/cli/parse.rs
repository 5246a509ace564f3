//! CLI parse: clap types for clusterconf. No behavior; definitions only.

use crate::config::StoreBackend;
use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

/// clusterconf - Resolve validated cluster sizing from stored profiles
#[derive(Parser)]
#[command(name = "clusterconf")]
#[command(about = "Resolve validated cluster sizing from stored profiles")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Directory searched for clusterconf.toml
    #[arg(long, default_value = ".")]
    pub dir: PathBuf,

    /// Configuration file path (overrides default config loading)
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Profile store backend (memory, sled, mounted)
    #[arg(long)]
    pub store_backend: Option<StoreBackend>,

    /// Profile store location (sled database or mounted profile directory)
    #[arg(long)]
    pub store_path: Option<PathBuf>,

    /// Enable verbose logging
    #[arg(long, default_value = "false")]
    pub verbose: bool,

    /// Disable logging entirely
    #[arg(long, default_value = "false")]
    pub quiet: bool,

    /// Log level (trace, debug, info, warn, error, off)
    #[arg(long)]
    pub log_level: Option<String>,

    /// Log format (json, text)
    #[arg(long)]
    pub log_format: Option<String>,

    /// Log output (stdout, stderr, file)
    #[arg(long)]
    pub log_output: Option<String>,

    /// Log file path (if output is "file")
    #[arg(long)]
    pub log_file: Option<PathBuf>,
}

/// Rendering of command results
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Text,
    Json,
    Toml,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Resolve the final cluster configuration
    Resolve {
        /// Named profile to apply on top of the default profile
        #[arg(long)]
        profile: Option<String>,

        /// Explicit master count (0 or omitted leaves it unspecified)
        #[arg(long, allow_negative_numbers = true)]
        master_count: Option<i64>,

        /// Explicit worker count (0 or omitted leaves it unspecified)
        #[arg(long, allow_negative_numbers = true)]
        worker_count: Option<i64>,

        /// Explicit master-role configuration reference
        #[arg(long)]
        spark_master_config: Option<String>,

        /// Explicit worker-role configuration reference
        #[arg(long)]
        spark_worker_config: Option<String>,

        /// Show which layer supplied each field
        #[arg(long)]
        explain: bool,

        /// Output format
        #[arg(long, value_enum, default_value = "text")]
        format: OutputFormat,
    },
    /// Manage stored profiles
    Profile {
        #[command(subcommand)]
        command: ProfileCommands,
    },
}

#[derive(Subcommand)]
pub enum ProfileCommands {
    /// List stored profiles
    List {
        /// Output format (text or json)
        #[arg(long, value_enum, default_value = "text")]
        format: OutputFormat,
    },
    /// Show the raw fields of a stored profile
    Show {
        /// Profile name
        name: String,
        /// Output format (text or json)
        #[arg(long, value_enum, default_value = "text")]
        format: OutputFormat,
    },
    /// Set fields on a profile, creating it if needed
    Set {
        /// Profile name
        name: String,
        /// Field assignments, e.g. workercount=3
        #[arg(required = true)]
        assignments: Vec<String>,
    },
    /// Remove a stored profile
    Remove {
        /// Profile name
        name: String,
        /// Skip confirmation prompt
        #[arg(long)]
        force: bool,
    },
}
