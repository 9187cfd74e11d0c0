//! CLI Argument Parsing
//!
//! This module defines the CLI interface using clap.
//!
//! Global flags (--config, --json, --color, --verbose) are inherited by all
//! subcommands.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

use crate::config::DEFAULT_CONFIG_FILE;

#[derive(clap::ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColorWhen {
    Auto,
    Always,
    Never,
}

/// fnpilot - version and alias lifecycle manager for serverless functions
#[derive(Parser, Debug)]
#[command(name = "fnpilot")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Path to the config file
    #[arg(short, long, global = true, default_value = DEFAULT_CONFIG_FILE)]
    pub config: PathBuf,

    /// Output format for CI (NDJSON events plus a JSON summary)
    #[arg(long, global = true)]
    pub json: bool,

    /// Color output mode
    #[arg(long, global = true, value_enum)]
    pub color: Option<ColorWhen>,

    /// Verbosity level (-v prints every lifecycle event)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Publish the package and point ENVIRONMENT's alias at the new version
    Deploy {
        /// Environment name; doubles as the alias name
        environment: String,

        /// Alias description (overrides the config file)
        #[arg(long)]
        description: Option<String>,
    },

    /// Remove ENVIRONMENT's alias (and collect versions if enabled)
    Teardown {
        /// Environment name
        environment: String,
    },

    /// Delete the function with all of its versions and aliases
    Delete {
        /// Skip the confirmation prompt
        #[arg(short, long)]
        yes: bool,
    },

    /// Delete every version no alias points at
    Cleanup,

    /// Show versions, aliases and what cleanup would delete
    Status,

    /// Validate the config file and package without contacting the provider
    Check,
}
