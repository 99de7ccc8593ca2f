//! Command-line interface definitions and parsing
//!
//! This module defines the CLI structure for gigshelf using the `clap` crate.
//!
//! # Commands
//!
//! - **browse**: Interactive terminal browser with the photo viewer (default)
//! - **list**: Print records matching a query and year
//! - **years**: Print the distinct years with record counts
//! - **show**: Print one record in full
//! - **build**: Render the static site
//! - **config**: Inspect or change settings
//! - **completions**: Generate a shell completion script
//!
//! # Examples
//!
//! ```
//! use clap::Parser;
//! use gigshelf::cli::{Cli, Commands};
//!
//! let cli = Cli::parse_from(["gigshelf", "list", "paris", "--year", "2023"]);
//! match cli.get_command() {
//!     Commands::List { query, year, .. } => {
//!         assert_eq!(query.as_deref(), Some("paris"));
//!         assert_eq!(year.as_deref(), Some("2023"));
//!     }
//!     _ => unreachable!(),
//! }
//! ```

use crate::config::OutputFormat;
use clap::{Parser, Subcommand};
use clap_complete::Shell;
use std::path::PathBuf;

/// Main CLI structure for parsing command-line arguments
#[derive(Parser, Debug)]
#[command(name = "gigshelf")]
#[command(about = "Browse and publish a concert catalog", long_about = None)]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Suppress informational output (only print results)
    #[arg(short = 'q', long = "quiet", global = true)]
    pub quiet: bool,

    /// Catalog document to load (overrides config)
    #[arg(short = 'd', long = "data", value_name = "FILE", global = true)]
    pub data: Option<PathBuf>,

    /// Directory photo URLs are resolved against (overrides config)
    #[arg(short = 'a', long = "assets", value_name = "DIR", global = true)]
    pub assets: Option<PathBuf>,

    /// Config file to use instead of the default location
    #[arg(long = "config", value_name = "FILE", global = true)]
    pub config: Option<PathBuf>,

    /// Log filter, e.g. `debug` or `gigshelf=trace` (default: warn)
    #[arg(long = "log-level", value_name = "FILTER", global = true)]
    pub log_level: Option<String>,

    /// Write logs to this file instead of stderr
    #[arg(long = "log-file", value_name = "FILE", global = true)]
    pub log_file: Option<PathBuf>,
}

/// Available CLI commands
#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Commands {
    /// Open the interactive browser (default)
    #[command(visible_alias = "b")]
    Browse {
        /// Initial search text
        #[arg(value_name = "QUERY")]
        query: Option<String>,

        /// Initial year selection
        #[arg(short = 'y', long = "year", value_name = "YEAR")]
        year: Option<String>,
    },

    /// List records matching a query and year
    #[command(visible_alias = "l")]
    List {
        /// Case-insensitive search over title, venue, city and country
        #[arg(value_name = "QUERY")]
        query: Option<String>,

        /// Only records from this year
        #[arg(short = 'y', long = "year", value_name = "YEAR")]
        year: Option<String>,

        /// Output format (overrides config)
        #[arg(short = 'f', long = "format", value_enum)]
        format: Option<OutputFormat>,
    },

    /// List the years present in the catalog
    Years,

    /// Show one record in full
    #[command(visible_alias = "s")]
    Show {
        /// Record identifier
        #[arg(value_name = "ID")]
        id: String,
    },

    /// Render the static site
    Build {
        /// Output directory (overrides config)
        #[arg(short = 'o', long = "out", value_name = "DIR")]
        out: Option<PathBuf>,
    },

    /// Manage configuration settings
    Config {
        #[command(subcommand)]
        command: ConfigCommands,
    },

    /// Generate shell completions
    Completions {
        /// Target shell
        #[arg(value_enum)]
        shell: Shell,
    },
}

/// Config subcommands
#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum ConfigCommands {
    /// Print the effective configuration
    Show,

    /// Print the config file location
    Path,

    /// Write the default configuration file
    Init {
        /// Replace an existing file
        #[arg(long)]
        force: bool,
    },

    /// Get a configuration value
    Get {
        /// Configuration key (e.g. `data_path`)
        #[arg(value_name = "KEY")]
        key: String,
    },

    /// Set a configuration value
    Set {
        #[arg(value_name = "KEY")]
        key: String,

        #[arg(value_name = "VALUE")]
        value: String,
    },
}

impl Commands {
    /// Whether the command takes over the terminal
    #[must_use]
    pub const fn is_interactive(&self) -> bool {
        matches!(self, Self::Browse { .. })
    }

    /// Whether the command reads the catalog document
    #[must_use]
    pub const fn needs_catalog(&self) -> bool {
        !matches!(self, Self::Config { .. } | Self::Completions { .. })
    }
}

impl Cli {
    /// Parse command line arguments
    #[must_use]
    pub fn parse_args() -> Self {
        Self::parse()
    }

    /// Get the command, defaulting to Browse if none specified
    #[must_use]
    pub fn get_command(&self) -> Commands {
        self.command.clone().unwrap_or(Commands::Browse {
            query: None,
            year: None,
        })
    }
}
