//! Gigshelf CLI application entry point
//!
//! This is the main executable for gigshelf. It loads the published gig
//! catalog and either browses it interactively, prints it, or renders it as
//! a static site.
//!
//! # Usage
//!
//! ```bash
//! # Browse interactively (default command)
//! gigshelf
//! gigshelf browse paris --year 2023
//!
//! # Print matching gigs
//! gigshelf list club
//! gigshelf list --year 2024 --format json
//! gigshelf -q years
//!
//! # One gig in full
//! gigshelf show paris-2023
//!
//! # Render the static site
//! gigshelf build --out public
//! ```
//!
//! # Configuration
//!
//! Settings live in the user's config directory (`~/.config/gigshelf/config.toml`
//! on Linux) and can be overridden with `GIGSHELF_*` environment variables.
//! Diagnostics are controlled with `--log-level` or `GIGSHELF_LOG`.

use colored::Colorize;
use gigshelf::{
    GigError,
    catalog::Catalog,
    cli::{Cli, Commands},
    commands,
    config::GigshelfConfig,
    ui::StdoutWriter,
};
use std::fs::OpenOptions;
use std::io;
use std::path::{Path, PathBuf};
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

type Result<T> = std::result::Result<T, GigError>;

/// Install the tracing subscriber
///
/// Logs go to `--log-file` when given, otherwise to stderr. Interactive
/// commands get no stderr logging so the terminal UI stays intact.
fn init_logging(cli: &Cli, interactive: bool) -> Result<()> {
    let directive = cli
        .log_level
        .clone()
        .or_else(|| std::env::var("GIGSHELF_LOG").ok())
        .unwrap_or_else(|| "warn".to_string());
    let filter = EnvFilter::try_new(&directive).unwrap_or_else(|_| EnvFilter::new("warn"));

    if let Some(log_file) = &cli.log_file {
        let file = OpenOptions::new().create(true).append(true).open(log_file)?;
        tracing_subscriber::registry()
            .with(filter)
            .with(
                tracing_subscriber::fmt::layer()
                    .with_writer(file)
                    .with_ansi(false),
            )
            .init();
    } else if !interactive {
        tracing_subscriber::registry()
            .with(filter)
            .with(
                tracing_subscriber::fmt::layer()
                    .with_writer(io::stderr)
                    .with_target(false),
            )
            .init();
    }
    Ok(())
}

/// Resolve the config file location, honouring `--config`
fn config_path(cli: &Cli) -> Result<PathBuf> {
    match &cli.config {
        Some(path) => Ok(path.clone()),
        None => Ok(GigshelfConfig::config_path()?),
    }
}

/// Load configuration and apply command-line overrides
fn load_config(cli: &Cli, path: &Path) -> Result<GigshelfConfig> {
    let mut config = GigshelfConfig::load_from(path)?;
    if let Some(data) = &cli.data {
        config.data_path = data.clone();
    }
    if let Some(assets) = &cli.assets {
        config.asset_root = assets.clone();
    }
    Ok(config)
}

fn run(cli: &Cli) -> Result<()> {
    let command = cli.get_command();
    init_logging(cli, command.is_interactive())?;

    let path = config_path(cli)?;
    let config = load_config(cli, &path)?;
    let quiet = cli.quiet || config.quiet;
    let out = StdoutWriter::new(quiet);
    tracing::debug!(config = %path.display(), data = %config.data_path.display(), "configuration loaded");

    let load_catalog = || -> Result<Catalog> {
        let catalog = Catalog::load(&config.data_path)?;
        tracing::info!(records = catalog.len(), "catalog loaded");
        Ok(catalog)
    };

    match command {
        Commands::Browse { query, year } => {
            commands::browse(load_catalog()?, &config, query.as_deref(), year.as_deref())
        }
        Commands::List {
            query,
            year,
            format,
        } => commands::list(
            &load_catalog()?,
            query.as_deref(),
            year.as_deref(),
            format.unwrap_or(config.output_format),
            quiet,
            &out,
        ),
        Commands::Years => commands::years(&load_catalog()?, quiet, &out),
        Commands::Show { id } => {
            commands::show(&load_catalog()?, &config.assets, &id, quiet, &out)
        }
        Commands::Build { out: out_dir } => {
            let out_dir = out_dir.unwrap_or_else(|| config.output_dir.clone());
            commands::build(&load_catalog()?, &config, &out_dir, &out)
        }
        Commands::Config { command } => commands::config(config.clone(), &path, &command, &out),
        Commands::Completions { shell } => {
            commands::completions(shell, &mut io::stdout());
            Ok(())
        }
    }
}

/// Main entry point for the gigshelf application
///
/// Parses arguments, runs the command and exits non-zero on failure.
fn main() {
    let cli = Cli::parse_args();

    if let Err(e) = run(&cli) {
        tracing::error!("{e}");
        eprintln!("{} {}", "Error:".red().bold(), e);
        std::process::exit(1);
    }
}
