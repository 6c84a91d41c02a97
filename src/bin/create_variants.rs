//! Regenerates `variants.json` and `variants.txt` from `suits.json`.
//!
//! Existing variant ids are preserved; the run aborts without touching any
//! file if a previously published variant would disappear.

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use hanabi_variants::config::{DataPaths, find_data_dir, resolve_data_dir};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(
    name = "create-variants",
    about = "Regenerate the Hanabi variant catalog with stable ids",
    version
)]
struct Cli {
    /// Directory holding suits.json, variants.json and variants.txt, or a
    /// checkout containing data/. Without it, HANABI_DATA_DIR and an upward
    /// search are tried.
    #[arg(long)]
    data_dir: Option<PathBuf>,

    /// Suit catalog to read (defaults to <data-dir>/suits.json)
    #[arg(long)]
    suits: Option<PathBuf>,

    /// Variant catalog to read and overwrite (defaults to <data-dir>/variants.json)
    #[arg(long)]
    variants: Option<PathBuf>,

    /// Name listing to write (defaults to <data-dir>/variants.txt)
    #[arg(long)]
    listing: Option<PathBuf>,

    /// Generate and check for regressions without writing anything
    #[arg(long)]
    dry_run: bool,

    /// Log level; overrides RUST_LOG
    #[arg(long)]
    log_level: Option<LogLevel>,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum LogLevel {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

impl LogLevel {
    fn as_directive(self) -> &'static str {
        match self {
            LogLevel::Error => "error",
            LogLevel::Warn => "warn",
            LogLevel::Info => "info",
            LogLevel::Debug => "debug",
            LogLevel::Trace => "trace",
        }
    }
}

fn main() {
    if let Err(err) = run() {
        eprintln!("{err:#}");
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.log_level);

    let paths = resolve_paths(&cli)?;
    let summary = hanabi_variants::run(&paths, cli.dry_run)?;
    if summary.written {
        println!(
            "Wrote {} variants ({} new) to {}",
            summary.total,
            summary.introduced.len(),
            paths.variants.display()
        );
    } else {
        println!(
            "Dry run: {} variants ({} new); nothing written",
            summary.total,
            summary.introduced.len()
        );
    }
    Ok(())
}

fn init_tracing(level: Option<LogLevel>) {
    let filter = match level {
        Some(level) => EnvFilter::new(level.as_directive()),
        None => EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}

fn resolve_paths(cli: &Cli) -> Result<DataPaths> {
    let explicit = cli.suits.is_some() && cli.variants.is_some() && cli.listing.is_some();
    let data_dir = match &cli.data_dir {
        Some(dir) => resolve_data_dir(dir),
        None if explicit => PathBuf::from("."),
        None => find_data_dir().context("resolving data directory")?,
    };
    let defaults = DataPaths::in_dir(&data_dir);
    Ok(DataPaths {
        suits: cli.suits.clone().unwrap_or(defaults.suits),
        variants: cli.variants.clone().unwrap_or(defaults.variants),
        listing: cli.listing.clone().unwrap_or(defaults.listing),
    })
}
