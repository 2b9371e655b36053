//! CLI commands module
//!
//! This module contains all CLI command implementations.

pub mod check;
pub mod config;
pub mod inspect;
pub mod query;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use comments_core::config::Config;
use std::io::Read;
use std::path::{Path, PathBuf};

/// comments - inspect and check artifact comment payloads
#[derive(Debug, Parser)]
#[command(name = "comments")]
#[command(version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Configuration file path
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    #[command(subcommand)]
    pub command: Commands,
}

/// Available commands
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Decode a comment payload and print it
    Inspect(inspect::InspectArgs),

    /// Check a comment payload against model invariants
    Check(check::CheckArgs),

    /// Build the query string for a comment listing request
    Query(query::QueryArgs),

    /// Manage configuration
    #[command(subcommand)]
    Config(config::ConfigCommand),
}

/// Run the CLI application
pub fn run() -> Result<()> {
    let cli = Cli::parse();

    // Set up logging based on verbosity
    setup_logging(cli.verbose);

    if cli.no_color {
        colored::control::set_override(false);
    }

    let config_path = cli.config.clone().unwrap_or_else(default_config_path);

    match cli.command {
        Commands::Inspect(args) => inspect::execute(args, &load_config(&config_path)?),
        Commands::Check(args) => check::execute(args),
        Commands::Query(args) => query::execute(args, &load_config(&config_path)?),
        Commands::Config(cmd) => config::execute(cmd, &config_path),
    }
}

fn setup_logging(verbosity: u8) {
    use tracing_subscriber::EnvFilter;

    let filter = match verbosity {
        0 => EnvFilter::new("warn"),
        1 => EnvFilter::new("info"),
        2 => EnvFilter::new("debug"),
        _ => EnvFilter::new("trace"),
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}

/// Platform config location, or `.comments/config.toml` when none is known
pub fn default_config_path() -> PathBuf {
    directories::ProjectDirs::from("com", "artifact-comments", "comments")
        .map(|dirs| dirs.config_dir().join("config.toml"))
        .unwrap_or_else(|| PathBuf::from(".comments/config.toml"))
}

fn load_config(path: &Path) -> Result<Config> {
    Config::load_or_default(path)
        .with_context(|| format!("Failed to load configuration from {}", path.display()))
}

/// Read a payload from a file, or from stdin when the path is `-`
pub fn read_payload(path: &Path) -> Result<String> {
    if path == Path::new("-") {
        let mut buf = String::new();
        std::io::stdin()
            .read_to_string(&mut buf)
            .context("Failed to read payload from stdin")?;
        return Ok(buf);
    }
    tracing::info!("Reading payload from {}", path.display());
    std::fs::read_to_string(path).with_context(|| format!("Failed to read {}", path.display()))
}
