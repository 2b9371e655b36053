//! Config command
//!
//! Manage the comments tool configuration.

use anyhow::{Context, Result};
use clap::Subcommand;
use colored::Colorize;
use comments_core::config::Config;
use std::path::Path;

/// Config subcommands
#[derive(Debug, Subcommand)]
pub enum ConfigCommand {
    /// Show current configuration
    Show {
        /// Show as JSON
        #[arg(long)]
        json: bool,
    },

    /// Print the configuration file location
    Path,

    /// Reset to default configuration
    Reset {
        /// Force reset without confirmation
        #[arg(long)]
        force: bool,
    },
}

/// Execute the config command
pub fn execute(cmd: ConfigCommand, path: &Path) -> Result<()> {
    match cmd {
        ConfigCommand::Show { json } => show_config(path, json),
        ConfigCommand::Path => {
            println!("{}", path.display());
            Ok(())
        }
        ConfigCommand::Reset { force } => reset_config(path, force),
    }
}

fn show_config(path: &Path, as_json: bool) -> Result<()> {
    if !path.exists() {
        eprintln!(
            "{} No configuration at {}, showing defaults.",
            "⚠".yellow(),
            path.display()
        );
    }
    let config = Config::load_or_default(path)
        .with_context(|| format!("Failed to load {}", path.display()))?;

    if as_json {
        println!("{}", serde_json::to_string_pretty(&config)?);
    } else {
        print!("{}", config.to_toml()?);
    }

    // Surface bad flag names here rather than at query time.
    if let Err(e) = config.query() {
        eprintln!("{} {}", "✗".red(), e);
    }
    Ok(())
}

fn reset_config(path: &Path, force: bool) -> Result<()> {
    if !force && path.exists() {
        use dialoguer::Confirm;

        let confirmed = Confirm::new()
            .with_prompt("Reset configuration to defaults?")
            .default(false)
            .interact()?;

        if !confirmed {
            println!("Reset cancelled.");
            return Ok(());
        }
    }

    Config::default()
        .save(path)
        .with_context(|| format!("Failed to write {}", path.display()))?;

    println!("{} Configuration reset to defaults at {}", "✓".green(), path.display());
    Ok(())
}
