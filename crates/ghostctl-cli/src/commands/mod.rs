//! CLI commands

pub mod completions;
pub mod config;
pub mod connect;
pub mod disconnect;
pub mod list;
pub mod status;

use anyhow::{Context, Result};
use clap::Subcommand;
use ghostctl_core::Config;

use crate::args::Args;

/// CLI commands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Connect to a server (interactive when no flags are given)
    Connect(connect::ConnectArgs),

    /// Show the client's connection status
    Status,

    /// List available countries
    Countries,

    /// List cities available in a country
    Cities(list::CitiesArgs),

    /// Tear down the current connection
    Disconnect(disconnect::DisconnectArgs),

    /// Configuration management
    Config(config::ConfigArgs),

    /// Generate shell completions
    Completions(completions::CompletionsArgs),
}

/// Resolve the effective configuration: explicit file, discovered file,
/// or defaults, with flag overrides applied last.
pub fn load_config(args: &Args) -> Result<Config> {
    let mut config = if let Some(ref path) = args.config {
        Config::load(path).with_context(|| format!("Failed to load config from {}", path))?
    } else if let Some(path) = config::find_config_file() {
        Config::load(&path)
            .with_context(|| format!("Failed to load config from {}", path.display()))?
    } else {
        Config::default()
    };

    if let Some(ref binary) = args.binary {
        config.binary = binary.clone();
    }
    if args.no_sudo {
        config.use_sudo = false;
    }

    config.validate().context("Invalid configuration")?;
    Ok(config)
}
