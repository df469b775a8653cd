//! Config command - configuration management

use anyhow::{Context, Result};
use clap::{Args, Subcommand};
use ghostctl_core::Config;
use std::path::{Path, PathBuf};
use tracing::info;

/// Config command arguments
#[derive(Args, Debug)]
pub struct ConfigArgs {
    #[command(subcommand)]
    pub action: ConfigAction,
}

/// Config subcommands
#[derive(Subcommand, Debug)]
pub enum ConfigAction {
    /// Show the effective configuration
    Show {
        /// Config file to show (default: discover)
        #[arg(short, long)]
        file: Option<PathBuf>,
    },

    /// Generate a configuration file with defaults
    Generate {
        /// Output file path
        #[arg(short, long, default_value = "ghostctl.toml")]
        output: PathBuf,
    },

    /// Validate a configuration file
    Validate {
        /// Config file to validate
        file: PathBuf,
    },

    /// Show config file search locations
    Paths,
}

/// Execute the config command
pub fn execute(args: ConfigArgs) -> Result<()> {
    match args.action {
        ConfigAction::Show { file } => show(file),
        ConfigAction::Generate { output } => generate(&output),
        ConfigAction::Validate { file } => validate(&file),
        ConfigAction::Paths => paths(),
    }
}

fn show(file: Option<PathBuf>) -> Result<()> {
    let config = match file.or_else(find_config_file) {
        Some(path) => Config::load(&path)
            .with_context(|| format!("Failed to load config from {}", path.display()))?,
        None => Config::default(),
    };

    println!("{}", config.to_toml()?);
    Ok(())
}

fn generate(output: &Path) -> Result<()> {
    let config = Config::default();
    let content = format!(
        "# ghostctl configuration\n\
         # All keys are optional; defaults shown.\n\n\
         {}",
        config.to_toml()?
    );

    std::fs::write(output, content)
        .with_context(|| format!("Failed to write config to {}", output.display()))?;

    info!(path = %output.display(), "generated config file");
    println!("Configuration file generated: {}", output.display());
    Ok(())
}

fn validate(file: &Path) -> Result<()> {
    let config = Config::load(file)
        .with_context(|| format!("Failed to load config from {}", file.display()))?;

    config.validate().context("Configuration validation failed")?;

    println!("✓ Configuration is valid");
    println!("  Binary: {}", config.binary);
    println!("  Use sudo: {}", config.use_sudo);
    if let Some(ref code) = config.default_country {
        println!("  Default country: {}", code);
    }

    Ok(())
}

fn paths() -> Result<()> {
    println!("Configuration file search paths:");
    println!();
    println!("  1. ./ghostctl.toml");
    if let Some(dirs) = directories::ProjectDirs::from("", "", "ghostctl") {
        println!("  2. {}/config.toml", dirs.config_dir().display());
    }

    Ok(())
}

/// First config file present in the search path.
pub(crate) fn find_config_file() -> Option<PathBuf> {
    let local = PathBuf::from("ghostctl.toml");
    if local.exists() {
        return Some(local);
    }

    if let Some(dirs) = directories::ProjectDirs::from("", "", "ghostctl") {
        let path = dirs.config_dir().join("config.toml");
        if path.exists() {
            return Some(path);
        }
    }

    None
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_generate_then_validate() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("ghostctl.toml");

        generate(&path).unwrap();
        validate(&path).unwrap();

        let config = Config::load(&path).unwrap();
        assert_eq!(config.binary, "cyberghostvpn");
    }
}
