//! Country and city listing commands

use anyhow::Result;
use clap::Args;
use colored::Colorize;
use ghostctl_core::model::Country;
use ghostctl_core::{Config, VpnClient};

use crate::exec::ShellGateway;

/// Cities command arguments
#[derive(Args, Debug)]
pub struct CitiesArgs {
    /// Two-letter country code
    #[arg(value_name = "CODE")]
    pub code: String,
}

/// Execute the countries command
pub fn countries(config: Config) -> Result<()> {
    let client = VpnClient::new(config, ShellGateway::new());
    let countries = client.countries()?;

    if countries.is_empty() {
        println!("{}", "No countries reported by the client".yellow());
        return Ok(());
    }

    for country in &countries {
        println!("  {}  {}", country.code.cyan(), country.name);
    }
    println!();
    println!("{} countries", countries.len());

    Ok(())
}

/// Execute the cities command
pub fn cities(args: CitiesArgs, config: Config) -> Result<()> {
    let client = VpnClient::new(config, ShellGateway::new());
    let country = Country {
        code: args.code.to_uppercase(),
        name: String::new(),
    };
    let cities = client.cities(&country)?;

    if cities.is_empty() {
        println!("{}", "No cities reported for this country".yellow());
        return Ok(());
    }

    for city in &cities {
        println!(
            "  {}  instance {}  load {}",
            city.name.cyan(),
            city.instance,
            city.load
        );
    }

    Ok(())
}
