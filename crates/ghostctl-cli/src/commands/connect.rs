//! Connect command - the interactive selection flow

use anyhow::{Context, Result};
use clap::Args;
use colored::Colorize;
use ghostctl_core::flow::{self, Outcome};
use ghostctl_core::model::{City, Country};
use ghostctl_core::{Config, VpnClient};
use tracing::info;

use crate::exec::ShellGateway;
use crate::prompt::TermPrompter;

/// Connect command arguments
#[derive(Args, Debug)]
pub struct ConnectArgs {
    /// Country code to connect to (skips the country menu)
    #[arg(long, value_name = "CC")]
    pub country_code: Option<String>,

    /// City to connect to (requires --country-code)
    #[arg(long, value_name = "CITY", requires = "country_code")]
    pub city: Option<String>,
}

/// Execute the connect command
pub fn execute(args: ConnectArgs, config: Config) -> Result<()> {
    // A target on the command line (or in the config) skips the menus.
    let target = args
        .country_code
        .clone()
        .or_else(|| config.default_country.clone());

    match target {
        Some(code) => connect_direct(config, &code, args.city.as_deref()),
        None => run_interactive(config),
    }
}

/// Run the full interactive flow: status, menus, connect or disconnect.
pub fn run_interactive(config: Config) -> Result<()> {
    let client = VpnClient::new(config, ShellGateway::new());
    let mut prompter = TermPrompter::new();

    let outcome = flow::run(&client, &mut prompter).context("Selection flow failed")?;
    report(&outcome);
    Ok(())
}

fn connect_direct(config: Config, code: &str, city: Option<&str>) -> Result<()> {
    let client = VpnClient::new(config, ShellGateway::new());
    let country = Country {
        code: code.to_uppercase(),
        name: String::new(),
    };

    match city {
        Some(name) => {
            let city = City {
                name: name.to_string(),
                instance: String::new(),
                load: String::new(),
            };
            client
                .connect_city(&country, &city)
                .with_context(|| format!("Failed to connect to {} / {}", country.code, city.name))?;
            info!(country = %country.code, city = %city.name, "connect issued");
        }
        None => {
            client
                .connect_country(&country)
                .with_context(|| format!("Failed to connect to {}", country.code))?;
            info!(country = %country.code, "connect issued");
        }
    }

    println!();
    println!("{}", "VPN connection established".green());
    Ok(())
}

fn report(outcome: &Outcome) {
    match outcome {
        Outcome::Connected { country, city } => {
            match city {
                Some(city) => info!(country = %country.code, city = %city.name, "connected"),
                None => info!(country = %country.code, "connected via best server"),
            }
            println!();
            println!("{}", "VPN connection established".green());
        }
        Outcome::Disconnected => {
            println!();
            println!("{}", "VPN connection closed".green());
        }
        Outcome::DeclinedDisconnect => {
            println!("Staying connected.");
        }
        Outcome::Aborted => {
            println!("Nothing to do.");
        }
    }
}
