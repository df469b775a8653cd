//! ghostctl
//!
//! Interactive command-line front-end for the CyberGhost VPN client.

mod args;
mod commands;
mod exec;
mod logging;
mod prompt;

use anyhow::Result;
use clap::Parser;
use tracing::error;

use args::Args;

fn main() -> Result<()> {
    // Parse command line arguments
    let args = Args::parse();

    // Initialize logging
    logging::init(&args)?;

    // The banner only belongs in front of the interactive flow.
    if args.command.is_none() && !args.quiet {
        print_banner();
    }

    // Run the main logic
    let result = run(args);

    if let Err(ref e) = result {
        error!("Fatal error: {:#}", e);
    }

    result
}

fn run(mut args: Args) -> Result<()> {
    use commands::Command;

    let command = args.command.take();
    match command {
        Some(Command::Connect(connect_args)) => {
            let config = commands::load_config(&args)?;
            commands::connect::execute(connect_args, config)
        }
        Some(Command::Status) => {
            let config = commands::load_config(&args)?;
            commands::status::execute(config)
        }
        Some(Command::Countries) => {
            let config = commands::load_config(&args)?;
            commands::list::countries(config)
        }
        Some(Command::Cities(cities_args)) => {
            let config = commands::load_config(&args)?;
            commands::list::cities(cities_args, config)
        }
        Some(Command::Disconnect(disconnect_args)) => {
            let config = commands::load_config(&args)?;
            commands::disconnect::execute(disconnect_args, config)
        }
        Some(Command::Config(config_args)) => commands::config::execute(config_args),
        Some(Command::Completions(completions_args)) => {
            commands::completions::execute(completions_args)
        }
        None => {
            // Default: the full interactive flow.
            let config = commands::load_config(&args)?;
            commands::connect::run_interactive(config)
        }
    }
}

fn print_banner() {
    use colored::Colorize;

    println!();
    println!(
        "{} {}",
        "ghostctl".green().bold(),
        env!("CARGO_PKG_VERSION")
    );
    println!("Interactive front-end for the CyberGhost VPN client");
    println!();
}
