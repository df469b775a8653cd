//! Disconnect command

use anyhow::Result;
use clap::Args;
use colored::Colorize;
use ghostctl_core::prompt::Prompter;
use ghostctl_core::{Config, VpnClient};

use crate::exec::ShellGateway;
use crate::prompt::TermPrompter;

/// Disconnect command arguments
#[derive(Args, Debug)]
pub struct DisconnectArgs {
    /// Skip the confirmation prompt
    #[arg(short = 'y', long)]
    pub yes: bool,
}

/// Execute the disconnect command
pub fn execute(args: DisconnectArgs, config: Config) -> Result<()> {
    if !args.yes {
        let mut prompter = TermPrompter::new();
        if !prompter.confirm("Disconnect from the current server?")? {
            println!("Staying connected.");
            return Ok(());
        }
    }

    let client = VpnClient::new(config, ShellGateway::new());
    client.disconnect()?;

    println!("{}", "VPN connection closed".green());
    Ok(())
}
