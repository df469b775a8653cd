//! Status command - connection status passthrough

use anyhow::Result;
use colored::Colorize;
use ghostctl_core::{Config, VpnClient, NO_CONNECTION_PREFIX};

use crate::exec::ShellGateway;

/// Execute the status command
pub fn execute(config: Config) -> Result<()> {
    let client = VpnClient::new(config, ShellGateway::new());
    let status = client.status()?;
    let status = status.trim_end();

    if status.starts_with(NO_CONNECTION_PREFIX) {
        println!("{}", status.yellow());
    } else {
        println!("{}", status.green());
    }

    Ok(())
}
