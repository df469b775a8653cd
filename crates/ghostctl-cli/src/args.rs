//! Command-line argument parsing

use crate::commands::Command;
use clap::{Parser, ValueEnum};

/// ghostctl - interactive front-end for the CyberGhost VPN client
///
/// Wraps the cyberghostvpn binary: checks the connection status, parses
/// the country and city listing tables, and drives connect/disconnect
/// from selectable menus. Run without a subcommand for the full
/// interactive flow.
#[derive(Parser, Debug)]
#[command(name = "ghostctl")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Args {
    /// Subcommand to execute (default: interactive flow)
    #[command(subcommand)]
    pub command: Option<Command>,

    /// Configuration file path
    #[arg(short = 'c', long, value_name = "FILE", global = true)]
    pub config: Option<String>,

    /// VPN client binary to wrap (overrides the config file)
    #[arg(long, value_name = "BIN", global = true)]
    pub binary: Option<String>,

    /// Do not prefix privileged commands with sudo
    #[arg(long, global = true)]
    pub no_sudo: bool,

    /// Verbosity level (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Output format for logs
    #[arg(long, value_enum, default_value = "text", global = true)]
    pub log_format: LogFormat,

    /// Log file path
    #[arg(long, value_name = "FILE", global = true)]
    pub log_file: Option<String>,

    /// Run in quiet mode (minimal output)
    #[arg(short, long, global = true)]
    pub quiet: bool,
}

/// Log output format
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum LogFormat {
    /// Human-readable text
    Text,
    /// JSON format
    Json,
    /// Compact format
    Compact,
}
