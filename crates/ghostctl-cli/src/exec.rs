//! Subprocess execution of client commands.

use ghostctl_core::error::{Error, Result};
use ghostctl_core::gateway::CommandGateway;
use std::process::Command;
use tracing::{debug, warn};

/// Gateway that spawns the client binary as a child process and waits
/// for it to finish, capturing its output.
#[derive(Debug, Default, Clone, Copy)]
pub struct ShellGateway;

impl ShellGateway {
    /// Create a gateway.
    pub fn new() -> Self {
        Self
    }
}

impl CommandGateway for ShellGateway {
    fn execute(&self, argv: &[String]) -> Result<String> {
        let (program, rest) = argv
            .split_first()
            .ok_or_else(|| Error::Config("empty command line".to_string()))?;

        debug!(command = %argv.join(" "), "spawning");

        let output = Command::new(program)
            .args(rest)
            .output()
            .map_err(|source| Error::execution(argv, source))?;

        let stdout = decode(&output.stdout, argv)?;
        let stderr = decode(&output.stderr, argv)?;

        // The client reports its own failures as stderr text; that text
        // is a result for the caller to interpret, not a failure here.
        if !stderr.trim().is_empty() {
            warn!(command = %argv.join(" "), "client wrote to stderr");
            return Ok(stderr);
        }

        Ok(stdout)
    }
}

fn decode(bytes: &[u8], argv: &[String]) -> Result<String> {
    String::from_utf8(bytes.to_vec()).map_err(|_| Error::OutputNotUtf8 {
        command: argv.join(" "),
    })
}
