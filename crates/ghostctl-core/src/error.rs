//! Error types for ghostctl-core
//!
//! Centralized error handling using `thiserror` for ergonomic error definitions.

use std::io;
use thiserror::Error;

/// Main error type for ghostctl-core operations
#[derive(Error, Debug)]
pub enum Error {
    /// External command could not be spawned or its output captured
    #[error("Failed to execute '{command}': {source}")]
    Execution {
        /// The command line that failed
        command: String,
        /// Underlying I/O failure
        #[source]
        source: io::Error,
    },

    /// External command produced output that is not valid UTF-8
    #[error("Output of '{command}' is not valid UTF-8")]
    OutputNotUtf8 {
        /// The command line whose output could not be decoded
        command: String,
    },

    /// Table data cells do not line up with the expected column count
    #[error(
        "Malformed table: {cell_count} data cells cannot fill rows of {expected_columns} columns"
    )]
    MalformedTable {
        /// Physical column count the parser expected per row
        expected_columns: usize,
        /// Number of data cells actually present
        cell_count: usize,
    },

    /// Invalid configuration value
    #[error("Configuration error: {0}")]
    Config(String),

    /// Configuration file not found
    #[error("Configuration file not found: {path}")]
    ConfigNotFound {
        /// Path to the missing config file
        path: String,
    },

    /// I/O error wrapper
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// TOML parsing error
    #[error("TOML parsing error: {0}")]
    TomlParse(#[from] toml::de::Error),

    /// TOML serialization error
    #[error("TOML serialization error: {0}")]
    TomlSerialize(#[from] toml::ser::Error),
}

/// Result type alias using our Error type
pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    /// Create an execution error for a command line that failed to spawn
    pub fn execution(argv: &[String], source: io::Error) -> Self {
        Self::Execution {
            command: argv.join(" "),
            source,
        }
    }
}
