//! # ghostctl Core
//!
//! Terminal-independent core for the ghostctl VPN front-end.
//!
//! ## Architecture
//!
//! This crate provides:
//! - **Table parsing** - converts the client's bordered text tables into records
//! - **Selection flow** - the status/list/select/connect state machine
//! - **Command gateway** - the boundary to the external client binary
//! - **Configuration** - TOML-backed settings
//!
//! ## Example
//!
//! ```rust
//! use ghostctl_core::model::Country;
//! use ghostctl_core::table;
//!
//! # fn main() -> ghostctl_core::Result<()> {
//! let listing = "\
//! +-----+--------------+--------------+
//! | No. | Country Name | Country Code |
//! +-----+--------------+--------------+
//! |  1  |    Austria   |      AT      |
//! +-----+--------------+--------------+
//! ";
//!
//! let rows = table::parse(listing, 2)?;
//! let countries: Vec<Country> = rows.iter().map(Country::from_row).collect();
//! assert_eq!(countries[0].code, "AT");
//! # Ok(())
//! # }
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod client;
pub mod command;
pub mod config;
pub mod error;
pub mod flow;
pub mod gateway;
pub mod model;
pub mod prompt;
pub mod table;

// Re-exports for convenience
pub use client::VpnClient;
pub use command::VpnCommand;
pub use config::Config;
pub use error::{Error, Result};
pub use flow::{Outcome, NO_CONNECTION_PREFIX};
pub use gateway::CommandGateway;
pub use model::{City, Country, TableRow, BEST_LABEL};
pub use prompt::Prompter;
