//! Typed facade over the command gateway.
//!
//! Builds the exact client command, executes it through the gateway and
//! parses listing output into records, preserving table order.

use crate::command::VpnCommand;
use crate::config::Config;
use crate::error::Result;
use crate::gateway::CommandGateway;
use crate::model::{City, Country};
use crate::table;
use tracing::debug;

/// Semantic column counts of the client's listing tables.
const COUNTRY_TABLE_COLUMNS: usize = 2;
const CITY_TABLE_COLUMNS: usize = 3;

/// Typed interface to the wrapped VPN client.
pub struct VpnClient<G> {
    config: Config,
    gateway: G,
}

impl<G: CommandGateway> VpnClient<G> {
    /// Create a client around a gateway.
    pub fn new(config: Config, gateway: G) -> Self {
        Self { config, gateway }
    }

    /// Free-text connection status.
    pub fn status(&self) -> Result<String> {
        self.run(&VpnCommand::Status)
    }

    /// Countries available for connection, in table order.
    pub fn countries(&self) -> Result<Vec<Country>> {
        let text = self.run(&VpnCommand::ListCountries)?;
        let rows = table::parse(&text, COUNTRY_TABLE_COLUMNS)?;
        Ok(rows.iter().map(Country::from_row).collect())
    }

    /// Cities available in a country, in table order.
    pub fn cities(&self, country: &Country) -> Result<Vec<City>> {
        let text = self.run(&VpnCommand::ListCities {
            country_code: country.code.clone(),
        })?;
        let rows = table::parse(&text, CITY_TABLE_COLUMNS)?;
        Ok(rows.iter().map(City::from_row).collect())
    }

    /// Connect letting the server pick the best city.
    pub fn connect_country(&self, country: &Country) -> Result<String> {
        self.run(&VpnCommand::ConnectCountry {
            country_code: country.code.clone(),
        })
    }

    /// Connect to a specific city.
    pub fn connect_city(&self, country: &Country, city: &City) -> Result<String> {
        self.run(&VpnCommand::ConnectCity {
            country_code: country.code.clone(),
            city: city.name.clone(),
        })
    }

    /// Tear down the current connection.
    pub fn disconnect(&self) -> Result<String> {
        self.run(&VpnCommand::Disconnect)
    }

    fn run(&self, command: &VpnCommand) -> Result<String> {
        let argv = command.command_line(&self.config);
        debug!(command = %argv.join(" "), "executing client command");
        self.gateway.execute(&argv)
    }
}
