//! Interactive selection flow.
//!
//! A linear state machine: check the status, then either walk the
//! country/city selection toward a connect, or offer to disconnect.
//! Every terminal state is returned as an [`Outcome`]; the caller alone
//! decides how to exit the process.
//!
//! Any gateway failure propagates immediately. One external operation
//! is in flight at a time and each is attempted exactly once.

use crate::client::VpnClient;
use crate::error::Result;
use crate::gateway::CommandGateway;
use crate::model::{City, Country, BEST_LABEL};
use crate::prompt::Prompter;
use tracing::{debug, info};

/// Status prefix the client prints when no connection is up.
pub const NO_CONNECTION_PREFIX: &str = "No VPN connections found";

/// Terminal state of one flow run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// A connect command was issued.
    Connected {
        /// The chosen country
        country: Country,
        /// The chosen city; `None` when the server picked (Best)
        city: Option<City>,
    },
    /// The current connection was torn down.
    Disconnected,
    /// The user was connected and chose to stay connected.
    DeclinedDisconnect,
    /// The user left a menu without choosing.
    Aborted,
}

/// Run the flow to a terminal state.
pub fn run<G, P>(client: &VpnClient<G>, prompter: &mut P) -> Result<Outcome>
where
    G: CommandGateway,
    P: Prompter,
{
    let status = client.status()?;

    if status.starts_with(NO_CONNECTION_PREFIX) {
        select_and_connect(client, prompter)
    } else {
        offer_disconnect(client, prompter, &status)
    }
}

/// Connected branch: show the status verbatim, then offer to disconnect.
fn offer_disconnect<G: CommandGateway, P: Prompter>(
    client: &VpnClient<G>,
    prompter: &mut P,
    status: &str,
) -> Result<Outcome> {
    prompter.show(status);

    if !prompter.confirm("Disconnect from the current server?")? {
        debug!("user declined disconnect");
        return Ok(Outcome::DeclinedDisconnect);
    }

    client.disconnect()?;
    info!("disconnect issued");
    Ok(Outcome::Disconnected)
}

/// Disconnected branch: country menu, then city menu, then connect.
fn select_and_connect<G: CommandGateway, P: Prompter>(
    client: &VpnClient<G>,
    prompter: &mut P,
) -> Result<Outcome> {
    let countries = client.countries()?;
    if countries.is_empty() {
        prompter.show("No countries available");
        return Ok(Outcome::Aborted);
    }

    let labels: Vec<String> = countries.iter().map(|c| c.name.clone()).collect();
    let country = match prompter.select_one("Select a country", &labels)? {
        Some(index) => match countries.get(index) {
            Some(country) => country.clone(),
            None => return Ok(Outcome::Aborted),
        },
        None => return Ok(Outcome::Aborted),
    };
    debug!(country = %country.code, "country selected");

    let cities = client.cities(&country)?;

    // A single city needs no menu.
    if cities.len() == 1 {
        let city = cities[0].clone();
        client.connect_city(&country, &city)?;
        info!(country = %country.code, city = %city.name, "connected to only city");
        return Ok(Outcome::Connected {
            country,
            city: Some(city),
        });
    }

    // "*Best*" always leads the menu; with zero cities it is the menu.
    let mut labels = vec![BEST_LABEL.to_string()];
    labels.extend(cities.iter().map(|c| c.name.clone()));

    let choice = match prompter.select_one("Select a city", &labels)? {
        Some(choice) => choice,
        None => return Ok(Outcome::Aborted),
    };

    if choice == 0 {
        client.connect_country(&country)?;
        info!(country = %country.code, "connected, server picks the city");
        return Ok(Outcome::Connected {
            country,
            city: None,
        });
    }

    match cities.get(choice - 1) {
        Some(city) => {
            let city = city.clone();
            client.connect_city(&country, &city)?;
            info!(country = %country.code, city = %city.name, "connected");
            Ok(Outcome::Connected {
                country,
                city: Some(city),
            })
        }
        None => Ok(Outcome::Aborted),
    }
}
