//! External command construction.
//!
//! The exact argument shapes matter for compatibility with the wrapped
//! client, so they all live here.

use crate::config::Config;

/// A command understood by the wrapped VPN client.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum VpnCommand {
    /// Query the connection status
    Status,
    /// List available countries
    ListCountries,
    /// List cities available in a country
    ListCities {
        /// Two-letter country code
        country_code: String,
    },
    /// Connect letting the server pick the city
    ConnectCountry {
        /// Two-letter country code
        country_code: String,
    },
    /// Connect to a specific city
    ConnectCity {
        /// Two-letter country code
        country_code: String,
        /// City name exactly as listed
        city: String,
    },
    /// Tear down the current connection
    Disconnect,
}

impl VpnCommand {
    /// Arguments passed to the client binary.
    pub fn client_args(&self) -> Vec<String> {
        match self {
            Self::Status => vec!["--status".to_string()],
            Self::ListCountries => vec!["--country-code".to_string()],
            Self::ListCities { country_code } => vec![
                "--country-code".to_string(),
                country_code.clone(),
                "--city".to_string(),
            ],
            Self::ConnectCountry { country_code } => vec![
                "--connect".to_string(),
                "--country-code".to_string(),
                country_code.clone(),
            ],
            Self::ConnectCity { country_code, city } => vec![
                "--connect".to_string(),
                "--country-code".to_string(),
                country_code.clone(),
                "--city".to_string(),
                city.clone(),
            ],
            Self::Disconnect => vec!["--stop".to_string()],
        }
    }

    /// Whether the client requires elevated privileges for this command.
    ///
    /// Queries run unprivileged; anything that changes connection state
    /// goes through sudo, as the client itself demands.
    pub fn needs_root(&self) -> bool {
        matches!(
            self,
            Self::ConnectCountry { .. } | Self::ConnectCity { .. } | Self::Disconnect
        )
    }

    /// Full argv for the configured binary, including the sudo prefix
    /// when required.
    pub fn command_line(&self, config: &Config) -> Vec<String> {
        let mut argv = Vec::new();
        if config.use_sudo && self.needs_root() {
            argv.push("sudo".to_string());
        }
        argv.push(config.binary.clone());
        argv.extend(self.client_args());
        argv
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn no_sudo_config() -> Config {
        Config {
            use_sudo: false,
            ..Config::default()
        }
    }

    #[test]
    fn test_query_argv_shapes() {
        let config = no_sudo_config();

        assert_eq!(
            VpnCommand::Status.command_line(&config),
            vec!["cyberghostvpn", "--status"]
        );
        assert_eq!(
            VpnCommand::ListCountries.command_line(&config),
            vec!["cyberghostvpn", "--country-code"]
        );
        assert_eq!(
            VpnCommand::ListCities {
                country_code: "US".to_string()
            }
            .command_line(&config),
            vec!["cyberghostvpn", "--country-code", "US", "--city"]
        );
    }

    #[test]
    fn test_connect_argv_shapes() {
        let config = no_sudo_config();

        assert_eq!(
            VpnCommand::ConnectCountry {
                country_code: "US".to_string()
            }
            .command_line(&config),
            vec!["cyberghostvpn", "--connect", "--country-code", "US"]
        );
        assert_eq!(
            VpnCommand::ConnectCity {
                country_code: "US".to_string(),
                city: "New York".to_string()
            }
            .command_line(&config),
            vec![
                "cyberghostvpn",
                "--connect",
                "--country-code",
                "US",
                "--city",
                "New York"
            ]
        );
        assert_eq!(
            VpnCommand::Disconnect.command_line(&config),
            vec!["cyberghostvpn", "--stop"]
        );
    }

    #[test]
    fn test_sudo_prefix_only_for_privileged_commands() {
        let config = Config::default();
        assert!(config.use_sudo);

        assert_eq!(
            VpnCommand::Disconnect.command_line(&config),
            vec!["sudo", "cyberghostvpn", "--stop"]
        );
        // Queries never escalate.
        assert_eq!(
            VpnCommand::Status.command_line(&config),
            vec!["cyberghostvpn", "--status"]
        );
    }

    #[test]
    fn test_needs_root() {
        assert!(!VpnCommand::Status.needs_root());
        assert!(!VpnCommand::ListCountries.needs_root());
        assert!(VpnCommand::Disconnect.needs_root());
        assert!(VpnCommand::ConnectCountry {
            country_code: "DE".to_string()
        }
        .needs_root());
    }

    #[test]
    fn test_custom_binary() {
        let config = Config {
            binary: "/opt/cyberghost/cyberghostvpn".to_string(),
            use_sudo: false,
            ..Config::default()
        };
        assert_eq!(
            VpnCommand::Status.command_line(&config),
            vec!["/opt/cyberghost/cyberghostvpn", "--status"]
        );
    }
}
