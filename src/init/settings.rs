use config::{Config, File};
use serde::Deserialize;
use std::net::{Ipv4Addr, SocketAddr};

use crate::err::Error;

/// Address the server binds to, reachable from outside a container.
pub const BIND_ADDRESS: Ipv4Addr = Ipv4Addr::UNSPECIFIED;

pub const DEFAULT_PORT: u16 = 8080;

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Settings {
    pub port: u16,
}

impl Settings {
    /// Build the settings from defaults, an optional config file, the `PORT`
    /// environment variable and the command line, in that order of precedence
    /// (last one wins).
    ///
    /// # Arguments
    /// * `config_file` - Config file path, `config` (any supported extension) if `None`
    /// * `env_port` - Raw value of the `PORT` environment variable
    /// * `port` - Port given on the command line
    ///
    /// # Returns
    /// * The effective `Settings`
    /// * An error if a source is unreadable or the port is not a valid `u16`
    pub fn new(
        config_file: Option<String>,
        env_port: Option<String>,
        port: Option<u16>,
    ) -> Result<Self, Error> {
        let config_file = config_file.unwrap_or_else(|| String::from("config"));

        let config = Config::builder()
            .set_default("port", DEFAULT_PORT)?
            .add_source(File::with_name(&config_file).required(false))
            .set_override_option("port", env_port)?
            .set_override_option("port", port)?
            .build()?;

        Ok(Settings {
            port: config.get("port")?,
        })
    }

    /// Read the settings from the process environment.
    pub fn from_env(config_file: Option<String>, port: Option<u16>) -> Result<Self, Error> {
        Self::new(config_file, std::env::var("PORT").ok(), port)
    }

    pub fn address(&self) -> SocketAddr {
        SocketAddr::from((BIND_ADDRESS, self.port))
    }

    pub fn print(&self) {
        tracing::info!(address = %BIND_ADDRESS, port = self.port, "Settings loaded");
    }
}
