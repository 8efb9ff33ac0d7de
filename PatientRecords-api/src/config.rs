//! Process configuration read from the environment

use std::env;
use std::net::{IpAddr, Ipv4Addr, SocketAddr};
use std::path::PathBuf;

use thiserror::Error;

/// Configuration error types
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Invalid port in {var}: {value:?}")]
    InvalidPort { var: &'static str, value: String },

    #[error("Invalid host address: {0:?}")]
    InvalidHost(String),
}

/// Address a server binds to
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    pub host: IpAddr,
    pub port: u16,
}

impl ServerConfig {
    /// Read `HOST` and the given port variable, falling back to `default_port`
    pub fn from_env(port_var: &'static str, default_port: u16) -> Result<Self, ConfigError> {
        Self::from_lookup(|key| env::var(key).ok(), port_var, default_port)
    }

    fn from_lookup(
        lookup: impl Fn(&str) -> Option<String>,
        port_var: &'static str,
        default_port: u16,
    ) -> Result<Self, ConfigError> {
        let host = match lookup("HOST") {
            Some(host) => host.parse().map_err(|_| ConfigError::InvalidHost(host))?,
            None => IpAddr::V4(Ipv4Addr::UNSPECIFIED),
        };

        let port = match lookup(port_var) {
            Some(value) => value.parse().map_err(|_| ConfigError::InvalidPort {
                var: port_var,
                value,
            })?,
            None => default_port,
        };

        Ok(Self { host, port })
    }

    pub fn socket_addr(&self) -> SocketAddr {
        SocketAddr::new(self.host, self.port)
    }
}

/// Configuration of the patient records service
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub server: ServerConfig,

    /// Directory holding the patient document
    pub data_dir: PathBuf,

    /// The patient document itself
    pub patients_file: PathBuf,
}

impl AppConfig {
    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let server = ServerConfig::from_lookup(&lookup, "PORT", 3000)?;

        let data_dir = PathBuf::from(lookup("DATA_DIR").unwrap_or_else(|| "data".to_string()));
        let patients_file = lookup("PATIENTS_FILE")
            .map(PathBuf::from)
            .unwrap_or_else(|| data_dir.join("patients.json"));

        Ok(Self {
            server,
            data_dir,
            patients_file,
        })
    }
}

/// Port settings of the hello world demo
pub fn hello_server_config() -> Result<ServerConfig, ConfigError> {
    ServerConfig::from_env("HELLO_PORT", 3001)
}
