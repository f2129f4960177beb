use std::net::{IpAddr, SocketAddr};
use std::path::PathBuf;

use thiserror::Error;

const DEFAULT_HOST: &str = "0.0.0.0";
const DEFAULT_PORT: &str = "3001";
const DEFAULT_STATIC_DIR: &str = "./dist";

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("Invalid PORT: {0}")]
    InvalidPort(String),

    #[error("Invalid HOST: {0}")]
    InvalidHost(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    pub bind_addr: SocketAddr,
    pub static_dir: PathBuf,
}

impl ServerConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build from any key lookup, falling back to defaults for missing keys
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let host = lookup("HOST").unwrap_or_else(|| DEFAULT_HOST.to_string());
        let port = lookup("PORT").unwrap_or_else(|| DEFAULT_PORT.to_string());
        let static_dir = lookup("STATIC_DIR").unwrap_or_else(|| DEFAULT_STATIC_DIR.to_string());

        let ip: IpAddr = host.parse().map_err(|_| ConfigError::InvalidHost(host))?;
        let port: u16 = port.parse().map_err(|_| ConfigError::InvalidPort(port))?;

        Ok(Self {
            bind_addr: SocketAddr::new(ip, port),
            static_dir: PathBuf::from(static_dir),
        })
    }
}
