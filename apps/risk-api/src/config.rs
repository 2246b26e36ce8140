use clap::Parser;
use std::net::{IpAddr, SocketAddr};
use thiserror::Error;

/// Port the calculator has always been served on.
pub const DEFAULT_PORT: u16 = 5001;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("invalid listen host '{host}': expected an IP address")]
    InvalidHost { host: String },
}

/// Server settings, read from flags, the environment, or a `.env` file.
#[derive(Debug, Clone, Parser)]
#[command(name = "risk-api", version, about = "FAIR-lite and SVCC risk calculator API")]
pub struct ServerConfig {
    /// Address to bind
    #[arg(long, env = "RISK_API_HOST", default_value = "127.0.0.1")]
    pub host: String,

    /// Port to bind
    #[arg(long, env = "RISK_API_PORT", default_value_t = DEFAULT_PORT)]
    pub port: u16,
}

impl ServerConfig {
    pub fn socket_addr(&self) -> Result<SocketAddr, ConfigError> {
        let ip: IpAddr = self
            .host
            .trim()
            .parse()
            .map_err(|_| ConfigError::InvalidHost {
                host: self.host.clone(),
            })?;
        Ok(SocketAddr::new(ip, self.port))
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "127.0.0.1".to_string(),
            port: DEFAULT_PORT,
        }
    }
}
