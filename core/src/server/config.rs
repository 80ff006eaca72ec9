//! Listener configuration for the classification server.

use crate::error::AppError;
use clap::Parser;
use std::net::{IpAddr, SocketAddr};

pub const DEFAULT_HOST: &str = "127.0.0.1";
pub const DEFAULT_PORT: u16 = 8000;

#[derive(Debug, Clone, Parser)]
#[command(name = "filetype-server")]
#[command(version, about = "Serve data URI classification over HTTP", long_about = None)]
pub struct ServerConfig {
    /// IP address to bind
    #[arg(long, env = "FILETYPE_HOST", default_value = DEFAULT_HOST)]
    pub host: String,

    /// Port to listen on (0 picks a free port)
    #[arg(short, long, env = "FILETYPE_PORT", default_value_t = DEFAULT_PORT)]
    pub port: u16,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: DEFAULT_HOST.to_owned(),
            port: DEFAULT_PORT,
        }
    }
}

impl ServerConfig {
    /// Resolve the configured host and port. The host must be an IP literal.
    pub fn socket_addr(&self) -> Result<SocketAddr, AppError> {
        let ip: IpAddr = self
            .host
            .parse()
            .map_err(|e| AppError::config(format!("Invalid host '{}': {e}", self.host)))?;
        Ok(SocketAddr::new(ip, self.port))
    }
}
