//! Receiver configuration settings and environment variable handling

use std::collections::HashMap;
use std::env;
use std::net::{IpAddr, Ipv4Addr, SocketAddr};

// Configuration constants
pub const DEFAULT_SERVER_PORT: u16 = 8000;
pub const DEFAULT_CACHE_WIDTH: usize = 10;
pub const MIN_CACHE_WIDTH: usize = 1;
pub const MAX_CACHE_WIDTH: usize = 10_000;
pub const DEFAULT_LOGGING_LEVEL: &str = "info";
pub const DEFAULT_LOG_DIR: &str = "logs";
pub const DEFAULT_MAX_BODY_BYTES: usize = 16 * 1024 * 1024;

#[derive(Debug, Clone)]
pub struct Config {
    pub server_ip: IpAddr,
    pub server_port: u16,
    /// Number of hook records retained per hook token
    pub cache_width: usize,
    pub logging_level: String,
    pub log_dir: String,
    pub max_body_bytes: usize,
}

impl Default for Config {
    fn default() -> Self {
        Self::from_lookup(|_| None)
    }
}

impl Config {
    pub fn load() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    pub fn from_map(vars: &HashMap<String, String>) -> Self {
        Self::from_lookup(|key| vars.get(key).cloned())
    }

    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        Self {
            server_ip: lookup("SERVER_IP")
                .and_then(|s| s.trim().parse().ok())
                .unwrap_or(IpAddr::V4(Ipv4Addr::UNSPECIFIED)),
            server_port: lookup("SERVER_PORT")
                .and_then(|s| s.trim().parse().ok())
                .unwrap_or(DEFAULT_SERVER_PORT),
            cache_width: lookup("CACHE_WIDTH")
                .and_then(|s| s.trim().parse().ok())
                .unwrap_or(DEFAULT_CACHE_WIDTH)
                .max(MIN_CACHE_WIDTH)
                .min(MAX_CACHE_WIDTH),
            logging_level: lookup("LOGGING_LEVEL")
                .map(|s| s.trim().to_lowercase())
                .filter(|s| !s.is_empty())
                .unwrap_or_else(|| DEFAULT_LOGGING_LEVEL.to_string()),
            log_dir: lookup("LOG_DIR")
                .filter(|s| !s.trim().is_empty())
                .unwrap_or_else(|| DEFAULT_LOG_DIR.to_string()),
            max_body_bytes: lookup("MAX_BODY_BYTES")
                .and_then(|s| s.trim().parse().ok())
                .unwrap_or(DEFAULT_MAX_BODY_BYTES),
        }
    }

    pub fn bind_addr(&self) -> SocketAddr {
        SocketAddr::new(self.server_ip, self.server_port)
    }
}
